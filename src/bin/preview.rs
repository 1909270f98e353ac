//! Fetch a page and print what the readability engine extracts from it.
//!
//! Handy for eyeballing a page before turning it into a test case.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use readability_fixtures::logging::init_logging;
use readability_fixtures::url_utils::validate_source_url;
use readability_fixtures::{Engine, Fetcher, HttpFetcher, SmoothieEngine};

#[derive(Parser)]
#[command(name = "readability-preview")]
#[command(about = "Print the article readability extracts from a URL")]
struct Cli {
    /// Page to fetch
    url: String,

    /// Timeout for the download, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging("warn");

    let url = validate_source_url(&cli.url)?;
    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout_secs))?;
    let page = fetcher.fetch(&url)?;

    let engine = SmoothieEngine::new();
    let document = engine.parse(&page.body)?;
    let article = engine
        .extract(&document, &url)
        .with_context(|| format!("failed to parse {url}"))?;

    println!("URL     : {url}");
    println!("Title   : {}", article.title);
    println!("Author  : {}", article.byline);
    println!("Length  : {}", article.length);
    println!("Excerpt : {}", article.excerpt);
    println!("SiteName: {}", article.site_name);
    println!("Image   : {}", article.image);
    println!("Favicon : {}", article.favicon);
    println!();
    println!("{}", article.text_content);

    Ok(())
}
