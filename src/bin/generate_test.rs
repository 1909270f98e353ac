//! Generate expected readability output for test pages.
//!
//! ```text
//! generate-test <test-name>               regenerate, reusing source.html
//! generate-test <test-name> <source-url>  download source.html first
//! generate-test all                       regenerate every case with a source.html
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use readability_fixtures::logging::init_logging;
use readability_fixtures::{Harness, HttpFetcher, Options, SmoothieEngine, DEFAULT_ROOT};
use tracing::info;

/// Name that selects batch regeneration instead of a single case.
const ALL_CASES: &str = "all";

#[derive(Parser)]
#[command(name = "generate-test")]
#[command(about = "Generate expected readability output for test pages")]
struct Cli {
    /// Test case name, or `all` to regenerate every case that has a source.html
    test_name: String,

    /// Download source.html from this URL, replacing any existing copy
    source_url: Option<String>,

    /// Directory holding the test case directories
    #[arg(long, env = "FIXTURES_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Timeout for source downloads, in seconds
    #[arg(long, env = "FIXTURES_FETCH_TIMEOUT", default_value_t = 60)]
    timeout_secs: u64,
}

/// What one invocation regenerates.
#[derive(Debug, PartialEq, Eq)]
enum Mode<'a> {
    All,
    Case { name: &'a str, source_url: Option<&'a str> },
}

impl Cli {
    /// Apply the argument rules clap cannot express.
    fn mode(&self) -> Result<Mode<'_>> {
        if self.test_name.is_empty() {
            bail!("test name must be defined");
        }
        if self.test_name == ALL_CASES {
            if self.source_url.is_some() {
                bail!("`{ALL_CASES}` does not take a source URL");
            }
            return Ok(Mode::All);
        }
        Ok(Mode::Case {
            name: &self.test_name,
            source_url: self.source_url.as_deref(),
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging("info");

    let mode = cli.mode()?;
    let options = Options {
        root: cli.root.clone(),
        fetch_timeout: Duration::from_secs(cli.timeout_secs),
    };
    let fetcher = HttpFetcher::new(options.fetch_timeout)?;
    let harness = Harness::new(SmoothieEngine::new(), fetcher, options);

    match mode {
        Mode::All => {
            let report = harness
                .run_all()
                .context("failed to regenerate test cases")?;
            info!(cases = report.cases.len(), "done");
        }
        Mode::Case { name, source_url } => {
            let outcome = harness.run_case(name, source_url)?;
            info!(
                name = %outcome.name,
                downloaded = outcome.downloaded,
                readerable = outcome.readerable,
                "done"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("generate-test").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn single_case_with_and_without_url() {
        let cli = parse(&["wikipedia"]);
        assert_eq!(
            cli.mode().expect("mode"),
            Mode::Case { name: "wikipedia", source_url: None }
        );

        let cli = parse(&["wikipedia", "https://en.wikipedia.org/wiki/Rust"]);
        assert_eq!(
            cli.mode().expect("mode"),
            Mode::Case {
                name: "wikipedia",
                source_url: Some("https://en.wikipedia.org/wiki/Rust"),
            }
        );
    }

    #[test]
    fn all_selects_batch() {
        assert_eq!(parse(&["all"]).mode().expect("mode"), Mode::All);
    }

    #[test]
    fn all_rejects_source_url() {
        let err = parse(&["all", "https://example.com/"]).mode().expect_err("all with URL");
        assert!(err.to_string().contains("does not take a source URL"));
    }

    #[test]
    fn empty_test_name_is_rejected() {
        let err = parse(&[""]).mode().expect_err("empty name");
        assert_eq!(err.to_string(), "test name must be defined");
    }

    #[test]
    fn missing_or_extra_arguments_are_usage_errors() {
        let bin = ["generate-test"];
        assert!(Cli::try_parse_from(bin).is_err());
        assert!(Cli::try_parse_from(["generate-test", "a", "https://example.com/", "extra"]).is_err());
    }

    #[test]
    fn root_and_timeout_flags() {
        let cli = parse(&["--root", "fixtures", "--timeout-secs", "5", "page"]);
        assert_eq!(cli.root, PathBuf::from("fixtures"));
        assert_eq!(cli.timeout_secs, 5);
    }
}
