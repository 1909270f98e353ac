//! Shared fakes for the harness integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use readability_fixtures::engine::Document;
use readability_fixtures::{
    Article, Engine, Error, FetchedPage, Fetcher, Harness, Options, Result,
};
use url::Url;

/// Deterministic engine: the article is the content of the first `<article>`.
///
/// Title comes from `<title>`, byline from `<meta name="author">`, language
/// from `<html lang>`. A document without `<article>` fails extraction and is
/// not readerable.
pub struct FakeEngine;

impl Engine for FakeEngine {
    fn extract(&self, document: &Document, _base_url: &Url) -> Result<Article> {
        let node = document.select("article");
        if node.length() == 0 {
            return Err(Error::Extraction("no <article> element".into()));
        }

        let mut article = Article::from_html(&node.inner_html());
        article.title = document.select("title").text().trim().to_string();
        article.byline = document
            .select("meta[name=author]")
            .attr("content")
            .map(|s| s.to_string())
            .unwrap_or_default();
        article.language = document
            .select("html")
            .attr("lang")
            .map(|s| s.to_string())
            .unwrap_or_default();
        Ok(article)
    }

    fn is_readerable(&self, document: &Document) -> bool {
        document.select("article").length() > 0
    }
}

/// Fetcher returning a canned response and recording every request.
pub struct StubFetcher {
    status: u16,
    body: Vec<u8>,
    fail: bool,
    calls: RefCell<Vec<Url>>,
}

impl StubFetcher {
    pub fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            fail: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok("")
        }
    }

    pub fn calls(&self) -> Vec<Url> {
        self.calls.borrow().clone()
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        self.calls.borrow_mut().push(url.clone());
        if self.fail {
            return Err(Error::Fetch {
                url: url.to_string(),
                message: "connection refused".into(),
            });
        }
        Ok(FetchedPage {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub fn harness<'a>(root: &Path, fetcher: &'a StubFetcher) -> Harness<FakeEngine, &'a StubFetcher> {
    let options = Options {
        root: root.to_path_buf(),
        ..Options::default()
    };
    Harness::new(FakeEngine, fetcher, options)
}

/// Create `root/name/source.html` with `html`, returning its path.
pub fn write_source(root: &Path, name: &str, html: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("create case dir");
    let path = dir.join("source.html");
    fs::write(&path, html).expect("write source");
    path
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

pub const HELLO_WORLD: &str = "<html><body><article><p>Hello world</p></article></body></html>";
