//! Source download over HTTP.
//!
//! The [`Fetcher`] trait is the harness's only route to the network. The
//! production [`HttpFetcher`] owns an explicitly built blocking `reqwest`
//! client; nothing about it is process-global.
//!
//! A response is returned whatever its status code. Only transport failures
//! (DNS, refused connection, timeout, a body that cannot be read to the end)
//! are errors, and in that case no bytes are handed back.

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};

/// Body and status of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedPage {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Downloads source documents.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        (**self).fetch(url)
    }
}

/// [`Fetcher`] issuing a single plain GET per download.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let fetch_error = |e: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            message: describe(&e),
        };

        let response = self.client.get(url.as_str()).send().map_err(fetch_error)?;
        let status = response.status();
        let body = response.bytes().map_err(fetch_error)?.to_vec();

        if status.is_success() {
            debug!(%url, status = status.as_u16(), bytes = body.len(), "fetched source");
        } else {
            warn!(%url, status = status.as_u16(), bytes = body.len(), "source responded with non-success status; saving body anyway");
        }

        Ok(FetchedPage {
            status: status.as_u16(),
            body,
        })
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    }
}
