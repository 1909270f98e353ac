//! URL Utility Functions
//!
//! Validation of operator-supplied source URLs and the fixed base URL every
//! fixture is extracted against.

use std::sync::LazyLock;
use url::Url;

use crate::error::{Error, Result};

/// Base URL handed to the extraction engine for every test case.
///
/// Relative links in fixtures resolve against this host, so extraction output
/// never depends on where a page was originally downloaded from.
pub const FIXTURE_BASE_URL: &str = "http://fakehost/test/page.html";

/// Parsed form of [`FIXTURE_BASE_URL`], built once.
#[allow(clippy::expect_used)]
static BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(FIXTURE_BASE_URL).expect("valid base URL"));

/// The synthetic base URL shared by every test case.
#[must_use]
pub fn fixture_base_url() -> &'static Url {
    &BASE_URL
}

/// Validate a source URL supplied on the command line.
///
/// The input must be an absolute `http` or `https` URL with a host. Anything
/// else is rejected before any network or filesystem access.
///
/// # Examples
///
/// ```
/// use readability_fixtures::url_utils::validate_source_url;
///
/// assert!(validate_source_url("https://example.com/post/1").is_ok());
/// assert!(validate_source_url("not-a-url").is_err());
/// ```
pub fn validate_source_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    let invalid = |reason: &str| Error::Validation {
        url: input.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("URL is empty"));
    }

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(&format!("unsupported scheme `{other}`"))),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host"));
    }

    Ok(url)
}
