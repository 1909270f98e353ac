//! Configuration options for fixture generation.
//!
//! The `Options` struct controls where test cases live and how long a source
//! download may take.

use std::path::PathBuf;
use std::time::Duration;

/// Default directory holding one sub-directory per test case.
pub const DEFAULT_ROOT: &str = "test-pages";

/// Default client-side timeout for source downloads.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration options for the fixture harness.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use readability_fixtures::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     root: "fixtures/pages".into(),
///     fetch_timeout: Duration::from_secs(10),
/// };
/// assert_eq!(options.root.to_str(), Some("fixtures/pages"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory containing the test case directories.
    ///
    /// Default: `test-pages`
    pub root: PathBuf,

    /// Timeout applied to each source download.
    ///
    /// Covers connecting, sending the request and reading the whole body.
    ///
    /// Default: 60 seconds
    pub fetch_timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}
