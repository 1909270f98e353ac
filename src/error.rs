//! Error types for readability-fixtures.
//!
//! Every failure the harness can hit is a variant of [`Error`]. Stage-level
//! failures are wrapped in [`Error::Case`] so the operator can see which test
//! case and which stage failed, and re-run that case on its own.

use std::fmt;
use std::path::PathBuf;

/// Pipeline stage a case-level error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reusing or downloading `source.html`.
    Acquire,
    /// Parsing the source and running the extraction engine.
    Extract,
    /// Writing `expected.html` and `expected-metadata.json`.
    Serialize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Acquire => "acquire source",
            Self::Extract => "extract article",
            Self::Serialize => "write fixture",
        })
    }
}

/// Error type for fixture generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong invocation: bad argument count, empty or unusable test name.
    #[error("usage error: {0}")]
    Usage(String),

    /// A supplied source URL is not an absolute http(s) URL.
    #[error("URL {url} is not valid: {reason}")]
    Validation { url: String, reason: String },

    /// The HTTP client itself could not be set up.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Network-level failure while downloading a source document.
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// `source.html` does not exist and no URL was given to download it from.
    #[error("{} does not exist and no source URL was given", .0.display())]
    MissingSource(PathBuf),

    /// The downloaded source could not be stored on disk.
    #[error("failed to save source {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source document could not be read or parsed.
    #[error("failed to parse source: {0}")]
    Parse(String),

    /// The extraction engine declined or failed to produce an article.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// A fixture file could not be rendered, written or synced.
    #[error("failed to write {}: {message}", .file.display())]
    Serialization { file: PathBuf, message: String },

    /// Filesystem failure outside a single test case (e.g. reading the batch root).
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stage failure attributed to a named test case.
    #[error("failed to generate test for {name} ({stage}): {source}")]
    Case {
        name: String,
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach test case identity and stage to a stage-level error.
    pub(crate) fn in_case(self, name: &str, stage: Stage) -> Self {
        Self::Case {
            name: name.to_string(),
            stage,
            source: Box::new(self),
        }
    }

    /// Name of the test case this error is attributed to, if any.
    #[must_use]
    pub fn case_name(&self) -> Option<&str> {
        match self {
            Self::Case { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Innermost error, with any case wrapping removed.
    #[must_use]
    pub fn root(&self) -> &Error {
        match self {
            Self::Case { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for fixture operations.
pub type Result<T> = std::result::Result<T, Error>;
