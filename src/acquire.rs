//! Source Acquirer: resolve a test case to its `source.html`.
//!
//! Whether the existing file is reused or a fresh copy is downloaded depends
//! on two inputs only, captured by [`SourcePlan::decide`]:
//!
//! | `source.html` exists | URL supplied | plan       |
//! |----------------------|--------------|------------|
//! | yes                  | no           | `Reuse`    |
//! | yes                  | yes          | `Download` |
//! | no                   | yes          | `Download` |
//! | no                   | no           | `Missing`  |

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};
use url::Url;

use crate::case::TestCase;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::serialize::replace_file;

/// What to do about a test case's source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePlan<'a> {
    /// Use `source.html` as it is; no network access.
    Reuse,
    /// Download from the URL and overwrite `source.html`.
    Download(&'a Url),
    /// No file and nothing to download it from.
    Missing,
}

impl<'a> SourcePlan<'a> {
    #[must_use]
    pub fn decide(source_exists: bool, source_url: Option<&'a Url>) -> Self {
        match (source_exists, source_url) {
            (true, None) => Self::Reuse,
            (_, Some(url)) => Self::Download(url),
            (false, None) => Self::Missing,
        }
    }
}

/// How the source document came to be on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Already present and reused verbatim.
    Existing,
    /// Freshly downloaded; `status` is the HTTP status of the response.
    Downloaded { status: u16 },
}

/// A source document resolved on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub origin: SourceOrigin,
}

impl SourceDocument {
    #[must_use]
    pub fn was_downloaded(&self) -> bool {
        matches!(self.origin, SourceOrigin::Downloaded { .. })
    }
}

/// Resolve the source document of `case`, downloading it when the plan says so.
///
/// A download is written to a temporary file, synced and renamed over
/// `source.html`, so a failed fetch or write leaves any previous copy intact.
/// The body is saved whatever the HTTP status.
pub fn acquire<F: Fetcher + ?Sized>(
    fetcher: &F,
    case: &TestCase,
    source_url: Option<&Url>,
) -> Result<SourceDocument> {
    let path = case.source_path();

    match SourcePlan::decide(case.has_source(), source_url) {
        SourcePlan::Reuse => {
            debug!(name = case.name(), path = %path.display(), "reusing existing source");
            Ok(SourceDocument {
                path,
                origin: SourceOrigin::Existing,
            })
        }
        SourcePlan::Missing => Err(Error::MissingSource(path)),
        SourcePlan::Download(url) => {
            info!(name = case.name(), %url, "downloading source");
            let page = fetcher.fetch(url)?;

            fs::create_dir_all(case.dir()).map_err(|source| Error::Storage {
                path: case.dir().to_path_buf(),
                source,
            })?;
            replace_file(&path, &page.body).map_err(|source| Error::Storage {
                path: path.clone(),
                source,
            })?;

            debug!(name = case.name(), path = %path.display(), bytes = page.body.len(), "saved source");
            Ok(SourceDocument {
                path,
                origin: SourceOrigin::Downloaded {
                    status: page.status,
                },
            })
        }
    }
}
