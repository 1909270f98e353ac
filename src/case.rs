//! On-disk layout of a single test case.
//!
//! A test case is a named directory under the fixture root holding the source
//! document and the expected-output pair generated from it.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Raw input document, downloaded or supplied by hand.
pub const SOURCE_FILE: &str = "source.html";

/// Rendered article subtree.
pub const EXPECTED_HTML_FILE: &str = "expected.html";

/// Metadata record for the extracted article.
pub const EXPECTED_METADATA_FILE: &str = "expected-metadata.json";

/// A named test case and the directory it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    name: String,
    dir: PathBuf,
}

impl TestCase {
    /// Resolve `name` under `root`.
    ///
    /// The name is used as a single path segment, so it must be non-empty and
    /// must not contain separators or refer to `.`/`..`.
    pub fn new(root: &Path, name: &str) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            dir: root.join(name),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.dir.join(SOURCE_FILE)
    }

    #[must_use]
    pub fn expected_html_path(&self) -> PathBuf {
        self.dir.join(EXPECTED_HTML_FILE)
    }

    #[must_use]
    pub fn expected_metadata_path(&self) -> PathBuf {
        self.dir.join(EXPECTED_METADATA_FILE)
    }

    /// Whether `source.html` exists as a regular file.
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source_path().is_file()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Usage("test name must be defined".into()));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::Usage(format!(
            "test name `{name}` must be a single directory name"
        )));
    }
    Ok(())
}
