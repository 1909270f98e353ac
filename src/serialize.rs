//! Fixture Serializer: write the expected-output pair for a test case.
//!
//! Each file is written to a temporary sibling, synced and renamed into
//! place, so the previous fixture is replaced whole or not at all. The two
//! files are not one transaction: if the metadata write fails, the freshly
//! written `expected.html` stays.

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::case::TestCase;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::extract::Extraction;
use crate::result::FixtureMetadata;

/// Replace `path` with `contents`, syncing before the rename.
pub(crate) fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(".fixture-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write `expected.html` and `expected-metadata.json` for `case`.
pub fn write_fixture<E: Engine + ?Sized>(
    engine: &E,
    extraction: &Extraction,
    case: &TestCase,
) -> Result<()> {
    let html_path = case.expected_html_path();
    let html = engine
        .render(&extraction.article.content)
        .map_err(|e| serialization_error(&html_path, e))?;
    replace_file(&html_path, html.as_bytes()).map_err(|e| serialization_error(&html_path, e))?;
    debug!(path = %html_path.display(), bytes = html.len(), "wrote expected html");

    let metadata_path = case.expected_metadata_path();
    let json = FixtureMetadata::from_article(&extraction.article, extraction.readerable)
        .to_json()
        .map_err(|e| serialization_error(&metadata_path, e))?;
    replace_file(&metadata_path, &json).map_err(|e| serialization_error(&metadata_path, e))?;
    debug!(path = %metadata_path.display(), bytes = json.len(), "wrote expected metadata");

    Ok(())
}

fn serialization_error(file: &Path, cause: impl std::fmt::Display) -> Error {
    Error::Serialization {
        file: file.to_path_buf(),
        message: cause.to_string(),
    }
}
