//! Extraction Invoker: turn a source document into an article.

use std::fs;

use tracing::debug;

use crate::acquire::SourceDocument;
use crate::engine::{Article, Engine};
use crate::error::{Error, Result};
use crate::url_utils::fixture_base_url;

/// Engine output for one source document.
#[derive(Debug)]
pub struct Extraction {
    pub article: Article,
    /// Readerable verdict on the original document, independent of `article`.
    pub readerable: bool,
}

/// Read, parse and extract `source` with `engine`.
///
/// Extraction always runs against the fixed fixture base URL. The readerable
/// check sees the document as parsed, before extraction touches anything.
/// No retries: a failure here aborts the case.
pub fn invoke<E: Engine + ?Sized>(engine: &E, source: &SourceDocument) -> Result<Extraction> {
    let bytes = fs::read(&source.path).map_err(|e| {
        Error::Parse(format!("failed to open {}: {e}", source.path.display()))
    })?;

    let document = engine.parse(&bytes)?;
    let readerable = engine.is_readerable(&document);
    let article = engine.extract(&document, fixture_base_url())?;

    debug!(
        path = %source.path.display(),
        readerable,
        length = article.length,
        "extracted article"
    );

    Ok(Extraction {
        article,
        readerable,
    })
}
