//! Production engine backed by `dom_smoothie`, a Rust port of Mozilla's
//! Readability.

use dom_smoothie::{Config, Readability};
use url::Url;

use super::{detached_copy, Article, Document, Engine};
use crate::error::{Error, Result};

/// [`Engine`] running `dom_smoothie`'s readability extraction.
///
/// Both extraction and the readerable check work on detached copies of the
/// parsed document, so the caller's document is never rewritten.
#[derive(Debug, Clone, Default)]
pub struct SmoothieEngine {
    config: Config,
}

impl SmoothieEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using a custom readability configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }
}

impl Engine for SmoothieEngine {
    fn extract(&self, document: &Document, base_url: &Url) -> Result<Article> {
        let mut reader = Readability::with_document(
            detached_copy(document),
            Some(base_url.as_str()),
            Some(self.config.clone()),
        )
        .map_err(|e| Error::Extraction(e.to_string()))?;

        let parsed = reader
            .parse()
            .map_err(|e| Error::Extraction(e.to_string()))?;

        let mut article = Article::new(Document::from(parsed.content.to_string()));
        article.title = parsed.title;
        article.byline = parsed.byline.unwrap_or_default();
        article.excerpt = parsed.excerpt.unwrap_or_default();
        article.site_name = parsed.site_name.unwrap_or_default();
        article.language = parsed.lang.unwrap_or_default();
        article.text_content = parsed.text_content.to_string();
        article.length = parsed.length;
        article.image = parsed.image.unwrap_or_default();
        article.favicon = parsed.favicon.unwrap_or_default();
        Ok(article)
    }

    fn is_readerable(&self, document: &Document) -> bool {
        Readability::with_document(detached_copy(document), None, Some(self.config.clone()))
            .map(|reader| reader.is_probably_readable())
            .unwrap_or(false)
    }
}
