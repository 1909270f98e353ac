//! Extraction engine capabilities.
//!
//! The harness never runs a readability algorithm itself. It drives an
//! [`Engine`], which provides four capabilities: parsing source bytes into a
//! DOM, extracting an [`Article`], rendering the article subtree back to HTML,
//! and the readerable pre-flight check.
//!
//! `parse` and `render` have provided implementations on top of `dom_query`, so
//! an engine usually only supplies `extract` and `is_readerable`. Tests plug in
//! a deterministic fake; production uses [`SmoothieEngine`].

use std::fmt;

pub use dom_query::Document;
pub use tendril::StrTendril;
use url::Url;

use crate::encoding::decode_source;
use crate::error::{Error, Result};

#[cfg(feature = "readability")]
mod smoothie;

#[cfg(feature = "readability")]
pub use smoothie::SmoothieEngine;

/// Result of running the extraction engine on a document.
///
/// Scalar fields the engine could not determine are empty strings.
pub struct Article {
    /// Extracted content; the article subtree is the content of `<body>`.
    pub content: Document,

    /// Article title.
    pub title: String,

    /// Author line.
    pub byline: String,

    /// Short description or first paragraph.
    pub excerpt: String,

    /// Name of the publishing site.
    pub site_name: String,

    /// Detected content language.
    pub language: String,

    /// Plain text of the extracted content.
    pub text_content: String,

    /// Length of `text_content` in characters.
    pub length: usize,

    /// Lead image URL.
    pub image: String,

    /// Site icon URL.
    pub favicon: String,
}

impl Article {
    /// Article with the given content and no metadata.
    ///
    /// `text_content` and `length` are derived from the content's body text.
    #[must_use]
    pub fn new(content: Document) -> Self {
        let text_content = content.select("body").text().trim().to_string();
        let length = text_content.chars().count();
        Self {
            content,
            title: String::new(),
            byline: String::new(),
            excerpt: String::new(),
            site_name: String::new(),
            language: String::new(),
            text_content,
            length,
            image: String::new(),
            favicon: String::new(),
        }
    }

    /// Article whose content is parsed from an HTML fragment.
    #[must_use]
    pub fn from_html(content_html: &str) -> Self {
        Self::new(Document::from(content_html))
    }
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("content", &self.content.select("body").inner_html().to_string())
            .field("title", &self.title)
            .field("byline", &self.byline)
            .field("excerpt", &self.excerpt)
            .field("site_name", &self.site_name)
            .field("language", &self.language)
            .field("length", &self.length)
            .field("image", &self.image)
            .field("favicon", &self.favicon)
            .finish_non_exhaustive()
    }
}

/// Independent copy of `document`, made by re-parsing its serialization.
#[must_use]
pub fn detached_copy(document: &Document) -> Document {
    Document::from(document.html().to_string())
}

/// Capabilities the harness needs from a readability engine.
pub trait Engine {
    /// Parse raw source bytes into a document.
    ///
    /// Bytes are decoded with charset sniffing before parsing. Input with no
    /// markup at all is rejected, since no engine can extract from it.
    fn parse(&self, source: &[u8]) -> Result<Document> {
        let html = decode_source(source);
        if html.trim().is_empty() {
            return Err(Error::Parse("source document is empty".into()));
        }
        Ok(Document::from(html))
    }

    /// Extract the article from `document`, resolving links against `base_url`.
    ///
    /// Implementations must leave `document` unmodified.
    fn extract(&self, document: &Document, base_url: &Url) -> Result<Article>;

    /// Render the article subtree held in `content`.
    fn render(&self, content: &Document) -> Result<StrTendril> {
        let body = content.select("body");
        if body.length() == 0 {
            return Err(Error::Extraction("article content has no body".into()));
        }
        Ok(body.inner_html())
    }

    /// Whether `document` looks worth extracting at all.
    fn is_readerable(&self, document: &Document) -> bool;
}

impl<E: Engine + ?Sized> Engine for &E {
    fn parse(&self, source: &[u8]) -> Result<Document> {
        (**self).parse(source)
    }

    fn extract(&self, document: &Document, base_url: &Url) -> Result<Article> {
        (**self).extract(document, base_url)
    }

    fn render(&self, content: &Document) -> Result<StrTendril> {
        (**self).render(content)
    }

    fn is_readerable(&self, document: &Document) -> bool {
        (**self).is_readerable(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Engine for Echo {
        fn extract(&self, document: &Document, _base_url: &Url) -> Result<Article> {
            Ok(Article::from_html(&document.select("article").html()))
        }

        fn is_readerable(&self, _document: &Document) -> bool {
            true
        }
    }

    #[test]
    fn default_parse_decodes_and_parses() {
        let doc = Echo
            .parse(b"<html><head><meta charset=\"iso-8859-1\"></head><body><p>Caf\xE9</p></body></html>")
            .expect("parse");
        assert_eq!(doc.select("p").text().to_string(), "Café");
    }

    #[test]
    fn default_parse_rejects_empty_source() {
        assert!(matches!(Echo.parse(b""), Err(Error::Parse(_))));
        assert!(matches!(Echo.parse(b"  \n\t "), Err(Error::Parse(_))));
    }

    #[test]
    fn default_render_emits_body_children() {
        let article = Article::from_html("<div id=\"readability-page-1\" class=\"page\"><p>Hello world</p></div>");
        let html = Echo.render(&article.content).expect("render");
        assert_eq!(
            html.to_string(),
            "<div id=\"readability-page-1\" class=\"page\"><p>Hello world</p></div>"
        );
    }

    #[test]
    fn article_derives_text_and_length() {
        let article = Article::from_html("<p> Hello world </p>");
        assert_eq!(article.text_content, "Hello world");
        assert_eq!(article.length, 11);
        assert!(article.title.is_empty());
        assert!(article.image.is_empty());
        assert!(article.favicon.is_empty());
    }
}
