//! Metadata record written next to each expected article.
//!
//! This is the JSON shape the comparison suite reads back from
//! `expected-metadata.json`.

use serde::{Deserialize, Serialize};

use crate::engine::Article;

/// Scalar article metadata plus the readerable verdict.
///
/// Field order is the serialization order. Empty strings are left out of the
/// JSON object; `readerable` is always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureMetadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub byline: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub excerpt: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_name: String,

    pub readerable: bool,
}

impl FixtureMetadata {
    /// Project an article's scalar fields.
    #[must_use]
    pub fn from_article(article: &Article, readerable: bool) -> Self {
        Self {
            title: article.title.clone(),
            byline: article.byline.clone(),
            excerpt: article.excerpt.clone(),
            language: article.language.clone(),
            site_name: article.site_name.clone(),
            readerable,
        }
    }

    /// Pretty JSON with four-space indentation and no trailing newline.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        Ok(out)
    }
}
