//! Character decoding for source documents.
//!
//! Downloaded pages are stored as raw bytes. Before they can be parsed they
//! are decoded to UTF-8 using, in order: a byte order mark, a charset declared
//! in the first kilobyte of markup, and finally UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of markup searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Matches both `<meta charset="...">` and the `http-equiv` form, whose
/// `content` attribute carries `...; charset=...`.
#[allow(clippy::expect_used)]
static DECLARED_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9._:-]+)"#)
        .expect("valid regex")
});

/// Encoding declared by the document itself, ignoring any BOM.
///
/// A declaration found by scanning ASCII markup can never mean UTF-16, so
/// UTF-16 labels map to UTF-8 and `x-user-defined` to windows-1252, as in the
/// HTML prescan.
#[must_use]
pub fn declared_encoding(source: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&source[..source.len().min(SNIFF_LEN)]);
    let label = DECLARED_CHARSET_RE.captures(&head)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes()).map(Encoding::output_encoding)
}

/// Decode raw source bytes to a UTF-8 string.
///
/// Malformed sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use readability_fixtures::encoding::decode_source;
///
/// let html = b"<meta charset=\"iso-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_source(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_source(source: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(source) {
        let (text, _) = encoding.decode_without_bom_handling(&source[bom_len..]);
        return text.into_owned();
    }

    let encoding = declared_encoding(source).unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(source);
    text.into_owned()
}
