//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset is taken, in order, from a
//! byte-order mark, the HTTP `Content-Type` header, a `<meta charset>`
//! tag, or a `<meta http-equiv="Content-Type">` tag, and defaults to
//! UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Only this many leading bytes are scanned for meta declarations.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match the `charset=` parameter of a `Content-Type` value
#[allow(clippy::expect_used)]
static CONTENT_TYPE_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Detect the encoding of an HTML body.
///
/// `content_type` is the HTTP `Content-Type` header when the bytes came
/// from a response.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    if let Some(encoding) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// The `charset` parameter of a `Content-Type` value, if any.
#[must_use]
pub fn charset_param(content_type: &str) -> Option<String> {
    CONTENT_TYPE_PARAM_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use news_digest::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html, None).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, _used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
