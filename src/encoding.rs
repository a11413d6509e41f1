//! Character encoding detection and transcoding.
//!
//! The byte entry points accept documents in whatever charset the page
//! declares. Detection looks at meta tags in the first chunk of the
//! document and falls back to UTF-8; decoding is lossy, never fatal.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How many leading bytes to scan for a charset declaration.
const DETECTION_WINDOW: usize = 1024;

#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Detect the character encoding declared by an HTML document.
///
/// Matches both `<meta charset="...">` and the `charset=` parameter of
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
/// (the single pattern covers either form). Defaults to UTF-8 when no
/// declaration is found or the label is unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(DETECTION_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with the Unicode replacement character
/// rather than raising an error.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_utf8_declaration() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>x</body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn detects_legacy_charset() {
        // encoding_rs maps ISO-8859-1 to windows-1252 per the WHATWG spec
        let html = br#"<meta charset="ISO-8859-1">"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detects_content_type_charset() {
        let html =
            br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1252">"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body>x</body></html>"), UTF_8);
    }

    #[test]
    fn transcodes_latin1_text() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn invalid_bytes_become_replacement_chars() {
        let html = b"<html><body>ok \xFF\xFE bad</body></html>";
        let text = transcode_to_utf8(html);
        assert!(text.contains("ok"));
        assert!(text.contains("bad"));
    }
}
