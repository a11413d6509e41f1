//! URL utilities.
//!
//! Relative link and image resolution for the converter, plus a filename
//! sanitization helper for hosts that persist converter output. Resolution
//! is deliberately narrow: only protocol-relative and root-relative forms
//! are rewritten, everything else passes through untouched.

use url::Url;

/// Resolve a link or image URL the way the converter needs it.
///
/// Protocol-relative URLs (`//cdn.example.com/x`) get an `https:` scheme.
/// Root-relative URLs (`/path`) are resolved against the origin of `base`
/// when one is available, and left unchanged otherwise. Absolute URLs and
/// other relative forms are returned as-is.
#[must_use]
pub fn resolve_url(url_str: &str, base: Option<&Url>) -> String {
    if let Some(rest) = url_str.strip_prefix("//") {
        return format!("https://{rest}");
    }

    if url_str.starts_with('/') {
        if let Some(base) = base {
            return format!("{}{}", origin(base), url_str);
        }
    }

    url_str.to_string()
}

/// Scheme + host (+ non-default port) of a URL, without a trailing slash.
#[must_use]
pub fn origin(base: &Url) -> String {
    base.origin().ascii_serialization()
}

/// Parse a caller-supplied page URL, requiring an absolute URL with a host.
#[must_use]
pub fn parse_base_url(url_str: &str) -> Option<Url> {
    let trimmed = url_str.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok().filter(|u| u.host().is_some())
}

/// Hostname of a URL string, or empty when the URL is not parseable.
#[must_use]
pub fn domain_of(url_str: &str) -> String {
    parse_base_url(url_str)
        .and_then(|u| u.host_str().map(std::string::ToString::to_string))
        .unwrap_or_default()
}

/// Turn a page title into a safe filename stem.
///
/// Strips the characters that are invalid on common filesystems, collapses
/// whitespace runs to a single underscore, and caps the result at 100
/// characters.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for ch in name.chars() {
        if matches!(ch, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') {
            continue;
        }
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push('_');
            pending_space = false;
        }
        out.push(ch);
        if out.chars().count() >= 100 {
            break;
        }
    }

    out.chars().take(100).collect()
}
