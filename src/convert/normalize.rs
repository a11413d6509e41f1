//! Final Markdown cleanup pass.
//!
//! Applied once to the fully concatenated output. The pass is idempotent:
//! running it again over its own output produces no further change, so a
//! host can safely re-normalize stored documents.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    // A run of four or more newlines, tolerating horizontal whitespace on
    // the blank lines in between.
    Regex::new(r"\n(?:[ \t]*\n){3,}").expect("valid regex")
});

#[allow(clippy::expect_used)]
static BOLD_INNER_WS: LazyLock<Regex> = LazyLock::new(|| {
    // Whitespace hugging the inside of a `**…**` pair. Matching the pair,
    // not the marker, keeps whitespace outside the markers intact.
    Regex::new(r"\*\*[ \t]*([^*\n]+?)[ \t]*\*\*").expect("valid regex")
});

#[allow(clippy::expect_used)]
static EM_INNER_WS: LazyLock<Regex> = LazyLock::new(|| {
    // The leading guard keeps this off the tail of a `**` marker.
    Regex::new(r"(^|[^*\n])\*[ \t]*([^*\n]+?)[ \t]*\*").expect("valid regex")
});

#[allow(clippy::expect_used)]
static BLANK_BEFORE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}-").expect("valid regex"));

#[allow(clippy::expect_used)]
static BLANK_BEFORE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}(\d+\.)").expect("valid regex"));

#[allow(clippy::expect_used)]
static TRAILING_LINE_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid regex"));

/// Normalize concatenated Markdown output.
///
/// In order: collapse runs of four or more newlines to exactly two, strip
/// whitespace immediately inside `**…**` and `*…*` emphasis pairs, pull
/// list markers up against the preceding line (no blank line between a
/// paragraph and the list that follows it), strip trailing whitespace from
/// every line, and trim the document.
#[must_use]
pub fn clean_markdown(markdown: &str) -> String {
    let pass = EXCESS_NEWLINES.replace_all(markdown, "\n\n");
    let pass = BOLD_INNER_WS.replace_all(&pass, "**${1}**");
    let pass = EM_INNER_WS.replace_all(&pass, "${1}*${2}*");
    let pass = BLANK_BEFORE_DASH.replace_all(&pass, "\n-");
    let pass = BLANK_BEFORE_NUMBER.replace_all(&pass, "\n$1");
    let pass = TRAILING_LINE_WS.replace_all(&pass, "");
    pass.trim().to_string()
}
