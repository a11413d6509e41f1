//! Per-tag formatting rules.
//!
//! One function per tag class, mirroring the dispatch table in the
//! transducer. Inline formatters trim their content and wrap it in the
//! corresponding Markdown markers, returning the untouched content when it
//! trims to nothing. Block formatters pad their output with blank lines;
//! the final normalizer collapses any excess.

use regex::Regex;
use std::sync::LazyLock;

use super::{Context, Converter};
use crate::dom::{self, NodeRef, Selection};

#[allow(clippy::expect_used)]
static LANGUAGE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"language-(\w+)").expect("valid regex"));

pub(super) fn heading(content: &str, level: usize) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("\n\n{} {trimmed}\n\n", "#".repeat(level))
}

pub(super) fn paragraph(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("\n\n{trimmed}\n\n")
}

pub(super) fn horizontal_rule() -> String {
    "\n\n---\n\n".to_string()
}

/// Blank-line padding shared by list, figure, and description-list blocks.
pub(super) fn padded_block(content: &str) -> String {
    format!("\n\n{content}\n\n")
}

fn wrap(content: &str, open: &str, close: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return content.to_string();
    }
    format!("{open}{trimmed}{close}")
}

pub(super) fn strong(content: &str) -> String {
    wrap(content, "**", "**")
}

pub(super) fn emphasis(content: &str) -> String {
    wrap(content, "*", "*")
}

// Markdown has no native underline, keep the tag literally
pub(super) fn underline(content: &str) -> String {
    wrap(content, "<u>", "</u>")
}

pub(super) fn strikethrough(content: &str) -> String {
    wrap(content, "~~", "~~")
}

pub(super) fn highlight(content: &str) -> String {
    wrap(content, "==", "==")
}

pub(super) fn superscript(content: &str) -> String {
    wrap(content, "^", "^")
}

pub(super) fn subscript(content: &str) -> String {
    wrap(content, "~", "~")
}

pub(super) fn inline_code(content: &str) -> String {
    wrap(content, "`", "`")
}

pub(super) fn keyboard(content: &str) -> String {
    wrap(content, "<kbd>", "</kbd>")
}

pub(super) fn sample(content: &str) -> String {
    wrap(content, "`", "`")
}

pub(super) fn variable(content: &str) -> String {
    wrap(content, "*", "*")
}

/// Fenced code block from a `<pre>` element.
///
/// Uses the element's raw text content, not the transduced children, so
/// nested tags inside the block are not re-escaped. The language tag comes
/// from a `language-xxx` class on the element itself or its parent.
pub(super) fn code_block(conv: &Converter, node: &NodeRef) -> String {
    let content = Selection::from(*node).text().to_string();

    if !conv.options.include_code_blocks {
        return format!("\n\n{content}\n\n");
    }

    let language = code_language(node);
    format!("\n\n```{language}\n{content}\n```\n\n")
}

fn code_language(node: &NodeRef) -> String {
    let own = dom::node_attribute(node, "class").unwrap_or_default();
    if let Some(cap) = LANGUAGE_CLASS.captures(&own) {
        return cap[1].to_string();
    }

    if let Some(parent) = node.parent() {
        let parent_class = dom::node_attribute(&parent, "class").unwrap_or_default();
        if let Some(cap) = LANGUAGE_CLASS.captures(&parent_class) {
            return cap[1].to_string();
        }
    }

    String::new()
}

/// List item marker, derived from the parent list kind and tree position.
///
/// Ordered items are numbered by their 1-based position among the parent's
/// element children, so removed siblings renumber the rest.
pub(super) fn list_item(node: &NodeRef, content: &str, ctx: &Context) -> String {
    let trimmed = content.trim();
    let indent = "  ".repeat(ctx.list_depth);

    match dom::parent_tag(node).as_deref() {
        Some("ul") => format!("{indent}- {trimmed}\n"),
        Some("ol") => format!("{indent}{}. {trimmed}\n", dom::element_index(node)),
        _ => trimmed.to_string(),
    }
}

pub(super) fn description_term(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("**{trimmed}**\n")
}

pub(super) fn description_definition(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!(": {trimmed}\n\n")
}

/// Markdown link, falling back to plain content when the anchor is not
/// renderable (no href, empty text, or links disabled).
pub(super) fn link(conv: &Converter, node: &NodeRef, content: &str) -> String {
    if !conv.options.include_links {
        return content.to_string();
    }

    let Some(href) = dom::node_attribute(node, "href") else {
        return content.to_string();
    };
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return content.to_string();
    }

    let url = conv.resolve(&href);
    match dom::node_attribute(node, "title") {
        Some(title) => format!("[{trimmed}]({url} \"{title}\")"),
        None => format!("[{trimmed}]({url})"),
    }
}

pub(super) fn image(conv: &Converter, node: &NodeRef) -> String {
    if !conv.options.include_images {
        return String::new();
    }

    let Some(src) = dom::node_attribute(node, "src") else {
        return String::new();
    };
    let alt = dom::node_attribute(node, "alt").unwrap_or_default();

    let url = conv.resolve(&src);
    match dom::node_attribute(node, "title") {
        Some(title) => format!("![{alt}]({url} \"{title}\")"),
        None => format!("![{alt}]({url})"),
    }
}

pub(super) fn figure_caption(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("\n*{trimmed}*\n")
}

/// Pipe table from a `<table>` element.
///
/// Gathers every `tr` descendant; each row's `td`/`th` cells are rendered
/// under an in-table context, trimmed, internal newlines collapsed to
/// spaces, and literal pipes escaped. A `---` separator row follows the
/// first emitted row. Rows without cells are skipped.
pub(super) fn table(conv: &Converter, node: &NodeRef) -> String {
    if !conv.options.include_tables {
        return String::new();
    }

    let rows = Selection::from(*node).select("tr");
    if rows.length() == 0 {
        return String::new();
    }

    let cell_ctx = Context { list_depth: 0, in_table: true };
    let mut out = String::from("\n\n");
    let mut first_row = true;

    for row in rows.iter() {
        let cells = row.select("td, th");
        if cells.length() == 0 {
            continue;
        }

        let mut rendered: Vec<String> = Vec::new();
        for cell in cells.iter() {
            let Some(cell_node) = cell.nodes().first().copied() else {
                continue;
            };
            let text = conv.convert_children(&cell_node, &cell_ctx);
            rendered.push(text.trim().replace('\n', " ").replace('|', "\\|"));
        }

        out.push_str("| ");
        out.push_str(&rendered.join(" | "));
        out.push_str(" |\n");

        if first_row {
            out.push_str("| ");
            let separator: Vec<&str> = rendered.iter().map(|_| "---").collect();
            out.push_str(&separator.join(" | "));
            out.push_str(" |\n");
            first_row = false;
        }
    }

    out.push_str("\n\n");
    out
}

pub(super) fn blockquote(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let quoted: Vec<String> = trimmed.lines().map(|line| format!("> {}", line.trim())).collect();
    format!("\n\n{}\n\n", quoted.join("\n"))
}

pub(super) fn quote(content: &str) -> String {
    wrap(content, "\"", "\"")
}

pub(super) fn citation(content: &str) -> String {
    wrap(content, "*", "*")
}

/// Text placeholder for an `<input>` element, derived from its attributes.
pub(super) fn input(node: &NodeRef) -> String {
    let kind = dom::node_attribute(node, "type").unwrap_or_else(|| "text".to_string());
    let value = dom::node_attribute(node, "value").unwrap_or_default();
    let placeholder = dom::node_attribute(node, "placeholder").unwrap_or_default();

    if kind == "submit" || kind == "button" {
        let label = if value.is_empty() { "Button" } else { value.as_str() };
        return format!("[{label}]");
    }

    let detail = [value.as_str(), placeholder.as_str(), "input"]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or("input");
    format!("[{kind}: {detail}]")
}

pub(super) fn textarea(node: &NodeRef) -> String {
    let value = Selection::from(*node).text().trim().to_string();
    let placeholder = dom::node_attribute(node, "placeholder").unwrap_or_default();

    let detail = [value.as_str(), placeholder.as_str(), "text area"]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or("text area");
    format!("[textarea: {detail}]")
}

pub(super) fn select(node: &NodeRef) -> String {
    let selected = Selection::from(*node).select_single("option[selected]");
    let text = selected.text().trim().to_string();
    let value = if text.is_empty() { "select".to_string() } else { text };
    format!("[select: {value}]")
}

pub(super) fn button(content: &str) -> String {
    let trimmed = content.trim();
    let label = if trimmed.is_empty() { "Button" } else { trimmed };
    format!("[{label}]")
}

/// Collapsible section, kept as a literal HTML block since Markdown has no
/// native equivalent.
pub(super) fn details(node: &NodeRef, content: &str) -> String {
    let summary = Selection::from(*node).select_single("summary");
    let summary_text = summary.text().trim().to_string();
    let summary_text = if summary_text.is_empty() { "Details".to_string() } else { summary_text };

    format!("\n\n<details>\n<summary>{summary_text}</summary>\n\n{content}\n</details>\n\n")
}

pub(super) fn summary(content: &str) -> String {
    content.trim().to_string()
}
