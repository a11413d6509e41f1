//! HTML to Markdown conversion engine.
//!
//! A recursive tree transducer: the document is sanitized once, then every
//! node is visited in document order and dispatched by tag name to a
//! formatter, threading a small immutable context (list nesting depth and
//! table membership) through the recursion. The concatenated output goes
//! through a final normalization pass.

pub mod handlers;
pub mod normalize;

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::{sanitize, url_utils};

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Positional state threaded through the recursive conversion.
///
/// Contexts are immutable per call: a child derives its own value from the
/// parent's, siblings never observe each other's state. `in_table` is
/// monotonic — once a table is entered every descendant sees it set.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context {
    /// How many `li` ancestors enclose the current node.
    pub list_depth: usize,
    /// Whether a `table` ancestor encloses the current node.
    pub in_table: bool,
}

impl Context {
    fn root() -> Self {
        Self { list_depth: 0, in_table: false }
    }

    /// Context for the children of an element with the given tag.
    fn descend(self, tag: &str) -> Self {
        Self {
            list_depth: self.list_depth + usize::from(tag == "li"),
            in_table: self.in_table || tag == "table",
        }
    }
}

/// One conversion run: options plus the parsed base URL for link resolution.
pub(crate) struct Converter<'a> {
    pub(crate) options: &'a Options,
    base: Option<Url>,
}

impl<'a> Converter<'a> {
    pub(crate) fn new(options: &'a Options) -> Result<Self> {
        let base = match options.url.as_deref() {
            Some(raw) => Some(
                url_utils::parse_base_url(raw)
                    .ok_or_else(|| Error::InvalidBaseUrl(raw.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { options, base })
    }

    /// Sanitize the document and convert it to normalized Markdown.
    ///
    /// Mutates the tree (sanitization is destructive); callers that need
    /// the original markup afterwards must re-parse from source.
    pub(crate) fn convert_document(&self, doc: &Document) -> String {
        sanitize::clean_document(doc);

        let body = doc.select("body");
        let root = body
            .nodes()
            .first()
            .copied()
            .or_else(|| doc.select("html").nodes().first().copied());

        let markdown = match root {
            Some(node) => self.convert_children(&node, &Context::root()),
            None => String::new(),
        };

        normalize::clean_markdown(&markdown)
    }

    /// Concatenate the converted text of a node's children in document order.
    pub(crate) fn convert_children(&self, node: &NodeRef, ctx: &Context) -> String {
        let mut out = String::new();

        for child in node.children() {
            if child.is_text() {
                let text = child.text();
                if !text.trim().is_empty() || ctx.in_table {
                    out.push_str(&self.process_text(&text, ctx));
                }
            } else if child.is_element() {
                out.push_str(&self.convert_element(&child, ctx));
            }
        }

        out
    }

    fn process_text(&self, text: &str, ctx: &Context) -> String {
        if ctx.in_table {
            // Even whitespace-only cells matter for column alignment, but
            // line breaks inside a cell would break the row
            return WHITESPACE_RUN.replace_all(text, " ").into_owned();
        }

        if self.options.preserve_whitespace {
            text.to_string()
        } else {
            WHITESPACE_RUN.replace_all(text, " ").into_owned()
        }
    }

    fn convert_element(&self, node: &NodeRef, ctx: &Context) -> String {
        let tag = dom::node_tag_name(node).unwrap_or_default();
        let content = self.convert_children(node, &ctx.descend(&tag));

        match tag.as_str() {
            // Headings
            "h1" => handlers::heading(&content, 1),
            "h2" => handlers::heading(&content, 2),
            "h3" => handlers::heading(&content, 3),
            "h4" => handlers::heading(&content, 4),
            "h5" => handlers::heading(&content, 5),
            "h6" => handlers::heading(&content, 6),

            // Paragraphs and breaks
            "p" => handlers::paragraph(&content),
            "br" => "\n".to_string(),
            "hr" => handlers::horizontal_rule(),

            // Text formatting
            "strong" | "b" => handlers::strong(&content),
            "em" | "i" => handlers::emphasis(&content),
            "u" => handlers::underline(&content),
            "del" | "s" | "strike" => handlers::strikethrough(&content),
            "mark" => handlers::highlight(&content),
            "sup" => handlers::superscript(&content),
            "sub" => handlers::subscript(&content),

            // Code
            "code" => handlers::inline_code(&content),
            "pre" => handlers::code_block(self, node),
            "kbd" => handlers::keyboard(&content),
            "samp" => handlers::sample(&content),
            "var" => handlers::variable(&content),

            // Lists
            "ul" | "ol" | "dl" => handlers::padded_block(&content),
            "li" => handlers::list_item(node, &content, ctx),
            "dt" => handlers::description_term(&content),
            "dd" => handlers::description_definition(&content),

            // Links and media
            "a" => handlers::link(self, node, &content),
            "img" => handlers::image(self, node),
            "figure" => handlers::padded_block(&content),
            "figcaption" => handlers::figure_caption(&content),

            // Tables; the section elements inside pass content through
            "table" => handlers::table(self, node),
            "thead" | "tbody" | "tfoot" | "tr" | "th" | "td" => content,

            // Quotes and citations
            "blockquote" => handlers::blockquote(&content),
            "q" => handlers::quote(&content),
            "cite" => handlers::citation(&content),

            // Structure and inline containers: transparent passthrough
            "div" | "section" | "article" | "main" | "header" | "footer" | "nav" | "aside"
            | "address" | "span" | "small" | "time" | "abbr" | "acronym" | "label" => content,

            // Form elements become text placeholders
            "input" => handlers::input(node),
            "textarea" => handlers::textarea(node),
            "select" => handlers::select(node),
            "button" => handlers::button(&content),

            // Collapsible sections
            "details" => handlers::details(node, &content),
            "summary" => handlers::summary(&content),

            // Unknown tags pass their content through unchanged
            _ => content,
        }
    }

    /// Resolve a link or image URL against the document origin.
    pub(crate) fn resolve(&self, url_str: &str) -> String {
        url_utils::resolve_url(url_str, self.base.as_ref())
    }
}

/// Convert an HTML string to Markdown with the given options.
pub(crate) fn convert_html(html: &str, options: &Options) -> Result<String> {
    let converter = Converter::new(options)?;
    let doc = dom::parse(html);
    Ok(converter.convert_document(&doc))
}
