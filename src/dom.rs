//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate giving the converter and extractor
//! a small, consistent API for attribute access, tag names, text content,
//! and node-level traversal. The host document model stays behind this
//! module; the rest of the crate never touches `dom_query` internals.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value from the first node of a selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value directly from a node.
#[must_use]
pub fn node_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of the first node of a selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_lowercase())
}

/// Get tag name (lowercase) directly from a node.
#[must_use]
pub fn node_tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// 1-based position of `node` among its parent's element children.
///
/// Counting is positional, not sequential: removed siblings shift the
/// index, so an ordered-list item is numbered by where it sits in the
/// tree right now.
#[must_use]
pub fn element_index(node: &NodeRef) -> usize {
    let mut index = 1;
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            index += 1;
        }
        sibling = s.prev_sibling();
    }
    index
}

/// Tag name (lowercase) of the node's parent element, if any.
#[must_use]
pub fn parent_tag(node: &NodeRef) -> Option<String> {
    node.parent().and_then(|p| node_tag_name(&p))
}

// === Querying ===

/// Query all elements by CSS selector.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// Query single element by CSS selector.
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

// === Tree Manipulation ===

/// Remove all elements of a selection from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
