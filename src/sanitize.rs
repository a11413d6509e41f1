//! Document sanitization.
//!
//! Strips non-content nodes before conversion: scripts, styles, noscript
//! fallbacks, meta tags, stylesheet links, and every comment node. The
//! removal is destructive and one-way; callers that need the original
//! markup afterwards must re-parse from source.

use crate::dom::{self, Document, NodeRef};

/// Elements removed wholesale before any formatting happens.
const UNWANTED_SELECTOR: &str = r#"script, style, noscript, meta, link[rel="stylesheet"]"#;

/// Remove non-content nodes from the document, in place.
///
/// Safe to call on an already-clean tree: removal is idempotent and
/// order-independent for disjoint nodes.
pub fn clean_document(doc: &Document) {
    dom::remove(&doc.select(UNWANTED_SELECTOR));

    let mut comments = Vec::new();
    collect_comments(&doc.root(), &mut comments);
    for comment in comments {
        comment.remove_from_parent();
    }
}

fn collect_comments<'a>(node: &NodeRef<'a>, out: &mut Vec<NodeRef<'a>>) {
    for child in node.children() {
        if child.is_comment() {
            out.push(child);
        } else {
            collect_comments(&child, out);
        }
    }
}
