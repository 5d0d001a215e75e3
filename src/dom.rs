//! DOM operations adapter
//!
//! Thin helpers over `dom_query` used by the extractor. Selector strings
//! coming from [`crate::Options`] are user-supplied, so everything here
//! compiles them through [`compile`] instead of the panicking
//! `Document::select`.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

pub use tendril::StrTendril;

/// Parse HTML string into document.
///
/// Parsing is lenient: malformed markup is repaired by html5ever and
/// `<html>`, `<head>` and `<body>` are always synthesized.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Deep-copy a document by serializing and reparsing it.
///
/// The copy shares no nodes with `doc`, so removals on it never touch the
/// original.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html())
}

/// Compile a CSS selector, returning `None` when it is not valid syntax.
#[must_use]
pub fn compile(selector: &str) -> Option<Matcher> {
    match Matcher::new(selector) {
        Ok(matcher) => Some(matcher),
        Err(err) => {
            tracing::debug!(selector, error = ?err, "skipping invalid selector");
            None
        }
    }
}

/// First element matching `selector` in document order, if any.
///
/// Invalid selectors yield `None`.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let matcher = compile(selector)?;
    let found = doc.select_matcher(&matcher).first();
    found.exists().then_some(found)
}

/// The document's `<body>` element, if present.
#[must_use]
pub fn body(doc: &Document) -> Option<Selection<'_>> {
    let body = doc.select_single("body");
    body.exists().then_some(body)
}

/// Detach every element matched by `matcher`, descendants included, and
/// return how many were detached.
///
/// `<html>` and `<body>` are never detached even when they match: the
/// body is the fallback container, and class hooks like `has-sidebar` or
/// `modal-open` routinely land on the root elements.
pub fn remove_matching(doc: &Document, matcher: &Matcher) -> usize {
    let matched = doc.select_matcher(matcher);
    let mut removed = 0;
    for node in matched.nodes() {
        if matches!(node.node_name().as_deref(), Some("html" | "body")) {
            continue;
        }
        node.remove_from_parent();
        removed += 1;
    }
    removed
}

/// Get tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get all text content of the selection and its descendants.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}
