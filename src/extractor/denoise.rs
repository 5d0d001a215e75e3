//! Denoising passes run before container selection.
//!
//! Both passes remove nodes in place, so callers hand them a working copy
//! (see [`super::Extractor::extract`]) or a document they own.

use crate::dom::{self, Document};

/// What the denoising passes removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenoiseReport {
    /// Elements removed by the tag pass (each removed subtree counts once
    /// per matched element, nested matches included).
    pub tags_removed: usize,

    /// Elements removed by the selector pass.
    pub selectors_removed: usize,

    /// Selectors skipped because they did not compile, in listed order.
    pub invalid_selectors: Vec<String>,
}

impl DenoiseReport {
    /// Total elements removed by both passes.
    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.tags_removed + self.selectors_removed
    }
}

/// Pass 1: remove every element whose tag is in `tags`, descendants included.
///
/// The tags are matched with one combined selector. If that does not
/// compile (a caller put something odd in the list), each tag is tried on
/// its own and the bad ones are skipped.
pub fn remove_junk_tags(doc: &Document, tags: &[String]) -> usize {
    if tags.is_empty() {
        return 0;
    }

    let combined = tags.join(", ");
    if let Some(matcher) = dom::compile(&combined) {
        return dom::remove_matching(doc, &matcher);
    }

    tags.iter()
        .filter_map(|tag| dom::compile(tag))
        .map(|matcher| dom::remove_matching(doc, &matcher))
        .sum()
}

/// Pass 2: for each selector in order, remove every matching element.
///
/// `<html>` and `<body>` survive even when a selector matches them.
///
/// Returns the number of removed elements and the selectors that were
/// skipped because they are not valid CSS.
pub fn remove_junk_selectors(doc: &Document, selectors: &[String]) -> (usize, Vec<String>) {
    let mut removed = 0;
    let mut invalid = Vec::new();

    for selector in selectors {
        let Some(matcher) = dom::compile(selector) else {
            invalid.push(selector.clone());
            continue;
        };
        removed += dom::remove_matching(doc, &matcher);
    }

    (removed, invalid)
}

/// Run both passes in order.
pub fn denoise(doc: &Document, tags: &[String], selectors: &[String]) -> DenoiseReport {
    let tags_removed = remove_junk_tags(doc, tags);
    let (selectors_removed, invalid_selectors) = remove_junk_selectors(doc, selectors);

    tracing::debug!(
        tags_removed,
        selectors_removed,
        invalid = invalid_selectors.len(),
        "denoised document"
    );

    DenoiseReport {
        tags_removed,
        selectors_removed,
        invalid_selectors,
    }
}
