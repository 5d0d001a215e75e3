//! Article-root selection.

use serde::Serialize;

use crate::dom::{self, Document, Selection};

/// Where the chosen container came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainerSource {
    /// Matched a configured container selector.
    Selector {
        /// Position in the priority list.
        index: usize,
        /// The selector text that matched.
        selector: String,
    },
    /// No selector matched; the document body was used.
    Body,
    /// No selector matched and the document has no body.
    None,
}

/// Pick the article root: first selector in `priority` with a match wins,
/// then `<body>`.
///
/// Within one selector the first element in document order is taken.
/// Invalid selectors are skipped like non-matching ones.
#[must_use]
pub fn select_container<'a>(
    doc: &'a Document,
    priority: &[String],
) -> (Option<Selection<'a>>, ContainerSource) {
    for (index, selector) in priority.iter().enumerate() {
        if let Some(found) = dom::first_match(doc, selector) {
            tracing::debug!(selector = %selector, index, "selected container");
            return (
                Some(found),
                ContainerSource::Selector {
                    index,
                    selector: selector.clone(),
                },
            );
        }
    }

    match dom::body(doc) {
        Some(body) => (Some(body), ContainerSource::Body),
        None => (None, ContainerSource::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::CONTAINER_SELECTORS;

    fn priority() -> Vec<String> {
        CONTAINER_SELECTORS.iter().map(|s| (*s).to_string()).collect()
    }

    fn source_of(html: &str) -> ContainerSource {
        let doc = dom::parse(html);
        select_container(&doc, &priority()).1
    }

    #[test]
    fn article_beats_main_regardless_of_order() {
        let source = source_of("<body><main><p>main</p></main><article><p>art</p></article></body>");
        assert_eq!(
            source,
            ContainerSource::Selector {
                index: 0,
                selector: "article".to_string()
            }
        );
    }

    #[test]
    fn class_and_id_candidates_follow_priority() {
        let source = source_of(
            r#"<body><div id="main">m</div><div id="content">c</div><div class="entry-content">e</div></body>"#,
        );
        assert_eq!(
            source,
            ContainerSource::Selector {
                index: 3,
                selector: ".entry-content".to_string()
            }
        );

        let source = source_of(r#"<body><div id="main">m</div><div id="content">c</div></body>"#);
        assert!(matches!(source, ContainerSource::Selector { index: 4, .. }));
    }

    #[test]
    fn falls_back_to_body() {
        assert_eq!(source_of("<body><div>plain</div></body>"), ContainerSource::Body);
    }

    #[test]
    fn first_article_in_document_order() {
        let doc = dom::parse("<body><article id=\"one\">1</article><article id=\"two\">2</article></body>");
        let (found, _) = select_container(&doc, &priority());
        let id = found.and_then(|s| s.attr("id").map(|v| v.to_string()));
        assert_eq!(id.as_deref(), Some("one"));
    }

    #[test]
    fn invalid_container_selector_is_skipped() {
        let doc = dom::parse("<body><main>m</main></body>");
        let (_, source) = select_container(&doc, &["article[".to_string(), "main".to_string()]);
        assert!(matches!(source, ContainerSource::Selector { index: 1, .. }));
    }
}
