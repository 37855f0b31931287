//! Table detection.

use super::{ElementContext, ProcessingStep};
use crate::model::{ElementKind, SemanticElement};
use crate::parser::TABLE_TAG;

/// Reclassifies elements that hold exactly one table and nothing else.
///
/// Filings often wrap a table in several single-child containers. The
/// element is a table only if its subtree is a linear chain: a container
/// holding a table next to prose is left alone, since a table element must
/// denote tabular content only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableDetectionStep;

impl ProcessingStep for TableDetectionStep {
    fn name(&self) -> &str {
        "table-detection"
    }

    fn transform_element<'a>(
        &self,
        element: SemanticElement<'a>,
        _context: &ElementContext<'_>,
    ) -> SemanticElement<'a> {
        let tag = element.tag();
        if tag.is_linear_chain() && tag.contains_tag(TABLE_TAG, true) {
            log::trace!("table-detection: <{}> is a table", tag.name());
            return element.reclassify(ElementKind::Table);
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{flatten, Document};
    use crate::steps::{Pipeline, ProcessingContext};

    fn classify(html: &str) -> Vec<ElementKind> {
        let doc = Document::parse(html);
        Pipeline::new()
            .with_step(TableDetectionStep)
            .run(flatten(doc.root()), &ProcessingContext::default())
            .unwrap()
            .iter()
            .map(|e| e.kind())
            .collect()
    }

    #[test]
    fn test_wrapped_table() {
        let kinds = classify(
            "<p>Intro</p>\
             <div class='outer'><div class='inner'><table><tr><td>1</td><td>2</td></tr>\
             <tr><td>3</td><td>4</td></tr></table></div></div>",
        );
        assert_eq!(kinds, vec![ElementKind::Generic, ElementKind::Table]);
    }

    #[test]
    fn test_bare_table() {
        let kinds = classify("<p>a</p><table><tr><td>1</td></tr></table>");
        assert_eq!(kinds[1], ElementKind::Table);
    }

    #[test]
    fn test_table_with_sibling_prose() {
        let kinds = classify(
            "<p>Intro</p>\
             <div><table><tr><td>1</td></tr></table><p>Note to the table</p></div>",
        );
        assert_eq!(kinds, vec![ElementKind::Generic, ElementKind::Generic]);
    }

    #[test]
    fn test_table_with_loose_text() {
        let kinds = classify(
            "<p>a</p>\
             <div>The following table shows net sales by segment.<table><tr><td>1</td></tr></table></div>",
        );
        assert_eq!(kinds, vec![ElementKind::Generic, ElementKind::Generic]);
    }

    #[test]
    fn test_reclassifies_any_kind() {
        let doc = Document::parse("<p>a</p><div><table><tr><td>1</td></tr></table></div>");
        let elements: Vec<_> = flatten(doc.root())
            .into_iter()
            .map(|e| e.reclassify(ElementKind::Text))
            .collect();
        let output = Pipeline::new()
            .with_step(TableDetectionStep)
            .run(elements, &ProcessingContext::default())
            .unwrap();
        assert_eq!(output[0].kind(), ElementKind::Text);
        assert_eq!(output[1].kind(), ElementKind::Table);
    }
}
