//! Blank element detection.

use super::{ElementContext, ProcessingStep};
use crate::model::{ElementKind, SemanticElement};
use crate::parser::TABLE_TAG;

/// Marks unclassified elements with no visible content as irrelevant.
///
/// Filings use empty paragraphs and `&nbsp;` spacers for layout. An element
/// holding an image or a table is never blank, even without text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyElementStep;

impl ProcessingStep for EmptyElementStep {
    fn name(&self) -> &str {
        "empty-element"
    }

    fn transform_element<'a>(
        &self,
        element: SemanticElement<'a>,
        _context: &ElementContext<'_>,
    ) -> SemanticElement<'a> {
        if !element.is_generic() {
            return element;
        }
        let tag = element.tag();
        let blank = element.text().is_empty()
            && !tag.contains_tag("img", true)
            && !tag.contains_tag(TABLE_TAG, true);
        if blank {
            return element.reclassify(ElementKind::Irrelevant);
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{flatten, Document};
    use crate::steps::{Pipeline, ProcessingContext};

    #[test]
    fn test_spacers_are_irrelevant() {
        let doc = Document::parse(
            "<p>&nbsp;</p><div><br></div><p>Text</p><div><img src='x.png'></div>",
        );
        let kinds: Vec<_> = Pipeline::new()
            .with_step(EmptyElementStep)
            .run(flatten(doc.root()), &ProcessingContext::default())
            .unwrap()
            .iter()
            .map(|e| e.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Irrelevant,
                ElementKind::Irrelevant,
                ElementKind::Generic,
                ElementKind::Generic
            ]
        );
    }
}
