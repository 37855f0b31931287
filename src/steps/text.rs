//! Catch-all text classification.

use super::{ElementContext, ProcessingStep};
use crate::model::{ElementKind, SemanticElement};

/// Reclassifies every remaining unclassified element with visible text as
/// text. Meant to run after the more specific steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextClassificationStep;

impl ProcessingStep for TextClassificationStep {
    fn name(&self) -> &str {
        "text-classification"
    }

    fn transform_element<'a>(
        &self,
        element: SemanticElement<'a>,
        _context: &ElementContext<'_>,
    ) -> SemanticElement<'a> {
        if element.is_generic() && element.tag().has_text() {
            return element.reclassify(ElementKind::Text);
        }
        element
    }
}
