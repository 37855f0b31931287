//! Image classification.

use super::{ElementContext, ProcessingStep};
use crate::model::{ElementKind, SemanticElement};

/// Reclassifies unclassified single-image elements (logos, charts,
/// signatures) as images.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageClassificationStep;

impl ProcessingStep for ImageClassificationStep {
    fn name(&self) -> &str {
        "image-classification"
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
        if tag.is_linear_chain() && tag.contains_tag("img", true) && !tag.has_text() {
            return element.reclassify(ElementKind::Image);
        }
        element
    }
}
