//! Flattening of a parsed document into top-level elements.

use super::HtmlTag;
use crate::model::SemanticElement;

/// Wrapper tags that are unwrapped when they hold the whole document.
const WRAPPER_TAGS: &[&str] = &["div"];

/// Turn a parsed document into its ordered sequence of unclassified elements.
///
/// Starts at `<body>` (or `root` itself when there is no body), descends
/// through `<div>` wrappers that hold the entire content as a single child,
/// and emits one [`SemanticElement`] per element child in document order.
///
/// A `<div>` is only a wrapper when it has element children and no loose
/// text of its own; otherwise it is content and is emitted whole. Loose text
/// placed directly in `<body>` has no element to carry it and is skipped.
pub fn flatten<'a>(root: HtmlTag<'a>) -> Vec<SemanticElement<'a>> {
    let mut container = if root.name() == "body" {
        root
    } else {
        root.find_first("body").unwrap_or(root)
    };

    loop {
        let children = container.children();
        match children.as_slice() {
            [only] if is_wrapper(container, only) => container = *only,
            _ => break,
        }
    }

    if container.has_own_text() {
        log::debug!(
            "flatten: skipping loose text directly under <{}>",
            container.name()
        );
    }

    let elements: Vec<_> = container
        .children()
        .into_iter()
        .map(SemanticElement::generic)
        .collect();

    log::debug!(
        "flatten: {} top-level elements under <{}>",
        elements.len(),
        container.name()
    );
    elements
}

fn is_wrapper(container: HtmlTag<'_>, only: &HtmlTag<'_>) -> bool {
    WRAPPER_TAGS.contains(&only.name())
        && !container.has_own_text()
        && !only.has_own_text()
        && !only.children().is_empty()
}
