//! Heading-based title detection.

use super::{ElementContext, ProcessingStep};
use crate::model::{ElementKind, SemanticElement};
use crate::parser::HtmlTag;

/// Reclassifies unclassified elements wrapping an HTML heading (`h1`..`h6`)
/// as titles, using the heading number as level.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingTitleStep;

impl HeadingTitleStep {
    /// Find the heading level of the `h1`..`h6` ending a linear chain.
    ///
    /// The heading is a leaf of the chain: its inner markup may branch.
    fn heading_level(tag: HtmlTag<'_>) -> Option<u32> {
        let end = tag.chain_end(|node| parse_heading(node.name()).is_some())?;
        parse_heading(end.name())
    }
}

fn parse_heading(name: &str) -> Option<u32> {
    let level = name.strip_prefix('h')?.parse::<u32>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

impl ProcessingStep for HeadingTitleStep {
    fn name(&self) -> &str {
        "heading-title"
    }

    fn transform_element<'a>(
        &self,
        element: SemanticElement<'a>,
        _context: &ElementContext<'_>,
    ) -> SemanticElement<'a> {
        if !element.is_generic() || !element.tag().has_text() {
            return element;
        }
        match Self::heading_level(element.tag()) {
            Some(level) => element.reclassify(ElementKind::Title { level }),
            None => element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{flatten, Document};
    use crate::steps::{Pipeline, ProcessingContext};

    #[test]
    fn test_parse_heading() {
        assert_eq!(parse_heading("h1"), Some(1));
        assert_eq!(parse_heading("h6"), Some(6));
        assert_eq!(parse_heading("h7"), None);
        assert_eq!(parse_heading("hr"), None);
        assert_eq!(parse_heading("head"), None);
    }

    #[test]
    fn test_heading_titles() {
        let doc = Document::parse(
            "<h1>Part I</h1><div><h3>Item 2. Management's Discussion</h3></div>\
             <h2> </h2><p>Body text</p>",
        );
        let kinds: Vec<_> = Pipeline::new()
            .with_step(HeadingTitleStep)
            .run(flatten(doc.root()), &ProcessingContext::default())
            .unwrap()
            .iter()
            .map(|e| e.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Title { level: 1 },
                ElementKind::Title { level: 3 },
                ElementKind::Generic,
                ElementKind::Generic
            ]
        );
    }

    #[test]
    fn test_heading_with_inner_markup() {
        let doc = Document::parse(
            "<h2><span>Item 1.</span> <span>Business</span></h2>\
             <div><h3><b>Risk</b> <i>Factors</i></h3></div><p>x</p>",
        );
        let kinds: Vec<_> = Pipeline::default()
            .run(flatten(doc.root()), &ProcessingContext::default())
            .unwrap()
            .iter()
            .map(|e| e.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Title { level: 2 },
                ElementKind::Title { level: 3 },
                ElementKind::Text
            ]
        );
    }

    #[test]
    fn test_heading_next_to_loose_text() {
        let doc = Document::parse("<div>Introduction <h2>Overview</h2></div>");
        let kinds: Vec<_> = Pipeline::new()
            .with_step(HeadingTitleStep)
            .run(flatten(doc.root()), &ProcessingContext::default())
            .unwrap()
            .iter()
            .map(|e| e.kind())
            .collect();
        assert_eq!(kinds, vec![ElementKind::Generic]);
    }
}
