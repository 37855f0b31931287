//! Structural query facade over parsed HTML elements.

use scraper::ElementRef;

/// Tag name of table elements.
pub const TABLE_TAG: &str = "table";

/// A read-only handle to one element of a parsed document.
///
/// The handle is `Copy` and compares by node identity: two tags are equal
/// only when they point at the same node of the same parsed document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HtmlTag<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlTag<'a> {
    /// Wrap a parsed element.
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Get the lowercase tag name (e.g., "div", "table").
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Get the element children in document order. Text nodes are skipped.
    pub fn children(&self) -> Vec<HtmlTag<'a>> {
        self.child_elements().collect()
    }

    fn child_elements(&self) -> impl Iterator<Item = HtmlTag<'a>> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .map(HtmlTag::new)
    }

    /// Get the concatenated text of the whole subtree.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Check if the subtree has any non-whitespace text.
    pub fn has_text(&self) -> bool {
        self.element.text().any(|t| !t.trim().is_empty())
    }

    /// Check if the element holds non-whitespace text of its own, outside
    /// its element children.
    pub fn has_own_text(&self) -> bool {
        self.element
            .children()
            .filter_map(|node| node.value().as_text())
            .any(|t| !t.trim().is_empty())
    }

    /// Check if the subtree forms a linear chain.
    ///
    /// Starting at this element, every element down to the leaf must have at
    /// most one child, where a non-blank text run counts as a child just
    /// like an element. A `<table>` ends the walk and counts as a leaf: rows
    /// and cells are tabular content, not document branching.
    pub fn is_linear_chain(&self) -> bool {
        self.chain_end(|tag| tag.name() == TABLE_TAG).is_some()
    }

    /// Walk down a linear chain and return the element it ends at.
    ///
    /// The walk stops at the first element accepted by `is_leaf`, or at an
    /// element without children. Returns `None` as soon as an element above
    /// that point branches: two element children, or one element child next
    /// to non-blank text.
    pub fn chain_end<F>(&self, is_leaf: F) -> Option<HtmlTag<'a>>
    where
        F: Fn(&HtmlTag<'a>) -> bool,
    {
        let mut current = *self;
        loop {
            if is_leaf(&current) {
                return Some(current);
            }
            let mut children = current.child_elements();
            match (children.next(), children.next()) {
                (None, _) => return Some(current),
                (Some(only), None) if !current.has_own_text() => current = only,
                _ => return None,
            }
        }
    }

    /// Check if an element with the given tag name exists in the subtree.
    pub fn contains_tag(&self, name: &str, include_self: bool) -> bool {
        if include_self && self.name() == name {
            return true;
        }
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .any(|e| e.value().name() == name)
    }

    /// Find all elements with the given tag name, this element included,
    /// in document order.
    pub fn find_all(&self, name: &str) -> Vec<HtmlTag<'a>> {
        self.element
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == name)
            .map(HtmlTag::new)
            .collect()
    }

    /// Find the first descendant with the given tag name.
    pub fn find_first(&self, name: &str) -> Option<HtmlTag<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == name)
            .map(HtmlTag::new)
    }
}
