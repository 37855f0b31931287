//! Parsed HTML document handle.

use scraper::Html;

use super::HtmlTag;

/// A parsed filing document.
///
/// Owns the node tree produced by the HTML parser. All [`HtmlTag`]s, elements
/// and trees derived from it borrow from this handle.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a complete HTML document.
    ///
    /// HTML parsing is error tolerant: malformed markup is repaired the way
    /// browsers do, so this never fails.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            log::debug!("Document: parser recovered from {} errors", html.errors.len());
        }
        Self { html }
    }

    /// Get the root (`<html>`) element.
    pub fn root(&self) -> HtmlTag<'_> {
        HtmlTag::new(self.html.root_element())
    }

    /// Get the `<body>` element, if any.
    pub fn body(&self) -> Option<HtmlTag<'_>> {
        self.select_first("body")
    }

    /// Find the first element with the given tag name in document order.
    pub fn select_first(&self, name: &str) -> Option<HtmlTag<'_>> {
        let root = self.root();
        if root.name() == name {
            return Some(root);
        }
        root.find_first(name)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root().name())
            .finish()
    }
}
