//! Semantic element types.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::parser::{approx_table_metrics, HtmlTag};

/// Classification of a semantic element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// Not yet classified
    Generic,

    /// A paragraph of prose
    Text,

    /// A section title
    Title {
        /// Heading depth (smaller is shallower)
        level: u32,
    },

    /// A table, including any wrapper elements around it
    Table,

    /// A standalone image
    Image,

    /// Content with no analytical value (blank spacers, empty wrappers)
    Irrelevant,
}

impl ElementKind {
    /// Get the payload-free type of this kind.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Generic => ElementType::Generic,
            ElementKind::Text => ElementType::Text,
            ElementKind::Title { .. } => ElementType::Title,
            ElementKind::Table => ElementType::Table,
            ElementKind::Image => ElementType::Image,
            ElementKind::Irrelevant => ElementType::Irrelevant,
        }
    }

    /// Get the heading level for structural kinds.
    pub fn level(&self) -> Option<u32> {
        match self {
            ElementKind::Title { level } => Some(*level),
            ElementKind::Generic
            | ElementKind::Text
            | ElementKind::Table
            | ElementKind::Image
            | ElementKind::Irrelevant => None,
        }
    }

    /// Check if this kind denotes document structure (carries a level).
    pub fn is_structural(&self) -> bool {
        self.level().is_some()
    }
}

/// Payload-free discriminant of [`ElementKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// See [`ElementKind::Generic`]
    Generic,
    /// See [`ElementKind::Text`]
    Text,
    /// See [`ElementKind::Title`]
    Title,
    /// See [`ElementKind::Table`]
    Table,
    /// See [`ElementKind::Image`]
    Image,
    /// See [`ElementKind::Irrelevant`]
    Irrelevant,
}

impl ElementType {
    /// Display name used in rendered trees.
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::Generic => "Generic",
            ElementType::Text => "Text",
            ElementType::Title => "Title",
            ElementType::Table => "Table",
            ElementType::Image => "Image",
            ElementType::Irrelevant => "Irrelevant",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified unit of a filing.
///
/// Elements are values: classification never mutates an element, it builds
/// a new one over the same [`HtmlTag`].
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticElement<'a> {
    tag: HtmlTag<'a>,
    kind: ElementKind,
}

impl<'a> SemanticElement<'a> {
    /// Create an element of the given kind.
    pub fn new(tag: HtmlTag<'a>, kind: ElementKind) -> Self {
        Self { tag, kind }
    }

    /// Create an unclassified element.
    pub fn generic(tag: HtmlTag<'a>) -> Self {
        Self::new(tag, ElementKind::Generic)
    }

    /// Build a replacement element of another kind over the same tag.
    pub fn reclassify(&self, kind: ElementKind) -> Self {
        Self::new(self.tag, kind)
    }

    /// Get the originating tag.
    pub fn tag(&self) -> HtmlTag<'a> {
        self.tag
    }

    /// Get the classification.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Get the payload-free type.
    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Get the heading level, present only on structural elements.
    pub fn level(&self) -> Option<u32> {
        self.kind.level()
    }

    /// Check if the element is still unclassified.
    pub fn is_generic(&self) -> bool {
        matches!(self.kind, ElementKind::Generic)
    }

    /// Get the whitespace-normalized text of the element.
    pub fn text(&self) -> String {
        normalize_text(&self.tag.text())
    }

    /// Get a short human-readable description of the element.
    pub fn summary(&self) -> String {
        match self.kind {
            ElementKind::Table => match approx_table_metrics(&self.tag) {
                Ok(metrics) => format!(
                    "Table with ~{} rows, ~{} numbers, and {} characters.",
                    metrics.rows,
                    metrics.numbers,
                    self.text().chars().count()
                ),
                Err(e) => {
                    log::trace!("Table summary fell back to text: {}", e);
                    self.text()
                }
            },
            ElementKind::Image => {
                let image = if self.tag.name() == "img" {
                    Some(self.tag)
                } else {
                    self.tag.find_first("img")
                };
                image
                    .and_then(|img| img.attr("alt").or_else(|| img.attr("src")))
                    .map(normalize_text)
                    .unwrap_or_default()
            }
            ElementKind::Generic
            | ElementKind::Text
            | ElementKind::Title { .. }
            | ElementKind::Irrelevant => self.text(),
        }
    }
}

/// Normalize compatibility characters (e.g., non-breaking spaces) and
/// collapse whitespace runs to single spaces.
pub fn normalize_text(text: &str) -> String {
    let normalized: String = text.nfkc().collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Document;

    #[test]
    fn test_kind_level() {
        assert_eq!(ElementKind::Title { level: 2 }.level(), Some(2));
        assert!(ElementKind::Title { level: 0 }.is_structural());
        assert_eq!(ElementKind::Text.level(), None);
        assert!(!ElementKind::Table.is_structural());
    }

    #[test]
    fn test_element_type_names() {
        assert_eq!(ElementKind::Title { level: 1 }.element_type(), ElementType::Title);
        assert_eq!(ElementType::Irrelevant.to_string(), "Irrelevant");
    }

    #[test]
    fn test_reclassify_shares_tag() {
        let doc = Document::parse("<p>Revenue increased.</p>");
        let tag = doc.select_first("p").unwrap();
        let original = SemanticElement::generic(tag);
        let text = original.reclassify(ElementKind::Text);

        assert!(original.is_generic());
        assert_eq!(text.kind(), ElementKind::Text);
        assert_eq!(text.tag(), original.tag());
    }

    #[test]
    fn test_summary_normalizes_whitespace() {
        let doc = Document::parse("<p>  Net\u{a0}sales\n\n   rose  </p>");
        let tag = doc.select_first("p").unwrap();
        let element = SemanticElement::new(tag, ElementKind::Text);
        assert_eq!(element.summary(), "Net sales rose");
    }

    #[test]
    fn test_table_summary() {
        let doc = Document::parse(
            "<div><table><tr><td>Sales</td><td>1,000</td></tr>\
             <tr><td>Costs</td><td>400</td></tr></table></div>",
        );
        let tag = doc.select_first("div").unwrap();
        let element = SemanticElement::new(tag, ElementKind::Table);
        assert_eq!(
            element.summary(),
            "Table with ~2 rows, ~2 numbers, and 18 characters."
        );
    }

    #[test]
    fn test_image_summary() {
        let doc = Document::parse("<div><img src='logo.jpg' alt='Company logo'></div>");
        let tag = doc.select_first("div").unwrap();
        let element = SemanticElement::new(tag, ElementKind::Image);
        assert_eq!(element.summary(), "Company logo");
    }

    #[test]
    fn test_image_summary_on_img_itself() {
        let doc = Document::parse("<img src='chart.png'><img src='other.png' alt='Other'>");
        let tag = doc.select_first("img").unwrap();
        let element = SemanticElement::new(tag, ElementKind::Image);
        assert_eq!(element.summary(), "chart.png");
    }
}
