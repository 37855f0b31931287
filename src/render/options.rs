//! Rendering options and configuration.

use crate::model::ElementType;

/// Default maximum number of characters shown for an element summary.
pub const DEFAULT_CHAR_DISPLAY_LIMIT: usize = 50;

/// Options for rendering a semantic tree as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Element types left out of the output, with their subtrees
    pub ignored_types: Vec<ElementType>,

    /// Maximum summary length in characters (0 = default)
    pub char_display_limit: usize,

    /// Terminal highlighting of type names and level markers
    pub highlight: Option<HighlightStyle>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set of ignored element types.
    pub fn with_ignored_types(mut self, types: impl IntoIterator<Item = ElementType>) -> Self {
        self.ignored_types = types.into_iter().collect();
        self
    }

    /// Render every element type.
    pub fn show_all(mut self) -> Self {
        self.ignored_types.clear();
        self
    }

    /// Set the summary character limit.
    pub fn with_char_display_limit(mut self, limit: usize) -> Self {
        self.char_display_limit = limit;
        self
    }

    /// Enable highlighting with the default style.
    pub fn with_highlight(mut self) -> Self {
        self.highlight = Some(HighlightStyle::default());
        self
    }

    /// Enable highlighting with a custom style.
    pub fn with_highlight_style(mut self, style: HighlightStyle) -> Self {
        self.highlight = Some(style);
        self
    }

    /// Check if an element type is suppressed.
    pub fn is_ignored(&self, element_type: ElementType) -> bool {
        self.ignored_types.contains(&element_type)
    }

    /// Get the effective summary character limit.
    pub fn effective_limit(&self) -> usize {
        if self.char_display_limit == 0 {
            DEFAULT_CHAR_DISPLAY_LIMIT
        } else {
            self.char_display_limit
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ignored_types: vec![ElementType::Irrelevant],
            char_display_limit: DEFAULT_CHAR_DISPLAY_LIMIT,
            highlight: None,
        }
    }
}

/// ANSI escape sequences used to highlight rendered trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    /// Sequence before element type names
    pub type_name: String,

    /// Sequence before level markers
    pub level: String,

    /// Sequence ending a highlighted span
    pub reset: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            type_name: "\x1b[1;34m".to_string(),
            level: "\x1b[1;92m".to_string(),
            reset: "\x1b[0m".to_string(),
        }
    }
}
