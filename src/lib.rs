//! # secparse
//!
//! Semantic parsing of SEC EDGAR filings.
//!
//! This library turns the HTML of a filing into a flat sequence of classified
//! semantic elements (titles, text, tables, images) and nests that sequence
//! into a tree following heading levels.
//!
//! ## Quick Start
//!
//! ```
//! use secparse::{render, Document, RenderOptions, SecParser};
//!
//! fn main() -> secparse::Result<()> {
//!     let html = "<h1>Part I</h1><h2>Item 1. Financial Statements</h2><p>Unaudited.</p>";
//!     let doc = Document::parse(html);
//!
//!     let tree = SecParser::new().parse_tree(&doc)?;
//!     println!("{}", render::to_text(&tree, &RenderOptions::default()));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Composable pipeline**: classification steps run in order over the
//!   element sequence, custom steps plug in through [`ProcessingStep`]
//! - **Heading nesting**: sparse or inconsistent heading levels still yield
//!   a well-formed forest
//! - **Table metrics**: approximate row and number counts per table
//! - **Debug rendering**: indented text outlines and JSON
//! - **Parallel processing**: uses Rayon for batches of documents

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod steps;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    build_tree, ElementKind, ElementType, SemanticElement, SemanticTree, TreeBuilder, TreeNode,
};
pub use parser::{approx_table_metrics, flatten, ApproxTableMetrics, Document, HtmlTag};
pub use render::{HighlightStyle, JsonFormat, RenderOptions};
pub use steps::{ElementContext, Pipeline, ProcessingContext, ProcessingStep};

use rayon::prelude::*;

/// Builder for classifying filings.
///
/// # Example
///
/// ```
/// use secparse::{Document, ElementKind, SecParser};
///
/// let doc = Document::parse("<h2>Risk Factors</h2><p>Our business is risky.</p>");
/// let elements = SecParser::new()
///     .with_label("10-Q")
///     .parse_elements(&doc)?;
///
/// assert_eq!(elements[0].kind(), ElementKind::Title { level: 2 });
/// assert_eq!(elements[1].kind(), ElementKind::Text);
/// # Ok::<(), secparse::Error>(())
/// ```
#[derive(Debug)]
pub struct SecParser {
    pipeline: Pipeline,
    context: ProcessingContext,
}

impl SecParser {
    /// Create a parser with the default pipeline.
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::default(),
            context: ProcessingContext::default(),
        }
    }

    /// Replace the pipeline.
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Append a step to the pipeline.
    pub fn with_step<S: ProcessingStep + 'static>(mut self, step: S) -> Self {
        self.pipeline = self.pipeline.with_step(step);
        self
    }

    /// Set the processing context.
    pub fn with_context(mut self, context: ProcessingContext) -> Self {
        self.context = context;
        self
    }

    /// Set the document label used in log output.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.context = self.context.with_label(label);
        self
    }

    /// Get the pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Flatten a document and run the pipeline over it.
    pub fn parse_elements<'a>(&self, document: &'a Document) -> Result<Vec<SemanticElement<'a>>> {
        let elements = flatten(document.root());
        self.pipeline.run(elements, &self.context)
    }

    /// Classify a document and nest the result into a tree.
    pub fn parse_tree<'a>(&self, document: &'a Document) -> Result<SemanticTree<'a>> {
        let elements = self.parse_elements(document)?;
        Ok(build_tree(elements))
    }

    /// Parse, classify and render one HTML document as a text outline.
    pub fn render(&self, html: &str, options: &RenderOptions) -> Result<String> {
        let document = Document::parse(html);
        let tree = self.parse_tree(&document)?;
        Ok(render::to_text(&tree, options))
    }

    /// Render many HTML documents in parallel.
    ///
    /// Each document is processed on its own worker; results keep the input
    /// order.
    pub fn render_batch<S>(&self, documents: &[S], options: &RenderOptions) -> Vec<Result<String>>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("SecParser: rendering batch of {} documents", documents.len());
        documents
            .par_iter()
            .map(|html| self.render(html.as_ref(), options))
            .collect()
    }
}

impl Default for SecParser {
    fn default() -> Self {
        Self::new()
    }
}
