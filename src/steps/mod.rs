//! Classification pipeline.
//!
//! A [`Pipeline`] folds the flat element sequence through an ordered list of
//! [`ProcessingStep`]s. Every step preserves the length and order of the
//! sequence: it may only replace an element with another element over the
//! same tag.
//!
//! # Example
//!
//! ```
//! use secparse::model::{ElementKind, SemanticElement};
//! use secparse::parser::{flatten, Document};
//! use secparse::steps::{ElementContext, Pipeline, ProcessingContext, ProcessingStep};
//!
//! /// Marks every paragraph as text.
//! struct ParagraphStep;
//!
//! impl ProcessingStep for ParagraphStep {
//!     fn name(&self) -> &str {
//!         "paragraphs"
//!     }
//!
//!     fn transform_element<'a>(
//!         &self,
//!         element: SemanticElement<'a>,
//!         _context: &ElementContext<'_>,
//!     ) -> SemanticElement<'a> {
//!         if element.tag().name() == "p" {
//!             return element.reclassify(ElementKind::Text);
//!         }
//!         element
//!     }
//! }
//!
//! let doc = Document::parse("<p>Hello</p>");
//! let pipeline = Pipeline::new().with_step(ParagraphStep);
//! let elements = pipeline.run(flatten(doc.root()), &ProcessingContext::default())?;
//! assert_eq!(elements[0].kind(), ElementKind::Text);
//! # Ok::<(), secparse::Error>(())
//! ```

mod empty;
mod image;
mod table;
mod text;
mod title;

pub use empty::EmptyElementStep;
pub use image::ImageClassificationStep;
pub use table::TableDetectionStep;
pub use text::TextClassificationStep;
pub use title::HeadingTitleStep;

use crate::error::{Error, Result};
use crate::model::{ElementKind, SemanticElement};
use crate::parser::HtmlTag;

/// Immutable data shared by all steps while processing one document.
#[derive(Debug, Clone, Default)]
pub struct ProcessingContext {
    /// Label identifying the document in log output
    pub document_label: Option<String>,
}

impl ProcessingContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.document_label = Some(label.into());
        self
    }

    fn label(&self) -> &str {
        self.document_label.as_deref().unwrap_or("<unnamed>")
    }
}

/// Per-element view handed to elementwise transforms.
#[derive(Debug, Clone, Copy)]
pub struct ElementContext<'c> {
    /// Position of the element in the sequence
    pub index: usize,

    /// Length of the sequence
    pub len: usize,

    /// Document-scoped context
    pub document: &'c ProcessingContext,
}

impl ElementContext<'_> {
    /// Check if this is the first element of the document.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Check if this is the last element of the document.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }
}

/// A pure, length- and order-preserving transform of the element sequence.
///
/// Most steps decide each element on its own and only override
/// [`transform_element`](ProcessingStep::transform_element). Steps that need
/// to look at neighbours override [`process`](ProcessingStep::process).
pub trait ProcessingStep: Send + Sync {
    /// Step name for logging and error reports.
    fn name(&self) -> &str;

    /// Decide one element: return it unchanged or a replacement over the
    /// same tag.
    fn transform_element<'a>(
        &self,
        element: SemanticElement<'a>,
        context: &ElementContext<'_>,
    ) -> SemanticElement<'a> {
        let _ = context;
        element
    }

    /// Transform the whole sequence.
    fn process<'a>(
        &self,
        elements: Vec<SemanticElement<'a>>,
        context: &ProcessingContext,
    ) -> Vec<SemanticElement<'a>> {
        let len = elements.len();
        elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                let element_context = ElementContext {
                    index,
                    len,
                    document: context,
                };
                self.transform_element(element, &element_context)
            })
            .collect()
    }
}

/// Ordered composition of processing steps.
pub struct Pipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl Pipeline {
    /// Create a pipeline with no steps.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn with_step<S: ProcessingStep + 'static>(mut self, step: S) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Append a boxed step.
    pub fn with_boxed_step(mut self, step: Box<dyn ProcessingStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Get the step names in order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Get the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, feeding each step the previous output.
    ///
    /// Fails with [`Error::InvariantViolation`] if a step changes the length
    /// of the sequence or the tag at any position.
    pub fn run<'a>(
        &self,
        elements: Vec<SemanticElement<'a>>,
        context: &ProcessingContext,
    ) -> Result<Vec<SemanticElement<'a>>> {
        let mut elements = elements;
        for step in &self.steps {
            let before: Vec<_> = elements.iter().map(|e| (e.tag(), e.kind())).collect();
            elements = step.process(elements, context);
            let changed = check_invariants(step.name(), &before, &elements)?;
            log::debug!(
                "Pipeline [{}]: step '{}' reclassified {} of {} elements",
                context.label(),
                step.name(),
                changed,
                elements.len()
            );
        }
        Ok(elements)
    }
}

impl Default for Pipeline {
    /// The standard classification steps.
    fn default() -> Self {
        Self::new()
            .with_step(TableDetectionStep)
            .with_step(EmptyElementStep)
            .with_step(ImageClassificationStep)
            .with_step(HeadingTitleStep)
            .with_step(TextClassificationStep)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.step_names())
            .finish()
    }
}

fn check_invariants(
    step: &str,
    before: &[(HtmlTag<'_>, ElementKind)],
    after: &[SemanticElement<'_>],
) -> Result<usize> {
    if before.len() != after.len() {
        return Err(Error::InvariantViolation {
            step: step.to_string(),
            reason: format!(
                "sequence length changed from {} to {}",
                before.len(),
                after.len()
            ),
        });
    }

    let mut changed = 0;
    for (index, ((tag, kind), element)) in before.iter().zip(after).enumerate() {
        if *tag != element.tag() {
            return Err(Error::InvariantViolation {
                step: step.to_string(),
                reason: format!(
                    "element {} now wraps <{}> instead of <{}>",
                    index,
                    element.tag().name(),
                    tag.name()
                ),
            });
        }
        if *kind != element.kind() {
            changed += 1;
        }
    }
    Ok(changed)
}
