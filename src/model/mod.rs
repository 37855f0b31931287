//! Document model types for classified filing content.
//!
//! This module defines the flat sequence of [`SemanticElement`]s produced by
//! the processing pipeline and the [`SemanticTree`] assembled from it.

mod builder;
mod element;
mod tree;

pub use builder::{build_tree, TreeBuilder};
pub use element::{normalize_text, ElementKind, ElementType, SemanticElement};
pub use tree::{Nodes, SemanticTree, TreeNode};
