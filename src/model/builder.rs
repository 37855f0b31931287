//! Nesting of the classified element sequence into a [`SemanticTree`].

use super::{SemanticElement, SemanticTree, TreeNode};

/// Build a semantic tree from elements in document order.
///
/// Keeps a stack of open ancestors, each tagged with its level:
///
/// - An element with level `L` closes every open ancestor whose level is
///   `>= L`, is attached under the new top of the stack (or becomes a root),
///   and is opened with level `L`.
/// - An element without a level is attached under the top of the stack (or
///   becomes a root). The stack is left untouched.
///
/// Runs in a single linear pass; every push is matched by at most one pop.
pub fn build_tree(elements: Vec<SemanticElement<'_>>) -> SemanticTree<'_> {
    let mut builder = TreeBuilder::default();
    for element in elements {
        builder.push(element);
    }
    builder.finish()
}

/// Incremental form of [`build_tree`].
#[derive(Debug, Default)]
pub struct TreeBuilder<'a> {
    roots: Vec<TreeNode<'a>>,
    open: Vec<(u32, TreeNode<'a>)>,
}

impl<'a> TreeBuilder<'a> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next element in document order.
    pub fn push(&mut self, element: SemanticElement<'a>) {
        match element.level() {
            Some(level) => {
                while self.open.last().is_some_and(|(open, _)| *open >= level) {
                    self.close_top();
                }
                log::trace!(
                    "TreeBuilder: opening {} at level {} (depth {})",
                    element.element_type(),
                    level,
                    self.open.len()
                );
                self.open.push((level, TreeNode::new(element)));
            }
            None => self.attach(TreeNode::new(element)),
        }
    }

    /// Close all open ancestors and return the finished tree.
    pub fn finish(mut self) -> SemanticTree<'a> {
        while !self.open.is_empty() {
            self.close_top();
        }
        log::debug!("TreeBuilder: built {} root nodes", self.roots.len());
        SemanticTree::new(self.roots)
    }

    fn close_top(&mut self) {
        if let Some((_, node)) = self.open.pop() {
            self.attach(node);
        }
    }

    fn attach(&mut self, node: TreeNode<'a>) {
        match self.open.last_mut() {
            Some((_, parent)) => parent.push_child(node),
            None => self.roots.push(node),
        }
    }
}
