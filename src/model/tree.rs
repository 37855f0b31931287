//! Semantic tree types.

use super::SemanticElement;

/// A node of the semantic tree: one element and its nested children.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<'a> {
    element: SemanticElement<'a>,
    children: Vec<TreeNode<'a>>,
}

impl<'a> TreeNode<'a> {
    /// Create a leaf node.
    pub fn new(element: SemanticElement<'a>) -> Self {
        Self {
            element,
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn with_children(element: SemanticElement<'a>, children: Vec<TreeNode<'a>>) -> Self {
        Self { element, children }
    }

    /// Get the element of this node.
    pub fn element(&self) -> &SemanticElement<'a> {
        &self.element
    }

    /// Get the children in document order.
    pub fn children(&self) -> &[TreeNode<'a>] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: TreeNode<'a>) {
        self.children.push(child);
    }

    /// Check if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over this node and all descendants, depth-first pre-order.
    pub fn nodes(&self) -> Nodes<'_, 'a> {
        Nodes {
            stack: vec![self],
        }
    }
}

impl<'a> AsRef<[TreeNode<'a>]> for TreeNode<'a> {
    fn as_ref(&self) -> &[TreeNode<'a>] {
        std::slice::from_ref(self)
    }
}

/// The classified document as a forest of [`TreeNode`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemanticTree<'a> {
    root_nodes: Vec<TreeNode<'a>>,
}

impl<'a> SemanticTree<'a> {
    /// Create a tree from its root nodes.
    pub fn new(root_nodes: Vec<TreeNode<'a>>) -> Self {
        Self { root_nodes }
    }

    /// Get the root nodes in document order.
    pub fn root_nodes(&self) -> &[TreeNode<'a>] {
        &self.root_nodes
    }

    /// Iterate over all nodes, depth-first pre-order (document order).
    pub fn nodes(&self) -> Nodes<'_, 'a> {
        Nodes {
            stack: self.root_nodes.iter().rev().collect(),
        }
    }

    /// Get the total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root_nodes.is_empty()
    }
}

impl<'a> AsRef<[TreeNode<'a>]> for SemanticTree<'a> {
    fn as_ref(&self) -> &[TreeNode<'a>] {
        &self.root_nodes
    }
}

impl<'t, 'a> IntoIterator for &'t SemanticTree<'a> {
    type Item = &'t TreeNode<'a>;
    type IntoIter = std::slice::Iter<'t, TreeNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.root_nodes.iter()
    }
}

/// Depth-first pre-order iterator over tree nodes.
pub struct Nodes<'t, 'a> {
    stack: Vec<&'t TreeNode<'a>>,
}

impl<'t, 'a> Iterator for Nodes<'t, 'a> {
    type Item = &'t TreeNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
