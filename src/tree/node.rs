//! Tree node entity
//!
//! A node owns its child list (as arena indices), an opaque label, and the
//! two slots written by the passes:
//!   counts - written once by aggregation (post-order)
//!   color  - written once by assignment (pre-order)

use std::fmt;

use super::{Color, CountTable};

/// Index of a node inside its [`Tree`](super::Tree) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree node
#[derive(Debug, Clone)]
pub struct TreeNode {
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    counts: Option<CountTable>,
    color: Option<Color>,
}

impl TreeNode {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            parent: None,
            children: Vec::new(),
            counts: None,
            color: None,
        }
    }

    /// Diagnostic label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Parent id (`None` for the root)
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Number of children
    #[inline]
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Aggregation table, if the node has been aggregated
    pub fn counts(&self) -> Option<&CountTable> {
        self.counts.as_ref()
    }

    /// Assigned color, if the node has been colored
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn take_counts(&mut self) -> Option<CountTable> {
        self.counts.take()
    }

    pub(crate) fn set_counts(&mut self, counts: CountTable) {
        self.counts = Some(counts);
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} (color {})", self.label, color),
            None => write!(f, "{} (uncolored)", self.label),
        }
    }
}
