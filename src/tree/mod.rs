//! Tree model
//!
//! Arena representation: every node lives in one `Vec<TreeNode>` and refers
//! to its children and parent by [`NodeId`]. Pure data, no coloring logic.
//!
//! Write access is split by pass:
//!   counts - only the aggregation pass
//!   color  - only the assignment pass

mod builder;
mod node;
mod table;
mod traversal;

pub use builder::{TreeBuilder, TreeError};
pub use node::{NodeId, TreeNode};
pub use table::CountTable;
pub use traversal::{height, PostOrder, PreOrder};

/// Color index in `0..K`
pub type Color = usize;

/// Rooted tree (arena of nodes)
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl Tree {
    /// Tree without any node
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub(crate) fn from_parts(nodes: Vec<TreeNode>, root: Option<NodeId>) -> Self {
        Self { nodes, root }
    }

    /// Root id (`None` for the empty tree)
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no node
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node by id
    ///
    /// Ids are only handed out by the builder of this tree; an id from a
    /// different tree may panic.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Node by id, `None` if out of range
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    /// All nodes with their ids, in arena order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// Children of `id` in stable order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> + '_ {
        self.node(id).children().iter().map(move |&child| self.node(child))
    }

    /// Children-before-parent walk from the root
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self, self.root)
    }

    /// Parent-before-children walk from the root
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self, self.root)
    }

    /// Largest child count of any node (the branching factor M)
    pub fn max_branching(&self) -> usize {
        self.nodes
            .iter()
            .map(TreeNode::num_children)
            .max()
            .unwrap_or(0)
    }

    /// Whether any node has a child
    pub fn has_edges(&self) -> bool {
        self.nodes.iter().any(|node| !node.is_leaf())
    }

    /// Number of nodes currently colored `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.color() == Some(color))
            .count()
    }

    /// Subtree size of `id`, counted by walking it
    pub fn subtree_size(&self, id: NodeId) -> usize {
        PreOrder::new(self, Some(id)).count()
    }
}
