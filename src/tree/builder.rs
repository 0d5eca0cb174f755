//! Tree construction
//!
//! The passes assume an acyclic, singly-parented tree and never check it.
//! Every [`Tree`] is produced here, so this is where that shape is enforced.

use bitvec::prelude::*;
use thiserror::Error;
use tracing::trace;

use super::{NodeId, Tree, TreeNode};

/// Structural errors rejected while linking or sealing a tree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Id does not belong to this builder
    #[error("unknown node {id} (builder holds {len} nodes)")]
    UnknownNode {
        /// Offending id
        id: NodeId,
        /// Number of nodes in the builder
        len: usize,
    },

    /// Node linked as its own child
    #[error("node {0} cannot be its own child")]
    SelfLoop(NodeId),

    /// Child already linked under a parent
    #[error("node {child} already has parent {parent}")]
    MultipleParents {
        /// Child being re-linked
        child: NodeId,
        /// Existing parent
        parent: NodeId,
    },

    /// Chosen root is itself somebody's child
    #[error("root {0} has a parent")]
    RootHasParent(NodeId),

    /// Node not reachable from the root (detached, or on a cycle)
    #[error("node {0} is not reachable from the root")]
    Unreachable(NodeId),

    /// Parent list references a parent outside the list
    #[error("parent index {parent} out of range for {len} nodes")]
    ParentOutOfRange {
        /// Referenced parent index
        parent: usize,
        /// Length of the parent list
        len: usize,
    },

    /// Parent list names no root (or more than one)
    #[error("parent list must contain exactly one root, found {0}")]
    RootCount(usize),
}

/// Incremental tree builder (fluent node creation, checked linking)
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<TreeNode>,
}

impl TreeBuilder {
    /// Create empty builder
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create builder with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes added so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been added
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a detached node
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(label.into()));
        id
    }

    /// Append `child` to `parent`'s child list
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check(parent)?;
        self.check(child)?;
        if parent == child {
            return Err(TreeError::SelfLoop(child));
        }
        if let Some(existing) = self.nodes[child.0].parent() {
            return Err(TreeError::MultipleParents {
                child,
                parent: existing,
            });
        }
        trace!(%parent, %child, "linking");
        self.nodes[child.0].set_parent(parent);
        self.nodes[parent.0].push_child(child);
        Ok(())
    }

    /// Seal the tree rooted at `root`
    ///
    /// Every node must be reachable from the root. With one parent per
    /// node this also rules out cycles: a cycle never reaches the root.
    pub fn build(self, root: NodeId) -> Result<Tree, TreeError> {
        self.check(root)?;
        if self.nodes[root.0].parent().is_some() {
            return Err(TreeError::RootHasParent(root));
        }

        let mut reached = bitvec![0; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            reached.set(id.0, true);
            stack.extend_from_slice(self.nodes[id.0].children());
        }
        if let Some(missing) = reached.first_zero() {
            return Err(TreeError::Unreachable(NodeId(missing)));
        }

        Ok(Tree::from_parts(self.nodes, Some(root)))
    }

    /// Build from a parent list: `parents[i]` is node `i`'s parent, `None` for the root
    ///
    /// Labels are the node indices. Children keep index order.
    pub fn from_parents(parents: &[Option<usize>]) -> Result<Tree, TreeError> {
        if parents.is_empty() {
            return Ok(Tree::empty());
        }

        let roots: Vec<usize> = parents
            .iter()
            .enumerate()
            .filter(|(_, parent)| parent.is_none())
            .map(|(idx, _)| idx)
            .collect();
        if roots.len() != 1 {
            return Err(TreeError::RootCount(roots.len()));
        }

        let mut builder = Self::with_capacity(parents.len());
        for idx in 0..parents.len() {
            builder.add_node(idx.to_string());
        }
        for (idx, parent) in parents.iter().enumerate() {
            if let Some(parent) = *parent {
                if parent >= parents.len() {
                    return Err(TreeError::ParentOutOfRange {
                        parent,
                        len: parents.len(),
                    });
                }
                builder.add_child(NodeId(parent), NodeId(idx))?;
            }
        }
        builder.build(NodeId(roots[0]))
    }

    fn check(&self, id: NodeId) -> Result<(), TreeError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(TreeError::UnknownNode {
                id,
                len: self.nodes.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_second_parent() {
        let mut builder = TreeBuilder::new();
        let a = builder.add_node("a");
        let b = builder.add_node("b");
        let c = builder.add_node("c");
        builder.add_child(a, c).unwrap();
        assert_eq!(
            builder.add_child(b, c),
            Err(TreeError::MultipleParents { child: c, parent: a })
        );
    }

    #[test]
    fn test_rejects_self_loop_and_unknown() {
        let mut builder = TreeBuilder::new();
        let a = builder.add_node("a");
        assert_eq!(builder.add_child(a, a), Err(TreeError::SelfLoop(a)));
        assert_eq!(
            builder.add_child(a, NodeId(7)),
            Err(TreeError::UnknownNode { id: NodeId(7), len: 1 })
        );
    }

    #[test]
    fn test_rejects_cycle_detached_from_root() {
        let mut builder = TreeBuilder::new();
        let root = builder.add_node("root");
        let x = builder.add_node("x");
        let y = builder.add_node("y");
        builder.add_child(x, y).unwrap();
        builder.add_child(y, x).unwrap();
        let err = builder.build(root).unwrap_err();
        assert_eq!(err, TreeError::Unreachable(x));
    }

    #[test]
    fn test_rejects_root_with_parent() {
        let mut builder = TreeBuilder::new();
        let a = builder.add_node("a");
        let b = builder.add_node("b");
        builder.add_child(a, b).unwrap();
        assert_eq!(builder.build(b).unwrap_err(), TreeError::RootHasParent(b));
    }

    #[test]
    fn test_from_parents() {
        let tree = TreeBuilder::from_parents(&[None, Some(0), Some(0), Some(1)]).unwrap();
        assert_eq!(tree.len(), 4);
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).children(), &[NodeId(1), NodeId(2)]);
        assert_eq!(tree.node(NodeId(3)).parent(), Some(NodeId(1)));
        assert_eq!(tree.node(NodeId(3)).label(), "3");
    }

    #[test]
    fn test_from_parents_errors() {
        assert_eq!(
            TreeBuilder::from_parents(&[None, None]).unwrap_err(),
            TreeError::RootCount(2)
        );
        assert_eq!(
            TreeBuilder::from_parents(&[Some(1), Some(0)]).unwrap_err(),
            TreeError::RootCount(0)
        );
        assert_eq!(
            TreeBuilder::from_parents(&[None, Some(5)]).unwrap_err(),
            TreeError::ParentOutOfRange { parent: 5, len: 2 }
        );
        assert!(TreeBuilder::from_parents(&[]).unwrap().is_empty());
    }
}
