//! Stack-driven traversals
//!
//! Recursion depth would equal tree height, so both orders keep their own
//! work stack on the heap instead of using the call stack.
//! Post-order frame = (node, next child slot); pre-order frame = node.

use super::{NodeId, Tree};

/// Children-before-parent iterator
#[derive(Debug)]
pub struct PostOrder<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> PostOrder<'a> {
    /// Post-order walk of the subtree rooted at `start`
    pub fn new(tree: &'a Tree, start: Option<NodeId>) -> Self {
        Self {
            tree,
            stack: start.map(|id| (id, 0)).into_iter().collect(),
        }
    }

    /// Current stack depth (number of open frames)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for PostOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let frame = self.stack.last_mut()?;
            let children = self.tree.node(frame.0).children();
            if let Some(&child) = children.get(frame.1) {
                frame.1 += 1;
                self.stack.push((child, 0));
                continue;
            }
            let (id, _) = self.stack.pop()?;
            return Some(id);
        }
    }
}

/// Parent-before-children iterator
#[derive(Debug)]
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> PreOrder<'a> {
    /// Pre-order walk of the subtree rooted at `start`
    pub fn new(tree: &'a Tree, start: Option<NodeId>) -> Self {
        Self {
            tree,
            stack: start.into_iter().collect(),
        }
    }
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Reverse so the first child is popped first
        self.stack
            .extend(self.tree.node(id).children().iter().rev().copied());
        Some(id)
    }
}

/// Number of edges on the longest root-to-leaf path (0 for a single node)
pub fn height(tree: &Tree) -> usize {
    let mut max_depth = 0;
    let mut stack: Vec<(NodeId, usize)> = tree.root().map(|id| (id, 0)).into_iter().collect();
    while let Some((id, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        stack.extend(
            tree.node(id)
                .children()
                .iter()
                .map(|&child| (child, depth + 1)),
        );
    }
    max_depth
}
