//! Assignment pass (pre-order)
//!
//! color(node) = argmax_{c ≠ color(parent)} counts[c][primary], ties → lowest index.
//! Each choice is already optimal given the aggregated subtree values, so
//! there is no backtracking and the primary total equals
//! max_c root.counts[c][primary].

use tracing::{debug, trace};

use super::{check_node, checked_counts};
use crate::tree::{Color, NodeId, PreOrder, Tree};
use crate::{ColoringConfig, ColoringError};

/// Color the whole tree, root unconstrained
pub fn assign(tree: &mut Tree, config: &ColoringConfig) -> Result<(), ColoringError> {
    match tree.root() {
        Some(root) => assign_subtree(tree, root, None, config),
        None => {
            debug!("empty tree, nothing to assign");
            Ok(())
        }
    }
}

/// Color the subtree rooted at `start`, whose parent holds color `forbidden`
///
/// Every table in the subtree is checked before the first color is written;
/// on error no color changes.
pub fn assign_subtree(
    tree: &mut Tree,
    start: NodeId,
    forbidden: Option<Color>,
    config: &ColoringConfig,
) -> Result<(), ColoringError> {
    config.check_tree(tree)?;
    check_node(tree, start)?;
    let k = config.num_colors();
    let primary = config.primary();

    if let Some(color) = forbidden {
        if color >= k {
            return Err(ColoringError::invalid_configuration(format!(
                "forbidden color {} out of range for K = {}",
                color, k
            )));
        }
    }
    if k == 1 && forbidden == Some(0) {
        return Err(ColoringError::invalid_configuration(
            "K = 1 cannot color a node below a colored parent",
        ));
    }

    let order: Vec<NodeId> = PreOrder::new(tree, Some(start)).collect();
    for &id in &order {
        checked_counts(tree, id, config)?;
    }
    debug!(nodes = order.len(), ?forbidden, "assignment pass");

    let mut stack = vec![(start, forbidden)];
    while let Some((id, forbidden)) = stack.pop() {
        let color = tree
            .node(id)
            .counts()
            .and_then(|table| table.best_color(primary, forbidden))
            .ok_or(ColoringError::NotAggregated(id))?;
        trace!(node = %id, color, "assigned");

        let node = tree.node_mut(id);
        node.set_color(color);
        stack.extend(
            node.children()
                .iter()
                .rev()
                .map(|&child| (child, Some(color))),
        );
    }
    Ok(())
}
