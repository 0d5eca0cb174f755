//! Aggregation pass (post-order)
//!
//! For each node and each hypothetical self-color c, row c of the node's
//! table is the color histogram of the subtree coloring that maximizes the
//! primary column, given the node is colored c:
//!   row c = e_c + Σ_children child.row(c')
//!   c'    = argmax_{c' ≠ c} child[c'][primary]   (ties → lowest index)
//!
//! A child influences its ancestors only through `child[c'][primary]`, so
//! choosing c' greedily per child is optimal for the primary column. The
//! other columns follow that single choice and are not optimized.

use tracing::{debug, trace};

use super::{check_node, checked_counts};
use crate::tree::{CountTable, NodeId, Tree};
use crate::{ColoringConfig, ColoringError};

/// Run the full pass: reset every table, then aggregate each node exactly once
pub fn aggregate(tree: &mut Tree, config: &ColoringConfig) -> Result<(), ColoringError> {
    config.check_tree(tree)?;
    let Some(root) = tree.root() else {
        debug!("empty tree, nothing to aggregate");
        return Ok(());
    };

    let order: Vec<NodeId> = tree.post_order().collect();
    debug!(nodes = order.len(), k = config.num_colors(), "aggregation pass");

    for &id in &order {
        tree.node_mut(id).take_counts();
    }
    for id in order {
        aggregate_node(tree, id, config)?;
    }

    if let Some(table) = tree.node(root).counts() {
        debug!(
            optimum = table.max_in_column(config.primary()),
            "aggregation complete"
        );
    }
    Ok(())
}

/// Aggregate a single node whose children are already aggregated
///
/// Seeds `counts[c][c] = 1` and adds the chosen child rows into whatever the
/// node's table already holds. On a freshly reset node this yields the
/// subtree table; calling it again on a node with children adds the child
/// rows a second time and inflates the counts. [`aggregate`] resets first
/// and calls this once per node.
///
/// Nothing is written when an error is returned.
pub fn aggregate_node(
    tree: &mut Tree,
    id: NodeId,
    config: &ColoringConfig,
) -> Result<(), ColoringError> {
    check_node(tree, id)?;
    let k = config.num_colors();
    let primary = config.primary();
    let node = tree.node(id);

    let mut table = match node.counts() {
        Some(existing) if existing.num_colors() == k && existing.primary() == primary => {
            existing.clone()
        }
        _ => CountTable::new(k).with_primary(primary),
    };

    for color in 0..k {
        table.seed_diagonal(color);
        for &child in node.children() {
            let child_table = checked_counts(tree, child, config)?;
            let pick = child_table
                .best_color(primary, Some(color))
                .ok_or_else(|| no_child_color(id))?;
            table.accumulate_row(color, child_table, pick);
        }
    }

    trace!(node = %id, label = tree.node(id).label(), "aggregated");
    tree.node_mut(id).set_counts(table);
    Ok(())
}

fn no_child_color(parent: NodeId) -> ColoringError {
    ColoringError::invalid_configuration(format!(
        "node {} has children but K = 1 leaves no color for them",
        parent
    ))
}
