//! The two dynamic-programming passes
//!
//! 1. **Aggregation** (post-order): fill each node's K×K count table
//! 2. **Assignment** (pre-order): pick each node's color from those tables
//!
//! Aggregation must complete over a subtree before assignment reads it;
//! assignment never recomputes tables.

mod aggregate;
mod assign;
mod verify;

pub use aggregate::{aggregate, aggregate_node};
pub use assign::{assign, assign_subtree};
pub use verify::verify_coloring;

use crate::tree::{CountTable, NodeId, Tree};
use crate::{ColoringConfig, ColoringError};

/// Reject ids that do not belong to `tree`
fn check_node(tree: &Tree, id: NodeId) -> Result<(), ColoringError> {
    match tree.get(id) {
        Some(_) => Ok(()),
        None => Err(ColoringError::UnknownNode {
            id,
            len: tree.len(),
        }),
    }
}

/// Table of `id`, if it was aggregated with this K and primary color
fn checked_counts<'t>(
    tree: &'t Tree,
    id: NodeId,
    config: &ColoringConfig,
) -> Result<&'t CountTable, ColoringError> {
    let table = tree
        .node(id)
        .counts()
        .ok_or(ColoringError::NotAggregated(id))?;
    if table.num_colors() != config.num_colors() {
        return Err(ColoringError::TableSizeMismatch {
            node: id,
            expected: config.num_colors(),
            found: table.num_colors(),
        });
    }
    if table.primary() != config.primary() {
        return Err(ColoringError::PrimaryMismatch {
            node: id,
            expected: config.primary(),
            found: table.primary(),
        });
    }
    Ok(table)
}
