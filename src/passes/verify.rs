//! Coloring checks used after assignment

use crate::tree::Tree;
use crate::ColoringError;

/// Check that every node is colored in `0..num_colors` and differs from its parent
pub fn verify_coloring(tree: &Tree, num_colors: usize) -> Result<(), ColoringError> {
    for (id, node) in tree.iter() {
        let color = node.color().ok_or(ColoringError::Uncolored(id))?;
        if color >= num_colors {
            return Err(ColoringError::ColorOutOfRange {
                node: id,
                color,
                num_colors,
            });
        }
        if let Some(parent) = node.parent() {
            if tree.node(parent).color() == Some(color) {
                return Err(ColoringError::ImproperColoring {
                    parent,
                    child: id,
                    color,
                });
            }
        }
    }
    Ok(())
}
