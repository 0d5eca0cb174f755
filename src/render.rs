//! Text rendering of colored trees
//!
//! Both renderers walk the tree in pre-order.

use std::fmt::{self, Write};

use crate::tree::{Color, Tree};

fn color_text(color: Option<Color>) -> String {
    color.map_or_else(|| "-".to_string(), |color| color.to_string())
}

/// Label, color and child labels of every node
pub fn render_colors(tree: &Tree) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for id in tree.pre_order() {
        let node = tree.node(id);
        writeln!(out, "Node :{}", node.label())?;
        writeln!(out, "  Color: {}", color_text(node.color()))?;
        writeln!(out, "  Children: {}", node.num_children())?;
        for child in tree.children(id) {
            write!(out, "  {}", child.label())?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

/// Color, child count and aggregation table of every node
pub fn render_counts(tree: &Tree) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for id in tree.pre_order() {
        let node = tree.node(id);
        writeln!(out, "Node :{}", node.label())?;
        writeln!(out, "  Color: {}", color_text(node.color()))?;
        writeln!(out, "  Num Children: {}", node.num_children())?;
        match node.counts() {
            Some(table) => write!(out, "{}", table)?,
            None => writeln!(out, "  (not aggregated)")?,
        }
    }
    Ok(out)
}

/// One-line `label=color` listing in arena order
pub fn render_assignment(tree: &Tree) -> String {
    tree.iter()
        .map(|(_, node)| format!("{}={}", node.label(), color_text(node.color())))
        .collect::<Vec<_>>()
        .join(" ")
}
