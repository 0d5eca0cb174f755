//! Per-node aggregation table
//!
//! K×K counts stored row-major in one flat buffer:
//!   row c    = hypothesis "this node is colored c"
//!   column j = number of subtree nodes colored j under that hypothesis

use std::fmt;

use super::Color;

/// Count table `counts[c][j]` for a single node
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct CountTable {
    num_colors: usize,
    primary: Color,
    cells: Vec<usize>,
}

impl CountTable {
    /// All-zero table for K colors, optimized for primary color 0
    pub fn new(num_colors: usize) -> Self {
        Self {
            num_colors,
            primary: 0,
            cells: vec![0; num_colors * num_colors],
        }
    }

    /// Record the primary color whose column the rows maximize
    pub fn with_primary(mut self, primary: Color) -> Self {
        self.primary = primary;
        self
    }

    /// Table of a leaf: `counts[c][c] = 1`, zero elsewhere
    pub fn leaf(num_colors: usize) -> Self {
        let mut table = Self::new(num_colors);
        for color in 0..num_colors {
            table.seed_diagonal(color);
        }
        table
    }

    /// Number of colors K
    #[inline]
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Primary color the table was aggregated for
    #[inline]
    pub fn primary(&self) -> Color {
        self.primary
    }

    /// Row for hypothetical self-color `color`
    #[inline]
    pub fn row(&self, color: Color) -> &[usize] {
        let start = color * self.num_colors;
        &self.cells[start..start + self.num_colors]
    }

    /// Single entry `counts[color][column]`
    #[inline]
    pub fn get(&self, color: Color, column: Color) -> usize {
        self.cells[color * self.num_colors + column]
    }

    /// Iterate rows in color order
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.cells.chunks(self.num_colors.max(1))
    }

    /// Sum of a row (equals subtree size once aggregated)
    pub fn row_total(&self, color: Color) -> usize {
        self.row(color).iter().sum()
    }

    /// Set `counts[color][color] = 1` without touching the rest of the row
    pub(crate) fn seed_diagonal(&mut self, color: Color) {
        self.cells[color * self.num_colors + color] = 1;
    }

    /// Add `other`'s row `from` elementwise into this table's row `into`
    pub(crate) fn accumulate_row(&mut self, into: Color, other: &CountTable, from: Color) {
        debug_assert_eq!(self.num_colors, other.num_colors);
        let start = into * self.num_colors;
        let target = &mut self.cells[start..start + self.num_colors];
        for (cell, &value) in target.iter_mut().zip(other.row(from)) {
            *cell += value;
        }
    }

    /// Color `c != exclude` maximizing `counts[c][primary]`
    ///
    /// Ties go to the lowest index. `None` only when every color is excluded
    /// (K = 1 with an exclusion).
    pub fn best_color(&self, primary: Color, exclude: Option<Color>) -> Option<Color> {
        let mut best: Option<(Color, usize)> = None;
        for color in 0..self.num_colors {
            if Some(color) == exclude {
                continue;
            }
            let value = self.get(color, primary);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((color, value)),
            }
        }
        best.map(|(color, _)| color)
    }

    /// Largest `counts[c][primary]` over all rows
    pub fn max_in_column(&self, column: Color) -> usize {
        (0..self.num_colors)
            .map(|color| self.get(color, column))
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for CountTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (color, row) in self.rows().enumerate() {
            write!(f, "  Config {} :", color)?;
            for value in row {
                write!(f, "  {}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
