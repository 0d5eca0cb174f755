//! # Primary-color-maximizing K-coloring of rooted trees
//!
//! Given a rooted tree and K colors, find a proper coloring (no node shares
//! its parent's color) that uses one distinguished *primary* color as often
//! as possible.
//!
//! ## Core Algorithm
//!
//! 1. **Aggregation** (post-order): per node and per hypothetical self-color
//!    c, the color histogram of the best subtree coloring under c
//! 2. **Assignment** (pre-order): each node takes the best row not equal to
//!    its parent's color
//!
//! Result: OPT = max_c root.counts[c][primary], in O(n · K²) time with two
//! stack-driven traversals.
//!
//! ## Usage Example
//!
//! ```
//! use kcolor_tree::{fixture, ColoringConfig, TreeColorer};
//!
//! let mut tree = fixture::sample_tree().unwrap();
//! let config = ColoringConfig::new(3).unwrap();
//! let coloring = TreeColorer::new(config).run(&mut tree).unwrap();
//! assert_eq!(coloring.optimum, 7);
//! assert_eq!(coloring.primary_count, 7);
//! ```
//!
//! ## Input shape
//!
//! The passes assume an acyclic tree in which every node has at most one
//! parent and never check this. [`tree::TreeBuilder`] is the only way to
//! link nodes and rejects anything else.

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod fixture; // Sample trees
pub mod passes; // Aggregation + assignment
pub mod render; // Text output
pub mod tree; // Arena tree model

// Re-exports for convenience
pub use passes::{aggregate, aggregate_node, assign, assign_subtree, verify_coloring};
pub use tree::{Color, CountTable, NodeId, Tree, TreeBuilder, TreeError, TreeNode};

use thiserror::Error;
use tracing::{debug, info};

/// Color count and primary color shared by both passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringConfig {
    num_colors: usize,
    primary: Color,
}

impl ColoringConfig {
    /// K colors, primary color 0
    pub fn new(num_colors: usize) -> Result<Self, ColoringError> {
        if num_colors == 0 {
            return Err(ColoringError::invalid_configuration(
                "number of colors must be >= 1",
            ));
        }
        Ok(Self {
            num_colors,
            primary: 0,
        })
    }

    /// Use `primary` as the color to maximize
    pub fn with_primary(mut self, primary: Color) -> Result<Self, ColoringError> {
        if primary >= self.num_colors {
            return Err(ColoringError::invalid_configuration(format!(
                "primary color {} out of range for K = {}",
                primary, self.num_colors
            )));
        }
        self.primary = primary;
        Ok(self)
    }

    /// Number of colors K
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Color being maximized
    pub fn primary(&self) -> Color {
        self.primary
    }

    /// Reject trees this configuration cannot color
    ///
    /// With K = 1 any edge makes a proper coloring impossible.
    pub fn check_tree(&self, tree: &Tree) -> Result<(), ColoringError> {
        if self.num_colors == 1 && tree.has_edges() {
            return Err(ColoringError::invalid_configuration(
                "K = 1 admits no proper coloring of a tree with edges",
            ));
        }
        Ok(())
    }
}

/// Errors reported by the coloring passes
///
/// Every variant is raised before the pass writes anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    /// K and primary color do not admit a coloring
    #[error("invalid coloring configuration: {0}")]
    InvalidConfiguration(String),

    /// Node read before the aggregation pass filled its table
    #[error("node {0} has not been aggregated")]
    NotAggregated(NodeId),

    /// Table built for a different K
    #[error("node {node} table is {found}x{found}, expected {expected}x{expected}")]
    TableSizeMismatch {
        /// Node holding the table
        node: NodeId,
        /// K of the current configuration
        expected: usize,
        /// K the table was built with
        found: usize,
    },

    /// Table aggregated for a different primary color
    #[error("node {node} table maximizes color {found}, expected primary {expected}")]
    PrimaryMismatch {
        /// Node holding the table
        node: NodeId,
        /// Primary color of the current configuration
        expected: Color,
        /// Primary color the table was built with
        found: Color,
    },

    /// Id does not belong to the tree being processed
    #[error("node {id} is not in this tree ({len} nodes)")]
    UnknownNode {
        /// Offending id
        id: NodeId,
        /// Number of nodes in the tree
        len: usize,
    },

    /// Node left without a color
    #[error("node {0} is uncolored")]
    Uncolored(NodeId),

    /// Child shares its parent's color
    #[error("node {child} shares color {color} with parent {parent}")]
    ImproperColoring {
        /// Parent node
        parent: NodeId,
        /// Child node
        child: NodeId,
        /// Shared color
        color: Color,
    },

    /// Color outside `0..K`
    #[error("node {node} has color {color}, outside 0..{num_colors}")]
    ColorOutOfRange {
        /// Node holding the color
        node: NodeId,
        /// Offending color
        color: Color,
        /// K
        num_colors: usize,
    },

    /// Assignment did not realize the aggregated optimum
    #[error("assignment used primary color {achieved} times, optimum is {optimum}")]
    OptimumMismatch {
        /// max_c root.counts[c][primary]
        optimum: usize,
        /// Primary-colored nodes after assignment
        achieved: usize,
    },
}

impl ColoringError {
    /// Helper for constructing configuration errors
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        ColoringError::InvalidConfiguration(msg.into())
    }
}

/// Summary of a completed coloring
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Coloring {
    /// Number of colors K
    pub num_colors: usize,

    /// Color that was maximized
    pub primary: Color,

    /// Final color per node, indexed by [`NodeId::index`]
    pub colors: Vec<Color>,

    /// max_c root.counts[c][primary]
    pub optimum: usize,

    /// Nodes colored with the primary color
    pub primary_count: usize,

    /// Root color (`None` for the empty tree)
    pub root_color: Option<Color>,
}

impl Coloring {
    fn empty(config: &ColoringConfig) -> Self {
        Self {
            num_colors: config.num_colors(),
            primary: config.primary(),
            colors: Vec::new(),
            optimum: 0,
            primary_count: 0,
            root_color: None,
        }
    }

    /// Color of `id`
    pub fn color_of(&self, id: NodeId) -> Option<Color> {
        self.colors.get(id.index()).copied()
    }

    /// Stable digest of K, primary color and the per-node colors
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.num_colors as u64).to_le_bytes());
        hasher.update(&(self.primary as u64).to_le_bytes());
        for &color in &self.colors {
            hasher.update(&(color as u64).to_le_bytes());
        }
        hasher.finalize()
    }
}

/// Runs validation, aggregation and assignment over a tree
#[derive(Debug, Clone)]
pub struct TreeColorer {
    config: ColoringConfig,
}

impl TreeColorer {
    /// Create colorer
    pub fn new(config: ColoringConfig) -> Self {
        Self { config }
    }

    /// Access configuration
    pub fn config(&self) -> &ColoringConfig {
        &self.config
    }

    /// Color `tree` in place and summarize the result
    ///
    /// An empty tree is a successful no-op.
    pub fn run(&self, tree: &mut Tree) -> Result<Coloring, ColoringError> {
        self.config.check_tree(tree)?;
        let Some(root) = tree.root() else {
            debug!("empty tree");
            return Ok(Coloring::empty(&self.config));
        };

        passes::aggregate(tree, &self.config)?;
        passes::assign(tree, &self.config)?;
        passes::verify_coloring(tree, self.config.num_colors())?;

        let primary = self.config.primary();
        let optimum = tree
            .node(root)
            .counts()
            .map(|table| table.max_in_column(primary))
            .ok_or(ColoringError::NotAggregated(root))?;
        let primary_count = tree.count_color(primary);
        if primary_count != optimum {
            return Err(ColoringError::OptimumMismatch {
                optimum,
                achieved: primary_count,
            });
        }

        let colors = tree
            .iter()
            .map(|(id, node)| node.color().ok_or(ColoringError::Uncolored(id)))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            nodes = tree.len(),
            k = self.config.num_colors(),
            primary,
            optimum,
            "tree colored"
        );

        Ok(Coloring {
            num_colors: self.config.num_colors(),
            primary,
            root_color: tree.node(root).color(),
            colors,
            optimum,
            primary_count,
        })
    }
}

/// Color `tree` with `config` (shorthand for [`TreeColorer::run`])
pub fn color_tree(tree: &mut Tree, config: ColoringConfig) -> Result<Coloring, ColoringError> {
    TreeColorer::new(config).run(tree)
}
