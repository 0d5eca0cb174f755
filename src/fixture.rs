//! Sample trees
//!
//! Shapes used by the binary, the tests and the benchmarks. Labels are the
//! node indices in breadth-first order.

use crate::tree::{Tree, TreeBuilder, TreeError};

/// Parent list of the 10-node sample tree
///
/// ```text
///          0
///      /   |   \
///     1    2    3
///    /|\  /|\
///   4 5 6 7 8 9
/// ```
pub const SAMPLE_PARENTS: [Option<usize>; 10] = [
    None,
    Some(0),
    Some(0),
    Some(0),
    Some(1),
    Some(1),
    Some(1),
    Some(2),
    Some(2),
    Some(2),
];

/// The 10-node, 3-level sample tree
pub fn sample_tree() -> Result<Tree, TreeError> {
    TreeBuilder::from_parents(&SAMPLE_PARENTS)
}

/// Complete `branching`-ary tree with `depth` levels below the root
pub fn complete_tree(branching: usize, depth: usize) -> Result<Tree, TreeError> {
    let mut parents = vec![None];
    let mut level_start = 0;
    for _ in 0..depth {
        let level_end = parents.len();
        for parent in level_start..level_end {
            parents.extend(std::iter::repeat(Some(parent)).take(branching));
        }
        level_start = level_end;
    }
    TreeBuilder::from_parents(&parents)
}

/// Path of `length` nodes (0 gives the empty tree)
pub fn path_tree(length: usize) -> Result<Tree, TreeError> {
    let parents: Vec<Option<usize>> = (0..length).map(|idx| idx.checked_sub(1)).collect();
    TreeBuilder::from_parents(&parents)
}
