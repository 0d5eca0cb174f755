//! End-to-end scenarios on fixed trees

use kcolor_tree::*;
use test_case::test_case;
use test_helpers::*;

#[test]
fn test_sample_tree_tables() {
    let mut tree = fixture::sample_tree().unwrap();
    let config = ColoringConfig::new(3).unwrap();
    aggregate(&mut tree, &config).unwrap();

    assert_eq!(row(&tree, 0, 0), [7, 3, 0]);
    assert_eq!(row(&tree, 0, 1), [7, 1, 2]);
    assert_eq!(row(&tree, 0, 2), [7, 2, 1]);

    // Interior node with three leaves
    assert_eq!(row(&tree, 1, 0), [1, 3, 0]);
    assert_eq!(row(&tree, 1, 1), [3, 1, 0]);
    assert_eq!(row(&tree, 1, 2), [3, 0, 1]);
}

#[test]
fn test_sample_tree_assignment() {
    let mut tree = fixture::sample_tree().unwrap();
    let config = ColoringConfig::new(3).unwrap();
    let coloring = TreeColorer::new(config).run(&mut tree).unwrap();

    assert_eq!(coloring.optimum, 7);
    assert_eq!(coloring.primary_count, 7);
    assert_eq!(coloring.root_color, Some(0));
    assert_eq!(coloring.colors, [0, 1, 1, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(tree.count_color(0), 7);
    assert_eq!(coloring.color_of(node_id(&tree, 3)), Some(1));
}

#[test]
fn test_sample_tree_matches_brute_force() {
    let optimum = brute_force_optimum(&fixture::SAMPLE_PARENTS, 3, 0);
    assert_eq!(optimum, 7);
}

#[test_case(1 ; "one color")]
#[test_case(2 ; "two colors")]
#[test_case(3 ; "three colors")]
#[test_case(7 ; "seven colors")]
fn test_single_node(num_colors: usize) {
    let mut tree = TreeBuilder::from_parents(&[None]).unwrap();
    let config = ColoringConfig::new(num_colors).unwrap();
    let coloring = color_tree(&mut tree, config).unwrap();

    assert_eq!(coloring.root_color, Some(0));
    assert_eq!(coloring.optimum, 1);
    assert_eq!(coloring.primary_count, 1);
}

#[test_case(0, 1 ; "zero colors")]
#[test_case(2, 2 ; "primary equals K")]
#[test_case(3, 9 ; "primary past K")]
fn test_invalid_configuration(num_colors: usize, primary: usize) {
    let result = ColoringConfig::new(num_colors).and_then(|config| config.with_primary(primary));
    assert!(matches!(result, Err(ColoringError::InvalidConfiguration(_))));
}

#[test]
fn test_one_color_with_edges_fails_before_mutation() {
    let mut tree = fixture::sample_tree().unwrap();
    let config = ColoringConfig::new(1).unwrap();

    let err = color_tree(&mut tree, config).unwrap_err();
    assert!(matches!(err, ColoringError::InvalidConfiguration(_)));
    assert!(tree.iter().all(|(_, node)| node.counts().is_none() && node.color().is_none()));

    assert!(matches!(
        aggregate(&mut tree, &config),
        Err(ColoringError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_empty_tree_is_success() {
    let mut tree = fixture::path_tree(0).unwrap();
    let config = ColoringConfig::new(3).unwrap();
    aggregate(&mut tree, &config).unwrap();
    assign(&mut tree, &config).unwrap();
    let coloring = color_tree(&mut tree, config).unwrap();
    assert_eq!(coloring.optimum, 0);
    assert!(coloring.colors.is_empty());
}

#[test_case(2, 4 ; "binary depth four")]
#[test_case(3, 3 ; "ternary depth three")]
#[test_case(5, 2 ; "five-ary depth two")]
fn test_complete_trees_two_colors_take_larger_levels(branching: usize, depth: usize) {
    // With K = 2 the coloring alternates by level parity; primary gets the larger half
    let mut tree = fixture::complete_tree(branching, depth).unwrap();
    let coloring = color_tree(&mut tree, ColoringConfig::new(2).unwrap()).unwrap();

    let mut even = 0;
    let mut odd = 0;
    let mut level_size = 1;
    for level in 0..=depth {
        if level % 2 == 0 {
            even += level_size;
        } else {
            odd += level_size;
        }
        level_size *= branching;
    }
    assert_eq!(coloring.optimum, even.max(odd));
}

#[test]
fn test_long_path_alternates() {
    let length = 100_001;
    let mut tree = fixture::path_tree(length).unwrap();
    let coloring = color_tree(&mut tree, ColoringConfig::new(2).unwrap()).unwrap();
    assert_eq!(coloring.optimum, length / 2 + 1);
    assert!(coloring.colors.iter().step_by(2).all(|&c| c == 0));
}
