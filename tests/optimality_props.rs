use kcolor_tree::*;
use proptest::prelude::*;
use proptest::sample::Index;
use test_helpers::*;

proptest! {
    #[test]
    fn coloring_is_proper_and_optimal(
        picks in proptest::collection::vec(any::<Index>(), 0..8),
        num_colors in 2usize..4,
        primary_pick in any::<Index>(),
    ) {
        let parents = parents_from_picks(&picks);
        let primary = primary_pick.index(num_colors);
        let config = ColoringConfig::new(num_colors).unwrap().with_primary(primary).unwrap();
        let mut tree = TreeBuilder::from_parents(&parents).expect("parent list is a tree");

        let coloring = color_tree(&mut tree, config).expect("coloring succeeds");

        for (id, node) in tree.iter() {
            if let Some(parent) = node.parent() {
                prop_assert_ne!(tree.node(parent).color(), node.color(), "node {} clashes", id);
            }
        }
        prop_assert_eq!(coloring.primary_count, coloring.optimum);
        prop_assert_eq!(coloring.optimum, brute_force_optimum(&parents, num_colors, primary));
    }

    #[test]
    fn tables_sum_to_subtree_size(
        picks in proptest::collection::vec(any::<Index>(), 0..40),
        num_colors in 1usize..6,
    ) {
        let parents = parents_from_picks(&picks);
        let mut tree = TreeBuilder::from_parents(&parents).expect("parent list is a tree");
        let config = ColoringConfig::new(num_colors).unwrap();

        let result = aggregate(&mut tree, &config);
        if num_colors == 1 && tree.has_edges() {
            prop_assert!(result.is_err());
            return Ok(());
        }
        prop_assert!(result.is_ok());

        let leaf_table = CountTable::leaf(num_colors);
        for (id, node) in tree.iter() {
            let size = tree.subtree_size(id);
            let table = node.counts().expect("every node aggregated");
            for c in 0..num_colors {
                prop_assert_eq!(table.row_total(c), size);
                if node.is_leaf() {
                    prop_assert_eq!(table.row(c), leaf_table.row(c));
                }
            }
        }
    }

    #[test]
    fn assignment_twice_gives_same_colors(
        picks in proptest::collection::vec(any::<Index>(), 0..60),
        num_colors in 2usize..5,
    ) {
        let parents = parents_from_picks(&picks);
        let mut tree = TreeBuilder::from_parents(&parents).expect("parent list is a tree");
        let config = ColoringConfig::new(num_colors).unwrap();
        aggregate(&mut tree, &config).unwrap();

        assign(&mut tree, &config).unwrap();
        let first = colors_of(&tree);
        assign(&mut tree, &config).unwrap();
        prop_assert_eq!(colors_of(&tree), first);
    }
}
