use std::collections::HashSet;

use kcolor_tree::{color_tree, fixture, ColoringConfig};

#[test]
fn coloring_is_deterministic() {
    let config = ColoringConfig::new(4).unwrap().with_primary(2).unwrap();

    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let mut tree = fixture::complete_tree(3, 5).expect("tree builds");
        let coloring = color_tree(&mut tree, config).expect("coloring succeeds");
        fingerprints.insert(coloring.fingerprint());
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}

#[test]
fn fingerprint_tracks_primary_color() {
    let mut a = fixture::sample_tree().expect("tree builds");
    let mut b = fixture::sample_tree().expect("tree builds");
    let first = color_tree(&mut a, ColoringConfig::new(3).unwrap()).unwrap();
    let second = color_tree(&mut b, ColoringConfig::new(3).unwrap().with_primary(1).unwrap()).unwrap();

    assert_eq!(first.optimum, second.optimum);
    assert_ne!(first.fingerprint(), second.fingerprint());
}
