use fermiverse::{satisfies_anticommutation, BravyiKitaev, EncodingTree, TreeEncoding, TreeError};
use itertools::Itertools;

/// Every rooted tree labelled by `0..size`, as `size^(size - 1)` parent arrays.
fn rooted_trees(size: usize) -> Vec<EncodingTree> {
    (0..size)
        .map(|_| 0..=size)
        .multi_cartesian_product()
        .filter_map(|choices| {
            let parents: Vec<Option<usize>> = choices
                .into_iter()
                .map(|choice| (choice < size).then_some(choice))
                .collect();
            EncodingTree::from_parents(&parents).ok()
        })
        .collect()
}

#[test]
fn labelled_tree_counts() {
    assert_eq!(rooted_trees(2).len(), 2);
    assert_eq!(rooted_trees(3).len(), 9);
    assert_eq!(rooted_trees(4).len(), 64);
    assert_eq!(rooted_trees(5).len(), 625);
}

#[test]
fn only_star_trees_anticommute() {
    for size in 3..=5 {
        let passing: Vec<EncodingTree> = rooted_trees(size)
            .into_iter()
            .filter(|tree| satisfies_anticommutation(&TreeEncoding::new(tree.clone()), size))
            .collect();
        assert_eq!(passing.len(), size);
        assert!(passing.iter().all(EncodingTree::is_star));
        for root in 0..size {
            let star = EncodingTree::star(size, root).unwrap();
            assert!(passing.contains(&star));
        }
    }
}

#[test]
fn fenwick_shape_needs_bravyi_kitaev() {
    for size in [4, 8] {
        let tree = EncodingTree::fenwick(size);
        assert!(tree.is_monotonic());
        assert!(!tree.is_star());
        assert!(!satisfies_anticommutation(&TreeEncoding::new(tree), size));
        assert!(satisfies_anticommutation(&BravyiKitaev, size));
    }
}

#[test]
fn deep_trees_fail() {
    assert!(!satisfies_anticommutation(&TreeEncoding::new(EncodingTree::chain(4)), 4));
    assert!(!satisfies_anticommutation(&TreeEncoding::new(EncodingTree::balanced_binary(7)), 7));
    assert!(satisfies_anticommutation(&TreeEncoding::new(EncodingTree::balanced_binary(3)), 3));
}

#[test]
fn tree_smaller_than_register() {
    let encoding = TreeEncoding::new(EncodingTree::star(2, 1).unwrap());
    assert!(!satisfies_anticommutation(&encoding, 3));
    assert_eq!(encoding.tree().len(), 2);
}

#[test]
fn descendants_and_depth() {
    let tree = EncodingTree::balanced_binary(7);
    assert_eq!(tree.descendants(1).into_iter().collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(tree.descendants(0).len(), 6);
    assert_eq!(tree.ancestors(6).collect::<Vec<_>>(), vec![2, 0]);
    assert_eq!(tree.nodes()[4].parent, Some(1));
    assert_eq!(tree.children(9), &[] as &[usize]);
}

#[test]
fn validation_errors_display() {
    assert_eq!(TreeError::NoRoot.to_string(), "tree has no root");
    assert_eq!(
        TreeError::ParentOutOfRange { node: 2, parent: 7 }.to_string(),
        "parent 7 of node 2 is out of range"
    );
    let error = EncodingTree::from_parents(&[Some(1), Some(2), Some(0)]).unwrap_err();
    assert_eq!(error, TreeError::NoRoot);
    let error = EncodingTree::from_parents(&[None, Some(2), Some(3), Some(1)]).unwrap_err();
    assert_eq!(error, TreeError::Cycle { node: 1 });
}
