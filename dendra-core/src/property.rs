//! Property tests for the clustering engine against a trusted oracle.
//!
//! Single linkage and the minimum spanning tree of the complete distance
//! graph select merges from the same edge set: the sorted MST edge weights
//! equal the tree's merge distance sequence. A simple sequential Prim
//! implementation serves as the reference oracle, alongside structural
//! checks on the decoded tree.

use proptest::prelude::*;

use crate::{
    DEFAULT_THRESHOLD, DistanceMatrix, DistanceSource, NoProgress, SingleLinkage,
    test_utils::suite_proptest_config,
};

/// Computes the complete-graph MST edge weights with sequential Prim.
fn sorted_mst_weights(matrix: &DistanceMatrix) -> Vec<f64> {
    let n = matrix.dimension();
    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    in_tree[0] = true;
    for (j, slot) in best.iter_mut().enumerate().skip(1) {
        *slot = matrix.distance(0, j);
    }

    let mut weights = Vec::with_capacity(n - 1);
    for _ in 1..n {
        let mut pick = 0;
        let mut pick_weight = f64::INFINITY;
        for (j, &candidate) in best.iter().enumerate() {
            if !in_tree[j] && candidate < pick_weight {
                pick = j;
                pick_weight = candidate;
            }
        }
        in_tree[pick] = true;
        weights.push(pick_weight);
        for (j, slot) in best.iter_mut().enumerate() {
            if !in_tree[j] {
                *slot = slot.min(matrix.distance(pick, j));
            }
        }
    }

    weights.sort_by(f64::total_cmp);
    weights
}

/// Arbitrary symmetric non-negative matrix of 2 to 20 items.
fn matrix_strategy() -> impl Strategy<Value = DistanceMatrix> {
    (2_usize..=20).prop_flat_map(|n| {
        proptest::collection::vec(0.0_f64..100.0, n * (n - 1) / 2).prop_map(move |values| {
            let mut remaining = values.into_iter();
            DistanceMatrix::from_fn(n, |_, _| remaining.next().unwrap_or(0.0))
        })
    })
}

/// As [`matrix_strategy`], quantized to half-integers to force distance ties.
fn tied_matrix_strategy() -> impl Strategy<Value = DistanceMatrix> {
    matrix_strategy().prop_map(|matrix| {
        let n = matrix.dimension();
        DistanceMatrix::from_fn(n, |i, j| (matrix.distance(i, j) * 2.0).round() / 2.0)
    })
}

fn engine() -> SingleLinkage {
    SingleLinkage::new(DEFAULT_THRESHOLD)
}

/// Structural checks from the decode contract: child ordering, one
/// absorption per non-zero id, representatives naming live clusters.
fn assert_tree_structure(matrix: &DistanceMatrix) {
    let n = matrix.dimension();
    let tree = engine().cluster(matrix).expect("clustering must succeed");
    assert_eq!(tree.nodes().len(), n - 1);
    assert_eq!(tree.item_count(), n);

    let mut buckets: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    let mut absorbed: Vec<usize> = Vec::new();
    let mut previous = 0.0_f64;

    for node in &tree {
        let (left, right) = (node.left_child(), node.right_child());
        assert!(left < right, "children must be ordered: {left} vs {right}");
        assert!(right < n, "representative {right} out of range");
        assert!(node.distance() >= previous, "merge distances regressed");
        previous = node.distance();

        assert!(!buckets[left].is_empty(), "left cluster {left} not live");
        assert!(!buckets[right].is_empty(), "right cluster {right} not live");
        assert_eq!(
            buckets[left].iter().min().copied(),
            Some(left),
            "left child must be its cluster's minimum member"
        );
        assert_eq!(
            buckets[right].iter().min().copied(),
            Some(right),
            "right child must be its cluster's minimum member"
        );

        let moved = std::mem::take(&mut buckets[right]);
        buckets[left].extend(moved);
        absorbed.push(right);
    }

    absorbed.sort_unstable();
    let expected: Vec<usize> = (1..n).collect();
    assert_eq!(absorbed, expected, "each non-zero id absorbed exactly once");
    assert_eq!(buckets[0].len(), n, "root cluster must hold every item");
}

proptest! {
    #![proptest_config(suite_proptest_config(96))]

    #[test]
    fn merge_distances_equal_mst_weights(matrix in matrix_strategy()) {
        let tree = engine().cluster(&matrix).expect("clustering must succeed");
        let merge_distances: Vec<f64> = tree.iter().map(|node| node.distance()).collect();
        prop_assert_eq!(merge_distances, sorted_mst_weights(&matrix));
    }

    #[test]
    fn decoded_tree_is_structurally_sound(matrix in matrix_strategy()) {
        assert_tree_structure(&matrix);
    }

    #[test]
    fn tied_distances_keep_the_structure_sound(matrix in tied_matrix_strategy()) {
        assert_tree_structure(&matrix);
    }

    #[test]
    fn repeated_runs_are_bit_identical(matrix in tied_matrix_strategy()) {
        let first = engine()
            .cluster_with_progress(&matrix, &mut NoProgress)
            .expect("clustering must succeed");
        let second = engine().cluster(&matrix).expect("clustering must succeed");

        prop_assert_eq!(first.nodes().len(), second.nodes().len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.left_child(), b.left_child());
            prop_assert_eq!(a.right_child(), b.right_child());
            prop_assert_eq!(a.distance().to_bits(), b.distance().to_bits());
        }
    }
}
