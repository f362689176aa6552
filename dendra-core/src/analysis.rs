//! Downstream analysis of a finished merge tree.
//!
//! These helpers replay merges of a [`ClusterTree`] to answer questions
//! about intermediate partitions: the flat clustering at a given cluster
//! quantity, silhouette widths and Dunn indices per merge step, and simple
//! population statistics. They read the tree and the original distance
//! matrix; nothing here mutates either.
//!
//! Values are recomputed directly from each replayed partition rather than
//! carried incrementally across steps; the helpers stay O(n²) per step,
//! which keeps them simple to verify and is not a dominant cost next to
//! building the hierarchy itself.

use crate::{
    error::AnalysisError,
    matrix::DistanceSource,
    tree::{BinaryTreeNode, ClusterTree},
};

type AnalysisResult<T> = core::result::Result<T, AnalysisError>;

/// Flat partition obtained by replaying a prefix of the merge sequence.
///
/// Buckets are keyed by canonical representative, so applying a node moves
/// the right child's members into the left child's bucket.
#[derive(Clone, Debug)]
struct Partition {
    members: Vec<Vec<usize>>,
    assignment: Vec<usize>,
}

impl Partition {
    fn singletons(item_count: usize) -> Self {
        Self {
            members: (0..item_count).map(|item| vec![item]).collect(),
            assignment: (0..item_count).collect(),
        }
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "node children are canonical representatives in [0, item_count)"
    )]
    fn apply(&mut self, node: &BinaryTreeNode) {
        let absorbed = std::mem::take(&mut self.members[node.right_child()]);
        for &item in &absorbed {
            self.assignment[item] = node.left_child();
        }
        self.members[node.left_child()].extend(absorbed);
    }

    fn clusters(&self) -> impl Iterator<Item = &[usize]> {
        self.members
            .iter()
            .filter(|members| !members.is_empty())
            .map(Vec::as_slice)
    }
}

/// Extracts the flat clustering with exactly `cluster_quantity` clusters.
///
/// Each cluster lists its members in ascending order; clusters are ordered
/// by their smallest member.
///
/// # Errors
/// Returns [`AnalysisError::InvalidClusterQuantity`] when `cluster_quantity`
/// is zero or exceeds the number of items.
///
/// # Examples
/// ```
/// use dendra_core::{DistanceMatrix, SingleLinkageBuilder, analysis};
///
/// let mut matrix = DistanceMatrix::new(4);
/// matrix.set(0, 1, 2.0);
/// matrix.set(0, 2, 6.0);
/// matrix.set(0, 3, 10.0);
/// matrix.set(1, 2, 5.0);
/// matrix.set(1, 3, 9.0);
/// matrix.set(2, 3, 4.0);
/// let tree = SingleLinkageBuilder::new().build().cluster(&matrix)?;
///
/// let clusters = analysis::cut(2, &tree)?;
/// assert_eq!(clusters, vec![vec![0, 1], vec![2, 3]]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn cut(cluster_quantity: usize, tree: &ClusterTree) -> AnalysisResult<Vec<Vec<usize>>> {
    let items = tree.item_count();
    if cluster_quantity == 0 || cluster_quantity > items {
        return Err(AnalysisError::InvalidClusterQuantity {
            requested: cluster_quantity,
            items,
        });
    }

    let mut partition = Partition::singletons(items);
    for node in tree.nodes().iter().take(items - cluster_quantity) {
        partition.apply(node);
    }

    let mut clusters: Vec<Vec<usize>> = partition.clusters().map(<[usize]>::to_vec).collect();
    for cluster in &mut clusters {
        cluster.sort_unstable();
    }
    Ok(clusters)
}

/// Computes the overall average silhouette width after each merge step.
///
/// The value at position `t` scores the partition left by merges `0..=t`:
/// the mean over all items of `(b - a) / max(a, b)`, where `a` is the mean
/// intra-cluster distance and `b` the smallest mean distance to another
/// cluster. Items in singleton clusters, and items whose `b` is zero,
/// contribute zero. The final entry is always `0.0` since the last merge
/// leaves a single cluster.
///
/// # Errors
/// Returns [`AnalysisError::DimensionMismatch`] when the tree and matrix
/// describe different item counts.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "silhouette scoring is defined over floating-point means"
)]
pub fn average_silhouette_widths<M: DistanceSource>(
    tree: &ClusterTree,
    matrix: &M,
) -> AnalysisResult<Vec<f64>> {
    check_dimensions(tree, matrix)?;

    let items = tree.item_count();
    let mut partition = Partition::singletons(items);
    let mut widths = Vec::with_capacity(tree.nodes().len());
    let last = tree.nodes().len() - 1;

    for (step, node) in tree.iter().enumerate() {
        partition.apply(node);
        if step < last {
            widths.push(overall_silhouette(&partition, matrix, items));
        } else {
            widths.push(0.0);
        }
    }
    Ok(widths)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "silhouette scoring is defined over floating-point means"
)]
fn overall_silhouette<M: DistanceSource>(
    partition: &Partition,
    matrix: &M,
    items: usize,
) -> f64 {
    let clusters: Vec<&[usize]> = partition.clusters().collect();
    let mut total = 0.0_f64;

    for (own, cluster) in clusters.iter().enumerate() {
        if cluster.len() < 2 {
            continue;
        }
        for &item in *cluster {
            let intra = mean_distance(matrix, item, cluster, true);
            let inter = clusters
                .iter()
                .enumerate()
                .filter(|&(other, _)| other != own)
                .map(|(_, members)| mean_distance(matrix, item, members, false))
                .fold(f64::INFINITY, f64::min);
            if inter != 0.0 {
                total += (inter - intra) / intra.max(inter);
            }
        }
    }

    total / (items as f64)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "mean distances require floating-point arithmetic"
)]
fn mean_distance<M: DistanceSource>(
    matrix: &M,
    item: usize,
    members: &[usize],
    exclude_item: bool,
) -> f64 {
    let mut sum = 0.0_f64;
    let mut count = 0_usize;
    for &member in members {
        if exclude_item && member == item {
            continue;
        }
        sum += matrix.distance(item, member);
        count += 1;
    }
    sum / (count as f64)
}

/// Computes the Dunn index after each merge step.
///
/// The value at position `t` is the minimum inter-cluster distance divided
/// by the maximum intra-cluster distance of the partition left by merges
/// `0..=t`, or `0.0` while no positive intra-cluster distance exists. The
/// final entry is always `0.0`.
///
/// # Errors
/// Returns [`AnalysisError::DimensionMismatch`] when the tree and matrix
/// describe different item counts.
#[expect(
    clippy::float_arithmetic,
    clippy::indexing_slicing,
    reason = "index ratios are floating point; assignments are item-indexed"
)]
pub fn dunn_indices<M: DistanceSource>(
    tree: &ClusterTree,
    matrix: &M,
) -> AnalysisResult<Vec<f64>> {
    check_dimensions(tree, matrix)?;

    let items = tree.item_count();
    let mut partition = Partition::singletons(items);
    let mut max_intra = 0.0_f64;
    let mut indices = Vec::with_capacity(tree.nodes().len());
    let last = tree.nodes().len() - 1;

    for (step, node) in tree.iter().enumerate() {
        // Every cross pair of the two merged clusters becomes intra-cluster.
        for &left in &partition.members[node.left_child()] {
            for &right in &partition.members[node.right_child()] {
                max_intra = max_intra.max(matrix.distance(left, right));
            }
        }
        partition.apply(node);

        if step == last {
            indices.push(0.0);
        } else if max_intra > 0.0 {
            indices.push(min_inter_cluster_distance(&partition, matrix, items) / max_intra);
        } else {
            indices.push(0.0);
        }
    }
    Ok(indices)
}

#[expect(
    clippy::indexing_slicing,
    reason = "assignment is item-indexed by construction"
)]
fn min_inter_cluster_distance<M: DistanceSource>(
    partition: &Partition,
    matrix: &M,
    items: usize,
) -> f64 {
    let mut minimum = f64::INFINITY;
    for i in 0..items {
        for j in (i + 1)..items {
            if partition.assignment[i] != partition.assignment[j] {
                minimum = minimum.min(matrix.distance(i, j));
            }
        }
    }
    minimum
}

/// Computes the mean absolute deviation of cluster sizes from a balanced
/// partition into `cluster_quantity` clusters.
///
/// # Errors
/// Returns [`AnalysisError::InvalidClusterQuantity`] when `cluster_quantity`
/// is zero or does not leave a proper partition (at least two items per
/// further split, i.e. `cluster_quantity >= item_count`).
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "aberration is a floating-point mean of size deviations"
)]
pub fn average_population_aberration(
    cluster_quantity: usize,
    tree: &ClusterTree,
) -> AnalysisResult<f64> {
    let items = tree.item_count();
    if cluster_quantity == 0 || cluster_quantity >= items {
        return Err(AnalysisError::InvalidClusterQuantity {
            requested: cluster_quantity,
            items,
        });
    }

    let clusters = cut(cluster_quantity, tree)?;
    let average = (items as f64) / (cluster_quantity as f64);
    let deviation: f64 = clusters
        .iter()
        .map(|cluster| ((cluster.len() as f64) - average).abs())
        .sum();
    Ok(deviation / (clusters.len() as f64))
}

/// Computes the mean intra-cluster pairwise distance for each cluster.
///
/// Singleton clusters report the global mean pairwise distance, so that a
/// downstream consumer comparing cohesion values sees a neutral score
/// rather than zero.
///
/// # Errors
/// Returns [`AnalysisError::InvalidPartition`] when `clusters` is empty or
/// holds more clusters than the matrix has items.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "cohesion is a floating-point mean of pairwise distances"
)]
pub fn cohesion<M: DistanceSource>(
    clusters: &[Vec<usize>],
    matrix: &M,
) -> AnalysisResult<Vec<f64>> {
    let items = matrix.dimension();
    if items < 2 || clusters.is_empty() || clusters.len() > items {
        return Err(AnalysisError::InvalidPartition {
            clusters: clusters.len(),
            items,
        });
    }

    let pair_count = (items * (items - 1)) / 2;
    let mut global_sum = 0.0_f64;
    for i in 0..items {
        for j in (i + 1)..items {
            global_sum += matrix.distance(i, j);
        }
    }
    let global_mean = global_sum / (pair_count as f64);

    Ok(clusters
        .iter()
        .map(|cluster| {
            if cluster.len() < 2 {
                return global_mean;
            }
            let mut sum = 0.0_f64;
            for (offset, &left) in cluster.iter().enumerate() {
                for &right in cluster.iter().skip(offset + 1) {
                    sum += matrix.distance(left, right);
                }
            }
            sum / (((cluster.len() * (cluster.len() - 1)) / 2) as f64)
        })
        .collect())
}

fn check_dimensions<M: DistanceSource>(tree: &ClusterTree, matrix: &M) -> AnalysisResult<()> {
    let tree_items = tree.item_count();
    let matrix_items = matrix.dimension();
    if tree_items != matrix_items {
        return Err(AnalysisError::DimensionMismatch {
            tree_items,
            matrix_items,
        });
    }
    Ok(())
}
