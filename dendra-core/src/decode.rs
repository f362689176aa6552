//! Decoding of the SLINK pointer representation into a canonical tree.
//!
//! The per-position `(pi[i], lambda[i])` pairs are not in chronological
//! merge order, because `pi[i]` can be overwritten after assignment; only
//! the globally sorted distance sequence recovers it. After a stable sort
//! the chained references are resolved through a union-find that carries the
//! minimum original member id of every live set, so each merge can be named
//! by the canonical representatives of the two clusters it joins.

use crate::{
    error::ClusterError,
    slink::PointerRepresentation,
    tree::{BinaryTreeNode, ClusterTree},
};

/// One raw merge record prior to re-indexing.
#[derive(Clone, Copy, Debug)]
struct MergeRecord {
    index: usize,
    target: usize,
    distance: f64,
}

/// Union-find over item slots with a per-root minimum member id.
///
/// The minimum member is the canonical representative used to name clusters
/// in the decoded tree.
#[derive(Clone, Debug)]
struct RepresentativeSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    min_member: Vec<usize>,
}

impl RepresentativeSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            min_member: (0..n).collect(),
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Unions two distinct roots, keeping the smaller member id as the
    /// surviving representative.
    fn union_roots(&mut self, mut left: usize, mut right: usize) -> usize {
        debug_assert_ne!(left, right);
        let representative = self.min_member[left].min(self.min_member[right]);
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.min_member[left] = representative;
        left
    }
}

/// Decodes `pi`/`lambda` into the normalized, chronologically ordered tree.
///
/// # Errors
/// Returns [`ClusterError::InternalConsistency`] when a merge record
/// resolves both endpoints to the same live set. That state is unreachable
/// from a correct pointer representation and signals a defect rather than
/// an input condition.
pub(crate) fn decode_dendrogram(
    representation: &PointerRepresentation,
    item_count: usize,
) -> Result<ClusterTree, ClusterError> {
    let PointerRepresentation { pi, lambda } = representation;

    // Position n-1 is the sentinel: lambda is infinite there and the slot
    // never names a merge of its own.
    let mut records: Vec<MergeRecord> = pi
        .iter()
        .zip(lambda)
        .enumerate()
        .take(item_count - 1)
        .map(|(index, (&target, &distance))| MergeRecord {
            index,
            target,
            distance,
        })
        .collect();

    // Stable sort: ties keep ascending position order, which pins the
    // deterministic tie-break across runs.
    records.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let mut sets = RepresentativeSet::new(item_count);
    let mut nodes = Vec::with_capacity(item_count - 1);

    for record in records {
        let left_root = sets.find(record.index);
        let right_root = sets.find(record.target);
        if left_root == right_root {
            return Err(ClusterError::InternalConsistency {
                context: "resolving a merge record whose endpoints already share a cluster",
            });
        }

        let left_repr = sets.min_member[left_root];
        let right_repr = sets.min_member[right_root];
        nodes.push(BinaryTreeNode::new(left_repr, right_repr, record.distance));
        sets.union_roots(left_root, right_root);
    }

    Ok(ClusterTree::new(nodes, item_count))
}
