//! Single-linkage clustering orchestration.
//!
//! Provides the [`SingleLinkage`] entry point: input validation, the SLINK
//! insertion pass, dendrogram decoding, and progress reporting.

use tracing::{instrument, warn};

use crate::{
    Result,
    decode::decode_dendrogram,
    error::ClusterError,
    matrix::DistanceSource,
    progress::{NoProgress, ProgressSink},
    slink::build_pointer_representation,
    tree::ClusterTree,
};

/// The threshold value accepted by [`SingleLinkage::cluster`].
///
/// Single linkage has no correct early-stopping form, so the threshold is
/// vestigial: it exists for interface symmetry with other linkage criteria
/// and only this value is accepted.
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Entry point for computing a single-linkage hierarchy.
///
/// A run is a pure function of the distance matrix: identical input yields
/// bit-identical output, with ties broken by processing order.
///
/// # Examples
/// ```
/// use dendra_core::{DistanceMatrix, SingleLinkageBuilder};
///
/// let mut matrix = DistanceMatrix::new(3);
/// matrix.set(0, 1, 1.0);
/// matrix.set(0, 2, 4.0);
/// matrix.set(1, 2, 2.0);
///
/// let engine = SingleLinkageBuilder::new().build();
/// let tree = engine.cluster(&matrix)?;
///
/// let merges: Vec<_> = tree
///     .iter()
///     .map(|node| (node.left_child(), node.right_child(), node.distance()))
///     .collect();
/// assert_eq!(merges, vec![(0, 1, 1.0), (0, 2, 2.0)]);
/// # Ok::<(), dendra_core::ClusterError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SingleLinkage {
    threshold: f64,
}

impl SingleLinkage {
    pub(crate) const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns the configured stopping threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Computes the hierarchy for `matrix` without progress reporting.
    ///
    /// # Errors
    /// Returns [`ClusterError::UnsupportedThreshold`] when the engine was
    /// configured with a non-default threshold and
    /// [`ClusterError::InsufficientInput`] when the matrix describes fewer
    /// than two items; both are raised before any distance lookup.
    /// [`ClusterError::InternalConsistency`] signals a decoding defect and
    /// is never expected from a correct build.
    pub fn cluster<M: DistanceSource>(&self, matrix: &M) -> Result<ClusterTree> {
        self.cluster_with_progress(matrix, &mut NoProgress)
    }

    /// Computes the hierarchy for `matrix`, reporting progress to `sink`.
    ///
    /// The sink is invoked synchronously from the insertion pass, O(n)
    /// times in total; it observes the run but cannot influence or fail it.
    ///
    /// # Errors
    /// As for [`SingleLinkage::cluster`].
    pub fn cluster_with_progress<M, P>(&self, matrix: &M, sink: &mut P) -> Result<ClusterTree>
    where
        M: DistanceSource,
        P: ProgressSink + ?Sized,
    {
        let items = matrix.dimension();
        self.cluster_with_len(matrix, items, sink)
    }

    #[instrument(
        name = "single_linkage.cluster",
        err,
        skip(self, matrix, sink),
        fields(items = items, threshold = self.threshold),
    )]
    fn cluster_with_len<M, P>(
        &self,
        matrix: &M,
        items: usize,
        sink: &mut P,
    ) -> Result<ClusterTree>
    where
        M: DistanceSource,
        P: ProgressSink + ?Sized,
    {
        if self.threshold != DEFAULT_THRESHOLD {
            return Err(ClusterError::UnsupportedThreshold {
                requested: self.threshold,
            });
        }
        if items < 2 {
            warn!(items, "distance matrix too small to cluster");
            return Err(ClusterError::InsufficientInput { items });
        }

        let representation = build_pointer_representation(matrix, sink);
        decode_dendrogram(&representation, items)
    }
}
