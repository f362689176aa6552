//! Error types for the dendra core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use thiserror::Error;

/// Error type produced by [`crate::SingleLinkage::cluster`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClusterError {
    /// The distance matrix did not describe at least two items.
    #[error("distance matrix must describe at least 2 items (got {items})")]
    InsufficientInput {
        /// Dimension reported by the distance source.
        items: usize,
    },
    /// A non-default threshold was requested.
    ///
    /// Single linkage has no correct early-stopping form; the threshold
    /// parameter exists only for interface symmetry with other linkage
    /// criteria and any non-default value is rejected before any work.
    #[error(
        "single linkage does not support early stopping: threshold must stay at the default (got {requested})"
    )]
    UnsupportedThreshold {
        /// Threshold value supplied by the caller.
        requested: f64,
    },
    /// The dendrogram decoder dereferenced an already-absorbed cluster slot.
    ///
    /// This indicates a defect in the pointer-representation build or the
    /// decode pass, never a property of the input.
    #[error("dendrogram decoding invariant violated while {context}")]
    InternalConsistency {
        /// Description of the decode step that observed the violation.
        context: &'static str,
    },
}

impl ClusterError {
    /// Returns a stable, machine-readable code for the variant.
    #[must_use]
    pub const fn code(&self) -> ClusterErrorCode {
        match self {
            Self::InsufficientInput { .. } => ClusterErrorCode::InsufficientInput,
            Self::UnsupportedThreshold { .. } => ClusterErrorCode::UnsupportedThreshold,
            Self::InternalConsistency { .. } => ClusterErrorCode::InternalConsistency,
        }
    }
}

/// Machine-readable error codes for [`ClusterError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClusterErrorCode {
    /// The distance matrix did not describe at least two items.
    InsufficientInput,
    /// A non-default threshold was requested.
    UnsupportedThreshold,
    /// The dendrogram decoder dereferenced an already-absorbed cluster slot.
    InternalConsistency,
}

impl ClusterErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientInput => "SINGLE_LINKAGE_INSUFFICIENT_INPUT",
            Self::UnsupportedThreshold => "SINGLE_LINKAGE_UNSUPPORTED_THRESHOLD",
            Self::InternalConsistency => "SINGLE_LINKAGE_INTERNAL_CONSISTENCY",
        }
    }
}

/// Errors raised by the dendrogram analysis helpers.
#[non_exhaustive]
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AnalysisError {
    /// The requested cluster quantity has no partition in the tree.
    #[error("no partition of {items} items into {requested} clusters exists")]
    InvalidClusterQuantity {
        /// Cluster quantity requested by the caller.
        requested: usize,
        /// Number of items covered by the tree.
        items: usize,
    },
    /// A supplied partition could not have come from the distance matrix.
    #[error("partition of {clusters} clusters is invalid for {items} items")]
    InvalidPartition {
        /// Number of clusters in the supplied partition.
        clusters: usize,
        /// Dimension of the distance matrix.
        items: usize,
    },
    /// The tree and distance matrix describe different item counts.
    #[error("merge tree covers {tree_items} items but the matrix has {matrix_items}")]
    DimensionMismatch {
        /// Item count implied by the tree (`nodes + 1`).
        tree_items: usize,
        /// Dimension of the distance matrix.
        matrix_items: usize,
    },
}

impl AnalysisError {
    /// Returns a stable, machine-readable code for the variant.
    #[must_use]
    pub const fn code(&self) -> AnalysisErrorCode {
        match self {
            Self::InvalidClusterQuantity { .. } => AnalysisErrorCode::InvalidClusterQuantity,
            Self::InvalidPartition { .. } => AnalysisErrorCode::InvalidPartition,
            Self::DimensionMismatch { .. } => AnalysisErrorCode::DimensionMismatch,
        }
    }
}

/// Machine-readable error codes for [`AnalysisError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AnalysisErrorCode {
    /// The requested cluster quantity has no partition in the tree.
    InvalidClusterQuantity,
    /// A supplied partition could not have come from the distance matrix.
    InvalidPartition,
    /// The tree and distance matrix describe different item counts.
    DimensionMismatch,
}

impl AnalysisErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidClusterQuantity => "ANALYSIS_INVALID_CLUSTER_QUANTITY",
            Self::InvalidPartition => "ANALYSIS_INVALID_PARTITION",
            Self::DimensionMismatch => "ANALYSIS_DIMENSION_MISMATCH",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ClusterError>;
