//! Dendra core library: single-linkage hierarchical clustering.
//!
//! The engine converts a pairwise dissimilarity matrix over `n` items into
//! a weighted binary merge tree (dendrogram) using the single-linkage
//! criterion, via Sibson's SLINK algorithm: O(n²) time, O(n) auxiliary
//! space. A run has two phases: an incremental insertion pass producing the
//! transient pointer representation, and a decode pass that sorts the raw
//! merges and re-indexes chained references into a canonical tree over
//! original item ids.
//!
//! Distance computation, tree visualization, and serialization all live
//! with external collaborators; this crate starts from a
//! [`DistanceSource`] and ends at a [`ClusterTree`].
//!
//! # Determinism
//!
//! A clustering run is a pure function of its input: the same matrix
//! produces bit-identical output, with ties broken by processing order.
//! The insertion pass is sequential by construction — each iteration
//! depends on the fully updated state of the previous one — so no part of
//! the run is parallelized.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod analysis;
mod builder;
mod decode;
mod error;
mod matrix;
mod progress;
#[cfg(test)]
mod property;
mod single_linkage;
mod slink;
#[cfg(test)]
mod test_utils;
mod tree;

pub use crate::{
    builder::SingleLinkageBuilder,
    error::{AnalysisError, AnalysisErrorCode, ClusterError, ClusterErrorCode, Result},
    matrix::{DistanceMatrix, DistanceSource},
    progress::{NoProgress, ProgressSink, TracingProgress},
    single_linkage::{DEFAULT_THRESHOLD, SingleLinkage},
    tree::{BinaryTreeNode, ClusterTree},
};
