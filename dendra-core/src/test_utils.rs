//! Shared test utilities for `dendra-core`.

use dendra_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::matrix::DistanceSource;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Builds a standard proptest configuration from the shared profile.
///
/// This keeps property suites aligned on the same `DENDRA_PBT_CASES` and
/// `DENDRA_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`DistanceSource`] wrapper that records distance reads for tests.
#[derive(Clone)]
pub(crate) struct CountingMatrix<M> {
    inner: M,
    reads: Arc<AtomicUsize>,
}

impl<M: DistanceSource> CountingMatrix<M> {
    /// Wraps `inner`, sharing the read counter with the caller.
    #[must_use]
    pub(crate) fn new(inner: M, reads: Arc<AtomicUsize>) -> Self {
        Self { inner, reads }
    }

    /// Returns the backing read counter for assertions.
    #[must_use]
    pub(crate) fn reads(&self) -> &Arc<AtomicUsize> {
        &self.reads
    }
}

impl<M: DistanceSource> DistanceSource for CountingMatrix<M> {
    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.inner.distance(i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DistanceMatrix;

    #[test]
    fn counting_matrix_tracks_every_read() {
        let mut matrix = DistanceMatrix::new(3);
        matrix.set(0, 1, 1.0);
        matrix.set(0, 2, 2.0);
        matrix.set(1, 2, 3.0);

        let reads = Arc::new(AtomicUsize::new(0));
        let counting = CountingMatrix::new(matrix, Arc::clone(&reads));

        assert_eq!(counting.distance(0, 1), 1.0);
        assert_eq!(counting.distance(2, 1), 3.0);
        assert_eq!(counting.reads().load(Ordering::Relaxed), 2);
        assert_eq!(counting.dimension(), 3);
    }
}
