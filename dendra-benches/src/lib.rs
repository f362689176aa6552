//! Shared helpers for the dendra benchmarks.

use dendra_core::DistanceMatrix;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Builds a seeded random symmetric distance matrix over `items` items.
///
/// The same `(items, seed)` pair always yields the same matrix, so
/// benchmark runs are comparable across invocations.
#[must_use]
pub fn random_distance_matrix(items: usize, seed: u64) -> DistanceMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    DistanceMatrix::from_fn(items, |_, _| rng.gen_range(0.0..100.0))
}
