//! Shared fixtures for the `dendra-core` integration suites.

use dendra_core::DistanceMatrix;

/// Four-item fixture with a pinned merge order.
///
/// Single linkage merges (0, 1) at 2, then (2, 3) at 4, then joins the two
/// pairs at the minimum cross distance d(1, 2) = 5.
#[must_use]
pub fn chain_matrix() -> DistanceMatrix {
    let mut matrix = DistanceMatrix::new(4);
    matrix.set(0, 1, 2.0);
    matrix.set(0, 2, 6.0);
    matrix.set(0, 3, 10.0);
    matrix.set(1, 2, 5.0);
    matrix.set(1, 3, 9.0);
    matrix.set(2, 3, 4.0);
    matrix
}
