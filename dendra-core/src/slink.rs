//! SLINK pointer-representation construction (Sibson 1973).
//!
//! Each new point `k` is folded into the evolving hierarchy in O(k) work by
//! updating two per-item arrays: `pi[i]` names the cluster item `i` is
//! currently linked toward and `lambda[i]` the dissimilarity at which that
//! link formed. The recurrence never materializes or re-scans a cluster
//! hierarchy during insertion, giving O(n²) total time in O(n) extra memory.
//!
//! The outer loop is an inherent sequential dependency chain: iteration `k`
//! reads the fully updated state of iteration `k - 1`, so the pass is
//! intentionally sequential and deterministic. Ties resolve by processing
//! order, ascending in `i`.

use crate::{matrix::DistanceSource, progress::ProgressSink};

/// Raw SLINK output: per-item link target and link distance.
///
/// `lambda[n - 1]` is always `f64::INFINITY`; the decoder drops it as a
/// sentinel. `pi[i] > i` at the moment each entry is last written.
#[derive(Clone, Debug)]
pub(crate) struct PointerRepresentation {
    pub(crate) pi: Vec<usize>,
    pub(crate) lambda: Vec<f64>,
}

/// Runs the incremental-insertion recurrence over the whole matrix.
///
/// `progress` receives one `start`, one `update` per inserted point, and
/// one `finish`; it observes but never influences the computation.
#[expect(
    clippy::indexing_slicing,
    reason = "pi, lambda, and row are all sized to the matrix dimension and \
              every index derives from loop bounds below it"
)]
pub(crate) fn build_pointer_representation<M, P>(
    matrix: &M,
    progress: &mut P,
) -> PointerRepresentation
where
    M: DistanceSource + ?Sized,
    P: ProgressSink + ?Sized,
{
    let n = matrix.dimension();
    debug_assert!(n >= 2, "caller validates the dimension");

    let mut pi = vec![0_usize; n];
    let mut lambda = vec![f64::INFINITY; n];
    let mut row = vec![0.0_f64; n];

    progress.start(n);

    for k in 1..n {
        pi[k] = k;
        lambda[k] = f64::INFINITY;

        for i in 0..k {
            row[i] = matrix.distance(i, k);
        }

        // First pass: decide per item whether it re-links to k, folding the
        // displaced link distance back into the row.
        for i in 0..k {
            let target = pi[i];
            if lambda[i] >= row[i] {
                row[target] = row[target].min(lambda[i]);
                lambda[i] = row[i];
                pi[i] = k;
            } else {
                row[target] = row[target].min(row[i]);
            }
        }

        // Second pass: re-link any item whose target merged at an equal or
        // smaller distance than its own link.
        for i in 0..k {
            if lambda[i] >= lambda[pi[i]] {
                pi[i] = k;
            }
        }

        progress.update(k + 1);
    }

    progress.finish();

    PointerRepresentation { pi, lambda }
}
