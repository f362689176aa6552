//! Progress reporting for long-running clustering calls.
//!
//! The engine accepts an explicitly injected sink instead of consulting any
//! process-wide logging registry. Sinks are purely observational: they are
//! called synchronously from the insertion pass, must not mutate engine
//! state, and cannot fail the computation.

use tracing::{debug, trace};

/// Observer of clustering progress.
///
/// The engine invokes `start` once with the total number of items, `update`
/// once per inserted item with the count of items placed so far, and
/// `finish` once on completion — O(n) invocations in total.
pub trait ProgressSink {
    /// Signals the start of a run over `total` items.
    fn start(&mut self, total: usize);

    /// Reports that `done` items have been folded into the hierarchy.
    fn update(&mut self, done: usize);

    /// Signals that the run completed.
    fn finish(&mut self);
}

/// Sink that discards all progress updates.
///
/// # Examples
/// ```
/// use dendra_core::{NoProgress, ProgressSink};
///
/// let mut sink = NoProgress;
/// sink.start(10);
/// sink.update(2);
/// sink.finish();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&mut self, _total: usize) {}

    fn update(&mut self, _done: usize) {}

    fn finish(&mut self) {}
}

/// Sink that forwards progress to the `tracing` subscriber.
///
/// `start` and `finish` emit debug events; per-item updates emit trace
/// events to keep default log output quiet on large inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingProgress {
    total: usize,
}

impl TracingProgress {
    /// Creates a sink with no run in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for TracingProgress {
    fn start(&mut self, total: usize) {
        self.total = total;
        debug!(total, "clustering started");
    }

    fn update(&mut self, done: usize) {
        trace!(done, total = self.total, "items placed");
    }

    fn finish(&mut self) {
        debug!(total = self.total, "clustering finished");
    }
}
