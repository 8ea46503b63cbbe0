//! Per-run metrics for the thinning engine.
//!
//! [`ThinningMetrics`] captures timing and candidate-disposition counts
//! for a single [`SkeletonizeEngine::run`](crate::SkeletonizeEngine::run)
//! call, for telemetry and for checking the engine's invariants hold.

/// Timing and candidate-disposition counts for a single thinning run.
///
/// The engine populates these fields as it drains the queue; callers
/// read the returned value after `run()` completes (or is cancelled).
#[derive(Clone, Debug, Default)]
pub struct ThinningMetrics {
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
    /// Number of border voxels pushed during the seed phase.
    pub seeded: usize,
    /// Number of voxels actually deleted.
    pub deleted: usize,
    /// Number of pops skipped because the voxel was no longer foreground
    /// (a stale re-queued entry).
    pub skipped_stale: usize,
    /// Number of pops skipped because the voxel was not simple at pop
    /// time.
    pub skipped_not_simple: usize,
    /// Number of pops skipped because the voxel was terminal.
    pub skipped_terminal: usize,
    /// Total number of `queue.push` calls, including re-enqueues.
    pub queue_pushes: usize,
    /// Total number of `queue.pop` calls.
    pub queue_pops: usize,
    /// `true` if the run stopped early because the cancellation
    /// callback returned `true` between iterations.
    pub cancelled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ThinningMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.seeded, 0);
        assert_eq!(m.deleted, 0);
        assert_eq!(m.skipped_stale, 0);
        assert_eq!(m.skipped_not_simple, 0);
        assert_eq!(m.skipped_terminal, 0);
        assert_eq!(m.queue_pushes, 0);
        assert_eq!(m.queue_pops, 0);
        assert!(!m.cancelled);
    }

    #[test]
    fn metrics_fields_accessible() {
        let m = ThinningMetrics {
            total_us: 100,
            seeded: 20,
            deleted: 15,
            skipped_stale: 3,
            skipped_not_simple: 2,
            skipped_terminal: 5,
            queue_pushes: 40,
            queue_pops: 38,
            cancelled: false,
        };
        assert_eq!(m.total_us, 100);
        assert_eq!(m.seeded, 20);
        assert_eq!(m.deleted, 15);
        assert_eq!(m.skipped_stale, 3);
        assert_eq!(m.skipped_not_simple, 2);
        assert_eq!(m.skipped_terminal, 5);
        assert_eq!(m.queue_pushes, 40);
        assert_eq!(m.queue_pops, 38);
    }
}
