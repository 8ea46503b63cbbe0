//! The thinning engine: the single-threaded priority-ordered loop that
//! owns the image and the queue.
//!
//! # Threading
//!
//! The core is single-threaded and non-suspending: no operation blocks
//! and there is no I/O inside the thinning loop. The neighbor tables of
//! [`Connectivity`] and [`UnitCubeNeighbors`](skel_connectivity::UnitCubeNeighbors)
//! are immutable shared data and may be read from any thread; the
//! queue, image mutation, and engine state are exclusive to the driving
//! thread. No pop is cancellable mid-flight — cancellation is
//! cooperatively polled between iterations, and a cancellation there
//! leaves the image in a valid, partially-thinned state.

use std::time::Instant;

use skel_connectivity::Connectivity;
use skel_core::{Coord, Image, OrderingImage, PreconditionViolated, ProgressObserver, SkeletonizeError};
use skel_queue::HierarchicalQueue;

use crate::config::{MaterializedConfig, SkeletonizeConfig};
use crate::metrics::ThinningMetrics;

/// How many processed candidates elapse between progress notifications.
const PROGRESS_BATCH: usize = 64;

/// Drives the seed-then-thin loop over a fixed foreground connectivity
/// and pair of pluggable simplicity/terminality predicates.
///
/// Built once from a [`SkeletonizeConfig`] and reusable across multiple
/// [`run`](Self::run) calls against different images, since all of its
/// state (connectivity tables, predicates) is immutable after
/// construction.
pub struct SkeletonizeEngine<P> {
    config: MaterializedConfig<P>,
}

impl<P: PartialEq + Clone + 'static> SkeletonizeEngine<P> {
    /// Validate `config` and build the engine.
    pub fn new(config: SkeletonizeConfig<P>) -> Result<Self, SkeletonizeError> {
        Ok(Self { config: config.materialize()? })
    }

    /// The foreground connectivity this engine runs with.
    pub fn fg_connectivity(&self) -> &Connectivity {
        &self.config.fg_connectivity
    }

    /// Run the thinning loop over `image`, guided by `ordering`,
    /// draining through `queue`.
    ///
    /// `queue` is taken by value so the caller picks the backend (a
    /// [`MapQueue`](skel_queue::MapQueue) for an arbitrary key type, or
    /// a [`VecQueue`](skel_queue::VecQueue) when `K` is a small bounded
    /// `i64` range) — the engine only depends on the
    /// [`HierarchicalQueue`] capability.
    ///
    /// `is_cancelled` is polled once per thinning-loop iteration, never
    /// mid-pop; returning `true` stops the run with whatever deletions
    /// have already happened intact and topology-preserving.
    pub fn run<I, O, K, Q, Obs>(
        &self,
        image: &mut I,
        ordering: &O,
        mut queue: Q,
        mut observer: Obs,
        mut is_cancelled: impl FnMut() -> bool,
    ) -> Result<ThinningMetrics, SkeletonizeError>
    where
        I: Image<P>,
        O: OrderingImage<K>,
        K: Clone,
        Q: HierarchicalQueue<K, Coord>,
        Obs: ProgressObserver,
    {
        let start = Instant::now();
        self.check_preconditions(image, ordering)?;

        let mut metrics = ThinningMetrics::default();
        self.seed(image, ordering, &mut queue, &mut metrics);
        tracing::debug!(seeded = metrics.seeded, "seed phase complete");

        let total_seeded = metrics.seeded.max(1);
        let mut processed = 0usize;

        while let Some(x) = queue.pop() {
            metrics.queue_pops += 1;

            if is_cancelled() {
                tracing::debug!("cancellation observed between iterations");
                metrics.cancelled = true;
                break;
            }

            if image.get(&x) != self.config.foreground {
                metrics.skipped_stale += 1;
                continue;
            }

            if !(self.config.simplicity)(image, &x) {
                metrics.skipped_not_simple += 1;
                continue;
            }

            if (self.config.terminality)(image, &x) {
                metrics.skipped_terminal += 1;
                continue;
            }

            image.set(&x, self.config.background.clone());
            metrics.deleted += 1;

            for offset in self.config.fg_connectivity.neighbors() {
                let y: Coord = x.iter().zip(offset.iter()).map(|(&c, &o)| c + o).collect();
                if image.in_bounds(&y) && image.get(&y) == self.config.foreground {
                    queue.push(ordering.get(&y), y);
                    metrics.queue_pushes += 1;
                }
            }

            processed += 1;
            if processed % PROGRESS_BATCH == 0 {
                observer.on_progress((processed as f64 / total_seeded as f64).min(1.0));
            }
        }

        if !metrics.cancelled {
            observer.on_progress(1.0);
        }
        metrics.total_us = start.elapsed().as_micros() as u64;
        tracing::debug!(deleted = metrics.deleted, cancelled = metrics.cancelled, "thinning loop complete");
        Ok(metrics)
    }

    fn check_preconditions<I, O, K>(&self, image: &I, ordering: &O) -> Result<(), SkeletonizeError>
    where
        I: Image<P>,
        O: OrderingImage<K>,
    {
        if image.origin() != ordering.origin() || image.extent() != ordering.extent() {
            return Err(PreconditionViolated::OrderingDimensionMismatch.into());
        }
        self.check_no_boundary_touching(image)
    }

    /// The foreground object must not touch the domain boundary: a
    /// border voxel sitting on the domain edge has no true neighbor to
    /// compare against on that side, so its simplicity is not
    /// well-defined. Checked eagerly so a violation fails fast rather
    /// than silently skeletonizing against an ill-defined edge.
    fn check_no_boundary_touching<I: Image<P>>(&self, image: &I) -> Result<(), SkeletonizeError> {
        let origin = image.origin();
        let extent = image.extent();
        let mut coord = origin.clone();
        loop {
            if image.get(&coord) == self.config.foreground
                && coord.iter().zip(origin.iter()).zip(extent.iter()).any(|((&c, &lo), &hi)| c == lo || c == hi)
            {
                return Err(PreconditionViolated::BoundaryTouchingForeground { at: coord }.into());
            }
            if !Self::advance(&mut coord, &origin, &extent) {
                break;
            }
        }
        Ok(())
    }

    fn seed<I, O, K, Q>(&self, image: &I, ordering: &O, queue: &mut Q, metrics: &mut ThinningMetrics)
    where
        I: Image<P>,
        O: OrderingImage<K>,
        Q: HierarchicalQueue<K, Coord>,
    {
        let origin = image.origin();
        let extent = image.extent();
        let mut coord = origin.clone();
        loop {
            if image.get(&coord) == self.config.foreground && self.has_background_neighbor(image, &coord) {
                queue.push(ordering.get(&coord), coord.clone());
                metrics.seeded += 1;
                metrics.queue_pushes += 1;
            }
            if !Self::advance(&mut coord, &origin, &extent) {
                break;
            }
        }
    }

    fn has_background_neighbor<I: Image<P>>(&self, image: &I, at: &Coord) -> bool {
        self.config.fg_connectivity.neighbors().iter().any(|offset| {
            let y: Coord = at.iter().zip(offset.iter()).map(|(&c, &o)| c + o).collect();
            !image.in_bounds(&y) || image.get(&y) != self.config.foreground
        })
    }

    /// Odometer-style advance of `coord` through the axis-aligned box
    /// `[origin, extent]`, in row-major order. Returns `false` once the
    /// box is exhausted.
    fn advance(coord: &mut Coord, origin: &Coord, extent: &Coord) -> bool {
        for i in 0..coord.len() {
            if coord[i] < extent[i] {
                coord[i] += 1;
                return true;
            }
            coord[i] = origin[i];
        }
        false
    }
}
