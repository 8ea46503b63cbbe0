//! `skel`: a homotopy-preserving n-dimensional thinning engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all `skel` sub-crates, plus a single convenience entry point,
//! [`skeletonize`], for the common case. For most users, adding `skel`
//! as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skel::prelude::*;
//!
//! struct GridImage { extent: Coord, cells: Vec<u8> }
//!
//! impl GridImage {
//!     fn new(side: i32) -> Self {
//!         GridImage { extent: [side - 1, side - 1].into_iter().collect(), cells: vec![0; (side * side) as usize] }
//!     }
//!     fn index(&self, c: &Coord) -> usize {
//!         (c[1] * (self.extent[0] + 1) + c[0]) as usize
//!     }
//! }
//!
//! impl Image<u8> for GridImage {
//!     fn ndim(&self) -> usize { 2 }
//!     fn in_bounds(&self, c: &Coord) -> bool {
//!         c.iter().zip(&self.extent).all(|(&v, &e)| v >= 0 && v <= e)
//!     }
//!     fn get(&self, c: &Coord) -> u8 { self.cells[self.index(c)] }
//!     fn set(&mut self, c: &Coord, v: u8) { let i = self.index(c); self.cells[i] = v; }
//!     fn origin(&self) -> Coord { [0, 0].into_iter().collect() }
//!     fn extent(&self) -> Coord { self.extent.clone() }
//! }
//!
//! struct ChessboardOrdering { extent: Coord }
//!
//! impl OrderingImage<i64> for ChessboardOrdering {
//!     fn get(&self, c: &Coord) -> i64 { c.iter().map(|&v| v as i64).max().unwrap_or(0) }
//!     fn origin(&self) -> Coord { [0, 0].into_iter().collect() }
//!     fn extent(&self) -> Coord { self.extent.clone() }
//! }
//!
//! // 7x7 image, foreground filled on the 3x3 square [2..4]^2: thins
//! // down to the single voxel at its center.
//! let mut image = GridImage::new(7);
//! for y in 2..=4 {
//!     for x in 2..=4 {
//!         let c: Coord = [x, y].into_iter().collect();
//!         image.set(&c, 1);
//!     }
//! }
//! let ordering = ChessboardOrdering { extent: image.extent() };
//!
//! skel::skeletonize(&mut image, &ordering, 2, 0, 1u8, 0u8).unwrap();
//!
//! let center: Coord = [3, 3].into_iter().collect();
//! assert_eq!(image.get(&center), 1);
//! assert_eq!(image.cells.iter().filter(|&&v| v == 1).count(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude, or to assemble a custom [`SkeletonizeConfig`] (a
//! non-default connectivity, a pluggable simplicity/terminality
//! predicate, a vector-backed queue, a progress observer, or
//! cooperative cancellation).
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `skel-core` | `Coord`, `Image`/`OrderingImage`/`ProgressObserver` traits, error taxonomy |
//! | [`connectivity`] | `skel-connectivity` | `Connectivity(n, k)`, duality/neighborhood tables, `UnitCubeNeighbors`, `UnitCubeCCCounter`, `TopologicalNumberCalculator` |
//! | [`predicates`] | `skel-predicates` | `SimplicityCriterion`, `TerminalityCriterion`, the `Predicate` capability alias |
//! | [`queue`] | `skel-queue` | `HierarchicalQueue`, `MapQueue`, `VecQueue`, `Order` |
//! | [`engine`] | `skel-engine` | `SkeletonizeConfig`, `SkeletonizeEngine`, `ThinningMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, image/ordering accessor traits, and the error taxonomy
/// (`skel-core`).
pub use skel_core as core;

/// The `(n, k)`-connectivity algebra and the topological-number
/// machinery built on top of it (`skel-connectivity`).
pub use skel_connectivity as connectivity;

/// The pluggable simplicity and terminality predicates (`skel-predicates`).
pub use skel_predicates as predicates;

/// The hierarchical priority queue and its two backends (`skel-queue`).
pub use skel_queue as queue;

/// The thinning engine itself (`skel-engine`).
pub use skel_engine as engine;

use skel_core::{Image, OrderingImage, SkeletonizeError};
use skel_engine::{SkeletonizeConfig, SkeletonizeEngine, ThinningMetrics};
use skel_queue::{MapQueue, Order};

/// Skeletonize `image` in place, driven by `ordering`, under the
/// `(n, k)` foreground connectivity and the given foreground/background
/// pixel values.
///
/// This is the single-call convenience wrapper over the full pipeline:
/// it materializes the default simplicity and terminality predicates,
/// drains through a map-backed
/// queue in ascending-priority order, and runs with no progress
/// observer and no cancellation. For a non-default connectivity
/// ordering, custom predicates, a bounded-integer vector-backed queue,
/// progress reporting, or cooperative cancellation, build a
/// [`SkeletonizeConfig`] and [`SkeletonizeEngine`] directly instead.
pub fn skeletonize<P, I, O, K>(
    image: &mut I,
    ordering: &O,
    n: usize,
    k: usize,
    foreground: P,
    background: P,
) -> Result<ThinningMetrics, SkeletonizeError>
where
    P: PartialEq + Clone + 'static,
    I: Image<P>,
    O: OrderingImage<K>,
    K: Ord + Clone,
{
    let config = SkeletonizeConfig::new(n, k, foreground, background)?;
    let engine = SkeletonizeEngine::new(config)?;
    let queue: MapQueue<K, skel_core::Coord> = MapQueue::new(Order::Ascending);
    engine.run(image, ordering, queue, (), || false)
}

/// Common imports for typical `skel` usage.
///
/// ```rust
/// use skel::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use skel_core::{Coord, Image, OrderingImage, ProgressObserver};

    // Errors
    pub use skel_core::{ConfigurationError, PreconditionViolated, SkeletonizeError};

    // Connectivity
    pub use skel_connectivity::Connectivity;

    // Predicates
    pub use skel_predicates::{Predicate, SimplicityCriterion, TerminalityCriterion};

    // Queue
    pub use skel_queue::{HierarchicalQueue, MapQueue, Order, VecQueue};

    // Engine
    pub use skel_engine::{SkeletonizeConfig, SkeletonizeEngine, ThinningMetrics};

    pub use crate::skeletonize;
}
