//! Simplicity and terminality predicates for the thinning engine.
//!
//! The engine depends on a pair of function-valued configuration
//! slots, not on an inheritance root: the capability `(image, index) ->
//! bool`. [`SimplicityCriterion`] and [`TerminalityCriterion`] are the
//! two built-in values satisfying that shape; [`Predicate`] is the
//! erased slot type the engine actually stores, so a caller-supplied
//! closure is just as acceptable as either builtin.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod simplicity;
mod terminality;

pub use simplicity::SimplicityCriterion;
pub use terminality::TerminalityCriterion;

use skel_core::{Coord, Image};

/// An erased `(image, index) -> bool` capability: a simplicity test, a
/// terminality test, or any other per-voxel predicate of the same
/// shape the engine can be configured with.
pub type Predicate<P> = Box<dyn Fn(&dyn Image<P>, &Coord) -> bool + Send + Sync>;
