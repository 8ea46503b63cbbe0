//! Core types and traits for the `skel` thinning engine.
//!
//! This is the leaf crate with zero internal `skel` dependencies. It defines
//! the fundamental abstractions used throughout the workspace: the n-D
//! coordinate type, the image/ordering accessor traits the engine consumes,
//! and the error taxonomy surfaced at the engine boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{ConfigurationError, InternalInvariant, PreconditionViolated, SkeletonizeError};
pub use id::Coord;
pub use traits::{Image, OrderingImage, ProgressObserver};
