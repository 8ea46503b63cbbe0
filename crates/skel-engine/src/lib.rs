//! The thinning engine: seeds a hierarchical queue from the border of
//! the foreground object, then drains it under a priority-ordered
//! pop/re-test/delete/re-enqueue loop.
//!
//! Provides [`SkeletonizeEngine`] as the primary entry point, built from
//! a [`SkeletonizeConfig`] and run with a caller-chosen image, ordering
//! image, and queue backend.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;

pub use config::{MaterializedConfig, SkeletonizeConfig};
pub use engine::SkeletonizeEngine;
pub use metrics::ThinningMetrics;
