//! Cellular-decomposition connectivity for n-dimensional binary images.
//!
//! Defines the `(n, k)`-connectivity algebra, its dual background and
//! neighborhood-connectivity tables, the unit-cube adjacency matrix
//! derived from them, and the connected-component counter and
//! topological-number calculator built on top of that matrix.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod connectivity;
mod duality;
mod error;
mod topological_number;
mod unit_cube_cc_counter;
mod unit_cube_neighbors;

pub use connectivity::{default_connectivity, set_default_connectivity, Connectivity};
pub use duality::{background_connectivity, neighborhood_connectivity};
pub use error::ConnectivityError;
pub use topological_number::{TopologicalNumberCalculator, TopologicalNumbers};
pub use unit_cube_cc_counter::UnitCubeCCCounter;
pub use unit_cube_neighbors::UnitCubeNeighbors;
