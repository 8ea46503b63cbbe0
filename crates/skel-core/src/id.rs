//! The [`Coord`] type alias.

use smallvec::SmallVec;

/// A coordinate in the n-dimensional voxel grid.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for images up to
/// 4 dimensions, which covers the 2D/3D cases the algorithm is normally
/// applied to. Higher-dimensional images spill to the heap transparently;
/// nothing in the algorithm assumes a fixed dimension.
pub type Coord = SmallVec<[i32; 4]>;
