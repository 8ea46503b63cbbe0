//! `UnitCubeNeighbors`: for each offset `p1` in the `3^n` cube, which
//! offsets `p2` are `n`-neighbors of `p1` while `p1 + p2` remains in
//! the cube.

use crate::connectivity::Connectivity;
use crate::duality::neighborhood_connectivity;
use crate::error::ConnectivityError;

/// Precomputed boolean adjacency matrix `M[p1][p2]` over the `3^n`
/// offsets of the unit cube, for a primary connectivity `C` and a
/// neighborhood connectivity `C' = N(C)`.
///
/// `M[p1][p2]` is `true` iff all of:
/// - `p1` is a `C'`-neighbor of the origin,
/// - `p2` is a `C`-neighbor offset (equivalently, `p1 + p2` is a
///   `C`-neighbor of `p1`),
/// - `p1 + p2` lies in `[-1, 1]^n`.
#[derive(Debug, Clone)]
pub struct UnitCubeNeighbors {
    n: usize,
    size: usize,
    matrix: Vec<bool>,
}

impl UnitCubeNeighbors {
    /// Build the matrix for an explicit `(primary, neighborhood)` pair.
    ///
    /// Both connectivities must share the same dimension `n`.
    pub fn new(primary: &Connectivity, neighborhood: &Connectivity) -> Self {
        assert_eq!(
            primary.n(),
            neighborhood.n(),
            "primary and neighborhood connectivity must share a dimension"
        );
        let n = primary.n();
        let size = 3usize.pow(n as u32);
        let mut matrix = vec![false; size * size];
        for p1_int in 0..size {
            let p1 = Connectivity::int_to_offset(n, p1_int);
            if !neighborhood.is_in_neighborhood(&p1) {
                continue;
            }
            for p2_int in 0..size {
                let p2 = Connectivity::int_to_offset(n, p2_int);
                let sum_in_cube = p1.iter().zip(&p2).all(|(&a, &b)| (-1..=1).contains(&(a + b)));
                if sum_in_cube && primary.is_in_neighborhood(&p2) {
                    matrix[p1_int * size + p2_int] = true;
                }
            }
        }
        Self { n, size, matrix }
    }

    /// Build the matrix using the default neighborhood connectivity
    /// `N(C)` for the given primary connectivity.
    pub fn with_default_neighborhood(primary: &Connectivity) -> Result<Self, ConnectivityError> {
        let (n, k) = neighborhood_connectivity(primary.n(), primary.k());
        let neighborhood = Connectivity::new(n, k)?;
        Ok(Self::new(primary, &neighborhood))
    }

    /// The shared dimension `n`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// `M[p1][p2]`, looked up by raw offset coordinates. Offsets with a
    /// component outside `{-1, 0, 1}` are never adjacent under this
    /// matrix and return `false` rather than panicking, since callers
    /// compute `p2` as a difference of two cube positions which may
    /// legitimately fall outside the encodable range.
    pub fn get(&self, p1: &[i32], p2: &[i32]) -> bool {
        if p1.len() != self.n || p2.len() != self.n {
            return false;
        }
        if p1.iter().any(|&c| !(-1..=1).contains(&c)) || p2.iter().any(|&c| !(-1..=1).contains(&c)) {
            return false;
        }
        let i1 = Connectivity::offset_to_int(p1);
        let i2 = Connectivity::offset_to_int(p2);
        self.matrix[i1 * self.size + i2]
    }
}
