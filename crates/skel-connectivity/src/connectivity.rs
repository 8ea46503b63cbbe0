//! `Connectivity(n, k)` — the cellular-decomposition connectivity algebra
//! underpinning the rest of the crate.

use crate::error::ConnectivityError;
use skel_core::Coord;
use smallvec::SmallVec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// The `(n, k)`-connectivity: two voxels are adjacent iff their closed
/// unit boxes share a cell of dimension `>= k`, in a space of `n`
/// dimensions.
///
/// Equivalently (and this is how it is built): the neighbors of the
/// origin are every offset in `{-1,0,1}^n \ {0}` whose number of
/// nonzero coordinates is at most `n - k`. In 2D, `(2,1)` is 4-connectivity
/// and `(2,0)` is 8-connectivity; in 3D, `(3,2)`, `(3,1)`, `(3,0)` are
/// 6-, 18- and 26-connectivity respectively.
#[derive(Debug, Clone)]
pub struct Connectivity {
    n: usize,
    k: usize,
    neighbors: Vec<Coord>,
}

impl Connectivity {
    /// Build the `(n, k)`-connectivity.
    ///
    /// Returns [`ConnectivityError::OutOfRange`] unless `0 <= k < n`.
    pub fn new(n: usize, k: usize) -> Result<Self, ConnectivityError> {
        if n == 0 || k >= n {
            return Err(ConnectivityError::OutOfRange { n, k });
        }
        let max_nonzero = n - k;
        let mut neighbors = Vec::with_capacity(Self::number_of_neighbors(n, k));
        for i in 0..3usize.pow(n as u32) {
            let offset = Self::int_to_offset(n, i);
            let nonzero = offset.iter().filter(|&&c| c != 0).count();
            if nonzero >= 1 && nonzero <= max_nonzero {
                neighbors.push(offset);
            }
        }
        Ok(Self { n, k, neighbors })
    }

    /// The fully-connected descriptor for dimension `n`, i.e. `(n, 0)`.
    ///
    /// Mirrors the `SetFullyConnected` toggle of the ITK connectivity
    /// descriptor this crate is modeled on.
    pub fn fully_connected(n: usize) -> Result<Self, ConnectivityError> {
        Self::new(n, 0)
    }

    /// The dimension `n` of the ambient space.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The cell dimension `k`.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The sorted set of neighbor offsets of the origin.
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }

    /// Number of neighbors, i.e. `neighbors().len()`.
    pub fn number_of_neighbors_here(&self) -> usize {
        self.neighbors.len()
    }

    /// `true` iff `offset` is a nonzero offset in `{-1,0,1}^n` with at
    /// most `n - k` nonzero coordinates.
    pub fn is_in_neighborhood(&self, offset: &[i32]) -> bool {
        if offset.len() != self.n {
            return false;
        }
        if offset.iter().any(|&c| !(-1..=1).contains(&c)) {
            return false;
        }
        let nonzero = offset.iter().filter(|&&c| c != 0).count();
        nonzero >= 1 && nonzero <= self.n - self.k
    }

    /// `true` iff `p` and `q` are adjacent under this connectivity,
    /// i.e. `is_in_neighborhood(q - p)`.
    pub fn are_neighbors(&self, p: &[i32], q: &[i32]) -> bool {
        if p.len() != self.n || q.len() != self.n {
            return false;
        }
        let diff: Coord = p.iter().zip(q).map(|(&a, &b)| b - a).collect();
        self.is_in_neighborhood(&diff)
    }

    /// The validated formula `numberOfNeighbors(n,k) = Σ_{j=1..n-k} C(n,j)·2^j`,
    /// used to cross-check `neighbors().len()`.
    pub fn number_of_neighbors(n: usize, k: usize) -> usize {
        if n == 0 || k >= n {
            return 0;
        }
        (1..=(n - k)).map(|j| binomial(n, j) * 2usize.pow(j as u32)).sum()
    }

    /// Encode an offset in `{-1,0,1}^n` as an integer in `[0, 3^n)`.
    ///
    /// Base-3 with digit mapping `0 -> 0`, `1 -> 1`, `-1 -> 2` (fixed
    /// crate-wide; see [`int_to_offset`](Self::int_to_offset) for the
    /// inverse).
    pub fn offset_to_int(offset: &[i32]) -> usize {
        let mut acc = 0usize;
        let mut radix = 1usize;
        for &c in offset {
            let digit = match c {
                0 => 0,
                1 => 1,
                -1 => 2,
                _ => panic!("offset coordinate out of {{-1,0,1}}: {c}"),
            };
            acc += digit * radix;
            radix *= 3;
        }
        acc
    }

    /// Decode an integer in `[0, 3^n)` back into an offset in
    /// `{-1,0,1}^n`. Inverse of [`offset_to_int`](Self::offset_to_int).
    pub fn int_to_offset(n: usize, mut i: usize) -> Coord {
        let mut offset: SmallVec<[i32; 4]> = SmallVec::with_capacity(n);
        for _ in 0..n {
            let digit = i % 3;
            offset.push(match digit {
                0 => 0,
                1 => 1,
                _ => -1,
            });
            i /= 3;
        }
        offset
    }
}

fn binomial(n: usize, j: usize) -> usize {
    if j > n {
        return 0;
    }
    let j = j.min(n - j);
    let mut result = 1usize;
    for i in 0..j {
        result = result * (n - i) / (i + 1);
    }
    result
}

// ── Process-wide default connectivity ───────────────────────────────
//
// A global default (n, k) may be configured; newly created descriptors
// adopt it until overridden. It must be frozen before any engine is
// constructed — changing it mid-run is a usage error. We model that by
// latching a `FROZEN` flag the first time the default is *read*;
// further writes after that point are rejected rather than silently
// applied.

static DEFAULT_CONNECTIVITY: Mutex<(usize, usize)> = Mutex::new((2, 1));
static DEFAULT_FROZEN: AtomicBool = AtomicBool::new(false);

/// Set the process-wide default `(n, k)` connectivity.
///
/// Returns [`ConnectivityError::OutOfRange`] if `(n, k)` is invalid, or
/// if the default has already been read (and is therefore frozen) —
/// mutating it after any engine construction is a usage error, which
/// we surface here rather than silently ignoring the write.
pub fn set_default_connectivity(n: usize, k: usize) -> Result<(), ConnectivityError> {
    if n == 0 || k >= n {
        return Err(ConnectivityError::OutOfRange { n, k });
    }
    if DEFAULT_FROZEN.load(Ordering::Acquire) {
        return Err(ConnectivityError::OutOfRange { n, k });
    }
    *DEFAULT_CONNECTIVITY.lock().expect("default connectivity mutex poisoned") = (n, k);
    Ok(())
}

/// Read the process-wide default `(n, k)` connectivity, freezing it
/// against further mutation.
pub fn default_connectivity() -> (usize, usize) {
    DEFAULT_FROZEN.store(true, Ordering::Release);
    *DEFAULT_CONNECTIVITY.lock().expect("default connectivity mutex poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_count_matches_formula_up_to_4d() {
        for n in 1..=4 {
            for k in 0..n {
                let c = Connectivity::new(n, k).unwrap();
                assert_eq!(
                    c.neighbors().len(),
                    Connectivity::number_of_neighbors(n, k),
                    "mismatch at n={n} k={k}"
                );
            }
        }
    }

    #[test]
    fn familiar_2d_3d_connectivities() {
        assert_eq!(Connectivity::new(2, 1).unwrap().neighbors().len(), 4);
        assert_eq!(Connectivity::new(2, 0).unwrap().neighbors().len(), 8);
        assert_eq!(Connectivity::new(3, 2).unwrap().neighbors().len(), 6);
        assert_eq!(Connectivity::new(3, 1).unwrap().neighbors().len(), 18);
        assert_eq!(Connectivity::new(3, 0).unwrap().neighbors().len(), 26);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(Connectivity::new(2, 2).is_err());
        assert!(Connectivity::new(0, 0).is_err());
    }

    #[test]
    fn offset_int_round_trip() {
        for n in 1..=4 {
            for i in 0..3usize.pow(n as u32) {
                let offset = Connectivity::int_to_offset(n, i);
                assert_eq!(Connectivity::offset_to_int(&offset), i);
            }
        }
    }

    #[test]
    fn are_neighbors_matches_is_in_neighborhood() {
        let c = Connectivity::new(2, 1).unwrap();
        let p: Coord = SmallVec::from_slice(&[1, 1]);
        let q: Coord = SmallVec::from_slice(&[1, 2]);
        assert!(c.are_neighbors(&p, &q));
        let r: Coord = SmallVec::from_slice(&[2, 2]);
        assert!(!c.are_neighbors(&p, &r));
    }

    #[test]
    fn fully_connected_is_k_zero() {
        let c = Connectivity::fully_connected(3).unwrap();
        assert_eq!(c.k(), 0);
        assert_eq!(c.neighbors().len(), 26);
    }
}
