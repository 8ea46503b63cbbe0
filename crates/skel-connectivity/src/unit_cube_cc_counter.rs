//! `UnitCubeCCCounter`: counts connected components of a masked subset
//! of the `3^n` unit cube, under a connectivity gated by
//! [`UnitCubeNeighbors`].

use crate::connectivity::Connectivity;
use crate::unit_cube_neighbors::UnitCubeNeighbors;

/// Functor counting connected components restricted to a unit cube.
///
/// This is the engine behind topological-number computation and is
/// otherwise not useful on its own: the center cell is always treated
/// as absent, matching the simplicity test's exclusion of the voxel
/// under consideration from its own neighborhood.
#[derive(Debug, Clone)]
pub struct UnitCubeCCCounter {
    neighbors: UnitCubeNeighbors,
    size: usize,
    center_index: usize,
}

impl UnitCubeCCCounter {
    /// Build a counter from a precomputed adjacency matrix.
    pub fn new(neighbors: UnitCubeNeighbors) -> Self {
        let n = neighbors.n();
        let size = 3usize.pow(n as u32);
        let center_index = Connectivity::offset_to_int(&vec![0i32; n]);
        Self { neighbors, size, center_index }
    }

    /// Count the connected components of `mask` (a boolean array of
    /// length `3^n`, indexed via [`Connectivity::offset_to_int`]).
    ///
    /// The center is cleared regardless of the mask's value there —
    /// the simplicity test never considers the voxel it is testing to
    /// be part of its own neighborhood.
    ///
    /// # Panics
    ///
    /// Panics if `mask.len() != 3^n`.
    pub fn count(&self, mask: &[bool]) -> usize {
        assert_eq!(mask.len(), self.size, "mask must cover the full 3^n unit cube");
        let mut mask = mask.to_vec();
        mask[self.center_index] = false;

        let mut uf = UnionFind::new(self.size);
        for p in 0..self.size {
            if !mask[p] {
                continue;
            }
            let p_offset = Connectivity::int_to_offset(self.n(), p);
            for q in (p + 1)..self.size {
                if !mask[q] {
                    continue;
                }
                let q_offset = Connectivity::int_to_offset(self.n(), q);
                let diff: Vec<i32> = p_offset.iter().zip(&q_offset).map(|(&a, &b)| b - a).collect();
                let neg_diff: Vec<i32> = diff.iter().map(|&c| -c).collect();
                if self.neighbors.get(&p_offset, &diff) || self.neighbors.get(&q_offset, &neg_diff) {
                    uf.union(p, q);
                }
            }
        }

        let mut roots = std::collections::HashSet::new();
        for p in 0..self.size {
            if mask[p] {
                roots.insert(uf.find(p));
            }
        }
        roots.len()
    }

    fn n(&self) -> usize {
        self.neighbors.n()
    }
}

/// Minimal union-find with path compression, scoped to a single
/// `count()` call over at most `3^n` elements.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self { parent: (0..size).collect() }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}
