//! Topological-number computation: the `(T_fg, T_bg)` pair that the
//! simplicity test is built on.

use crate::connectivity::Connectivity;
use crate::duality::background_connectivity;
use crate::error::ConnectivityError;
use crate::unit_cube_cc_counter::UnitCubeCCCounter;
use crate::unit_cube_neighbors::UnitCubeNeighbors;
use skel_core::{Coord, Image};

/// The result of a topological-number computation at a single voxel.
///
/// `t_bg` is `None` when its computation was short-circuited because
/// `t_fg != 1` already rules out simplicity: `T_bg` need not be
/// computed once `T_fg != 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologicalNumbers {
    /// The foreground topological number `T_fg`.
    pub t_fg: usize,
    /// The background topological number `T_bg`, or `None` if not computed.
    pub t_bg: Option<usize>,
}

impl TopologicalNumbers {
    /// `true` iff both numbers are `1`, the simplicity condition.
    pub fn is_simple(&self) -> bool {
        self.t_fg == 1 && self.t_bg == Some(1)
    }
}

/// Precomputed state for repeatedly evaluating topological numbers
/// under a fixed foreground connectivity.
///
/// Construction derives the dual background connectivity via
/// [`background_connectivity`] and builds both unit-cube adjacency
/// matrices once; [`compute`](Self::compute) is then a pure lookup plus
/// two connected-component counts, cheap enough to call per-voxel in
/// the thinning loop.
#[derive(Debug, Clone)]
pub struct TopologicalNumberCalculator {
    fg_connectivity: Connectivity,
    bg_connectivity: Connectivity,
    fg_counter: UnitCubeCCCounter,
    bg_counter: UnitCubeCCCounter,
    cube_size: usize,
}

impl TopologicalNumberCalculator {
    /// Build a calculator for the given foreground connectivity.
    pub fn new(fg_connectivity: Connectivity) -> Result<Self, ConnectivityError> {
        let n = fg_connectivity.n();
        let (bn, bk) = background_connectivity(n, fg_connectivity.k());
        let bg_connectivity = Connectivity::new(bn, bk)?;
        let fg_counter = UnitCubeCCCounter::new(UnitCubeNeighbors::with_default_neighborhood(&fg_connectivity)?);
        let bg_counter = UnitCubeCCCounter::new(UnitCubeNeighbors::with_default_neighborhood(&bg_connectivity)?);
        let cube_size = 3usize.pow(n as u32);
        Ok(Self { fg_connectivity, bg_connectivity, fg_counter, bg_counter, cube_size })
    }

    /// The foreground connectivity this calculator was built with.
    pub fn fg_connectivity(&self) -> &Connectivity {
        &self.fg_connectivity
    }

    /// The dual background connectivity derived at construction time.
    pub fn bg_connectivity(&self) -> &Connectivity {
        &self.bg_connectivity
    }

    /// Compute `(T_fg, T_bg)` at `center`, treating pixels equal to
    /// `foreground` as foreground and everything else — including
    /// out-of-bounds neighbors — as background.
    pub fn compute<P, I>(&self, image: &I, center: &Coord, foreground: &P) -> TopologicalNumbers
    where
        P: PartialEq,
        I: Image<P>,
    {
        let n = self.fg_connectivity.n();
        let mut fg_mask = vec![false; self.cube_size];
        for i in 0..self.cube_size {
            let offset = Connectivity::int_to_offset(n, i);
            if offset.iter().all(|&c| c == 0) {
                continue;
            }
            let coord: Coord = center.iter().zip(&offset).map(|(&c, &o)| c + o).collect();
            fg_mask[i] = image.in_bounds(&coord) && image.get(&coord) == *foreground;
        }

        let t_fg = self.fg_counter.count(&fg_mask);
        if t_fg != 1 {
            return TopologicalNumbers { t_fg, t_bg: None };
        }

        let bg_mask: Vec<bool> = fg_mask.iter().map(|&is_fg| !is_fg).collect();
        let t_bg = self.bg_counter.count(&bg_mask);
        TopologicalNumbers { t_fg, t_bg: Some(t_bg) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GridImage {
        extent: Coord,
        cells: Vec<u8>,
    }

    impl GridImage {
        fn new(extent: &[i32]) -> Self {
            let size: usize = extent.iter().map(|&e| (e + 1) as usize).product();
            GridImage { extent: extent.iter().copied().collect(), cells: vec![0; size] }
        }

        fn index(&self, coord: &Coord) -> usize {
            let mut idx = 0usize;
            let mut stride = 1usize;
            for (c, e) in coord.iter().zip(&self.extent) {
                idx += *c as usize * stride;
                stride *= (*e + 1) as usize;
            }
            idx
        }

        fn set_fg(&mut self, coord: &[i32]) {
            let c: Coord = coord.iter().copied().collect();
            let idx = self.index(&c);
            self.cells[idx] = 1;
        }
    }

    impl Image<u8> for GridImage {
        fn ndim(&self) -> usize {
            self.extent.len()
        }
        fn in_bounds(&self, coord: &Coord) -> bool {
            coord.len() == self.extent.len()
                && coord.iter().zip(&self.extent).all(|(&c, &e)| c >= 0 && c <= e)
        }
        fn get(&self, coord: &Coord) -> u8 {
            self.cells[self.index(coord)]
        }
        fn set(&mut self, coord: &Coord, value: u8) {
            let idx = self.index(coord);
            self.cells[idx] = value;
        }
        fn origin(&self) -> Coord {
            self.extent.iter().map(|_| 0).collect()
        }
        fn extent(&self) -> Coord {
            self.extent.clone()
        }
    }

    #[test]
    fn isolated_voxel_has_no_foreground_neighbors() {
        let fg = Connectivity::new(2, 1).unwrap();
        let calc = TopologicalNumberCalculator::new(fg).unwrap();
        let mut img = GridImage::new(&[4, 4]);
        img.set_fg(&[2, 2]);
        let center: Coord = [2, 2].into_iter().collect();
        let result = calc.compute(&img, &center, &1u8);
        assert_eq!(result.t_fg, 0);
        assert!(!result.is_simple());
    }

    #[test]
    fn interior_of_filled_square_is_not_simple_border() {
        let fg = Connectivity::new(2, 1).unwrap();
        let calc = TopologicalNumberCalculator::new(fg).unwrap();
        let mut img = GridImage::new(&[6, 6]);
        for y in 1..=5 {
            for x in 1..=5 {
                img.set_fg(&[x, y]);
            }
        }
        let center: Coord = [3, 3].into_iter().collect();
        let result = calc.compute(&img, &center, &1u8);
        // fully interior, all 8 neighbors foreground: T_fg = 1 (one fg
        // component), T_bg = 0 (no background neighbors at all).
        assert_eq!(result.t_fg, 1);
        assert_eq!(result.t_bg, Some(0));
        assert!(!result.is_simple());
    }

    #[test]
    fn endpoint_of_a_bar_is_simple() {
        let fg = Connectivity::new(2, 1).unwrap();
        let calc = TopologicalNumberCalculator::new(fg).unwrap();
        let mut img = GridImage::new(&[6, 2]);
        for x in 0..=5 {
            img.set_fg(&[x, 1]);
        }
        let center: Coord = [0, 1].into_iter().collect();
        let result = calc.compute(&img, &center, &1u8);
        assert!(result.is_simple());
    }

    #[test]
    fn interior_of_a_bar_is_not_simple() {
        let fg = Connectivity::new(2, 1).unwrap();
        let calc = TopologicalNumberCalculator::new(fg).unwrap();
        let mut img = GridImage::new(&[6, 2]);
        for x in 0..=5 {
            img.set_fg(&[x, 1]);
        }
        let center: Coord = [2, 1].into_iter().collect();
        let result = calc.compute(&img, &center, &1u8);
        assert!(!result.is_simple());
    }
}
