//! `SimplicityCriterion`: true iff `T_fg = T_bg = 1`.

use skel_connectivity::{Connectivity, ConnectivityError, TopologicalNumberCalculator};
use skel_core::{Coord, Image};

use crate::Predicate;

/// Topological-number-based simplicity test.
///
/// Wraps a [`TopologicalNumberCalculator`] fixed to one foreground
/// connectivity and one foreground pixel value; evaluating it at a
/// point tests whether `T_fg = T_bg = 1` there.
pub struct SimplicityCriterion<P> {
    calculator: TopologicalNumberCalculator,
    foreground: P,
}

impl<P: PartialEq> SimplicityCriterion<P> {
    /// Build a criterion for the given foreground connectivity and
    /// foreground pixel value.
    pub fn new(fg_connectivity: Connectivity, foreground: P) -> Result<Self, ConnectivityError> {
        Ok(Self { calculator: TopologicalNumberCalculator::new(fg_connectivity)?, foreground })
    }

    /// The foreground connectivity this criterion was built with.
    pub fn fg_connectivity(&self) -> &Connectivity {
        self.calculator.fg_connectivity()
    }

    /// `true` iff `at` is simple in `image`: removing it would change
    /// neither the foreground nor the background component count.
    pub fn is_simple(&self, image: &dyn Image<P>, at: &Coord) -> bool {
        self.calculator.compute(image, at, &self.foreground).is_simple()
    }
}

impl<P: PartialEq + 'static> SimplicityCriterion<P> {
    /// Erase this criterion into the engine's function-valued
    /// `(image, index) -> bool` capability slot, so it can sit alongside
    /// hand-written or test-fixture predicates of the same shape
    /// without the engine depending on this type.
    pub fn into_predicate(self) -> Predicate<P> {
        Box::new(move |image, at| self.is_simple(image, at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        len: i32,
        fg: Vec<bool>,
    }

    impl Image<u8> for Line {
        fn ndim(&self) -> usize {
            1
        }
        fn in_bounds(&self, coord: &Coord) -> bool {
            coord.len() == 1 && coord[0] >= 0 && coord[0] < self.len
        }
        fn get(&self, coord: &Coord) -> u8 {
            self.fg[coord[0] as usize] as u8
        }
        fn set(&mut self, coord: &Coord, value: u8) {
            self.fg[coord[0] as usize] = value != 0;
        }
        fn origin(&self) -> Coord {
            [0].into_iter().collect()
        }
        fn extent(&self) -> Coord {
            [self.len - 1].into_iter().collect()
        }
    }

    #[test]
    fn interior_of_a_bar_is_not_simple() {
        // Removing a strictly interior point of a line would split it
        // into two components, so it must not be simple.
        let fg = Connectivity::new(1, 0).unwrap();
        let criterion = SimplicityCriterion::new(fg, 1u8).unwrap();
        let img = Line { len: 5, fg: vec![true; 5] };
        let at: Coord = [2].into_iter().collect();
        assert!(!criterion.is_simple(&img, &at));
    }

    #[test]
    fn endpoint_of_a_bar_is_simple() {
        let fg = Connectivity::new(1, 0).unwrap();
        let criterion = SimplicityCriterion::new(fg, 1u8).unwrap();
        let img = Line { len: 5, fg: vec![true; 5] };
        let at: Coord = [0].into_iter().collect();
        assert!(criterion.is_simple(&img, &at));
    }

    #[test]
    fn isolated_voxel_is_not_simple() {
        let fg = Connectivity::new(1, 0).unwrap();
        let criterion = SimplicityCriterion::new(fg, 1u8).unwrap();
        let img = Line { len: 5, fg: vec![false, false, true, false, false] };
        let at: Coord = [2].into_iter().collect();
        assert!(!criterion.is_simple(&img, &at));
    }
}
