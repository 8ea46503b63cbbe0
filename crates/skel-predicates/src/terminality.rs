//! `TerminalityCriterion`: the default end-point rule, plus the
//! function-valued capability it plugs into.

use skel_connectivity::Connectivity;
use skel_core::{Coord, Image};

use crate::Predicate;

/// Default terminality rule: terminal iff `at` has exactly one
/// `C_fg`-neighbor `y` that is foreground, and `y` itself has at least
/// one other foreground neighbor besides `at`.
///
/// A plain "exactly one neighbor" count cannot tell a genuine curve
/// endpoint from one half of an isolated two-voxel pair: both voxels
/// of such a pair have exactly one foreground neighbor — each other —
/// so a bare count would freeze them in place forever instead of
/// thinning the pair down to a single surviving point. Requiring the
/// neighbor to have further support besides `at` is what tells those
/// two cases apart, while agreeing with the bare count on every
/// ordinary curve endpoint (whose single neighbor always continues on
/// to the rest of the curve).
///
/// An isolated voxel (zero foreground neighbors) is never terminal
/// under this rule; it is preserved instead because it is not simple
/// (T_fg = 0), not because it is terminal.
pub struct TerminalityCriterion<P> {
    fg_connectivity: Connectivity,
    foreground: P,
}

impl<P: PartialEq> TerminalityCriterion<P> {
    /// Build the default terminality criterion for a foreground
    /// connectivity and pixel value.
    pub fn new(fg_connectivity: Connectivity, foreground: P) -> Self {
        Self { fg_connectivity, foreground }
    }

    /// The foreground connectivity this criterion was built with.
    pub fn fg_connectivity(&self) -> &Connectivity {
        &self.fg_connectivity
    }

    fn foreground_neighbors(&self, image: &dyn Image<P>, at: &Coord) -> Vec<Coord> {
        self.fg_connectivity
            .neighbors()
            .iter()
            .map(|offset| at.iter().zip(offset.iter()).map(|(&c, &o)| c + o).collect::<Coord>())
            .filter(|coord| image.in_bounds(coord) && image.get(coord) == self.foreground)
            .collect()
    }

    /// `true` iff `at` has exactly one foreground `C_fg`-neighbor, and
    /// that neighbor has at least one foreground `C_fg`-neighbor of
    /// its own besides `at`.
    pub fn is_terminal(&self, image: &dyn Image<P>, at: &Coord) -> bool {
        let neighbors = self.foreground_neighbors(image, at);
        let [y] = neighbors.as_slice() else { return false };
        self.foreground_neighbors(image, y).iter().any(|n| n != at)
    }
}

impl<P: PartialEq + 'static> TerminalityCriterion<P> {
    /// Erase this criterion into the engine's `(image, index) -> bool`
    /// capability slot, interchangeable with any other closure of the
    /// same shape — including a caller-supplied rule that replaces the
    /// default end-point test entirely.
    pub fn into_predicate(self) -> Predicate<P> {
        Box::new(move |image, at| self.is_terminal(image, at))
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
    fn endpoint_of_bar_is_terminal() {
        let fg = Connectivity::new(1, 0).unwrap();
        let criterion = TerminalityCriterion::new(fg, 1u8);
        let img = Line { len: 5, fg: vec![true; 5] };
        let at: Coord = [0].into_iter().collect();
        assert!(criterion.is_terminal(&img, &at));
    }

    #[test]
    fn interior_of_bar_is_not_terminal() {
        let fg = Connectivity::new(1, 0).unwrap();
        let criterion = TerminalityCriterion::new(fg, 1u8);
        let img = Line { len: 5, fg: vec![true; 5] };
        let at: Coord = [2].into_iter().collect();
        assert!(!criterion.is_terminal(&img, &at));
    }

    #[test]
    fn isolated_voxel_is_not_terminal_by_default_rule() {
        // Zero foreground neighbors: the default rule requires exactly
        // one, so a fully isolated voxel is not terminal under it.
        let fg = Connectivity::new(1, 0).unwrap();
        let criterion = TerminalityCriterion::new(fg, 1u8);
        let img = Line { len: 5, fg: vec![false, false, true, false, false] };
        let at: Coord = [2].into_iter().collect();
        assert!(!criterion.is_terminal(&img, &at));
    }

    #[test]
    fn either_half_of_an_isolated_pair_is_not_terminal() {
        // Two mutually-adjacent voxels with no other support: each has
        // exactly one foreground neighbor (the other), but that
        // neighbor has no further support of its own, so neither
        // counts as terminal. This lets the pair thin down to a single
        // surviving voxel instead of freezing both in place.
        let fg = Connectivity::new(1, 0).unwrap();
        let criterion = TerminalityCriterion::new(fg, 1u8);
        let img = Line { len: 5, fg: vec![false, true, true, false, false] };
        let left: Coord = [1].into_iter().collect();
        let right: Coord = [2].into_iter().collect();
        assert!(!criterion.is_terminal(&img, &left));
        assert!(!criterion.is_terminal(&img, &right));
    }
}
