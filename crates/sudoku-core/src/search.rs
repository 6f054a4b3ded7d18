//! The backtracking search shared by the solver and the generator.
//!
//! Solving and generation run the exact same depth-first search; the only
//! difference is the order candidates are tried in, supplied through
//! [`CandidateOrder`].

use crate::grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;

/// Strategy for ordering the digits 1..=9 at each search step
pub trait CandidateOrder {
    /// Produce the candidate digits in the order they should be tried
    fn candidates(&mut self) -> [u8; 9];
}

/// Fixed ascending order; makes solving deterministic
pub struct Ascending;

impl CandidateOrder for Ascending {
    fn candidates(&mut self) -> [u8; 9] {
        [1, 2, 3, 4, 5, 6, 7, 8, 9]
    }
}

/// A fresh uniform permutation at every search step, for generation
pub struct Shuffled<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> Shuffled<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CandidateOrder for Shuffled<'_, R> {
    fn candidates(&mut self) -> [u8; 9] {
        let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(self.rng);
        digits
    }
}

/// Fill every empty cell of `grid` with a consistent assignment, using
/// chronological backtracking over the first empty cell in row-major
/// order.
///
/// Returns `true` when the grid holds a complete assignment extending its
/// starting contents. Returns `false` when no such assignment exists; in
/// that case every tentative assignment has been undone and the grid is
/// exactly as it was passed in.
///
/// Consistency is only enforced for new placements. A grid that already
/// violates row, column, or box uniqueness is accepted as-is and the
/// conflicting cells are never rewritten; callers wanting to reject such
/// input should check [`Grid::has_conflicts`] first.
pub fn search(grid: &mut Grid, order: &mut impl CandidateOrder) -> bool {
    let pos = match grid.find_empty() {
        Some(pos) => pos,
        None => return true,
    };

    for value in order.candidates() {
        if grid.is_consistent(pos, value) {
            grid.set(pos, value);
            if search(grid, order) {
                return true;
            }
            grid.clear(pos);
        }
    }

    false
}
