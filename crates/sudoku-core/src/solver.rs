use crate::grid::Grid;
use crate::search::{search, Ascending};

/// Backtracking Sudoku solver
///
/// Candidates are tried in ascending order, so for a given input the
/// result is the first solution in lexicographic search order and is
/// fully deterministic. When a puzzle has several solutions, only that
/// first one is returned.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved grid if one exists
    ///
    /// The input is validated upfront: a grid that already duplicates a
    /// value within a row, column, or box is rejected with `None`, since
    /// the search only prevents new conflicts and would otherwise carry
    /// the bad cells into its output. An unsatisfiable (but conflict-free)
    /// puzzle also yields `None`; neither case is an error.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        if grid.has_conflicts() {
            return None;
        }

        let mut working = *grid;
        if search(&mut working, &mut Ascending) {
            Some(working)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_classic_puzzle() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();

        assert!(solution.is_solved());
        assert_eq!(solution, Grid::from_string(CLASSIC_SOLVED).unwrap());
    }

    #[test]
    fn test_solve_keeps_givens() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();

        for pos in Position::all() {
            if grid.get(pos) != 0 {
                assert_eq!(solution.get(pos), grid.get(pos));
            }
        }
    }

    #[test]
    fn test_solve_fills_single_blank() {
        let mut grid = Grid::from_string(CLASSIC_SOLVED).unwrap();
        grid.clear(Position::new(4, 4));

        let solution = Solver::new().solve(&grid).unwrap();
        assert_eq!(solution.get(Position::new(4, 4)), 5);
        assert_eq!(solution, Grid::from_string(CLASSIC_SOLVED).unwrap());
    }

    #[test]
    fn test_solve_already_solved_grid() {
        let grid = Grid::from_string(CLASSIC_SOLVED).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        assert_eq!(solution, grid);
    }

    #[test]
    fn test_solve_rejects_conflicting_input() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), 5);
        grid.set(Position::new(0, 1), 5);

        assert!(Solver::new().solve(&grid).is_none());
    }

    #[test]
    fn test_solve_unsatisfiable_puzzle() {
        // Conflict-free, but (0, 7) and (0, 8) need 8 and 9 while column 8
        // already holds both.
        let mut grid = Grid::new();
        for col in 0..7 {
            grid.set(Position::new(0, col), (col + 1) as u8);
        }
        grid.set(Position::new(4, 8), 8);
        grid.set(Position::new(5, 8), 9);

        assert!(!grid.has_conflicts());
        assert!(Solver::new().solve(&grid).is_none());
    }

    #[test]
    fn test_solve_is_deterministic() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        assert_eq!(solver.solve(&grid), solver.solve(&grid));
    }
}
