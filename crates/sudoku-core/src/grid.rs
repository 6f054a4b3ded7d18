use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell position on the board, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position::new(row, col)))
    }
}

/// A 9x9 Sudoku board
///
/// Cells hold values in 0..=9 where 0 means empty. The grid carries no
/// search state of its own; the solver and generator mutate it in place
/// through [`set`](Grid::set) and [`clear`](Grid::clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid (all cells 0)
    pub fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Create a grid from explicit row arrays
    pub fn from_rows(cells: [[u8; 9]; 9]) -> Self {
        Self { cells }
    }

    /// Parse a grid from an 81-character string, one cell per character
    /// in row-major order. `0` or `.` marks an empty cell.
    pub fn from_string(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != 81 {
            return None;
        }

        let mut grid = Self::new();
        for (i, ch) in s.chars().enumerate() {
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            grid.cells[i / 9][i % 9] = value;
        }
        Some(grid)
    }

    /// Get the value at a position (0 = empty)
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set a cell to a value in 1..=9
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.cells[pos.row][pos.col] = value;
    }

    /// Reset a cell to empty
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0;
    }

    /// Find the first empty cell in row-major order
    ///
    /// The scan order is the search's variable ordering, so it must stay
    /// deterministic: row 0..8, and within each row col 0..8.
    pub fn find_empty(&self) -> Option<Position> {
        for row in 0..9 {
            for col in 0..9 {
                if self.cells[row][col] == 0 {
                    return Some(Position::new(row, col));
                }
            }
        }
        None
    }

    /// Check whether `value` can be placed at `pos` without duplicating
    /// an existing value in its row, column, or 3x3 box
    pub fn is_consistent(&self, pos: Position, value: u8) -> bool {
        for i in 0..9 {
            if self.cells[pos.row][i] == value || self.cells[i][pos.col] == value {
                return false;
            }
        }

        let box_row = (pos.row / 3) * 3;
        let box_col = (pos.col / 3) * 3;
        for row in box_row..box_row + 3 {
            for col in box_col..box_col + 3 {
                if self.cells[row][col] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Count the empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Check whether every cell is assigned
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Check whether any row, column, or box already holds the same
    /// non-zero value twice
    pub fn has_conflicts(&self) -> bool {
        for i in 0..9 {
            let mut row_seen = [false; 10];
            let mut col_seen = [false; 10];
            for j in 0..9 {
                let row_value = self.cells[i][j] as usize;
                if row_value != 0 {
                    if row_seen[row_value] {
                        return true;
                    }
                    row_seen[row_value] = true;
                }
                let col_value = self.cells[j][i] as usize;
                if col_value != 0 {
                    if col_seen[col_value] {
                        return true;
                    }
                    col_seen[col_value] = true;
                }
            }
        }

        for box_row in (0..9).step_by(3) {
            for box_col in (0..9).step_by(3) {
                let mut seen = [false; 10];
                for row in box_row..box_row + 3 {
                    for col in box_col..box_col + 3 {
                        let value = self.cells[row][col] as usize;
                        if value != 0 {
                            if seen[value] {
                                return true;
                            }
                            seen[value] = true;
                        }
                    }
                }
            }
        }

        false
    }

    /// Check whether the grid is a valid complete solution: every row,
    /// column, and box contains each of 1..=9 exactly once
    pub fn is_solved(&self) -> bool {
        self.is_complete() && !self.has_conflicts()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row == 3 || row == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    write!(f, "| ")?;
                }
                if col == 8 {
                    writeln!(f, "{}", self.cells[row][col])?;
                } else {
                    write!(f, "{} ", self.cells[row][col])?;
                }
            }
        }
        Ok(())
    }
}
