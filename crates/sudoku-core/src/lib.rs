//! Core Sudoku engine: a 9x9 grid plus one backtracking search used for
//! both solving puzzles and generating random solved boards.
//!
//! ```
//! use sudoku_core::{Generator, Solver};
//!
//! let board = Generator::with_seed(42).generate();
//! assert!(board.is_solved());
//!
//! let solution = Solver::new().solve(&board);
//! assert_eq!(solution, Some(board));
//! ```

mod generator;
mod grid;
mod solver;

pub mod search;

pub use generator::Generator;
pub use grid::{Grid, Position};
pub use solver::Solver;
