//! Basic example of using the Sudoku engine

use sudoku_core::{Generator, Grid, Solver};

fn main() {
    // Generate a random solved board
    let mut generator = Generator::with_seed(42);
    let board = generator.generate();

    println!("Generated board:");
    println!("{}", board);

    // Parse and solve a puzzle from a string
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_string(puzzle_string).expect("valid puzzle string");

    println!("Puzzle ({} empty cells):", puzzle.empty_count());
    println!("{}", puzzle);

    let solver = Solver::new();
    match solver.solve(&puzzle) {
        Some(solution) => {
            println!("Solution:");
            println!("{}", solution);
        }
        None => println!("No solution exists."),
    }
}
