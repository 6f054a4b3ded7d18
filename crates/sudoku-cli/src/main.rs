use clap::Parser;
use std::process;
use sudoku_core::{Generator, Grid, Solver};

/// Generate a random Sudoku board, or solve a given one
#[derive(Parser)]
#[command(name = "sudoku", version, about)]
struct Args {
    /// 81-character puzzle to solve, row-major, with `0` or `.` for empty
    /// cells; a random board is generated when omitted
    puzzle: Option<String>,

    /// Seed for reproducible board generation
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let board = match &args.puzzle {
        Some(text) => match Grid::from_string(text) {
            Some(grid) => grid,
            None => {
                eprintln!("Invalid puzzle: expected 81 cells, each 0-9 or '.'");
                process::exit(2);
            }
        },
        None => {
            let mut generator = match args.seed {
                Some(seed) => Generator::with_seed(seed),
                None => Generator::new(),
            };
            generator.generate()
        }
    };

    println!("Board:");
    println!("{}", board);
    println!("#############################");

    match Solver::new().solve(&board) {
        Some(solved) => {
            println!("Solved:");
            println!("{}", solved);
        }
        None => println!("No solution exists."),
    }
}
