//! Example demonstrating the two solving strategies.
//!
//! This example shows how to:
//! - Parse a puzzle from the canonical 81-character format
//! - Run the deductive solver, the backtracking search, or both in sequence
//! - Render the resulting grid with block separators
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Solve a specific puzzle with the search only:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --strategy search --grid <81 chars>
//! ```
//!
//! Watch the deducer's pass-by-pass progress:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_puzzle -- --strategy deduce
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use twinsolve_core::{Grid, Position};
use twinsolve_solver::{Backtracker, DeduceStats, Deducer, SearchStats};

/// A known solvable puzzle, used when no grid is given.
const DEFAULT_PUZZLE: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Rule-based deduction only; may stall.
    Deduce,
    /// Exhaustive backtracking search only.
    Search,
    /// Deduce first, then search the remaining blanks.
    Both,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as 81 characters of 0-9, row-major, 0 meaning empty.
    #[arg(long, value_name = "GRID", default_value = DEFAULT_PUZZLE)]
    grid: String,

    /// Solving strategy.
    #[arg(long, value_name = "STRATEGY", default_value = "both")]
    strategy: Strategy,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut grid: Grid = match args.grid.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            process::exit(2);
        }
    };

    println!("Puzzle ({} clues):", grid.score());
    print_grid(&grid);

    let solved = match args.strategy {
        Strategy::Deduce => run_deduce(&mut grid),
        Strategy::Search => run_search(&mut grid),
        Strategy::Both => run_deduce(&mut grid) || run_search(&mut grid),
    };

    println!();
    println!("Result:");
    print_grid(&grid);

    if solved {
        println!("Solved.");
    } else {
        println!("Not solved ({} of 81 cells).", grid.score());
        process::exit(1);
    }
}

fn run_deduce(grid: &mut Grid) -> bool {
    let mut stats = DeduceStats::new();
    let solved = Deducer::new().solve_with_stats(grid, &mut stats);
    println!(
        "Deduction: {} passes, {} eliminations, {} naked singles, {} hidden singles",
        stats.passes(),
        stats.eliminations(),
        stats.naked_singles(),
        stats.hidden_singles()
    );
    solved
}

fn run_search(grid: &mut Grid) -> bool {
    let mut stats = SearchStats::new();
    let solved = Backtracker::new().solve_with_stats(grid, &mut stats);
    println!("Search: {} nodes tried", stats.nodes());
    solved
}

/// Prints the grid with 3×3 block separators, `-` for empty cells.
fn print_grid(grid: &Grid) {
    for row in 0..9 {
        if row > 0 && row % 3 == 0 {
            println!("---+---+---");
        }
        for col in 0..9 {
            if col > 0 && col % 3 == 0 {
                print!("|");
            }
            match grid.digit(Position::new(row, col)) {
                Some(digit) => print!("{digit}"),
                None => print!("-"),
            }
        }
        println!();
    }
}
