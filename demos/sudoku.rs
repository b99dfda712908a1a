//! Terminal Sudoku demo.
//!
//! Run: cargo run --bin sudoku -- [PUZZLE]

use clap::Parser;
use gridwalk_demos::sudoku_report;
use gridwalk_sudoku::Board;

const SAMPLE: &str = "
    53..7....
    6..195...
    .98....6.
    8...6...3
    4..8.3..1
    7...2...6
    .6....28.
    ...419..5
    ....8..79";

/// Solve a Sudoku puzzle by brute force.
#[derive(Parser, Debug)]
#[command(name = "sudoku", long_about = None)]
struct Args {
    /// 81 cells in row-major order: `1`-`9` for givens, `.` or `0` for
    /// blanks. Solves a sample puzzle when omitted.
    puzzle: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let board: Board = args.puzzle.as_deref().unwrap_or(SAMPLE).parse()?;
    print!("{}", sudoku_report(&board)?);
    Ok(())
}
