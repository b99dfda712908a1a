//! Brute-force Sudoku solving.
//!
//! ```
//! use gridwalk_sudoku::{Board, solve_sudoku};
//!
//! let board: Board = "
//!     53..7....
//!     6..195...
//!     .98....6.
//!     8...6...3
//!     4..8.3..1
//!     7...2...6
//!     .6....28.
//!     ...419..5
//!     ....8..79"
//!     .parse()
//!     .unwrap();
//! let solution = solve_sudoku(&board).unwrap();
//! assert_eq!(solution.board.get(0, 2), Some(4));
//! assert!(solution.is_filled_by_solver(0, 2));
//! ```

mod board;
mod error;
mod solver;

pub use board::{Board, SIZE};
pub use error::{ParseBoardError, SudokuError};
pub use solver::{Solution, check_consistency, solve_sudoku};
