//! Error types for Sudoku boards and solving.

use thiserror::Error;

/// Failure to build a [`Board`](crate::Board) from text or raw digits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("invalid character {ch:?} at cell {index}")]
    InvalidChar { ch: char, index: usize },

    #[error("expected 81 cells, found {0}")]
    WrongCellCount(usize),

    #[error("digit {0} is outside 1-9")]
    DigitOutOfRange(u8),
}

/// Why a puzzle could not be solved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SudokuError {
    /// The givens already break a rule; reported before any search.
    #[error("duplicate digit in a row, column or box")]
    Inconsistent,

    /// The givens are consistent but admit no solution.
    #[error("puzzle has no solution")]
    Unsolvable,
}
