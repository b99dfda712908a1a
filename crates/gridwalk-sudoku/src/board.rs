//! The 9×9 [`Board`] of optional digits.
//!
//! Boards parse from text: 81 cells in row-major order, where `1`-`9` are
//! givens and `0`, `.` or `_` mark an empty cell. Whitespace is ignored, so
//! both a single line and a 9-line layout are accepted.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseBoardError;

/// Side length of the board.
pub const SIZE: usize = 9;

/// A 9×9 Sudoku board. `None` is an empty cell, `Some(d)` holds a digit 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoard"))]
pub struct Board {
    pub(crate) cells: [[Option<u8>; SIZE]; SIZE],
}

/// Unchecked wire form of a [`Board`]; digits are validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoard {
    cells: [[Option<u8>; SIZE]; SIZE],
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoard> for Board {
    type Error = ParseBoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for (r, row) in raw.cells.iter().enumerate() {
            for (c, &digit) in row.iter().enumerate() {
                board.set(r, c, digit)?;
            }
        }
        Ok(board)
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw rows, where 0 means empty.
    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Result<Self, ParseBoardError> {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &d) in row.iter().enumerate() {
                board.set(r, c, (d != 0).then_some(d))?;
            }
        }
        Ok(board)
    }

    /// The digit at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or more.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row][col]
    }

    /// Place or clear a digit.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or more.
    pub fn set(&mut self, row: usize, col: usize, digit: Option<u8>) -> Result<(), ParseBoardError> {
        if let Some(d) = digit {
            if !(1..=9).contains(&d) {
                return Err(ParseBoardError::DigitOutOfRange(d));
            }
        }
        self.cells[row][col] = digit;
        Ok(())
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells = [[None; SIZE]; SIZE];
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.filled_count() == SIZE * SIZE
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Option<u8>; SIZE]; SIZE] {
        &self.cells
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let digit = match ch {
                '1'..='9' => Some(ch as u8 - b'0'),
                '0' | '.' | '_' => None,
                _ => return Err(ParseBoardError::InvalidChar { ch, index }),
            };
            if index < SIZE * SIZE {
                board.cells[index / SIZE][index % SIZE] = digit;
            }
            index += 1;
        }
        if index != SIZE * SIZE {
            return Err(ParseBoardError::WrongCellCount(index));
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(d) => write!(f, "{d}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79";

    #[test]
    fn parse_and_display() {
        let b: Board = PUZZLE.parse().unwrap();
        assert_eq!(b.get(0, 0), Some(5));
        assert_eq!(b.get(0, 2), None);
        assert_eq!(b.get(8, 8), Some(9));
        assert_eq!(b.filled_count(), 30);
        assert_eq!(b.to_string(), PUZZLE);
    }

    #[test]
    fn parse_single_line_with_zeros() {
        let line = PUZZLE.replace('\n', "").replace('.', "0");
        let b: Board = line.parse().unwrap();
        assert_eq!(b, PUZZLE.parse::<Board>().unwrap());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "12x".parse::<Board>(),
            Err(ParseBoardError::InvalidChar { ch: 'x', index: 2 })
        );
        assert_eq!("123".parse::<Board>(), Err(ParseBoardError::WrongCellCount(3)));
        let too_long = ".".repeat(82);
        assert_eq!(too_long.parse::<Board>(), Err(ParseBoardError::WrongCellCount(82)));
    }

    #[test]
    fn set_rejects_bad_digit() {
        let mut b = Board::new();
        assert_eq!(b.set(0, 0, Some(10)), Err(ParseBoardError::DigitOutOfRange(10)));
        assert_eq!(b.set(0, 0, Some(0)), Err(ParseBoardError::DigitOutOfRange(0)));
        assert!(b.set(0, 0, Some(9)).is_ok());
        assert_eq!(b.get(0, 0), Some(9));
    }

    #[test]
    fn from_rows_and_clear() {
        let mut rows = [[0u8; SIZE]; SIZE];
        rows[4][4] = 5;
        let mut b = Board::from_rows(rows).unwrap();
        assert_eq!(b.get(4, 4), Some(5));
        assert_eq!(b.filled_count(), 1);
        b.clear();
        assert_eq!(b, Board::new());
        rows[0][0] = 12;
        assert!(Board::from_rows(rows).is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let mut b = Board::new();
        b.set(2, 7, Some(4)).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn rejects_digits_outside_range() {
        let mut b = Board::new();
        b.set(0, 0, Some(9)).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert!(json.starts_with("{\"cells\":[[9,null"));
        for bad in ["0", "12"] {
            let tampered = json.replacen("[[9,", &format!("[[{bad},"), 1);
            let err = serde_json::from_str::<Board>(&tampered).unwrap_err();
            assert!(err.to_string().contains("outside 1-9"), "{err}");
        }
    }
}
