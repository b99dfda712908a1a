//! Brute-force backtracking over empty cells, row-major, digits ascending.

use log::debug;

use crate::board::{Board, SIZE};
use crate::error::SudokuError;

/// A solved board together with the cells the solver filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub board: Board,
    /// Cells that were empty in the puzzle, as `(row, col)` in row-major order.
    pub filled: Vec<(usize, usize)>,
}

impl Solution {
    /// Whether the digit at (`row`, `col`) was found by the solver rather
    /// than given.
    pub fn is_filled_by_solver(&self, row: usize, col: usize) -> bool {
        self.filled.contains(&(row, col))
    }
}

/// Check that no filled cell repeats its digit in its row, column or box.
///
/// Empty cells are ignored, so a partially filled board can be consistent.
pub fn check_consistency(board: &Board) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let Some(d) = board.get(row, col) else {
                continue;
            };
            let mut others = *board;
            others.cells[row][col] = None;
            if !fits(&others, row, col, d) {
                return false;
            }
        }
    }
    true
}

/// Solve `board`, leaving the input untouched.
///
/// Returns [`SudokuError::Inconsistent`] when the givens already clash and
/// [`SudokuError::Unsolvable`] when backtracking runs out of candidates.
pub fn solve_sudoku(board: &Board) -> Result<Solution, SudokuError> {
    if !check_consistency(board) {
        debug!("sudoku rejected: givens are inconsistent");
        return Err(SudokuError::Inconsistent);
    }
    let mut work = *board;
    if !solve(0, 0, &mut work) {
        debug!("sudoku unsolvable ({} givens)", board.filled_count());
        return Err(SudokuError::Unsolvable);
    }
    let filled: Vec<_> = (0..SIZE * SIZE)
        .map(|i| (i / SIZE, i % SIZE))
        .filter(|&(r, c)| board.get(r, c).is_none())
        .collect();
    debug!("sudoku solved, {} cells filled", filled.len());
    Ok(Solution {
        board: work,
        filled,
    })
}

/// Fill the board from (`row`, `col`) onward. On failure every cell this
/// call filled is empty again.
pub(crate) fn solve(row: usize, col: usize, board: &mut Board) -> bool {
    let next = next_cell(row, col);
    if board.cells[row][col].is_some() {
        return match next {
            Some((r, c)) => solve(r, c, board),
            None => true,
        };
    }
    for d in 1..=9 {
        if !fits(board, row, col, d) {
            continue;
        }
        board.cells[row][col] = Some(d);
        let done = match next {
            Some((r, c)) => solve(r, c, board),
            None => true,
        };
        if done {
            return true;
        }
    }
    board.cells[row][col] = None;
    false
}

#[inline]
fn next_cell(row: usize, col: usize) -> Option<(usize, usize)> {
    match (row, col) {
        (r, c) if c + 1 < SIZE => Some((r, c + 1)),
        (r, _) if r + 1 < SIZE => Some((r + 1, 0)),
        _ => None,
    }
}

/// Whether `d` is absent from the row, column and box of (`row`, `col`).
fn fits(board: &Board, row: usize, col: usize, d: u8) -> bool {
    let cells = &board.cells;
    if cells[row].contains(&Some(d)) {
        return false;
    }
    if (0..SIZE).any(|r| cells[r][col] == Some(d)) {
        return false;
    }
    let (br, bc) = (row / 3 * 3, col / 3 * 3);
    !(br..br + 3).any(|r| cells[r][bc..bc + 3].contains(&Some(d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "
        53..7....
        6..195...
        .98....6.
        8...6...3
        4..8.3..1
        7...2...6
        .6....28.
        ...419..5
        ....8..79";

    const SOLVED: &str = "\
534678912
672195348
198342567
859761423
426853791
713924856
961537284
287419635
345286179";

    #[test]
    fn solves_known_puzzle() {
        let board: Board = PUZZLE.parse().unwrap();
        let sol = solve_sudoku(&board).unwrap();
        assert_eq!(sol.board.to_string(), SOLVED);
        assert!(sol.board.is_complete());
        assert!(check_consistency(&sol.board));
    }

    #[test]
    fn reports_filled_cells() {
        let board: Board = PUZZLE.parse().unwrap();
        let sol = solve_sudoku(&board).unwrap();
        assert_eq!(sol.filled.len(), 81 - 30);
        assert!(!sol.is_filled_by_solver(0, 0));
        assert!(sol.is_filled_by_solver(0, 2));
        assert_eq!(sol.filled.first(), Some(&(0, 2)));
        assert_eq!(sol.filled.last(), Some(&(8, 6)));
    }

    #[test]
    fn duplicate_in_row_is_inconsistent() {
        let mut board = Board::new();
        board.set(3, 1, Some(5)).unwrap();
        board.set(3, 7, Some(5)).unwrap();
        assert!(!check_consistency(&board));
        assert_eq!(solve_sudoku(&board), Err(SudokuError::Inconsistent));
    }

    #[test]
    fn duplicate_in_column_or_box_is_inconsistent() {
        let mut col = Board::new();
        col.set(0, 4, Some(2)).unwrap();
        col.set(8, 4, Some(2)).unwrap();
        assert!(!check_consistency(&col));

        let mut bx = Board::new();
        bx.set(6, 6, Some(7)).unwrap();
        bx.set(8, 8, Some(7)).unwrap();
        assert!(!check_consistency(&bx));
    }

    #[test]
    fn empty_and_partial_boards_are_consistent() {
        assert!(check_consistency(&Board::new()));
        assert!(check_consistency(&PUZZLE.parse().unwrap()));
    }

    #[test]
    fn consistent_but_unsolvable() {
        // (0, 8) can only be 9, but column 8 already holds a 9.
        let mut board = Board::new();
        for c in 0..8 {
            board.set(0, c, Some(c as u8 + 1)).unwrap();
        }
        board.set(1, 8, Some(9)).unwrap();
        assert!(check_consistency(&board));
        assert_eq!(solve_sudoku(&board), Err(SudokuError::Unsolvable));
    }

    #[test]
    fn failed_solve_restores_cells() {
        let mut board = Board::new();
        for c in 0..8 {
            board.set(0, c, Some(c as u8 + 1)).unwrap();
        }
        board.set(1, 8, Some(9)).unwrap();
        let before = board;
        assert!(!solve(0, 0, &mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn empty_board_fills_ascending() {
        let sol = solve_sudoku(&Board::new()).unwrap();
        let first_row: Vec<_> = (0..SIZE).filter_map(|c| sol.board.get(0, c)).collect();
        assert_eq!(first_row, (1..=9).collect::<Vec<u8>>());
        assert_eq!(sol.filled.len(), 81);
    }

    #[test]
    fn solved_board_is_returned_as_is() {
        let board: Board = SOLVED.parse().unwrap();
        let sol = solve_sudoku(&board).unwrap();
        assert_eq!(sol.board, board);
        assert!(sol.filled.is_empty());
    }
}
