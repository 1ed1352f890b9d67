use anchor_lang::prelude::*;
use crate::constants::{BOARD_SIZE, FORFEIT_SENTINEL};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerMark {
    X,
    O,
}

pub type Board = [[Option<PlayerMark>; BOARD_SIZE]; BOARD_SIZE];

/// Every row, column and diagonal as (row, col) triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn empty_board() -> Board {
    [[None; BOARD_SIZE]; BOARD_SIZE]
}

pub fn is_forfeit(row: u8, col: u8) -> bool {
    row == FORFEIT_SENTINEL && col == FORFEIT_SENTINEL
}

pub fn in_bounds(row: u8, col: u8) -> bool {
    (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE
}

pub fn winning_mark(board: &Board) -> Option<PlayerMark> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = *line;
        match board[a.0][a.1] {
            Some(mark) if board[b.0][b.1] == Some(mark) && board[c.0][c.1] == Some(mark) => {
                Some(mark)
            }
            _ => None,
        }
    })
}

pub fn is_full(board: &Board) -> bool {
    board.iter().all(|row| row.iter().all(|cell| cell.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlayerMark::{O, X};

    fn board_from(cells: [[u8; 3]; 3]) -> Board {
        let mut board = empty_board();
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                board[r][c] = match cell {
                    1 => Some(X),
                    2 => Some(O),
                    _ => None,
                };
            }
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner_and_is_not_full() {
        let board = empty_board();
        assert_eq!(winning_mark(&board), None);
        assert!(!is_full(&board));
    }

    #[test]
    fn detects_every_line() {
        for line in LINES.iter() {
            let mut board = empty_board();
            for &(r, c) in line.iter() {
                board[r][c] = Some(O);
            }
            assert_eq!(winning_mark(&board), Some(O), "line {:?}", line);
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_from([[1, 1, 2], [0, 0, 0], [0, 0, 0]]);
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn full_board_without_line() {
        let board = board_from([[1, 2, 1], [1, 2, 2], [2, 1, 1]]);
        assert_eq!(winning_mark(&board), None);
        assert!(is_full(&board));
    }

    #[test]
    fn full_board_with_line_still_reports_winner() {
        let board = board_from([[1, 1, 1], [2, 2, 1], [2, 1, 2]]);
        assert_eq!(winning_mark(&board), Some(X));
        assert!(is_full(&board));
    }

    #[test]
    fn bounds_and_forfeit_sentinel() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(2, 2));
        assert!(!in_bounds(3, 0));
        assert!(!in_bounds(0, 3));
        assert!(is_forfeit(255, 255));
        assert!(!is_forfeit(255, 0));
        assert!(!in_bounds(255, 255));
    }
}
