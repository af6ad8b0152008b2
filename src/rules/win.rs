//! Win and draw detection
//!
//! Detection slides a window of `WIN_LENGTH` cells along the four line
//! directions. Any window fully owned by one side is a win, so overlines
//! (six or more) count as well.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Final state of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    Draw,
}

/// Check if there's a five-cell window owned by `stone`
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// Find the first five-cell window owned by `stone`.
///
/// Every window starts at one of `stone`'s cells, so scanning forward from
/// each owned cell in the four directions visits all candidate windows.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<[Pos; WIN_LENGTH]> {
    if stone == Stone::Empty {
        return None;
    }

    for pos in board.stones(stone) {
        for &(dr, dc) in &DIRECTIONS {
            if let Some(line) = window_from(board, pos, dr, dc, stone) {
                return Some(line);
            }
        }
    }
    None
}

/// Window of `WIN_LENGTH` cells starting at `start`, if all belong to `stone`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn window_from(board: &Board, start: Pos, dr: i32, dc: i32, stone: Stone) -> Option<[Pos; WIN_LENGTH]> {
    let mut line = [start; WIN_LENGTH];
    for (i, slot) in line.iter_mut().enumerate().skip(1) {
        let r = i32::from(start.row) + dr * i as i32;
        let c = i32::from(start.col) + dc * i as i32;
        if !board.contains(r, c) {
            return None;
        }
        let pos = Pos::new(r as u8, c as u8);
        if board.get(pos) != stone {
            return None;
        }
        *slot = pos;
    }
    Some(line)
}

/// Decide whether the game on `board` is over.
///
/// Returns `Some(Outcome::Win(_))` if either side has a five,
/// `Some(Outcome::Draw)` if the board is full, `None` otherwise.
pub fn outcome(board: &Board) -> Option<Outcome> {
    for stone in [Stone::X, Stone::O] {
        if has_five_in_row(board, stone) {
            return Some(Outcome::Win(stone));
        }
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(u8, u8)], stone: Stone) -> Board {
        let mut board = Board::new(size);
        for &(r, c) in stones {
            assert!(board.set_move(Pos::new(r, c), stone));
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(15, &[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)], Stone::X);
        assert!(has_five_in_row(&board, Stone::X));
        assert!(!has_five_in_row(&board, Stone::O));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(10, &[(5, 9), (6, 9), (7, 9), (8, 9), (9, 9)], Stone::O);
        assert!(has_five_in_row(&board, Stone::O));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = board_with(15, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::X);
        assert!(has_five_in_row(&board, Stone::X));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let board = board_with(10, &[(0, 9), (1, 8), (2, 7), (3, 6), (4, 5)], Stone::O);
        assert!(has_five_in_row(&board, Stone::O));
        assert_eq!(
            find_five_positions(&board, Stone::O),
            Some([Pos::new(0, 9), Pos::new(1, 8), Pos::new(2, 7), Pos::new(3, 6), Pos::new(4, 5)])
        );
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let stones: Vec<(u8, u8)> = (0..6).map(|c| (9, c)).collect();
        let board = board_with(15, &stones, Stone::X);
        assert!(has_five_in_row(&board, Stone::X));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(15, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::X);
        assert!(!has_five_in_row(&board, Stone::X));
    }

    #[test]
    fn test_broken_line_not_win() {
        let board = board_with(15, &[(3, 3), (3, 4), (3, 5), (3, 7), (3, 8)], Stone::X);
        assert!(!has_five_in_row(&board, Stone::X));
    }

    #[test]
    fn test_line_does_not_wrap_across_rows() {
        // Three at the end of row 0 and two at the start of row 1
        let board = board_with(10, &[(0, 7), (0, 8), (0, 9), (1, 0), (1, 1)], Stone::X);
        assert!(!has_five_in_row(&board, Stone::X));
    }

    #[test]
    fn test_empty_never_wins() {
        let board = Board::new(5);
        assert!(!has_five_in_row(&board, Stone::Empty));
    }

    #[test]
    fn test_outcome_in_progress() {
        let board = board_with(15, &[(7, 7)], Stone::X);
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_outcome_win() {
        let board = board_with(15, &[(2, 2), (3, 2), (4, 2), (5, 2), (6, 2)], Stone::O);
        assert_eq!(outcome(&board), Some(Outcome::Win(Stone::O)));
    }

    #[test]
    fn test_outcome_draw() {
        let board: Board = "\
            XXOOX
            OOXXO
            XXOOX
            OOXXO
            XXOOX"
            .parse()
            .unwrap();
        assert!(board.is_full());
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }
}
