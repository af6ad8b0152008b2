//! Candidate move generation
//!
//! Only empty cells within `radius` (Chebyshev distance) of an existing stone
//! are considered. This keeps the branching factor proportional to the
//! number of stones instead of the board area.

use crate::board::{Board, Pos, MAX_BOARD_SIZE};

/// Collect candidate moves for `board`.
///
/// Cells are returned in discovery order: occupied cells are visited in
/// row-major order and each one's clipped neighborhood is scanned row by
/// row. Every cell appears at most once. On an empty board the only
/// candidate is the center cell. A full board has no candidates.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn candidate_moves(board: &Board, radius: u8) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(64);
    let mut seen = [[false; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];

    let radius = i32::from(radius);
    let last = board.size() as i32 - 1;

    for pos in board.occupied() {
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        for r in (row - radius).max(0)..=(row + radius).min(last) {
            for c in (col - radius).max(0)..=(col + radius).min(last) {
                let (ru, cu) = (r as usize, c as usize);
                if seen[ru][cu] {
                    continue;
                }
                seen[ru][cu] = true;

                let cell = Pos::new(r as u8, c as u8);
                if board.is_empty(cell) {
                    moves.push(cell);
                }
            }
        }
    }

    if moves.is_empty() && board.is_board_empty() {
        moves.push(board.center());
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use std::collections::HashSet;

    #[test]
    fn test_empty_board_returns_center() {
        assert_eq!(candidate_moves(&Board::new(15), 2), vec![Pos::new(7, 7)]);
        assert_eq!(candidate_moves(&Board::new(10), 3), vec![Pos::new(5, 5)]);
    }

    #[test]
    fn test_single_stone_neighborhood() {
        let mut board = Board::new(15);
        board.set_move(Pos::new(7, 7), Stone::X);

        let moves = candidate_moves(&board, 2);
        assert_eq!(moves.len(), 24);
        assert_eq!(moves[0], Pos::new(5, 5));
        assert_eq!(moves[23], Pos::new(9, 9));
        assert!(!moves.contains(&Pos::new(7, 7)));

        assert_eq!(candidate_moves(&board, 3).len(), 48);
    }

    #[test]
    fn test_neighborhood_clipped_at_corner() {
        let mut board = Board::new(10);
        board.set_move(Pos::new(0, 0), Stone::O);

        let moves = candidate_moves(&board, 2);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|p| p.row <= 2 && p.col <= 2));
    }

    #[test]
    fn test_no_duplicates_and_no_occupied() {
        let board: Board = "\
            ..........
            ..........
            ...XO.....
            ....XO....
            ....OX....
            ..........
            ..........
            ..........
            ..........
            .........."
            .parse()
            .unwrap();

        let moves = candidate_moves(&board, 2);
        let unique: HashSet<Pos> = moves.iter().copied().collect();
        assert_eq!(unique.len(), moves.len());
        assert!(moves.iter().all(|&p| board.is_empty(p)));
    }

    #[test]
    fn test_discovery_order() {
        let mut board = Board::new(10);
        board.set_move(Pos::new(5, 5), Stone::X);
        board.set_move(Pos::new(1, 1), Stone::O);

        let moves = candidate_moves(&board, 1);
        // (1,1) is discovered first since occupied cells are visited row-major
        assert_eq!(moves[0], Pos::new(0, 0));
        assert_eq!(moves[8], Pos::new(4, 4));
        assert_eq!(moves.len(), 16);
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let board: Board = "\
            XXOOX
            OOXXO
            XXOOX
            OOXXO
            XXOOX"
            .parse()
            .unwrap();
        assert!(candidate_moves(&board, 2).is_empty());
    }

    #[test]
    fn test_single_empty_cell_is_found() {
        let board: Board = "\
            XXOOX
            OOXXO
            XX.OX
            OOXXO
            XXOOX"
            .parse()
            .unwrap();
        assert_eq!(candidate_moves(&board, 2), vec![Pos::new(2, 2)]);
    }
}
