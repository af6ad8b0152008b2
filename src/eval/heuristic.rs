//! Heuristic evaluation function for Caro board positions
//!
//! Every stone of a side is taken as the start of a run in each of the four
//! directions. The run is walked forward while the same side holds the
//! cell, its two ends are classified as open or blocked, and the pair
//! (length, open ends) is looked up in the [`ScoreTable`].
//!
//! The final score is the side's own total minus the opponent's total scaled
//! by a defense weight. With a weight above 1 a threat from the opponent
//! outweighs an equal threat of our own, so the search prefers blocking.
//! Minimax keeps one fixed perspective through the tree, so the evaluation
//! does not need to be antisymmetric between the two sides.

use crate::board::{Board, Pos, Stone};

use super::patterns::ScoreTable;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Evaluate the board from the perspective of `color`.
///
/// Returns `own - opponent * defense_weight`, saturating at the `i32` range.
/// Positive values favour `color`.
#[must_use]
pub fn evaluate(board: &Board, color: Stone, scores: &ScoreTable, defense_weight: i32) -> i32 {
    let opponent = color.opponent();

    let my_runs = evaluate_runs(board, color, scores);
    let opp_runs = evaluate_runs(board, opponent, scores);

    my_runs.saturating_sub(opp_runs.saturating_mul(defense_weight))
}

/// Aggregate run score of every stone of `color`.
pub fn evaluate_runs(board: &Board, color: Stone, scores: &ScoreTable) -> i32 {
    let mut score = 0i32;

    for pos in board.stones(color) {
        for &(dr, dc) in &DIRECTIONS {
            let len = count_run(board, pos, dr, dc, color);
            let open_ends = u8::from(is_open(board, i32::from(pos.row) - dr, i32::from(pos.col) - dc))
                + u8::from(is_open(
                    board,
                    i32::from(pos.row) + dr * len as i32,
                    i32::from(pos.col) + dc * len as i32,
                ));
            score = score.saturating_add(scores.score(len, open_ends));
        }
    }

    score
}

/// Length of the run of `color` starting at `pos` and walking in `(dr, dc)`.
///
/// Stops at the board edge or the first cell not held by `color`. Returns 0
/// if `pos` itself is not held by `color`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count_run(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut r = i32::from(pos.row);
    let mut c = i32::from(pos.col);
    while board.contains(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// A run end is open when the cell is on the board and empty
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn is_open(board: &Board, row: i32, col: i32) -> bool {
    board.contains(row, col) && board.is_empty(Pos::new(row as u8, col as u8))
}
