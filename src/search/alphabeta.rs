//! Minimax search with alpha-beta pruning
//!
//! The tree is explored depth-first from a fixed perspective: the
//! `player` the search runs for maximizes, its opponent minimizes. Each
//! hypothetical move is played on its own clone of the parent board, so
//! sibling branches never share mutable state and nothing has to be undone.
//!
//! # Example
//!
//! ```
//! use caro::board::{Board, Pos, Stone};
//! use caro::search::Searcher;
//! use caro::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let mut searcher = Searcher::new(&config);
//! let mut board = Board::new(15);
//! board.set_move(Pos::new(7, 7), Stone::X);
//!
//! let result = searcher.search_root(&board, Stone::O, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::evaluate;

use super::movegen::candidate_moves;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no candidates
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching player's view
    pub score: i32,
    /// Depth limit the search ran with
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
}

/// Depth-first alpha-beta searcher over cloned boards.
pub struct Searcher<'a> {
    config: &'a EngineConfig,
    eval_bound: i32,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over `config`.
    ///
    /// `config` is expected to pass [`EngineConfig::validate`];
    /// [`Engine::with_config`](crate::Engine::with_config) guarantees it. An
    /// unvalidated config does not overflow, but a zero radius finds no
    /// candidates and a win score that decays to zero is no longer
    /// distinguishable from the heuristic.
    #[must_use]
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            config,
            eval_bound: config.eval_bound(),
            nodes: 0,
        }
    }

    /// Nodes visited since construction
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best move for `player` on `board` with the given depth limit.
    ///
    /// Each candidate is placed for `player` on a clone of `board` and scored
    /// by [`Searcher::search`] at depth 1 with the opponent to move. The
    /// first candidate with the strictly greatest score wins. `board` itself
    /// is never modified.
    pub fn search_root(&mut self, board: &Board, player: Stone, depth_limit: u8) -> SearchResult {
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for mv in candidate_moves(board, self.config.neighbor_radius) {
            let mut child = board.clone();
            child.set_move(mv, player);

            // Children that cannot beat the current best only need to prove it,
            // so the best score so far serves as alpha.
            let score = self.search(&child, 1, false, player, best_score, i32::MAX, depth_limit);
            log::trace!("candidate {mv} scored {score}");

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth: depth_limit,
            nodes: self.nodes,
        }
    }

    /// Minimax value of `board` for `player`.
    ///
    /// - A five for `player` scores `win_base - depth * win_decay`, a five
    ///   for the opponent the negation, so faster wins and slower losses are
    ///   preferred.
    /// - At `depth >= depth_limit` or on a full board the static evaluation
    ///   is returned, clamped to [`EngineConfig::eval_bound`] so it always
    ///   ranks between a real loss and a real win.
    /// - Otherwise every candidate is tried on a cloned board for the side
    ///   on move (`player` when `maximizing`), stopping as soon as
    ///   `beta <= alpha`.
    #[allow(clippy::too_many_arguments)]
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        player: Stone,
        mut alpha: i32,
        mut beta: i32,
        depth_limit: u8,
    ) -> i32 {
        self.nodes += 1;
        let opponent = player.opponent();
        let decay = self.config.win_decay.saturating_mul(i32::from(depth));

        if board.has_five_in_row(player) {
            return self.config.win_base.saturating_sub(decay);
        }
        if board.has_five_in_row(opponent) {
            return decay.saturating_sub(self.config.win_base);
        }

        if depth >= depth_limit || board.is_full() {
            return self.static_eval(board, player);
        }

        let candidates = candidate_moves(board, self.config.neighbor_radius);
        if candidates.is_empty() {
            return self.static_eval(board, player);
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in candidates {
                let mut child = board.clone();
                child.set_move(mv, player);
                let eval = self.search(&child, depth + 1, false, player, alpha, beta, depth_limit);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mv in candidates {
                let mut child = board.clone();
                child.set_move(mv, opponent);
                let eval = self.search(&child, depth + 1, true, player, alpha, beta, depth_limit);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }

    #[inline]
    fn static_eval(&self, board: &Board, player: Stone) -> i32 {
        evaluate(board, player, &self.config.scores, self.config.defense_weight)
            .clamp(-self.eval_bound, self.eval_bound)
    }
}
