//! Exhaustive minimax search over the remaining empty cells
//!
//! Scores are from the maximizer's point of view: `10 - depth` for a win it
//! reaches, `depth - 10` for a loss, `0` for a draw. The depth term prefers
//! faster wins and slower losses. There is no depth limit and no pruning; a
//! 3x3 board is small enough to search completely.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{Board, Player, rules},
};

/// Score of a win found at depth zero
pub const WIN_SCORE: i32 = 10;

/// The pair of markers taking part in a search.
///
/// The maximizer is the side a best move is being computed for. The two
/// markers are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides {
    maximizer: Player,
    opponent: Player,
}

impl Sides {
    /// Pair two markers, rejecting a shared marker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentState`] when both sides use the same marker.
    pub fn new(maximizer: Player, opponent: Player) -> Result<Self> {
        if maximizer == opponent {
            return Err(Error::InconsistentState {
                message: format!("both sides use marker {maximizer}"),
            });
        }
        Ok(Sides {
            maximizer,
            opponent,
        })
    }

    /// The maximizer and its natural opponent
    pub fn for_player(maximizer: Player) -> Self {
        Sides {
            maximizer,
            opponent: maximizer.opponent(),
        }
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    pub fn opponent(&self) -> Player {
        self.opponent
    }

    fn mover(&self, is_maximizing: bool) -> Player {
        if is_maximizing {
            self.maximizer
        } else {
            self.opponent
        }
    }
}

/// A root move together with its minimax score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub position: usize,
    pub score: i32,
}

/// Score the position for the maximizer.
///
/// `depth` counts the moves made since the root. At a maximizing node a
/// completed line can only belong to the opponent, who moved last; at a
/// minimizing node it belongs to the maximizer.
///
/// Every speculative placement is retracted before returning, so `board`
/// is identical to its state on entry.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, sides: Sides) -> i32 {
    if rules::has_winner(board) {
        return if is_maximizing {
            depth - WIN_SCORE
        } else {
            WIN_SCORE - depth
        };
    }

    if rules::is_draw(board) {
        return 0;
    }

    let mover = sides.mover(is_maximizing);
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in board.empty_positions() {
        let snapshot = *board;
        let score = match board.speculate(pos, mover) {
            Ok(mut trial) => minimax(&mut trial, depth + 1, !is_maximizing, sides),
            Err(_) => continue,
        };
        debug_assert_eq!(*board, snapshot, "search left position {pos} on the board");
        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Score every empty position as a move for the maximizer, in ascending
/// position order.
pub fn score_moves(board: &mut Board, sides: Sides) -> Vec<SearchResult> {
    let mut results = Vec::with_capacity(9);

    for pos in board.empty_positions() {
        let snapshot = *board;
        let score = match board.speculate(pos, sides.maximizer) {
            Ok(mut trial) => minimax(&mut trial, 0, false, sides),
            Err(_) => continue,
        };
        debug_assert_eq!(*board, snapshot, "search left position {pos} on the board");
        results.push(SearchResult {
            position: pos,
            score,
        });
    }

    results
}

/// Find the maximizer's best move.
///
/// Ties go to the lowest position. Returns `None` only when the board has no
/// empty cell.
pub fn find_best_move(board: &mut Board, sides: Sides) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;

    for candidate in score_moves(board, sides) {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }

    if let Some(result) = best {
        debug!(
            board = %board.encode(),
            player = %sides.maximizer,
            position = result.position,
            score = result.score,
            "minimax selected move"
        );
    }

    best
}

/// [`find_best_move`] on a copy of a shared board
pub fn best_move(board: &Board, sides: Sides) -> Option<SearchResult> {
    let mut scratch = *board;
    find_best_move(&mut scratch, sides)
}
