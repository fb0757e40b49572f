//! Pure win/draw evaluation over a board

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// True iff any line holds three identical markers
pub fn has_winner(board: &Board) -> bool {
    LineAnalyzer::completed_line(board.cells()).is_some()
}

/// True iff no cell is empty and nobody has completed a line.
///
/// A full board can also be a win, so callers that care about the
/// difference should check [`has_winner`] first.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_winner(board)
}

/// Empty positions in ascending index order
pub fn empty_positions(board: &Board) -> Vec<usize> {
    board.empty_positions()
}

/// The player owning the first completed line
pub fn winner(board: &Board) -> Option<Player> {
    LineAnalyzer::completed_line(board.cells()).and_then(|[a, _, _]| board.cells()[a].player())
}

/// The first completed line in table order
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LineAnalyzer::completed_line(board.cells())
}

/// Outcome of the position, or `None` while play continues
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if let Some(player) = winner(board) {
        Some(GameOutcome::Win(player))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

/// Check that the board could have arisen from alternating play.
///
/// Either player may have opened, so the piece counts may differ by at most
/// one in either direction. Both players holding a completed line is
/// impossible, as is a winner who has fewer pieces than the loser.
///
/// # Errors
///
/// Returns [`crate::Error::InconsistentState`] describing the first violation.
pub fn validate(board: &Board) -> crate::Result<()> {
    let counts = board.count_pieces();
    let diff = counts.x as isize - counts.o as isize;
    let inconsistent = |message: String| crate::Error::InconsistentState { message };

    if diff.abs() > 1 {
        return Err(inconsistent(format!(
            "piece counts must differ by at most 1 (X={}, O={}) in '{}'",
            counts.x,
            counts.o,
            board.encode()
        )));
    }

    let x_wins = LineAnalyzer::has_won(board.cells(), Player::X);
    let o_wins = LineAnalyzer::has_won(board.cells(), Player::O);

    if x_wins && o_wins {
        return Err(inconsistent(format!(
            "both players cannot have winning lines in '{}'",
            board.encode()
        )));
    }
    if x_wins && diff < 0 {
        return Err(inconsistent(format!(
            "X cannot have won with fewer pieces than O in '{}'",
            board.encode()
        )));
    }
    if o_wins && diff > 0 {
        return Err(inconsistent(format!(
            "O cannot have won with fewer pieces than X in '{}'",
            board.encode()
        )));
    }

    Ok(())
}
