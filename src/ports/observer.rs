//! Observer port - hooks into a running match

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Player},
};

/// Observer trait for monitoring a match
///
/// The methods are called in the following order:
/// 1. `on_match_start(total_games)` - once
/// 2. For each game: `on_move(...)` per move, then `on_game_end(...)`
/// 3. `on_match_end()` - once
///
/// Every method defaults to doing nothing.
pub trait Observer: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move is chosen, with the board as it was before the move
    fn on_move(
        &mut self,
        _game_num: usize,
        _board: &Board,
        _player: Player,
        _position: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends.
    ///
    /// * `game_num` - 1-based index of the completed game
    /// * `outcome` - final outcome
    /// * `moves` - positions played, in order
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome, _moves: &[usize]) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
