//! Agent port - anything that can pick a move for a marker
//!
//! The match pipeline is written against this trait so that computer
//! policies, simple baselines and scripted test players are interchangeable.

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Agent trait - unified interface for move selection
///
/// # Examples
///
/// ```
/// use oxo::{ports::Agent, tictactoe::{Board, Player}};
///
/// struct FirstFree;
///
/// impl Agent for FirstFree {
///     fn select_move(&mut self, board: &Board, _marker: Player) -> oxo::Result<usize> {
///         board.empty_positions().first().copied().ok_or(oxo::Error::NoLegalMove)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mut agent = FirstFree;
/// assert_eq!(agent.select_move(&Board::new(), Player::X).unwrap(), 0);
/// ```
pub trait Agent: Send {
    /// Select a move for `marker` on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move exists or the inputs are invalid.
    fn select_move(&mut self, board: &Board, marker: Player) -> Result<usize>;

    /// Name used in summaries and logs
    fn name(&self) -> &str;

    /// Reseed any internal random source.
    ///
    /// The default implementation does nothing, suitable for deterministic
    /// agents.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
