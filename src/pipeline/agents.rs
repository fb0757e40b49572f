//! Agents available to the match pipeline
//!
//! - [`ComputerPlayer`] at any difficulty
//! - [`DefensiveAgent`], a baseline that only blocks

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ai::ComputerPlayer,
    ports::Agent,
    tictactoe::{Board, LineAnalyzer, Player, rules},
};

impl Agent for ComputerPlayer {
    fn select_move(&mut self, board: &Board, marker: Player) -> Result<usize> {
        ComputerPlayer::select_move(self, board, marker)
    }

    fn name(&self) -> &str {
        ComputerPlayer::name(self)
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.reseed(seed);
        Ok(())
    }
}

/// Defensive baseline (blocks winning moves)
///
/// This agent will:
/// 1. Block the opponent's immediate win if there is one
/// 2. Otherwise play a uniformly random empty cell
///
/// It never looks for a win of its own.
pub struct DefensiveAgent {
    name: String,
    rng: StdRng,
}

impl DefensiveAgent {
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for DefensiveAgent {
    fn select_move(&mut self, board: &Board, marker: Player) -> Result<usize> {
        if rules::has_winner(board) {
            return Err(Error::GameOver);
        }
        if let Some(&block) = LineAnalyzer::winning_moves(board.cells(), marker.opponent()).first() {
            return Ok(block);
        }

        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(Error::NoLegalMove);
        }
        Ok(moves[self.rng.random_range(0..moves.len())])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
