//! A computer opponent bundling a policy with its own random source

use rand::{SeedableRng, random, rngs::StdRng};

use super::{
    difficulty::{Difficulty, MovePolicy},
    minimax::Sides,
};
use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Computer-controlled player
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    policy: MovePolicy,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Create a computer player seeded from system entropy
    pub fn new(policy: MovePolicy) -> Self {
        Self::with_seed(policy, random())
    }

    /// Create a computer player with a deterministic seed
    pub fn with_seed(policy: MovePolicy, seed: u64) -> Self {
        Self {
            name: format!("Computer ({})", policy.difficulty()),
            policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Default policy at the given difficulty, optionally seeded
    pub fn at_difficulty(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let policy = MovePolicy::new(difficulty);
        match seed {
            Some(seed) => Self::with_seed(policy, seed),
            None => Self::new(policy),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> &MovePolicy {
        &self.policy
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Choose a move for `marker` against its natural opponent
    pub fn select_move(&mut self, board: &Board, marker: Player) -> Result<usize> {
        self.policy
            .choose_move(board, Sides::for_player(marker), &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_moves() {
        let board = Board::from_string("X........").unwrap();
        let mut a = ComputerPlayer::at_difficulty(Difficulty::Easy, Some(11));
        let mut b = ComputerPlayer::at_difficulty(Difficulty::Easy, Some(11));
        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Player::O).unwrap(),
                b.select_move(&board, Player::O).unwrap()
            );
        }
    }

    #[test]
    fn reseed_restarts_sequence() {
        let board = Board::new();
        let mut player = ComputerPlayer::at_difficulty(Difficulty::Easy, Some(5));
        let first: Vec<usize> = (0..5)
            .map(|_| player.select_move(&board, Player::X).unwrap())
            .collect();
        player.reseed(5);
        let second: Vec<usize> = (0..5)
            .map(|_| player.select_move(&board, Player::X).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn name_reflects_difficulty() {
        let player = ComputerPlayer::at_difficulty(Difficulty::Hard, Some(0));
        assert_eq!(player.name(), "Computer (hard)");
    }
}
