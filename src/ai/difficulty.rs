//! Difficulty levels layered over the minimax search

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::minimax::{Sides, best_move};
use crate::{
    Error, Result,
    tictactoe::{Board, CELL_COUNT, Player, rules},
};

/// Probability that Medium plays the minimax move
pub const DEFAULT_OPTIMAL_PROBABILITY: f64 = 0.5;

/// Skill level of the computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move
    Easy,
    /// Minimax move half of the time, random otherwise
    #[default]
    Medium,
    /// Always the minimax move
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

/// Maps a difficulty to a move-selection strategy.
///
/// The random source is always supplied by the caller, so a seeded
/// [`rand::rngs::StdRng`] makes every choice reproducible.
///
/// # Examples
///
/// ```
/// use oxo::ai::{Difficulty, MovePolicy, Sides};
/// use oxo::tictactoe::{Board, Player};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let board = Board::from_string("XX.OO....").unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let policy = MovePolicy::new(Difficulty::Hard);
/// let chosen = policy
///     .choose_move(&board, Sides::for_player(Player::X), &mut rng)
///     .unwrap();
/// assert_eq!(chosen, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMovePolicy")]
pub struct MovePolicy {
    difficulty: Difficulty,
    optimal_probability: f64,
}

/// Unchecked wire form of [`MovePolicy`]
#[derive(Deserialize)]
struct RawMovePolicy {
    difficulty: Difficulty,
    #[serde(default = "default_optimal_probability")]
    optimal_probability: f64,
}

fn default_optimal_probability() -> f64 {
    DEFAULT_OPTIMAL_PROBABILITY
}

impl TryFrom<RawMovePolicy> for MovePolicy {
    type Error = Error;

    fn try_from(raw: RawMovePolicy) -> Result<Self> {
        MovePolicy::new(raw.difficulty).with_optimal_probability(raw.optimal_probability)
    }
}

impl MovePolicy {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            optimal_probability: DEFAULT_OPTIMAL_PROBABILITY,
        }
    }

    /// Set how often Medium plays the minimax move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] unless `probability` is in `[0, 1]`.
    pub fn with_optimal_probability(mut self, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidConfiguration {
                message: format!("optimal move probability {probability} must be within [0, 1]"),
            });
        }
        self.optimal_probability = probability;
        Ok(self)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn optimal_probability(&self) -> f64 {
        self.optimal_probability
    }

    /// Choose a move for `sides.maximizer()`.
    ///
    /// Medium draws its coin once per call, independently of earlier calls.
    ///
    /// # Errors
    ///
    /// - [`Error::InconsistentState`] if the board could not arise from play
    /// - [`Error::GameOver`] if a line is already complete
    /// - [`Error::NoLegalMove`] if the board is full
    /// - [`Error::InternalInvariant`] if the selected move is not a legal cell
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        sides: Sides,
        rng: &mut R,
    ) -> Result<usize> {
        rules::validate(board)?;
        if rules::has_winner(board) {
            return Err(Error::GameOver);
        }

        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(Error::NoLegalMove);
        }

        let chosen = match self.difficulty {
            Difficulty::Easy => random_move(&moves, rng),
            Difficulty::Medium => {
                if rng.random_bool(self.optimal_probability) {
                    optimal_move(board, sides)?
                } else {
                    random_move(&moves, rng)
                }
            }
            Difficulty::Hard => optimal_move(board, sides)?,
        };

        ensure_legal(board, chosen)?;
        debug!(
            difficulty = %self.difficulty,
            player = %sides.maximizer(),
            position = chosen,
            "policy chose move"
        );
        Ok(chosen)
    }
}

impl Default for MovePolicy {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Choose a move for `marker` against `opponent` at the given difficulty.
///
/// # Errors
///
/// Fails as [`MovePolicy::choose_move`] does, and with
/// [`Error::InconsistentState`] when both markers are the same.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    marker: Player,
    opponent: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize> {
    let sides = Sides::new(marker, opponent)?;
    MovePolicy::new(difficulty).choose_move(board, sides, rng)
}

fn random_move<R: Rng + ?Sized>(moves: &[usize], rng: &mut R) -> usize {
    moves[rng.random_range(0..moves.len())]
}

fn optimal_move(board: &Board, sides: Sides) -> Result<usize> {
    best_move(board, sides)
        .map(|result| result.position)
        .ok_or(Error::NoLegalMove)
}

fn ensure_legal(board: &Board, position: usize) -> Result<()> {
    if position >= CELL_COUNT {
        return Err(Error::InternalInvariant {
            message: format!("selected position {position} is outside the board"),
        });
    }
    if !board.is_empty(position) {
        return Err(Error::InternalInvariant {
            message: format!("selected position {position} is already occupied"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn parse_difficulty() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("easy, medium, hard"));
        for level in Difficulty::ALL {
            assert_eq!(level.to_string().parse::<Difficulty>().unwrap(), level);
        }
    }

    #[test]
    fn optimal_probability_is_bounded() {
        assert!(MovePolicy::new(Difficulty::Medium).with_optimal_probability(1.5).is_err());
        assert!(MovePolicy::new(Difficulty::Medium).with_optimal_probability(-0.1).is_err());
        let policy = MovePolicy::new(Difficulty::Medium)
            .with_optimal_probability(1.0)
            .unwrap();
        assert_eq!(policy.optimal_probability(), 1.0);
    }

    #[test]
    fn deserialized_policy_is_range_checked() {
        let err = serde_json::from_str::<MovePolicy>(
            r#"{"difficulty":"medium","optimal_probability":1.5}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid configuration"), "{err}");

        let raw = RawMovePolicy {
            difficulty: Difficulty::Medium,
            optimal_probability: 1.5,
        };
        assert!(matches!(
            MovePolicy::try_from(raw),
            Err(Error::InvalidConfiguration { .. })
        ));

        let policy: MovePolicy =
            serde_json::from_str(r#"{"difficulty":"hard","optimal_probability":0.25}"#).unwrap();
        assert_eq!(policy.difficulty(), Difficulty::Hard);
        assert_eq!(policy.optimal_probability(), 0.25);

        let policy: MovePolicy = serde_json::from_str(r#"{"difficulty":"easy"}"#).unwrap();
        assert_eq!(policy.optimal_probability(), DEFAULT_OPTIMAL_PROBABILITY);
    }

    #[test]
    fn medium_with_certain_coin_plays_like_hard() {
        let board = Board::from_string("XX.OO....").unwrap();
        let policy = MovePolicy::new(Difficulty::Medium)
            .with_optimal_probability(1.0)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let chosen = policy
                .choose_move(&board, Sides::for_player(Player::O), &mut rng)
                .unwrap();
            assert_eq!(chosen, 5);
        }
    }

    #[test]
    fn full_board_is_no_legal_move() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for level in Difficulty::ALL {
            let err = MovePolicy::new(level)
                .choose_move(&board, Sides::for_player(Player::X), &mut rng)
                .unwrap_err();
            assert!(matches!(err, Error::NoLegalMove), "{level}: {err}");
        }
    }

    #[test]
    fn won_board_is_game_over() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = MovePolicy::new(Difficulty::Hard)
            .choose_move(&board, Sides::for_player(Player::O), &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::GameOver));
    }

    #[test]
    fn shared_marker_is_rejected() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(0);
        let err = select_move(&board, Player::X, Player::X, Difficulty::Easy, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InconsistentState { .. }));
    }

    #[test]
    fn impossible_board_is_rejected() {
        let board = Board::from_string("XXXX.....").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = select_move(&board, Player::O, Player::X, Difficulty::Hard, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InconsistentState { .. }));
    }

    #[test]
    fn ensure_legal_flags_bad_choices() {
        let board = Board::from_string("X........").unwrap();
        assert!(matches!(
            ensure_legal(&board, 9),
            Err(Error::InternalInvariant { .. })
        ));
        assert!(matches!(
            ensure_legal(&board, 0),
            Err(Error::InternalInvariant { .. })
        ));
        assert!(ensure_legal(&board, 1).is_ok());
    }
}
