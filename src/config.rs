//! Configuration types for game sessions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ai::{DEFAULT_OPTIMAL_PROBABILITY, Difficulty, MovePolicy},
    tictactoe::Player,
};

/// Who controls the two markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans sharing the board
    TwoPlayer,
    /// A human against the computer
    VersusComputer {
        difficulty: Difficulty,
        computer: Player,
    },
}

impl GameMode {
    /// Versus the computer, which plays O
    pub fn versus(difficulty: Difficulty) -> Self {
        GameMode::VersusComputer {
            difficulty,
            computer: Player::O,
        }
    }

    /// The computer's marker, if the computer takes part
    pub fn computer(&self) -> Option<Player> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VersusComputer { computer, .. } => Some(*computer),
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::versus(Difficulty::default())
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoPlayer => f.write_str("1v1"),
            GameMode::VersusComputer {
                difficulty,
                computer,
            } => write!(f, "1 vs computer ({difficulty}, computer plays {computer})"),
        }
    }
}

impl FromStr for GameMode {
    type Err = Error;

    /// Parse the mode keyword; the computer side defaults to Medium playing O.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1v1" | "pvp" | "two-player" => Ok(GameMode::TwoPlayer),
            "ai" | "1vsai" | "computer" | "pve" => Ok(GameMode::default()),
            _ => Err(Error::ParseMode {
                input: s.to_string(),
                expected: "1v1, pvp, two-player, ai, 1vsai, computer, pve".to_string(),
            }),
        }
    }
}

/// Configuration for a [`crate::session::GameSession`].
///
/// # Examples
///
/// ```
/// use oxo::{ai::Difficulty, config::{GameMode, SessionConfig}, tictactoe::Player};
///
/// let config = SessionConfig::new(GameMode::versus(Difficulty::Hard))
///     .with_first_player(Player::X)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Who controls each marker
    pub mode: GameMode,
    /// Marker that opens every game
    pub first_player: Player,
    /// Seed for the computer's random source
    pub seed: Option<u64>,
    /// How often Medium plays the minimax move
    pub optimal_probability: f64,
}

impl SessionConfig {
    /// Create a configuration for the given mode.
    ///
    /// Uses default values for other parameters:
    /// - First player: X
    /// - Seed: None (non-deterministic)
    /// - Optimal probability: 0.5
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            first_player: Player::X,
            seed: None,
            optimal_probability: DEFAULT_OPTIMAL_PROBABILITY,
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_optimal_probability(mut self, probability: f64) -> Self {
        self.optimal_probability = probability;
        self
    }

    /// The computer's marker and policy, if the mode has a computer player.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the optimal probability is
    /// outside `[0, 1]`.
    pub fn computer_policy(&self) -> Result<Option<(Player, MovePolicy)>> {
        match self.mode {
            GameMode::TwoPlayer => Ok(None),
            GameMode::VersusComputer {
                difficulty,
                computer,
            } => {
                let policy =
                    MovePolicy::new(difficulty).with_optimal_probability(self.optimal_probability)?;
                Ok(Some((computer, policy)))
            }
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
