//! Match pipeline: complete games between two agents

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{Board, GameOutcome, Player, rules},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Whether the evaluated agent plays as X or O
    pub agent_player: Player,

    /// Which player opens every game
    pub first_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
            agent_player: Player::X,
            first_player: Player::X,
        }
    }
}

/// Result of a match, from the evaluated agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    pub avg_game_length: f64,
}

impl MatchResult {
    pub fn new(wins: usize, draws: usize, losses: usize, total_moves: usize) -> Self {
        let total_games = wins + draws + losses;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            avg_game_length: rate(total_moves),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

/// Plays a series of games between an agent and an opponent
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play `num_games` games and tally them for the agent.
    ///
    /// With a seed configured, the agent is reseeded with `seed` and the
    /// opponent with `seed + 1` before the first game.
    pub fn run(&mut self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;
        let mut total_moves = 0;

        for observer in &mut self.observers {
            observer.on_match_start(self.config.num_games)?;
        }

        for game_num in 1..=self.config.num_games {
            let record = self.play_game(game_num, agent, opponent)?;

            match record.outcome {
                GameOutcome::Win(winner) if winner == self.config.agent_player => wins += 1,
                GameOutcome::Win(_) => losses += 1,
                GameOutcome::Draw => draws += 1,
            }
            total_moves += record.moves.len();

            for observer in &mut self.observers {
                observer.on_game_end(game_num, record.outcome, &record.moves)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        Ok(MatchResult::new(wins, draws, losses, total_moves))
    }

    fn play_game(
        &mut self,
        game_num: usize,
        agent: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> Result<GameRecord> {
        let mut board = Board::new();
        let mut to_move = self.config.first_player;
        let mut moves = Vec::with_capacity(9);

        loop {
            if let Some(outcome) = rules::outcome(&board) {
                return Ok(GameRecord { moves, outcome });
            }

            let mover: &mut dyn Agent = if to_move == self.config.agent_player {
                &mut *agent
            } else {
                &mut *opponent
            };
            let position = mover.select_move(&board, to_move)?;

            for observer in &mut self.observers {
                observer.on_move(game_num, &board, to_move, position)?;
            }

            board.place(position, to_move)?;
            moves.push(position);
            to_move = to_move.opponent();
        }
    }
}

/// Play one game between two agents without observers
pub fn play_game(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    first_player: Player,
) -> Result<GameRecord> {
    let config = MatchConfig {
        num_games: 1,
        seed: None,
        agent_player: Player::X,
        first_player,
    };
    MatchRunner::new(config).play_game(1, x, o)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{ComputerPlayer, Difficulty};

    #[test]
    fn rates_are_fractions_of_total() {
        let result = MatchResult::new(1, 2, 1, 30);
        assert_eq!(result.total_games, 4);
        assert_eq!(result.draw_rate, 0.5);
        assert_eq!(result.avg_game_length, 7.5);
        assert_eq!(MatchResult::new(0, 0, 0, 0).win_rate, 0.0);
    }

    #[test]
    fn hard_self_play_draws() {
        let mut x = ComputerPlayer::at_difficulty(Difficulty::Hard, Some(0));
        let mut o = ComputerPlayer::at_difficulty(Difficulty::Hard, Some(1));
        let record = play_game(&mut x, &mut o, Player::X).unwrap();
        assert_eq!(record.outcome, GameOutcome::Draw);
        assert_eq!(record.moves.len(), 9);
    }
}
