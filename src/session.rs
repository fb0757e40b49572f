//! Game session: turn order, outcome detection and the computer's replies
//!
//! All state for one game lives in [`GameSession`]. A front end forwards the
//! human's chosen cell to [`GameSession::play`]; in versus-computer mode the
//! computer answers within the same call.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    Error, Result,
    ai::ComputerPlayer,
    config::{GameMode, SessionConfig},
    tictactoe::{Board, GameOutcome, Player, rules},
};

/// A move made during the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Where the current game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Player, line: [usize; 3] },
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(GameOutcome::Win(*winner)),
            GameStatus::Draw => Some(GameOutcome::Draw),
        }
    }
}

/// What happened during one call to [`GameSession::play`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The human's move
    pub played: Move,
    /// The computer's answer, if it was the computer's turn afterwards
    pub reply: Option<Move>,
    /// Status after both moves
    pub status: GameStatus,
}

struct Opponent {
    marker: Player,
    player: ComputerPlayer,
}

/// A single game between two humans or a human and the computer
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    current: Player,
    status: GameStatus,
    history: Vec<Move>,
    computer: Option<Opponent>,
}

impl GameSession {
    /// Start a session.
    ///
    /// If the computer plays the opening marker it makes its first move
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the computer's
    /// opening move fails.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let mut session = Self {
            config,
            board: Board::new(),
            current: config.first_player,
            status: GameStatus::InProgress,
            history: Vec::new(),
            computer: Self::build_computer(&config)?,
        };
        session.reset()?;
        Ok(session)
    }

    fn build_computer(config: &SessionConfig) -> Result<Option<Opponent>> {
        Ok(config.computer_policy()?.map(|(marker, policy)| {
            let player = match config.seed {
                Some(seed) => ComputerPlayer::with_seed(policy, seed),
                None => ComputerPlayer::new(policy),
            };
            Opponent { marker, player }
        }))
    }

    /// Clear the board and start a new game with the same configuration.
    ///
    /// Returns the computer's opening move when it plays first.
    pub fn reset(&mut self) -> Result<Option<Move>> {
        self.board.clear();
        self.current = self.config.first_player;
        self.status = GameStatus::InProgress;
        self.history.clear();
        info!(mode = %self.config.mode, first = %self.current, "new game");

        if self.is_computer_turn() {
            return self.computer_move().map(Some);
        }
        Ok(None)
    }

    /// Switch to another mode and start a new game
    pub fn set_mode(&mut self, mode: GameMode) -> Result<Option<Move>> {
        let config = self.config.with_mode(mode);
        self.computer = Self::build_computer(&config)?;
        self.config = config;
        self.reset()
    }

    /// Play the human's move at `position`.
    ///
    /// In versus-computer mode the computer replies immediately if the game
    /// is still running. If the reply fails the human's move stands and the
    /// error is returned; [`GameSession::computer_move`] may be retried.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the game has ended
    /// - [`Error::InvalidMove`] / [`Error::InvalidPosition`] for a bad cell,
    ///   leaving the session unchanged
    /// - [`Error::InconsistentState`] if it is the computer's turn
    pub fn play(&mut self, position: usize) -> Result<TurnReport> {
        if self.status.is_over() {
            return Err(Error::GameOver);
        }
        if self.is_computer_turn() {
            return Err(Error::InconsistentState {
                message: format!("it is the computer's turn ({})", self.current),
            });
        }

        let played = self.apply(position).inspect_err(|err| {
            warn!(position, player = %self.current, "rejected move: {err}");
        })?;

        let reply = if self.is_computer_turn() {
            Some(self.computer_move()?)
        } else {
            None
        };

        Ok(TurnReport {
            played,
            reply,
            status: self.status,
        })
    }

    /// Let the computer make its move now.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, the session has no computer player, it is
    /// not the computer's turn, or the policy cannot find a move.
    pub fn computer_move(&mut self) -> Result<Move> {
        if self.status.is_over() {
            return Err(Error::GameOver);
        }
        let opponent = self
            .computer
            .as_mut()
            .ok_or_else(|| Error::InvalidConfiguration {
                message: "the session has no computer player".to_string(),
            })?;
        if opponent.marker != self.current {
            return Err(Error::InconsistentState {
                message: format!(
                    "computer plays {} but it is {}'s turn",
                    opponent.marker, self.current
                ),
            });
        }

        let position = opponent.player.select_move(&self.board, opponent.marker)?;
        self.apply(position)
    }

    fn apply(&mut self, position: usize) -> Result<Move> {
        self.board.place(position, self.current)?;
        let mv = Move {
            position,
            player: self.current,
        };
        self.history.push(mv);
        self.status = Self::status_of(&self.board);

        match self.status {
            GameStatus::InProgress => self.current = self.current.opponent(),
            GameStatus::Won { winner, .. } => {
                info!(winner = %winner, moves = self.history.len(), "game won")
            }
            GameStatus::Draw => info!(moves = self.history.len(), "game drawn"),
        }
        Ok(mv)
    }

    fn status_of(board: &Board) -> GameStatus {
        if let (Some(winner), Some(line)) = (rules::winner(board), rules::winning_line(board)) {
            GameStatus::Won { winner, line }
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    fn is_computer_turn(&self) -> bool {
        !self.status.is_over()
            && self
                .computer
                .as_ref()
                .is_some_and(|opponent| opponent.marker == self.current)
    }

    /// Message announcing the end of the game, if it has ended
    pub fn announcement(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } if self.config.mode.computer() == Some(winner) => {
                Some("The computer won!".to_string())
            }
            GameStatus::Won { winner, .. } => Some(format!("Player {winner} won!")),
            GameStatus::Draw => Some("It's a draw!".to_string()),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker whose turn it is; after the game ends, the last mover
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
