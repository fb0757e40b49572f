//! Observer implementations for the match pipeline

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Player},
};

/// Progress bar observer - shows match progress with a running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    agent_player: Player,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a progress observer tallying results for `agent_player`
    pub fn new(agent_player: Player) -> Self {
        Self {
            progress_bar: None,
            agent_player,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome, _moves: &[usize]) -> Result<()> {
        match outcome {
            GameOutcome::Win(winner) if winner == self.agent_player => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Logging observer - emits every move and result through `tracing`
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl Observer for LoggingObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        info!(total_games, "match started");
        Ok(())
    }

    fn on_move(&mut self, game_num: usize, board: &Board, player: Player, position: usize) -> Result<()> {
        debug!(game = game_num, board = %board.encode(), player = %player, position, "move");
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome, moves: &[usize]) -> Result<()> {
        info!(game = game_num, ?outcome, ?moves, "game finished");
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        info!("match finished");
        Ok(())
    }
}
