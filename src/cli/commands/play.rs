//! Play command - interactive game in the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use super::parse_cell;
use crate::{
    Error,
    ai::Difficulty,
    cli::output::{cell_label, print_section, render_board},
    config::{GameMode, SessionConfig},
    session::{GameSession, Move},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Game mode (1v1, ai)
    #[arg(long, short = 'm', default_value = "ai")]
    pub mode: GameMode,

    /// Computer difficulty (easy, medium, hard)
    #[arg(long, short = 'd', default_value = "medium")]
    pub difficulty: Difficulty,

    /// Marker the computer plays (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub computer: Player,

    /// Marker that opens each game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: Player,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number cells 1-9 instead of 0-8
    #[arg(long)]
    pub one_based: bool,
}

impl PlayArgs {
    fn session_config(&self) -> SessionConfig {
        let mode = match self.mode {
            GameMode::TwoPlayer => GameMode::TwoPlayer,
            GameMode::VersusComputer { .. } => GameMode::VersusComputer {
                difficulty: self.difficulty,
                computer: self.computer,
            },
        };
        let config = SessionConfig::new(mode).with_first_player(self.first_player);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session = GameSession::new(args.session_config())?;

    print_section("Tic-Tac-Toe");
    println!("Mode: {}", session.mode());
    if let Some(&opening) = session.history().first() {
        announce_computer_move(opening, args.one_based);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let (low, high) = (cell_label(0, args.one_based), cell_label(8, args.one_based));

    loop {
        println!("\n{}\n", render_board(session.board(), args.one_based));
        if let Some(message) = session.announcement() {
            println!("{message}");
            print!("Enter r to play again or q to quit: ");
        } else {
            print!(
                "Player {}, choose a cell ({low}-{high}), r to restart, q to quit: ",
                session.current_player()
            );
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "restart" => {
                if let Some(opening) = session.reset()? {
                    announce_computer_move(opening, args.one_based);
                }
            }
            input => {
                let position = match parse_cell(input, args.one_based) {
                    Ok(position) => position,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match session.play(position) {
                    Ok(report) => {
                        if let Some(reply) = report.reply {
                            announce_computer_move(reply, args.one_based);
                        }
                    }
                    Err(err @ (Error::InvalidMove { .. } | Error::InvalidPosition { .. } | Error::GameOver)) => {
                        println!("{err}");
                    }
                    Err(err) => {
                        eprintln!("The computer couldn't make a move: {err}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn announce_computer_move(mv: Move, one_based: bool) {
    println!("Computer ({}) plays {}", mv.player, cell_label(mv.position, one_based));
}
