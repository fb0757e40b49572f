//! oxo CLI - tic-tac-toe against a minimax computer
//!
//! Subcommands:
//! - play an interactive game in the terminal
//! - ask for the computer's move on a given board
//! - evaluate a difficulty level over many games

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oxo::cli::commands::{best_move, evaluate, play};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe with a minimax computer player", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play::PlayArgs),

    /// Choose a move for a given board
    BestMove(best_move::BestMoveArgs),

    /// Evaluate a difficulty level against an opponent
    Evaluate(evaluate::EvaluateArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("oxo=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::BestMove(args) => best_move::execute(args),
        Commands::Evaluate(args) => evaluate::execute(args),
    }
}
