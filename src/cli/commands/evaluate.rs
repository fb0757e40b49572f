//! Evaluate command - pit a computer difficulty against an opponent

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    ai::{ComputerPlayer, Difficulty},
    cli::output::{format_percent, print_kv, print_section},
    pipeline::{
        Agent, DefensiveAgent, LoggingObserver, MatchConfig, MatchRunner, ProgressObserver,
    },
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a difficulty level over many games")]
pub struct EvaluateArgs {
    /// Difficulty of the evaluated computer (easy, medium, hard)
    #[arg(long, short = 'a', default_value = "hard")]
    pub agent: Difficulty,

    /// Opponent to evaluate against (random, easy, medium, hard, optimal, defensive)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which marker the evaluated computer controls (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: Player,

    /// Which marker makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: Player,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

fn build_opponent(kind: &str) -> Result<Box<dyn Agent>> {
    let opponent: Box<dyn Agent> = match kind.to_lowercase().as_str() {
        "random" | "easy" => Box::new(ComputerPlayer::at_difficulty(Difficulty::Easy, None)),
        "medium" => Box::new(ComputerPlayer::at_difficulty(Difficulty::Medium, None)),
        "hard" | "optimal" => Box::new(ComputerPlayer::at_difficulty(Difficulty::Hard, None)),
        "defensive" => Box::new(DefensiveAgent::new("Defensive".to_string())),
        other => {
            return Err(anyhow!(
                "Unknown opponent type: '{other}'. Supported: random, easy, medium, hard, optimal, defensive"
            ));
        }
    };
    Ok(opponent)
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let mut agent = ComputerPlayer::at_difficulty(args.agent, None);
    let mut opponent = build_opponent(&args.opponent)?;

    print_section("Evaluation Configuration");
    print_kv("Agent", agent.name());
    print_kv("Opponent", opponent.name());
    print_kv(
        "Agent plays as",
        &format!("{} (first player: {})", args.agent_player, args.first_player),
    );
    print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let config = MatchConfig {
        num_games: args.games,
        seed: args.seed,
        agent_player: args.agent_player,
        first_player: args.first_player,
    };
    let mut runner = MatchRunner::new(config).with_observer(Box::new(LoggingObserver));
    if !args.no_progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new(args.agent_player)));
    }

    let result = runner.run(&mut agent, opponent.as_mut())?;

    print_section("Evaluation Results");
    print_kv("Total games", &result.total_games.to_string());
    print_kv(
        "Wins",
        &format!("{} ({})", result.wins, format_percent(result.win_rate)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", result.draws, format_percent(result.draw_rate)),
    );
    print_kv(
        "Losses",
        &format!("{} ({})", result.losses, format_percent(result.loss_rate)),
    );
    print_kv("Average length", &format!("{:.2} moves", result.avg_game_length));

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}
