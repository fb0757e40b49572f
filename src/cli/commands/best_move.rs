//! Best-move command - ask the computer for a move on a given board

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};
use serde::Serialize;

use crate::{
    ai::{Difficulty, MovePolicy, SearchResult, Sides, score_moves},
    cli::output::{print_kv, print_subsection},
    tictactoe::{Board, Player, rules},
};

#[derive(Parser, Debug)]
#[command(about = "Choose a move for a board position")]
pub struct BestMoveArgs {
    /// Board as nine cells, row by row (`.` empty, `X`, `O`), e.g. "XX.OO...."
    pub board: String,

    /// Marker to move (`x` or `o`); inferred from the piece counts if omitted
    #[arg(long, short = 'p')]
    pub player: Option<Player>,

    /// Difficulty (easy, medium, hard)
    #[arg(long, short = 'd', default_value = "hard")]
    pub difficulty: Difficulty,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also print the minimax score of every legal move
    #[arg(long)]
    pub all: bool,

    /// Print the answer as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct BestMoveOutput {
    board: String,
    player: Player,
    difficulty: Difficulty,
    position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<SearchResult>>,
}

/// The side to move when the user did not say: whoever has fewer pieces,
/// X on equal counts.
fn infer_player(board: &Board) -> Player {
    let count = board.count_pieces();
    if count.x > count.o { Player::O } else { Player::X }
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let mut board = Board::from_string(&args.board)?;
    rules::validate(&board)?;

    let player = args.player.unwrap_or_else(|| infer_player(&board));
    let sides = Sides::for_player(player);
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));

    let position = MovePolicy::new(args.difficulty).choose_move(&board, sides, &mut rng)?;
    let scores = args.all.then(|| score_moves(&mut board, sides));

    if args.json {
        let output = BestMoveOutput {
            board: board.encode(),
            player,
            difficulty: args.difficulty,
            position,
            scores,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{board}");
    print_kv("Player", &player.to_string());
    print_kv("Difficulty", args.difficulty.as_str());
    print_kv("Chosen move", &position.to_string());

    if let Some(scores) = scores {
        print_subsection("Minimax scores");
        for result in scores {
            print_kv(&format!("cell {}", result.position), &result.score.to_string());
        }
    }

    Ok(())
}
