//! Computer opponent: minimax search and difficulty levels

pub mod computer;
pub mod difficulty;
pub mod minimax;

pub use computer::ComputerPlayer;
pub use difficulty::{DEFAULT_OPTIMAL_PROBABILITY, Difficulty, MovePolicy, select_move};
pub use minimax::{SearchResult, Sides, WIN_SCORE, best_move, find_best_move, minimax, score_moves};
