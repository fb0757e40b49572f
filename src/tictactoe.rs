//! Tic-Tac-Toe board, lines and rules

pub mod board;
pub mod lines;
pub mod rules;

pub use board::{Board, CELL_COUNT, Cell, PieceCount, Player, Speculation};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{GameOutcome, empty_positions, has_winner, is_draw, outcome, winner, winning_line};
