//! Tic-tac-toe with a minimax computer opponent
//!
//! This crate provides:
//! - A 3x3 board with win, draw and legality rules
//! - An exhaustive minimax search that never loses from a legal position
//! - Easy, Medium and Hard move policies built on that search
//! - A game session for two humans or a human against the computer
//! - A match pipeline for evaluating difficulty levels over many games

pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod tictactoe;

pub use ai::{ComputerPlayer, Difficulty, MovePolicy, Sides, find_best_move, select_move};
pub use config::{GameMode, SessionConfig};
pub use error::{Error, Result};
pub use session::{GameSession, GameStatus, Move, TurnReport};
pub use tictactoe::{Board, Cell, GameOutcome, Player};
