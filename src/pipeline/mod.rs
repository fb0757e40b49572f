//! Match pipeline for measuring agents against each other

pub mod agents;
pub mod matches;
pub mod observers;

pub use agents::DefensiveAgent;
pub use matches::{GameRecord, MatchConfig, MatchResult, MatchRunner, play_game};
pub use observers::{LoggingObserver, ProgressObserver};

pub use crate::ports::{Agent, Observer};
