//! Ports (trait boundaries) between the match pipeline and its participants.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
