//! Command-line front end
//!
//! The binary in `src/bin/oxo.rs` dispatches to the commands defined here.

pub mod commands;
pub mod output;
