//! Subcommands of the `oxo` binary

pub mod best_move;
pub mod evaluate;
pub mod play;

use anyhow::{Result, anyhow};

/// Parse a cell typed by the user, honouring the `--one-based` numbering
pub(crate) fn parse_cell(input: &str, one_based: bool) -> Result<usize> {
    let value: usize = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("'{}' is not a cell number", input.trim()))?;
    let (low, high) = if one_based { (1, 9) } else { (0, 8) };
    if !(low..=high).contains(&value) {
        return Err(anyhow!("cell must be between {low} and {high}"));
    }
    Ok(value - low)
}
