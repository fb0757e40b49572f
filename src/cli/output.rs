//! Output formatting for the CLI

use crate::tictactoe::{Board, Cell};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a rate in `[0, 1]` as a percentage
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Label shown for a cell index
pub fn cell_label(position: usize, one_based: bool) -> usize {
    if one_based { position + 1 } else { position }
}

/// Render the board as a grid, numbering the empty cells
pub fn render_board(board: &Board, one_based: bool) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => format!(" {} ", cell_label(row * 3 + col, one_based)),
                    marker => format!(" {} ", marker.to_char()),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}
