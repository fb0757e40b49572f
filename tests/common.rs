//! Shared helpers for the oxo test suite.

#![allow(dead_code)]

use oxo::tictactoe::{Board, CELL_COUNT, Cell};

/// Parse a board written as nine cells, panicking on malformed input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|err| panic!("bad test board '{s}': {err}"))
}

/// Every assignment of Empty/X/O to the nine cells (3^9 boards), legal or not.
pub fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(CELL_COUNT as u32)).map(|mut code| {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for cell in &mut cells {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}
