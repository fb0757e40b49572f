//! Board representation and basic operations

use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player's marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// The nine cells of a Tic-Tac-Toe board.
///
/// Index `i` maps to row `i / 3` and column `i % 3`. Cells are only ever
/// written through [`Board::place`] or a scoped [`Speculation`], so a cell
/// that has been set stays set for the lifetime of the board unless it was
/// placed speculatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from raw cells without any consistency checks.
    ///
    /// Use [`crate::tictactoe::rules::validate`] to check that the cells could
    /// have arisen from alternating play.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored; the remaining text must hold exactly nine cell
    /// characters (`.` or `-` for empty, `X`, `O`).
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 cells are present, or if any character
    /// is not a valid cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string("XX.\nOO.\n...").unwrap();
    /// assert_eq!(board.get(2), Some(Cell::Empty));
    /// assert_eq!(board.get(3), Some(Cell::O));
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// All nine cells in index order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8), or `None` when out of range
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    fn check_target(&self, pos: usize) -> Result<(), crate::Error> {
        match self.get(pos) {
            None => Err(crate::Error::InvalidPosition { position: pos }),
            Some(Cell::Empty) => Ok(()),
            Some(_) => Err(crate::Error::InvalidMove { position: pos }),
        }
    }

    /// Place a player's marker on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for an index outside 0-8 and
    /// [`crate::Error::InvalidMove`] for an occupied cell. The board is left
    /// unchanged in both cases.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        self.check_target(pos)?;
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Return a copy of the board with the marker placed
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        let mut next = *self;
        next.place(pos, player)?;
        Ok(next)
    }

    /// Speculatively place a marker for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board so the speculative position can be
    /// inspected or searched further. Dropping it clears the cell again, which
    /// restores the board exactly on every exit path.
    ///
    /// ```
    /// use oxo::tictactoe::{Board, Cell, Player};
    ///
    /// let mut board = Board::new();
    /// {
    ///     let trial = board.speculate(4, Player::X).unwrap();
    ///     assert_eq!(trial.get(4), Some(Cell::X));
    /// }
    /// assert_eq!(board, Board::new());
    /// ```
    pub fn speculate(&mut self, pos: usize, player: Player) -> Result<Speculation<'_>, crate::Error> {
        self.check_target(pos)?;
        self.cells[pos] = player.to_cell();
        Ok(Speculation {
            board: self,
            position: pos,
        })
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Encode the cells as a nine character string
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A marker placed speculatively on a board, retracted on drop.
///
/// Holding the guard borrows the board mutably, so nothing outside the
/// search can observe the intermediate position.
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    position: usize,
}

impl Speculation<'_> {
    /// The speculatively occupied position
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position] = Cell::Empty;
    }
}
