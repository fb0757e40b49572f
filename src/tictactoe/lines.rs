//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First line, in table order, held entirely by one player
    pub fn completed_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
        WINNING_LINES.iter().copied().find(|&[a, b, c]| {
            cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c]
        })
    }

    /// Find all positions that would immediately complete a line for the player
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::completed_line(&cells), Some([2, 4, 6]));
    }

    #[test]
    fn test_completed_line_ignores_empty_lines() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::completed_line(&cells), None);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![2, 6]);
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_winning_move_blocked_by_opponent() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }
}
