//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in evaluation order
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

    /// Owner of the first uniformly occupied line, scanning rows, then
    /// columns, then the two diagonals.
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            if cells[a] == cells[b] && cells[b] == cells[c] {
                cells[a].to_player()
            } else {
                None
            }
        })
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
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_every_line_wins_for_its_owner_only() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut cells = [Cell::Empty; 9];
                for idx in line {
                    cells[idx] = player.to_cell();
                }
                assert!(LineAnalyzer::has_won(&cells, player), "line {line:?}");
                assert!(
                    !LineAnalyzer::has_won(&cells, player.opponent()),
                    "line {line:?}"
                );
                assert_eq!(LineAnalyzer::first_complete_line(&cells), Some(player));
            }
        }
    }

    #[test]
    fn test_empty_line_has_no_owner() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::first_complete_line(&cells), None);
    }

    #[test]
    fn test_first_complete_line_prefers_rows() {
        // OOO
        // X.X
        // XXX  (not reachable in play, but checks scan order)
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2] {
            cells[idx] = Cell::O;
        }
        for idx in [3, 5, 6, 7, 8] {
            cells[idx] = Cell::X;
        }
        assert_eq!(LineAnalyzer::first_complete_line(&cells), Some(Player::O));
    }
}
