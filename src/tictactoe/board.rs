//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, position::Position};

/// Score of a board where O has completed a line
pub const O_WIN_SCORE: i32 = 10;

/// Score of a board where X has completed a line
pub const X_WIN_SCORE: i32 = -10;

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
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
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

    /// The mark this player places
    pub fn mark(self) -> char {
        self.to_cell().to_char()
    }

    /// Label under which the player's wins are tracked
    pub fn label(self) -> &'static str {
        match self {
            Player::X => "Player 1 (X)",
            Player::O => "Player 2 (O)",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// The 3x3 grid, stored row-major.
///
/// Cells change only through [`Board::place_mark`] and [`Board::clear`]; the
/// search module additionally uses a crate-private place/undo pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from a 9-character row-major picture.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `_`, or a digit are empty.
    /// Whitespace is ignored, so `"XX. OO. ..."` works. Anything else, or a
    /// picture without exactly nine cells, yields `None`.
    pub fn from_picture(picture: &str) -> Option<Self> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;
        for ch in picture.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '1'..='9' => Cell::Empty,
                _ => return None,
            };
            *cells.get_mut(count)? = cell;
            count += 1;
        }
        (count == 9).then_some(Board { cells })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at a position
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Cell::Empty
    }

    /// All empty positions in scan order
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place `player`'s mark at `position`.
    ///
    /// Fails without touching the board if the cell is already occupied.
    pub fn place_mark(&mut self, position: Position, player: Player) -> Result<(), crate::Error> {
        if !self.is_empty(position) {
            return Err(crate::Error::InvalidMove {
                position: usize::from(position.number()),
            });
        }
        self.cells[position.index()] = player.to_cell();
        Ok(())
    }

    /// Tentatively place a mark on a cell the caller knows is empty.
    pub(crate) fn place_unchecked(&mut self, position: Position, player: Player) {
        debug_assert!(self.is_empty(position));
        self.cells[position.index()] = player.to_cell();
    }

    /// Undo a tentative placement
    pub(crate) fn undo(&mut self, position: Position) {
        self.cells[position.index()] = Cell::Empty;
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Static evaluation from O's point of view: +10 for a completed O line,
    /// -10 for a completed X line, 0 otherwise.
    pub fn evaluate(&self) -> i32 {
        match LineAnalyzer::first_complete_line(&self.cells) {
            Some(Player::O) => O_WIN_SCORE,
            Some(Player::X) => X_WIN_SCORE,
            None => 0,
        }
    }
}

/// Renders the board with numbers in empty cells:
///
/// ```text
///  X | 2 | 3
/// ---|---|---
///  4 | O | 6
/// ---|---|---
///  7 | 8 | 9
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => write!(f, " {} ", idx + 1)?,
                    cell => write!(f, " {} ", cell.to_char())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f, "---|---|---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: i64) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for &cell in board.cells() {
            assert_eq!(cell, Cell::Empty);
        }
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.evaluate(), 0);
    }

    #[test]
    fn test_place_mark() {
        let mut board = Board::new();

        assert!(board.place_mark(pos(5), Player::X).is_ok());
        assert_eq!(board.get(pos(5)), Cell::X);
        assert_eq!(board.occupied_count(), 1);

        // Move on occupied cell
        let before = board;
        let result = board.place_mark(pos(5), Player::O);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_positions_scan_order() {
        let board = Board::from_picture("X.O.X.O..").unwrap();
        let numbers: Vec<u8> = board.empty_positions().iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![2, 4, 6, 8, 9]);
    }

    #[test]
    fn test_win_detection_diagonal() {
        let board = Board::from_picture("XO. OX. ..X").unwrap();
        assert!(board.has_won(Player::X));
        assert!(!board.has_won(Player::O));
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.evaluate(), X_WIN_SCORE);
    }

    #[test]
    fn test_draw_detection() {
        // XOX
        // XOO
        // OXX
        let board = Board::from_picture("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert_eq!(board.evaluate(), 0);
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // XXX
        // OOX
        // XOO
        let board = Board::from_picture("XXXOOXXOO").unwrap();
        assert!(board.is_full());
        assert!(!board.is_draw());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_evaluate_o_line() {
        let board = Board::from_picture("XX. OOO X..").unwrap();
        assert_eq!(board.evaluate(), O_WIN_SCORE);
    }

    #[test]
    fn test_place_and_undo_restore_board() {
        let mut board = Board::from_picture("X...O....").unwrap();
        let before = board;
        board.place_unchecked(pos(9), Player::X);
        assert_eq!(board.get(pos(9)), Cell::X);
        board.undo(pos(9));
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::from_picture("XOXOXOXOX").unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_from_picture_rejects_bad_input() {
        assert!(Board::from_picture("XX").is_none());
        assert!(Board::from_picture("XXXXXXXXXX").is_none());
        assert!(Board::from_picture("XXXXQXXXX").is_none());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place_mark(pos(1), Player::X).unwrap();
        board.place_mark(pos(5), Player::O).unwrap();

        let rendered = board.to_string();
        let expected = " X | 2 | 3 \n---|---|---\n 4 | O | 6 \n---|---|---\n 7 | 8 | 9 \n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_player_labels() {
        assert_eq!(Player::X.label(), "Player 1 (X)");
        assert_eq!(Player::O.label(), "Player 2 (O)");
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
