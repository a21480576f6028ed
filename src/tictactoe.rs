//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod position;

pub use board::{Board, Cell, O_WIN_SCORE, Player, X_WIN_SCORE};
pub use game::{Game, GameState, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use position::Position;
