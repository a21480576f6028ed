//! Console tic-tac-toe with an unbeatable minimax opponent
//!
//! This crate provides:
//! - Tic-Tac-Toe board, move validation and win/draw detection
//! - Exhaustive minimax search for the computer player
//! - A session loop that plays repeated games and keeps score
//! - Ports and adapters separating the game from console I/O

pub mod adapters;
pub mod cli;
pub mod error;
pub mod minimax;
pub mod ports;
pub mod scores;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use minimax::{SearchReport, best_move, best_move_for};
pub use scores::ScoreTable;
pub use session::{GameMode, Session, SessionConfig};
