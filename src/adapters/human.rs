//! Human move source: asks at the terminal until a legal cell is given.

use tracing::warn;

use crate::{
    Result,
    error::Error,
    ports::{MoveSource, Terminal},
    tictactoe::{Board, Player, Position},
};

pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Try again.";

/// A person entering cell numbers at the terminal
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Turn one line of input into a legal cell on `board`
    pub fn parse_move(board: &Board, input: &str) -> Result<Position> {
        let position: Position = input.parse()?;
        if !board.is_empty(position) {
            return Err(Error::InvalidMove {
                position: usize::from(position.number()),
            });
        }
        Ok(position)
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("human")
    }
}

impl MoveSource for HumanPlayer {
    fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        terminal: &mut dyn Terminal,
    ) -> Result<Position> {
        if board.is_full() {
            return Err(Error::NoValidMoves);
        }

        let prompt = format!("Player {player}, enter your move (1-9): ");
        loop {
            let input = terminal.prompt(&prompt)?;
            match Self::parse_move(board, &input) {
                Ok(position) => return Ok(position),
                Err(e) if e.is_recoverable_input() => {
                    warn!(%player, input = %input.trim(), error = %e, "rejected move");
                    terminal.say(INVALID_MOVE_MESSAGE)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
