//! Minimax move source for the computer opponent.

use tracing::debug;

use crate::{
    Result,
    error::Error,
    minimax::Minimax,
    ports::{MoveSource, Terminal},
    tictactoe::{Board, Player, Position},
};

/// Computer player that searches the full game tree before every move
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new("minimax")
    }
}

impl MoveSource for MinimaxPlayer {
    fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        _terminal: &mut dyn Terminal,
    ) -> Result<Position> {
        let report = Minimax::new()
            .best_move_for(board, player)
            .ok_or(Error::NoValidMoves)?;

        debug!(
            source = %self.name,
            %player,
            position = %report.position,
            score = report.score,
            nodes = report.nodes,
            "search finished"
        );
        Ok(report.position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
