//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    board::{Board, Player},
    position::Position,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Where the game stands after the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    AwaitingMove(Player),
    Won(Player),
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::AwaitingMove(_))
    }
}

/// A single game: the board, whose turn it is, and the moves made so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    state: GameState,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game with X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            state: GameState::AwaitingMove(Player::X),
            moves: Vec::new(),
        }
    }

    /// Resume from an arbitrary board with `to_move` next to act.
    ///
    /// The state is derived from the board, so a finished position comes back
    /// as `Won` or `Draw`.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let state = if let Some(winner) = board.winner() {
            GameState::Won(winner)
        } else if board.is_full() {
            GameState::Draw
        } else {
            GameState::AwaitingMove(to_move)
        };
        Game {
            board,
            state,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Moves made since the game started (or since [`Game::from_board`])
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The player whose turn it is, or `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            GameState::AwaitingMove(player) => Some(player),
            GameState::Won(_) | GameState::Draw => None,
        }
    }

    /// Play a move for the current player.
    ///
    /// Checks for a win by the mover first, then for a full board, and only
    /// then hands the turn over. An occupied cell leaves the game untouched.
    pub fn play(&mut self, position: Position) -> Result<GameState, crate::Error> {
        let GameState::AwaitingMove(player) = self.state else {
            return Err(crate::Error::GameOver);
        };

        self.board.place_mark(position, player)?;
        self.moves.push(Move { position, player });

        self.state = if self.board.has_won(player) {
            GameState::Won(player)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::AwaitingMove(player.opponent())
        };

        debug!(%position, %player, state = ?self.state, "move applied");
        Ok(self.state)
    }

    /// Start over: empty board, no history, X to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.moves.clear();
        self.state = GameState::AwaitingMove(Player::X);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
