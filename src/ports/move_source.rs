//! Move source port - abstraction over who chooses the next move
//!
//! The session loop does not care whether a move comes from a person typing
//! at the console or from the minimax search; both sit behind this trait.

use crate::{
    Result,
    ports::Terminal,
    tictactoe::{Board, Player, Position},
};

/// Something that can choose a move for a player.
///
/// # Contract
///
/// A successful return is always an empty cell of `board`. Implementations
/// that talk to a person are responsible for re-prompting on bad input; they
/// only return an error when no answer can be obtained at all (for example the
/// input stream was closed).
///
/// # Examples
///
/// ```
/// use minimax_ttt::{
///     ports::{MoveSource, Terminal},
///     tictactoe::{Board, Player, Position},
/// };
///
/// /// Always plays the first free cell.
/// struct FirstFree;
///
/// impl MoveSource for FirstFree {
///     fn select_move(
///         &mut self,
///         board: &Board,
///         _player: Player,
///         _terminal: &mut dyn Terminal,
///     ) -> minimax_ttt::Result<Position> {
///         board
///             .empty_positions()
///             .first()
///             .copied()
///             .ok_or(minimax_ttt::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait MoveSource {
    /// Choose a cell for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] on a full board, or an I/O
    /// related error if the terminal fails.
    fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        terminal: &mut dyn Terminal,
    ) -> Result<Position>;

    /// Name used in logs
    fn name(&self) -> &str;
}
