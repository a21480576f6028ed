//! Session loop: play games back to back and keep score
//!
//! A session owns the terminal, the current [`Game`] and the [`ScoreTable`].
//! Each round optionally asks for the game mode, shows the instructions, and
//! alternates between the two move sources until the game ends. After each
//! game the players are asked whether to play again; scores carry over.

pub mod config;

pub use config::{GameMode, SessionConfig};

use tracing::{debug, info};

use crate::{
    Result,
    adapters::{HumanPlayer, MinimaxPlayer},
    error::Error,
    ports::{MoveSource, Terminal},
    scores::ScoreTable,
    tictactoe::{Game, GameState, Player},
};

pub const MODE_PROMPT: &str = "Do you want to play against the AI? (y/n): ";
pub const REPLAY_PROMPT: &str = "Do you want to play again? (y/n): ";
pub const DRAW_MESSAGE: &str = "It's a draw!";

const INSTRUCTIONS: &str = "\
Welcome to Tic-Tac-Toe!
Players take turns to place their mark (X or O) on the board.
The first player to get 3 marks in a row (horizontally, vertically, or diagonally) wins.
To make a move, enter a number from 1 to 9 corresponding to the board position as follows:
 1 | 2 | 3
---|---|---
 4 | 5 | 6
---|---|---
 7 | 8 | 9
Let's start!";

/// A yes/no answer counts as yes when its first non-blank character is `y`
/// or `Y`.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}

/// Games played back to back on one terminal
pub struct Session<T: Terminal> {
    terminal: T,
    config: SessionConfig,
    game: Game,
    scores: ScoreTable,
    human: HumanPlayer,
    computer: MinimaxPlayer,
}

impl<T: Terminal> Session<T> {
    pub fn new(terminal: T, config: SessionConfig) -> Self {
        Self {
            terminal,
            config,
            game: Game::new(),
            scores: ScoreTable::new(),
            human: HumanPlayer::default(),
            computer: MinimaxPlayer::default(),
        }
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Hand back the terminal, e.g. to inspect a test transcript
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Play until the players decline a rematch or the input runs out.
    ///
    /// Returns the number of games that reached a result.
    pub fn run(&mut self) -> Result<usize> {
        info!(mode = ?self.config.mode, "session started");
        let mut completed = 0;

        loop {
            match self.play_game() {
                Ok(state) => {
                    completed += 1;
                    debug!(?state, completed, "game finished");
                }
                Err(Error::InputClosed { prompt }) => {
                    info!(%prompt, "input closed mid-game");
                    break;
                }
                Err(e) => return Err(e),
            }

            match self.terminal.prompt(REPLAY_PROMPT) {
                Ok(answer) if is_yes(&answer) => self.game.reset(),
                Ok(_) | Err(Error::InputClosed { .. }) => break,
                Err(e) => return Err(e),
            }
        }

        info!(completed, "session ended");
        Ok(completed)
    }

    /// Play one game from the current position to its end and report it.
    pub fn play_game(&mut self) -> Result<GameState> {
        let mode = self.choose_mode()?;
        debug!(?mode, "game starting");

        if self.config.show_instructions {
            self.terminal.clear()?;
            self.terminal.say(INSTRUCTIONS)?;
        }

        loop {
            self.render()?;

            let player = match self.game.state() {
                GameState::AwaitingMove(player) => player,
                finished => return self.finish(finished),
            };

            let source: &mut dyn MoveSource = if player == Player::X || !mode.against_ai() {
                &mut self.human
            } else {
                &mut self.computer
            };
            let position = source.select_move(self.game.board(), player, &mut self.terminal)?;

            let state = self.game.play(position)?;
            if state.is_terminal() {
                self.terminal.clear()?;
                self.render()?;
                return self.finish(state);
            }
            self.terminal.clear()?;
        }
    }

    fn choose_mode(&mut self) -> Result<GameMode> {
        if let Some(mode) = self.config.mode {
            return Ok(mode);
        }
        let answer = self.terminal.prompt(MODE_PROMPT)?;
        Ok(if is_yes(&answer) {
            GameMode::HumanVsAi
        } else {
            GameMode::HumanVsHuman
        })
    }

    fn render(&mut self) -> Result<()> {
        let board = self.game.board().to_string();
        self.terminal.show(&board)
    }

    fn finish(&mut self, state: GameState) -> Result<GameState> {
        match state {
            GameState::Won(player) => {
                self.terminal.say(&format!("Player {player} wins!"))?;
                self.scores.record_win(player);
            }
            GameState::Draw => self.terminal.say(DRAW_MESSAGE)?,
            GameState::AwaitingMove(_) => return Ok(state),
        }

        self.terminal.say("")?;
        self.terminal.show(&self.scores.to_string())?;
        Ok(state)
    }
}
