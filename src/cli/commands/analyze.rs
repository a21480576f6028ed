//! Analyze command - minimax values for a given position

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{describe_score, key_value, section, subsection},
    minimax::Minimax,
    tictactoe::{Board, Cell, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every free cell")]
pub struct AnalyzeArgs {
    /// Board as nine cells in row-major order, e.g. "XX.OO...."
    /// (`.`, `_` or a digit for an empty cell; whitespace is ignored)
    pub board: String,

    /// Side to move; inferred from the piece counts when omitted
    #[arg(long, value_enum)]
    pub to_move: Option<Side>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

/// X moves first, so X is to move whenever the counts are level.
pub fn infer_to_move(board: &Board) -> Player {
    let count = |cell: Cell| board.cells().iter().filter(|&&c| c == cell).count();
    if count(Cell::X) > count(Cell::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Build the textual report for `board` with `player` to move
pub fn report(board: &Board, player: Player) -> Result<String> {
    if let Some(winner) = board.winner() {
        bail!("position is already won by {winner}");
    }
    if board.is_full() {
        bail!("position is a finished draw");
    }

    let mut minimax = Minimax::new();
    let values = minimax.evaluate_moves(board, player);
    let Some(best) = minimax.best_move_for(board, player) else {
        bail!("no free cell to analyze");
    };

    let mut lines = vec![
        section("Position"),
        board.to_string(),
        key_value("To move", &player.to_string()),
        subsection("Move values (O's point of view)"),
    ];
    for (position, value) in values {
        lines.push(key_value(
            &format!("Cell {position}"),
            &format!("{value:>4}  {}", describe_score(value)),
        ));
    }
    lines.push(subsection("Choice"));
    lines.push(key_value("Best move", &best.position.to_string()));
    lines.push(key_value("Outcome", &describe_score(best.score)));
    lines.push(key_value("Nodes searched", &best.nodes.to_string()));

    Ok(lines.join("\n"))
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let Some(board) = Board::from_picture(&args.board) else {
        bail!(
            "could not read board '{}': expected nine cells of X, O, or '.'",
            args.board
        );
    };
    let player = args.to_move.map_or_else(|| infer_to_move(&board), Player::from);

    println!("{}", report(&board, player)?);
    Ok(())
}
