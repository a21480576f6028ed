//! CLI infrastructure for the tic-tac-toe binary
//!
//! This module provides the command-line interface for playing games at the
//! console and for inspecting the minimax values of a position.

pub mod commands;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};

/// Console tic-tac-toe with an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about = "Console tic-tac-toe with an unbeatable AI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games at the console (the default)
    Play(commands::play::PlayArgs),

    /// Show the minimax value of every free cell of a position
    Analyze(commands::analyze::AnalyzeArgs),
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    ///
    /// Logs go to stderr; at the default level only errors are shown so the
    /// game on stdout stays readable.
    pub fn log_directive(&self) -> String {
        let level = match self.verbose {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        };
        format!("error,minimax_ttt={level},tictactoe={level}")
    }
}
