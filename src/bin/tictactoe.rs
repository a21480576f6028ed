//! Tic-tac-toe at the console, against a friend or the computer

use anyhow::Result;
use clap::Parser;
use minimax_ttt::cli::{
    Cli, Command,
    commands::{analyze, play},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_directive()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => play::execute(play::PlayArgs::default()),
        Some(Command::Play(args)) => play::execute(args),
        Some(Command::Analyze(args)) => analyze::execute(args),
    }
}
