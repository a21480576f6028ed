//! Play command - interactive games at the console

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{
    adapters::Console,
    session::{GameMode, Session, SessionConfig},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play tic-tac-toe at the console")]
pub struct PlayArgs {
    /// Play every game against the computer without asking
    #[arg(long, conflicts_with = "human")]
    pub ai: bool,

    /// Play every game two-player without asking
    #[arg(long)]
    pub human: bool,

    /// Do not clear the screen between moves
    #[arg(long)]
    pub no_clear: bool,

    /// Skip the rules banner at the start of each game
    #[arg(long)]
    pub no_instructions: bool,
}

impl PlayArgs {
    pub fn to_config(&self) -> SessionConfig {
        let mut config = SessionConfig::default()
            .with_clear_screen(!self.no_clear)
            .with_instructions(!self.no_instructions);
        if self.ai {
            config = config.with_mode(GameMode::HumanVsAi);
        } else if self.human {
            config = config.with_mode(GameMode::HumanVsHuman);
        }
        config
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.to_config();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock()).with_clear_screen(config.clear_screen);

    let mut session = Session::new(console, config);
    let completed = session.run().context("game session failed")?;
    info!(completed, "goodbye");
    Ok(())
}
