//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "mel")]
#[command(about = "Word-by-word transcript playback tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Simulate playback and print words as they become active
    Play(crate::play::Args),

    /// Print active words at the given positions
    Query(crate::query::Args),

    /// List sentences with their time spans
    Sentences(crate::sentences::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Play(args) => crate::play::execute(args.try_into()?),
        Commands::Query(args) => crate::query::execute(args.try_into()?),
        Commands::Sentences(args) => crate::sentences::execute(args.try_into()?),
    }
}
