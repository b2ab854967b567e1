//! Query subcommand - tick at explicit positions.

use crate::config::{TranscriptArgs, TranscriptConfig};
use crate::render;
use eyre::{Result, WrapErr};
use melops_sync::sync::PlaybackSync;
use std::io::Write;

/// CLI arguments for position queries.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub transcript: TranscriptArgs,

    /// Positions in seconds, ticked in the given order
    #[arg(required = true, allow_negative_numbers = true)]
    pub positions: Vec<f64>,

    /// Print each tick as a JSON line
    #[arg(long)]
    pub json: bool,
}

/// Resolved configuration for position queries.
#[derive(Debug)]
pub struct Config {
    pub transcript: TranscriptConfig,
    pub positions: Vec<f64>,
    pub json: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            transcript: args.transcript.try_into()?,
            positions: args.positions,
            json: args.json,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let mut out = std::io::stdout().lock();
    query(config, &mut out)
}

/// Tick once per position, in order, so persist mode carries across them.
pub fn query(config: Config, out: &mut impl Write) -> Result<()> {
    let mut sync =
        PlaybackSync::with_transcript(config.transcript.transcript, config.transcript.sync_config);

    for position in config.positions {
        let tick = sync.tick(position);

        if config.json {
            let line = serde_json::to_string(&tick).wrap_err("failed to serialize tick")?;
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{}", render::tick_line(&tick))?;
        }
    }

    Ok(())
}
