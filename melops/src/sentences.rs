//! Sentences subcommand - list sentence groups with their time spans.

use crate::config::{TranscriptArgs, TranscriptConfig};
use crate::render;
use eyre::Result;
use melops_sync::types::Transcript;
use std::io::Write;

/// CLI arguments for listing sentences.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub transcript: TranscriptArgs,

    /// Show only the first and last few sentences
    #[arg(long)]
    pub preview: bool,
}

/// Resolved configuration for listing sentences.
#[derive(Debug)]
pub struct Config {
    pub transcript: TranscriptConfig,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            transcript: args.transcript.try_into()?,
            preview: args.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let lines = sentence_lines(&config.transcript.transcript);

    let ungrouped = config
        .transcript
        .transcript
        .words()
        .iter()
        .filter(|w| w.sentence_index.is_none())
        .count();
    if ungrouped > 0 {
        tracing::warn!(ungrouped, "words without a sentence index are not listed");
    }

    let text = if config.preview {
        render::preview_lines(&lines, 3, 3)
    } else {
        lines.join("\n")
    };

    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}

/// One rendered line per sentence, in order of first appearance.
pub fn sentence_lines(transcript: &Transcript) -> Vec<String> {
    transcript
        .sentence_indices()
        .into_iter()
        .map(|index| render::sentence_line(index, &transcript.sentence(index)))
        .collect()
}
