//! Configuration types for resolved CLI arguments.
//!
//! Shared transcript arguments are flattened into each subcommand and
//! resolved here by loading and validating the transcript file.

use crate::source::JsonFile;
use color_eyre::Section;
use eyre::{Result, WrapErr, ensure};
use melops_sync::source::load_transcript;
use melops_sync::sync::SyncConfig;
use melops_sync::types::Transcript;
use std::path::PathBuf;

/// Transcript file and synchronization options shared by subcommands.
#[derive(clap::Args, Debug)]
pub struct TranscriptArgs {
    /// Path to transcript JSON file
    pub path: PathBuf,

    #[command(flatten)]
    pub sync_config: SyncConfig,
}

/// Loaded transcript with validated synchronization options.
///
/// Converted from TranscriptArgs via TryFrom.
#[derive(Debug)]
pub struct TranscriptConfig {
    pub path: PathBuf,
    pub transcript: Transcript,
    pub sync_config: SyncConfig,
}

impl TryFrom<TranscriptArgs> for TranscriptConfig {
    type Error = eyre::Error;

    fn try_from(args: TranscriptArgs) -> Result<Self> {
        let epsilon = args.sync_config.epsilon;
        ensure!(
            epsilon.is_finite() && epsilon >= 0.0,
            "epsilon must be a non-negative number of seconds, got {epsilon}"
        );

        let transcript = load_transcript(&JsonFile::new(&args.path))
            .wrap_err_with(|| format!("failed to load transcript: {:?}", args.path.display()))
            .suggestion(
                r#"expected a JSON array of words, or {"words": [...]}, each with "text", "start" and "end""#,
            )?;

        tracing::info!(
            path = ?args.path.display(),
            words = transcript.len(),
            duration = %crate::render::format_secs(transcript.duration()),
            "transcript loaded"
        );

        Ok(Self {
            path: args.path,
            transcript,
            sync_config: args.sync_config,
        })
    }
}
