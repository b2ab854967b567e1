//! melops: command-line glue around melops-sync.
//!
//! Loads canonical JSON transcripts, drives a simulated playback clock and
//! renders the active words as text.

pub mod cli;
pub mod config;
pub mod play;
pub mod query;
pub mod render;
pub mod sentences;
pub mod source;
