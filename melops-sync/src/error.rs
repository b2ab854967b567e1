//! Error types for melops-sync organized by loading stage.
//!
//! Querying a loaded transcript never fails; errors only arise while a
//! transcript is being supplied and validated, before any engine state changes.

use thiserror::Error;

/// Transcript loading error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Supplied words failed validation
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// The transcript source could not produce words
    #[error("transcript source failed")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Word validation errors.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Start or end is NaN or infinite
    #[error("word {index}: timestamp is not finite")]
    NonFiniteTimestamp { index: usize },

    /// Start precedes the beginning of the audio
    #[error("word {index}: negative start {start}s")]
    NegativeStart { index: usize, start: f64 },

    /// End precedes start
    #[error("word {index}: end {end}s precedes start {start}s")]
    InvertedInterval { index: usize, start: f64, end: f64 },

    /// Activation weight outside `[0, 1]`
    #[error("word {index}: activation weight {weight} outside [0, 1]")]
    InvalidWeight { index: usize, weight: f32 },
}

/// Result type alias for melops-sync operations.
pub type Result<T> = std::result::Result<T, Error>;
