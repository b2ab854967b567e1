//! Transcript sources.
//!
//! A source hands over words that are already normalized to
//! [`WordInterval`]; reconciling file formats happens on its side.

use crate::error::{Error, Result};
use crate::types::{Transcript, WordInterval};
use std::convert::Infallible;

/// Supplier of normalized words for one transcript load.
pub trait TranscriptSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self) -> std::result::Result<Vec<WordInterval>, Self::Error>;
}

impl TranscriptSource for [WordInterval] {
    type Error = Infallible;

    fn load(&self) -> std::result::Result<Vec<WordInterval>, Self::Error> {
        Ok(self.to_vec())
    }
}

impl TranscriptSource for Vec<WordInterval> {
    type Error = Infallible;

    fn load(&self) -> std::result::Result<Vec<WordInterval>, Self::Error> {
        Ok(self.clone())
    }
}

/// Pull words from a source and validate them into a transcript.
pub fn load_transcript<S: TranscriptSource + ?Sized>(source: &S) -> Result<Transcript> {
    let words = source.load().map_err(|e| Error::Source(Box::new(e)))?;
    tracing::debug!(words = words.len(), "transcript supplied");
    Ok(Transcript::new(words)?)
}
