//! Canonical JSON transcript files.
//!
//! Accepts either a bare array of words or an object with a `words` array.
//! Each word uses the camelCase [`WordInterval`] fields.

use melops_sync::source::TranscriptSource;
use melops_sync::types::WordInterval;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading a transcript file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File could not be read
    #[error("failed to read transcript: {:?}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a canonical transcript
    #[error("invalid transcript json: {:?}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Words(Vec<WordInterval>),
    Wrapped { words: Vec<WordInterval> },
}

impl From<TranscriptFile> for Vec<WordInterval> {
    fn from(file: TranscriptFile) -> Self {
        match file {
            TranscriptFile::Words(words) | TranscriptFile::Wrapped { words } => words,
        }
    }
}

/// Parse canonical transcript JSON into words.
pub fn parse_words(json: &str) -> Result<Vec<WordInterval>, serde_json::Error> {
    serde_json::from_str::<TranscriptFile>(json).map(Into::into)
}

/// Transcript stored as a JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptSource for JsonFile {
    type Error = SourceError;

    fn load(&self) -> Result<Vec<WordInterval>, Self::Error> {
        tracing::debug!(path = ?self.path.display(), "read transcript");

        let json = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        parse_words(&json).map_err(|source| SourceError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let words = parse_words(r#"[{"text": "hi", "start": 0.0, "end": 0.5}]"#).unwrap();

        match &words[..] {
            [word] => {
                assert_eq!(word.text, "hi");
                assert!(word.punctuated_text.is_empty());
            }
            _ => panic!("expected 1 word, got {}", words.len()),
        }
    }

    #[test]
    fn parses_wrapped_words() {
        let json = r#"{"words": [
            {"text": "a", "start": 0.0, "end": 0.5, "sentenceIndex": 0},
            {"text": "b", "start": 0.5, "end": 1.0, "sentenceIndex": 0}
        ]}"#;

        assert_eq!(parse_words(json).unwrap().len(), 2);
    }

    #[test]
    fn rejects_missing_timestamps() {
        assert!(parse_words(r#"[{"text": "a"}]"#).is_err());
    }

    #[test]
    fn reports_missing_file() {
        let source = JsonFile::new("does/not/exist.json");

        assert!(matches!(source.load(), Err(SourceError::Io { .. })));
    }
}
