//! Core types for melops-sync

use crate::error::TranscriptError;
use serde::{Deserialize, Serialize};

/// Word with timestamps.
///
/// Represents a single spoken word with start and end times in seconds.
/// Zero-length words (`start == end`) are legal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInterval {
    /// Bare word text
    pub text: String,
    /// Word text with surrounding punctuation, as displayed
    #[serde(default)]
    pub punctuated_text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Sentence the word belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_index: Option<usize>,
    /// Emphasis in `[0, 1]` for the presentation layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_weight: Option<f32>,
}

impl WordInterval {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            punctuated_text: String::new(),
            start,
            end,
            sentence_index: None,
            activation_weight: None,
        }
    }

    pub fn with_punctuated(mut self, punctuated_text: impl Into<String>) -> Self {
        self.punctuated_text = punctuated_text.into();
        self
    }

    pub fn in_sentence(mut self, sentence_index: usize) -> Self {
        self.sentence_index = Some(sentence_index);
        self
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.activation_weight = Some(weight);
        self
    }

    /// Activation weight, `1.0` when unset.
    pub fn weight(&self) -> f32 {
        self.activation_weight.unwrap_or(1.0)
    }

    /// Punctuated text if present, otherwise the bare text.
    pub fn display_text(&self) -> &str {
        if self.punctuated_text.is_empty() {
            &self.text
        } else {
            &self.punctuated_text
        }
    }

    /// Whether `point` lies in `[start - epsilon, end + epsilon]`.
    pub fn contains(&self, point: f64, epsilon: f64) -> bool {
        self.start - epsilon <= point && point <= self.end + epsilon
    }

    fn validate(&self, index: usize) -> Result<(), TranscriptError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(TranscriptError::NonFiniteTimestamp { index });
        }

        if self.start < 0.0 {
            return Err(TranscriptError::NegativeStart {
                index,
                start: self.start,
            });
        }

        if self.start > self.end {
            return Err(TranscriptError::InvertedInterval {
                index,
                start: self.start,
                end: self.end,
            });
        }

        if let Some(weight) = self.activation_weight
            && !(0.0..=1.0).contains(&weight)
        {
            return Err(TranscriptError::InvalidWeight { index, weight });
        }

        Ok(())
    }
}

/// Validated, immutable sequence of words in input order.
///
/// A transcript is never patched; loading a new one replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    words: Vec<WordInterval>,
}

impl Transcript {
    /// Validate words and build a transcript.
    ///
    /// # Errors
    ///
    /// Returns the first word that is not a well-formed interval.
    pub fn new(words: Vec<WordInterval>) -> Result<Self, TranscriptError> {
        for (index, word) in words.iter().enumerate() {
            word.validate(index)?;
        }

        Ok(Self { words })
    }

    pub fn words(&self) -> &[WordInterval] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&WordInterval> {
        self.words.get(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Latest end time across all words, `0.0` for an empty transcript.
    pub fn duration(&self) -> f64 {
        self.words.iter().map(|w| w.end).fold(0.0, f64::max)
    }

    /// Positions of every word in a sentence, in input order.
    pub fn sentence_positions(&self, sentence_index: usize) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(move |(_, w)| w.sentence_index == Some(sentence_index))
            .map(|(i, _)| i)
    }

    /// Every word in a sentence, in input order.
    pub fn sentence(&self, sentence_index: usize) -> Vec<&WordInterval> {
        self.sentence_positions(sentence_index)
            .map(|i| &self.words[i])
            .collect()
    }

    /// First word in input order that belongs to a sentence.
    pub fn first_word_of_sentence(&self, sentence_index: usize) -> Option<&WordInterval> {
        self.words
            .iter()
            .find(|w| w.sentence_index == Some(sentence_index))
    }

    /// Distinct sentence indices in order of first appearance.
    pub fn sentence_indices(&self) -> Vec<usize> {
        let mut seen = Vec::new();
        for index in self.words.iter().filter_map(|w| w.sentence_index) {
            if !seen.contains(&index) {
                seen.push(index);
            }
        }
        seen
    }
}

impl TryFrom<Vec<WordInterval>> for Transcript {
    type Error = TranscriptError;

    fn try_from(words: Vec<WordInterval>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}
