//! Activation policy: which matched words count as active.

use crate::types::WordInterval;
use serde::{Deserialize, Serialize};

/// How a word stays active once playback moves past it.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    /// A word is active only while playback is inside it
    Strict,
    /// A word stays active until another word matches
    #[default]
    Persist,
}

/// Outcome of applying a mode to one raw query result.
#[derive(Clone, Debug, PartialEq)]
pub enum Activation {
    /// These word positions are now active
    Active(Vec<usize>),
    /// Nothing is active; drop any previous state
    Cleared,
    /// Nothing matched; keep the previous state
    Retain,
}

/// Apply `mode` to the raw tolerant matches for `point`.
///
/// `raw` holds positions into `words` as returned by the interval index.
pub fn activate(
    mode: ActivationMode,
    point: f64,
    raw: &[usize],
    words: &[WordInterval],
) -> Activation {
    match mode {
        ActivationMode::Strict => {
            // drop words that matched only through the tolerance past their end
            let live: Vec<usize> = raw
                .iter()
                .copied()
                .filter(|&i| point <= words[i].end)
                .collect();

            if live.is_empty() {
                Activation::Cleared
            } else {
                Activation::Active(live)
            }
        }
        ActivationMode::Persist => {
            if raw.is_empty() {
                Activation::Retain
            } else {
                Activation::Active(raw.to_vec())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<WordInterval> {
        vec![
            WordInterval::new("a", 0.0, 1.0),
            WordInterval::new("b", 1.0005, 2.0),
        ]
    }

    #[test]
    fn strict_drops_words_past_their_end() {
        // 1.0004 is within tolerance of both words
        let result = activate(ActivationMode::Strict, 1.0004, &[0, 1], &words());

        assert_eq!(result, Activation::Active(vec![1]));
    }

    #[test]
    fn strict_clears_when_nothing_is_live() {
        let result = activate(ActivationMode::Strict, 2.0005, &[1], &words());

        assert_eq!(result, Activation::Cleared);
        assert_eq!(
            activate(ActivationMode::Strict, 5.0, &[], &words()),
            Activation::Cleared
        );
    }

    #[test]
    fn persist_keeps_raw_matches_unfiltered() {
        let result = activate(ActivationMode::Persist, 1.0004, &[0, 1], &words());

        assert_eq!(result, Activation::Active(vec![0, 1]));
    }

    #[test]
    fn persist_retains_on_empty_match() {
        let result = activate(ActivationMode::Persist, 5.0, &[], &words());

        assert_eq!(result, Activation::Retain);
    }

    #[test]
    fn defaults_to_persist() {
        assert_eq!(ActivationMode::default(), ActivationMode::Persist);
    }
}
