//! Playback synchronization: per-tick active words and sentence groups.

use crate::index::{DEFAULT_EPSILON, IntervalIndex};
use crate::policy::{Activation, ActivationMode, activate};
use crate::types::{Transcript, WordInterval};
use serde::Serialize;

/// Configuration for playback synchronization.
#[derive(clap::Args, Clone, Copy, Debug, PartialEq)]
pub struct SyncConfig {
    /// Timestamp tolerance in seconds applied to both word bounds
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Whether words stay active after playback moves past them
    #[arg(long, value_enum, default_value_t = ActivationMode::Persist)]
    pub mode: ActivationMode,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            mode: ActivationMode::default(),
        }
    }
}

impl SyncConfig {
    pub fn new(epsilon: f64, mode: ActivationMode) -> Self {
        Self { epsilon, mode }
    }
}

/// Direction for sentence navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Observable result of one tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    /// Playback position the tick was issued at
    pub position: f64,
    /// Active words in index traversal order
    pub active: Vec<WordInterval>,
    /// Every word of the first active word's sentence, in transcript order
    pub sentence: Vec<WordInterval>,
}

impl Tick {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Transcript and its index, always replaced together.
#[derive(Debug, Default)]
struct Loaded {
    transcript: Transcript,
    index: IntervalIndex,
}

impl Loaded {
    fn new(transcript: Transcript) -> Self {
        let index = IntervalIndex::from_words(transcript.words());
        Self { transcript, index }
    }
}

/// Synchronizes word highlighting with a playback position.
///
/// Holds the state carried between ticks (the last active words and their
/// sentence) so that independent sessions never share it.
#[derive(Debug, Default)]
pub struct PlaybackSync {
    loaded: Loaded,
    config: SyncConfig,
    position: f64,
    duration: f64,
    /// Positions of the active words
    active: Vec<usize>,
    /// Positions of the words in the active sentence
    sentence: Vec<usize>,
    sentence_index: Option<usize>,
    /// Reused query buffer
    matches: Vec<usize>,
}

impl PlaybackSync {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build with a transcript already loaded.
    pub fn with_transcript(transcript: Transcript, config: SyncConfig) -> Self {
        let mut sync = Self::new(config);
        sync.load(transcript);
        sync
    }

    /// Replace the transcript, discarding all state from the previous one.
    ///
    /// The new index is fully built before it replaces the old one.
    pub fn load(&mut self, transcript: Transcript) {
        let loaded = Loaded::new(transcript);

        tracing::debug!(
            words = loaded.transcript.len(),
            height = loaded.index.height(),
            "transcript indexed"
        );

        self.duration = loaded.transcript.duration();
        self.loaded = loaded;
        self.position = 0.0;
        self.active.clear();
        self.sentence.clear();
        self.sentence_index = None;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.loaded.transcript
    }

    pub fn config(&self) -> SyncConfig {
        self.config
    }

    pub fn mode(&self) -> ActivationMode {
        self.config.mode
    }

    /// Switch activation mode; takes effect on the next tick.
    pub fn set_mode(&mut self, mode: ActivationMode) {
        self.config.mode = mode;
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.config.epsilon = epsilon;
    }

    /// Position of the most recent tick.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Override the playable length, e.g. with the audio's real duration.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
    }

    /// Sentence of the first active word, if any.
    pub fn current_sentence(&self) -> Option<usize> {
        self.sentence_index
    }

    /// Query the index at `point` and update the active words.
    pub fn tick(&mut self, point: f64) -> Tick {
        self.position = point;

        self.matches.clear();
        self.loaded
            .index
            .query_into(point, self.config.epsilon, &mut self.matches);

        let words = self.loaded.transcript.words();
        match activate(self.config.mode, point, &self.matches, words) {
            Activation::Active(active) => {
                self.sentence_index = words[active[0]].sentence_index;
                self.sentence = match self.sentence_index {
                    Some(index) => self.loaded.transcript.sentence_positions(index).collect(),
                    None => Vec::new(),
                };
                self.active = active;
            }
            Activation::Cleared => {
                self.active.clear();
                self.sentence.clear();
                self.sentence_index = None;
            }
            Activation::Retain => {}
        }

        let tick = self.last();
        tracing::trace!(
            position = point,
            active = tick.active.len(),
            sentence = ?self.sentence_index,
            "tick"
        );
        tick
    }

    /// Result of the most recent tick without querying again.
    pub fn last(&self) -> Tick {
        let words = self.loaded.transcript.words();
        Tick {
            position: self.position,
            active: self.active.iter().map(|&i| words[i].clone()).collect(),
            sentence: self.sentence.iter().map(|&i| words[i].clone()).collect(),
        }
    }

    /// Move by `delta` seconds, clamped to `[0, duration]`, and tick there.
    pub fn jump_by_offset(&mut self, delta: f64) -> Tick {
        self.jump_from(self.position, delta)
    }

    /// Move `delta` seconds from `base`, clamped to `[0, duration]`, and tick
    /// there.
    ///
    /// Hosts whose clock runs ahead of the last tick pass the clock position
    /// as `base`.
    pub fn jump_from(&mut self, base: f64, delta: f64) -> Tick {
        let target = (base + delta).clamp(0.0, self.duration);
        tracing::debug!(from = base, to = target, "jump by offset");
        self.tick(target)
    }

    /// Tick at the first word of the neighbouring sentence.
    ///
    /// Returns `None` and leaves all state untouched when there is no current
    /// sentence or no neighbour in `direction`.
    pub fn jump_to_adjacent_sentence(&mut self, direction: Direction) -> Option<Tick> {
        let current = self.sentence_index?;
        let target = match direction {
            Direction::Previous => current.checked_sub(1)?,
            Direction::Next => current.checked_add(1)?,
        };

        let start = self.loaded.transcript.first_word_of_sentence(target)?.start;
        tracing::debug!(from = current, to = target, start, "jump to sentence");

        Some(self.tick(start))
    }
}
