//! melops-sync: word-level highlighting synchronized to audio playback.
//!
//! Given timestamped words (possibly overlapping, in any order) and an
//! advancing playback position, this crate answers "which words are active
//! right now, and which sentence do they belong to" at animation-frame rate.
//!
//! # Architecture
//!
//! - [`index::IntervalIndex`]: balanced interval tree answering tolerant
//!   "which intervals contain this point" queries
//! - [`policy::activate`]: strict or persistent activation of the matches
//! - [`sync::PlaybackSync`]: per-tick driver holding the state between ticks
//! - [`session::Session`]: connects a [`clock::Clock`] to the driver and owns
//!   the scoped per-frame subscription
//!
//! # Quick Start
//!
//! ```
//! use melops_sync::sync::{PlaybackSync, SyncConfig};
//! use melops_sync::types::{Transcript, WordInterval};
//!
//! let transcript = Transcript::new(vec![
//!     WordInterval::new("hello", 0.0, 0.4).in_sentence(0),
//!     WordInterval::new("there", 0.4, 0.9).in_sentence(0),
//!     WordInterval::new("world", 1.2, 1.6).in_sentence(1),
//! ])?;
//!
//! let mut sync = PlaybackSync::with_transcript(transcript, SyncConfig::default());
//! let tick = sync.tick(0.6);
//!
//! assert_eq!(tick.active[0].text, "there");
//! assert_eq!(tick.sentence.len(), 2);
//! # Ok::<(), melops_sync::error::TranscriptError>(())
//! ```

pub mod clock;
pub mod error;
pub mod index;
pub mod policy;
pub mod session;
pub mod source;
pub mod sync;
pub mod types;
