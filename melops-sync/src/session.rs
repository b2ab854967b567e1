//! Clock-driven playback session.
//!
//! A [`Session`] connects a [`Clock`] to a [`PlaybackSync`]. While the clock
//! plays, the host drives ticks from its refresh callback through a
//! [`Subscription`]; outside playback, ticks happen once per seek, pause or
//! transcript load.
//!
//! Every load bumps the session generation and releases the current
//! subscription, so a callback still holding the old handle cannot tick
//! against the new transcript.

use crate::clock::{Clock, ClockEvent, PlayState};
use crate::error::Result;
use crate::policy::ActivationMode;
use crate::source::{TranscriptSource, load_transcript};
use crate::sync::{Direction, PlaybackSync, SyncConfig, Tick};
use crate::types::Transcript;

/// Handle to the per-frame tick callback of one playback run.
///
/// Every acquisition gets a fresh `run` number, so a released handle never
/// becomes valid again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    generation: u64,
    run: u64,
}

impl Subscription {
    /// Transcript generation the handle was acquired under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn run(&self) -> u64 {
        self.run
    }
}

/// Playback session owning a clock and its synchronization state.
#[derive(Debug)]
pub struct Session<C> {
    clock: C,
    sync: PlaybackSync,
    subscription: Option<Subscription>,
    generation: u64,
    runs: u64,
}

impl<C> Session<C> {
    /// Release the tick subscription. Safe to call when none is held.
    pub fn unsubscribe(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!(
                generation = subscription.generation,
                run = subscription.run,
                "tick subscription released"
            );
        }
    }

    pub fn subscription(&self) -> Option<Subscription> {
        self.subscription
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn sync(&self) -> &PlaybackSync {
        &self.sync
    }
}

impl<C: Clock> Session<C> {
    pub fn new(clock: C, config: SyncConfig) -> Self {
        Self {
            clock,
            sync: PlaybackSync::new(config),
            subscription: None,
            generation: 0,
            runs: 0,
        }
    }

    fn subscribe(&mut self) -> Subscription {
        if let Some(subscription) = self.subscription {
            return subscription;
        }

        self.runs += 1;
        let subscription = Subscription {
            generation: self.generation,
            run: self.runs,
        };
        tracing::debug!(
            generation = self.generation,
            run = self.runs,
            "tick subscription acquired"
        );
        self.subscription = Some(subscription);
        subscription
    }

    /// Replace the transcript and tick once at the clock position.
    ///
    /// The subscription is released before the swap and reacquired under the
    /// new generation if the clock is still playing.
    pub fn load(&mut self, transcript: Transcript) -> Tick {
        self.unsubscribe();
        self.generation += 1;

        self.sync.load(transcript);
        if let Some(duration) = self.clock.duration() {
            self.sync.set_duration(duration);
        }

        if self.clock.is_playing() {
            self.subscribe();
        }

        self.sync.tick(self.clock.position())
    }

    /// Load from a source. On failure the current transcript stays in place.
    pub fn load_from<S: TranscriptSource + ?Sized>(&mut self, source: &S) -> Result<Tick> {
        let transcript = load_transcript(source)?;
        Ok(self.load(transcript))
    }

    /// React to a clock notification, returning the tick it caused if any.
    pub fn handle(&mut self, event: ClockEvent) -> Option<Tick> {
        match event {
            ClockEvent::Advance(position) => {
                if self.subscription.is_some() {
                    Some(self.sync.tick(position))
                } else {
                    None
                }
            }
            ClockEvent::Seek(position) => Some(self.sync.tick(position)),
            ClockEvent::PlayStateChanged(PlayState::Playing) => {
                self.subscribe();
                None
            }
            ClockEvent::PlayStateChanged(PlayState::Paused) => {
                self.unsubscribe();
                Some(self.sync.tick(self.clock.position()))
            }
        }
    }

    /// Refresh callback: tick at the clock position if `subscription` is
    /// still the live one.
    pub fn frame(&mut self, subscription: Subscription) -> Option<Tick> {
        if self.subscription != Some(subscription) {
            tracing::trace!(
                generation = subscription.generation,
                run = subscription.run,
                current = self.generation,
                "stale frame ignored"
            );
            return None;
        }

        Some(self.sync.tick(self.clock.position()))
    }

    /// Tick at the clock position regardless of subscription.
    pub fn tick(&mut self) -> Tick {
        self.sync.tick(self.clock.position())
    }

    pub fn set_mode(&mut self, mode: ActivationMode) {
        self.sync.set_mode(mode);
    }

    /// Jump `delta` seconds from the clock position and move the clock along.
    pub fn jump_by_offset(&mut self, delta: f64) -> Tick {
        let tick = self.sync.jump_from(self.clock.position(), delta);
        self.clock.seek(tick.position);
        tick
    }

    /// Jump to the neighbouring sentence and move the clock along.
    pub fn jump_to_adjacent_sentence(&mut self, direction: Direction) -> Option<Tick> {
        let tick = self.sync.jump_to_adjacent_sentence(direction)?;
        self.clock.seek(tick.position);
        Some(tick)
    }
}

impl<C> Drop for Session<C> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
