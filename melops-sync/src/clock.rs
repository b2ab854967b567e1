//! Playback clock abstraction.
//!
//! The engine never produces time itself; an audio element, a timer or a
//! dragged scrubber implements [`Clock`] and reports changes as
//! [`ClockEvent`]s.

/// Transport state reported by a clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
}

/// Notification from a clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockEvent {
    /// Position advanced during playback
    Advance(f64),
    /// Position was set explicitly
    Seek(f64),
    /// Playback started or stopped
    PlayStateChanged(PlayState),
}

/// Source of the current playback position.
pub trait Clock {
    /// Current position in seconds.
    fn position(&self) -> f64;

    /// Total playable length in seconds, if known.
    fn duration(&self) -> Option<f64>;

    /// Move the position, e.g. after a navigation jump.
    fn seek(&mut self, position: f64);

    fn is_playing(&self) -> bool;
}

/// Clock driven by explicit calls.
///
/// Used for manual scrubbing, simulated playback and tests. Each mutating
/// call returns the event a listener should receive.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    position: f64,
    duration: Option<f64>,
    playing: bool,
}

impl ManualClock {
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    fn clamp(&self, position: f64) -> f64 {
        match self.duration {
            Some(duration) => position.clamp(0.0, duration.max(0.0)),
            None => position.max(0.0),
        }
    }

    pub fn play(&mut self) -> ClockEvent {
        self.playing = true;
        ClockEvent::PlayStateChanged(PlayState::Playing)
    }

    pub fn pause(&mut self) -> ClockEvent {
        self.playing = false;
        ClockEvent::PlayStateChanged(PlayState::Paused)
    }

    /// Advance by `delta` seconds, stopping at the end.
    pub fn advance(&mut self, delta: f64) -> ClockEvent {
        self.position = self.clamp(self.position + delta);
        ClockEvent::Advance(self.position)
    }

    /// Drag to `position`, as a user scrubbing would.
    pub fn drag_to(&mut self, position: f64) -> ClockEvent {
        self.position = self.clamp(position);
        ClockEvent::Seek(self.position)
    }

    /// Whether the position has reached a known duration.
    pub fn at_end(&self) -> bool {
        self.duration.is_some_and(|d| self.position >= d)
    }
}

impl Clock for ManualClock {
    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn seek(&mut self, position: f64) {
        self.position = self.clamp(position);
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_duration() {
        let mut clock = ManualClock::new(Some(2.0));

        assert_eq!(clock.advance(1.5), ClockEvent::Advance(1.5));
        assert_eq!(clock.advance(1.5), ClockEvent::Advance(2.0));
        assert!(clock.at_end());
    }

    #[test]
    fn drag_clamps_to_zero() {
        let mut clock = ManualClock::new(None);

        assert_eq!(clock.drag_to(-3.0), ClockEvent::Seek(0.0));
        assert!(!clock.at_end());
    }

    #[test]
    fn reports_play_state() {
        let mut clock = ManualClock::default();

        assert_eq!(
            clock.play(),
            ClockEvent::PlayStateChanged(PlayState::Playing)
        );
        assert!(clock.is_playing());

        clock.pause();
        assert!(!clock.is_playing());
    }
}
