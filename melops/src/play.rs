//! Play subcommand - simulate playback and print highlighted words.

use crate::config::{TranscriptArgs, TranscriptConfig};
use crate::render;
use eyre::{OptionExt, Result, ensure};
use melops_sync::clock::{Clock, ManualClock};
use melops_sync::session::Session;
use melops_sync::types::WordInterval;
use std::io::Write;
use std::time::Duration;

/// Default simulated refresh rate
const DEFAULT_FPS: f64 = 30.0;

/// CLI arguments for simulated playback.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub transcript: TranscriptArgs,

    /// Ticks per second of simulated playback
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: f64,

    /// Start position in seconds
    #[arg(long, default_value_t = 0.0)]
    pub from: f64,

    /// Stop position in seconds (default: end of the last word)
    #[arg(long)]
    pub to: Option<f64>,

    /// Sleep between ticks to play in real time
    #[arg(long)]
    pub realtime: bool,
}

/// Resolved configuration for simulated playback.
#[derive(Debug)]
pub struct Config {
    pub transcript: TranscriptConfig,
    pub fps: f64,
    pub from: f64,
    pub to: f64,
    pub realtime: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        ensure!(
            args.fps.is_finite() && args.fps > 0.0,
            "fps must be positive, got {}",
            args.fps
        );

        let transcript = TranscriptConfig::try_from(args.transcript)?;
        let to = args.to.unwrap_or_else(|| transcript.transcript.duration());

        ensure!(to.is_finite(), "stop position must be finite, got {to}");
        ensure!(
            0.0 <= args.from && args.from <= to,
            "playback range {}..{} is empty or negative",
            args.from,
            to
        );
        // A step lost to rounding at `to` would never reach the end.
        ensure!(
            to + 1.0 / args.fps > to,
            "fps {} is too high to advance playback at {to}s",
            args.fps
        );

        Ok(Self {
            transcript,
            fps: args.fps,
            from: args.from,
            to,
            realtime: args.realtime,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let mut out = std::io::stdout().lock();
    let frames = play(config, &mut out)?;
    tracing::info!(frames, "playback finished");
    Ok(())
}

/// Run simulated playback, writing a line whenever the active words change.
///
/// Returns the number of frames ticked.
pub fn play(config: Config, out: &mut impl Write) -> Result<usize> {
    let Config {
        transcript,
        fps,
        from,
        to,
        realtime,
    } = config;

    let mut session = Session::new(ManualClock::new(Some(to)), transcript.sync_config);
    session.clock_mut().drag_to(from);

    let tick = session.load(transcript.transcript);
    writeln!(out, "{}", render::tick_line(&tick))?;
    let mut last: Vec<WordInterval> = tick.active;

    tracing::info!(
        from = %render::format_secs(from),
        to = %render::format_secs(to),
        fps,
        mode = ?transcript.sync_config.mode,
        "playback started"
    );

    let event = session.clock_mut().play();
    session.handle(event);
    let subscription = session
        .subscription()
        .ok_or_eyre("playback started without a tick subscription")?;

    let step = 1.0 / fps;
    let mut frames = 0;

    while !session.clock().at_end() {
        session.clock_mut().advance(step);

        if let Some(tick) = session.frame(subscription) {
            frames += 1;
            if tick.active != last {
                writeln!(out, "{}", render::tick_line(&tick))?;
                last = tick.active;
            }
        }

        if realtime {
            std::thread::sleep(Duration::from_secs_f64(step));
        }
    }

    let event = session.clock_mut().pause();
    session.handle(event);
    tracing::debug!(position = session.clock().position(), "playback paused");

    Ok(frames)
}
