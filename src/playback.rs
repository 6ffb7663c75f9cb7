//! Playback driver
//!
//! Runs a tone through its phases: intro pattern once (if the tone has one),
//! then the repeating pattern until the repeat budget is spent or a stop
//! handle is tripped. Single-threaded and blocking; pacing comes from the
//! sink's back-pressure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::ToneError;
use crate::pattern::Pattern;
use crate::player::AudioSink;
use crate::tones::CallProgressTone;
use crate::SAMPLE_RATE;

/// Repeat budget used when the caller does not specify one. Matches the
/// historical behavior of playing the repeating phase 15 times.
pub const DEFAULT_REPEATS: u32 = 15;

/// How often the repeating phase plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    /// Play the repeating phase a fixed number of times, then stop.
    Times(u32),
    /// Repeat until the stop handle is tripped.
    Forever,
}

/// Parameters for one playback call.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackConfig {
    pub sample_rate: u32,
    pub repeats: RepeatCount,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            repeats: RepeatCount::Times(DEFAULT_REPEATS),
        }
    }
}

/// Cancellation token for a running playback.
///
/// Cloneable and cheap; trip it from any thread with [`stop`](Self::stop).
/// The driver checks it before every segment write, so playback halts within
/// one segment of the signal.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Play one call-progress tone to the sink.
///
/// Writes the intro phase once if the tone defines one, then the repeating
/// phase per `config.repeats`. Returns `Ok` after the budget is spent and the
/// sink has drained, or [`ToneError::Interrupted`] if the stop handle trips
/// first. Device errors propagate; in every case the sink is left to its
/// owner for release.
pub fn play(
    tone: CallProgressTone,
    sink: &mut dyn AudioSink,
    config: &PlaybackConfig,
    stop: &StopHandle,
) -> Result<(), ToneError> {
    let patterns = tone.patterns();

    if let Some(intro) = &patterns.intro {
        debug!("tone {tone}: intro phase, {:.2} s", intro.duration());
        write_pattern(sink, intro, config.sample_rate, stop)?;
    }

    match config.repeats {
        RepeatCount::Times(n) => {
            info!(
                "tone {tone}: repeating phase, {:.2} s x {n}",
                patterns.repeating.duration()
            );
            for _ in 0..n {
                write_pattern(sink, &patterns.repeating, config.sample_rate, stop)?;
            }
        }
        RepeatCount::Forever => {
            info!(
                "tone {tone}: repeating phase, {:.2} s until stopped",
                patterns.repeating.duration()
            );
            loop {
                write_pattern(sink, &patterns.repeating, config.sample_rate, stop)?;
            }
        }
    }

    sink.drain()?;
    debug!("tone {tone}: playback complete");
    Ok(())
}

fn write_pattern(
    sink: &mut dyn AudioSink,
    pattern: &Pattern,
    sample_rate: u32,
    stop: &StopHandle,
) -> Result<(), ToneError> {
    for segment in pattern.segments() {
        if stop.is_stopped() {
            return Err(ToneError::Interrupted);
        }
        sink.write(&segment.gen_samples(sample_rate))?;
    }
    Ok(())
}
