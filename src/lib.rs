//! # Hoerton - call-progress tone synthesis and playback
//!
//! Synthesizes the call-progress tones of the German analog network
//! ("Hörtöne", 1TR110-1 chapter 8) and plays them on the default audio
//! output device.
//!
//! A tone is one or two [`Pattern`](pattern::Pattern)s of
//! [`Segment`](segment::Segment)s (sine bursts and silences). Segments render
//! to mono f32 buffers; the [`playback`] driver writes them to an
//! [`AudioSink`](player::AudioSink) in phase order, intro once and the
//! repeating phase until the repeat budget is spent or a
//! [`StopHandle`](playback::StopHandle) is tripped.
//!
//! ## Quick start
//!
//! ```no_run
//! use hoerton::playback::{self, PlaybackConfig, StopHandle};
//! use hoerton::player::Player;
//! use hoerton::tones::CallProgressTone;
//! use hoerton::SAMPLE_RATE;
//!
//! # fn main() -> Result<(), hoerton::ToneError> {
//! let mut player = Player::new(SAMPLE_RATE)?;
//! playback::play(
//!     CallProgressTone::Ringback,
//!     &mut player,
//!     &PlaybackConfig::default(),
//!     &StopHandle::new(),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! Rendering without a device goes through the same seam: anything
//! implementing [`AudioSink`](player::AudioSink) can receive the samples.

pub mod error;
pub mod pattern;
pub mod playback;
pub mod player;
pub mod segment;
pub mod tones;

pub use error::ToneError;

/// Process-wide default sample rate in Hz. All catalog tones are defined
/// against this rate; synthesis functions take the rate as a parameter so
/// tests can use others.
pub const SAMPLE_RATE: u32 = 44_100;
