//! Error types for tone construction and playback

use thiserror::Error;

/// Errors raised while building tone data or driving the audio device.
#[derive(Debug, Error)]
pub enum ToneError {
    /// No output device is present, or it rejected the requested stream
    /// configuration. Fatal for the playback call; retrying is caller policy.
    #[error("audio output device unavailable: {0}")]
    DeviceUnavailable(String),

    /// A segment was constructed with parameters outside the valid range.
    /// Rejected at construction time, never mid-playback.
    #[error("invalid segment parameters: {reason}")]
    InvalidSegment { reason: &'static str },

    /// A pattern must contain at least one segment.
    #[error("pattern contains no segments")]
    EmptyPattern,

    /// Playback was cancelled through a [`StopHandle`](crate::playback::StopHandle).
    /// An early exit, not a failure; the device is still released.
    #[error("playback interrupted")]
    Interrupted,

    /// The output stream failed after the device was opened.
    #[error("audio stream error: {0}")]
    Stream(String),

    /// The requested tone name does not exist in the catalog.
    #[error("unknown tone name: {0}")]
    UnknownTone(String),
}
