//! Sine and silence segment synthesis
//!
//! A segment is the atomic unit of a call-progress tone: a single-frequency
//! sine burst or a silence, rendered to a mono f32 sample buffer.

use std::f64::consts::TAU;

use crate::error::ToneError;

/// One audio event: a pure tone or a silence of fixed duration.
///
/// Immutable value data. Samples are computed on demand by
/// [`gen_samples`](Segment::gen_samples), never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    frequency: f32,
    duration: f32,
    volume: f32,
}

impl Segment {
    /// Create a tone segment, validating parameters up front.
    ///
    /// Frequency must be non-negative and finite, duration positive and
    /// finite, volume in [0.0, 1.0].
    pub fn tone(frequency: f32, duration: f32, volume: f32) -> Result<Self, ToneError> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(ToneError::InvalidSegment {
                reason: "frequency must be finite and non-negative",
            });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ToneError::InvalidSegment {
                reason: "duration must be finite and positive",
            });
        }
        if !volume.is_finite() || !(0.0..=1.0).contains(&volume) {
            return Err(ToneError::InvalidSegment {
                reason: "volume must be within 0.0..=1.0",
            });
        }
        Ok(Self::raw(frequency, duration, volume))
    }

    /// Create a silence segment of the given duration.
    ///
    /// A silence is a tone with frequency 0 and volume 0. It still renders an
    /// explicit zero-valued buffer so the duration elapses in real time on
    /// the device.
    pub fn silence(duration: f32) -> Result<Self, ToneError> {
        Self::tone(0.0, duration, 0.0)
    }

    /// Unchecked constructor for the built-in catalog, whose literal values
    /// are known valid.
    pub(crate) const fn raw(frequency: f32, duration: f32, volume: f32) -> Self {
        Self {
            frequency,
            duration,
            volume,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_silence(&self) -> bool {
        self.volume == 0.0
    }

    /// Number of samples this segment renders to at the given rate.
    pub fn len_samples(&self, sample_rate: u32) -> usize {
        (f64::from(sample_rate) * f64::from(self.duration)).round() as usize
    }

    /// Render the segment to a mono sample buffer.
    ///
    /// `sample[i] = volume * sin(2π * frequency * i / sample_rate)`, computed
    /// in f64 and narrowed to f32. Pure function of the segment parameters
    /// and the sample rate: identical inputs yield bit-identical output.
    pub fn gen_samples(&self, sample_rate: u32) -> Vec<f32> {
        let n = self.len_samples(sample_rate);
        if self.is_silence() {
            return vec![0.0; n];
        }

        let step = TAU * f64::from(self.frequency) / f64::from(sample_rate);
        let volume = f64::from(self.volume);
        (0..n)
            .map(|i| (volume * (step * i as f64).sin()) as f32)
            .collect()
    }
}
