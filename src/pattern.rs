//! Pattern structure and rendering
//!
//! A pattern is one playback phase of a call-progress tone: an ordered,
//! non-empty sequence of segments rendered back to back.

use crate::error::ToneError;
use crate::segment::Segment;

/// Ordered sequence of segments forming one playback phase.
///
/// Segment order is playback order. The rendered output is the exact
/// concatenation of the segment buffers with no gap, overlap, or cross-fade:
/// the standard specifies exact timing, so boundary discontinuities are left
/// as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Build a pattern from segments. Fails on an empty sequence.
    pub fn new(segments: Vec<Segment>) -> Result<Self, ToneError> {
        if segments.is_empty() {
            return Err(ToneError::EmptyPattern);
        }
        Ok(Self { segments })
    }

    /// Infallible constructor for the built-in catalog.
    pub(crate) fn raw(segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total duration in seconds, the sum of the segment durations.
    pub fn duration(&self) -> f32 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Number of samples the pattern renders to at the given rate.
    pub fn len_samples(&self, sample_rate: u32) -> usize {
        self.segments
            .iter()
            .map(|s| s.len_samples(sample_rate))
            .sum()
    }

    /// Render the whole phase to one contiguous sample buffer.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len_samples(sample_rate));
        for segment in &self.segments {
            out.extend_from_slice(&segment.gen_samples(sample_rate));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_RATE;

    fn tone(freq: f32, dur: f32, vol: f32) -> Segment {
        Segment::tone(freq, dur, vol).unwrap()
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(Pattern::new(vec![]), Err(ToneError::EmptyPattern)));
    }

    #[test]
    fn test_duration_is_sum_of_segments() {
        let pattern = Pattern::new(vec![
            tone(425.0, 0.48, 1.0),
            Segment::silence(0.48).unwrap(),
        ])
        .unwrap();
        assert!((pattern.duration() - 0.96).abs() < 1e-6);
        assert_eq!(pattern.len_samples(SAMPLE_RATE), 2 * 21168);
    }

    #[test]
    fn test_render_concatenates_in_order() {
        let s1 = tone(425.0, 0.1, 1.0);
        let s2 = Segment::silence(0.2).unwrap();
        let pattern = Pattern::new(vec![s1, s2]).unwrap();

        let rendered = pattern.render(SAMPLE_RATE);
        let expected: Vec<f32> = s1
            .gen_samples(SAMPLE_RATE)
            .into_iter()
            .chain(s2.gen_samples(SAMPLE_RATE))
            .collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_is_associative() {
        let s1 = tone(425.0, 0.2, 1.0);
        let s2 = Segment::silence(0.2).unwrap();
        let s3 = tone(425.0, 0.2, 1.0);

        let split: Vec<f32> = Pattern::new(vec![s1, s2])
            .unwrap()
            .render(SAMPLE_RATE)
            .into_iter()
            .chain(Pattern::new(vec![s3]).unwrap().render(SAMPLE_RATE))
            .collect();
        let whole = Pattern::new(vec![s1, s2, s3]).unwrap().render(SAMPLE_RATE);
        assert_eq!(split, whole);
    }

    #[test]
    fn test_render_is_deterministic() {
        let pattern = Pattern::new(vec![tone(950.0, 0.33, 0.3), tone(1400.0, 0.33, 0.3)]).unwrap();
        assert_eq!(pattern.render(SAMPLE_RATE), pattern.render(SAMPLE_RATE));
    }
}
