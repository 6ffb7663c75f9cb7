//! Call-progress tone catalog
//!
//! Frequency, duration, and volume values follow the "Technische Beschreibung
//! der analogen Wählanschlüsse am T-Net/ISDN der T-Com" (1TR110-1), chapter 8.
//! The values are normative and must not be altered.

use std::fmt;
use std::str::FromStr;

use crate::error::ToneError;
use crate::pattern::Pattern;
use crate::segment::Segment;

/// The named call-progress tones of 1TR110-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallProgressTone {
    /// Wählton, Kap. 8.1: continuous 425 Hz.
    Dial,
    /// Freiton, Kap. 8.3: 1 s on, 4 s off.
    Ringback,
    /// Teilnehmerbesetztton, Kap. 8.4: 0.48 s on, 0.48 s off.
    SubscriberBusy,
    /// Gassenbesetztton, Kap. 8.5: 0.24 s on, 0.24 s off.
    NetworkBusy,
    /// Anklopfton, Kap. 8.7: double beep with a distinct first cadence.
    CampOn,
    /// Aufschaltzeichen, Kap. 8.6: double beep, 1.28 s pause.
    CallWaiting,
    /// Hinweiston, Kap. 8.8: rising 950/1400/1800 Hz triad at reduced level.
    Information,
}

/// The phases of one tone: an optional non-repeating intro and the phase that
/// repeats until playback stops.
#[derive(Debug, Clone, PartialEq)]
pub struct TonePatterns {
    pub intro: Option<Pattern>,
    pub repeating: Pattern,
}

const fn on(freq: f32, dur: f32, vol: f32) -> Segment {
    Segment::raw(freq, dur, vol)
}

const fn off(dur: f32) -> Segment {
    Segment::raw(0.0, dur, 0.0)
}

impl CallProgressTone {
    pub const ALL: [CallProgressTone; 7] = [
        CallProgressTone::Dial,
        CallProgressTone::Ringback,
        CallProgressTone::SubscriberBusy,
        CallProgressTone::NetworkBusy,
        CallProgressTone::CampOn,
        CallProgressTone::CallWaiting,
        CallProgressTone::Information,
    ];

    /// The phase definitions for this tone.
    ///
    /// Single-pattern tones have no distinct intro: the pattern is played as
    /// the repeating phase only, not once extra up front.
    pub fn patterns(&self) -> TonePatterns {
        match self {
            CallProgressTone::Dial => TonePatterns {
                intro: None,
                repeating: Pattern::raw(vec![on(425.0, 1.0, 1.0)]),
            },
            CallProgressTone::Ringback => TonePatterns {
                intro: None,
                repeating: Pattern::raw(vec![on(425.0, 1.0, 1.0), off(4.0)]),
            },
            CallProgressTone::SubscriberBusy => TonePatterns {
                intro: None,
                repeating: Pattern::raw(vec![on(425.0, 0.48, 1.0), off(0.48)]),
            },
            CallProgressTone::NetworkBusy => TonePatterns {
                intro: None,
                repeating: Pattern::raw(vec![on(425.0, 0.24, 1.0), off(0.24)]),
            },
            CallProgressTone::CampOn => TonePatterns {
                intro: Some(Pattern::raw(vec![
                    on(425.0, 0.2, 1.0),
                    off(0.2),
                    on(425.0, 0.2, 1.0),
                    off(1.0),
                ])),
                repeating: Pattern::raw(vec![
                    on(425.0, 0.2, 1.0),
                    off(0.2),
                    on(425.0, 0.2, 1.0),
                    off(5.0),
                ]),
            },
            CallProgressTone::CallWaiting => TonePatterns {
                intro: None,
                repeating: Pattern::raw(vec![
                    on(425.0, 0.24, 1.0),
                    off(0.24),
                    on(425.0, 0.24, 1.0),
                    off(1.28),
                ]),
            },
            CallProgressTone::Information => TonePatterns {
                intro: None,
                repeating: Pattern::raw(vec![
                    on(950.0, 0.33, 0.3),
                    on(1400.0, 0.33, 0.3),
                    on(1800.0, 0.33, 0.3),
                    off(1.0),
                ]),
            },
        }
    }

    /// Stable name used for CLI selection and logging.
    pub fn name(&self) -> &'static str {
        match self {
            CallProgressTone::Dial => "dial",
            CallProgressTone::Ringback => "ringback",
            CallProgressTone::SubscriberBusy => "subscriber-busy",
            CallProgressTone::NetworkBusy => "network-busy",
            CallProgressTone::CampOn => "camp-on",
            CallProgressTone::CallWaiting => "call-waiting",
            CallProgressTone::Information => "information",
        }
    }
}

impl fmt::Display for CallProgressTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CallProgressTone {
    type Err = ToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CallProgressTone::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| ToneError::UnknownTone(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cadence(pattern: &Pattern) -> Vec<(f32, f32, f32)> {
        pattern
            .segments()
            .iter()
            .map(|s| (s.frequency(), s.duration(), s.volume()))
            .collect()
    }

    #[test]
    fn test_dial_tone_definition() {
        let patterns = CallProgressTone::Dial.patterns();
        assert!(patterns.intro.is_none());
        assert_eq!(cadence(&patterns.repeating), vec![(425.0, 1.0, 1.0)]);
    }

    #[test]
    fn test_ringback_definition() {
        let patterns = CallProgressTone::Ringback.patterns();
        assert!(patterns.intro.is_none());
        assert_eq!(
            cadence(&patterns.repeating),
            vec![(425.0, 1.0, 1.0), (0.0, 4.0, 0.0)]
        );
    }

    #[test]
    fn test_busy_tone_definitions() {
        assert_eq!(
            cadence(&CallProgressTone::SubscriberBusy.patterns().repeating),
            vec![(425.0, 0.48, 1.0), (0.0, 0.48, 0.0)]
        );
        assert_eq!(
            cadence(&CallProgressTone::NetworkBusy.patterns().repeating),
            vec![(425.0, 0.24, 1.0), (0.0, 0.24, 0.0)]
        );
    }

    #[test]
    fn test_call_waiting_definition() {
        let patterns = CallProgressTone::CallWaiting.patterns();
        assert!(patterns.intro.is_none());
        assert_eq!(
            cadence(&patterns.repeating),
            vec![
                (425.0, 0.24, 1.0),
                (0.0, 0.24, 0.0),
                (425.0, 0.24, 1.0),
                (0.0, 1.28, 0.0),
            ]
        );
    }

    #[test]
    fn test_camp_on_has_distinct_intro() {
        let patterns = CallProgressTone::CampOn.patterns();
        let intro = patterns.intro.expect("camp-on has an intro phase");
        assert_eq!(
            cadence(&intro),
            vec![
                (425.0, 0.2, 1.0),
                (0.0, 0.2, 0.0),
                (425.0, 0.2, 1.0),
                (0.0, 1.0, 0.0),
            ]
        );
        assert_eq!(
            cadence(&patterns.repeating),
            vec![
                (425.0, 0.2, 1.0),
                (0.0, 0.2, 0.0),
                (425.0, 0.2, 1.0),
                (0.0, 5.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_information_tone_definition() {
        let patterns = CallProgressTone::Information.patterns();
        assert!(patterns.intro.is_none());
        assert_eq!(
            cadence(&patterns.repeating),
            vec![
                (950.0, 0.33, 0.3),
                (1400.0, 0.33, 0.3),
                (1800.0, 0.33, 0.3),
                (0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_only_camp_on_has_intro() {
        for tone in CallProgressTone::ALL {
            let has_intro = tone.patterns().intro.is_some();
            assert_eq!(has_intro, tone == CallProgressTone::CampOn, "{tone}");
        }
    }

    #[test]
    fn test_name_round_trip() {
        for tone in CallProgressTone::ALL {
            assert_eq!(tone.name().parse::<CallProgressTone>().unwrap(), tone);
        }
        assert!(matches!(
            "no-such-tone".parse::<CallProgressTone>(),
            Err(ToneError::UnknownTone(_))
        ));
    }
}
