//! Effect identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Default sample rate for audible effects.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default sample rate for the near-ultrasonic `silent` effect.
pub const ULTRASONIC_SAMPLE_RATE: u32 = 96_000;

/// Default generation length in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 60.0;

/// The effect classes the synthesizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Text rendered as spectrogram art.
    Spectral,
    /// Text-derived tone amplitude-modulated onto a 17.5 kHz carrier.
    Silent,
    /// Stereo beat between two slightly detuned tones.
    Binaural,
    /// Gated mono tone.
    Isochronic,
    /// Voss-McCartney pink noise.
    PinkNoise,
    /// Integrated random walk with drift removed.
    BrownNoise,
    /// Uniform white noise.
    WhiteNoise,
    /// Named healing-tone drone.
    Solfeggio,
}

impl EffectKind {
    /// All effect kinds, in command-line order.
    pub const ALL: [EffectKind; 8] = [
        EffectKind::Spectral,
        EffectKind::Silent,
        EffectKind::Binaural,
        EffectKind::Isochronic,
        EffectKind::PinkNoise,
        EffectKind::BrownNoise,
        EffectKind::WhiteNoise,
        EffectKind::Solfeggio,
    ];

    /// Returns the snake_case name used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Spectral => "spectral",
            EffectKind::Silent => "silent",
            EffectKind::Binaural => "binaural",
            EffectKind::Isochronic => "isochronic",
            EffectKind::PinkNoise => "pink_noise",
            EffectKind::BrownNoise => "brown_noise",
            EffectKind::WhiteNoise => "white_noise",
            EffectKind::Solfeggio => "solfeggio",
        }
    }

    /// Sample rate used when the request does not name one.
    pub fn default_sample_rate(&self) -> u32 {
        match self {
            EffectKind::Silent => ULTRASONIC_SAMPLE_RATE,
            _ => DEFAULT_SAMPLE_RATE,
        }
    }

    /// Whether the effect is driven by a text message.
    pub fn requires_text(&self) -> bool {
        matches!(self, EffectKind::Spectral | EffectKind::Silent)
    }

    /// Whether the effect produces two channels.
    pub fn is_stereo(&self) -> bool {
        matches!(self, EffectKind::Binaural)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SpecError::UnknownEffect {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for kind in EffectKind::ALL {
            assert_eq!(kind.as_str().parse::<EffectKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_effect_is_configuration_error() {
        let err = "reverb".parse::<EffectKind>().unwrap_err();
        assert!(matches!(err, SpecError::UnknownEffect { ref name } if name == "reverb"));
    }

    #[test]
    fn test_silent_defaults_to_ultrasonic_rate() {
        assert_eq!(EffectKind::Silent.default_sample_rate(), 96_000);
        assert_eq!(EffectKind::PinkNoise.default_sample_rate(), 44_100);
    }
}
