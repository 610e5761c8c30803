//! Generation requests.
//!
//! A request is the complete, immutable configuration of one generation call:
//! a common header (duration, sample rate, seed, Nyquist policy) plus the
//! effect-specific parameters. Requests can be built in code, loaded from
//! JSON, and layered (command-line flags over a loaded document).

use serde::{Deserialize, Serialize};

use crate::effect::{EffectKind, DEFAULT_DURATION_SECONDS};
use crate::error::{SpecError, SpecResult};
use crate::setting::Setting;

/// Parameters for the spectrogram-art effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectralParams {
    /// Text drawn into the spectrogram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Parameters for the near-ultrasonic AM effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SilentParams {
    /// Text the message tone is derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Parameters for binaural beats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinauralParams {
    /// Preset name; `None` selects the default preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Carrier override in Hz.
    #[serde(default, skip_serializing_if = "Setting::is_unspecified")]
    pub carrier: Setting<f64>,
    /// Beat override in Hz.
    #[serde(default, skip_serializing_if = "Setting::is_unspecified")]
    pub beat: Setting<f64>,
}

/// Parameters for isochronic tones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsochronicParams {
    /// Preset name; `None` selects the default preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Carrier override in Hz.
    #[serde(default, skip_serializing_if = "Setting::is_unspecified")]
    pub carrier: Setting<f64>,
    /// Pulse rate override in Hz.
    #[serde(default, skip_serializing_if = "Setting::is_unspecified")]
    pub pulse: Setting<f64>,
    /// On-fraction override, 0 to 1.
    #[serde(default, skip_serializing_if = "Setting::is_unspecified")]
    pub duty_cycle: Setting<f64>,
}

/// Parameters for solfeggio drones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolfeggioParams {
    /// Table key or literal frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// Harmonic stack on/off; on when unspecified.
    #[serde(default, skip_serializing_if = "Setting::is_unspecified")]
    pub harmonics: Setting<bool>,
    /// Layer the six cascade frequencies instead of a single tone.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cascade: bool,
}

/// Effect-specific parameters, tagged by effect name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum EffectParams {
    /// Text drawn as spectrogram art.
    Spectral(SpectralParams),
    /// Text-derived message on a 17.5 kHz carrier.
    Silent(SilentParams),
    /// Stereo beat from two detuned carriers.
    Binaural(BinauralParams),
    /// Mono carrier gated at the pulse rate.
    Isochronic(IsochronicParams),
    /// Voss-McCartney pink noise.
    PinkNoise,
    /// Drift-corrected brown noise.
    BrownNoise,
    /// Uniform white noise.
    WhiteNoise,
    /// Solfeggio tone or cascade chord.
    Solfeggio(SolfeggioParams),
}

impl EffectParams {
    /// Default parameters for an effect kind.
    pub fn defaults_for(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Spectral => EffectParams::Spectral(SpectralParams::default()),
            EffectKind::Silent => EffectParams::Silent(SilentParams::default()),
            EffectKind::Binaural => EffectParams::Binaural(BinauralParams::default()),
            EffectKind::Isochronic => EffectParams::Isochronic(IsochronicParams::default()),
            EffectKind::PinkNoise => EffectParams::PinkNoise,
            EffectKind::BrownNoise => EffectParams::BrownNoise,
            EffectKind::WhiteNoise => EffectParams::WhiteNoise,
            EffectKind::Solfeggio => EffectParams::Solfeggio(SolfeggioParams::default()),
        }
    }

    /// The effect these parameters belong to.
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectParams::Spectral(_) => EffectKind::Spectral,
            EffectParams::Silent(_) => EffectKind::Silent,
            EffectParams::Binaural(_) => EffectKind::Binaural,
            EffectParams::Isochronic(_) => EffectKind::Isochronic,
            EffectParams::PinkNoise => EffectKind::PinkNoise,
            EffectParams::BrownNoise => EffectKind::BrownNoise,
            EffectParams::WhiteNoise => EffectKind::WhiteNoise,
            EffectParams::Solfeggio(_) => EffectKind::Solfeggio,
        }
    }

    /// The text message, for text-driven effects.
    pub fn text(&self) -> Option<&str> {
        match self {
            EffectParams::Spectral(p) => p.text.as_deref(),
            EffectParams::Silent(p) => p.text.as_deref(),
            _ => None,
        }
    }

    /// Layers `self` over `base`, field by field.
    ///
    /// Fields set in `self` win; unset fields keep the value from `base`.
    /// Both sides must describe the same effect.
    pub fn layered_over(self, base: EffectParams) -> SpecResult<EffectParams> {
        use EffectParams as P;

        let layered = match (self, base) {
            (P::Spectral(top), P::Spectral(bottom)) => P::Spectral(SpectralParams {
                text: top.text.or(bottom.text),
            }),
            (P::Silent(top), P::Silent(bottom)) => P::Silent(SilentParams {
                text: top.text.or(bottom.text),
            }),
            (P::Binaural(top), P::Binaural(bottom)) => P::Binaural(BinauralParams {
                preset: top.preset.or(bottom.preset),
                carrier: top.carrier.or(bottom.carrier),
                beat: top.beat.or(bottom.beat),
            }),
            (P::Isochronic(top), P::Isochronic(bottom)) => P::Isochronic(IsochronicParams {
                preset: top.preset.or(bottom.preset),
                carrier: top.carrier.or(bottom.carrier),
                pulse: top.pulse.or(bottom.pulse),
                duty_cycle: top.duty_cycle.or(bottom.duty_cycle),
            }),
            (P::Solfeggio(top), P::Solfeggio(bottom)) => P::Solfeggio(SolfeggioParams {
                frequency: top.frequency.or(bottom.frequency),
                harmonics: top.harmonics.or(bottom.harmonics),
                cascade: top.cascade || bottom.cascade,
            }),
            (top @ (P::PinkNoise | P::BrownNoise | P::WhiteNoise), bottom)
                if top.kind() == bottom.kind() =>
            {
                top
            }
            (top, bottom) => {
                return Err(SpecError::invalid_param(
                    "effect",
                    format!(
                        "request document describes '{}' but '{}' was selected",
                        bottom.kind(),
                        top.kind()
                    ),
                ))
            }
        };
        Ok(layered)
    }
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECONDS
}

/// One complete generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectRequest {
    /// Length of the output in seconds.
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    /// Sample rate override; the effect default applies when unspecified.
    #[serde(default, skip_serializing_if = "Setting::is_unspecified")]
    pub sample_rate: Setting<u32>,
    /// Seed for every random draw of the call.
    #[serde(default)]
    pub seed: u32,
    /// Treat frequencies at or above Nyquist as a hard error.
    #[serde(default)]
    pub strict_nyquist: bool,
    /// Effect-specific parameters.
    #[serde(flatten)]
    pub params: EffectParams,
}

impl EffectRequest {
    /// Creates a request with default header values.
    pub fn new(params: EffectParams) -> Self {
        Self {
            duration_seconds: DEFAULT_DURATION_SECONDS,
            sample_rate: Setting::Unspecified,
            seed: 0,
            strict_nyquist: false,
            params,
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Sets an explicit sample rate.
    pub fn with_sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = Setting::Value(rate);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Enables strict Nyquist checking.
    pub fn strict(mut self) -> Self {
        self.strict_nyquist = true;
        self
    }

    /// The effect this request generates.
    pub fn kind(&self) -> EffectKind {
        self.params.kind()
    }

    /// The sample rate after the per-effect default is applied.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate.resolve(self.kind().default_sample_rate())
    }

    /// Parses a request from JSON.
    ///
    /// # Errors
    /// [`SpecError::UnknownEffect`] when the `effect` tag names no known
    /// effect; [`SpecError::Json`] for any other malformed document.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(name) = value.get("effect").and_then(serde_json::Value::as_str) {
            name.parse::<EffectKind>()?;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serializes the request as pretty JSON.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Applies header overrides and layers `params` over this request.
    pub fn overlay(mut self, overrides: RequestOverrides, params: EffectParams) -> SpecResult<Self> {
        self.duration_seconds = overrides.duration_seconds.resolve(self.duration_seconds);
        self.sample_rate = overrides.sample_rate.or(self.sample_rate);
        self.seed = overrides.seed.resolve(self.seed);
        self.strict_nyquist |= overrides.strict_nyquist;
        self.params = params.layered_over(self.params)?;
        Ok(self)
    }
}

/// Header fields that may override a loaded request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestOverrides {
    /// Duration override.
    pub duration_seconds: Setting<f64>,
    /// Sample rate override.
    pub sample_rate: Setting<u32>,
    /// Seed override.
    pub seed: Setting<u32>,
    /// Strict mode can only be switched on by an override.
    pub strict_nyquist: bool,
}
