//! Named parameter bundles for the tonal entrainment effects.
//!
//! Unknown preset names are not errors. Resolution falls back to the
//! built-in defaults and reports which preset (if any) was matched so the
//! caller can log the fallback.

use crate::setting::Setting;

/// A binaural preset: carrier and beat frequency in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinauralPreset {
    /// Preset name as used on the command line.
    pub name: &'static str,
    /// Left-ear carrier frequency.
    pub carrier: f64,
    /// Difference between right and left ear.
    pub beat: f64,
    /// Short human-readable purpose.
    pub description: &'static str,
}

/// Binaural presets, slowest beat first.
pub const BINAURAL_PRESETS: [BinauralPreset; 5] = [
    BinauralPreset {
        name: "delta_sleep",
        carrier: 200.0,
        beat: 2.0,
        description: "Deep Sleep & Healing",
    },
    BinauralPreset {
        name: "theta_meditation",
        carrier: 200.0,
        beat: 6.0,
        description: "Deep Meditation",
    },
    BinauralPreset {
        name: "alpha_relaxation",
        carrier: 200.0,
        beat: 10.0,
        description: "Calm & Relaxed",
    },
    BinauralPreset {
        name: "beta_focus",
        carrier: 200.0,
        beat: 18.0,
        description: "Focused Attention",
    },
    BinauralPreset {
        name: "gamma_insight",
        carrier: 200.0,
        beat: 40.0,
        description: "Peak Performance",
    },
];

/// Preset used when the caller names none.
pub const DEFAULT_BINAURAL_PRESET: &str = "alpha_relaxation";

const FALLBACK_BINAURAL_CARRIER: f64 = 200.0;
const FALLBACK_BINAURAL_BEAT: f64 = 10.0;

/// An isochronic preset: carrier, pulse rate, and on-fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsochronicPreset {
    /// Preset name as used on the command line.
    pub name: &'static str,
    /// Tone frequency in Hz.
    pub carrier: f64,
    /// Pulses per second.
    pub pulse: f64,
    /// Fraction of each pulse period that is on.
    pub duty_cycle: f64,
}

/// Isochronic presets, slowest pulse first.
pub const ISOCHRONIC_PRESETS: [IsochronicPreset; 4] = [
    IsochronicPreset {
        name: "theta_deep",
        carrier: 300.0,
        pulse: 6.0,
        duty_cycle: 0.5,
    },
    IsochronicPreset {
        name: "alpha_flow",
        carrier: 400.0,
        pulse: 10.0,
        duty_cycle: 0.5,
    },
    IsochronicPreset {
        name: "beta_active",
        carrier: 500.0,
        pulse: 20.0,
        duty_cycle: 0.4,
    },
    IsochronicPreset {
        name: "gamma_peak",
        carrier: 600.0,
        pulse: 40.0,
        duty_cycle: 0.3,
    },
];

/// Preset used when the caller names none.
pub const DEFAULT_ISOCHRONIC_PRESET: &str = "alpha_flow";

const FALLBACK_ISOCHRONIC: IsochronicPreset = IsochronicPreset {
    name: "default",
    carrier: 400.0,
    pulse: 10.0,
    duty_cycle: 0.5,
};

/// Looks up a binaural preset by name.
pub fn binaural_preset(name: &str) -> Option<&'static BinauralPreset> {
    BINAURAL_PRESETS.iter().find(|p| p.name == name)
}

/// Looks up an isochronic preset by name.
pub fn isochronic_preset(name: &str) -> Option<&'static IsochronicPreset> {
    ISOCHRONIC_PRESETS.iter().find(|p| p.name == name)
}

/// Binaural frequencies after presets and overrides are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinauralSettings {
    /// Left channel frequency.
    pub carrier: f64,
    /// Right minus left.
    pub beat: f64,
    /// The matched preset, `None` when the name fell back.
    pub preset: Option<&'static str>,
}

impl BinauralSettings {
    /// Resolves a preset name plus field overrides.
    pub fn resolve(preset: &str, carrier: Setting<f64>, beat: Setting<f64>) -> Self {
        match binaural_preset(preset) {
            Some(p) => Self {
                carrier: carrier.resolve(p.carrier),
                beat: beat.resolve(p.beat),
                preset: Some(p.name),
            },
            None => Self {
                carrier: carrier.resolve(FALLBACK_BINAURAL_CARRIER),
                beat: beat.resolve(FALLBACK_BINAURAL_BEAT),
                preset: None,
            },
        }
    }

    /// Right channel frequency.
    pub fn right_frequency(&self) -> f64 {
        self.carrier + self.beat
    }
}

/// Isochronic parameters after presets and overrides are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsochronicSettings {
    /// Tone frequency.
    pub carrier: f64,
    /// Gate rate.
    pub pulse: f64,
    /// Gate on-fraction.
    pub duty_cycle: f64,
    /// The matched preset, `None` when the name fell back.
    pub preset: Option<&'static str>,
}

impl IsochronicSettings {
    /// Resolves a preset name plus field overrides.
    pub fn resolve(
        preset: &str,
        carrier: Setting<f64>,
        pulse: Setting<f64>,
        duty_cycle: Setting<f64>,
    ) -> Self {
        let (base, matched) = match isochronic_preset(preset) {
            Some(p) => (*p, Some(p.name)),
            None => (FALLBACK_ISOCHRONIC, None),
        };
        Self {
            carrier: carrier.resolve(base.carrier),
            pulse: pulse.resolve(base.pulse),
            duty_cycle: duty_cycle.resolve(base.duty_cycle),
            preset: matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_binaural_preset_values() {
        let s = BinauralSettings::resolve("theta_meditation", Setting::Unspecified, Setting::Unspecified);
        assert_eq!(s.carrier, 200.0);
        assert_eq!(s.beat, 6.0);
        assert_eq!(s.preset, Some("theta_meditation"));
    }

    #[test]
    fn test_binaural_unknown_preset_falls_back() {
        let s = BinauralSettings::resolve("nope", Setting::Unspecified, Setting::Unspecified);
        assert_eq!(
            s,
            BinauralSettings {
                carrier: 200.0,
                beat: 10.0,
                preset: None
            }
        );
    }

    #[test]
    fn test_binaural_overrides_are_field_by_field() {
        let s = BinauralSettings::resolve("gamma_insight", Setting::Value(300.0), Setting::Unspecified);
        assert_eq!(s.carrier, 300.0);
        assert_eq!(s.beat, 40.0);
        assert_eq!(s.right_frequency(), 340.0);
    }

    #[test]
    fn test_zero_beat_override_is_kept() {
        let s = BinauralSettings::resolve("beta_focus", Setting::Unspecified, Setting::Value(0.0));
        assert_eq!(s.beat, 0.0);
    }

    #[test]
    fn test_isochronic_presets() {
        let s = IsochronicSettings::resolve(
            "gamma_peak",
            Setting::Unspecified,
            Setting::Unspecified,
            Setting::Unspecified,
        );
        assert_eq!((s.carrier, s.pulse, s.duty_cycle), (600.0, 40.0, 0.3));

        let fallback = IsochronicSettings::resolve(
            "unknown",
            Setting::Unspecified,
            Setting::Unspecified,
            Setting::Value(0.0),
        );
        assert_eq!(fallback.carrier, 400.0);
        assert_eq!(fallback.pulse, 10.0);
        assert_eq!(fallback.duty_cycle, 0.0);
        assert_eq!(fallback.preset, None);
    }

    #[test]
    fn test_default_presets_exist() {
        assert!(binaural_preset(DEFAULT_BINAURAL_PRESET).is_some());
        assert!(isochronic_preset(DEFAULT_ISOCHRONIC_PRESET).is_some());
    }
}
