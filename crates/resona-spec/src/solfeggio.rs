//! Solfeggio frequency table and key lookup.

/// One entry of the solfeggio table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolfeggioEntry {
    /// Lookup key (the frequency as written).
    pub key: &'static str,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Traditional name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// Known solfeggio frequencies, ascending.
pub const SOLFEGGIO_FREQUENCIES: [SolfeggioEntry; 10] = [
    SolfeggioEntry {
        key: "174",
        frequency: 174.0,
        name: "Foundation",
        description: "Pain Relief & Security",
    },
    SolfeggioEntry {
        key: "285",
        frequency: 285.0,
        name: "Healing",
        description: "Tissue Healing & Energy",
    },
    SolfeggioEntry {
        key: "396",
        frequency: 396.0,
        name: "Liberation",
        description: "Release Guilt & Fear",
    },
    SolfeggioEntry {
        key: "417",
        frequency: 417.0,
        name: "Change",
        description: "Facilitate Change",
    },
    SolfeggioEntry {
        key: "432",
        frequency: 432.0,
        name: "Cosmic",
        description: "Universal Healing",
    },
    SolfeggioEntry {
        key: "528",
        frequency: 528.0,
        name: "Love",
        description: "DNA Repair & Miracles",
    },
    SolfeggioEntry {
        key: "639",
        frequency: 639.0,
        name: "Connection",
        description: "Harmonizing Relationships",
    },
    SolfeggioEntry {
        key: "741",
        frequency: 741.0,
        name: "Intuition",
        description: "Awakening Intuition",
    },
    SolfeggioEntry {
        key: "852",
        frequency: 852.0,
        name: "Spirit",
        description: "Spiritual Order",
    },
    SolfeggioEntry {
        key: "963",
        frequency: 963.0,
        name: "Divine",
        description: "Pineal Activation",
    },
];

/// Key used when none is given.
pub const DEFAULT_SOLFEGGIO_KEY: &str = "528";

/// Frequency used when a key is neither known nor numeric.
pub const DEFAULT_SOLFEGGIO_FREQUENCY: f64 = 528.0;

/// Frequencies layered by the cascade drone.
pub const CASCADE_FREQUENCIES: [f64; 6] = [396.0, 417.0, 528.0, 639.0, 741.0, 852.0];

/// How a key was turned into a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneSource {
    /// Matched an entry of the table.
    Named,
    /// Parsed as a literal frequency.
    Custom,
    /// Neither; the default was used.
    Default,
}

/// A resolved solfeggio tone.
#[derive(Debug, Clone, PartialEq)]
pub struct SolfeggioTone {
    /// Fundamental frequency in Hz.
    pub frequency: f64,
    /// Display name.
    pub name: String,
    /// Which lookup level produced it.
    pub source: ToneSource,
}

/// Resolves a frequency key. Never fails.
///
/// Lookup order: table key, then the key parsed as a positive finite number,
/// then [`DEFAULT_SOLFEGGIO_FREQUENCY`].
pub fn resolve_frequency(key: &str) -> SolfeggioTone {
    if let Some(entry) = SOLFEGGIO_FREQUENCIES.iter().find(|e| e.key == key) {
        return SolfeggioTone {
            frequency: entry.frequency,
            name: entry.name.to_string(),
            source: ToneSource::Named,
        };
    }

    match key.trim().parse::<f64>() {
        Ok(freq) if freq.is_finite() && freq > 0.0 => SolfeggioTone {
            frequency: freq,
            name: format!("Custom {}Hz", freq),
            source: ToneSource::Custom,
        },
        _ => SolfeggioTone {
            frequency: DEFAULT_SOLFEGGIO_FREQUENCY,
            name: "Love (default)".to_string(),
            source: ToneSource::Default,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_key() {
        let tone = resolve_frequency("741");
        assert_eq!(tone.frequency, 741.0);
        assert_eq!(tone.name, "Intuition");
        assert_eq!(tone.source, ToneSource::Named);
    }

    #[test]
    fn test_numeric_key() {
        let tone = resolve_frequency("9999");
        assert_eq!(tone.frequency, 9999.0);
        assert_eq!(tone.name, "Custom 9999Hz");
        assert_eq!(tone.source, ToneSource::Custom);
    }

    #[test]
    fn test_fractional_key() {
        assert_eq!(resolve_frequency("110.5").frequency, 110.5);
    }

    #[test]
    fn test_garbage_key_falls_back() {
        let tone = resolve_frequency("not_a_number");
        assert_eq!(tone.frequency, 528.0);
        assert_eq!(tone.source, ToneSource::Default);
    }

    #[test]
    fn test_non_positive_or_non_finite_keys_fall_back() {
        for key in ["0", "-20", "nan", "inf", ""] {
            assert_eq!(resolve_frequency(key).source, ToneSource::Default, "key {key:?}");
        }
    }
}
