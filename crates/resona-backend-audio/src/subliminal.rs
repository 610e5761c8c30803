//! Near-ultrasonic "silent" message encoding.
//!
//! A message tone derived from the text amplitude-modulates a 17.5 kHz
//! carrier, placing sidebands at `17.5 kHz ± message`.

use tracing::info;

use crate::error::{AudioError, AudioResult};
use crate::oscillator::sample_count;
use crate::safety::{check_frequency_range, finish, FadeSpec, NyquistPolicy};
use crate::synthesis::am::AmSynth;

/// Carrier frequency in Hz.
pub const CARRIER_FREQUENCY: f64 = 17_500.0;

/// Depth of the amplitude modulation.
pub const MODULATION_INDEX: f64 = 0.8;

/// Peak target of the finished effect.
pub const SILENT_TARGET_DB: f64 = -1.0;

/// Lowest message frequency in Hz.
pub const MESSAGE_MIN: f64 = 100.0;

/// Highest message frequency in Hz.
pub const MESSAGE_MAX: f64 = 400.0;

/// Derives the message frequency from text.
///
/// Sums the code points, then doubles while below [`MESSAGE_MIN`] and halves
/// while above [`MESSAGE_MAX`]. The octave shifts keep the result text
/// dependent instead of pinning it to a boundary.
///
/// # Errors
/// Empty text (a zero sum can never be doubled into range).
pub fn message_frequency(text: &str) -> AudioResult<f64> {
    let mut freq: f64 = text.chars().map(|c| c as u32 as f64).sum();
    if freq <= 0.0 {
        return Err(AudioError::invalid_param(
            "text",
            "message text must contain at least one non-NUL character",
        ));
    }
    while freq < MESSAGE_MIN {
        freq *= 2.0;
    }
    while freq > MESSAGE_MAX {
        freq /= 2.0;
    }
    Ok(freq)
}

/// Modulator with fixed carrier and index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubliminalModulator {
    /// Carrier frequency in Hz.
    pub carrier: f64,
    /// Modulation index.
    pub modulation_index: f64,
}

impl Default for SubliminalModulator {
    fn default() -> Self {
        Self {
            carrier: CARRIER_FREQUENCY,
            modulation_index: MODULATION_INDEX,
        }
    }
}

impl SubliminalModulator {
    /// The AM synthesizer for a given text.
    pub fn synth_for(&self, text: &str) -> AudioResult<AmSynth> {
        let message = message_frequency(text)?;
        Ok(AmSynth::new(self.carrier, message, self.modulation_index))
    }

    /// Produces the finished effect.
    pub fn generate(
        &self,
        text: &str,
        duration: f64,
        sample_rate: u32,
        policy: NyquistPolicy,
    ) -> AudioResult<Vec<f64>> {
        let synth = self.synth_for(text)?;
        info!(
            carrier = synth.carrier_freq,
            message = synth.message_freq,
            duration,
            sample_rate,
            "generating ultrasonic AM"
        );
        check_frequency_range(0.0, synth.upper_sideband(), sample_rate, policy)?;

        let n = sample_count(duration, sample_rate);
        let mut samples = synth.render(n, sample_rate as f64);
        finish(&mut samples, sample_rate, SILENT_TARGET_DB, FadeSpec::default());
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::{db_to_linear, peak};

    #[test]
    fn test_message_frequency_rescales_by_octaves() {
        // "A" = 65 -> 130
        assert_eq!(message_frequency("A").unwrap(), 130.0);
        // "hello" = 532 -> 266
        assert_eq!(message_frequency("hello").unwrap(), 266.0);
        // Already in range.
        assert_eq!(message_frequency("dd").unwrap(), 200.0);
    }

    #[test]
    fn test_message_frequency_in_range_for_long_text() {
        let text = "I am calm and focused every single day";
        let freq = message_frequency(text).unwrap();
        assert!((MESSAGE_MIN..=MESSAGE_MAX).contains(&freq));
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(message_frequency("").is_err());
    }

    #[test]
    fn test_generate_bounds_and_length() {
        let samples = SubliminalModulator::default()
            .generate("calm", 0.5, 96_000, NyquistPolicy::Strict)
            .unwrap();
        assert_eq!(samples.len(), 48_000);
        assert!(peak(&samples) <= db_to_linear(SILENT_TARGET_DB) + 1e-9);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_strict_mode_rejects_cd_rate() {
        let result = SubliminalModulator::default().generate(
            "calm",
            0.1,
            32_000,
            NyquistPolicy::Strict,
        );
        assert!(matches!(result, Err(AudioError::UnsafeFrequency { .. })));
    }
}
