//! Binaural beats.
//!
//! Left ear hears the carrier, right ear hears carrier + beat. The channels
//! are finished independently and never mixed, so the beat exists only as
//! the difference between ears.

use resona_spec::BinauralSettings;
use tracing::info;

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;
use crate::oscillator::sine_tone;
use crate::safety::{check_frequency_range, finish, FadeSpec, NyquistPolicy};

/// Per-channel peak target.
pub const BINAURAL_TARGET_DB: f64 = -6.0;

/// Generates a stereo binaural beat.
pub fn generate(
    settings: &BinauralSettings,
    duration: f64,
    sample_rate: u32,
    policy: NyquistPolicy,
) -> AudioResult<SampleBuffer> {
    let left_freq = settings.carrier;
    let right_freq = settings.right_frequency();
    info!(
        carrier = left_freq,
        beat = settings.beat,
        preset = settings.preset.unwrap_or("custom"),
        duration,
        "generating binaural beat"
    );
    check_frequency_range(left_freq.min(right_freq), left_freq.max(right_freq), sample_rate, policy)?;

    let mut left = sine_tone(left_freq, duration, sample_rate);
    let mut right = sine_tone(right_freq, duration, sample_rate);
    finish(&mut left, sample_rate, BINAURAL_TARGET_DB, FadeSpec::default());
    finish(&mut right, sample_rate, BINAURAL_TARGET_DB, FadeSpec::default());

    Ok(SampleBuffer::Stereo { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;
    use resona_spec::Setting;

    #[test]
    fn test_channels_are_independent_tones() {
        let settings = BinauralSettings::resolve("alpha_relaxation", Setting::Unspecified, Setting::Unspecified);
        let buffer = generate(&settings, 0.5, 44_100, NyquistPolicy::Warn).unwrap();
        let SampleBuffer::Stereo { left, right } = buffer else {
            panic!("binaural output must be stereo");
        };
        assert_eq!(left.len(), 22_050);
        assert_eq!(right.len(), 22_050);
        assert_ne!(left, right);
        assert_eq!(left[0], 0.0);
        assert_eq!(right[22_049], 0.0);
    }

    #[test]
    fn test_zero_beat_gives_identical_channels() {
        let settings = BinauralSettings::resolve("beta_focus", Setting::Unspecified, Setting::Value(0.0));
        let SampleBuffer::Stereo { left, right } =
            generate(&settings, 0.2, 44_100, NyquistPolicy::Warn).unwrap()
        else {
            panic!("binaural output must be stereo");
        };
        assert_eq!(left, right);
    }
}
