//! Output safety pass: peak limiting, Nyquist checks, and click-free fades.
//!
//! Every generator finishes with [`normalize`] followed by [`apply_fade`],
//! once, on its final buffer (per channel for stereo output).

use resona_spec::Setting;
use tracing::{debug, warn};

use crate::error::{AudioError, AudioResult};

/// Relative slack when comparing a peak against its target.
///
/// Scaling by `target / peak` can land one ulp above the target; without
/// slack a second pass would rescale and break idempotence.
const PEAK_TOLERANCE: f64 = 1e-9;

/// Converts decibels to linear amplitude.
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Largest absolute sample value; 0 for an empty buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Attenuates `samples` so the peak does not exceed `target_db`.
///
/// Never amplifies. A silent buffer is left untouched. Applying the same
/// target twice is a no-op the second time.
pub fn normalize(samples: &mut [f64], target_db: f64) {
    let current_peak = peak(samples);
    if current_peak == 0.0 {
        return;
    }

    let target_amp = db_to_linear(target_db);
    if current_peak > target_amp * (1.0 + PEAK_TOLERANCE) {
        debug!(from = current_peak, to = target_amp, "reducing peak");
        let gain = target_amp / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Soft Nyquist check: true iff `max_freq` is below half the sample rate.
///
/// Logs a warning on failure and never errors.
pub fn validate_frequency_range(min_freq: f64, max_freq: f64, sample_rate: u32) -> bool {
    let nyquist = sample_rate as f64 / 2.0;
    if max_freq >= nyquist {
        warn!(
            min_freq,
            max_freq,
            nyquist,
            "frequency exceeds Nyquist limit; output will alias"
        );
        return false;
    }
    true
}

/// How a failed Nyquist check is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NyquistPolicy {
    /// Log and continue.
    #[default]
    Warn,
    /// Fail the generation.
    Strict,
}

impl From<bool> for NyquistPolicy {
    fn from(strict: bool) -> Self {
        if strict {
            NyquistPolicy::Strict
        } else {
            NyquistPolicy::Warn
        }
    }
}

/// Nyquist check under a policy.
///
/// Returns the soft result under [`NyquistPolicy::Warn`]; under
/// [`NyquistPolicy::Strict`] a violation becomes [`AudioError::UnsafeFrequency`].
pub fn check_frequency_range(
    min_freq: f64,
    max_freq: f64,
    sample_rate: u32,
    policy: NyquistPolicy,
) -> AudioResult<bool> {
    let ok = validate_frequency_range(min_freq, max_freq, sample_rate);
    if !ok && policy == NyquistPolicy::Strict {
        return Err(AudioError::UnsafeFrequency {
            max_freq,
            nyquist: sample_rate as f64 / 2.0,
        });
    }
    Ok(ok)
}

/// Fade lengths for [`apply_fade`].
///
/// Explicit millisecond values take precedence over `fade_sec`, independently
/// for fade-in and fade-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSpec {
    /// Fallback length in seconds for both ends.
    pub fade_sec: f64,
    /// Fade-in override in milliseconds.
    pub fade_in_ms: Setting<f64>,
    /// Fade-out override in milliseconds.
    pub fade_out_ms: Setting<f64>,
}

impl Default for FadeSpec {
    fn default() -> Self {
        Self::seconds(0.1)
    }
}

impl FadeSpec {
    /// Same length at both ends, in seconds.
    pub fn seconds(fade_sec: f64) -> Self {
        Self {
            fade_sec,
            fade_in_ms: Setting::Unspecified,
            fade_out_ms: Setting::Unspecified,
        }
    }

    /// Same length at both ends, in milliseconds.
    pub fn millis(ms: f64) -> Self {
        Self {
            fade_in_ms: Setting::Value(ms),
            fade_out_ms: Setting::Value(ms),
            ..Self::default()
        }
    }

    fn sample_counts(&self, sample_rate: u32) -> (usize, usize) {
        let rate = sample_rate as f64;
        let to_samples = |ms: Setting<f64>| -> usize {
            let seconds = ms.map_or(self.fade_sec, |ms| ms / 1000.0);
            (rate * seconds).max(0.0) as usize
        };
        (to_samples(self.fade_in_ms), to_samples(self.fade_out_ms))
    }
}

/// Linear ramp value `i` of an `n`-point `linspace(0, 1, n)`.
#[inline]
fn ramp(i: usize, n: usize) -> f64 {
    if n > 1 {
        i as f64 / (n - 1) as f64
    } else {
        0.0
    }
}

/// Applies linear fade-in and fade-out in place.
///
/// Each fade is clamped to half the buffer so the two can never overlap.
/// The buffer length never changes.
pub fn apply_fade(samples: &mut [f64], sample_rate: u32, fade: FadeSpec) {
    let (fade_in, fade_out) = fade.sample_counts(sample_rate);
    let max_fade = samples.len() / 2;
    let fade_in = fade_in.min(max_fade);
    let fade_out = fade_out.min(max_fade);

    for (i, sample) in samples.iter_mut().take(fade_in).enumerate() {
        *sample *= ramp(i, fade_in);
    }

    let start = samples.len() - fade_out;
    for (i, sample) in samples[start..].iter_mut().enumerate() {
        *sample *= 1.0 - ramp(i, fade_out);
    }
}

/// Runs the full safety pass on one channel.
pub fn finish(samples: &mut [f64], sample_rate: u32, target_db: f64, fade: FadeSpec) {
    normalize(samples, target_db);
    apply_fade(samples, sample_rate, fade);
}
