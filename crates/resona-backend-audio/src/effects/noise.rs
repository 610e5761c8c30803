//! Colored noise beds.

use rand_pcg::Pcg32;
use tracing::info;

use crate::oscillator::sample_count;
use crate::safety::{finish, FadeSpec};
use crate::synthesis::noise::{NoiseColor, NoiseSynth};
use crate::synthesis::Synthesizer;

/// Peak target of the finished effect.
pub const NOISE_TARGET_DB: f64 = -6.0;

/// Fade length at both ends, in milliseconds.
pub const NOISE_FADE_MS: f64 = 500.0;

/// Generates finished mono noise of the given color.
///
/// Noise has no tonal content, so there is no Nyquist check.
pub fn generate(color: NoiseColor, duration: f64, sample_rate: u32, rng: &mut Pcg32) -> Vec<f64> {
    info!(?color, duration, sample_rate, "generating noise");
    let n = sample_count(duration, sample_rate);
    let mut samples = NoiseSynth::new(color).synthesize(n, sample_rate as f64, rng);
    finish(&mut samples, sample_rate, NOISE_TARGET_DB, FadeSpec::millis(NOISE_FADE_MS));
    samples
}
