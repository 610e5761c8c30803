//! Raw signal synthesis.
//!
//! These produce un-normalized sample buffers; the effect generators in
//! [`crate::effects`] wrap them with the safety pass.
//!
//! - `noise` - White, Voss-McCartney pink, and drift-corrected brown noise
//! - `partials` - Weighted sums of sine partials (harmonic stacks, drones)
//! - `am` - Amplitude modulation of a carrier by a message tone
//! - `smoothing` - Centered FIR kernels (Hann gate smoothing, moving average)

pub mod am;
pub mod noise;
pub mod partials;
pub mod smoothing;

use rand_pcg::Pcg32;

/// Common trait for raw synthesizers.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Deterministic RNG for any randomness
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;
}
