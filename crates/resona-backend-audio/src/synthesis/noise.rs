//! Noise synthesis module.
//!
//! Generates white, pink, and brown noise from an explicitly passed RNG.
//! Output is raw (not normalized); see [`crate::effects::noise`] for the
//! finished effect.

use rand::Rng;
use rand_pcg::Pcg32;

use super::smoothing::moving_average;
use super::Synthesizer;

/// Number of Voss-McCartney rows.
pub const PINK_ROWS: usize = 16;

/// Length of the brown-noise drift removal window in seconds.
pub const BROWN_DRIFT_WINDOW_SECONDS: f64 = 0.1;

/// Noise color/type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    /// White noise - equal energy at all frequencies.
    White,
    /// Pink noise - 1/f spectrum, equal energy per octave.
    Pink,
    /// Brown/Brownian noise - 1/f^2 spectrum with slow drift removed.
    Brown,
}

/// Noise synthesizer.
#[derive(Debug, Clone, Copy)]
pub struct NoiseSynth {
    /// Type of noise.
    pub color: NoiseColor,
}

impl NoiseSynth {
    /// Creates a noise synthesizer with the given color.
    pub fn new(color: NoiseColor) -> Self {
        Self { color }
    }

    /// Creates white noise synthesizer.
    pub fn white() -> Self {
        Self::new(NoiseColor::White)
    }

    /// Creates pink noise synthesizer.
    pub fn pink() -> Self {
        Self::new(NoiseColor::Pink)
    }

    /// Creates brown noise synthesizer.
    pub fn brown() -> Self {
        Self::new(NoiseColor::Brown)
    }
}

impl Synthesizer for NoiseSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        match self.color {
            NoiseColor::White => white_noise(rng, num_samples),
            NoiseColor::Pink => pink_noise(rng, num_samples),
            NoiseColor::Brown => {
                let window = (sample_rate * BROWN_DRIFT_WINDOW_SECONDS).max(0.0) as usize;
                brown_noise(rng, num_samples, window)
            }
        }
    }
}

/// Uniform white noise in [-1, 1).
pub fn white_noise(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    (0..num_samples).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()
}

/// Voss-McCartney row state. Lives for exactly one [`pink_noise`] call.
struct VossRows {
    rows: [f64; PINK_ROWS],
    running_sum: f64,
}

impl VossRows {
    fn new() -> Self {
        Self {
            rows: [0.0; PINK_ROWS],
            running_sum: 0.0,
        }
    }

    /// Resamples every row whose bit differs between `index` and its predecessor.
    fn advance(&mut self, index: usize, rng: &mut Pcg32) -> f64 {
        let previous = index.saturating_sub(1);
        let changed = index ^ previous;

        for (row, value) in self.rows.iter_mut().enumerate() {
            if changed & (1 << row) != 0 {
                self.running_sum -= *value;
                *value = rng.gen::<f64>() - 0.5;
                self.running_sum += *value;
            }
        }

        self.running_sum / PINK_ROWS as f64
    }
}

/// Pink noise via the Voss-McCartney algorithm with [`PINK_ROWS`] rows.
///
/// Row `r` is redrawn every `2^r` samples, so each sample touches about one
/// row on average. The first sample touches none and is exactly zero.
pub fn pink_noise(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    let mut rows = VossRows::new();
    (0..num_samples).map(|i| rows.advance(i, rng)).collect()
}

/// Brown noise: integrated white noise minus a centered moving average.
///
/// `drift_window` is the moving-average length in samples; 0 disables drift
/// removal and returns the raw random walk.
pub fn brown_noise(rng: &mut Pcg32, num_samples: usize, drift_window: usize) -> Vec<f64> {
    let mut walk = white_noise(rng, num_samples);
    let mut position = 0.0;
    for sample in walk.iter_mut() {
        position += *sample;
        *sample = position;
    }

    if drift_window > 0 {
        let drift = moving_average(&walk, drift_window);
        for (sample, d) in walk.iter_mut().zip(drift) {
            *sample -= d;
        }
    }
    walk
}
