//! AM (Amplitude Modulation) synthesis.
//!
//! The output is `carrier * (1 + depth * message)` with both oscillators
//! sampled directly at `t = i / sample_rate`, which places sidebands at
//! `carrier ± message`.

use std::f64::consts::TAU;

use rand_pcg::Pcg32;

use super::Synthesizer;

/// AM synthesis parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmSynth {
    /// Carrier frequency in Hz.
    pub carrier_freq: f64,
    /// Message (modulator) frequency in Hz.
    pub message_freq: f64,
    /// Modulation index, 0.0 to 1.0.
    pub modulation_index: f64,
}

impl AmSynth {
    /// Creates a new AM synthesizer. The index is clamped to [0, 1].
    pub fn new(carrier_freq: f64, message_freq: f64, modulation_index: f64) -> Self {
        Self {
            carrier_freq,
            message_freq,
            modulation_index: modulation_index.clamp(0.0, 1.0),
        }
    }

    /// Upper sideband frequency.
    pub fn upper_sideband(&self) -> f64 {
        self.carrier_freq + self.message_freq
    }

    /// Samples the modulated carrier. Uses no randomness.
    pub fn render(&self, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let carrier = (TAU * self.carrier_freq * t).sin();
                let message = (TAU * self.message_freq * t).sin();
                carrier * (1.0 + self.modulation_index * message)
            })
            .collect()
    }
}

impl Synthesizer for AmSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        self.render(num_samples, sample_rate)
    }
}
