//! Additive synthesis from a fixed set of sine partials.

use rand_pcg::Pcg32;

use super::Synthesizer;
use crate::oscillator::add_partial;

/// One sine component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Linear gain.
    pub gain: f64,
}

impl Partial {
    /// Creates a partial.
    pub fn new(frequency: f64, gain: f64) -> Self {
        Self { frequency, gain }
    }
}

/// Sum of sine partials, all starting at phase zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartialStack {
    /// Components to sum.
    pub partials: Vec<Partial>,
}

impl PartialStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component.
    pub fn with(mut self, frequency: f64, gain: f64) -> Self {
        self.partials.push(Partial::new(frequency, gain));
        self
    }

    /// Highest component frequency, used for Nyquist checks.
    pub fn max_frequency(&self) -> f64 {
        self.partials
            .iter()
            .map(|p| p.frequency)
            .fold(0.0_f64, f64::max)
    }

    /// Sums every partial over `num_samples` samples. Uses no randomness.
    pub fn render(&self, num_samples: usize, sample_rate: u32) -> Vec<f64> {
        let mut output = vec![0.0; num_samples];
        for partial in &self.partials {
            add_partial(&mut output, partial.frequency, partial.gain, sample_rate);
        }
        output
    }
}

impl Synthesizer for PartialStack {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        self.render(num_samples, sample_rate as u32)
    }
}
