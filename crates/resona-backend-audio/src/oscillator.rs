//! Sampled sine tones.
//!
//! All tone-based effects sample `sin(2π f t)` at `t = i / sample_rate` for
//! `i` in `0..sample_count(duration, sample_rate)`: a half-open interval with
//! no sample at `t = duration`.

use std::f64::consts::TAU;

/// Number of samples covering `duration` seconds (floor of `duration * rate`).
#[inline]
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration).max(0.0) as usize
}

/// Time of sample `i` in seconds.
#[inline]
pub fn sample_time(i: usize, sample_rate: u32) -> f64 {
    i as f64 / sample_rate as f64
}

/// A unit-amplitude sine tone.
pub fn sine_tone(frequency: f64, duration: f64, sample_rate: u32) -> Vec<f64> {
    let n = sample_count(duration, sample_rate);
    (0..n)
        .map(|i| (TAU * frequency * sample_time(i, sample_rate)).sin())
        .collect()
}

/// Adds `gain * sin(2π f t)` onto an existing buffer.
pub fn add_partial(samples: &mut [f64], frequency: f64, gain: f64, sample_rate: u32) {
    for (i, sample) in samples.iter_mut().enumerate() {
        *sample += gain * (TAU * frequency * sample_time(i, sample_rate)).sin();
    }
}
