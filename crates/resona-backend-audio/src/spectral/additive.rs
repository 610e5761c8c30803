//! Additive resynthesis of a spectrogram raster.
//!
//! Each raster column owns a slice of `total_samples / width` samples. Rows
//! brighter than the activity threshold contribute a sine at their band
//! frequency, weighted by intensity. Every slice starts its sines at phase
//! zero, so phase is not continuous across column boundaries.

use std::f64::consts::TAU;

use super::raster::SpectrogramRaster;

/// Frequency of the lowest band in Hz.
pub const MIN_FREQUENCY: f64 = 2_000.0;

/// Frequency of the highest band in Hz.
pub const MAX_FREQUENCY: f64 = 10_000.0;

/// Intensities at or below this contribute nothing.
pub const ACTIVITY_THRESHOLD: f64 = 0.1;

/// `count` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Band-per-row additive synthesizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdditiveSynthesizer {
    /// Lowest band frequency.
    pub min_freq: f64,
    /// Highest band frequency.
    pub max_freq: f64,
    /// Activity threshold.
    pub threshold: f64,
}

impl Default for AdditiveSynthesizer {
    fn default() -> Self {
        Self {
            min_freq: MIN_FREQUENCY,
            max_freq: MAX_FREQUENCY,
            threshold: ACTIVITY_THRESHOLD,
        }
    }
}

impl AdditiveSynthesizer {
    /// Band frequencies for a raster of `height` rows, row 0 lowest.
    pub fn band_frequencies(&self, height: u32) -> Vec<f64> {
        linspace(self.min_freq, self.max_freq, height as usize)
    }

    /// Renders `total_samples` samples from `raster`.
    ///
    /// Samples past the last whole slice stay silent.
    pub fn synthesize(
        &self,
        raster: &SpectrogramRaster,
        total_samples: usize,
        sample_rate: u32,
    ) -> Vec<f64> {
        let mut output = vec![0.0; total_samples];
        let width = raster.width() as usize;
        if width == 0 {
            return output;
        }
        let slice_len = total_samples / width;
        if slice_len == 0 {
            return output;
        }

        // Slices restart at phase zero, so one table per band covers them all.
        let rate = sample_rate as f64;
        let tables: Vec<Vec<f64>> = self
            .band_frequencies(raster.height())
            .into_iter()
            .map(|freq| {
                (0..slice_len)
                    .map(|k| (TAU * freq * k as f64 / rate).sin())
                    .collect()
            })
            .collect();

        for column in 0..raster.width() {
            let start = column as usize * slice_len;
            let end = start + slice_len;
            if end > total_samples {
                break;
            }
            let slice = &mut output[start..end];
            for (row, intensity) in raster.column(column).enumerate() {
                if intensity <= self.threshold {
                    continue;
                }
                for (out, wave) in slice.iter_mut().zip(&tables[row]) {
                    *out += intensity * wave;
                }
            }
        }
        output
    }
}
