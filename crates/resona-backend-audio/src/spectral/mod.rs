//! Spectrogram art: text drawn into the 2–10 kHz band.
//!
//! - `font` - Text renderers and the fallback chain
//! - `raster` - Text to intensity raster
//! - `additive` - Raster to audio

pub mod additive;
pub mod font;
mod glyphs;
pub mod raster;

use tracing::info;

pub use additive::{AdditiveSynthesizer, ACTIVITY_THRESHOLD, MAX_FREQUENCY, MIN_FREQUENCY};
pub use font::{BitmapFont, FontChain, TextRenderer};
pub use raster::{RasterLayout, SpectrogramEncoder, SpectrogramRaster, RASTER_HEIGHT};

use crate::error::AudioResult;
use crate::oscillator::sample_count;
use crate::safety::{check_frequency_range, finish, FadeSpec, NyquistPolicy};

/// Peak target of the finished effect.
pub const SPECTRAL_TARGET_DB: f64 = -3.0;

/// Finished spectral effect plus the raster it came from.
#[derive(Debug, Clone)]
pub struct SpectralOutput {
    /// Normalized, faded mono samples.
    pub samples: Vec<f64>,
    /// The encoded raster.
    pub raster: SpectrogramRaster,
}

/// Encodes `text` as spectrogram art lasting `duration` seconds.
pub fn generate(
    text: &str,
    duration: f64,
    sample_rate: u32,
    policy: NyquistPolicy,
) -> AudioResult<SpectralOutput> {
    generate_with(
        &SpectrogramEncoder::default(),
        &AdditiveSynthesizer::default(),
        text,
        duration,
        sample_rate,
        policy,
    )
}

/// [`generate`] with a caller-supplied encoder and synthesizer.
pub fn generate_with(
    encoder: &SpectrogramEncoder,
    synth: &AdditiveSynthesizer,
    text: &str,
    duration: f64,
    sample_rate: u32,
    policy: NyquistPolicy,
) -> AudioResult<SpectralOutput> {
    info!(text, duration, sample_rate, "encoding spectrogram text");
    check_frequency_range(synth.min_freq, synth.max_freq, sample_rate, policy)?;

    let raster = encoder.encode(text, duration)?;
    let mut samples = synth.synthesize(&raster, sample_count(duration, sample_rate), sample_rate);
    finish(&mut samples, sample_rate, SPECTRAL_TARGET_DB, FadeSpec::default());

    Ok(SpectralOutput { samples, raster })
}
