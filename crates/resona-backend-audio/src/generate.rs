//! Main entry point for effect generation.
//!
//! Takes a validated request, runs the matching generator, and encodes the
//! result as WAV in memory. Nothing here touches the filesystem.

use resona_spec::{
    validate_for_generate, BinauralSettings, EffectKind, EffectParams, EffectRequest,
    IsochronicSettings, DEFAULT_BINAURAL_PRESET, DEFAULT_ISOCHRONIC_PRESET,
    DEFAULT_SOLFEGGIO_KEY,
};
use tracing::{debug, warn};

use crate::buffer::SampleBuffer;
use crate::effects::{binaural, isochronic, noise, solfeggio};
use crate::error::{AudioError, AudioResult};
use crate::rng::create_stream_rng;
use crate::safety::NyquistPolicy;
use crate::spectral;
use crate::subliminal::SubliminalModulator;
use crate::synthesis::noise::NoiseColor;
use crate::wav::WavResult;

/// Result of one generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Which effect ran.
    pub effect: EffectKind,
    /// Finished samples.
    pub buffer: SampleBuffer,
    /// Encoded WAV.
    pub wav: WavResult,
    /// Human-readable summary of the resolved parameters.
    pub description: String,
}

impl GenerateResult {
    /// Sample rate of the encoded output.
    pub fn sample_rate(&self) -> u32 {
        self.wav.sample_rate
    }
}

/// Generates audio for a request.
///
/// Configuration is checked before any synthesis; a request that fails
/// validation never allocates a sample.
pub fn generate(request: &EffectRequest) -> AudioResult<GenerateResult> {
    let effect = validate_for_generate(request)?;
    let sample_rate = request.sample_rate();
    let duration = request.duration_seconds;
    let policy = NyquistPolicy::from(request.strict_nyquist);
    debug!(%effect, seed = request.seed, sample_rate, ?policy, "dispatching request");

    let (buffer, description) = match &request.params {
        EffectParams::Binaural(p) => {
            let preset = p.preset.as_deref().unwrap_or(DEFAULT_BINAURAL_PRESET);
            let settings = BinauralSettings::resolve(preset, p.carrier, p.beat);
            if settings.preset.is_none() {
                warn!(preset, "unknown binaural preset, using defaults");
            }
            let buffer = binaural::generate(&settings, duration, sample_rate, policy)?;
            let description = format!(
                "binaural {}: {} Hz left, {} Hz right ({} Hz beat)",
                settings.preset.unwrap_or("custom"),
                settings.carrier,
                settings.right_frequency(),
                settings.beat
            );
            (buffer, description)
        }
        EffectParams::Isochronic(p) => {
            let preset = p.preset.as_deref().unwrap_or(DEFAULT_ISOCHRONIC_PRESET);
            let settings = IsochronicSettings::resolve(preset, p.carrier, p.pulse, p.duty_cycle);
            if settings.preset.is_none() {
                warn!(preset, "unknown isochronic preset, using defaults");
            }
            let samples = isochronic::generate(&settings, duration, sample_rate, policy)?;
            let description = format!(
                "isochronic {}: {} Hz carrier pulsed at {} Hz, duty {}",
                settings.preset.unwrap_or("custom"),
                settings.carrier,
                settings.pulse,
                settings.duty_cycle
            );
            (SampleBuffer::Mono(samples), description)
        }
        EffectParams::Solfeggio(p) if p.cascade => {
            let samples = solfeggio::generate_cascade(duration, sample_rate, policy)?;
            (SampleBuffer::Mono(samples), "solfeggio cascade: 396-852 Hz chord".to_string())
        }
        EffectParams::Solfeggio(p) => {
            let key = p.frequency.as_deref().unwrap_or(DEFAULT_SOLFEGGIO_KEY);
            let tone = solfeggio::resolve_tone(key);
            let harmonics = p.harmonics.resolve(true);
            let samples = solfeggio::generate_tone(
                &tone,
                harmonics,
                duration,
                sample_rate,
                policy,
            )?;
            let description = format!(
                "solfeggio {} Hz ({}){}",
                tone.frequency,
                tone.name,
                if harmonics { " with harmonics" } else { "" }
            );
            (SampleBuffer::Mono(samples), description)
        }
        EffectParams::WhiteNoise | EffectParams::PinkNoise | EffectParams::BrownNoise => {
            let color = noise_color(effect)?;
            let mut rng = create_stream_rng(request.seed, effect.as_str());
            let samples = noise::generate(color, duration, sample_rate, &mut rng);
            (SampleBuffer::Mono(samples), effect.as_str().replace('_', " "))
        }
        EffectParams::Spectral(_) => {
            let text = required_text(request)?;
            let output = spectral::generate(text, duration, sample_rate, policy)?;
            let description = format!(
                "spectral text \"{}\" on a {}x{} raster",
                text,
                output.raster.width(),
                output.raster.height()
            );
            (SampleBuffer::Mono(output.samples), description)
        }
        EffectParams::Silent(_) => {
            let text = required_text(request)?;
            let modulator = SubliminalModulator::default();
            let synth = modulator.synth_for(text)?;
            let samples = modulator.generate(text, duration, sample_rate, policy)?;
            let description = format!(
                "silent message on {} Hz carrier, {} Hz message tone",
                synth.carrier_freq, synth.message_freq
            );
            (SampleBuffer::Mono(samples), description)
        }
    };

    let wav = WavResult::from_buffer(&buffer, sample_rate)?;
    Ok(GenerateResult {
        effect,
        buffer,
        wav,
        description,
    })
}

fn noise_color(effect: EffectKind) -> AudioResult<NoiseColor> {
    match effect {
        EffectKind::WhiteNoise => Ok(NoiseColor::White),
        EffectKind::PinkNoise => Ok(NoiseColor::Pink),
        EffectKind::BrownNoise => Ok(NoiseColor::Brown),
        other => Err(AudioError::synthesis(format!("{other} is not a noise effect"))),
    }
}

fn required_text(request: &EffectRequest) -> AudioResult<&str> {
    request
        .params
        .text()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AudioError::invalid_param("text", "text is required"))
}
