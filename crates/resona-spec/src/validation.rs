//! Request validation.
//!
//! Runs before any synthesis work. Everything rejected here is a
//! configuration problem; unknown presets and keys pass (they fall back).

use crate::effect::EffectKind;
use crate::error::{SpecError, SpecResult};
use crate::request::{EffectParams, EffectRequest};
use crate::setting::Setting;

/// Time-axis resolution of the spectrogram raster.
pub const SPECTRAL_PIXELS_PER_SECOND: f64 = 50.0;

/// Largest PCM payload a WAV header can describe (`36 + len` must fit a `u32`).
pub const MAX_PCM_DATA_BYTES: u64 = u32::MAX as u64 - 36;

/// Bytes per 16-bit sample.
const BYTES_PER_SAMPLE: u64 = 2;

/// Validates a request for generation.
///
/// # Errors
/// Returns the first configuration problem found.
pub fn validate_request(request: &EffectRequest) -> SpecResult<()> {
    let duration = request.duration_seconds;
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SpecError::InvalidDuration { duration });
    }

    let rate = request.sample_rate();
    if rate == 0 {
        return Err(SpecError::InvalidSampleRate { rate });
    }

    let kind = request.kind();
    let block_align = BYTES_PER_SAMPLE * if kind.is_stereo() { 2 } else { 1 };
    if rate as u64 * block_align > u32::MAX as u64 {
        return Err(SpecError::InvalidSampleRate { rate });
    }
    check_output_size(duration, rate, block_align)?;

    if kind.requires_text() {
        match request.params.text() {
            Some(text) if !text.is_empty() => {}
            _ => return Err(SpecError::missing(kind.as_str(), "text")),
        }
    }

    match &request.params {
        EffectParams::Spectral(_) => {
            if (duration * SPECTRAL_PIXELS_PER_SECOND) < 1.0 {
                return Err(SpecError::invalid_param(
                    "duration_seconds",
                    format!(
                        "spectral needs at least {} seconds for one raster column, got {}",
                        1.0 / SPECTRAL_PIXELS_PER_SECOND,
                        duration
                    ),
                ));
            }
        }
        EffectParams::Binaural(p) => {
            check_frequency("carrier", p.carrier)?;
            check_non_negative("beat", p.beat)?;
        }
        EffectParams::Isochronic(p) => {
            check_frequency("carrier", p.carrier)?;
            check_non_negative("pulse", p.pulse)?;
            if let Setting::Value(duty) = p.duty_cycle {
                if !(0.0..=1.0).contains(&duty) {
                    return Err(SpecError::invalid_param(
                        "duty_cycle",
                        format!("must be within [0, 1], got {}", duty),
                    ));
                }
            }
        }
        EffectParams::Silent(p) => {
            let text = p.text.as_deref().unwrap_or_default();
            if text.chars().all(|c| c == '\0') {
                return Err(SpecError::invalid_param(
                    "text",
                    "message text must contain at least one non-NUL character",
                ));
            }
        }
        EffectParams::PinkNoise
        | EffectParams::BrownNoise
        | EffectParams::WhiteNoise
        | EffectParams::Solfeggio(_) => {}
    }

    Ok(())
}

/// Validates a request and returns its effect kind.
pub fn validate_for_generate(request: &EffectRequest) -> SpecResult<EffectKind> {
    validate_request(request)?;
    Ok(request.kind())
}

/// Rejects requests whose PCM would not fit in one WAV data chunk, before
/// any sample buffer is allocated.
fn check_output_size(duration: f64, sample_rate: u32, block_align: u64) -> SpecResult<()> {
    let max_frames = MAX_PCM_DATA_BYTES / block_align;
    let frames = (sample_rate as f64 * duration).floor();
    if frames > max_frames as f64 {
        return Err(SpecError::DurationTooLong {
            duration,
            sample_rate,
            max_seconds: max_frames as f64 / sample_rate as f64,
        });
    }
    Ok(())
}

fn check_frequency(name: &str, value: Setting<f64>) -> SpecResult<()> {
    if let Setting::Value(freq) = value {
        if !freq.is_finite() || freq <= 0.0 {
            return Err(SpecError::invalid_param(
                name,
                format!("must be a positive frequency, got {}", freq),
            ));
        }
    }
    Ok(())
}

fn check_non_negative(name: &str, value: Setting<f64>) -> SpecResult<()> {
    if let Setting::Value(freq) = value {
        if !freq.is_finite() || freq < 0.0 {
            return Err(SpecError::invalid_param(
                name,
                format!("must be a non-negative frequency, got {}", freq),
            ));
        }
    }
    Ok(())
}
