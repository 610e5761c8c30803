//! Solfeggio drones: a single tone with optional overtones, or the six-tone
//! cascade chord.

use resona_spec::{resolve_frequency, SolfeggioTone, ToneSource, CASCADE_FREQUENCIES};
use tracing::{info, warn};

use crate::error::AudioResult;
use crate::oscillator::sample_count;
use crate::safety::{check_frequency_range, finish, FadeSpec, NyquistPolicy};
use crate::synthesis::partials::PartialStack;

/// Peak target of a single tone.
pub const SOLFEGGIO_TARGET_DB: f64 = -6.0;

/// Peak target of the cascade chord.
pub const CASCADE_TARGET_DB: f64 = -3.0;

/// Fade length of a single tone, in milliseconds.
pub const SOLFEGGIO_FADE_MS: f64 = 1000.0;

/// Fade length of the cascade, in milliseconds.
pub const CASCADE_FADE_MS: f64 = 2000.0;

/// Gain of each cascade component.
pub const CASCADE_GAIN: f64 = 0.15;

/// Overtone multiples and gains layered over the fundamental.
pub const HARMONICS: [(f64, f64); 3] = [(2.0, 0.25), (3.0, 0.125), (5.0, 0.0625)];

/// Partial layout for one tone.
pub fn tone_stack(frequency: f64, harmonics: bool) -> PartialStack {
    let mut stack = PartialStack::new().with(frequency, 1.0);
    if harmonics {
        for (multiple, gain) in HARMONICS {
            stack = stack.with(frequency * multiple, gain);
        }
    }
    stack
}

/// Partial layout for the cascade chord.
pub fn cascade_stack() -> PartialStack {
    CASCADE_FREQUENCIES
        .iter()
        .fold(PartialStack::new(), |stack, &f| stack.with(f, CASCADE_GAIN))
}

/// Resolves `key`, logging when it was not a table entry.
pub fn resolve_tone(key: &str) -> SolfeggioTone {
    let tone = resolve_frequency(key);
    match tone.source {
        ToneSource::Named => {}
        ToneSource::Custom => info!(key, frequency = tone.frequency, "using custom solfeggio frequency"),
        ToneSource::Default => warn!(key, frequency = tone.frequency, "unrecognized solfeggio key, using default"),
    }
    tone
}

/// Generates a single solfeggio tone.
pub fn generate_tone(
    tone: &SolfeggioTone,
    harmonics: bool,
    duration: f64,
    sample_rate: u32,
    policy: NyquistPolicy,
) -> AudioResult<Vec<f64>> {
    info!(frequency = tone.frequency, name = %tone.name, harmonics, duration, "generating solfeggio tone");
    let stack = tone_stack(tone.frequency, harmonics);
    render(&stack, duration, sample_rate, policy, SOLFEGGIO_TARGET_DB, SOLFEGGIO_FADE_MS)
}

/// Generates the cascade chord.
pub fn generate_cascade(
    duration: f64,
    sample_rate: u32,
    policy: NyquistPolicy,
) -> AudioResult<Vec<f64>> {
    info!(tones = CASCADE_FREQUENCIES.len(), duration, "generating solfeggio cascade");
    render(&cascade_stack(), duration, sample_rate, policy, CASCADE_TARGET_DB, CASCADE_FADE_MS)
}

fn render(
    stack: &PartialStack,
    duration: f64,
    sample_rate: u32,
    policy: NyquistPolicy,
    target_db: f64,
    fade_ms: f64,
) -> AudioResult<Vec<f64>> {
    check_frequency_range(0.0, stack.max_frequency(), sample_rate, policy)?;
    let mut samples = stack.render(sample_count(duration, sample_rate), sample_rate);
    finish(&mut samples, sample_rate, target_db, FadeSpec::millis(fade_ms));
    Ok(samples)
}
