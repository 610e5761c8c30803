//! Isochronic tones: a carrier gated on and off at the pulse rate.
//!
//! The hard gate is smoothed with a ~5 ms Hann kernel before it touches the
//! carrier, so no gate edge reaches the output as a step.

use resona_spec::IsochronicSettings;
use tracing::info;

use crate::error::AudioResult;
use crate::oscillator::{sample_time, sine_tone};
use crate::safety::{check_frequency_range, finish, FadeSpec, NyquistPolicy};
use crate::synthesis::smoothing::smooth_gate;

/// Peak target of the finished effect.
pub const ISOCHRONIC_TARGET_DB: f64 = -3.0;

/// Half-length of the Hann smoothing kernel in seconds.
pub const GATE_SMOOTHING_SECONDS: f64 = 0.005;

/// Hard on/off gate: 1 while `(t * pulse) mod 1 < duty_cycle`.
pub fn pulse_gate(num_samples: usize, pulse: f64, duty_cycle: f64, sample_rate: u32) -> Vec<f64> {
    (0..num_samples)
        .map(|i| {
            let phase = (sample_time(i, sample_rate) * pulse).rem_euclid(1.0);
            if phase < duty_cycle {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Gate after Hann smoothing; kernel length is `2 * floor(rate * 0.005)`.
pub fn smoothed_envelope(
    num_samples: usize,
    pulse: f64,
    duty_cycle: f64,
    sample_rate: u32,
) -> Vec<f64> {
    let gate = pulse_gate(num_samples, pulse, duty_cycle, sample_rate);
    let half = (sample_rate as f64 * GATE_SMOOTHING_SECONDS) as usize;
    if half == 0 {
        return gate;
    }
    smooth_gate(&gate, half * 2)
}

/// Generates a mono isochronic tone.
pub fn generate(
    settings: &IsochronicSettings,
    duration: f64,
    sample_rate: u32,
    policy: NyquistPolicy,
) -> AudioResult<Vec<f64>> {
    info!(
        carrier = settings.carrier,
        pulse = settings.pulse,
        duty = settings.duty_cycle,
        preset = settings.preset.unwrap_or("custom"),
        duration,
        "generating isochronic tone"
    );
    check_frequency_range(0.0, settings.carrier, sample_rate, policy)?;

    let mut samples = sine_tone(settings.carrier, duration, sample_rate);
    let envelope = smoothed_envelope(samples.len(), settings.pulse, settings.duty_cycle, sample_rate);
    for (s, e) in samples.iter_mut().zip(envelope) {
        *s *= e;
    }

    finish(&mut samples, sample_rate, ISOCHRONIC_TARGET_DB, FadeSpec::default());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resona_spec::Setting;

    fn settings(duty: f64) -> IsochronicSettings {
        IsochronicSettings::resolve("alpha_flow", Setting::Unspecified, Setting::Unspecified, Setting::Value(duty))
    }

    #[test]
    fn test_gate_duty_fraction() {
        let gate = pulse_gate(44_100, 10.0, 0.3, 44_100);
        let on = gate.iter().filter(|&&g| g == 1.0).count() as f64 / gate.len() as f64;
        assert!((on - 0.3).abs() < 0.01, "on fraction {on}");
    }

    #[test]
    fn test_envelope_has_no_hard_edges() {
        let env = smoothed_envelope(44_100, 10.0, 0.5, 44_100);
        let max_step = env.windows(2).map(|w| (w[1] - w[0]).abs()).fold(0.0, f64::max);
        // A hard gate would step by 1.0.
        assert!(max_step < 0.01, "max step {max_step}");
    }

    #[test]
    fn test_zero_duty_is_silent_and_finite() {
        let samples = generate(&settings(0.0), 1.0, 44_100, NyquistPolicy::Warn).unwrap();
        assert_eq!(samples.len(), 44_100);
        assert!(samples.iter().all(|s| s.is_finite()));
        let energy: f64 = samples.iter().map(|s| s * s).sum();
        assert!(energy < 1e-12);
    }

    #[test]
    fn test_full_duty_is_continuous_tone() {
        let samples = generate(&settings(1.0), 0.5, 44_100, NyquistPolicy::Warn).unwrap();
        // Past the fade-in and the smoothing edge the envelope is fully open.
        let mid = &samples[10_000..12_000];
        let peak = mid.iter().map(|s| s.abs()).fold(0.0, f64::max);
        assert!(peak > 0.6);
    }
}
