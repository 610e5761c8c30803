//! Frequency-domain checks on generated effects.

use resona_backend_audio::effects::{binaural, isochronic, solfeggio};
use resona_backend_audio::rng::create_rng;
use resona_backend_audio::spectral;
use resona_backend_audio::subliminal::SubliminalModulator;
use resona_backend_audio::synthesis::noise::{brown_noise, pink_noise};
use resona_backend_audio::{NyquistPolicy, SampleBuffer};
use resona_spec::{BinauralSettings, IsochronicSettings, Setting, BINAURAL_PRESETS};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Power spectrum (bins `0..=n/2`) of one block.
fn power_spectrum(samples: &[f64]) -> Vec<f64> {
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(samples.len());
    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    fft.process(&mut buffer);
    buffer[..=samples.len() / 2]
        .iter()
        .map(|c| c.norm_sqr())
        .collect()
}

/// Welch-averaged power spectrum over Hann-windowed, non-overlapping segments.
fn welch(samples: &[f64], segment: usize) -> Vec<f64> {
    let window: Vec<f64> = (0..segment)
        .map(|i| 0.5 - 0.5 * (std::f64::consts::TAU * i as f64 / segment as f64).cos())
        .collect();
    let mut total = vec![0.0; segment / 2 + 1];
    let mut count = 0;
    for chunk in samples.chunks_exact(segment) {
        let windowed: Vec<f64> = chunk.iter().zip(&window).map(|(s, w)| s * w).collect();
        for (t, p) in total.iter_mut().zip(power_spectrum(&windowed)) {
            *t += p;
        }
        count += 1;
    }
    total.iter().map(|t| t / count as f64).collect()
}

/// Frequency of the strongest non-DC bin.
fn dominant_frequency(samples: &[f64], sample_rate: u32) -> f64 {
    let spectrum = power_spectrum(samples);
    let (bin, _) = spectrum
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, 0.0), |best, (i, &p)| if p > best.1 { (i, p) } else { best });
    bin as f64 * sample_rate as f64 / samples.len() as f64
}

fn band_fraction(samples: &[f64], sample_rate: u32, low: f64, high: f64) -> f64 {
    let spectrum = power_spectrum(samples);
    let hz_per_bin = sample_rate as f64 / samples.len() as f64;
    let total: f64 = spectrum.iter().skip(1).sum();
    let band: f64 = spectrum
        .iter()
        .enumerate()
        .filter(|(i, _)| {
            let f = *i as f64 * hz_per_bin;
            f >= low && f <= high
        })
        .map(|(_, p)| p)
        .sum();
    band / total
}

// ============================================================================
// Tones
// ============================================================================

#[test]
fn test_binaural_beat_is_exact_difference() {
    for preset in BINAURAL_PRESETS {
        let settings = BinauralSettings::resolve(preset.name, Setting::Unspecified, Setting::Unspecified);
        let SampleBuffer::Stereo { left, right } =
            binaural::generate(&settings, 1.0, 44_100, NyquistPolicy::Warn).unwrap()
        else {
            panic!("binaural must be stereo");
        };
        let f_left = dominant_frequency(&left, 44_100);
        let f_right = dominant_frequency(&right, 44_100);
        assert_eq!(f_left, preset.carrier, "{}", preset.name);
        assert_eq!(f_right - f_left, preset.beat, "{}", preset.name);
    }
}

#[test]
fn test_binaural_custom_override() {
    let settings = BinauralSettings::resolve("theta_meditation", Setting::Value(300.0), Setting::Unspecified);
    let SampleBuffer::Stereo { left, right } =
        binaural::generate(&settings, 1.0, 44_100, NyquistPolicy::Warn).unwrap()
    else {
        panic!("binaural must be stereo");
    };
    assert_eq!(dominant_frequency(&left, 44_100), 300.0);
    assert_eq!(dominant_frequency(&right, 44_100), 306.0);
}

#[test]
fn test_isochronic_keeps_carrier() {
    let settings = IsochronicSettings::resolve(
        "beta_active",
        Setting::Unspecified,
        Setting::Unspecified,
        Setting::Unspecified,
    );
    let samples = isochronic::generate(&settings, 1.0, 44_100, NyquistPolicy::Warn).unwrap();
    assert_eq!(dominant_frequency(&samples, 44_100), 500.0);
}

#[test]
fn test_solfeggio_named_custom_and_fallback() {
    let cases = [("528", 528.0), ("9999", 9999.0), ("not_a_number", 528.0), ("174", 174.0)];
    for (key, expected) in cases {
        let tone = solfeggio::resolve_tone(key);
        let samples =
            solfeggio::generate_tone(&tone, true, 3.0, 44_100, NyquistPolicy::Warn).unwrap();
        // 3 s at 44.1 kHz gives 1/3 Hz bins; integer tones land on a bin.
        let found = dominant_frequency(&samples, 44_100);
        assert!((found - expected).abs() < 0.5, "{key}: {found}");
    }
}

#[test]
fn test_solfeggio_harmonics_present() {
    let tone = solfeggio::resolve_tone("396");
    let rich = solfeggio::generate_tone(&tone, true, 1.0, 44_100, NyquistPolicy::Warn).unwrap();
    let plain = solfeggio::generate_tone(&tone, false, 1.0, 44_100, NyquistPolicy::Warn).unwrap();
    assert!(band_fraction(&rich, 44_100, 780.0, 2_000.0) > 0.05);
    assert!(band_fraction(&plain, 44_100, 780.0, 2_000.0) < 0.01);
}

#[test]
fn test_cascade_spans_six_tones() {
    let samples = solfeggio::generate_cascade(5.0, 44_100, NyquistPolicy::Warn).unwrap();
    let spectrum = power_spectrum(&samples);
    let hz_per_bin = 44_100.0 / samples.len() as f64;
    let strongest = spectrum.iter().cloned().fold(0.0, f64::max);
    for freq in resona_spec::CASCADE_FREQUENCIES {
        let bin = (freq / hz_per_bin).round() as usize;
        assert!(spectrum[bin] > strongest * 0.5, "{freq} Hz missing");
    }
}

// ============================================================================
// Spectral text and ultrasonic message
// ============================================================================

#[test]
fn test_spectral_energy_stays_in_band() {
    let output = spectral::generate("HELLO", 2.0, 44_100, NyquistPolicy::Warn).unwrap();
    let fraction = band_fraction(&output.samples, 44_100, 1_800.0, 10_200.0);
    assert!(fraction > 0.9, "in-band fraction {fraction}");
}

#[test]
fn test_silent_sits_near_carrier() {
    let samples = SubliminalModulator::default()
        .generate("calm", 1.0, 96_000, NyquistPolicy::Strict)
        .unwrap();
    assert_eq!(dominant_frequency(&samples, 96_000), 17_500.0);
    let audible = band_fraction(&samples, 96_000, 0.0, 15_000.0);
    assert!(audible < 0.01, "audible fraction {audible}");
}

// ============================================================================
// Noise
// ============================================================================

#[test]
fn test_pink_octave_band_power_decreases() {
    const RATE: f64 = 44_100.0;
    const SEGMENT: usize = 4096;
    let hz_per_bin = RATE / SEGMENT as f64;
    // Octaves from 172 Hz up to 11025 Hz.
    let edges: Vec<f64> = (0..7).map(|k| 11_025.0 / f64::powi(2.0, 6 - k)).collect();

    for seed in [1, 2, 3, 42] {
        let mut rng = create_rng(seed);
        let samples = pink_noise(&mut rng, 4 * 44_100);
        let psd = welch(&samples, SEGMENT);

        let band_means: Vec<f64> = edges
            .windows(2)
            .map(|w| {
                let lo = (w[0] / hz_per_bin).ceil() as usize;
                let hi = (w[1] / hz_per_bin).floor() as usize;
                psd[lo..=hi].iter().sum::<f64>() / (hi - lo + 1) as f64
            })
            .collect();

        for pair in band_means.windows(2) {
            assert!(pair[1] < pair[0], "seed {seed}: {band_means:?}");
        }
        assert!(
            band_means[band_means.len() - 1] < band_means[0] / 8.0,
            "seed {seed}: {band_means:?}"
        );
    }
}

#[test]
fn test_brown_has_no_long_term_drift() {
    const RATE: usize = 44_100;
    let window = RATE / 10;
    for seed in [0, 7, 99] {
        let mut rng = create_rng(seed);
        let samples = brown_noise(&mut rng, 10 * RATE, window);
        let rms = (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt();
        assert!(rms > 0.0);

        // Skip the zero-padded edges of the drift filter.
        let interior = &samples[window..samples.len() - window];
        for block in interior.chunks(2 * RATE).filter(|b| b.len() == 2 * RATE) {
            let mean = block.iter().sum::<f64>() / block.len() as f64;
            assert!(mean.abs() < 0.1 * rms, "seed {seed}: mean {mean}, rms {rms}");
        }
    }
}

#[test]
fn test_brown_mean_stays_small_at_drift_window_scale() {
    const RATE: usize = 44_100;
    let drift_window = RATE / 10;
    // Window length in samples, and the bound on the RMS of window means
    // relative to the signal RMS. A window as long as the drift filter
    // still sees some residual wander; longer windows see less.
    let cases = [(drift_window, 0.4), (drift_window * 3 / 2, 0.3)];

    for (length, bound) in cases {
        let mut sum_sq_means = 0.0;
        let mut windows = 0;
        for seed in [1, 2, 3, 42] {
            let mut rng = create_rng(seed);
            let samples = brown_noise(&mut rng, 10 * RATE, drift_window);
            let interior = &samples[2 * drift_window..samples.len() - 2 * drift_window];
            let rms =
                (interior.iter().map(|s| s * s).sum::<f64>() / interior.len() as f64).sqrt();
            assert!(rms > 0.0);

            for block in interior.chunks_exact(length) {
                let mean = block.iter().sum::<f64>() / length as f64;
                // No single window may look like an undrifted random walk.
                assert!(
                    mean.abs() < 1.5 * rms,
                    "seed {seed}, {length} samples: mean {mean}, rms {rms}"
                );
                sum_sq_means += (mean / rms).powi(2);
                windows += 1;
            }
        }
        let relative = (sum_sq_means / windows as f64).sqrt();
        assert!(
            relative < bound,
            "{length}-sample windows: mean/rms {relative} over {windows} windows"
        );
    }
}
