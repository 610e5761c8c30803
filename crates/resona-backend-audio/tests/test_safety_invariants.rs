//! End-to-end safety and determinism checks across every effect.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use resona_backend_audio::safety::{db_to_linear, finish, peak};
use resona_backend_audio::{apply_fade, generate, normalize, FadeSpec, SampleBuffer};
use resona_spec::{
    BinauralParams, EffectKind, EffectParams, EffectRequest, IsochronicParams, Setting,
    SilentParams, SolfeggioParams, SpectralParams,
};

fn request_for(kind: EffectKind) -> EffectRequest {
    let params = match kind {
        EffectKind::Spectral => EffectParams::Spectral(SpectralParams {
            text: Some("RESONA".to_string()),
        }),
        EffectKind::Silent => EffectParams::Silent(SilentParams {
            text: Some("I am calm".to_string()),
        }),
        other => EffectParams::defaults_for(other),
    };
    EffectRequest::new(params).with_duration(1.5).with_seed(1234)
}

/// Peak target each effect normalizes to.
fn target_db(request: &EffectRequest) -> f64 {
    match &request.params {
        EffectParams::Binaural(_) => -6.0,
        EffectParams::Isochronic(_) => -3.0,
        EffectParams::Solfeggio(p) if p.cascade => -3.0,
        EffectParams::Solfeggio(_) => -6.0,
        EffectParams::PinkNoise | EffectParams::BrownNoise | EffectParams::WhiteNoise => -6.0,
        EffectParams::Spectral(_) => -3.0,
        EffectParams::Silent(_) => -1.0,
    }
}

fn all_requests() -> Vec<EffectRequest> {
    let mut requests: Vec<EffectRequest> = EffectKind::ALL.iter().map(|&k| request_for(k)).collect();
    requests.push(
        EffectRequest::new(EffectParams::Solfeggio(SolfeggioParams {
            cascade: true,
            ..Default::default()
        }))
        .with_duration(1.5),
    );
    requests
}

#[test]
fn test_peak_never_exceeds_target() {
    for request in all_requests() {
        let result = generate(&request).unwrap();
        let limit = db_to_linear(target_db(&request)) + 1e-9;
        for (ch, channel) in result.buffer.channel_slices().into_iter().enumerate() {
            assert!(
                peak(channel) <= limit,
                "{} channel {ch}: {} > {limit}",
                request.kind(),
                peak(channel)
            );
            assert!(channel.iter().all(|s| s.is_finite()), "{}", request.kind());
        }
    }
}

#[test]
fn test_endpoints_are_silent() {
    for request in all_requests() {
        let result = generate(&request).unwrap();
        for channel in result.buffer.channel_slices() {
            assert_eq!(channel[0], 0.0, "{}", request.kind());
            assert_eq!(channel[channel.len() - 1], 0.0, "{}", request.kind());
        }
    }
}

#[test]
fn test_length_matches_duration_and_rate() {
    for request in all_requests() {
        let result = generate(&request).unwrap();
        let expected = (request.sample_rate() as f64 * 1.5) as usize;
        assert_eq!(result.buffer.len(), expected, "{}", request.kind());
        assert_eq!(result.wav.num_samples, expected);
    }
}

#[test]
fn test_same_request_same_bytes() {
    for request in all_requests() {
        let a = generate(&request).unwrap();
        let b = generate(&request).unwrap();
        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash, "{}", request.kind());
        assert_eq!(a.wav.wav_data, b.wav.wav_data);
    }
}

#[test]
fn test_wav_reads_back_with_matching_layout() {
    for request in all_requests() {
        let result = generate(&request).unwrap();
        let reader = hound::WavReader::new(Cursor::new(result.wav.wav_data.clone())).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, result.buffer.channels());
        assert_eq!(spec.sample_rate, request.sample_rate());
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.duration() as usize, result.buffer.len());

        let pcm: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        let expected: Vec<i16> = result
            .buffer
            .interleaved()
            .iter()
            .map(|&x| (x.clamp(-1.0, 1.0) * 32767.0).round() as i16)
            .collect();
        assert_eq!(pcm, expected, "{}", request.kind());
    }
}

#[test]
fn test_normalize_is_idempotent_and_attenuate_only() {
    let mut loud: Vec<f64> = (0..1000).map(|i| 3.0 * (i as f64 * 0.01).sin()).collect();
    normalize(&mut loud, -6.0);
    let once = loud.clone();
    normalize(&mut loud, -6.0);
    assert_eq!(loud, once);

    let mut quiet = vec![0.0, 0.1, -0.2, 0.05];
    let before = quiet.clone();
    normalize(&mut quiet, -1.0);
    assert_eq!(quiet, before);

    let mut silence = vec![0.0; 64];
    normalize(&mut silence, -3.0);
    assert!(silence.iter().all(|&s| s == 0.0));
}

#[test]
fn test_fade_preserves_length_on_short_buffers() {
    for len in [0, 1, 2, 3, 10, 4_409, 4_410, 10_000] {
        let mut samples = vec![1.0; len];
        apply_fade(&mut samples, 44_100, FadeSpec::seconds(0.1));
        assert_eq!(samples.len(), len);
        // A one-sample fade-out is linspace(1, 0, 1) = [1.0].
        if len >= 4 {
            assert_eq!(samples[0], 0.0);
            assert_eq!(samples[len - 1], 0.0);
        }
        assert!(samples.iter().all(|s| (0.0..=1.0).contains(s)));
    }
}

#[test]
fn test_finish_on_stereo_pair_is_per_channel() {
    let mut left = vec![2.0; 1000];
    let mut right = vec![0.1; 1000];
    finish(&mut left, 44_100, -6.0, FadeSpec::millis(1.0));
    finish(&mut right, 44_100, -6.0, FadeSpec::millis(1.0));
    let buffer = SampleBuffer::Stereo { left, right };
    let slices = buffer.channel_slices();
    assert!((peak(slices[0]) - db_to_linear(-6.0)).abs() < 1e-12);
    assert!((peak(slices[1]) - 0.1).abs() < 1e-12);
}

#[test]
fn test_explicit_overrides_reach_the_generator() {
    let request = EffectRequest::new(EffectParams::Binaural(BinauralParams {
        preset: Some("delta_sleep".to_string()),
        beat: Setting::Value(0.0),
        ..Default::default()
    }))
    .with_duration(0.5);
    let result = generate(&request).unwrap();
    let SampleBuffer::Stereo { left, right } = &result.buffer else {
        panic!("binaural must be stereo");
    };
    assert_eq!(left, right);

    let request = EffectRequest::new(EffectParams::Isochronic(IsochronicParams {
        duty_cycle: Setting::Value(0.0),
        ..Default::default()
    }))
    .with_duration(0.5);
    let result = generate(&request).unwrap();
    assert!(result.buffer.peak() < 1e-9);
}
