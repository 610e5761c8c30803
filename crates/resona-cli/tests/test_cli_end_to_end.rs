//! Runs the `resona` binary against a temp directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn resona(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resona"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to launch resona")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

#[test]
fn test_missing_text_fails_without_writing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("art.wav");

    for effect in ["spectral", "silent"] {
        let output = resona(&[effect, "--out", path_arg(&out), "--duration", "1"]);
        assert!(!output.status.success(), "{effect} should fail");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("E002"), "{effect}: {stderr}");
        assert!(!out.exists());
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_duration_fails_without_writing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("noise.wav");
    let output = resona(&["white_noise", "-o", path_arg(&out), "--duration", "0"]);
    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn test_oversized_duration_is_a_configuration_error() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("noise.wav");
    let output = resona(&["white_noise", "-o", path_arg(&out), "--duration", "1e15"]);
    assert!(!output.status.success());
    // A configuration error exits with status 1, not a panic.
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("E004"), "{stderr}");
    assert!(!out.exists());
}

#[test]
fn test_unknown_effect_in_params_file_reports_e001() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("request.json");
    fs::write(&params, r#"{"effect": "reverb"}"#).unwrap();
    let out = dir.path().join("out.wav");
    let output = resona(&["pink_noise", "-o", path_arg(&out), "--params", path_arg(&params)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("E001"), "{stderr}");
    assert!(!out.exists());
}

#[test]
fn test_strict_nyquist_fails_without_writing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("silent.wav");
    let output = resona(&[
        "silent",
        "-o",
        path_arg(&out),
        "--text",
        "calm",
        "--duration",
        "0.5",
        "--sample-rate",
        "32000",
        "--strict-nyquist",
    ]);
    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn test_binaural_writes_stereo_wav() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("beat.wav");
    let output = resona(&[
        "binaural",
        "-o",
        path_arg(&out),
        "--preset",
        "theta_meditation",
        "--duration",
        "0.5",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stereo"));
    assert!(stdout.contains("PCM hash"));

    let reader = hound::WavReader::open(&out).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.spec().sample_rate, 44_100);
    assert_eq!(reader.duration(), 22_050);
}

#[test]
fn test_silent_defaults_to_96k() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("silent.wav");
    let output = resona(&["silent", "-o", path_arg(&out), "-t", "focus", "-d", "0.25"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let reader = hound::WavReader::open(&out).unwrap();
    assert_eq!(reader.spec().sample_rate, 96_000);
    assert_eq!(reader.duration(), 24_000);
}

#[test]
fn test_same_seed_same_file() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.wav");
    let b = dir.path().join("b.wav");
    for out in [&a, &b] {
        let output = resona(&["pink_noise", "-o", path_arg(out), "-d", "0.5", "--seed", "17"]);
        assert!(output.status.success());
    }
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_params_file_is_layered_under_flags() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("tone.json");
    fs::write(
        &params,
        r#"{"effect": "solfeggio", "frequency": "396", "duration_seconds": 30}"#,
    )
    .unwrap();
    let out = dir.path().join("tone.wav");
    let output = resona(&[
        "solfeggio",
        "-o",
        path_arg(&out),
        "--params",
        path_arg(&params),
        "-d",
        "0.5",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("396"), "{stdout}");
    assert_eq!(hound::WavReader::open(&out).unwrap().duration(), 22_050);
}

#[test]
fn test_presets_lists_tables() {
    let output = resona(&["presets"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["alpha_relaxation", "gamma_peak", "528"] {
        assert!(stdout.contains(name), "missing {name}");
    }
}
