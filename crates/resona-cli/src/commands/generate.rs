//! Generate command implementation
//!
//! Builds a request from flags (optionally layered over a JSON request
//! file), synthesizes it in memory, and only then touches the filesystem.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use resona_backend_audio::GenerateResult;
use resona_spec::{EffectParams, EffectRequest, RequestOverrides};
use tempfile::NamedTempFile;
use tracing::debug;

/// Output and header options shared by every generator subcommand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateOptions {
    pub out: PathBuf,
    pub duration: Option<f64>,
    pub sample_rate: Option<u32>,
    pub seed: Option<u32>,
    pub strict_nyquist: bool,
    /// JSON request file to start from.
    pub params: Option<PathBuf>,
}

/// Builds the request for one subcommand.
///
/// With `--params`, the file is loaded first and every flag that was given
/// overrides its counterpart. The file must describe the same effect as the
/// subcommand.
pub fn build_request(options: &GenerateOptions, params: EffectParams) -> Result<EffectRequest> {
    let base = match &options.params {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read params file: {}", path.display()))?;
            EffectRequest::from_json(&json)
                .with_context(|| format!("Failed to parse params file: {}", path.display()))?
        }
        None => EffectRequest::new(EffectParams::defaults_for(params.kind())),
    };

    let overrides = RequestOverrides {
        duration_seconds: options.duration.into(),
        sample_rate: options.sample_rate.into(),
        seed: options.seed.into(),
        strict_nyquist: options.strict_nyquist,
    };
    Ok(base.overlay(overrides, params)?)
}

/// Run a generator subcommand.
///
/// # Returns
/// `ExitCode::SUCCESS` once the file is in place. Any error leaves the
/// output path untouched.
pub fn run(options: &GenerateOptions, params: EffectParams) -> Result<ExitCode> {
    let request = build_request(options, params)?;
    debug!(request = ?request, "resolved request");

    println!(
        "{} {} ({:.2}s)",
        "Generating:".cyan().bold(),
        request.kind(),
        request.duration_seconds
    );

    let result = resona_backend_audio::generate(&request)
        .with_context(|| format!("Failed to generate {}", request.kind()))?;

    write_atomically(&options.out, &result.wav.wav_data)?;
    print_summary(&options.out, &result);

    Ok(ExitCode::SUCCESS)
}

/// Writes `bytes` to `path` via a temp file in the same directory, so the
/// destination either gets the complete file or is left as it was.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .context("Failed to flush output file")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}

fn print_summary(path: &Path, result: &GenerateResult) {
    let layout = if result.wav.is_stereo { "stereo" } else { "mono" };
    println!("  {} {}", "Effect:".dimmed(), result.description);
    println!(
        "  {} {}, {} Hz, 16-bit",
        "Format:".dimmed(),
        layout,
        result.sample_rate()
    );
    println!(
        "  {} {:.2}s ({} samples)",
        "Duration:".dimmed(),
        result.wav.duration_seconds(),
        result.wav.num_samples
    );
    println!("  {} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);
    println!("{} {}", "Wrote".green().bold(), path.display());
}
