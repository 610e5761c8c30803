//! Presets command implementation
//!
//! Lists every named parameter set the generators accept.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use resona_spec::{
    BINAURAL_PRESETS, DEFAULT_BINAURAL_PRESET, DEFAULT_ISOCHRONIC_PRESET, DEFAULT_SOLFEGGIO_KEY,
    ISOCHRONIC_PRESETS, SOLFEGGIO_FREQUENCIES,
};
use serde_json::{json, Value};

/// Run the presets command.
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&presets_json())?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Binaural presets".cyan().bold());
    for preset in &BINAURAL_PRESETS {
        println!(
            "  {:<18} {:>6} Hz carrier {:>5} Hz beat  {}{}",
            preset.name,
            preset.carrier,
            preset.beat,
            preset.description.dimmed(),
            default_marker(preset.name == DEFAULT_BINAURAL_PRESET)
        );
    }

    println!("{}", "Isochronic presets".cyan().bold());
    for preset in &ISOCHRONIC_PRESETS {
        println!(
            "  {:<18} {:>6} Hz carrier {:>5} Hz pulse  duty {}{}",
            preset.name,
            preset.carrier,
            preset.pulse,
            preset.duty_cycle,
            default_marker(preset.name == DEFAULT_ISOCHRONIC_PRESET)
        );
    }

    println!("{}", "Solfeggio frequencies".cyan().bold());
    for entry in &SOLFEGGIO_FREQUENCIES {
        println!(
            "  {:<18} {:<12} {}{}",
            entry.key,
            entry.name,
            entry.description.dimmed(),
            default_marker(entry.key == DEFAULT_SOLFEGGIO_KEY)
        );
    }
    println!(
        "  {}",
        "Any other positive number is used as a custom frequency in Hz.".dimmed()
    );

    Ok(ExitCode::SUCCESS)
}

fn default_marker(is_default: bool) -> String {
    if is_default {
        format!(" {}", "(default)".green())
    } else {
        String::new()
    }
}

/// All preset tables as one JSON document.
pub fn presets_json() -> Value {
    json!({
        "binaural": BINAURAL_PRESETS.iter().map(|p| json!({
            "name": p.name,
            "carrier": p.carrier,
            "beat": p.beat,
            "description": p.description,
            "default": p.name == DEFAULT_BINAURAL_PRESET,
        })).collect::<Vec<_>>(),
        "isochronic": ISOCHRONIC_PRESETS.iter().map(|p| json!({
            "name": p.name,
            "carrier": p.carrier,
            "pulse": p.pulse,
            "duty_cycle": p.duty_cycle,
            "default": p.name == DEFAULT_ISOCHRONIC_PRESET,
        })).collect::<Vec<_>>(),
        "solfeggio": SOLFEGGIO_FREQUENCIES.iter().map(|e| json!({
            "key": e.key,
            "frequency": e.frequency,
            "name": e.name,
            "description": e.description,
            "default": e.key == DEFAULT_SOLFEGGIO_KEY,
        })).collect::<Vec<_>>(),
    })
}
