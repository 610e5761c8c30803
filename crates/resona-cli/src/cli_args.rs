//! CLI argument definitions for the Resona command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]`, and `#[derive(Args)]`
//! types live here, keeping `main.rs` focused on dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use resona_spec::{
    BinauralParams, EffectParams, IsochronicParams, Setting, SilentParams, SolfeggioParams,
    SpectralParams,
};

use crate::commands::generate::GenerateOptions;

/// Resona - Entrainment and spectrogram audio generator
#[derive(Parser, Debug)]
#[command(name = "resona")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every generator subcommand.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct OutputArgs {
    /// Output WAV file path
    #[arg(short, long)]
    pub out: PathBuf,

    /// Duration in seconds (default: 60)
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Sample rate in Hz (default: 44100, or 96000 for silent)
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Seed for noise and any other random draws (default: 0)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Fail instead of warning when a frequency reaches the Nyquist limit
    #[arg(long)]
    pub strict_nyquist: bool,

    /// JSON request file to start from; flags override its fields
    #[arg(long)]
    pub params: Option<PathBuf>,
}

impl From<OutputArgs> for GenerateOptions {
    fn from(args: OutputArgs) -> Self {
        GenerateOptions {
            out: args.out,
            duration: args.duration,
            sample_rate: args.sample_rate,
            seed: args.seed,
            strict_nyquist: args.strict_nyquist,
            params: args.params,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw text into the 2-10 kHz band of a spectrogram
    Spectral {
        #[command(flatten)]
        output: OutputArgs,

        /// Text to draw
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Encode text as a tone modulated onto a 17.5 kHz carrier
    Silent {
        #[command(flatten)]
        output: OutputArgs,

        /// Text the message tone is derived from
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Stereo binaural beat (headphones required)
    Binaural {
        #[command(flatten)]
        output: OutputArgs,

        /// Preset name (see `resona presets`)
        #[arg(short, long)]
        preset: Option<String>,

        /// Carrier frequency in Hz (overrides the preset)
        #[arg(long)]
        carrier: Option<f64>,

        /// Beat frequency in Hz (overrides the preset)
        #[arg(long)]
        beat: Option<f64>,
    },

    /// Pulse-gated isochronic tone
    Isochronic {
        #[command(flatten)]
        output: OutputArgs,

        /// Preset name (see `resona presets`)
        #[arg(short, long)]
        preset: Option<String>,

        /// Carrier frequency in Hz (overrides the preset)
        #[arg(long)]
        carrier: Option<f64>,

        /// Pulses per second (overrides the preset)
        #[arg(long)]
        pulse: Option<f64>,

        /// Fraction of each pulse that is on, 0 to 1 (overrides the preset)
        #[arg(long)]
        duty_cycle: Option<f64>,
    },

    /// Pink (1/f) noise
    #[command(name = "pink_noise")]
    PinkNoise {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Brown (1/f^2) noise with drift removed
    #[command(name = "brown_noise")]
    BrownNoise {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Uniform white noise
    #[command(name = "white_noise")]
    WhiteNoise {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Solfeggio tone or the six-tone cascade
    Solfeggio {
        #[command(flatten)]
        output: OutputArgs,

        /// Table key (e.g. 528) or a frequency in Hz
        #[arg(short, long)]
        frequency: Option<String>,

        /// Pure sine without the overtone stack
        #[arg(long)]
        no_harmonics: bool,

        /// Layer 396, 417, 528, 639, 741, and 852 Hz
        #[arg(long)]
        cascade: bool,
    },

    /// List binaural presets, isochronic presets, and solfeggio keys
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Splits a generator subcommand into its output options and effect
    /// parameters. Returns `None` for non-generating commands.
    pub fn into_generate(self) -> Option<(GenerateOptions, EffectParams)> {
        let (output, params) = match self {
            Commands::Spectral { output, text } => {
                (output, EffectParams::Spectral(SpectralParams { text }))
            }
            Commands::Silent { output, text } => (output, EffectParams::Silent(SilentParams { text })),
            Commands::Binaural {
                output,
                preset,
                carrier,
                beat,
            } => (
                output,
                EffectParams::Binaural(BinauralParams {
                    preset,
                    carrier: carrier.into(),
                    beat: beat.into(),
                }),
            ),
            Commands::Isochronic {
                output,
                preset,
                carrier,
                pulse,
                duty_cycle,
            } => (
                output,
                EffectParams::Isochronic(IsochronicParams {
                    preset,
                    carrier: carrier.into(),
                    pulse: pulse.into(),
                    duty_cycle: duty_cycle.into(),
                }),
            ),
            Commands::PinkNoise { output } => (output, EffectParams::PinkNoise),
            Commands::BrownNoise { output } => (output, EffectParams::BrownNoise),
            Commands::WhiteNoise { output } => (output, EffectParams::WhiteNoise),
            Commands::Solfeggio {
                output,
                frequency,
                no_harmonics,
                cascade,
            } => (
                output,
                EffectParams::Solfeggio(SolfeggioParams {
                    frequency,
                    harmonics: if no_harmonics {
                        Setting::Value(false)
                    } else {
                        Setting::Unspecified
                    },
                    cascade,
                }),
            ),
            Commands::Presets { .. } => return None,
        };
        Some((output.into(), params))
    }
}
