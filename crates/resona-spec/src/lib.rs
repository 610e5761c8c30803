//! Resona Spec Library
//!
//! Parameter types, presets, and validation for Resona generation requests.
//! A request names one effect (binaural beat, isochronic tone, solfeggio
//! drone, colored noise, spectrogram text, or near-ultrasonic message) plus
//! its duration, sample rate, and seed.
//!
//! # Example
//!
//! ```
//! use resona_spec::{validate_request, BinauralParams, EffectParams, EffectRequest, Setting};
//!
//! let request = EffectRequest::new(EffectParams::Binaural(BinauralParams {
//!     preset: Some("theta_meditation".to_string()),
//!     beat: Setting::Value(4.5),
//!     ..Default::default()
//! }))
//! .with_duration(30.0)
//! .with_seed(42);
//!
//! assert!(validate_request(&request).is_ok());
//! assert_eq!(request.sample_rate(), 44_100);
//! ```
//!
//! # Modules
//!
//! - [`effect`]: Effect identifiers and per-effect defaults
//! - [`error`]: Configuration error taxonomy
//! - [`preset`]: Binaural and isochronic preset tables
//! - [`request`]: Request and parameter types
//! - [`setting`]: The `Unspecified | Value` override type
//! - [`solfeggio`]: Solfeggio frequency table and key lookup
//! - [`validation`]: Pre-synthesis checks

pub mod effect;
pub mod error;
pub mod preset;
pub mod request;
pub mod setting;
pub mod solfeggio;
pub mod validation;

pub use effect::{
    EffectKind, DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE, ULTRASONIC_SAMPLE_RATE,
};
pub use error::{ErrorCode, SpecError, SpecResult};
pub use preset::{
    binaural_preset, isochronic_preset, BinauralPreset, BinauralSettings, IsochronicPreset,
    IsochronicSettings, BINAURAL_PRESETS, DEFAULT_BINAURAL_PRESET, DEFAULT_ISOCHRONIC_PRESET,
    ISOCHRONIC_PRESETS,
};
pub use request::{
    BinauralParams, EffectParams, EffectRequest, IsochronicParams, RequestOverrides,
    SilentParams, SolfeggioParams, SpectralParams,
};
pub use setting::Setting;
pub use solfeggio::{
    resolve_frequency, SolfeggioEntry, SolfeggioTone, ToneSource, CASCADE_FREQUENCIES,
    DEFAULT_SOLFEGGIO_FREQUENCY, DEFAULT_SOLFEGGIO_KEY, SOLFEGGIO_FREQUENCIES,
};
pub use validation::{
    validate_for_generate, validate_request, MAX_PCM_DATA_BYTES, SPECTRAL_PIXELS_PER_SECOND,
};
