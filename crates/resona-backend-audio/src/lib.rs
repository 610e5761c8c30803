//! Resona Audio Backend
//!
//! Deterministic synthesis for Resona's entrainment and novelty effects:
//!
//! - **Binaural beats** - Stereo carrier pair offset by the beat frequency
//! - **Isochronic tones** - A carrier gated at the pulse rate
//! - **Solfeggio** - Named tones with overtones, or the six-tone cascade
//! - **Noise** - White, pink (Voss-McCartney), and drift-corrected brown
//! - **Spectral text** - Text that appears in a spectrogram between 2 and 10 kHz
//! - **Silent** - A text-derived tone amplitude-modulated onto 17.5 kHz
//!
//! Every effect passes through the same safety stage before it is encoded:
//! peak normalization (attenuate only), a Nyquist check, and linear fades.
//!
//! # Determinism
//!
//! Randomness comes from a PCG32 built per call from the request seed, with
//! the per-effect stream derived via BLAKE3. The same request always yields
//! the same PCM bytes.
//!
//! # Example
//!
//! ```
//! use resona_backend_audio::generate;
//! use resona_spec::{EffectParams, EffectRequest};
//!
//! let request = EffectRequest::new(EffectParams::PinkNoise)
//!     .with_duration(0.25)
//!     .with_seed(7);
//! let result = generate(&request).unwrap();
//!
//! assert_eq!(result.wav.num_samples, 11_025);
//! assert!(result.buffer.peak() <= 0.51);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Request in, finished buffer and WAV bytes out
//! - [`effects`] - Binaural, isochronic, solfeggio, and noise generators
//! - [`spectral`] - Spectrogram text encoding and additive resynthesis
//! - [`subliminal`] - Near-ultrasonic AM message
//! - [`safety`] - Normalize, Nyquist check, fades
//! - [`synthesis`] - Raw synthesizers shared by the generators
//! - [`wav`] - Deterministic 16-bit WAV encoding

pub mod buffer;
pub mod effects;
pub mod error;
pub mod generate;
pub mod oscillator;
pub mod rng;
pub mod safety;
pub mod spectral;
pub mod subliminal;
pub mod synthesis;
pub mod wav;

pub use buffer::SampleBuffer;
pub use error::{AudioError, AudioResult};
pub use generate::{generate, GenerateResult};
pub use safety::{apply_fade, normalize, validate_frequency_range, FadeSpec, NyquistPolicy};
pub use wav::{WavFormat, WavResult};
