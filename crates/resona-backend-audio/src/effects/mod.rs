//! Finished entrainment effects.
//!
//! Each generator produces raw signal, checks it against Nyquist, and runs the
//! safety pass with its own peak target and fade length.
//!
//! - `binaural` - Stereo carrier pair with an inter-ear beat
//! - `isochronic` - Pulse-gated carrier with Hann-smoothed edges
//! - `solfeggio` - Named tones with overtones, and the cascade chord
//! - `noise` - White, pink, and brown noise beds
//!
//! Spectrogram text and the ultrasonic message live in [`crate::spectral`]
//! and [`crate::subliminal`].

pub mod binaural;
pub mod isochronic;
pub mod noise;
pub mod solfeggio;
