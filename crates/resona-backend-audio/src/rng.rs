//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Synthesis never touches a global generator. Each generation call builds
//! its own `Pcg32` from the request seed and passes it down by `&mut`, so two
//! calls with the same seed produce bit-identical noise.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit PCG state.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for a named stream from the request seed.
///
/// Hashes the seed's little-endian bytes followed by the UTF-8 key and keeps
/// the first four bytes of the digest.
pub fn derive_stream_seed(base_seed: u32, key: &str) -> u32 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&base_seed.to_le_bytes());
    hasher.update(key.as_bytes());
    let hash = hasher.finalize();

    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[..4]);
    u32::from_le_bytes(bytes)
}

/// Creates the RNG for a named stream of a request.
pub fn create_stream_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_stream_seed(base_seed, key))
}
