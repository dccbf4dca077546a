//! Random source shared by every randomized step.
//!
//! All randomness flows through a single seedable ChaCha8 stream, so a fixed
//! seed reproduces a draw or a whole tournament exactly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The engine-wide RNG type.
pub type SimRng = ChaCha8Rng;

/// Stream seeded for reproducible runs.
pub fn seeded(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Stream seeded from OS entropy for one-off runs.
pub fn unseeded() -> SimRng {
    ChaCha8Rng::from_entropy()
}
