//! Random short key generation.
//!
//! Keys are drawn uniformly from a fixed 62-symbol alphabet (digits,
//! uppercase, lowercase) using a cryptographically secure RNG. The random
//! source is injected at construction so tests can substitute a seeded one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// The 62-symbol key alphabet.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of auto-generated keys. 62^6 is roughly 56.8 billion combinations.
pub const DEFAULT_KEY_LENGTH: usize = 6;

/// Generates random alphanumeric keys.
///
/// The generator never checks collisions with existing keys; that is the
/// caller's concern (see [`crate::application::services::LinkService`]).
pub struct KeyGenerator {
    rng: Mutex<StdRng>,
}

impl KeyGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a deterministic generator for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generates a key of exactly `length` symbols from the alphabet.
    ///
    /// `length == 0` yields the empty string.
    pub fn generate(&self, length: usize) -> String {
        // A poisoned lock only means another thread panicked mid-draw; the
        // RNG state is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}
