//! Random sources for stat jitter and card ids.
//!
//! Card generation is randomized on purpose: identical inputs produce
//! different cards. The randomness is injected through [`StatRng`] so tests
//! can pin outcomes.
//!
//! ```
//! use archetype_ccg::core::{CardRng, StatRng};
//!
//! let mut a = CardRng::new(7);
//! let mut b = CardRng::new(7);
//! assert_eq!(a.jitter(0.2), b.jitter(0.2));
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness consumed by the card generator.
pub trait StatRng {
    /// Uniform offset in `[-spread, spread]`.
    fn jitter(&mut self, spread: f64) -> f64;

    /// Raw 64-bit value, used for card ids.
    fn next_u64(&mut self) -> u64;
}

/// Seedable ChaCha8 stream.
///
/// Same seed produces the same sequence. Production callers use
/// [`CardRng::from_entropy`].
#[derive(Clone, Debug)]
pub struct CardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> CardRngState {
        CardRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CardRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl StatRng for CardRng {
    fn jitter(&mut self, spread: f64) -> f64 {
        if spread <= 0.0 {
            return 0.0;
        }
        self.inner.gen_range(-spread..=spread)
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// Serializable RNG checkpoint.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// much has been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
