//! Deterministic random number generation for cosmetic disk attributes.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical colors
//! - **Context streams**: Independent sequences for different purposes
//!
//! Randomness never influences the rules; it only picks disk colors.
//!
//! ```
//! use hanoi_engine::core::PuzzleRng;
//!
//! let mut a = PuzzleRng::new(7);
//! let mut b = PuzzleRng::new(7);
//! assert_eq!(a.gen_color(), b.gen_color());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use super::disk::Color;

/// Seeded RNG used by the board initializer.
///
/// Uses ChaCha8 for speed while keeping a uniform distribution over the
/// full color space.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Pick a color uniformly from `#000000..=#ffffff`.
    pub fn gen_color(&mut self) -> Color {
        Color::new(self.inner.gen_range(0..=Color::MAX))
    }
}
