//! Randomness injection point for maze carving.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Entropy supplied by the caller. Generation reads nothing else.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..len`, rejecting the tail of the `u64` range that
    /// would otherwise bias low indices.
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty candidate list");
        let len = len as u64;
        let limit = u64::MAX - u64::MAX % len;
        loop {
            let value = self.next_u64();
            if value < limit {
                return (value % len) as usize;
            }
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_u64(&mut self) -> u64 {
        Rng::next_u64(self)
    }
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
