//! A simple pseudorandom number generator.
//!
//! A translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, chosen as the default source of (pseudo)random numbers as it is simple, fast, and well documented.
//!
//! Each [context](crate::context) holds a source of rng, parameterised to anything satisfying [rand::Rng].
//! The concrete [Context](crate::context::Context) fixes [MinimalPCG32], seeded with a constant, so default behaviour is deterministic.
//! Revising or parameterising the context is all that's needed for a different source of rng.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment.
#[derive(Debug)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::from_seed(0_u64.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367344;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut left = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut right = MinimalPCG32::from_seed(2_u64.to_le_bytes());

        for _ in 0..64 {
            assert_eq!(left.next_u32(), right.next_u32());
        }
    }

    #[test]
    fn default_is_zero_seed() {
        let mut defaulted = MinimalPCG32::default();
        let mut seeded = MinimalPCG32::from_seed(0_u64.to_le_bytes());

        for _ in 0..8 {
            assert_eq!(defaulted.next_u64(), seeded.next_u64());
        }
    }
}
