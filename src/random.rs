//! Random source for the flicker animation
//!
//! The generator is seeded once at startup from the noise of a floating
//! analog input.

use core::ops::Range;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::AnalogNoise;

/// Number of analog samples folded into a seed
pub const SEED_SAMPLES: usize = 8;

/// Pseudo-random generator used by the animations
pub type FlickerRng = SmallRng;

/// Build a seed from the low bits of several noise samples
pub fn seed_from_noise<A: AnalogNoise>(noise: &mut A) -> u64 {
    (0..SEED_SAMPLES).fold(0u64, |seed, _| {
        seed.rotate_left(8) ^ u64::from(noise.sample())
    })
}

/// Create the generator for a seed
pub fn rng_from_seed(seed: u64) -> FlickerRng {
    SmallRng::seed_from_u64(seed)
}

/// Draw uniformly from `range`
///
/// An empty range always yields its start.
pub fn draw<R: Rng>(rng: &mut R, range: &Range<u8>) -> u8 {
    if range.is_empty() {
        return range.start;
    }
    rng.gen_range(range.clone())
}
