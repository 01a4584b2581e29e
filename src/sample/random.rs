// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A pseudorandom sampler, seeded per pixel per pass.

use super::Sampler;
use crate::geometry::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// splitmix64 finalizer. A bijection on `u64`, so distinct
/// (pass, pixel) pairs never collide.
#[inline]
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Compose a pass index and a pixel index into an rng seed.
#[inline]
pub fn seed_for(pass: u32, pixel: u32) -> u64 {
    splitmix64(((pass as u64) << 32) | pixel as u64)
}

/// A pseudorandom sampler backed by a small fast rng.
///
/// Reseeding with the same (pass, pixel) yields the identical sequence,
/// which keeps renders reproducible.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: SmallRng,
}

impl RandomSampler {
    #[inline]
    pub fn new(seed: u64) -> RandomSampler {
        RandomSampler {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Sampler for the given pixel within the given pass.
    #[inline]
    pub fn for_pixel(pass: u32, pixel: u32) -> RandomSampler {
        RandomSampler::new(seed_for(pass, pixel))
    }
}

impl Sampler for RandomSampler {
    #[inline]
    fn next(&mut self) -> Float {
        self.rng.gen()
    }
}
