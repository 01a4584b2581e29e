// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A deterministic fixed-sequence sampler, for tests.

use super::Sampler;
use crate::geometry::prelude::*;

/// Cycles through a fixed sequence of values forever.
#[derive(Clone, Debug)]
pub struct FixedSampler {
    values: Vec<Float>,
    cursor: usize,
}

impl FixedSampler {
    /// Construction. Values are clamped into $[0, 1)$.
    pub fn new(values: Vec<Float>) -> FixedSampler {
        assert!(!values.is_empty(), "fixed sampler needs at least one value");
        let values = values
            .into_iter()
            .map(|v| float::clamp(v, 0.0, 1.0 - Float::EPSILON))
            .collect();
        FixedSampler { values, cursor: 0 }
    }

    /// The half-sample, a reasonable stand-in for "no jitter".
    pub fn midpoint() -> FixedSampler {
        FixedSampler::new(vec![0.5])
    }
}

impl Sampler for FixedSampler {
    #[inline]
    fn next(&mut self) -> Float {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
