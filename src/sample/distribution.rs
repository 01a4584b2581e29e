// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 1D piecewise-constant distribution for discrete sampling

use crate::geometry::prelude::*;

/// A discrete distribution over `func.len()` buckets, sampled by
/// inverting its CDF.
#[derive(Clone, Debug)]
pub struct Distribution1D {
    func: Vec<Float>,
    cdf: Vec<Float>,
    total: Float,
}

impl Distribution1D {
    /// Construction from non-negative weights. At least one weight must
    /// be positive.
    pub fn new(func: Vec<Float>) -> Distribution1D {
        debug_assert!(!func.is_empty());
        debug_assert!(func.iter().all(|w| *w >= 0.0));
        let mut cdf = Vec::with_capacity(func.len() + 1);
        cdf.push(0.0);
        let mut acc = 0.0;
        for w in &func {
            acc += w;
            cdf.push(acc);
        }
        let total = acc;
        debug_assert!(total > 0.0);
        for c in cdf.iter_mut() {
            *c /= total;
        }
        Distribution1D { func, cdf, total }
    }

    /// number of buckets
    #[inline]
    pub fn len(&self) -> usize {
        self.func.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.func.is_empty()
    }

    /// Sample a bucket given `u` in $[0, 1)$; returns the bucket index
    /// and its discrete probability.
    pub fn sample_discrete(&self, u: Float) -> (usize, Float) {
        let u = float::clamp(u, 0.0, 1.0 - Float::EPSILON);
        // last interval whose cdf start is <= u
        let idx = match self
            .cdf
            .binary_search_by(|c| c.partial_cmp(&u).expect("cdf is finite"))
        {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let idx = idx.min(self.func.len() - 1);
        (idx, self.discrete_pdf(idx))
    }

    /// Probability of the given bucket.
    #[inline]
    pub fn discrete_pdf(&self, idx: usize) -> Float {
        self.func[idx] / self.total
    }
}
