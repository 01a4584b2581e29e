// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Light selection strategies for next-event estimation.

use super::Light;
use crate::geometry::prelude::*;
use crate::sample::distribution::Distribution1D;

/// How the scene picks the light a shadow ray goes after.
#[derive(Clone, Debug)]
pub enum SelectorPolicy {
    /// every light with probability `1/N`
    Uniform,
    /// user-assigned non-negative weights, normalized
    Weighted(Vec<Float>),
    /// weights proportional to each light's power estimate
    ByPower,
}

/// Picks a light and reports the probability of having picked it.
#[derive(Clone, Debug)]
pub struct LightSelector {
    dist: Option<Distribution1D>,
    len: usize,
}

impl LightSelector {
    /// Uniform selection.
    pub fn uniform(len: usize) -> LightSelector {
        LightSelector { dist: None, len }
    }

    /// Selection by explicit weights; the caller has validated that
    /// they are non-negative with a positive sum.
    pub fn weighted(weights: Vec<Float>) -> LightSelector {
        let len = weights.len();
        LightSelector {
            dist: Some(Distribution1D::new(weights)),
            len,
        }
    }

    /// Selection proportional to light power.
    pub fn by_power(lights: &[Light]) -> LightSelector {
        let weights: Vec<Float> = lights.iter().map(|l| l.power().luminance()).collect();
        if weights.iter().any(|w| *w > 0.0) {
            LightSelector::weighted(weights)
        } else {
            LightSelector::uniform(lights.len())
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pick a light given `u` in $[0, 1)$, returning its index and the
    /// selection probability; `None` when there are no lights.
    pub fn select(&self, u: Float) -> Option<(usize, Float)> {
        if self.len == 0 {
            return None;
        }
        match &self.dist {
            Some(d) => {
                let (idx, pdf) = d.sample_discrete(u);
                Some((idx, pdf))
            }
            None => {
                let idx = ((u * self.len as Float) as usize).min(self.len - 1);
                Some((idx, 1.0 / self.len as Float))
            }
        }
    }

    /// Probability that [`LightSelector::select`] returns `index`.
    pub fn probability(&self, index: usize) -> Float {
        debug_assert!(index < self.len);
        match &self.dist {
            Some(d) => d.discrete_pdf(index),
            None => 1.0 / self.len as Float,
        }
    }
}
