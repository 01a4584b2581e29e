// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The rendering core: scene, integrator and progressive driver.

use crate::geometry::prelude::*;
use serde_derive::{Deserialize, Serialize};

use self::error::ConfigError;

pub use self::error::{RenderError, RenderOutcome, RenderStatus};
pub use self::progressive::{CancelToken, PassResult, Passes, Renderer};
pub use self::pt::{LightStrategy, PathTracer, SplatRay};
pub use self::scene::{Background, LightSpec, Scene};

/// Sampling configuration of a render.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub width: u32,
    pub height: u32,
    /// per-pixel sample budget
    pub samples_per_pixel: u32,
    /// maximum path length
    pub max_depth: u32,
    /// bounce index Russian roulette starts at
    pub russian_roulette_min_bounces: u32,
    /// fraction of the budget a pixel must reach before the
    /// convergence test applies
    pub adaptive_min_samples: Float,
    /// relative-standard-error target in (0, 1]
    pub adaptive_threshold: Float,
}

impl Default for SamplingConfig {
    fn default() -> SamplingConfig {
        SamplingConfig {
            width: 400,
            height: 400,
            samples_per_pixel: 64,
            max_depth: 16,
            russian_roulette_min_bounces: 3,
            adaptive_min_samples: 0.25,
            adaptive_threshold: 0.05,
        }
    }
}

impl SamplingConfig {
    /// Validate; every violation is fatal to the render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::InvalidSampleBudget(self.samples_per_pixel));
        }
        if self.max_depth < 1 {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        if !(self.adaptive_threshold > 0.0 && self.adaptive_threshold <= 1.0) {
            return Err(ConfigError::InvalidAdaptiveThreshold(self.adaptive_threshold));
        }
        if !(self.adaptive_min_samples >= 0.0 && self.adaptive_min_samples.is_finite()) {
            return Err(ConfigError::InvalidAdaptiveMinSamples(self.adaptive_min_samples));
        }
        Ok(())
    }
}

pub mod error;
pub mod scene;
pub mod pt;
pub mod progressive;
pub mod prelude;
#[cfg(test)]
mod tests;
