// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error taxonomy of the rendering core.
//!
//! Configuration problems surface at construction and are fatal to the
//! render; resource exhaustion is propagated before rendering starts;
//! transient numeric conditions are absorbed as zero contributions and
//! never reach here. Cancellation is not an error: it is a distinct
//! [`RenderOutcome`] carrying the partial image.

use crate::filming::Image;
use crate::geometry::prelude::*;
use std::error::Error;
use std::fmt;

/// Invalid configuration, reported when the core is constructed.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    InvalidDimensions { width: u32, height: u32 },
    InvalidSampleBudget(u32),
    InvalidMaxDepth(u32),
    InvalidAdaptiveThreshold(Float),
    InvalidAdaptiveMinSamples(Float),
    InvalidCamera(&'static str),
    InvalidMaterial(String),
    DegenerateLight(String),
    InvalidLightWeights(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "invalid image dimensions {}x{}", width, height)
            }
            ConfigError::InvalidSampleBudget(n) => {
                write!(f, "sample budget must be positive, got {}", n)
            }
            ConfigError::InvalidMaxDepth(n) => {
                write!(f, "max depth must be at least 1, got {}", n)
            }
            ConfigError::InvalidAdaptiveThreshold(t) => {
                write!(f, "adaptive threshold must lie in (0, 1], got {}", t)
            }
            ConfigError::InvalidAdaptiveMinSamples(t) => {
                write!(f, "adaptive min-sample fraction must be non-negative, got {}", t)
            }
            ConfigError::InvalidCamera(what) => write!(f, "invalid camera: {}", what),
            ConfigError::InvalidMaterial(what) => write!(f, "invalid material: {}", what),
            ConfigError::DegenerateLight(what) => write!(f, "degenerate light: {}", what),
            ConfigError::InvalidLightWeights(what) => {
                write!(f, "invalid light weights: {}", what)
            }
        }
    }
}

impl Error for ConfigError {}

/// Anything that can keep a render from running to completion.
#[derive(Debug)]
pub enum RenderError {
    Config(ConfigError),
    /// film allocation or worker pool creation failed
    Resource(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenderError::Config(e) => write!(f, "configuration: {}", e),
            RenderError::Resource(what) => write!(f, "resource: {}", what),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Config(e) => Some(e),
            RenderError::Resource(_) => None,
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(e: ConfigError) -> RenderError {
        RenderError::Config(e)
    }
}

/// How a render ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RenderStatus {
    /// every pixel converged or exhausted its budget
    Completed,
    /// cancellation or timeout; the accumulated state is still valid
    Cancelled,
}

/// A finished render: the resolved image, tagged with how it ended.
#[derive(Clone, PartialEq, Debug)]
pub enum RenderOutcome {
    Completed(Image),
    Cancelled(Image),
}

impl RenderOutcome {
    /// The resolved image, however the render ended.
    pub fn image(&self) -> &Image {
        match self {
            RenderOutcome::Completed(img) => img,
            RenderOutcome::Cancelled(img) => img,
        }
    }

    pub fn into_image(self) -> Image {
        match self {
            RenderOutcome::Completed(img) => img,
            RenderOutcome::Cancelled(img) => img,
        }
    }
}
