// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenient reexports for the renderer module

pub use super::error::{ConfigError, RenderError, RenderOutcome, RenderStatus};
pub use super::progressive::{CancelToken, PassResult, Passes, Renderer};
pub use super::pt::{LightStrategy, PathTracer, SplatRay};
pub use super::scene::{Background, LightSpec, Scene};
pub use super::SamplingConfig;
