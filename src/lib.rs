// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Candela is a progressive, physically based, unbiased path tracer.
//!
//! Rendering proceeds in passes; each pass gives every unconverged pixel
//! additional samples, and per-pixel adaptive sampling concentrates effort
//! where variance is high. The crate covers the light transport core:
//! geometry and BVH acceleration, materials with a BRDF/pdf contract,
//! lights with a uniform sampling interface, the path tracing integrator
//! and the parallel progressive driver. Scene authoring, mesh and image
//! I/O, and display transforms are external collaborators; the core
//! consumes an immutable [`renderer::Scene`] and emits a linear HDR
//! [`filming::Image`].

pub mod geometry;
pub mod spectrum;
pub mod sample;
pub mod shape;
pub mod component;
pub mod material;
pub mod lighting;
pub mod filming;
pub mod renderer;
pub mod prelude;
