// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenient reexports for the sample module

pub use super::distribution::Distribution1D;
pub use super::fixed::FixedSampler;
pub use super::random::{seed_for, RandomSampler};
pub use super::{
    balance_heuristic, pdf_cosw_hemisphere, pdf_uniform_cone, pdf_uniform_hemisphere,
    pdf_uniform_sphere, power_heuristic, sample_concentric_disk, sample_cosw_hemisphere,
    sample_uniform_cone, sample_uniform_hemisphere, sample_uniform_sphere,
    sample_uniform_triangle, Sampler,
};
