// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fresnel helpers

use crate::geometry::prelude::*;

/// Reflectance at normal incidence for an interface against air.
#[inline]
pub fn reflectance_normal(ior: Float) -> Float {
    let r0 = (1.0 - ior) / (1.0 + ior);
    r0 * r0
}

/// Schlick's approximation of the Fresnel reflectance, with
/// `ref_ratio` the relative index of refraction across the interface.
#[inline]
pub fn schlick(cosine: Float, ref_ratio: Float) -> Float {
    let r0 = reflectance_normal(ref_ratio);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
