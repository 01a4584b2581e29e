// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::prelude::*;
use crate::spectrum::RGBSpectrumf;

/// A diffuse emitter. Energy leaves, none re-enters: the BRDF is zero
/// and scattering always fails.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Emissive {
    pub radiance: RGBSpectrumf,
}

impl Emissive {
    #[inline]
    pub fn new(radiance: RGBSpectrumf) -> Emissive {
        Emissive { radiance }
    }

    /// Radiance leaving the surface along `-ray.dir`. One-sided:
    /// back-face hits see nothing.
    #[inline]
    pub fn emit(&self, _ray: &Ray, hit: &HitRecord) -> RGBSpectrumf {
        if hit.front_face {
            self.radiance
        } else {
            RGBSpectrumf::black()
        }
    }
}
