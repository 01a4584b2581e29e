// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::fresnel;
use super::ScatterResult;
use crate::geometry::foundamental::{reflect, refract};
use crate::geometry::prelude::*;
use crate::sample::Sampler;
use crate::spectrum::RGBSpectrumf;

/// Clear glass: Snell refraction with Schlick's Fresnel approximation,
/// always a delta distribution.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Dielectric {
    pub ior: Float,
}

impl Dielectric {
    #[inline]
    pub fn new(ior: Float) -> Dielectric {
        Dielectric { ior }
    }

    pub fn scatter(
        &self,
        ray: &Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterResult> {
        let eta_ratio = if hit.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };
        let unit_dir = ray.dir.normalize();
        let cos_theta = (-unit_dir).dot(hit.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

        let cannot_refract = eta_ratio * sin_theta > 1.0;
        let dir = if cannot_refract || fresnel::schlick(cos_theta, eta_ratio) > sampler.next() {
            reflect(unit_dir, hit.normal)
        } else {
            refract(unit_dir, hit.normal, eta_ratio)
                .unwrap_or_else(|| reflect(unit_dir, hit.normal))
        };
        Some(ScatterResult {
            scattered: Ray::new(hit.point, dir),
            attenuation: RGBSpectrumf::grey_scale(1.0),
            pdf: 0.0,
        })
    }
}
