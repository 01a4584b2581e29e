// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::ScatterResult;
use crate::geometry::prelude::*;
use crate::sample;
use crate::sample::Sampler;
use crate::spectrum::RGBSpectrumf;

/// An ideal diffuse reflector: BRDF `albedo / pi`, cosine-weighted
/// scattering.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Lambertian {
    pub albedo: RGBSpectrumf,
}

impl Lambertian {
    #[inline]
    pub fn new(albedo: RGBSpectrumf) -> Lambertian {
        Lambertian { albedo }
    }

    pub fn scatter(&self, hit: &HitRecord, sampler: &mut dyn Sampler) -> Option<ScatterResult> {
        let basis = Onb::from_w(hit.normal);
        let dir = basis.local(sample::sample_cosw_hemisphere(sampler.next_2d()));
        let pdf = sample::pdf_cosw_hemisphere(dir.dot(hit.normal));
        Some(ScatterResult {
            scattered: Ray::new(hit.point, dir),
            attenuation: self.albedo,
            pdf,
        })
    }

    #[inline]
    pub fn evaluate(&self, wo: Vector3f, wi: Vector3f, normal: Vector3f) -> RGBSpectrumf {
        if wo.dot(normal) > 0.0 && wi.dot(normal) > 0.0 {
            self.albedo * float::frac_1_pi()
        } else {
            RGBSpectrumf::black()
        }
    }

    #[inline]
    pub fn pdf(&self, wo: Vector3f, wi: Vector3f, normal: Vector3f) -> Float {
        if wo.dot(normal) > 0.0 {
            sample::pdf_cosw_hemisphere(wi.dot(normal))
        } else {
            0.0
        }
    }
}
