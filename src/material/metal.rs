// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::ScatterResult;
use crate::geometry::foundamental::reflect;
use crate::geometry::prelude::*;
use crate::sample;
use crate::sample::Sampler;
use crate::spectrum::RGBSpectrumf;

/// A mirror reflector with an optional fuzz jitter.
///
/// Fuzzy reflection stays a delta distribution: the jittered direction
/// is reported with pdf zero and the full `albedo` attenuation, and
/// next-event estimation never light-samples it.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Metal {
    pub albedo: RGBSpectrumf,
    pub fuzz: Float,
}

impl Metal {
    #[inline]
    pub fn new(albedo: RGBSpectrumf, fuzz: Float) -> Metal {
        Metal { albedo, fuzz }
    }

    pub fn scatter(
        &self,
        ray: &Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterResult> {
        let mut dir = reflect(ray.dir.normalize(), hit.normal);
        if self.fuzz > 0.0 {
            // uniform point in the unit ball
            let jitter = sample::sample_uniform_sphere(sampler.next_2d())
                * sampler.next().cbrt()
                * self.fuzz;
            dir += jitter;
        }
        if dir.dot(hit.normal) <= 0.0 {
            // jittered below the horizon: absorbed
            return None;
        }
        Some(ScatterResult {
            scattered: Ray::new(hit.point, dir.normalize()),
            attenuation: self.albedo,
            pdf: 0.0,
        })
    }
}
