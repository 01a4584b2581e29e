// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::fresnel;
use super::{Material, ScatterResult};
use crate::geometry::foundamental::reflect;
use crate::geometry::prelude::*;
use crate::sample::Sampler;
use crate::spectrum::RGBSpectrumf;

/// A coated material: a thin specular layer over a substrate.
///
/// Scattering Russian-roulettes between a Fresnel reflection off the
/// coat and transmission into the inner material, with the coat's
/// Schlick reflectance as the branching probability.
#[derive(Clone, Debug)]
pub struct Layered {
    pub outer: Box<Material>,
    pub inner: Box<Material>,
    // index of refraction of the coat
    coat_ior: Float,
}

impl Layered {
    pub fn new(outer: Material, inner: Material) -> Layered {
        let coat_ior = match &outer {
            Material::Dielectric(d) => d.ior,
            _ => 1.5,
        };
        Layered {
            outer: Box::new(outer),
            inner: Box::new(inner),
            coat_ior,
        }
    }

    fn coat_reflectance(&self, wo: Vector3f, normal: Vector3f) -> Float {
        let cosine = wo.dot(normal).max(0.0).min(1.0);
        fresnel::schlick(cosine, 1.0 / self.coat_ior)
    }

    pub fn scatter(
        &self,
        ray: &Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterResult> {
        let wo = -ray.dir.normalize();
        let f = self.coat_reflectance(wo, hit.normal);
        if sampler.next() < f {
            // specular bounce off the coat
            let dir = reflect(ray.dir.normalize(), hit.normal);
            Some(ScatterResult {
                scattered: Ray::new(hit.point, dir),
                attenuation: RGBSpectrumf::grey_scale(1.0),
                pdf: 0.0,
            })
        } else {
            let mut result = self.inner.scatter(ray, hit, sampler)?;
            if result.pdf > 0.0 {
                result.pdf *= 1.0 - f;
            }
            Some(result)
        }
    }

    pub fn evaluate(&self, wo: Vector3f, wi: Vector3f, normal: Vector3f) -> RGBSpectrumf {
        let f = self.coat_reflectance(wo, normal);
        self.inner.evaluate(wo, wi, normal) * (1.0 - f)
    }

    pub fn pdf(&self, wo: Vector3f, wi: Vector3f, normal: Vector3f) -> (Float, bool) {
        let f = self.coat_reflectance(wo, normal);
        let (inner_pdf, _) = self.inner.pdf(wo, wi, normal);
        (inner_pdf * (1.0 - f), self.is_delta())
    }

    #[inline]
    pub fn is_delta(&self) -> bool {
        self.inner.is_delta()
    }
}
