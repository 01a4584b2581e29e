// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::{Material, ScatterResult};
use crate::geometry::prelude::*;
use crate::sample::Sampler;
use crate::spectrum::RGBSpectrumf;

/// A probabilistic blend of two materials: `a` is sampled with
/// probability `t`, `b` with `1 - t`; evaluation and pdfs combine the
/// components with the same weights (one-sample MIS over the mixture).
#[derive(Clone, Debug)]
pub struct Mix {
    pub a: Box<Material>,
    pub b: Box<Material>,
    pub t: Float,
}

impl Mix {
    pub fn new(a: Material, b: Material, t: Float) -> Mix {
        Mix {
            a: Box::new(a),
            b: Box::new(b),
            t,
        }
    }

    pub fn scatter(
        &self,
        ray: &Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterResult> {
        let wo = -ray.dir.normalize();
        let mut result = if sampler.next() < self.t {
            self.a.scatter(ray, hit, sampler)?
        } else {
            self.b.scatter(ray, hit, sampler)?
        };
        if result.pdf > 0.0 {
            // mixture pdf over the smooth components
            let (pdf, _) = self.pdf(wo, result.scattered.dir, hit.normal);
            result.pdf = pdf;
        }
        Some(result)
    }

    pub fn evaluate(&self, wo: Vector3f, wi: Vector3f, normal: Vector3f) -> RGBSpectrumf {
        self.a.evaluate(wo, wi, normal) * self.t + self.b.evaluate(wo, wi, normal) * (1.0 - self.t)
    }

    pub fn pdf(&self, wo: Vector3f, wi: Vector3f, normal: Vector3f) -> (Float, bool) {
        let (pa, _) = self.a.pdf(wo, wi, normal);
        let (pb, _) = self.b.pdf(wo, wi, normal);
        (self.t * pa + (1.0 - self.t) * pb, self.is_delta())
    }

    /// Emission blends the same way sampling does.
    pub fn emit(&self, ray: &Ray, hit: &HitRecord) -> RGBSpectrumf {
        self.a.emit(ray, hit) * self.t + self.b.emit(ray, hit) * (1.0 - self.t)
    }

    #[inline]
    pub fn is_delta(&self) -> bool {
        self.a.is_delta() && self.b.is_delta()
    }

    #[inline]
    pub fn is_emissive(&self) -> bool {
        self.a.is_emissive() || self.b.is_emissive()
    }
}
