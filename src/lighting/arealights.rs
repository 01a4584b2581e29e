// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Area lights backed by emissive scene surfaces.

use super::{EmissionSample, LightSample};
use crate::component::Primitive;
use crate::geometry::prelude::*;
use crate::material::Material;
use crate::sample;
use crate::spectrum::RGBSpectrumf;
use std::sync::Arc;

/// A diffuse area light: an emissive surface (quad, sphere or disk)
/// shared with the scene's primitive list.
///
/// Samples are drawn uniformly over the surface; the area pdf `1/A`
/// converts to solid angle as `d^2 / (A |cos theta_l|)`. One-sided
/// surfaces emit nothing towards their back side.
#[derive(Clone, Debug)]
pub struct AreaLight {
    primitive: Arc<Primitive>,
    emission: RGBSpectrumf,
    area: Float,
}

impl AreaLight {
    /// Construction. The primitive's material must be emissive; scene
    /// validation guarantees it.
    pub fn new(primitive: Arc<Primitive>) -> AreaLight {
        let emission = match &primitive.material {
            Material::Emissive(e) => e.radiance,
            _ => RGBSpectrumf::black(),
        };
        let area = primitive.shape.area();
        AreaLight {
            primitive,
            emission,
            area,
        }
    }

    /// The surface this light wraps.
    #[inline]
    pub fn primitive(&self) -> &Arc<Primitive> {
        &self.primitive
    }

    pub fn sample(&self, ref_point: Point3f, u: Point2f) -> LightSample {
        let (point, normal) = self.primitive.shape.sample_surface(u);
        let delta = point - ref_point;
        let dist2 = delta.magnitude2();
        if dist2 < DEGENERATE_EPS {
            return LightSample::invalid(ref_point);
        }
        let distance = dist2.sqrt();
        let wi = delta / distance;
        // receiver behind the surface, or edge-on
        let cos_l = normal.dot(-wi);
        if cos_l < DEGENERATE_EPS {
            return LightSample::invalid(ref_point);
        }
        LightSample {
            point,
            normal,
            wi,
            distance,
            radiance: self.emission,
            pdf: dist2 / (cos_l * self.area),
        }
    }

    pub fn pdf(&self, ref_point: Point3f, dir: Vector3f) -> Float {
        self.primitive.shape.pdf_wrt(ref_point, dir)
    }

    pub fn sample_emission(&self, u_pos: Point2f, u_dir: Point2f) -> EmissionSample {
        let (point, normal) = self.primitive.shape.sample_surface(u_pos);
        let basis = Onb::from_w(normal);
        let local = sample::sample_cosw_hemisphere(u_dir);
        let dir = basis.local(local);
        EmissionSample {
            point,
            normal,
            dir,
            radiance: self.emission,
            pdf_pos: 1.0 / self.area,
            pdf_dir: sample::pdf_cosw_hemisphere(local.z),
        }
    }

    pub fn emission_pdf(&self, point: Point3f, dir: Vector3f) -> (Float, Float) {
        let normal = self.primitive.shape.normal_at(point);
        (
            1.0 / self.area,
            sample::pdf_cosw_hemisphere(normal.dot(dir)),
        )
    }

    /// returns an estimation of total power of this light
    pub fn power(&self) -> RGBSpectrumf {
        self.emission * self.area * float::pi()
    }
}
