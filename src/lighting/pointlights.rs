// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Some point lights.

use super::{EmissionSample, LightSample};
use crate::geometry::prelude::*;
use crate::sample;
use crate::spectrum::RGBSpectrumf;

/// An isotropic point light emitting the same intensity in all
/// directions.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PointLight {
    /// position in world frame
    pub position: Point3f,
    /// radiant intensity
    pub intensity: RGBSpectrumf,
}

impl PointLight {
    #[inline]
    pub fn new(position: Point3f, intensity: RGBSpectrumf) -> PointLight {
        PointLight {
            position,
            intensity,
        }
    }

    pub fn sample(&self, ref_point: Point3f) -> LightSample {
        let delta = self.position - ref_point;
        let dist2 = delta.magnitude2();
        if dist2 < DEGENERATE_EPS {
            return LightSample::invalid(ref_point);
        }
        let distance = dist2.sqrt();
        let wi = delta / distance;
        LightSample {
            point: self.position,
            normal: -wi,
            wi,
            distance,
            radiance: self.intensity / dist2,
            pdf: 1.0,
        }
    }

    pub fn sample_emission(&self, u_dir: Point2f) -> EmissionSample {
        let dir = sample::sample_uniform_sphere(u_dir);
        EmissionSample {
            point: self.position,
            normal: dir,
            dir,
            radiance: self.intensity,
            pdf_pos: 1.0,
            pdf_dir: sample::pdf_uniform_sphere(),
        }
    }

    #[inline]
    pub fn emission_pdf(&self) -> (Float, Float) {
        // position is a delta
        (0.0, sample::pdf_uniform_sphere())
    }

    /// returns an estimation of total power of this light
    pub fn power(&self) -> RGBSpectrumf {
        self.intensity * (4.0 * float::pi())
    }
}

/// Spot light emitting into a cone of directions, with a smooth
/// falloff between `falloff_deg` and `total_deg`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpotLight {
    /// position in world frame
    pub position: Point3f,
    /// unit axis the cone opens around
    pub axis: Vector3f,
    /// radiant intensity along the axis
    pub intensity: RGBSpectrumf,
    // cosine of the total cone half-angle
    cos_total: Float,
    // cosine of the half-angle where falloff starts
    cos_falloff: Float,
}

impl SpotLight {
    /// construction, angles in degrees with
    /// `0 < falloff_deg < total_deg < 180`
    pub fn new(
        position: Point3f,
        towards: Vector3f,
        intensity: RGBSpectrumf,
        total_deg: Float,
        falloff_deg: Float,
    ) -> SpotLight {
        SpotLight {
            position,
            axis: towards.normalize(),
            intensity,
            cos_total: Rad::from(Deg(total_deg)).0.cos(),
            cos_falloff: Rad::from(Deg(falloff_deg)).0.cos(),
        }
    }

    #[inline]
    pub fn angles_valid(&self) -> bool {
        self.cos_total < self.cos_falloff && self.cos_total > -1.0 && self.cos_falloff < 1.0
    }

    // falloff for a unit direction leaving the light
    fn falloff(&self, dir: Vector3f) -> Float {
        let cos_theta = dir.dot(self.axis);
        if cos_theta < self.cos_total {
            0.0
        } else if cos_theta > self.cos_falloff {
            1.0
        } else {
            let delta = (cos_theta - self.cos_total) / (self.cos_falloff - self.cos_total);
            let delta2 = delta * delta;
            delta2 * delta2
        }
    }

    pub fn sample(&self, ref_point: Point3f) -> LightSample {
        let delta = self.position - ref_point;
        let dist2 = delta.magnitude2();
        if dist2 < DEGENERATE_EPS {
            return LightSample::invalid(ref_point);
        }
        let distance = dist2.sqrt();
        let wi = delta / distance;
        LightSample {
            point: self.position,
            normal: self.axis,
            wi,
            distance,
            radiance: self.intensity * self.falloff(-wi) / dist2,
            pdf: 1.0,
        }
    }

    pub fn sample_emission(&self, u_dir: Point2f) -> EmissionSample {
        let basis = Onb::from_w(self.axis);
        let dir = basis.local(sample::sample_uniform_cone(u_dir, self.cos_total));
        EmissionSample {
            point: self.position,
            normal: self.axis,
            dir,
            radiance: self.intensity * self.falloff(dir),
            pdf_pos: 1.0,
            pdf_dir: sample::pdf_uniform_cone(self.cos_total),
        }
    }

    pub fn emission_pdf(&self, dir: Vector3f) -> (Float, Float) {
        let pdf_dir = if dir.dot(self.axis) >= self.cos_total {
            sample::pdf_uniform_cone(self.cos_total)
        } else {
            0.0
        };
        (0.0, pdf_dir)
    }

    /// returns an estimation of total power of this light
    pub fn power(&self) -> RGBSpectrumf {
        self.intensity
            * (2.0 * float::pi())
            * (1.0 - 0.5 * (self.cos_falloff + self.cos_total))
    }
}
