// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Infinite lights surrounding the whole scene.
//!
//! Direct sampling is uniform over the sphere of directions. Emission
//! sampling picks a direction, then a point on a disk of world radius
//! orthogonal to it, offset behind the scene; that needs the finite
//! world sphere, installed during scene preprocessing.

use super::{EmissionSample, LightSample, WorldSphere};
use crate::geometry::prelude::*;
use crate::sample;
use crate::spectrum::RGBSpectrumf;

// far past every finite surface, including "infinite" planes
const HORIZON: Float = 1e7;

fn sample_direction(ref_point: Point3f, u: Point2f, radiance: RGBSpectrumf) -> LightSample {
    let wi = sample::sample_uniform_sphere(u);
    LightSample {
        point: ref_point + wi * HORIZON,
        normal: -wi,
        wi,
        distance: HORIZON,
        radiance,
        pdf: sample::pdf_uniform_sphere(),
    }
}

fn sample_emission_impl(
    world: WorldSphere,
    u_pos: Point2f,
    u_dir: Point2f,
    radiance: RGBSpectrumf,
) -> EmissionSample {
    // a degenerate world still needs a positive disk
    let radius = world.radius.max(1.0);
    let dir = sample::sample_uniform_sphere(u_dir);
    let basis = Onb::from_w(dir);
    let disk = sample::sample_concentric_disk(u_pos);
    let point = world.center + (basis.u * disk.x + basis.v * disk.y - dir) * radius;
    EmissionSample {
        point,
        normal: dir,
        dir,
        radiance,
        pdf_pos: 1.0 / (float::pi() * radius * radius),
        pdf_dir: sample::pdf_uniform_sphere(),
    }
}

fn emission_pdf_impl(world: WorldSphere) -> (Float, Float) {
    let radius = world.radius.max(1.0);
    (
        1.0 / (float::pi() * radius * radius),
        sample::pdf_uniform_sphere(),
    )
}

/// An infinite light of constant radiance in every direction.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct UniformInfinite {
    pub radiance: RGBSpectrumf,
    world: WorldSphere,
}

impl UniformInfinite {
    #[inline]
    pub fn new(radiance: RGBSpectrumf) -> UniformInfinite {
        UniformInfinite {
            radiance,
            world: WorldSphere::zero(),
        }
    }

    #[inline]
    pub(crate) fn set_world(&mut self, world: WorldSphere) {
        self.world = world;
    }

    #[inline]
    pub fn le(&self) -> RGBSpectrumf {
        self.radiance
    }

    pub fn sample(&self, ref_point: Point3f, _normal: Vector3f, u: Point2f) -> LightSample {
        sample_direction(ref_point, u, self.radiance)
    }

    pub fn sample_emission(&self, u_pos: Point2f, u_dir: Point2f) -> EmissionSample {
        sample_emission_impl(self.world, u_pos, u_dir, self.radiance)
    }

    #[inline]
    pub fn emission_pdf(&self) -> (Float, Float) {
        emission_pdf_impl(self.world)
    }

    /// returns an estimation of total power of this light
    pub fn power(&self) -> RGBSpectrumf {
        let radius = self.world.radius.max(1.0);
        self.radiance * (float::pi() * radius * radius)
    }
}

/// An infinite light interpolating between two colors along the
/// direction's vertical component.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GradientInfinite {
    pub top: RGBSpectrumf,
    pub bottom: RGBSpectrumf,
    world: WorldSphere,
}

impl GradientInfinite {
    #[inline]
    pub fn new(top: RGBSpectrumf, bottom: RGBSpectrumf) -> GradientInfinite {
        GradientInfinite {
            top,
            bottom,
            world: WorldSphere::zero(),
        }
    }

    #[inline]
    pub(crate) fn set_world(&mut self, world: WorldSphere) {
        self.world = world;
    }

    /// Radiance seen by an escaped ray travelling along `dir`.
    pub fn le_dir(&self, dir: Vector3f) -> RGBSpectrumf {
        let t = 0.5 * (dir.normalize().y + 1.0);
        self.bottom.lerp(&self.top, t)
    }

    pub fn sample(&self, ref_point: Point3f, _normal: Vector3f, u: Point2f) -> LightSample {
        let mut ls = sample_direction(ref_point, u, RGBSpectrumf::black());
        ls.radiance = self.le_dir(ls.wi);
        ls
    }

    pub fn sample_emission(&self, u_pos: Point2f, u_dir: Point2f) -> EmissionSample {
        let mut es = sample_emission_impl(self.world, u_pos, u_dir, RGBSpectrumf::black());
        // emission travelling `dir` is what a ray escaping along `-dir` sees
        es.radiance = self.le_dir(-es.dir);
        es
    }

    #[inline]
    pub fn emission_pdf(&self) -> (Float, Float) {
        emission_pdf_impl(self.world)
    }

    /// returns an estimation of total power of this light
    pub fn power(&self) -> RGBSpectrumf {
        let radius = self.world.radius.max(1.0);
        let avg = (self.top + self.bottom) * 0.5;
        avg * (float::pi() * radius * radius)
    }
}
