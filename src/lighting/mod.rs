// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Lighting Interface.
//!
//! Every light answers the same four queries: a direct-lighting sample
//! towards a receiver, the matching solid-angle pdf, an emission sample
//! leaving the light, and the matching (area, direction) pdfs. The
//! uniform surface keeps the integrator agnostic of the concrete kind
//! and leaves room for bidirectional strategies.

use crate::geometry::prelude::*;
use crate::spectrum::RGBSpectrumf;
use bitflags::bitflags;

pub use self::arealights::AreaLight;
pub use self::infinite::{GradientInfinite, UniformInfinite};
pub use self::pointlights::{PointLight, SpotLight};
pub use self::selector::{LightSelector, SelectorPolicy};

bitflags! {
    /// Classification of a light's distribution
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LightFlags: u32 {
        const DELTA_POSITION = 0x1;
        const DELTA_DIRECTION = 0x2;
        const AREA = 0x4;
        const INFINITE = 0x8;
    }
}

impl LightFlags {
    /// test if the light is a delta light
    #[inline]
    pub fn is_delta(self) -> bool {
        self.intersects(LightFlags::DELTA_POSITION | LightFlags::DELTA_DIRECTION)
    }
}

/// The sphere bounding the finite part of the scene; infinite lights
/// need it to emit from "behind everything".
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct WorldSphere {
    pub center: Point3f,
    pub radius: Float,
}

impl WorldSphere {
    /// The empty world: both center and radius zero.
    #[inline]
    pub fn zero() -> WorldSphere {
        WorldSphere {
            center: Point3f::new(0.0, 0.0, 0.0),
            radius: 0.0,
        }
    }
}

impl Default for WorldSphere {
    #[inline]
    fn default() -> WorldSphere {
        WorldSphere::zero()
    }
}

/// Results of a direct-lighting sample
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct LightSample {
    /// sampled point on the light
    pub point: Point3f,
    /// surface normal at that point
    pub normal: Vector3f,
    /// unit direction from the receiver towards the light
    pub wi: Vector3f,
    /// distance between receiver and light point
    pub distance: Float,
    /// radiance arriving along `-wi`
    pub radiance: RGBSpectrumf,
    /// solid-angle pdf of this sample; `1` for delta lights
    pub pdf: Float,
}

impl LightSample {
    /// A sample that contributes nothing.
    pub fn invalid(at: Point3f) -> LightSample {
        LightSample {
            point: at,
            normal: Vector3f::unit_z(),
            wi: Vector3f::unit_z(),
            distance: 0.0,
            radiance: RGBSpectrumf::black(),
            pdf: 0.0,
        }
    }
}

/// Results of an emission sample
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct EmissionSample {
    /// origin of the emitted ray
    pub point: Point3f,
    /// surface normal at the origin
    pub normal: Vector3f,
    /// unit direction the emission travels
    pub dir: Vector3f,
    /// emitted radiance
    pub radiance: RGBSpectrumf,
    /// area pdf of the origin
    pub pdf_pos: Float,
    /// solid-angle pdf of the direction
    pub pdf_dir: Float,
}

/// A light
#[derive(Clone, Debug)]
pub enum Light {
    Area(AreaLight),
    Point(PointLight),
    Spot(SpotLight),
    InfiniteUniform(UniformInfinite),
    InfiniteGradient(GradientInfinite),
}

impl Light {
    /// return the flags of the light
    pub fn flags(&self) -> LightFlags {
        match self {
            Light::Area(_) => LightFlags::AREA,
            Light::Point(_) => LightFlags::DELTA_POSITION,
            Light::Spot(_) => LightFlags::DELTA_POSITION,
            Light::InfiniteUniform(_) => LightFlags::INFINITE,
            Light::InfiniteGradient(_) => LightFlags::INFINITE,
        }
    }

    /// test if the light is delta
    #[inline]
    pub fn is_delta(&self) -> bool {
        self.flags().is_delta()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.flags().contains(LightFlags::INFINITE)
    }

    /// Sample a direction towards the light from `ref_point`.
    pub fn sample(&self, ref_point: Point3f, normal: Vector3f, u: Point2f) -> LightSample {
        match self {
            Light::Area(l) => l.sample(ref_point, u),
            Light::Point(l) => l.sample(ref_point),
            Light::Spot(l) => l.sample(ref_point),
            Light::InfiniteUniform(l) => l.sample(ref_point, normal, u),
            Light::InfiniteGradient(l) => l.sample(ref_point, normal, u),
        }
    }

    /// Solid-angle pdf of sampling direction `dir` from `ref_point`;
    /// zero when a ray that way misses the light (always zero for
    /// delta lights).
    pub fn pdf(&self, ref_point: Point3f, dir: Vector3f) -> Float {
        match self {
            Light::Area(l) => l.pdf(ref_point, dir),
            Light::Point(_) | Light::Spot(_) => 0.0,
            Light::InfiniteUniform(_) | Light::InfiniteGradient(_) => {
                crate::sample::pdf_uniform_sphere()
            }
        }
    }

    /// Sample a ray leaving the light.
    pub fn sample_emission(&self, u_pos: Point2f, u_dir: Point2f) -> EmissionSample {
        match self {
            Light::Area(l) => l.sample_emission(u_pos, u_dir),
            Light::Point(l) => l.sample_emission(u_dir),
            Light::Spot(l) => l.sample_emission(u_dir),
            Light::InfiniteUniform(l) => l.sample_emission(u_pos, u_dir),
            Light::InfiniteGradient(l) => l.sample_emission(u_pos, u_dir),
        }
    }

    /// (area, direction) pdfs of an emitted ray.
    pub fn emission_pdf(&self, point: Point3f, dir: Vector3f) -> (Float, Float) {
        match self {
            Light::Area(l) => l.emission_pdf(point, dir),
            Light::Point(l) => l.emission_pdf(),
            Light::Spot(l) => l.emission_pdf(dir),
            Light::InfiniteUniform(l) => l.emission_pdf(),
            Light::InfiniteGradient(l) => l.emission_pdf(),
        }
    }

    /// Radiance carried by a ray that escaped the scene; zero for
    /// finite lights.
    pub fn le(&self, ray: &Ray) -> RGBSpectrumf {
        match self {
            Light::InfiniteUniform(l) => l.le(),
            Light::InfiniteGradient(l) => l.le_dir(ray.dir),
            _ => RGBSpectrumf::black(),
        }
    }

    /// returns an estimation of total power of this light
    pub fn power(&self) -> RGBSpectrumf {
        match self {
            Light::Area(l) => l.power(),
            Light::Point(l) => l.power(),
            Light::Spot(l) => l.power(),
            Light::InfiniteUniform(l) => l.power(),
            Light::InfiniteGradient(l) => l.power(),
        }
    }

    /// Install the finite-world bounds; only infinite lights care.
    pub(crate) fn preprocess(&mut self, world: WorldSphere) {
        match self {
            Light::InfiniteUniform(l) => l.set_world(world),
            Light::InfiniteGradient(l) => l.set_world(world),
            _ => {}
        }
    }
}

pub mod arealights;
pub mod pointlights;
pub mod infinite;
pub mod selector;
pub mod prelude;
#[cfg(test)]
mod tests;
