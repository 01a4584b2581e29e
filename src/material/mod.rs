// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Materials: scattering, BRDF evaluation and pdfs.
//!
//! A closed family dispatched by a match so BRDF evaluation inlines on
//! the hot path. Every material satisfies reciprocity and, excluding
//! emitters, conserves energy. Directions handed to [`Material::evaluate`]
//! and [`Material::pdf`] point away from the surface: `wo` towards the
//! viewer, `wi` towards the light.

use crate::geometry::prelude::*;
use crate::sample::Sampler;
use crate::spectrum::RGBSpectrumf;

pub use self::dielectric::Dielectric;
pub use self::emissive::Emissive;
pub use self::lambertian::Lambertian;
pub use self::layered::Layered;
pub use self::metal::Metal;
pub use self::mix::Mix;

/// The outcome of sampling a material's scattering distribution.
///
/// `pdf == 0` marks a specular delta distribution: the scattered
/// direction is the only one possible and `attenuation` is the full
/// throughput factor. For smooth lobes the caller divides
/// `evaluate() * cos` by `pdf` instead.
#[derive(Clone, Debug)]
pub struct ScatterResult {
    pub scattered: Ray,
    pub attenuation: RGBSpectrumf,
    pub pdf: Float,
}

impl ScatterResult {
    #[inline]
    pub fn is_specular(&self) -> bool {
        self.pdf == 0.0
    }
}

/// A surface material
#[derive(Clone, Debug)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    Emissive(Emissive),
    Layered(Layered),
    Mix(Mix),
}

impl Material {
    #[inline]
    pub fn lambertian(albedo: RGBSpectrumf) -> Material {
        Material::Lambertian(Lambertian::new(albedo))
    }

    #[inline]
    pub fn metal(albedo: RGBSpectrumf, fuzz: Float) -> Material {
        Material::Metal(Metal::new(albedo, fuzz))
    }

    #[inline]
    pub fn dielectric(ior: Float) -> Material {
        Material::Dielectric(Dielectric::new(ior))
    }

    #[inline]
    pub fn emissive(radiance: RGBSpectrumf) -> Material {
        Material::Emissive(Emissive::new(radiance))
    }

    #[inline]
    pub fn layered(outer: Material, inner: Material) -> Material {
        Material::Layered(Layered::new(outer, inner))
    }

    #[inline]
    pub fn mix(a: Material, b: Material, t: Float) -> Material {
        Material::Mix(Mix::new(a, b, t))
    }

    /// Sample a scattered ray at the hit. `None` means the path ends
    /// here (emitters and absorbed samples).
    pub fn scatter(
        &self,
        ray: &Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterResult> {
        match self {
            Material::Lambertian(m) => m.scatter(hit, sampler),
            Material::Metal(m) => m.scatter(ray, hit, sampler),
            Material::Dielectric(m) => m.scatter(ray, hit, sampler),
            Material::Emissive(_) => None,
            Material::Layered(m) => m.scatter(ray, hit, sampler),
            Material::Mix(m) => m.scatter(ray, hit, sampler),
        }
    }

    /// Evaluate the BRDF for the pair of directions; zero for
    /// directions in the wrong hemisphere of an opaque material, and
    /// zero for delta distributions.
    pub fn evaluate(&self, wo: Vector3f, wi: Vector3f, normal: Vector3f) -> RGBSpectrumf {
        match self {
            Material::Lambertian(m) => m.evaluate(wo, wi, normal),
            Material::Metal(_) => RGBSpectrumf::black(),
            Material::Dielectric(_) => RGBSpectrumf::black(),
            Material::Emissive(_) => RGBSpectrumf::black(),
            Material::Layered(m) => m.evaluate(wo, wi, normal),
            Material::Mix(m) => m.evaluate(wo, wi, normal),
        }
    }

    /// Pdf of sampling `wi` given `wo`, and whether the distribution is
    /// a delta (deltas report a pdf of zero).
    pub fn pdf(&self, wo: Vector3f, wi: Vector3f, normal: Vector3f) -> (Float, bool) {
        match self {
            Material::Lambertian(m) => (m.pdf(wo, wi, normal), false),
            Material::Metal(_) => (0.0, true),
            Material::Dielectric(_) => (0.0, true),
            Material::Emissive(_) => (0.0, false),
            Material::Layered(m) => m.pdf(wo, wi, normal),
            Material::Mix(m) => m.pdf(wo, wi, normal),
        }
    }

    /// Emitted radiance along `-ray.dir`; zero for everything but
    /// front-face hits of emissive materials.
    pub fn emit(&self, ray: &Ray, hit: &HitRecord) -> RGBSpectrumf {
        match self {
            Material::Emissive(m) => m.emit(ray, hit),
            Material::Mix(m) => m.emit(ray, hit),
            _ => RGBSpectrumf::black(),
        }
    }

    /// Whether sampling this material can only produce delta
    /// distributions (next-event estimation is pointless there).
    pub fn is_delta(&self) -> bool {
        match self {
            Material::Lambertian(_) => false,
            Material::Metal(_) => true,
            Material::Dielectric(_) => true,
            Material::Emissive(_) => false,
            Material::Layered(m) => m.is_delta(),
            Material::Mix(m) => m.is_delta(),
        }
    }

    pub fn is_emissive(&self) -> bool {
        match self {
            Material::Emissive(_) => true,
            Material::Mix(m) => m.is_emissive(),
            _ => false,
        }
    }
}

pub mod fresnel;
pub mod lambertian;
pub mod metal;
pub mod dielectric;
pub mod emissive;
pub mod layered;
pub mod mix;
pub mod prelude;
