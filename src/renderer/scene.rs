// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A scene in the world.
//!
//! Construction validates the description, then preprocesses it into
//! the immutable form the workers share: primitives wrapped in `Arc`
//! (shared read-only with the BVH and area lights), the BVH itself, the
//! finite-world sphere, and the light selector. Nothing here mutates
//! after `Scene::new` returns.

use super::error::ConfigError;
use crate::component::{Bvh, Primitive};
use crate::filming::Camera;
use crate::geometry::prelude::*;
use crate::lighting::prelude::*;
use crate::material::Material;
use crate::shape::Shape;
use crate::spectrum::RGBSpectrumf;
use log::warn;
use std::sync::Arc;

/// What a ray that escapes every surface sees, when no infinite light
/// provides the environment.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Background {
    Black,
    /// vertical gradient between two colors
    Gradient {
        top: RGBSpectrumf,
        bottom: RGBSpectrumf,
    },
}

impl Background {
    /// Shade an escaped ray.
    pub fn shade(&self, ray: &Ray) -> RGBSpectrumf {
        match self {
            Background::Black => RGBSpectrumf::black(),
            Background::Gradient { top, bottom } => {
                let t = 0.5 * (ray.dir.normalize().y + 1.0);
                bottom.lerp(top, t)
            }
        }
    }
}

/// Light description inside a scene description; area lights reference
/// their surface by index into the primitive list.
#[derive(Clone, Debug)]
pub enum LightSpec {
    Area { shape: usize },
    Point { position: Point3f, intensity: RGBSpectrumf },
    Spot {
        position: Point3f,
        towards: Vector3f,
        intensity: RGBSpectrumf,
        total_deg: Float,
        falloff_deg: Float,
    },
    InfiniteUniform { radiance: RGBSpectrumf },
    InfiniteGradient { top: RGBSpectrumf, bottom: RGBSpectrumf },
}

/// A scene in the world
pub struct Scene {
    primitives: Vec<Arc<Primitive>>,
    lights: Vec<Light>,
    selector: LightSelector,
    camera: Camera,
    background: Background,
    bvh: Bvh<Arc<Primitive>>,
    world: WorldSphere,
}

impl Scene {
    /// Validate and preprocess a scene description.
    pub fn new(
        primitives: Vec<Primitive>,
        lights: Vec<LightSpec>,
        camera: Camera,
        background: Background,
        policy: SelectorPolicy,
    ) -> Result<Scene, ConfigError> {
        for (i, prim) in primitives.iter().enumerate() {
            validate_material(&prim.material)
                .map_err(|what| ConfigError::InvalidMaterial(format!("primitive {}: {}", i, what)))?;
        }

        let primitives: Vec<Arc<Primitive>> = primitives.into_iter().map(Arc::new).collect();
        let world = finite_world(&primitives);
        let bvh = Bvh::build(primitives.clone());

        let mut resolved = Vec::with_capacity(lights.len());
        for (i, spec) in lights.into_iter().enumerate() {
            resolved.push(resolve_light(i, spec, &primitives)?);
        }
        for light in &mut resolved {
            light.preprocess(world);
        }
        if resolved.iter().any(|l| l.is_infinite()) && background != Background::Black {
            warn!("scene has both infinite lights and a gradient background; both will shine");
        }

        let selector = match policy {
            SelectorPolicy::Uniform => LightSelector::uniform(resolved.len()),
            SelectorPolicy::ByPower => LightSelector::by_power(&resolved),
            SelectorPolicy::Weighted(weights) => {
                if weights.len() != resolved.len() {
                    return Err(ConfigError::InvalidLightWeights(format!(
                        "{} weights for {} lights",
                        weights.len(),
                        resolved.len()
                    )));
                }
                if weights.iter().any(|w| *w < 0.0 || !w.is_finite()) {
                    return Err(ConfigError::InvalidLightWeights(
                        "weights must be non-negative and finite".to_string(),
                    ));
                }
                if weights.iter().sum::<Float>() <= 0.0 {
                    return Err(ConfigError::InvalidLightWeights(
                        "at least one weight must be positive".to_string(),
                    ));
                }
                LightSelector::weighted(weights)
            }
        };

        Ok(Scene {
            primitives,
            lights: resolved,
            selector,
            camera,
            background,
            bvh,
            world,
        })
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn background(&self) -> &Background {
        &self.background
    }

    #[inline]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    #[inline]
    pub fn selector(&self) -> &LightSelector {
        &self.selector
    }

    #[inline]
    pub fn primitives(&self) -> &[Arc<Primitive>] {
        &self.primitives
    }

    #[inline]
    pub fn world(&self) -> WorldSphere {
        self.world
    }

    /// Closest hit against the whole scene.
    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        self.bvh
            .closest_hit(ray, t_min, t_max, &mut |prim: &Arc<Primitive>, tn, tx| {
                prim.hit(ray, tn, tx).map(|h| (h.t, h))
            })
    }

    /// Whether anything blocks the segment from `origin` towards `dir`
    /// (unit length) up to `distance`, with self-intersection bias at
    /// both ends.
    pub fn occluded(&self, origin: Point3f, dir: Vector3f, distance: Float) -> bool {
        let ray = Ray::new(origin, dir);
        self.intersect(&ray, SELF_INTERSECT_EPS, distance - SELF_INTERSECT_EPS)
            .is_some()
    }

    /// Index of the area light backed by `primitive`, if any.
    pub fn light_index_of(&self, primitive: &Primitive) -> Option<usize> {
        self.lights.iter().position(|l| match l {
            Light::Area(area) => std::ptr::eq(area.primitive().as_ref(), primitive),
            _ => false,
        })
    }

    /// Combined solid-angle pdf of next-event estimation producing
    /// direction `dir` from `origin`: `sum_i pdf_i(dir) * sel_prob_i`.
    pub fn light_pdf(&self, origin: Point3f, dir: Vector3f) -> Float {
        self.lights
            .iter()
            .enumerate()
            .map(|(i, l)| l.pdf(origin, dir) * self.selector.probability(i))
            .sum()
    }
}

fn validate_material(material: &Material) -> Result<(), String> {
    match material {
        Material::Dielectric(d) => {
            if !(d.ior > 0.0 && d.ior.is_finite()) {
                return Err(format!("index of refraction must be positive, got {}", d.ior));
            }
        }
        Material::Metal(m) => {
            if !(m.fuzz >= 0.0 && m.fuzz.is_finite()) {
                return Err(format!("fuzz must be non-negative, got {}", m.fuzz));
            }
        }
        Material::Mix(m) => {
            if !(0.0..=1.0).contains(&m.t) {
                return Err(format!("mix factor must lie in [0, 1], got {}", m.t));
            }
            validate_material(&m.a)?;
            validate_material(&m.b)?;
        }
        Material::Layered(l) => {
            validate_material(&l.outer)?;
            validate_material(&l.inner)?;
        }
        Material::Lambertian(_) | Material::Emissive(_) => {}
    }
    Ok(())
}

fn resolve_light(
    index: usize,
    spec: LightSpec,
    primitives: &[Arc<Primitive>],
) -> Result<Light, ConfigError> {
    match spec {
        LightSpec::Area { shape } => {
            let prim = primitives.get(shape).ok_or_else(|| {
                ConfigError::DegenerateLight(format!(
                    "light {} references primitive {} of {}",
                    index,
                    shape,
                    primitives.len()
                ))
            })?;
            if !prim.material.is_emissive() {
                return Err(ConfigError::DegenerateLight(format!(
                    "light {}: primitive {} has no emissive material",
                    index, shape
                )));
            }
            match &prim.shape {
                Shape::Quad(q) if q.is_degenerate() => {
                    return Err(ConfigError::DegenerateLight(format!(
                        "light {}: quad with |span_u x span_v| = 0",
                        index
                    )));
                }
                Shape::Quad(_) | Shape::Disk(_) => {}
                Shape::Sphere(s) if s.radius.abs() > 0.0 => {}
                other => {
                    return Err(ConfigError::DegenerateLight(format!(
                        "light {}: unsupported area light surface {:?}",
                        index, other
                    )));
                }
            }
            Ok(Light::Area(AreaLight::new(Arc::clone(prim))))
        }
        LightSpec::Point { position, intensity } => {
            Ok(Light::Point(PointLight::new(position, intensity)))
        }
        LightSpec::Spot {
            position,
            towards,
            intensity,
            total_deg,
            falloff_deg,
        } => {
            let spot = SpotLight::new(position, towards, intensity, total_deg, falloff_deg);
            if !(0.0 < falloff_deg && falloff_deg < total_deg && total_deg < 180.0)
                || !spot.angles_valid()
            {
                return Err(ConfigError::DegenerateLight(format!(
                    "light {}: spot angles ({}, {})",
                    index, total_deg, falloff_deg
                )));
            }
            Ok(Light::Spot(spot))
        }
        LightSpec::InfiniteUniform { radiance } => {
            Ok(Light::InfiniteUniform(UniformInfinite::new(radiance)))
        }
        LightSpec::InfiniteGradient { top, bottom } => {
            Ok(Light::InfiniteGradient(GradientInfinite::new(top, bottom)))
        }
    }
}

/// Union of every primitive bound whose extents all stay below the
/// finite-world limit; zeros when nothing qualifies.
fn finite_world(primitives: &[Arc<Primitive>]) -> WorldSphere {
    let mut bound: Option<BBox3f> = None;
    for prim in primitives {
        let b = prim.shape.bounding_box();
        let d = b.diagonal();
        if d.x < FINITE_WORLD_LIMIT && d.y < FINITE_WORLD_LIMIT && d.z < FINITE_WORLD_LIMIT {
            bound = Some(match bound {
                Some(acc) => acc.union(&b),
                None => b,
            });
        }
    }
    match bound {
        Some(b) => {
            let center = b.centroid();
            WorldSphere {
                center,
                radius: (b.pmax - center).magnitude(),
            }
        }
        None => WorldSphere::zero(),
    }
}
