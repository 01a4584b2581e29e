// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A path tracing integrator
//!
//! Unidirectional path tracing with next-event estimation, the power
//! heuristic combining the light and BxDF strategies, and Russian
//! roulette termination. Single-strategy modes exist so the two halves
//! of the estimator can be measured in isolation.

use super::scene::Scene;
use super::SamplingConfig;
use crate::geometry::prelude::*;
use crate::sample::{power_heuristic, Sampler};
use crate::spectrum::RGBSpectrumf;

/// How direct lighting is estimated.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LightStrategy {
    /// next-event estimation and BxDF sampling, weighted by the power
    /// heuristic
    Mis,
    /// shadow rays only; emission found by BxDF bounces is dropped
    /// (except through deltas, which shadow rays cannot cover)
    NeeOnly,
    /// BxDF bounces only, no shadow rays
    BxdfOnly,
}

/// A radiance contribution belonging to some other pixel; the driver
/// maps it back through the camera. The path tracer itself never emits
/// any, the interface exists for bidirectional strategies.
#[derive(Clone, Debug)]
pub struct SplatRay {
    pub ray: Ray,
    pub radiance: RGBSpectrumf,
}

/// A path tracing integrator
#[derive(Copy, Clone, Debug)]
pub struct PathTracer {
    pub max_depth: u32,
    pub rr_min_bounces: u32,
    pub strategy: LightStrategy,
}

impl PathTracer {
    pub fn new(max_depth: u32, rr_min_bounces: u32, strategy: LightStrategy) -> PathTracer {
        PathTracer {
            max_depth,
            rr_min_bounces,
            strategy,
        }
    }

    pub fn from_config(config: &SamplingConfig) -> PathTracer {
        PathTracer::new(
            config.max_depth,
            config.russian_roulette_min_bounces,
            LightStrategy::Mis,
        )
    }

    /// Estimated radiance arriving along `ray`, plus contributions to
    /// other pixels (always empty for the path tracer).
    pub fn radiance(
        &self,
        primary: Ray,
        scene: &Scene,
        sampler: &mut dyn Sampler,
    ) -> (RGBSpectrumf, Vec<SplatRay>) {
        let mut l = RGBSpectrumf::black();
        let mut beta = RGBSpectrumf::grey_scale(1.0);
        let mut ray = primary;
        let mut prev_bxdf_pdf = float::infinity();
        let mut prev_delta = true;

        for bounce in 0..self.max_depth {
            let hit = match scene.intersect(&ray, SELF_INTERSECT_EPS, float::infinity()) {
                Some(hit) => hit,
                None => {
                    l += beta * self.escaped(scene, &ray, bounce, prev_bxdf_pdf, prev_delta);
                    break;
                }
            };

            // emission at the hit, weighted against the path that found it
            let emitted = hit.material.emit(&ray, &hit);
            if !emitted.is_black() {
                let weight = if bounce == 0 || prev_delta {
                    1.0
                } else {
                    match self.strategy {
                        LightStrategy::Mis => {
                            let light_pdf = hit
                                .primitive
                                .and_then(|p| scene.light_index_of(p))
                                .map(|i| {
                                    scene.lights()[i].pdf(ray.origin, ray.dir)
                                        * scene.selector().probability(i)
                                })
                                .unwrap_or(0.0);
                            power_heuristic(1, prev_bxdf_pdf, 1, light_pdf)
                        }
                        LightStrategy::BxdfOnly => 1.0,
                        LightStrategy::NeeOnly => 0.0,
                    }
                };
                l += beta * emitted * weight;
            }

            // next-event estimation; pointless at deltas and emitters
            if self.strategy != LightStrategy::BxdfOnly
                && !scene.lights().is_empty()
                && !hit.material.is_delta()
                && !hit.material.is_emissive()
            {
                l += beta * self.direct_light(scene, &ray, &hit, sampler);
            }

            let scatter = match hit.material.scatter(&ray, &hit, sampler) {
                Some(s) => s,
                None => break,
            };
            if scatter.is_specular() {
                beta *= scatter.attenuation;
                prev_delta = true;
                prev_bxdf_pdf = float::infinity();
            } else {
                if scatter.pdf < DEGENERATE_EPS {
                    break;
                }
                let wo = -ray.dir.normalize();
                let wi = scatter.scattered.dir;
                let f = hit.material.evaluate(wo, wi, hit.normal);
                if f.is_black() {
                    break;
                }
                beta *= f * wi.dot(hit.normal).abs() / scatter.pdf;
                prev_delta = false;
                prev_bxdf_pdf = scatter.pdf;
            }
            ray = scatter.scattered;

            if bounce >= self.rr_min_bounces {
                let q = beta.max_component().min(0.95);
                if sampler.next() >= q {
                    break;
                }
                beta /= q;
            }
        }

        (l, Vec::new())
    }

    // radiance a ray that left the scene picks up
    fn escaped(
        &self,
        scene: &Scene,
        ray: &Ray,
        bounce: u32,
        prev_bxdf_pdf: Float,
        prev_delta: bool,
    ) -> RGBSpectrumf {
        let mut le = RGBSpectrumf::black();
        for (i, light) in scene.lights().iter().enumerate() {
            if !light.is_infinite() {
                continue;
            }
            let radiance = light.le(ray);
            if radiance.is_black() {
                continue;
            }
            let weight = if bounce == 0 || prev_delta {
                1.0
            } else {
                match self.strategy {
                    LightStrategy::Mis => {
                        let light_pdf =
                            light.pdf(ray.origin, ray.dir) * scene.selector().probability(i);
                        power_heuristic(1, prev_bxdf_pdf, 1, light_pdf)
                    }
                    LightStrategy::BxdfOnly => 1.0,
                    LightStrategy::NeeOnly => 0.0,
                }
            };
            le += radiance * weight;
        }
        // a gradient background is not a sampled light: full weight
        le + scene.background().shade(ray)
    }

    // one next-event estimation sample
    fn direct_light(
        &self,
        scene: &Scene,
        ray: &Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> RGBSpectrumf {
        let (index, sel_pdf) = match scene.selector().select(sampler.next()) {
            Some(pick) => pick,
            None => return RGBSpectrumf::black(),
        };
        let light = &scene.lights()[index];
        let ls = light.sample(hit.point, hit.normal, sampler.next_2d());
        if ls.pdf < DEGENERATE_EPS || ls.radiance.is_black() {
            return RGBSpectrumf::black();
        }
        let wo = -ray.dir.normalize();
        let f = hit.material.evaluate(wo, ls.wi, hit.normal);
        if f.is_black() {
            return RGBSpectrumf::black();
        }
        if scene.occluded(hit.point, ls.wi, ls.distance) {
            return RGBSpectrumf::black();
        }
        let weight = if light.is_delta() {
            1.0
        } else {
            match self.strategy {
                LightStrategy::Mis => {
                    let (bxdf_pdf, _) = hit.material.pdf(wo, ls.wi, hit.normal);
                    power_heuristic(1, ls.pdf, 1, bxdf_pdf)
                }
                _ => 1.0,
            }
        };
        let cos = ls.wi.dot(hit.normal).abs();
        f * ls.radiance * (cos * weight / (sel_pdf * ls.pdf))
    }
}
