// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Surface intersection records

use super::foundamental::*;
use super::ray::Ray;
use crate::component::Primitive;
use crate::material::Material;

/// Geometric information at a ray/surface intersection, before any
/// material is attached.
///
/// The stored normal is oriented against the incoming ray
/// (`dot(ray.dir, normal) < 0`); `front_face` records whether that
/// orientation coincides with the geometric outward normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceHit {
    pub point: Point3f,
    pub normal: Vector3f,
    pub t: Float,
    pub u: Float,
    pub v: Float,
    pub front_face: bool,
}

impl SurfaceHit {
    /// Construction; flips `outward_normal` against the ray and sets
    /// `front_face` accordingly.
    #[inline]
    pub fn new(ray: &Ray, outward_normal: Vector3f, t: Float, u: Float, v: Float) -> SurfaceHit {
        let front_face = ray.dir.dot(outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        SurfaceHit {
            point: ray.at(t),
            normal,
            t,
            u,
            v,
            front_face,
        }
    }

    /// Attach the material (and owning primitive) that was hit.
    #[inline]
    pub fn into_record<'a>(
        self,
        material: &'a Material,
        primitive: Option<&'a Primitive>,
    ) -> HitRecord<'a> {
        HitRecord {
            point: self.point,
            normal: self.normal,
            t: self.t,
            u: self.u,
            v: self.v,
            front_face: self.front_face,
            material,
            primitive,
        }
    }
}

/// A full intersection record: geometry plus the material at the hit.
///
/// `primitive` refers back to the owning primitive when the hit came
/// from an aggregate; the integrator uses it to recognize surfaces that
/// back an area light.
#[derive(Copy, Clone)]
pub struct HitRecord<'a> {
    pub point: Point3f,
    pub normal: Vector3f,
    pub t: Float,
    pub u: Float,
    pub v: Float,
    pub front_face: bool,
    pub material: &'a Material,
    pub primitive: Option<&'a Primitive>,
}
