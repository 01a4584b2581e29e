// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::prelude::*;

// wide enough that the finite-world derivation ignores planes
const HALF_EXTENT: Float = 1e6;

/// An infinite plane through `point` with the given normal.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub point: Point3f,
    /// unit normal
    pub normal: Vector3f,
    basis: Onb,
    d: Float,
}

impl Plane {
    /// Construction; `normal` gets normalized.
    pub fn new(point: Point3f, normal: Vector3f) -> Plane {
        let basis = Onb::from_w(normal);
        Plane {
            point,
            normal: basis.w,
            basis,
            d: basis.w.dot(point.to_vec()),
        }
    }

    pub(crate) fn hit(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<SurfaceHit> {
        let denom = self.normal.dot(ray.dir);
        if denom.abs() < DEGENERATE_EPS {
            return None;
        }
        let t = (self.d - self.normal.dot(ray.origin.to_vec())) / denom;
        if t < t_min || t > t_max {
            return None;
        }
        // planar coordinates double as (u, v)
        let rel = ray.at(t) - self.point;
        let u = rel.dot(self.basis.u);
        let v = rel.dot(self.basis.v);
        Some(SurfaceHit::new(ray, self.normal, t, u, v))
    }

    pub fn bounding_box(&self) -> BBox3f {
        let e = Vector3f::new(HALF_EXTENT, HALF_EXTENT, HALF_EXTENT);
        BBox3f::new(self.point - e, self.point + e)
    }
}
