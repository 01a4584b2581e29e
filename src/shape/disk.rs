// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::prelude::*;
use crate::sample;

/// A flat one-sided disk.
#[derive(Copy, Clone, Debug)]
pub struct Disk {
    pub center: Point3f,
    /// unit front-face normal
    pub normal: Vector3f,
    pub radius: Float,
    basis: Onb,
    // plane offset, normal . center
    d: Float,
}

impl Disk {
    /// Construction; `normal` gets normalized.
    pub fn new(center: Point3f, normal: Vector3f, radius: Float) -> Disk {
        let basis = Onb::from_w(normal);
        Disk {
            center,
            normal: basis.w,
            radius,
            basis,
            d: basis.w.dot(center.to_vec()),
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
        let rel = ray.at(t) - self.center;
        let r2 = rel.magnitude2();
        if r2 > self.radius * self.radius {
            return None;
        }
        // polar surface coordinates
        let x = rel.dot(self.basis.u);
        let y = rel.dot(self.basis.v);
        let u = r2.sqrt() / self.radius;
        let mut v = y.atan2(x) * 0.5 * float::frac_1_pi();
        if v < 0.0 {
            v += 1.0;
        }
        Some(SurfaceHit::new(ray, self.normal, t, u, v))
    }

    pub fn bounding_box(&self) -> BBox3f {
        // per-axis extent of a circle with normal n is r * sqrt(1 - n_i^2)
        let n = self.normal;
        let e = Vector3f::new(
            self.radius * (1.0 - n.x * n.x).max(0.0).sqrt() + 1e-4,
            self.radius * (1.0 - n.y * n.y).max(0.0).sqrt() + 1e-4,
            self.radius * (1.0 - n.z * n.z).max(0.0).sqrt() + 1e-4,
        );
        BBox3f::new(self.center - e, self.center + e)
    }

    #[inline]
    pub fn area(&self) -> Float {
        float::pi() * self.radius * self.radius
    }

    pub fn sample_surface(&self, u: Point2f) -> (Point3f, Vector3f) {
        let p = sample::sample_concentric_disk(u);
        let offset = self.basis.u * (p.x * self.radius) + self.basis.v * (p.y * self.radius);
        (self.center + offset, self.normal)
    }
}
