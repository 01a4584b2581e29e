// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::prelude::*;
use crate::sample;

/// A sphere.
///
/// A negative radius flips the outward normal inward; pairing a
/// negative-radius sphere inside a positive one builds a hollow glass
/// shell.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Sphere {
    pub center: Point3f,
    pub radius: Float,
}

impl Sphere {
    /// Construct a new sphere
    #[inline]
    pub fn new(center: Point3f, radius: Float) -> Sphere {
        Sphere { center, radius }
    }

    pub(crate) fn hit(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<SurfaceHit> {
        let oc = ray.origin - self.center;
        let a = ray.dir.magnitude2();
        let half_b = oc.dot(ray.dir);
        let c = oc.magnitude2() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();
        let mut root = (-half_b - sqrtd) / a;
        if root < t_min || root > t_max {
            root = (-half_b + sqrtd) / a;
            if root < t_min || root > t_max {
                return None;
            }
        }
        let point = ray.at(root);
        let outward = (point - self.center) / self.radius;
        let (u, v) = Sphere::surface_uv(outward);
        Some(SurfaceHit::new(ray, outward, root, u, v))
    }

    // (u, v) from the unit outward direction: u wraps phi, v spans theta.
    fn surface_uv(d: Vector3f) -> (Float, Float) {
        let theta = float::clamp(-d.y, -1.0, 1.0).acos();
        let phi = (-d.z).atan2(d.x) + float::pi();
        (phi / (2.0 * float::pi()), theta / float::pi())
    }

    #[inline]
    pub fn bounding_box(&self) -> BBox3f {
        let r = self.radius.abs();
        let rv = Vector3f::new(r, r, r);
        BBox3f::new(self.center - rv, self.center + rv)
    }

    #[inline]
    pub fn area(&self) -> Float {
        4.0 * float::pi() * self.radius * self.radius
    }

    pub fn sample_surface(&self, u: Point2f) -> (Point3f, Vector3f) {
        let d = sample::sample_uniform_sphere(u);
        let p = self.center + d * self.radius.abs();
        (p, self.normal_at(p))
    }

    #[inline]
    pub fn normal_at(&self, p: Point3f) -> Vector3f {
        (p - self.center) / self.radius
    }
}
