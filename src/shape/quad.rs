// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::prelude::*;

/// A parallelogram spanned by `span_u` and `span_v` from `corner`.
/// One-sided; the front face is the `span_u x span_v` side.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Quad {
    pub corner: Point3f,
    pub span_u: Vector3f,
    pub span_v: Vector3f,
    /// unit front-face normal
    pub normal: Vector3f,
    // n / (n . n), for barycentric projection
    w: Vector3f,
    area: Float,
    // plane offset, normal . corner
    d: Float,
}

impl Quad {
    /// Construction. Degeneracy (`|span_u x span_v| == 0`) is reported
    /// at scene validation; such a quad never intersects.
    pub fn new(corner: Point3f, span_u: Vector3f, span_v: Vector3f) -> Quad {
        let n = span_u.cross(span_v);
        let area = n.magnitude();
        let normal = if area > 0.0 {
            n / area
        } else {
            Vector3f::unit_z()
        };
        let w = if area > 0.0 {
            n / n.magnitude2()
        } else {
            Vector3f::new(0.0, 0.0, 0.0)
        };
        Quad {
            corner,
            span_u,
            span_v,
            normal,
            w,
            area,
            d: normal.dot(corner.to_vec()),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.area < DEGENERATE_EPS
    }

    pub(crate) fn hit(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<SurfaceHit> {
        if self.is_degenerate() {
            return None;
        }
        let denom = self.normal.dot(ray.dir);
        if denom.abs() < DEGENERATE_EPS {
            return None;
        }
        let t = (self.d - self.normal.dot(ray.origin.to_vec())) / denom;
        if t < t_min || t > t_max {
            return None;
        }
        let planar = ray.at(t) - self.corner;
        let alpha = self.w.dot(planar.cross(self.span_v));
        let beta = self.w.dot(self.span_u.cross(planar));
        if !(0.0..=1.0).contains(&alpha) || !(0.0..=1.0).contains(&beta) {
            return None;
        }
        Some(SurfaceHit::new(ray, self.normal, t, alpha, beta))
    }

    pub fn bounding_box(&self) -> BBox3f {
        let b = BBox3f::new(self.corner, self.corner + self.span_u + self.span_v)
            .extend(self.corner + self.span_u)
            .extend(self.corner + self.span_v);
        // padded so axis-aligned quads keep a nonzero slab
        let pad = Vector3f::new(1e-4, 1e-4, 1e-4);
        BBox3f::new(b.pmin - pad, b.pmax + pad)
    }

    #[inline]
    pub fn area(&self) -> Float {
        self.area
    }

    #[inline]
    pub fn sample_surface(&self, u: Point2f) -> (Point3f, Vector3f) {
        (self.corner + self.span_u * u.x + self.span_v * u.y, self.normal)
    }
}
