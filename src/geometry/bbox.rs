// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 3D axis-aligned bounding box

use super::float;
use super::foundamental::*;
use super::ray::Ray;

/// A 3D axis-aligned bounding box.
///
/// Invariant: `pmin[i] <= pmax[i]` for every axis.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct BBox3f {
    /// min corner of the bounding box
    pub pmin: Point3f,
    /// max corner of the bounding box
    pub pmax: Point3f,
}

impl BBox3f {
    /// Construct a new bounding box marked by two corner vertice
    #[inline]
    pub fn new(p: Point3f, q: Point3f) -> BBox3f {
        BBox3f {
            pmin: Point3f::new(p.x.min(q.x), p.y.min(q.y), p.z.min(q.z)),
            pmax: Point3f::new(p.x.max(q.x), p.y.max(q.y), p.z.max(q.z)),
        }
    }

    /// The degenerate box containing only `p`
    #[inline]
    pub fn from_point(p: Point3f) -> BBox3f {
        BBox3f { pmin: p, pmax: p }
    }

    /// Extend the bounding box with `p`, return the resultant new bbox
    #[inline]
    pub fn extend(&self, p: Point3f) -> BBox3f {
        BBox3f {
            pmin: Point3f::new(self.pmin.x.min(p.x), self.pmin.y.min(p.y), self.pmin.z.min(p.z)),
            pmax: Point3f::new(self.pmax.x.max(p.x), self.pmax.y.max(p.y), self.pmax.z.max(p.z)),
        }
    }

    /// Return the union of two bounding boxes
    #[inline]
    pub fn union(&self, other: &BBox3f) -> BBox3f {
        BBox3f {
            pmin: Point3f::new(
                self.pmin.x.min(other.pmin.x),
                self.pmin.y.min(other.pmin.y),
                self.pmin.z.min(other.pmin.z),
            ),
            pmax: Point3f::new(
                self.pmax.x.max(other.pmax.x),
                self.pmax.y.max(other.pmax.y),
                self.pmax.z.max(other.pmax.z),
            ),
        }
    }

    /// Return if `self` contains `p`
    #[inline]
    pub fn contain(&self, p: Point3f) -> bool {
        (p.x <= self.pmax.x && p.x >= self.pmin.x)
            && (p.y <= self.pmax.y && p.y >= self.pmin.y)
            && (p.z <= self.pmax.z && p.z >= self.pmin.z)
    }

    /// Return if `other` lies entirely inside `self`
    #[inline]
    pub fn encloses(&self, other: &BBox3f) -> bool {
        self.contain(other.pmin) && self.contain(other.pmax)
    }

    /// Return the diagonal vector, from `pmin` to `pmax`
    #[inline]
    pub fn diagonal(&self) -> Vector3f {
        self.pmax - self.pmin
    }

    /// Return the center of the bounding box
    #[inline]
    pub fn centroid(&self) -> Point3f {
        self.pmin.midpoint(self.pmax)
    }

    /// Return the `i`th corner vertex
    pub fn corner(&self, i: usize) -> Point3f {
        assert!(i < 8, "index out of bound");
        let x = if (i & 1) == 0 { self.pmin.x } else { self.pmax.x };
        let y = if (i & 2) == 0 { self.pmin.y } else { self.pmax.y };
        let z = if (i & 4) == 0 { self.pmin.z } else { self.pmax.z };
        Point3f::new(x, y, z)
    }

    /// Return the surface area of the bounding box
    #[inline]
    pub fn surface_area(&self) -> Float {
        let d = self.diagonal();
        2.0 * (d.x * d.y + d.y * d.z + d.z * d.x)
    }

    /// Return the index of the axis along which the box extends furthest
    #[inline]
    pub fn max_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }

    /// Slab-method intersection, returning the parametric interval the
    /// ray spends inside the box, clipped against `[t_min, t_max]`.
    ///
    /// Rays with `|dir[axis]| < 1e-8` are treated as parallel to that
    /// slab: they intersect iff their origin lies between its planes.
    pub fn intersect_ray(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<(Float, Float)> {
        let mut t0 = t_min;
        let mut t1 = t_max;
        for axis in 0..3 {
            let d = ray.dir[axis];
            let o = ray.origin[axis];
            if d.abs() < float::DEGENERATE_EPS {
                if o < self.pmin[axis] || o > self.pmax[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut near = (self.pmin[axis] - o) * inv;
            let mut far = (self.pmax[axis] - o) * inv;
            if near > far {
                core::mem::swap(&mut near, &mut far);
            }
            t0 = t0.max(near);
            t1 = t1.min(far);
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }

    /// Boolean form of [`BBox3f::intersect_ray`]
    #[inline]
    pub fn hit(&self, ray: &Ray, t_min: Float, t_max: Float) -> bool {
        self.intersect_ray(ray, t_min, t_max).is_some()
    }
}
