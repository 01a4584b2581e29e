// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Foundamental types

use cgmath;

pub type Float = f64;
pub type Point2f = cgmath::Point2<Float>;
pub type Point3f = cgmath::Point3<Float>;
pub type Vector2f = cgmath::Vector2<Float>;
pub type Vector3f = cgmath::Vector3<Float>;
pub type Matrix3f = cgmath::Matrix3<Float>;
pub use cgmath::{Point2, Point3, Vector2, Vector3, Matrix3, Rad, Deg};
pub use cgmath::prelude::*;

/// Mirror `w` about the normal `n`. Both in the same frame,
/// `n` assumed normalized.
#[inline]
pub fn reflect(w: Vector3f, n: Vector3f) -> Vector3f {
    w - 2.0 * w.dot(n) * n
}

/// Refract the unit vector `w` at a surface with normal `n` and
/// relative index of refraction `eta_ratio`. `None` on total internal
/// reflection.
#[inline]
pub fn refract(w: Vector3f, n: Vector3f, eta_ratio: Float) -> Option<Vector3f> {
    let cos_theta = (-w).dot(n).min(1.0);
    let sin2_theta = (1.0 - cos_theta * cos_theta).max(0.0);
    let sin2_refracted = eta_ratio * eta_ratio * sin2_theta;
    if sin2_refracted > 1.0 {
        return None;
    }
    let perp = eta_ratio * (w + cos_theta * n);
    let parallel = -(1.0 - perp.magnitude2()).abs().sqrt() * n;
    Some(perp + parallel)
}

/// An orthonormal basis around a normal direction `w`.
///
/// Built by picking any axis not parallel to `w`, normalizing the cross
/// product, and re-crossing to close the frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Onb {
    pub u: Vector3f,
    pub v: Vector3f,
    pub w: Vector3f,
}

impl Onb {
    /// Construction from a (not necessarily normalized) normal.
    pub fn from_w(n: Vector3f) -> Onb {
        let w = n.normalize();
        let a = if w.x.abs() > 0.9 {
            Vector3f::unit_y()
        } else {
            Vector3f::unit_x()
        };
        let v = w.cross(a).normalize();
        let u = v.cross(w);
        Onb { u, v, w }
    }

    /// Transform a vector given in this local frame into the parent frame.
    #[inline]
    pub fn local(&self, a: Vector3f) -> Vector3f {
        a.x * self.u + a.y * self.v + a.z * self.w
    }
}
