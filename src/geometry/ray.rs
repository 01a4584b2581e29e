// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ray for ray-tracing

use super::foundamental::*;

/// A semi-infinite line specified by its `origin` and `dir`ection.
///
/// The direction need not be unit length at construction, but
/// intersection routines treat it as such.
#[derive(PartialEq, Copy, Clone, Debug)]
#[must_use]
pub struct Ray {
    pub origin: Point3f,
    pub dir: Vector3f,
}

impl Ray {
    /// Construct a new ray
    #[inline]
    pub fn new(origin: Point3f, dir: Vector3f) -> Ray {
        Ray { origin, dir }
    }

    /// Construct a normalized ray from `origin` towards `destination`,
    /// returning the distance between the two.
    #[inline]
    pub fn spawn(origin: Point3f, destination: Point3f) -> (Ray, Float) {
        let unnormed = destination - origin;
        let distance = unnormed.magnitude();
        (Ray::new(origin, unnormed / distance), distance)
    }

    /// Evaluate the point `t` units away from `self.origin`
    #[inline]
    pub fn at(&self, t: Float) -> Point3f {
        self.origin + self.dir * t
    }
}
