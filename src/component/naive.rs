// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Naive aggregation of components

use super::{Bounded, Primitive};
use crate::geometry::prelude::*;
use std::sync::Arc;

/// A linear-scan aggregate. The brute-force reference the BVH is
/// checked against; also fine for trivially small scenes.
#[derive(Clone, Default)]
pub struct Naive {
    pub elements: Vec<Arc<Primitive>>,
}

impl Naive {
    pub fn new(elements: Vec<Arc<Primitive>>) -> Naive {
        Naive { elements }
    }

    /// Closest hit over every element.
    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let mut closest = t_max;
        let mut best = None;
        for element in &self.elements {
            if let Some(hit) = element.hit(ray, t_min, closest) {
                closest = hit.t;
                best = Some(hit);
            }
        }
        best
    }

    pub fn bounding_box(&self) -> BBox3f {
        let mut iter = self.elements.iter();
        let first = match iter.next() {
            Some(e) => e.bounding_box(),
            None => return BBox3f::from_point(Point3f::new(0.0, 0.0, 0.0)),
        };
        iter.fold(first, |b, e| b.union(&e.bounding_box()))
    }
}
