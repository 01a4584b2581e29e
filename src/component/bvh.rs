// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bounding volume hierarchy
//!
//! Built with the simple median scheme: longest axis of the node box,
//! split at the midpoint of that axis, shapes binned by bounding box
//! center. Chosen for build speed; SAH would produce better trees.

use crate::geometry::prelude::*;
use log::debug;
use std::sync::Arc;

/// Anything with an axis-aligned bounding box can live in a [`Bvh`].
pub trait Bounded {
    fn bounding_box(&self) -> BBox3f;
}

impl<T: Bounded + ?Sized> Bounded for Arc<T> {
    #[inline]
    fn bounding_box(&self) -> BBox3f {
        (**self).bounding_box()
    }
}

/// Nodes stop splitting at this many items.
pub const LEAF_THRESHOLD: usize = 8;

#[derive(Clone, Debug)]
enum BvhNode<T> {
    Leaf {
        bbox: BBox3f,
        items: Vec<T>,
    },
    Interior {
        bbox: BBox3f,
        left: Box<BvhNode<T>>,
        right: Box<BvhNode<T>>,
    },
}

impl<T> BvhNode<T> {
    #[inline]
    fn bbox(&self) -> &BBox3f {
        match self {
            BvhNode::Leaf { bbox, .. } => bbox,
            BvhNode::Interior { bbox, .. } => bbox,
        }
    }

    fn node_count(&self) -> usize {
        match self {
            BvhNode::Leaf { .. } => 1,
            BvhNode::Interior { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Closest-hit traversal. `intersect` reports a hit on one item as
    /// `(t, payload)`; `t_max` tightens after every accepted hit, and
    /// children are visited near first so the far subtree prunes
    /// against the tightened interval.
    fn visit<'a, H, F>(
        &'a self,
        ray: &Ray,
        t_min: Float,
        t_max: &mut Float,
        best: &mut Option<H>,
        intersect: &mut F,
    ) where
        F: FnMut(&'a T, Float, Float) -> Option<(Float, H)>,
    {
        if self.bbox().intersect_ray(ray, t_min, *t_max).is_none() {
            return;
        }
        match self {
            BvhNode::Leaf { items, .. } => {
                for item in items {
                    if let Some((t, h)) = intersect(item, t_min, *t_max) {
                        *t_max = t;
                        *best = Some(h);
                    }
                }
            }
            BvhNode::Interior { left, right, .. } => {
                let near_left = left.bbox().intersect_ray(ray, t_min, *t_max).map(|r| r.0);
                let near_right = right.bbox().intersect_ray(ray, t_min, *t_max).map(|r| r.0);
                let (first, second) = match (near_left, near_right) {
                    (Some(l), Some(r)) if r < l => (right, left),
                    (None, Some(_)) => (right, left),
                    _ => (left, right),
                };
                first.visit(ray, t_min, t_max, best, intersect);
                second.visit(ray, t_min, t_max, best, intersect);
            }
        }
    }
}

fn build_node<T: Bounded>(items: Vec<T>) -> BvhNode<T> {
    debug_assert!(!items.is_empty());
    let bbox = items
        .iter()
        .skip(1)
        .fold(items[0].bounding_box(), |b, it| b.union(&it.bounding_box()));
    if items.len() <= LEAF_THRESHOLD {
        return BvhNode::Leaf { bbox, items };
    }
    let axis = bbox.max_extent();
    let mid = 0.5 * (bbox.pmin[axis] + bbox.pmax[axis]);
    let (left, right): (Vec<T>, Vec<T>) = items
        .into_iter()
        .partition(|it| it.bounding_box().centroid()[axis] < mid);
    // a one-sided partition cannot make progress
    if left.is_empty() {
        return BvhNode::Leaf { bbox, items: right };
    }
    if right.is_empty() {
        return BvhNode::Leaf { bbox, items: left };
    }
    BvhNode::Interior {
        bbox,
        left: Box::new(build_node(left)),
        right: Box::new(build_node(right)),
    }
}

/// Bounding volume hierarchy used for intersection acceleration.
///
/// The hierarchy exclusively owns its node tree; items are whatever the
/// caller hands in (the scene shares its primitives via `Arc`).
#[derive(Clone, Debug)]
pub struct Bvh<T> {
    root: Option<BvhNode<T>>,
}

impl<T: Bounded> Bvh<T> {
    /// Construction from an owned item list.
    pub fn build(items: Vec<T>) -> Bvh<T> {
        if items.is_empty() {
            return Bvh { root: None };
        }
        let n = items.len();
        let root = build_node(items);
        debug!("bvh: {} items in {} nodes", n, root.node_count());
        Bvh { root: Some(root) }
    }

    /// Bounding box of everything inside; a degenerate box at the
    /// origin when empty.
    pub fn bounding_box(&self) -> BBox3f {
        match &self.root {
            Some(node) => *node.bbox(),
            None => BBox3f::from_point(Point3f::new(0.0, 0.0, 0.0)),
        }
    }

    /// Closest-hit query. `intersect` is invoked per candidate item with
    /// the current `(t_min, t_max)` window and reports `(t, payload)`;
    /// the payload of the closest accepted hit is returned.
    pub fn closest_hit<'a, H, F>(
        &'a self,
        ray: &Ray,
        t_min: Float,
        t_max: Float,
        intersect: &mut F,
    ) -> Option<H>
    where
        F: FnMut(&'a T, Float, Float) -> Option<(Float, H)>,
    {
        let root = self.root.as_ref()?;
        let mut best = None;
        let mut t_max = t_max;
        root.visit(ray, t_min, &mut t_max, &mut best, intersect);
        best
    }
}
