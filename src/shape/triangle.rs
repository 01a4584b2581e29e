// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Triangles and indexed triangle meshes

use crate::component::bvh::{Bounded, Bvh};
use crate::geometry::prelude::*;
use crate::sample;

/// Moeller-Trumbore intersection; returns `(t, u, v)` with `(u, v)` the
/// barycentric coordinates of `v1` and `v2`.
fn intersect_triangle(
    ray: &Ray,
    v0: Point3f,
    v1: Point3f,
    v2: Point3f,
    t_min: Float,
    t_max: Float,
) -> Option<(Float, Float, Float)> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let h = ray.dir.cross(e2);
    let det = e1.dot(h);
    if det.abs() < DEGENERATE_EPS {
        return None;
    }
    let inv = 1.0 / det;
    let s = ray.origin - v0;
    let u = inv * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = inv * ray.dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = inv * e2.dot(q);
    if t < t_min || t > t_max {
        return None;
    }
    Some((t, u, v))
}

fn triangle_bbox(v0: Point3f, v1: Point3f, v2: Point3f) -> BBox3f {
    let b = BBox3f::new(v0, v1).extend(v2);
    let pad = Vector3f::new(1e-4, 1e-4, 1e-4);
    BBox3f::new(b.pmin - pad, b.pmax + pad)
}

/// A single triangle
#[derive(Copy, Clone, Debug)]
pub struct Triangle {
    pub v0: Point3f,
    pub v1: Point3f,
    pub v2: Point3f,
    /// unit front-face normal
    pub normal: Vector3f,
    area: Float,
}

impl Triangle {
    pub fn new(v0: Point3f, v1: Point3f, v2: Point3f) -> Triangle {
        let n = (v1 - v0).cross(v2 - v0);
        let doubled = n.magnitude();
        let normal = if doubled > 0.0 { n / doubled } else { Vector3f::unit_z() };
        Triangle {
            v0,
            v1,
            v2,
            normal,
            area: 0.5 * doubled,
        }
    }

    pub(crate) fn hit(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<SurfaceHit> {
        let (t, u, v) = intersect_triangle(ray, self.v0, self.v1, self.v2, t_min, t_max)?;
        Some(SurfaceHit::new(ray, self.normal, t, u, v))
    }

    #[inline]
    pub fn bounding_box(&self) -> BBox3f {
        triangle_bbox(self.v0, self.v1, self.v2)
    }

    #[inline]
    pub fn area(&self) -> Float {
        self.area
    }

    pub fn sample_surface(&self, u: Point2f) -> (Point3f, Vector3f) {
        let b = sample::sample_uniform_triangle(u);
        let p = Point3f::from_vec(
            self.v0.to_vec() * b.x + self.v1.to_vec() * b.y + self.v2.to_vec() * b.z,
        );
        (p, self.normal)
    }
}

#[derive(Clone, Debug)]
struct MeshFace {
    indices: [usize; 3],
    bbox: BBox3f,
}

impl Bounded for MeshFace {
    #[inline]
    fn bounding_box(&self) -> BBox3f {
        self.bbox
    }
}

/// An indexed triangle mesh with an internal BVH over its faces.
///
/// Uses per-face geometric normals unless per-vertex normals are
/// provided, in which case hits interpolate them barycentrically.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    vertices: Vec<Point3f>,
    indices: Vec<[usize; 3]>,
    normals: Option<Vec<Vector3f>>,
    bvh: Bvh<MeshFace>,
    area: Float,
}

impl TriangleMesh {
    /// Construction from vertex and index arrays. Degenerate faces keep
    /// their slot but never intersect.
    pub fn new(
        vertices: Vec<Point3f>,
        indices: Vec<[usize; 3]>,
        normals: Option<Vec<Vector3f>>,
    ) -> TriangleMesh {
        debug_assert!(indices.iter().flatten().all(|i| *i < vertices.len()));
        if let Some(ref ns) = normals {
            debug_assert_eq!(ns.len(), vertices.len());
        }
        let faces = indices
            .iter()
            .map(|f| MeshFace {
                indices: *f,
                bbox: triangle_bbox(vertices[f[0]], vertices[f[1]], vertices[f[2]]),
            })
            .collect();
        let area = indices
            .iter()
            .map(|f| {
                0.5 * (vertices[f[1]] - vertices[f[0]])
                    .cross(vertices[f[2]] - vertices[f[0]])
                    .magnitude()
            })
            .sum();
        TriangleMesh {
            bvh: Bvh::build(faces),
            vertices,
            indices,
            normals,
            area,
        }
    }

    /// Construction with the vertices (and vertex normals) rotated by
    /// `angle_deg` degrees about the vertical axis through `pivot`.
    pub fn rotated_y(
        vertices: Vec<Point3f>,
        indices: Vec<[usize; 3]>,
        normals: Option<Vec<Vector3f>>,
        angle_deg: Float,
        pivot: Point3f,
    ) -> TriangleMesh {
        let m = Matrix3f::from_angle_y(Deg(angle_deg));
        let vertices = vertices
            .into_iter()
            .map(|v| pivot + m * (v - pivot))
            .collect();
        let normals = normals.map(|ns| ns.into_iter().map(|n| m * n).collect());
        TriangleMesh::new(vertices, indices, normals)
    }

    pub(crate) fn hit(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<SurfaceHit> {
        let vertices = &self.vertices;
        let normals = self.normals.as_deref();
        self.bvh.closest_hit(ray, t_min, t_max, &mut |face: &MeshFace, tn, tx| {
            let [i0, i1, i2] = face.indices;
            let (v0, v1, v2) = (vertices[i0], vertices[i1], vertices[i2]);
            let (t, u, v) = intersect_triangle(ray, v0, v1, v2, tn, tx)?;
            let outward = match normals {
                Some(ns) => {
                    let n = ns[i0] * (1.0 - u - v) + ns[i1] * u + ns[i2] * v;
                    n.normalize()
                }
                None => (v1 - v0).cross(v2 - v0).normalize(),
            };
            Some((t, SurfaceHit::new(ray, outward, t, u, v)))
        })
    }

    #[inline]
    pub fn bounding_box(&self) -> BBox3f {
        self.bvh.bounding_box()
    }

    #[inline]
    pub fn area(&self) -> Float {
        self.area
    }

    /// Uniform-face, uniform-barycentric surface sample.
    pub fn sample_surface(&self, u: Point2f) -> (Point3f, Vector3f) {
        let nfaces = self.indices.len();
        let pick = ((u.x * nfaces as Float) as usize).min(nfaces - 1);
        let [i0, i1, i2] = self.indices[pick];
        // reuse the stretched first coordinate for the barycentric draw
        let rescaled = u.x * nfaces as Float - pick as Float;
        let b = sample::sample_uniform_triangle(Point2f::new(rescaled, u.y));
        let p = Point3f::from_vec(
            self.vertices[i0].to_vec() * b.x
                + self.vertices[i1].to_vec() * b.y
                + self.vertices[i2].to_vec() * b.z,
        );
        (p, self.face_normal(pick))
    }

    /// Geometric normal of the face containing `p`; falls back to the
    /// nearest face plane when `p` lies slightly off the surface.
    pub fn normal_at(&self, p: Point3f) -> Vector3f {
        let mut best = (float::infinity(), Vector3f::unit_z());
        for (i, f) in self.indices.iter().enumerate() {
            let n = self.face_normal(i);
            let dist = (p - self.vertices[f[0]]).dot(n).abs();
            if dist < best.0 {
                best = (dist, n);
            }
        }
        best.1
    }

    fn face_normal(&self, face: usize) -> Vector3f {
        let [i0, i1, i2] = self.indices[face];
        (self.vertices[i1] - self.vertices[i0])
            .cross(self.vertices[i2] - self.vertices[i0])
            .normalize()
    }
}
