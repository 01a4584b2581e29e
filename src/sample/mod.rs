// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The sampling interface and radiometric sampling primitives

use crate::geometry::prelude::*;

/// The sampling interface.
/// Samplers return values in $[0, 1)$.
///
/// Values are independent within a pixel sample; reseeding an
/// implementation with the same seed yields the identical sequence.
pub trait Sampler: Send {
    /// get next 1-dimensional sample
    fn next(&mut self) -> Float;

    /// get next 2-dimensional sample
    #[inline]
    fn next_2d(&mut self) -> Point2f {
        Point2f::new(self.next(), self.next())
    }

    /// get next 3-dimensional sample
    #[inline]
    fn next_3d(&mut self) -> Point3f {
        Point3f::new(self.next(), self.next(), self.next())
    }
}

/// transform an uniformly sampled `u` in $[0,1)^2$
/// into cosine-theta weighted samples on the $z>0$ hemisphere
#[inline]
pub fn sample_cosw_hemisphere(u: Point2f) -> Vector3f {
    let a = 2.0 * float::pi() * u.x;
    let z = u.y;
    let r = z.sqrt();
    Vector3f::new(r * a.cos(), r * a.sin(), (1.0 - z).sqrt())
}

/// pdf of cosine-theta weighted samples on a hemisphere
#[inline]
pub fn pdf_cosw_hemisphere(cos_theta: Float) -> Float {
    cos_theta.max(0.0) * float::frac_1_pi()
}

/// transform an uniformly sampled `u` in $[0,1)^2$
/// into uniform samples on a hemisphere
#[inline]
pub fn sample_uniform_hemisphere(u: Point2f) -> Vector3f {
    let costheta = u.x;
    let sintheta = (1.0 - costheta * costheta).max(0.0).sqrt();
    let phi = 2.0 * float::pi() * u.y;
    Vector3f::new(sintheta * phi.cos(), sintheta * phi.sin(), costheta)
}

/// pdf of uniform samples on a hemisphere
#[inline]
pub fn pdf_uniform_hemisphere() -> Float {
    0.5 * float::frac_1_pi()
}

/// transform an uniformly sampled `u` in $[0,1)^2$
/// into uniform samples on a sphere
#[inline]
pub fn sample_uniform_sphere(u: Point2f) -> Vector3f {
    let z = 1.0 - 2.0 * u.x;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * float::pi() * u.y;
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// pdf of uniform samples on a sphere
#[inline]
pub fn pdf_uniform_sphere() -> Float {
    0.25 * float::frac_1_pi()
}

/// transform an uniformly sampled `u` in $[0,1)^2$ into uniform samples
/// on a cone around `+z` with `cos_max` the cosine of its half angle
#[inline]
pub fn sample_uniform_cone(u: Point2f, cos_max: Float) -> Vector3f {
    let costheta = 1.0 - u.x * (1.0 - cos_max);
    let sintheta = (1.0 - costheta * costheta).max(0.0).sqrt();
    let phi = 2.0 * float::pi() * u.y;
    Vector3f::new(sintheta * phi.cos(), sintheta * phi.sin(), costheta)
}

/// pdf of uniform samples on a cone
#[inline]
pub fn pdf_uniform_cone(cos_max: Float) -> Float {
    1.0 / ((1.0 - cos_max) * 2.0 * float::pi())
}

/// transform an uniformly sampled `u` in $[0,1)^2$
/// into concentric samples on the unit disk, preserving relative
/// distributions
#[inline]
pub fn sample_concentric_disk(u: Point2f) -> Point2f {
    let ux = 2.0 * u.x - 1.0;
    let uy = 2.0 * u.y - 1.0;
    if ux == 0.0 && uy == 0.0 {
        return Point2f::new(0.0, 0.0);
    }
    let (r, theta) = if ux.abs() > uy.abs() {
        (ux, float::frac_pi_4() * (uy / ux))
    } else {
        (uy, float::frac_pi_2() - float::frac_pi_4() * (ux / uy))
    };
    Point2f::new(r * theta.cos(), r * theta.sin())
}

/// transform an uniformly sampled `u` in $[0,1)^2$
/// into uniform samples on a triangle's barycentric coordinates
#[inline]
pub fn sample_uniform_triangle(u: Point2f) -> Vector3f {
    let sqrtux = u.x.sqrt();
    let x = 1.0 - sqrtux;
    let y = sqrtux * u.y;
    Vector3f::new(x, y, 1.0 - x - y)
}

/// power heuristic with $\beta = 2$; returns zero when `pdff` is zero
#[inline]
pub fn power_heuristic(nf: usize, pdff: Float, ng: usize, pdfg: Float) -> Float {
    let f = nf as Float * pdff;
    let g = ng as Float * pdfg;
    if f == 0.0 {
        return 0.0;
    }
    (f * f) / (f * f + g * g)
}

/// balance heuristic; returns zero when `pdff` is zero
#[inline]
pub fn balance_heuristic(nf: usize, pdff: Float, ng: usize, pdfg: Float) -> Float {
    let f = nf as Float * pdff;
    let g = ng as Float * pdfg;
    if f == 0.0 {
        return 0.0;
    }
    f / (f + g)
}

pub mod distribution;
pub mod fixed;
pub mod random;
pub mod prelude;
