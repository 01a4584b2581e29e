// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! defines a perspective camera

use crate::geometry::prelude::*;
use crate::renderer::error::ConfigError;
use crate::sample;
use crate::sample::Sampler;
use serde_derive::{Deserialize, Serialize};

/// Perspective camera description, as the scene loader hands it over.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CameraConfig {
    pub center: Point3f,
    pub look_at: Point3f,
    pub up: Vector3f,
    /// vertical field of view, degrees
    pub vfov_deg: Float,
    /// lens diameter; `0` is a pinhole
    pub aperture: Float,
    /// distance to the plane in focus; non-positive means
    /// `|look_at - center|`
    pub focus_distance: Float,
}

impl Default for CameraConfig {
    fn default() -> CameraConfig {
        CameraConfig {
            center: Point3f::new(0.0, 0.0, 0.0),
            look_at: Point3f::new(0.0, 0.0, -1.0),
            up: Vector3f::unit_y(),
            vfov_deg: 40.0,
            aperture: 0.0,
            focus_distance: 0.0,
        }
    }
}

/// A perspective camera with a thin-lens aperture.
///
/// Beyond generating primary rays it can map arbitrary rays back to
/// pixel coordinates (for splatted contributions) and report the
/// area/direction pdfs bidirectional weighting needs.
#[derive(Clone, Debug)]
pub struct Camera {
    center: Point3f,
    // right, up, backward; rays leave along -w
    u: Vector3f,
    v: Vector3f,
    w: Vector3f,
    lower_left: Point3f,
    horizontal: Vector3f,
    vertical: Vector3f,
    lens_radius: Float,
    focus: Float,
    width: u32,
    height: u32,
    // image plane area at unit distance, for direction pdfs
    plane_area: Float,
}

impl Camera {
    /// Construction for an image of `width` by `height` pixels.
    pub fn new(config: CameraConfig, width: u32, height: u32) -> Result<Camera, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if !(config.vfov_deg > 0.0 && config.vfov_deg < 180.0) {
            return Err(ConfigError::InvalidCamera("vertical fov outside (0, 180)"));
        }
        if config.aperture < 0.0 || !config.aperture.is_finite() {
            return Err(ConfigError::InvalidCamera("negative aperture"));
        }
        let gaze = config.look_at - config.center;
        let gaze_len = gaze.magnitude();
        if gaze_len < DEGENERATE_EPS {
            return Err(ConfigError::InvalidCamera("look_at coincides with center"));
        }
        let w = -gaze / gaze_len;
        let u_raw = config.up.cross(w);
        if u_raw.magnitude2() < DEGENERATE_EPS {
            return Err(ConfigError::InvalidCamera("up is parallel to the view direction"));
        }
        let u = u_raw.normalize();
        let v = w.cross(u);

        let focus = if config.focus_distance > 0.0 {
            config.focus_distance
        } else {
            gaze_len
        };
        let half_h = (Rad::from(Deg(config.vfov_deg)).0 * 0.5).tan();
        let aspect = width as Float / height as Float;
        let half_w = aspect * half_h;
        let horizontal = u * (2.0 * half_w * focus);
        let vertical = v * (2.0 * half_h * focus);
        let lower_left = config.center - horizontal * 0.5 - vertical * 0.5 - w * focus;
        Ok(Camera {
            center: config.center,
            u,
            v,
            w,
            lower_left,
            horizontal,
            vertical,
            lens_radius: config.aperture * 0.5,
            focus,
            width,
            height,
            plane_area: 4.0 * half_w * half_h,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The direction the camera looks along.
    #[inline]
    pub fn forward(&self) -> Vector3f {
        -self.w
    }

    /// Generate the ray for pixel `(x, y)`, jittered within the pixel;
    /// pixel row 0 is the top of the image.
    pub fn generate_ray(&self, x: u32, y: u32, sampler: &mut dyn Sampler) -> Ray {
        let jitter = sampler.next_2d();
        let lens = sampler.next_2d();
        self.generate_ray_at(
            (x as Float + jitter.x) / self.width as Float,
            (y as Float + jitter.y) / self.height as Float,
            lens,
        )
    }

    /// Ray through film position `(s, t)` in $[0,1)^2$ (t grows
    /// downward), with `lens` the 2d lens sample.
    pub fn generate_ray_at(&self, s: Float, t: Float, lens: Point2f) -> Ray {
        let target = self.lower_left + self.horizontal * s + self.vertical * (1.0 - t);
        let origin = if self.lens_radius > 0.0 {
            let d = sample::sample_concentric_disk(lens) * self.lens_radius;
            self.center + self.u * d.x + self.v * d.y
        } else {
            self.center
        };
        Ray::new(origin, (target - origin).normalize())
    }

    /// Map a ray back to the pixel it contributes to; `None` when it
    /// points away from the camera or lands outside the frame.
    pub fn ray_to_pixel(&self, ray: &Ray) -> Option<(u32, u32)> {
        let dir = ray.dir.normalize();
        let cos = dir.dot(self.forward());
        if cos < DEGENERATE_EPS {
            return None;
        }
        // intersect with the focus plane
        let t = (self.focus - (ray.origin - self.center).dot(-self.w)) / cos;
        if t <= 0.0 {
            return None;
        }
        let rel = ray.origin + dir * t - self.lower_left;
        let s = rel.dot(self.u) / self.horizontal.magnitude();
        let q = rel.dot(self.v) / self.vertical.magnitude();
        if !(0.0..1.0).contains(&s) || !(0.0..1.0).contains(&q) {
            return None;
        }
        let x = (s * self.width as Float) as u32;
        let y = ((1.0 - q) * self.height as Float) as u32;
        Some((x.min(self.width - 1), y.min(self.height - 1)))
    }

    /// (area, direction) pdfs for a ray leaving the camera; zeros when
    /// the ray does not map into the frame.
    pub fn pdf(&self, ray: &Ray) -> (Float, Float) {
        if self.ray_to_pixel(ray).is_none() {
            return (0.0, 0.0);
        }
        let cos = ray.dir.normalize().dot(self.forward());
        let lens_area = if self.lens_radius > 0.0 {
            float::pi() * self.lens_radius * self.lens_radius
        } else {
            1.0
        };
        (
            1.0 / lens_area,
            1.0 / (self.plane_area * cos * cos * cos),
        )
    }
}
