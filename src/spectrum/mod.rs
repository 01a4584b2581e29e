// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Defines spectral representations

use crate::geometry::prelude::*;
use std::ops;

/// An spectrum represented as linear RGB
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RGBSpectrumf {
    pub inner: Vector3f,
}

impl Default for RGBSpectrumf {
    #[inline]
    fn default() -> RGBSpectrumf {
        RGBSpectrumf::black()
    }
}

impl RGBSpectrumf {
    #[inline]
    pub fn new(r: Float, g: Float, b: Float) -> RGBSpectrumf {
        RGBSpectrumf {
            inner: Vector3f::new(r, g, b),
        }
    }

    /// initialize to unified color
    #[inline]
    pub fn grey_scale(n: Float) -> RGBSpectrumf {
        RGBSpectrumf::new(n, n, n)
    }

    /// initialize to black
    #[inline]
    pub fn black() -> RGBSpectrumf {
        RGBSpectrumf::grey_scale(0.0)
    }

    #[inline]
    pub fn r(&self) -> Float {
        self.inner.x
    }

    #[inline]
    pub fn g(&self) -> Float {
        self.inner.y
    }

    #[inline]
    pub fn b(&self) -> Float {
        self.inner.z
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.inner.x == 0.0 && self.inner.y == 0.0 && self.inner.z == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.inner.x.is_finite() && self.inner.y.is_finite() && self.inner.z.is_finite()
    }

    /// Luminance with Rec. 709 weights
    #[inline]
    pub fn luminance(&self) -> Float {
        0.2126 * self.inner.x + 0.7152 * self.inner.y + 0.0722 * self.inner.z
    }

    #[inline]
    pub fn max_component(&self) -> Float {
        self.inner.x.max(self.inner.y).max(self.inner.z)
    }

    /// lerp
    #[inline]
    pub fn lerp(&self, other: &RGBSpectrumf, t: Float) -> RGBSpectrumf {
        RGBSpectrumf {
            inner: self.inner.lerp(other.inner, t),
        }
    }

    /// element-wise clamping
    #[inline]
    pub fn clamp(&self, low: Float, high: Float) -> RGBSpectrumf {
        RGBSpectrumf::new(
            float::clamp(self.r(), low, high),
            float::clamp(self.g(), low, high),
            float::clamp(self.b(), low, high),
        )
    }

    /// component-wise sqrt
    #[inline]
    pub fn sqrt(self) -> RGBSpectrumf {
        RGBSpectrumf::new(self.inner.x.sqrt(), self.inner.y.sqrt(), self.inner.z.sqrt())
    }
}

impl ops::Add for RGBSpectrumf {
    type Output = RGBSpectrumf;
    #[inline]
    fn add(self, rhs: RGBSpectrumf) -> RGBSpectrumf {
        RGBSpectrumf {
            inner: self.inner + rhs.inner,
        }
    }
}

impl ops::AddAssign for RGBSpectrumf {
    #[inline]
    fn add_assign(&mut self, rhs: RGBSpectrumf) {
        self.inner += rhs.inner;
    }
}

impl ops::Sub for RGBSpectrumf {
    type Output = RGBSpectrumf;
    #[inline]
    fn sub(self, rhs: RGBSpectrumf) -> RGBSpectrumf {
        RGBSpectrumf {
            inner: self.inner - rhs.inner,
        }
    }
}

impl ops::Mul for RGBSpectrumf {
    type Output = RGBSpectrumf;
    #[inline]
    fn mul(self, rhs: RGBSpectrumf) -> RGBSpectrumf {
        RGBSpectrumf {
            inner: self.inner.mul_element_wise(rhs.inner),
        }
    }
}

impl ops::MulAssign for RGBSpectrumf {
    #[inline]
    fn mul_assign(&mut self, rhs: RGBSpectrumf) {
        self.inner = self.inner.mul_element_wise(rhs.inner);
    }
}

impl ops::Mul<Float> for RGBSpectrumf {
    type Output = RGBSpectrumf;
    #[inline]
    fn mul(self, rhs: Float) -> RGBSpectrumf {
        RGBSpectrumf {
            inner: self.inner * rhs,
        }
    }
}

impl ops::Mul<RGBSpectrumf> for Float {
    type Output = RGBSpectrumf;
    #[inline]
    fn mul(self, rhs: RGBSpectrumf) -> RGBSpectrumf {
        rhs * self
    }
}

impl ops::MulAssign<Float> for RGBSpectrumf {
    #[inline]
    fn mul_assign(&mut self, rhs: Float) {
        self.inner *= rhs;
    }
}

impl ops::Div<Float> for RGBSpectrumf {
    type Output = RGBSpectrumf;
    #[inline]
    fn div(self, rhs: Float) -> RGBSpectrumf {
        RGBSpectrumf {
            inner: self.inner / rhs,
        }
    }
}

impl ops::DivAssign<Float> for RGBSpectrumf {
    #[inline]
    fn div_assign(&mut self, rhs: Float) {
        self.inner /= rhs;
    }
}
