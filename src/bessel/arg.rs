//! Argument abstraction shared by the real and complex Bessel paths.

use crate::complex::Complex128;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar types a Bessel function can be evaluated at.
///
/// Implemented for `f64` and [`Complex128`] so the half-integer closed
/// forms and the derivative recurrences are written once. Methods mirror
/// the inherent `Complex128` operations; for `f64` they delegate to std.
pub(crate) trait BesselArg:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn from_f64(v: f64) -> Self;
    fn scale(self, s: f64) -> Self;
    fn recip(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn exp(self) -> Self;
}

impl BesselArg for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
    #[inline]
    fn scale(self, s: f64) -> Self {
        self * s
    }
    #[inline]
    fn recip(self) -> Self {
        1.0 / self
    }
    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }
    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }
    #[inline]
    fn sinh(self) -> Self {
        f64::sinh(self)
    }
    #[inline]
    fn cosh(self) -> Self {
        f64::cosh(self)
    }
    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }
}

impl BesselArg for Complex128 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Complex128::new(v, 0.0)
    }
    #[inline]
    fn scale(self, s: f64) -> Self {
        Complex128::scale(self, s)
    }
    #[inline]
    fn recip(self) -> Self {
        Complex128::recip(self)
    }
    #[inline]
    fn sqrt(self) -> Self {
        Complex128::sqrt(self)
    }
    #[inline]
    fn sin(self) -> Self {
        Complex128::sin(self)
    }
    #[inline]
    fn cos(self) -> Self {
        Complex128::cos(self)
    }
    #[inline]
    fn sinh(self) -> Self {
        Complex128::sinh(self)
    }
    #[inline]
    fn cosh(self) -> Self {
        Complex128::cosh(self)
    }
    #[inline]
    fn exp(self) -> Self {
        Complex128::exp(self)
    }
}
