//! Complex number type for complex-argument special functions
//!
//! Provides the `Complex128` type used for complex Bessel arguments and
//! Hankel function values. The type is compatible with bytemuck for
//! zero-copy conversions.
//!
//! # Storage Format
//!
//! Complex numbers are stored in interleaved format (re, im), matching C's
//! `double complex` and numpy's `complex128` memory layout.
//!
//! # Branch Cuts
//!
//! All multivalued operations (`ln`, `sqrt`, `powf`, `arg`) use the
//! principal branch, with the cut along the negative real axis. The sign
//! bit of a zero imaginary part selects the side of the cut, so
//! `Complex128::new(-2.0, -0.0)` is treated as approaching from below.
//!
//! # Examples
//!
//! ```
//! use specfun::complex::Complex128;
//!
//! let z = Complex128::new(3.0, 4.0);
//! assert_eq!(z.abs(), 5.0);  // |z| = sqrt(3² + 4²) = 5
//!
//! let w = Complex128::new(1.0, 2.0);
//! let product = z * w;   // complex multiplication
//! let conjugate = z.conj();  // 3 - 4i
//! ```

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 128-bit complex number with f64 real and imaginary parts.
///
/// Memory layout: f64 × 2, interleaved format, matching C `double complex`
/// and numpy `complex128`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Complex128 {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex128 {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit)
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit i
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a new complex number
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number from polar form: r * e^(iθ)
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// Unit phasor e^(iθ) = cos θ + i sin θ
    #[inline]
    pub fn cis(theta: f64) -> Self {
        Self {
            re: theta.cos(),
            im: theta.sin(),
        }
    }

    /// Magnitude (absolute value): |z| = sqrt(re² + im²)
    ///
    /// Uses `hypot` so intermediate squaring cannot overflow.
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn abs_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle (argument): atan2(im, re), in (-π, π]
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Multiply by a real scalar
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// Reciprocal: 1/z = conj(z)/|z|²
    #[inline]
    pub fn recip(self) -> Self {
        let mag_sq = self.abs_squared();
        if mag_sq == 0.0 {
            Self {
                re: f64::INFINITY,
                im: f64::INFINITY,
            }
        } else {
            Self {
                re: self.re / mag_sq,
                im: -self.im / mag_sq,
            }
        }
    }

    /// Complex exponential: e^z = e^re * (cos(im) + i*sin(im))
    #[inline]
    pub fn exp(self) -> Self {
        let exp_re = self.re.exp();
        Self {
            re: exp_re * self.im.cos(),
            im: exp_re * self.im.sin(),
        }
    }

    /// Natural logarithm: ln(z) = ln(|z|) + i*arg(z), principal branch
    #[inline]
    pub fn ln(self) -> Self {
        Self {
            re: self.abs().ln(),
            im: self.arg(),
        }
    }

    /// Square root, principal branch (non-negative real part)
    #[inline]
    pub fn sqrt(self) -> Self {
        let mag = self.abs();
        if mag == 0.0 {
            Self::ZERO
        } else {
            let re = ((mag + self.re) / 2.0).sqrt();
            let im = self.im.signum() * ((mag - self.re) / 2.0).sqrt();
            Self { re, im }
        }
    }

    /// Real power, principal branch: z^a = exp(a * ln z)
    ///
    /// `0^a` is `0` for `a > 0`, `1` for `a = 0`, and `∞` for `a < 0`.
    #[inline]
    pub fn powf(self, a: f64) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            return if a > 0.0 {
                Self::ZERO
            } else if a == 0.0 {
                Self::ONE
            } else {
                Self::new(f64::INFINITY, 0.0)
            };
        }
        self.ln().scale(a).exp()
    }

    /// Complex sine: sin(z) = sin(re)cosh(im) + i cos(re)sinh(im)
    #[inline]
    pub fn sin(self) -> Self {
        Self {
            re: self.re.sin() * self.im.cosh(),
            im: self.re.cos() * self.im.sinh(),
        }
    }

    /// Complex cosine: cos(z) = cos(re)cosh(im) - i sin(re)sinh(im)
    #[inline]
    pub fn cos(self) -> Self {
        Self {
            re: self.re.cos() * self.im.cosh(),
            im: -self.re.sin() * self.im.sinh(),
        }
    }

    /// Complex hyperbolic sine: sinh(z) = sinh(re)cos(im) + i cosh(re)sin(im)
    #[inline]
    pub fn sinh(self) -> Self {
        Self {
            re: self.re.sinh() * self.im.cos(),
            im: self.re.cosh() * self.im.sin(),
        }
    }

    /// Complex hyperbolic cosine: cosh(z) = cosh(re)cos(im) + i sinh(re)sin(im)
    #[inline]
    pub fn cosh(self) -> Self {
        Self {
            re: self.re.cosh() * self.im.cos(),
            im: self.re.sinh() * self.im.sin(),
        }
    }

    /// True if either component is NaN
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// True if both components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True if the value is exactly zero
    #[inline]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl Add for Complex128 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex128 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex128 {
    type Output = Self;

    /// Complex multiplication: (a+bi)(c+di) = (ac-bd) + (ad+bc)i
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Div for Complex128 {
    type Output = Self;

    /// Complex division: (a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.abs_squared();
        if denom == 0.0 {
            Self {
                re: f64::NAN,
                im: f64::NAN,
            }
        } else {
            Self {
                re: (self.re * rhs.re + self.im * rhs.im) / denom,
                im: (self.im * rhs.re - self.re * rhs.im) / denom,
            }
        }
    }
}

impl Neg for Complex128 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{}+{}i", self.re, self.im)
        } else {
            write!(f, "{}{}i", self.re, self.im)
        }
    }
}

impl From<f64> for Complex128 {
    #[inline]
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f64, f64)> for Complex128 {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

// ============================================================================
// Tests
// ============================================================================
