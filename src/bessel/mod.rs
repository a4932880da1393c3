//! Bessel functions of real order for real and complex arguments.
//!
//! Public surface: [`besselj`], [`bessely`], [`besseli`], [`besselk`],
//! [`besselh`] for real arguments, the `cbessel*` counterparts for
//! complex arguments, and `try_`-prefixed checked variants of each. All
//! accept an arbitrary real order `nu` and a derivative order `n`
//! (`n = 0` is the function itself).
//!
//! Dispatch per call, mirroring the structure of the wrapped-library
//! design this crate replaces:
//!
//! 1. exact limits at `z = 0`,
//! 2. parity/NaN handling on the negative real axis,
//! 3. half-integer orders in closed form (where the recurrence direction
//!    is stable),
//! 4. integer orders through the rational-approximation fast path
//!    (real arguments),
//! 5. everything else through the general complex kernel, with negative
//!    orders folded in by the reflection formulas.

pub(crate) mod arg;
pub(crate) mod asymptotic;
pub(crate) mod coefficients;
pub(crate) mod derivative;
pub(crate) mod half_integer;
pub(crate) mod integer;
pub(crate) mod kernel;
pub(crate) mod series;

use crate::complex::Complex128;
use crate::error::{Error, Result};
use crate::gamma::gamma_sign;
use derivative::{derivative, DerivativeRule};
use std::f64::consts::{FRAC_2_PI, PI};

/// Which Hankel function: H¹ = J + iY or H² = J - iY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HankelKind {
    /// H¹_ν(z) = J_ν(z) + i Y_ν(z)
    First,
    /// H²_ν(z) = J_ν(z) - i Y_ν(z)
    Second,
}

// ============================================================================
// Dispatch helpers
// ============================================================================

/// Orders this large go through the general kernel (and its order cap)
/// rather than the integer/half-integer recurrences.
const FAST_PATH_ORDER_LIMIT: f64 = 1e7;

fn is_integer(nu: f64) -> bool {
    nu == nu.floor() && nu.abs() < FAST_PATH_ORDER_LIMIT
}

/// Some(m) iff nu = m + 1/2 exactly.
fn half_order(nu: f64) -> Option<i64> {
    let m = nu - 0.5;
    if m == m.floor() && m.abs() < FAST_PATH_ORDER_LIMIT {
        Some(m as i64)
    } else {
        None
    }
}

/// Raising J or I past the turning point amplifies the dominant companion
/// solution; allow a couple of steps beyond it, then defer to the kernel.
fn half_upward_stable(m: i64, a: f64) -> bool {
    m <= 0 || (m as f64 + 0.5) <= a + 2.0
}

/// lim_{z→0⁺} J_ν(z) (and identically I_ν): 1 at ν = 0, 0 for ν > 0 and
/// negative integers, ±∞ signed by 1/Γ(ν+1) otherwise.
fn zero_limit_first_kind(nu: f64) -> f64 {
    if nu == 0.0 {
        1.0
    } else if nu > 0.0 || is_integer(nu) {
        0.0
    } else {
        gamma_sign(nu + 1.0) * f64::INFINITY
    }
}

/// lim_{z→0⁺} Y_ν(z): -∞ for ν ≥ 0; for negative orders the reflection
/// Y_{-ν} = Y_ν cos νπ + J_ν sin νπ fixes the sign, with the half-integer
/// cos νπ = 0 cases collapsing to J_ν(0) = 0.
fn zero_limit_second_kind(nu: f64) -> f64 {
    if nu >= 0.0 {
        return f64::NEG_INFINITY;
    }
    let v = -nu;
    if is_integer(v) {
        // Y_{-n} = (-1)^n Y_n
        if (v as i64) % 2 == 0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else if half_order(v).is_some() {
        0.0
    } else if (v * PI).cos() > 0.0 {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// Map an overflowed fast-path value onto the checked API's error.
fn finish(func: &'static str, value: f64) -> Result<f64> {
    if value.is_infinite() {
        Err(Error::overflow(func))
    } else {
        Ok(value)
    }
}

/// Complex analogue of [`finish`].
fn finish_c(func: &'static str, value: Complex128) -> Result<Complex128> {
    if value.is_nan() {
        Ok(value)
    } else if !value.is_finite() {
        Err(Error::overflow(func))
    } else {
        Ok(value)
    }
}

fn complex_nan() -> Complex128 {
    Complex128::new(f64::NAN, f64::NAN)
}

// ============================================================================
// Checked API, real arguments
// ============================================================================

/// Checked [`besselj`]: J_ν(z) or its n-th derivative.
///
/// # Errors
/// - [`Error::Domain`] for non-integer order with `z < 0` (the principal
///   value leaves the real line)
/// - [`Error::Overflow`] when the result exceeds f64 range
/// - [`Error::PrecisionLoss`] for arguments or orders outside the
///   supported envelope (|z| > 1e15, ν > 1e5 on the general path)
pub fn try_besselj(nu: f64, z: f64, n: usize) -> Result<f64> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::Cylinder, |order| {
            try_besselj(order, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(f64::NAN);
    }
    if z == 0.0 {
        return Ok(zero_limit_first_kind(nu));
    }
    if is_integer(nu) {
        if z.is_infinite() {
            return Ok(0.0);
        }
        return Ok(integer::bessel_jn(nu as i64, z));
    }
    if z < 0.0 {
        return Err(Error::domain(
            "besselj",
            "non-integer order with negative real argument",
        ));
    }
    if z.is_infinite() {
        return Ok(0.0);
    }
    if let Some(m) = half_order(nu) {
        if half_upward_stable(m, z) {
            return finish("besselj", half_integer::besselj_half(m, z));
        }
    }
    if nu >= 0.0 {
        kernel::kernel_j(nu, Complex128::from(z)).map(|c| c.re)
    } else {
        // J_{-ν} = J_ν cos νπ - Y_ν sin νπ
        let v = -nu;
        let (j, y) = kernel::kernel_jy(v, Complex128::from(z))?;
        let (s, c) = (v * PI).sin_cos();
        Ok((j.scale(c) - y.scale(s)).re)
    }
}

/// Checked [`bessely`]: Y_ν(z) or its n-th derivative.
///
/// # Errors
/// - [`Error::Domain`] for `z < 0` (any order)
/// - [`Error::Overflow`], [`Error::PrecisionLoss`] as for [`try_besselj`]
pub fn try_bessely(nu: f64, z: f64, n: usize) -> Result<f64> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::Cylinder, |order| {
            try_bessely(order, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(f64::NAN);
    }
    if z < 0.0 {
        return Err(Error::domain("bessely", "negative real argument"));
    }
    if z == 0.0 {
        return Ok(zero_limit_second_kind(nu));
    }
    if is_integer(nu) {
        if z.is_infinite() {
            return Ok(0.0);
        }
        return finish("bessely", integer::bessel_yn(nu as i64, z));
    }
    if z.is_infinite() {
        return Ok(0.0);
    }
    if let Some(m) = half_order(nu) {
        // Y_{m+1/2} reflects onto J at order (-m-1) + 1/2
        if half_upward_stable(-m - 1, z) {
            return finish("bessely", half_integer::bessely_half(m, z));
        }
    }
    if nu >= 0.0 {
        kernel::kernel_jy(nu, Complex128::from(z)).map(|(_, y)| y.re)
    } else {
        // Y_{-ν} = Y_ν cos νπ + J_ν sin νπ
        let v = -nu;
        let (j, y) = kernel::kernel_jy(v, Complex128::from(z))?;
        let (s, c) = (v * PI).sin_cos();
        Ok((y.scale(c) + j.scale(s)).re)
    }
}

/// Checked [`besseli`]: I_ν(z) or its n-th derivative.
///
/// # Errors
/// - [`Error::Domain`] for non-integer order with `z < 0`
/// - [`Error::Overflow`] for `z ≳ 709` (e^z range) and order/argument
///   combinations past f64 range
pub fn try_besseli(nu: f64, z: f64, n: usize) -> Result<f64> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::ModifiedFirst, |order| {
            try_besseli(order, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(f64::NAN);
    }
    if z == 0.0 {
        return Ok(zero_limit_first_kind(nu));
    }
    if is_integer(nu) {
        if z.is_infinite() {
            // I_n(±∞) = (±1)^n ∞
            return Ok(if z > 0.0 || (nu as i64) % 2 == 0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            });
        }
        return finish("besseli", integer::bessel_in(nu as i64, z));
    }
    if z < 0.0 {
        return Err(Error::domain(
            "besseli",
            "non-integer order with negative real argument",
        ));
    }
    if z.is_infinite() {
        return Ok(f64::INFINITY);
    }
    if let Some(m) = half_order(nu) {
        if half_upward_stable(m, z) {
            return finish("besseli", half_integer::besseli_half(m, z));
        }
    }
    if nu >= 0.0 {
        kernel::kernel_i(nu, Complex128::from(z)).map(|c| c.re)
    } else {
        // I_{-ν} = I_ν + (2/π) sin(νπ) K_ν
        let v = -nu;
        let zc = Complex128::from(z);
        let i = kernel::kernel_i(v, zc)?;
        let k = kernel::kernel_k(v, zc)?;
        Ok((i + k.scale(FRAC_2_PI * (v * PI).sin())).re)
    }
}

/// Checked [`besselk`]: K_ν(z) or its n-th derivative.
///
/// # Errors
/// - [`Error::Domain`] for `z < 0` (any order)
/// - [`Error::Overflow`] near the origin where K exceeds f64 range
pub fn try_besselk(nu: f64, z: f64, n: usize) -> Result<f64> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::ModifiedSecond, |order| {
            try_besselk(order, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(f64::NAN);
    }
    // K_{-ν} = K_ν
    let v = nu.abs();
    if z < 0.0 {
        return Err(Error::domain("besselk", "negative real argument"));
    }
    if z == 0.0 {
        return Ok(f64::INFINITY);
    }
    if z.is_infinite() {
        return Ok(0.0);
    }
    if is_integer(v) {
        return finish("besselk", integer::bessel_kn(v as i64, z));
    }
    if let Some(m) = half_order(v) {
        return finish("besselk", half_integer::besselk_half(m, z));
    }
    kernel::kernel_k(v, Complex128::from(z)).map(|c| c.re)
}

/// Checked [`besselh`]: H^(k)_ν(z) or its n-th derivative.
///
/// # Errors
/// As for [`try_besselj`] and [`try_bessely`]; in particular `z < 0` is a
/// domain error for every order.
pub fn try_besselh(nu: f64, kind: HankelKind, z: f64, n: usize) -> Result<Complex128> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::Cylinder, |order| {
            try_besselh(order, kind, z, 0)
        });
    }
    let j = try_besselj(nu, z, 0)?;
    let y = try_bessely(nu, z, 0)?;
    if j.is_nan() || y.is_nan() {
        return Ok(complex_nan());
    }
    Ok(match kind {
        HankelKind::First => Complex128::new(j, y),
        HankelKind::Second => Complex128::new(j, -y),
    })
}

// ============================================================================
// Checked API, complex arguments
// ============================================================================

/// Handling shared by the complex entry points for non-finite z.
/// Real +∞ behaves like the real-axis limit; anything else is NaN.
fn complex_infinite_limit(z: Complex128, at_positive_infinity: f64) -> Complex128 {
    if z.im == 0.0 && z.re == f64::INFINITY {
        Complex128::from(at_positive_infinity)
    } else {
        complex_nan()
    }
}

/// Checked [`cbesselj`]: J_ν(z) for complex z, or its n-th derivative.
pub fn try_cbesselj(nu: f64, z: Complex128, n: usize) -> Result<Complex128> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::Cylinder, |order| {
            try_cbesselj(order, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(complex_nan());
    }
    if z.is_zero() {
        return Ok(Complex128::from(zero_limit_first_kind(nu)));
    }
    if !z.is_finite() {
        return Ok(complex_infinite_limit(z, 0.0));
    }
    if let Some(m) = half_order(nu) {
        if half_upward_stable(m, z.abs()) {
            return finish_c("besselj", half_integer::besselj_half(m, z));
        }
    }
    if is_integer(nu) {
        // J_{-n} = (-1)^n J_n
        let v = nu.abs();
        let j = kernel::kernel_j(v, z)?;
        return Ok(if nu < 0.0 && (v as i64) % 2 == 1 { -j } else { j });
    }
    if nu >= 0.0 {
        kernel::kernel_j(nu, z)
    } else {
        let v = -nu;
        let (j, y) = kernel::kernel_jy(v, z)?;
        let (s, c) = (v * PI).sin_cos();
        Ok(j.scale(c) - y.scale(s))
    }
}

/// Checked [`cbessely`]: Y_ν(z) for complex z, or its n-th derivative.
pub fn try_cbessely(nu: f64, z: Complex128, n: usize) -> Result<Complex128> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::Cylinder, |order| {
            try_cbessely(order, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(complex_nan());
    }
    if z.is_zero() {
        return Ok(Complex128::from(zero_limit_second_kind(nu)));
    }
    if !z.is_finite() {
        return Ok(complex_infinite_limit(z, 0.0));
    }
    if let Some(m) = half_order(nu) {
        if half_upward_stable(-m - 1, z.abs()) {
            return finish_c("bessely", half_integer::bessely_half(m, z));
        }
    }
    if is_integer(nu) {
        // Y_{-n} = (-1)^n Y_n
        let v = nu.abs();
        let y = kernel::kernel_jy(v, z)?.1;
        return Ok(if nu < 0.0 && (v as i64) % 2 == 1 { -y } else { y });
    }
    if nu >= 0.0 {
        kernel::kernel_jy(nu, z).map(|(_, y)| y)
    } else {
        let v = -nu;
        let (j, y) = kernel::kernel_jy(v, z)?;
        let (s, c) = (v * PI).sin_cos();
        Ok(y.scale(c) + j.scale(s))
    }
}

/// Checked [`cbesseli`]: I_ν(z) for complex z, or its n-th derivative.
pub fn try_cbesseli(nu: f64, z: Complex128, n: usize) -> Result<Complex128> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::ModifiedFirst, |order| {
            try_cbesseli(order, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(complex_nan());
    }
    if z.is_zero() {
        return Ok(Complex128::from(zero_limit_first_kind(nu)));
    }
    if !z.is_finite() {
        return Ok(complex_infinite_limit(z, f64::INFINITY));
    }
    if let Some(m) = half_order(nu) {
        if half_upward_stable(m, z.abs()) {
            return finish_c("besseli", half_integer::besseli_half(m, z));
        }
    }
    if is_integer(nu) {
        // I_{-n} = I_n
        return kernel::kernel_i(nu.abs(), z);
    }
    if nu >= 0.0 {
        kernel::kernel_i(nu, z)
    } else {
        // I_{-ν} = I_ν + (2/π) sin(νπ) K_ν
        let v = -nu;
        let i = kernel::kernel_i(v, z)?;
        let k = kernel::kernel_k(v, z)?;
        Ok(i + k.scale(FRAC_2_PI * (v * PI).sin()))
    }
}

/// Checked [`cbesselk`]: K_ν(z) for complex z, or its n-th derivative.
pub fn try_cbesselk(nu: f64, z: Complex128, n: usize) -> Result<Complex128> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::ModifiedSecond, |order| {
            try_cbesselk(order, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(complex_nan());
    }
    // K_{-ν} = K_ν
    let v = nu.abs();
    if z.is_zero() {
        return Ok(Complex128::new(f64::INFINITY, 0.0));
    }
    if !z.is_finite() {
        return Ok(complex_infinite_limit(z, 0.0));
    }
    if let Some(m) = half_order(v) {
        return finish_c("besselk", half_integer::besselk_half(m, z));
    }
    kernel::kernel_k(v, z)
}

/// Checked [`cbesselh`]: H^(k)_ν(z) for complex z, or its n-th derivative.
pub fn try_cbesselh(nu: f64, kind: HankelKind, z: Complex128, n: usize) -> Result<Complex128> {
    if n > 0 {
        return derivative(nu, n, DerivativeRule::Cylinder, |order| {
            try_cbesselh(order, kind, z, 0)
        });
    }
    if nu.is_nan() || z.is_nan() {
        return Ok(complex_nan());
    }
    if z.is_zero() {
        // Compose from the real-axis limits so ∞ components stay signed
        let j = zero_limit_first_kind(nu);
        let y = zero_limit_second_kind(nu);
        return Ok(match kind {
            HankelKind::First => Complex128::new(j, y),
            HankelKind::Second => Complex128::new(j, -y),
        });
    }
    let j = try_cbesselj(nu, z, 0)?;
    let y = try_cbessely(nu, z, 0)?;
    Ok(match kind {
        HankelKind::First => j + Complex128::I * y,
        HankelKind::Second => j - Complex128::I * y,
    })
}

// ============================================================================
// Unchecked API (NaN / ∞ conventions)
// ============================================================================

fn unwrap_real(result: Result<f64>, overflow_value: f64) -> f64 {
    match result {
        Ok(v) => v,
        Err(Error::Overflow { .. }) => overflow_value,
        Err(_) => f64::NAN,
    }
}

fn unwrap_complex(result: Result<Complex128>) -> Complex128 {
    match result {
        Ok(v) => v,
        Err(Error::Overflow { .. }) => Complex128::new(f64::INFINITY, f64::INFINITY),
        Err(_) => complex_nan(),
    }
}

/// Computes the Bessel function of the first kind J_ν(z), or its n-th
/// derivative ∂ⁿJ_ν(z)/∂zⁿ.
///
/// - `nu`: order ν, any real number
/// - `z`: real argument
/// - `n`: derivative order; zero means no derivative
///
/// Invalid-domain inputs (non-integer ν with z < 0) return NaN; results
/// beyond f64 range return ∞. Use [`try_besselj`] for typed errors and
/// [`cbesselj`] for complex arguments.
///
/// # Example
///
/// ```
/// use specfun::besselj;
///
/// let nu = 2.5;
/// let z = 2.0;
///
/// let d0j = besselj(nu, z, 0);   // no derivative
/// let d1j = besselj(nu, z, 1);   // 1st derivative
/// let d2j = besselj(nu, z, 2);   // 2nd derivative
///
/// // J_{1/2}(z) = sqrt(2/(pi z)) sin z
/// let j_half = besselj(0.5, z, 0);
/// let exact = (2.0 / (std::f64::consts::PI * z)).sqrt() * z.sin();
/// assert!((j_half - exact).abs() < 1e-12);
/// # assert!(d0j.is_finite() && d1j.is_finite() && d2j.is_finite());
/// ```
pub fn besselj(nu: f64, z: f64, n: usize) -> f64 {
    unwrap_real(try_besselj(nu, z, n), f64::INFINITY)
}

/// Computes the Bessel function of the second kind Y_ν(z), or its n-th
/// derivative ∂ⁿY_ν(z)/∂zⁿ.
///
/// - `nu`: order ν, any real number
/// - `z`: real argument; the function is real-valued only for z ≥ 0, so
///   z < 0 returns NaN
/// - `n`: derivative order; zero means no derivative
///
/// # Example
///
/// ```
/// use specfun::bessely;
///
/// let y = bessely(1.5, 2.0, 0);
/// assert!(y.is_finite());
/// assert_eq!(bessely(0.0, 0.0, 0), f64::NEG_INFINITY);
/// ```
pub fn bessely(nu: f64, z: f64, n: usize) -> f64 {
    unwrap_real(try_bessely(nu, z, n), f64::NEG_INFINITY)
}

/// Computes the modified Bessel function of the first kind I_ν(z), or its
/// n-th derivative ∂ⁿI_ν(z)/∂zⁿ.
///
/// - `nu`: order ν, any real number
/// - `z`: real argument
/// - `n`: derivative order; zero means no derivative
///
/// Grows like e^z: overflows to ∞ for z ≳ 709.
///
/// # Example
///
/// ```
/// use specfun::besseli;
///
/// // I_{1/2}(z) = sqrt(2/(pi z)) sinh z
/// let z = 2.0_f64;
/// let exact = (2.0 / (std::f64::consts::PI * z)).sqrt() * z.sinh();
/// assert!((besseli(0.5, z, 0) - exact).abs() < 1e-12);
/// ```
pub fn besseli(nu: f64, z: f64, n: usize) -> f64 {
    unwrap_real(try_besseli(nu, z, n), f64::INFINITY)
}

/// Computes the modified Bessel function of the second kind K_ν(z), or
/// its n-th derivative ∂ⁿK_ν(z)/∂zⁿ.
///
/// - `nu`: order ν, any real number (K_{-ν} = K_ν)
/// - `z`: real argument; z < 0 returns NaN, z = 0 returns ∞
/// - `n`: derivative order; zero means no derivative
///
/// # Example
///
/// ```
/// use specfun::besselk;
///
/// // K_{1/2}(z) = sqrt(pi/(2 z)) e^{-z}
/// let z = 2.0_f64;
/// let exact = (std::f64::consts::PI / (2.0 * z)).sqrt() * (-z).exp();
/// assert!((besselk(0.5, z, 0) - exact).abs() < 1e-12);
/// ```
pub fn besselk(nu: f64, z: f64, n: usize) -> f64 {
    unwrap_real(try_besselk(nu, z, n), f64::INFINITY)
}

/// Computes the Bessel function of the third kind (Hankel function)
/// H^(k)_ν(z), or its n-th derivative ∂ⁿH^(k)_ν(z)/∂zⁿ.
///
/// - `nu`: order ν, any real number
/// - `kind`: [`HankelKind::First`] or [`HankelKind::Second`]
/// - `z`: real argument; the result is complex even for real z
/// - `n`: derivative order; zero means no derivative
///
/// # Example
///
/// ```
/// use specfun::{besselh, besselj, bessely, HankelKind};
///
/// let (nu, z) = (2.5, 2.0);
/// let h1 = besselh(nu, HankelKind::First, z, 0);
/// assert!((h1.re - besselj(nu, z, 0)).abs() < 1e-12);
/// assert!((h1.im - bessely(nu, z, 0)).abs() < 1e-12);
/// ```
pub fn besselh(nu: f64, kind: HankelKind, z: f64, n: usize) -> Complex128 {
    unwrap_complex(try_besselh(nu, kind, z, n))
}

/// [`besselj`] for a complex argument.
///
/// # Example
///
/// ```
/// use specfun::{cbesselj, Complex128};
///
/// let z = Complex128::new(2.0, 1.0);
/// let d0 = cbesselj(2.5, z, 0);
/// let d1 = cbesselj(2.5, z, 1);
/// assert!(d0.is_finite() && d1.is_finite());
/// ```
pub fn cbesselj(nu: f64, z: Complex128, n: usize) -> Complex128 {
    unwrap_complex(try_cbesselj(nu, z, n))
}

/// [`bessely`] for a complex argument.
pub fn cbessely(nu: f64, z: Complex128, n: usize) -> Complex128 {
    unwrap_complex(try_cbessely(nu, z, n))
}

/// [`besseli`] for a complex argument.
pub fn cbesseli(nu: f64, z: Complex128, n: usize) -> Complex128 {
    unwrap_complex(try_cbesseli(nu, z, n))
}

/// [`besselk`] for a complex argument.
pub fn cbesselk(nu: f64, z: Complex128, n: usize) -> Complex128 {
    unwrap_complex(try_cbesselk(nu, z, n))
}

/// [`besselh`] for a complex argument.
///
/// # Example
///
/// ```
/// use specfun::{cbesselh, cbesselj, cbessely, Complex128, HankelKind};
///
/// let z = Complex128::new(2.0, 1.0);
/// let h2 = cbesselh(1.5, HankelKind::Second, z, 0);
/// let expected = cbesselj(1.5, z, 0) - Complex128::I * cbessely(1.5, z, 0);
/// assert!((h2 - expected).abs() < 1e-12);
/// ```
pub fn cbesselh(nu: f64, kind: HankelKind, z: Complex128, n: usize) -> Complex128 {
    unwrap_complex(try_cbesselh(nu, kind, z, n))
}

// ============================================================================
// Tests (dispatch-level; numerical coverage lives in tests/)
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limits_first_kind() {
        assert_eq!(zero_limit_first_kind(0.0), 1.0);
        assert_eq!(zero_limit_first_kind(2.5), 0.0);
        assert_eq!(zero_limit_first_kind(-3.0), 0.0);
        // sign follows 1/Γ(ν+1): Γ(-0.4) < 0
        assert_eq!(zero_limit_first_kind(-1.4), f64::NEG_INFINITY);
        // Γ(0.6) > 0
        assert_eq!(zero_limit_first_kind(-0.4), f64::INFINITY);
    }

    #[test]
    fn test_zero_limits_second_kind() {
        assert_eq!(zero_limit_second_kind(0.0), f64::NEG_INFINITY);
        assert_eq!(zero_limit_second_kind(1.5), f64::NEG_INFINITY);
        assert_eq!(zero_limit_second_kind(-1.0), f64::INFINITY);
        assert_eq!(zero_limit_second_kind(-2.0), f64::NEG_INFINITY);
        // cos(0.4π) > 0 → -∞; cos(0.6π) < 0 → +∞
        assert_eq!(zero_limit_second_kind(-0.4), f64::NEG_INFINITY);
        assert_eq!(zero_limit_second_kind(-0.6), f64::INFINITY);
        // half-integer reflection collapses to J(0) = 0
        assert_eq!(zero_limit_second_kind(-0.5), 0.0);
    }

    #[test]
    fn test_half_order_detection() {
        assert_eq!(half_order(0.5), Some(0));
        assert_eq!(half_order(2.5), Some(2));
        assert_eq!(half_order(-1.5), Some(-2));
        assert_eq!(half_order(1.0), None);
        assert_eq!(half_order(0.4), None);
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            try_besselj(1.4, -2.0, 0),
            Err(Error::Domain { .. })
        ));
        assert!(matches!(
            try_bessely(2.0, -1.0, 0),
            Err(Error::Domain { .. })
        ));
        assert!(matches!(
            try_besselk(0.5, -3.0, 0),
            Err(Error::Domain { .. })
        ));
        // integer order is fine on the negative axis for J and I
        assert!(try_besselj(2.0, -1.5, 0).is_ok());
        assert!(try_besseli(3.0, -1.5, 0).is_ok());
    }

    #[test]
    fn test_unchecked_conventions() {
        assert!(besselj(1.4, -2.0, 0).is_nan());
        assert!(bessely(0.5, -1.0, 0).is_nan());
        assert_eq!(besselk(1.0, 0.0, 0), f64::INFINITY);
        assert_eq!(besseli(0.0, 800.0, 0), f64::INFINITY);
        assert!(besselj(f64::NAN, 1.0, 0).is_nan());
        assert!(besselj(1.0, f64::NAN, 0).is_nan());
    }

    #[test]
    fn test_hankel_kind_composition() {
        let (nu, z) = (0.3, 1.7);
        let h1 = besselh(nu, HankelKind::First, z, 0);
        let h2 = besselh(nu, HankelKind::Second, z, 0);
        assert!((h1.re - h2.re).abs() < 1e-15);
        assert!((h1.im + h2.im).abs() < 1e-15);
    }
}
