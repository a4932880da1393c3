//! Small-argument power series for complex Bessel arguments.
//!
//! ```text
//! J_ν(z) = (z/2)^ν Σ_{k≥0} (-1)^k (z²/4)^k / (k! Γ(ν+k+1))
//! I_ν(z) = (z/2)^ν Σ_{k≥0}        (z²/4)^k / (k! Γ(ν+k+1))
//! ```
//!
//! plus the integer-order logarithmic series for Y₀, Y₁, K₀, K₁
//! (A&S 9.1.11-13, 9.6.11-13), which the kernel needs because the
//! non-integer connection formulas degenerate at integer order.
//!
//! The J/I series converge for every z; they are restricted to
//! |z| ≤ [`SERIES_LIMIT`] so alternating-sum cancellation stays below the
//! accuracy target. Orders may be any real ν > -2 that is not a negative
//! integer (the range the kernel requests).

use crate::complex::Complex128;
use crate::error::{Error, Result};
use crate::gamma::{gamma_sign, lngamma};
use std::f64::consts::{FRAC_2_PI, PI};

/// Largest |z| the series paths are used for
pub(crate) const SERIES_LIMIT: f64 = 12.0;

/// Maximum terms in a series expansion
const MAX_SERIES_TERMS: usize = 300;

/// Relative convergence threshold
const EPSILON: f64 = 1e-16;

/// Absolute floor so series that sum to a zero of the function terminate
const TINY: f64 = 1e-280;

/// Euler-Mascheroni constant γ
const EULER_MASCHERONI: f64 = 0.5772156649015328606065120900824024310422;

/// (z/2)^ν / Γ(ν+1), formed in log space so magnitude and phase cannot
/// overflow separately before they combine.
fn power_prefactor(v: f64, z: Complex128) -> Complex128 {
    let half = z.scale(0.5);
    let ln_mag = v * half.abs().ln() - lngamma(v + 1.0);
    Complex128::from_polar(ln_mag.exp(), v * half.arg()).scale(gamma_sign(v + 1.0))
}

/// J_ν(z) by power series. Caller contract: z ≠ 0, ν > -2 and not a
/// negative integer.
pub(crate) fn besselj_series(v: f64, z: Complex128) -> Result<Complex128> {
    let half = z.scale(0.5);
    let q = -(half * half);

    let mut term = power_prefactor(v, z);
    let mut sum = term;
    for k in 1..=MAX_SERIES_TERMS {
        let kf = k as f64;
        term = term * q.scale(1.0 / (kf * (v + kf)));
        sum = sum + term;
        if term.abs() < sum.abs() * EPSILON + TINY {
            return Ok(sum);
        }
    }
    Err(Error::no_convergence("besselj", MAX_SERIES_TERMS))
}

/// I_ν(z) by power series. Same caller contract as [`besselj_series`].
pub(crate) fn besseli_series(v: f64, z: Complex128) -> Result<Complex128> {
    let half = z.scale(0.5);
    let q = half * half;

    let mut term = power_prefactor(v, z);
    let mut sum = term;
    for k in 1..=MAX_SERIES_TERMS {
        let kf = k as f64;
        term = term * q.scale(1.0 / (kf * (v + kf)));
        sum = sum + term;
        if term.abs() < sum.abs() * EPSILON + TINY {
            return Ok(sum);
        }
    }
    Err(Error::no_convergence("besseli", MAX_SERIES_TERMS))
}

/// Y₀(z) by the logarithmic series (A&S 9.1.13):
///
/// ```text
/// Y₀ = (2/π) [ (ln(z/2) + γ) J₀(z) + Σ_{k≥1} (-1)^{k+1} H_k (z²/4)^k / (k!)² ]
/// ```
pub(crate) fn bessely0_series(z: Complex128) -> Result<Complex128> {
    let j0 = besselj_series(0.0, z)?;
    let t = z.scale(0.5) * z.scale(0.5);
    let log_part = (z.scale(0.5).ln() + Complex128::from(EULER_MASCHERONI)) * j0;

    let mut power = Complex128::ONE; // t^k / (k!)²
    let mut harmonic = 0.0;
    let mut sign = 1.0;
    let mut sum = Complex128::ZERO;
    for k in 1..=MAX_SERIES_TERMS {
        let kf = k as f64;
        power = power * t.scale(1.0 / (kf * kf));
        harmonic += 1.0 / kf;
        let contribution = power.scale(sign * harmonic);
        sum = sum + contribution;
        sign = -sign;
        if contribution.abs() < sum.abs() * EPSILON + TINY {
            return Ok((log_part + sum).scale(FRAC_2_PI));
        }
    }
    Err(Error::no_convergence("bessely", MAX_SERIES_TERMS))
}

/// Y₁(z) by the logarithmic series (A&S 9.1.11 at n = 1):
///
/// ```text
/// Y₁ = (2/π) ln(z/2) J₁(z) - 2/(πz)
///      - (1/π) Σ_{k≥0} (-1)^k (H_k + H_{k+1} - 2γ) (z/2)^{2k+1} / (k!(k+1)!)
/// ```
pub(crate) fn bessely1_series(z: Complex128) -> Result<Complex128> {
    let j1 = besselj_series(1.0, z)?;
    let half = z.scale(0.5);
    let t = half * half;
    let log_part = (half.ln() * j1).scale(FRAC_2_PI) - z.recip().scale(FRAC_2_PI);

    let mut power = half; // (z/2)^{2k+1} / (k!(k+1)!)
    let mut h_k = 0.0;
    let mut h_k1 = 1.0;
    let mut sign = 1.0;
    let mut sum = power.scale(h_k + h_k1 - 2.0 * EULER_MASCHERONI);
    for k in 1..=MAX_SERIES_TERMS {
        let kf = k as f64;
        power = power * t.scale(1.0 / (kf * (kf + 1.0)));
        h_k = h_k1;
        h_k1 += 1.0 / (kf + 1.0);
        sign = -sign;
        let contribution = power.scale(sign * (h_k + h_k1 - 2.0 * EULER_MASCHERONI));
        sum = sum + contribution;
        if contribution.abs() < sum.abs() * EPSILON + TINY {
            return Ok(log_part - sum.scale(1.0 / PI));
        }
    }
    Err(Error::no_convergence("bessely", MAX_SERIES_TERMS))
}

/// K₀(z) by the logarithmic series (A&S 9.6.13):
///
/// ```text
/// K₀ = -(ln(z/2) + γ) I₀(z) + Σ_{k≥1} H_k (z²/4)^k / (k!)²
/// ```
pub(crate) fn besselk0_series(z: Complex128) -> Result<Complex128> {
    let i0 = besseli_series(0.0, z)?;
    let t = z.scale(0.5) * z.scale(0.5);
    let log_part = -((z.scale(0.5).ln() + Complex128::from(EULER_MASCHERONI)) * i0);

    let mut power = Complex128::ONE;
    let mut harmonic = 0.0;
    let mut sum = Complex128::ZERO;
    for k in 1..=MAX_SERIES_TERMS {
        let kf = k as f64;
        power = power * t.scale(1.0 / (kf * kf));
        harmonic += 1.0 / kf;
        let contribution = power.scale(harmonic);
        sum = sum + contribution;
        if contribution.abs() < sum.abs() * EPSILON + TINY {
            return Ok(log_part + sum);
        }
    }
    Err(Error::no_convergence("besselk", MAX_SERIES_TERMS))
}

/// K₁(z) by the logarithmic series (A&S 9.6.11 at n = 1):
///
/// ```text
/// K₁ = ln(z/2) I₁(z) + 1/z
///      - (1/2) Σ_{k≥0} (H_k + H_{k+1} - 2γ) (z/2)^{2k+1} / (k!(k+1)!)
/// ```
pub(crate) fn besselk1_series(z: Complex128) -> Result<Complex128> {
    let i1 = besseli_series(1.0, z)?;
    let half = z.scale(0.5);
    let t = half * half;
    let log_part = half.ln() * i1 + z.recip();

    let mut power = half;
    let mut h_k = 0.0;
    let mut h_k1 = 1.0;
    let mut sum = power.scale(h_k + h_k1 - 2.0 * EULER_MASCHERONI);
    for k in 1..=MAX_SERIES_TERMS {
        let kf = k as f64;
        power = power * t.scale(1.0 / (kf * (kf + 1.0)));
        h_k = h_k1;
        h_k1 += 1.0 / (kf + 1.0);
        let contribution = power.scale(h_k + h_k1 - 2.0 * EULER_MASCHERONI);
        sum = sum + contribution;
        if contribution.abs() < sum.abs() * EPSILON + TINY {
            return Ok(log_part - sum.scale(0.5));
        }
    }
    Err(Error::no_convergence("besselk", MAX_SERIES_TERMS))
}

// ============================================================================
// Tests
// ============================================================================
