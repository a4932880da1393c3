//! General-order complex-argument engine.
//!
//! Evaluates J, Y, I, K for real order ν ≥ 0 and complex z ≠ 0, combining
//! the small-argument series, the large-argument expansions, the
//! non-integer connection formulas, order recurrences in the stable
//! direction, and the left-half-plane continuation formulas
//! (DLMF 10.11, 10.34). Negative orders are reflected by the caller.
//!
//! Order handling: ν is split as n + ν₀ with ν₀ ∈ [0, 1). Y and K bases
//! are evaluated at ν₀ and ν₀+1 (connection formulas, or the logarithmic
//! series when ν₀ snaps to an integer) and raised by forward recurrence —
//! both are dominant in increasing order. J and I go to the target order
//! directly by series where |z| ≤ SERIES_LIMIT; in the asymptotic region
//! J recurs forward below the turning point and both fall back to
//! Miller's backward recurrence above it, normalized by the base-order
//! expansion value.

use super::asymptotic::{i_asymptotic, j_asymptotic, jy_asymptotic, k_asymptotic};
use super::series::{
    besseli_series, besselj_series, besselk0_series, besselk1_series, bessely0_series,
    bessely1_series, SERIES_LIMIT,
};
use crate::complex::Complex128;
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Non-integer orders closer than this to an integer are snapped to the
/// integer path (connection-formula cancellation guard)
const INT_SNAP: f64 = 1e-8;

/// |z| beyond which the oscillation phase has no significant bits left
const PHASE_LIMIT: f64 = 1e15;

/// Largest order the recurrence engine will raise to. Orders beyond this
/// would need the uniform (large-ν) expansions, which are outside the
/// supported envelope.
const MAX_ORDER: f64 = 1e5;

/// Re z beyond which e^z overflows f64
const EXP_OVERFLOW: f64 = 709.0;

/// Rescaling threshold for Miller's backward recurrence
const MILLER_BIG: f64 = 1e250;

/// Extra orders above the target where Miller's recurrence starts
const MILLER_MARGIN: usize = 15;

/// Split ν ≥ 0 into integer part and fractional base order ν₀ ∈ [0, 1),
/// snapping near-integer orders onto the integer path.
fn split_order(v: f64) -> (usize, f64) {
    let n = v.floor();
    let v0 = v - n;
    if v0 > 1.0 - INT_SNAP {
        (n as usize + 1, 0.0)
    } else if v0 < INT_SNAP {
        (n as usize, 0.0)
    } else {
        (n as usize, v0)
    }
}

/// Map a non-finite result to the overflow error.
fn check(func: &'static str, c: Complex128) -> Result<Complex128> {
    if c.is_finite() {
        Ok(c)
    } else {
        Err(Error::overflow(func))
    }
}

/// σ = ±1 selecting the continuation branch: z is rewritten as (-z)·e^{σπi}
/// with the side of the cut chosen by the sign bit of Im z.
fn continuation_sign(z: Complex128) -> f64 {
    if z.im.is_sign_negative() {
        -1.0
    } else {
        1.0
    }
}

/// Forward three-term recurrence for the dominant solutions (Y with the
/// minus sign, K with the plus sign): f_{μ+1} = (2μ/z) f_μ ∓ f_{μ-1}.
fn raise_dominant(
    fa: Complex128,
    fb: Complex128,
    v0: f64,
    n: usize,
    z: Complex128,
    modified: bool,
) -> Complex128 {
    if n == 0 {
        return fa;
    }
    let rz = z.recip();
    let mut prev = fa;
    let mut cur = fb;
    for k in 1..n {
        let mu = v0 + k as f64;
        let next = if modified {
            rz.scale(2.0 * mu) * cur + prev
        } else {
            rz.scale(2.0 * mu) * cur - prev
        };
        prev = cur;
        cur = next;
        if !cur.is_finite() {
            break;
        }
    }
    cur
}

/// Miller's backward recurrence for J (minimal solution above the turning
/// point): recur down from order ν₀ + start, normalize by the known value
/// at ν₀.
fn miller_j(v0: f64, n: usize, z: Complex128, base: Complex128) -> Complex128 {
    let start = n + MILLER_MARGIN + z.abs() as usize;
    let rz = z.recip();

    let mut above = Complex128::ZERO; // f_{k+1}
    let mut cur = Complex128::ONE; // f_k, arbitrary scale
    let mut target = Complex128::ZERO;
    let mut k = start;
    while k > 0 {
        let mu = v0 + k as f64;
        let below = rz.scale(2.0 * mu) * cur - above;
        above = cur;
        cur = below;
        k -= 1;
        if k == n {
            target = cur;
        }
        if cur.abs() > MILLER_BIG {
            cur = cur.scale(1.0 / MILLER_BIG);
            above = above.scale(1.0 / MILLER_BIG);
            target = target.scale(1.0 / MILLER_BIG);
        }
    }
    (target / cur) * base
}

/// Miller's backward recurrence for I: f_{μ-1} = f_{μ+1} + (2μ/z) f_μ.
fn miller_i(v0: f64, n: usize, z: Complex128, base: Complex128) -> Complex128 {
    let start = n + MILLER_MARGIN + z.abs() as usize;
    let rz = z.recip();

    let mut above = Complex128::ZERO;
    let mut cur = Complex128::ONE;
    let mut target = Complex128::ZERO;
    let mut k = start;
    while k > 0 {
        let mu = v0 + k as f64;
        let below = above + rz.scale(2.0 * mu) * cur;
        above = cur;
        cur = below;
        k -= 1;
        if k == n {
            target = cur;
        }
        if cur.abs() > MILLER_BIG {
            cur = cur.scale(1.0 / MILLER_BIG);
            above = above.scale(1.0 / MILLER_BIG);
            target = target.scale(1.0 / MILLER_BIG);
        }
    }
    (target / cur) * base
}

// ============================================================================
// J
// ============================================================================

/// J_ν(z) for ν ≥ 0, z ≠ 0.
pub(crate) fn kernel_j(v: f64, z: Complex128) -> Result<Complex128> {
    if z.re < 0.0 {
        // J_ν((-z)·e^{σπi}) = e^{σνπi} J_ν(-z)
        let sigma = continuation_sign(z);
        let j = kernel_j(v, -z)?;
        return check("besselj", Complex128::cis(sigma * v * PI) * j);
    }
    let a0 = z.abs();
    if a0 > PHASE_LIMIT {
        return Err(Error::precision_loss("besselj"));
    }
    if v > MAX_ORDER {
        return Err(Error::precision_loss("besselj"));
    }
    if a0 <= SERIES_LIMIT {
        return check("besselj", besselj_series(v, z)?);
    }

    let (n, v0) = split_order(v);
    let ja = j_asymptotic(v0, z);
    if n == 0 {
        return check("besselj", ja);
    }
    if v <= a0 {
        let jb = j_asymptotic(v0 + 1.0, z);
        check("besselj", raise_dominant(ja, jb, v0, n, z, false))
    } else {
        check("besselj", miller_j(v0, n, z, ja))
    }
}

// ============================================================================
// J and Y together
// ============================================================================

/// (J_ν(z), Y_ν(z)) for ν ≥ 0, z ≠ 0.
pub(crate) fn kernel_jy(v: f64, z: Complex128) -> Result<(Complex128, Complex128)> {
    if z.re < 0.0 {
        // DLMF 10.11.2 and its conjugate:
        //   J_ν(z) = e^{σνπi} J̃
        //   Y_ν(z) = e^{-σνπi} Ỹ + 2iσ cos(νπ) J̃
        let sigma = continuation_sign(z);
        let (jt, yt) = kernel_jy(v, -z)?;
        let j = Complex128::cis(sigma * v * PI) * jt;
        let y = Complex128::cis(-sigma * v * PI) * yt
            + Complex128::new(0.0, 2.0 * sigma * (v * PI).cos()) * jt;
        return Ok((check("besselj", j)?, check("bessely", y)?));
    }
    let a0 = z.abs();
    if a0 > PHASE_LIMIT {
        return Err(Error::precision_loss("bessely"));
    }
    if v > MAX_ORDER {
        return Err(Error::precision_loss("bessely"));
    }

    let (n, v0) = split_order(v);
    let (j, ya, yb) = if a0 <= SERIES_LIMIT {
        let j = besselj_series(v, z)?;
        if v0 == 0.0 {
            (j, bessely0_series(z)?, bessely1_series(z)?)
        } else {
            // Connection formulas at the base orders:
            //   Y_ν = (J_ν cos νπ - J_{-ν}) / sin νπ
            let s = (v0 * PI).sin();
            let c = (v0 * PI).cos();
            let jv0 = besselj_series(v0, z)?;
            let jv0n = besselj_series(-v0, z)?;
            let jv1 = besselj_series(v0 + 1.0, z)?;
            let jv1n = besselj_series(-v0 - 1.0, z)?;
            let ya = (jv0.scale(c) - jv0n).scale(1.0 / s);
            let yb = (jv1.scale(c) + jv1n).scale(1.0 / s);
            (j, ya, yb)
        }
    } else {
        let (ja, ya) = jy_asymptotic(v0, z);
        let (jb, yb) = jy_asymptotic(v0 + 1.0, z);
        let j = if n == 0 {
            ja
        } else if v <= a0 {
            raise_dominant(ja, jb, v0, n, z, false)
        } else {
            miller_j(v0, n, z, ja)
        };
        (j, ya, yb)
    };

    let y = raise_dominant(ya, yb, v0, n, z, false);
    Ok((check("besselj", j)?, check("bessely", y)?))
}

// ============================================================================
// I
// ============================================================================

/// I_ν(z) for ν ≥ 0, z ≠ 0.
pub(crate) fn kernel_i(v: f64, z: Complex128) -> Result<Complex128> {
    if z.re < 0.0 {
        // I_ν((-z)·e^{σπi}) = e^{σνπi} I_ν(-z)
        let sigma = continuation_sign(z);
        let i = kernel_i(v, -z)?;
        return check("besseli", Complex128::cis(sigma * v * PI) * i);
    }
    if z.im.abs() > PHASE_LIMIT {
        return Err(Error::precision_loss("besseli"));
    }
    if v > MAX_ORDER {
        return Err(Error::precision_loss("besseli"));
    }
    let a0 = z.abs();
    if a0 <= SERIES_LIMIT {
        return check("besseli", besseli_series(v, z)?);
    }
    if z.re > EXP_OVERFLOW {
        return Err(Error::overflow("besseli"));
    }

    let (n, v0) = split_order(v);
    let ia = i_asymptotic(v0, z);
    if n == 0 {
        return check("besseli", ia);
    }
    check("besseli", miller_i(v0, n, z, ia))
}

// ============================================================================
// K
// ============================================================================

/// K_ν(z) for ν ≥ 0, z ≠ 0.
pub(crate) fn kernel_k(v: f64, z: Complex128) -> Result<Complex128> {
    if z.re < 0.0 {
        // DLMF 10.34.2: K_ν(z) = e^{-σνπi} K̃ - σπi I_ν(-z)
        let sigma = continuation_sign(z);
        let kt = kernel_k(v, -z)?;
        let it = kernel_i(v, -z)?;
        let k = Complex128::cis(-sigma * v * PI) * kt + Complex128::new(0.0, -sigma * PI) * it;
        return check("besselk", k);
    }
    if z.im.abs() > PHASE_LIMIT {
        return Err(Error::precision_loss("besselk"));
    }
    if v > MAX_ORDER {
        return Err(Error::precision_loss("besselk"));
    }
    let a0 = z.abs();

    let (n, v0) = split_order(v);
    let (ka, kb) = if a0 <= SERIES_LIMIT {
        if v0 == 0.0 {
            (besselk0_series(z)?, besselk1_series(z)?)
        } else {
            // K_ν = π/2 · (I_{-ν} - I_ν) / sin νπ at the base orders
            let s = (v0 * PI).sin();
            let iv0 = besseli_series(v0, z)?;
            let iv0n = besseli_series(-v0, z)?;
            let iv1 = besseli_series(v0 + 1.0, z)?;
            let iv1n = besseli_series(-v0 - 1.0, z)?;
            let ka = (iv0n - iv0).scale(0.5 * PI / s);
            let kb = (iv1 - iv1n).scale(0.5 * PI / s);
            (ka, kb)
        }
    } else {
        (k_asymptotic(v0, z), k_asymptotic(v0 + 1.0, z))
    };

    check("besselk", raise_dominant(ka, kb, v0, n, z, true))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Complex128, expected: Complex128, tol: f64, msg: &str) {
        let diff = (actual - expected).abs();
        assert!(
            diff < tol || diff < tol * expected.abs(),
            "{}: expected {}, got {}, diff {}",
            msg,
            expected,
            actual,
            diff
        );
    }

    fn real(x: f64) -> Complex128 {
        Complex128::new(x, 0.0)
    }

    #[test]
    fn test_jy_wronskian_sweep() {
        // J_{ν+1} Y_ν - J_ν Y_{ν+1} = 2/(πz) across regions and orders
        let orders = [0.0, 0.3, 1.4, 2.7, 5.2];
        let points = [
            real(0.5),
            real(2.0),
            real(9.0),
            real(15.0),
            Complex128::new(1.0, 1.0),
            Complex128::new(4.0, -2.5),
            Complex128::new(-3.0, 1.0),
            Complex128::new(13.0, 2.0),
        ];
        for &v in &orders {
            for &z in &points {
                let (ja, ya) = kernel_jy(v, z).unwrap();
                let (jb, yb) = kernel_jy(v + 1.0, z).unwrap();
                let w = jb * ya - ja * yb;
                assert_close(w, z.recip().scale(2.0 / PI), 1e-8, "JY Wronskian");
            }
        }
    }

    #[test]
    fn test_ik_wronskian_sweep() {
        // I_ν K_{ν+1} + I_{ν+1} K_ν = 1/z
        let orders = [0.0, 0.3, 1.4, 3.6];
        let points = [
            real(0.7),
            real(3.0),
            real(14.0),
            Complex128::new(2.0, 2.0),
            Complex128::new(-1.5, 0.8),
            Complex128::new(13.0, -3.0),
        ];
        for &v in &orders {
            for &z in &points {
                let i_a = kernel_i(v, z).unwrap();
                let i_b = kernel_i(v + 1.0, z).unwrap();
                let k_a = kernel_k(v, z).unwrap();
                let k_b = kernel_k(v + 1.0, z).unwrap();
                let w = i_a * k_b + i_b * k_a;
                assert_close(w, z.recip(), 1e-8, "IK Wronskian");
            }
        }
    }

    #[test]
    fn test_kernel_j_matches_integer_path() {
        let z = real(3.0);
        let j2 = kernel_j(2.0, z).unwrap();
        assert_close(
            j2,
            real(crate::bessel::integer::bessel_jn(2, 3.0)),
            1e-7,
            "kernel vs NR J2(3)",
        );
    }

    #[test]
    fn test_kernel_high_order_miller() {
        // J_20(14): order above |z|, asymptotic region, Miller path.
        // Cross-check with the integer-path Miller implementation.
        let j = kernel_j(20.0, real(14.0)).unwrap();
        let reference = crate::bessel::integer::bessel_jn(20, 14.0);
        assert_close(j, real(reference), 1e-6, "J20(14)");
    }

    #[test]
    fn test_rotation_identity() {
        // I_ν(x) = e^{-iνπ/2} J_ν(ix) for x > 0
        for &v in &[0.0, 0.4, 1.3, 2.5] {
            for &x in &[0.8, 3.0, 14.0] {
                let lhs = kernel_i(v, real(x)).unwrap();
                let jix = kernel_j(v, Complex128::new(0.0, x)).unwrap();
                let rhs = Complex128::cis(-v * PI / 2.0) * jix;
                assert_close(rhs, lhs, 1e-9, "I/J rotation");
            }
        }
    }

    #[test]
    fn test_schwarz_reflection() {
        // f_ν(conj z) = conj(f_ν(z)) off the negative real axis
        let z = Complex128::new(2.0, 1.5);
        for &v in &[0.3, 1.5, 4.2] {
            let j = kernel_j(v, z).unwrap();
            let jc = kernel_j(v, z.conj()).unwrap();
            assert_close(jc, j.conj(), 1e-10, "Schwarz J");

            let k = kernel_k(v, z).unwrap();
            let kc = kernel_k(v, z.conj()).unwrap();
            assert_close(kc, k.conj(), 1e-10, "Schwarz K");
        }
    }

    #[test]
    fn test_left_half_plane_branch() {
        // On the negative real axis approached from above, J_ν picks up
        // the phase e^{iνπ}.
        let v = 1.4;
        let x = 2.0;
        let above = kernel_j(v, Complex128::new(-x, 0.0)).unwrap();
        let expected = Complex128::cis(v * PI) * kernel_j(v, real(x)).unwrap();
        assert_close(above, expected, 1e-12, "branch above cut");

        // Below the cut: conjugate phase
        let below = kernel_j(v, Complex128::new(-x, -0.0)).unwrap();
        assert_close(below, above.conj(), 1e-12, "branch below cut");
    }

    #[test]
    fn test_overflow_reported() {
        assert_eq!(
            kernel_i(0.5, real(800.0)),
            Err(Error::overflow("besseli")),
            "I overflow"
        );
        assert!(matches!(
            kernel_j(0.3, real(1e16)),
            Err(Error::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn test_near_integer_snap() {
        // Orders within 1e-8 of an integer take the integer path and must
        // stay close to it.
        let z = real(2.0);
        let exact = kernel_jy(1.0, z).unwrap().1;
        let near = kernel_jy(1.0 + 5e-9, z).unwrap().1;
        assert_close(near, exact, 1e-7, "snapped Y");
    }
}
