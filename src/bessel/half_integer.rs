//! Half-integer order Bessel functions in closed form.
//!
//! For ν = m + ½ every Bessel function reduces to elementary functions
//! (the spherical Bessel forms):
//!
//! ```text
//! J_{1/2}(z)  =  √(2/(πz)) sin z       J_{-1/2}(z) =  √(2/(πz)) cos z
//! I_{1/2}(z)  =  √(2/(πz)) sinh z      I_{-1/2}(z) =  √(2/(πz)) cosh z
//! K_{1/2}(z)  =  √(π/(2z)) e^{-z}
//! Y_{n+1/2}(z) = (-1)^{n+1} J_{-n-1/2}(z)
//! ```
//!
//! Other half orders follow from the three-term recurrences. The caller
//! (dispatch in `bessel::mod`) is responsible for only requesting
//! directions in which the recurrence is stable: raising J or I more than
//! a couple of steps past the turning point (order ≈ |z|) amplifies
//! rounding in the dominant companion solution, so those cases go to the
//! general kernel instead.

use super::arg::BesselArg;
use std::f64::consts::{FRAC_2_PI, FRAC_PI_2};

/// √(2/(πz)), the common prefactor of the unmodified/first-kind forms.
fn spherical_prefactor<T: BesselArg>(z: T) -> T {
    z.scale(FRAC_PI_2).recip().sqrt()
}

/// J_{m+1/2}(z) for any integer m, z off the origin.
///
/// m ≥ 1 recurs upward from J_{±1/2}; m ≤ -2 recurs downward. Downward is
/// always stable (it runs toward the dominant solution); upward is the
/// caller-gated direction.
pub(crate) fn besselj_half<T: BesselArg>(m: i64, z: T) -> T {
    let s = spherical_prefactor(z);
    let j_plus = s * z.sin(); // J_{1/2}
    let j_minus = s * z.cos(); // J_{-1/2}

    match m {
        0 => j_plus,
        -1 => j_minus,
        _ if m > 0 => {
            // J_{μ+1} = (2μ/z) J_μ - J_{μ-1}, μ = 1/2, 3/2, ...
            let rz = z.recip();
            let mut fm = j_minus;
            let mut f = j_plus;
            for i in 0..m {
                let mu = i as f64 + 0.5;
                let fp = rz.scale(2.0 * mu) * f - fm;
                fm = f;
                f = fp;
            }
            f
        }
        _ => {
            // J_{μ-1} = (2μ/z) J_μ - J_{μ+1}, μ = -1/2, -3/2, ...
            let rz = z.recip();
            let mut fp = j_plus;
            let mut f = j_minus;
            for i in 0..(-m - 1) {
                let mu = -(i as f64) - 0.5;
                let fm = rz.scale(2.0 * mu) * f - fp;
                fp = f;
                f = fm;
            }
            f
        }
    }
}

/// Y_{m+1/2}(z) through the half-order reflection
/// Y_{n+1/2} = (-1)^{n+1} J_{-n-1/2}.
pub(crate) fn bessely_half<T: BesselArg>(m: i64, z: T) -> T {
    let j = besselj_half(-m - 1, z);
    if m % 2 == 0 {
        -j
    } else {
        j
    }
}

/// I_{m+1/2}(z) for any integer m, z off the origin.
///
/// Same stability contract as [`besselj_half`]: upward (m ≥ 1) is
/// caller-gated, downward is always stable.
pub(crate) fn besseli_half<T: BesselArg>(m: i64, z: T) -> T {
    let s = spherical_prefactor(z);
    let i_plus = s * z.sinh(); // I_{1/2}
    let i_minus = s * z.cosh(); // I_{-1/2}

    match m {
        0 => i_plus,
        -1 => i_minus,
        _ if m > 0 => {
            // I_{μ+1} = I_{μ-1} - (2μ/z) I_μ
            let rz = z.recip();
            let mut fm = i_minus;
            let mut f = i_plus;
            for i in 0..m {
                let mu = i as f64 + 0.5;
                let fp = fm - rz.scale(2.0 * mu) * f;
                fm = f;
                f = fp;
            }
            f
        }
        _ => {
            // I_{μ-1} = I_{μ+1} + (2μ/z) I_μ
            let rz = z.recip();
            let mut fp = i_plus;
            let mut f = i_minus;
            for i in 0..(-m - 1) {
                let mu = -(i as f64) - 0.5;
                let fm = fp + rz.scale(2.0 * mu) * f;
                fp = f;
                f = fm;
            }
            f
        }
    }
}

/// K_{m+1/2}(z) for any integer m, z off the origin.
///
/// K_{-ν} = K_ν collapses negative m onto positive order, and the upward
/// recurrence runs toward the dominant solution, so every half order is
/// stable in closed form.
pub(crate) fn besselk_half<T: BesselArg>(m: i64, z: T) -> T {
    // K_{-(m+1/2)} = K_{(-m-1)+1/2}
    let m = if m < 0 { -m - 1 } else { m };

    let k_half = z.scale(FRAC_2_PI).recip().sqrt() * (-z).exp(); // K_{1/2}
    if m == 0 {
        return k_half;
    }

    // K_{μ+1} = K_{μ-1} + (2μ/z) K_μ, seeded with K_{-1/2} = K_{1/2}
    let rz = z.recip();
    let mut fm = k_half;
    let mut f = k_half;
    for i in 0..m {
        let mu = i as f64 + 0.5;
        let fp = fm + rz.scale(2.0 * mu) * f;
        fm = f;
        f = fp;
    }
    f
}

// ============================================================================
// Tests
// ============================================================================
