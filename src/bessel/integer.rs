//! Integer-order Bessel functions on the real axis (J0, J1, Jn, Y0, Y1,
//! Yn, I0, I1, In, K0, K1, Kn)
//!
//! Uses Numerical Recipes style polynomial approximations with:
//! - Rational polynomial approximation for small arguments
//! - Asymptotic expansion for large arguments
//! - Three-term recurrences for order n (forward where the target is the
//!   dominant solution, Miller's backward algorithm where it is minimal)
//!
//! Accuracy is bounded by the coefficient tables (~1e-7 relative for
//! Y0/Y1/K0/K1, ~1e-8 for J0/J1). The general-order kernel is more
//! accurate but slower; this module is the fast path for real arguments.

use super::coefficients::*;

/// Rescaling thresholds for Miller's backward recurrence
const MILLER_BIG: f64 = 1e10;
const MILLER_SMALL: f64 = 1e-10;

/// Controls how far above n Miller's recurrence starts
const MILLER_ACC: f64 = 160.0;

// ============================================================================
// Bessel Functions of the First Kind
// ============================================================================

/// Compute J₀(x).
///
/// Rational approximation for |x| < 8, asymptotic expansion beyond.
pub(crate) fn bessel_j0(x: f64) -> f64 {
    let ax = x.abs();

    if ax < 8.0 {
        let y = x * x;

        let num = J0_SMALL_P[0]
            + y * (J0_SMALL_P[1]
                + y * (J0_SMALL_P[2]
                    + y * (J0_SMALL_P[3] + y * (J0_SMALL_P[4] + y * J0_SMALL_P[5]))));
        let den = J0_SMALL_Q[0]
            + y * (J0_SMALL_Q[1]
                + y * (J0_SMALL_Q[2]
                    + y * (J0_SMALL_Q[3] + y * (J0_SMALL_Q[4] + y * J0_SMALL_Q[5]))));

        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - FRAC_PI_4;

        let p0 = J0_ASYMP_P[0]
            + y * (J0_ASYMP_P[1] + y * (J0_ASYMP_P[2] + y * (J0_ASYMP_P[3] + y * J0_ASYMP_P[4])));
        let q0 = z
            * (J0_ASYMP_Q[0]
                + y * (J0_ASYMP_Q[1]
                    + y * (J0_ASYMP_Q[2] + y * (J0_ASYMP_Q[3] + y * J0_ASYMP_Q[4]))));

        (TWO_OVER_PI / ax).sqrt() * (xx.cos() * p0 - xx.sin() * q0)
    }
}

/// Compute J₁(x). Odd in x.
pub(crate) fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();

    let result = if ax < 8.0 {
        let y = x * x;

        let num = x
            * (J1_SMALL_P[0]
                + y * (J1_SMALL_P[1]
                    + y * (J1_SMALL_P[2]
                        + y * (J1_SMALL_P[3] + y * (J1_SMALL_P[4] + y * J1_SMALL_P[5])))));
        let den = J1_SMALL_Q[0]
            + y * (J1_SMALL_Q[1]
                + y * (J1_SMALL_Q[2]
                    + y * (J1_SMALL_Q[3] + y * (J1_SMALL_Q[4] + y * J1_SMALL_Q[5]))));

        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - FRAC_3PI_4;

        let p0 = J1_ASYMP_P[0]
            + y * (J1_ASYMP_P[1] + y * (J1_ASYMP_P[2] + y * (J1_ASYMP_P[3] + y * J1_ASYMP_P[4])));
        let q0 = z
            * (J1_ASYMP_Q[0]
                + y * (J1_ASYMP_Q[1]
                    + y * (J1_ASYMP_Q[2] + y * (J1_ASYMP_Q[3] + y * J1_ASYMP_Q[4]))));

        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        sign * (TWO_OVER_PI / ax).sqrt() * (xx.cos() * p0 - xx.sin() * q0)
    };

    result
}

/// Compute Jₙ(x) for any integer n.
///
/// Forward recurrence when |x| exceeds the order (J is then not yet the
/// minimal solution); Miller's backward recurrence with the even-order
/// normalization sum `J₀ + 2ΣJ₂ₖ = 1` otherwise.
pub(crate) fn bessel_jn(n: i64, x: f64) -> f64 {
    // J_{-n} = (-1)^n J_n
    if n < 0 {
        let val = bessel_jn(-n, x);
        return if n % 2 == 0 { val } else { -val };
    }
    if n == 0 {
        return bessel_j0(x);
    }
    if n == 1 {
        return bessel_j1(x);
    }

    let ax = x.abs();
    if ax == 0.0 {
        return 0.0;
    }

    let tox = 2.0 / ax;
    let result = if ax > n as f64 {
        // Upward: J_{j+1} = (2j/x) J_j - J_{j-1}
        let mut bjm = bessel_j0(ax);
        let mut bj = bessel_j1(ax);
        for j in 1..n {
            let bjp = j as f64 * tox * bj - bjm;
            bjm = bj;
            bj = bjp;
        }
        bj
    } else {
        // Miller's algorithm: recur down from an even starting order well
        // above n, accumulating the normalization sum over even orders.
        let m = (n + (MILLER_ACC * n as f64).sqrt() as i64 + 1) & !1;
        let mut jsum = false;
        let mut sum = 0.0;
        let mut ans = 0.0;
        let mut bjp = 0.0_f64;
        let mut bj = 1.0_f64;
        for j in (1..=m).rev() {
            let bjm = j as f64 * tox * bj - bjp;
            bjp = bj;
            bj = bjm;
            if bj.abs() > MILLER_BIG {
                bj *= MILLER_SMALL;
                bjp *= MILLER_SMALL;
                ans *= MILLER_SMALL;
                sum *= MILLER_SMALL;
            }
            if jsum {
                sum += bj;
            }
            jsum = !jsum;
            if j == n {
                ans = bjp;
            }
        }
        sum = 2.0 * sum - bj;
        ans / sum
    };

    if x < 0.0 && n % 2 == 1 {
        -result
    } else {
        result
    }
}

// ============================================================================
// Bessel Functions of the Second Kind (Neumann Functions)
// ============================================================================

/// Compute Y₀(x).
///
/// Domain x > 0: Y₀(0⁺) = -∞, and x < 0 returns NaN.
pub(crate) fn bessel_y0(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }

    if x < 8.0 {
        let y = x * x;

        let num = Y0_SMALL_P[0]
            + y * (Y0_SMALL_P[1]
                + y * (Y0_SMALL_P[2]
                    + y * (Y0_SMALL_P[3] + y * (Y0_SMALL_P[4] + y * Y0_SMALL_P[5]))));
        let den = Y0_SMALL_Q[0]
            + y * (Y0_SMALL_Q[1]
                + y * (Y0_SMALL_Q[2]
                    + y * (Y0_SMALL_Q[3] + y * (Y0_SMALL_Q[4] + y * Y0_SMALL_Q[5]))));

        num / den + TWO_OVER_PI * bessel_j0(x) * x.ln()
    } else {
        let z = 8.0 / x;
        let y = z * z;
        let xx = x - FRAC_PI_4;

        // Same P0/Q0 polynomials as J0, sine phase instead of cosine
        let p0 = J0_ASYMP_P[0]
            + y * (J0_ASYMP_P[1] + y * (J0_ASYMP_P[2] + y * (J0_ASYMP_P[3] + y * J0_ASYMP_P[4])));
        let q0 = z
            * (J0_ASYMP_Q[0]
                + y * (J0_ASYMP_Q[1]
                    + y * (J0_ASYMP_Q[2] + y * (J0_ASYMP_Q[3] + y * J0_ASYMP_Q[4]))));

        (TWO_OVER_PI / x).sqrt() * (xx.sin() * p0 + xx.cos() * q0)
    }
}

/// Compute Y₁(x).
///
/// Domain x > 0: Y₁(0⁺) = -∞, and x < 0 returns NaN.
pub(crate) fn bessel_y1(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }

    if x < 8.0 {
        let y = x * x;

        let num = x
            * (Y1_SMALL_P[0]
                + y * (Y1_SMALL_P[1]
                    + y * (Y1_SMALL_P[2]
                        + y * (Y1_SMALL_P[3] + y * (Y1_SMALL_P[4] + y * Y1_SMALL_P[5])))));
        let den = Y1_SMALL_Q[0]
            + y * (Y1_SMALL_Q[1]
                + y * (Y1_SMALL_Q[2]
                    + y * (Y1_SMALL_Q[3]
                        + y * (Y1_SMALL_Q[4] + y * (Y1_SMALL_Q[5] + y * Y1_SMALL_Q[6])))));

        num / den + TWO_OVER_PI * (bessel_j1(x) * x.ln() - 1.0 / x)
    } else {
        let z = 8.0 / x;
        let y = z * z;
        let xx = x - FRAC_3PI_4;

        // Same P1/Q1 polynomials as J1
        let p0 = J1_ASYMP_P[0]
            + y * (J1_ASYMP_P[1] + y * (J1_ASYMP_P[2] + y * (J1_ASYMP_P[3] + y * J1_ASYMP_P[4])));
        let q0 = z
            * (J1_ASYMP_Q[0]
                + y * (J1_ASYMP_Q[1]
                    + y * (J1_ASYMP_Q[2] + y * (J1_ASYMP_Q[3] + y * J1_ASYMP_Q[4]))));

        (TWO_OVER_PI / x).sqrt() * (xx.sin() * p0 + xx.cos() * q0)
    }
}

/// Compute Yₙ(x) for any integer n. Domain x > 0.
///
/// Upward recurrence from Y₀, Y₁: Y is the dominant solution, so the
/// forward direction is stable for all orders.
pub(crate) fn bessel_yn(n: i64, x: f64) -> f64 {
    // Y_{-n} = (-1)^n Y_n
    if n < 0 {
        let val = bessel_yn(-n, x);
        return if n % 2 == 0 { val } else { -val };
    }
    if n == 0 {
        return bessel_y0(x);
    }
    if n == 1 {
        return bessel_y1(x);
    }
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }

    let tox = 2.0 / x;
    let mut bym = bessel_y0(x);
    let mut by = bessel_y1(x);
    for j in 1..n {
        let byp = j as f64 * tox * by - bym;
        bym = by;
        by = byp;
    }
    by
}

// ============================================================================
// Modified Bessel Functions of the First Kind
// ============================================================================

/// Compute I₀(x).
///
/// Power series for |x| <= 15, asymptotic expansion beyond. Even in x,
/// grows like e^|x| and overflows to +∞ for |x| ≳ 713.
pub(crate) fn bessel_i0(x: f64) -> f64 {
    let ax = x.abs();

    if ax <= 15.0 {
        // I0(x) = sum_{k=0}^∞ (x/2)^{2k} / (k!)²
        let z = ax * ax;
        let mut sum = 1.0;
        let mut term = 1.0;

        for k in 1..30 {
            term *= z / (4.0 * (k as f64) * (k as f64));
            sum += term;
            if term.abs() < sum.abs() * 1e-16 {
                break;
            }
        }

        sum
    } else {
        // I0(x) ≈ exp(x) / sqrt(2πx) * P(1/x)
        let z = 1.0 / ax;

        let poly = (((((I0_ASYMP[6] * z + I0_ASYMP[5]) * z + I0_ASYMP[4]) * z + I0_ASYMP[3]) * z
            + I0_ASYMP[2])
            * z
            + I0_ASYMP[1])
            * z
            + I0_ASYMP[0];

        ax.exp() / (2.0 * std::f64::consts::PI * ax).sqrt() * poly
    }
}

/// Compute I₁(x). Odd in x.
pub(crate) fn bessel_i1(x: f64) -> f64 {
    let ax = x.abs();

    let result = if ax <= 15.0 {
        // I1(x) = (x/2) * sum_{k=0}^∞ (x/2)^{2k} / (k!(k+1)!)
        let z = ax * ax;
        let mut sum = 0.5;
        let mut term = 0.5;

        for k in 1..30 {
            term *= z / (4.0 * (k as f64) * ((k + 1) as f64));
            sum += term;
            if term.abs() < sum.abs() * 1e-16 {
                break;
            }
        }

        ax * sum
    } else {
        let z = 1.0 / ax;

        let poly = (((((I1_ASYMP[6] * z + I1_ASYMP[5]) * z + I1_ASYMP[4]) * z + I1_ASYMP[3]) * z
            + I1_ASYMP[2])
            * z
            + I1_ASYMP[1])
            * z
            + I1_ASYMP[0];

        ax.exp() / (2.0 * std::f64::consts::PI * ax).sqrt() * poly
    };

    if x < 0.0 { -result } else { result }
}

/// Compute Iₙ(x) for any integer n.
///
/// I is the minimal solution in increasing order, so order is raised by
/// Miller's backward recurrence normalized against I₀.
pub(crate) fn bessel_in(n: i64, x: f64) -> f64 {
    // I_{-n} = I_n
    let n = n.abs();
    if n == 0 {
        return bessel_i0(x);
    }
    if n == 1 {
        return bessel_i1(x);
    }

    let ax = x.abs();
    if ax == 0.0 {
        return 0.0;
    }

    let tox = 2.0 / ax;
    let m = 2 * (n + (MILLER_ACC * n as f64).sqrt() as i64);
    let mut bip = 0.0_f64;
    let mut bi = 1.0_f64;
    let mut ans = 0.0_f64;
    for j in (1..=m).rev() {
        // I_{j-1} = I_{j+1} + (2j/x) I_j
        let bim = bip + j as f64 * tox * bi;
        bip = bi;
        bi = bim;
        if bi.abs() > MILLER_BIG {
            ans *= MILLER_SMALL;
            bi *= MILLER_SMALL;
            bip *= MILLER_SMALL;
        }
        if j == n {
            ans = bip;
        }
    }
    ans *= bessel_i0(ax) / bi;

    if x < 0.0 && n % 2 == 1 {
        -ans
    } else {
        ans
    }
}

// ============================================================================
// Modified Bessel Functions of the Second Kind
// ============================================================================

/// Compute K₀(x).
///
/// Domain x > 0: K₀(0⁺) = +∞, and x < 0 returns NaN.
pub(crate) fn bessel_k0(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }

    if x <= 2.0 {
        // K0(x) = -ln(x/2) * I0(x) + polynomial
        let z = x * x / 4.0;

        let i0 = bessel_i0(x);
        let poly = (((((K0_SMALL[6] * z + K0_SMALL[5]) * z + K0_SMALL[4]) * z + K0_SMALL[3]) * z
            + K0_SMALL[2])
            * z
            + K0_SMALL[1])
            * z
            + K0_SMALL[0];

        -(x / 2.0).ln() * i0 + poly
    } else {
        // K0(x) ≈ sqrt(π/(2x)) * exp(-x) * P(1/x)
        let z = 2.0 / x;

        let poly = (((((K0_LARGE[6] * z + K0_LARGE[5]) * z + K0_LARGE[4]) * z + K0_LARGE[3]) * z
            + K0_LARGE[2])
            * z
            + K0_LARGE[1])
            * z
            + K0_LARGE[0];

        (-x).exp() / x.sqrt() * poly
    }
}

/// Compute K₁(x).
///
/// Domain x > 0: K₁(0⁺) = +∞, and x < 0 returns NaN.
pub(crate) fn bessel_k1(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }

    if x <= 2.0 {
        // K1(x) = ln(x/2)*I1(x) + (1/x)*P(x²/4)
        let y = x * x / 4.0;

        let i1 = bessel_i1(x);
        let poly = K1_SMALL[0]
            + y * (K1_SMALL[1]
                + y * (K1_SMALL[2]
                    + y * (K1_SMALL[3] + y * (K1_SMALL[4] + y * (K1_SMALL[5] + y * K1_SMALL[6])))));

        (x / 2.0).ln() * i1 + poly / x
    } else {
        let y = 2.0 / x;

        let poly = K1_LARGE[0]
            + y * (K1_LARGE[1]
                + y * (K1_LARGE[2]
                    + y * (K1_LARGE[3] + y * (K1_LARGE[4] + y * (K1_LARGE[5] + y * K1_LARGE[6])))));

        (-x).exp() / x.sqrt() * poly
    }
}

/// Compute Kₙ(x) for any integer n. Domain x > 0.
///
/// Upward recurrence from K₀, K₁: K is dominant in increasing order, so
/// the forward direction is stable. Overflows to +∞ for small x and
/// large n.
pub(crate) fn bessel_kn(n: i64, x: f64) -> f64 {
    // K_{-n} = K_n
    let n = n.abs();
    if n == 0 {
        return bessel_k0(x);
    }
    if n == 1 {
        return bessel_k1(x);
    }
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }

    let tox = 2.0 / x;
    let mut bkm = bessel_k0(x);
    let mut bk = bessel_k1(x);
    for j in 1..n {
        // K_{j+1} = K_{j-1} + (2j/x) K_j
        let bkp = bkm + j as f64 * tox * bk;
        bkm = bk;
        bk = bkp;
    }
    bk
}

// ============================================================================
// Tests
// ============================================================================
