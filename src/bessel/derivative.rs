//! n-th derivatives with respect to the argument.
//!
//! Every Bessel kind satisfies a closed-form derivative recurrence
//! (DLMF 10.6.7 for J, Y, H; 10.29.5 for I, K):
//!
//! ```text
//! J⁽ⁿ⁾_ν = 2⁻ⁿ Σ_{k=0}^{n} (-1)^k C(n,k) J_{ν-n+2k}      (same for Y, H¹, H²)
//! I⁽ⁿ⁾_ν = 2⁻ⁿ Σ_{k=0}^{n}        C(n,k) I_{ν-n+2k}
//! K⁽ⁿ⁾_ν = (-2)⁻ⁿ Σ_{k=0}^{n}     C(n,k) K_{ν-n+2k}
//! ```
//!
//! The sum is over shifted *orders* at the same argument, so the
//! implementation only needs an order-evaluation closure; negative and
//! fractional shifted orders are handled by the dispatch layer the
//! closure points back into.

use super::arg::BesselArg;
use crate::error::Result;

/// Which derivative recurrence applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DerivativeRule {
    /// J, Y, H¹, H²: alternating signs, prefactor 2⁻ⁿ
    Cylinder,
    /// I: all-positive signs, prefactor 2⁻ⁿ
    ModifiedFirst,
    /// K: all-positive signs, prefactor (-2)⁻ⁿ
    ModifiedSecond,
}

/// Evaluate the n-th derivative of a Bessel-type function at fixed
/// argument via its order-shift recurrence. `eval` returns the kind's
/// value at a given order; errors short-circuit.
pub(crate) fn derivative<T, F>(nu: f64, n: usize, rule: DerivativeRule, eval: F) -> Result<T>
where
    T: BesselArg,
    F: Fn(f64) -> Result<T>,
{
    if n == 0 {
        return eval(nu);
    }

    let alternating = rule == DerivativeRule::Cylinder;
    let mut sum = T::from_f64(0.0);
    let mut binom = 1.0; // C(n, k)
    for k in 0..=n {
        let order = nu - n as f64 + 2.0 * k as f64;
        let sign = if alternating && k % 2 == 1 { -1.0 } else { 1.0 };
        sum = sum + eval(order)?.scale(sign * binom);
        binom = binom * (n - k) as f64 / (k + 1) as f64;
    }

    let prefactor = match rule {
        DerivativeRule::ModifiedSecond if n % 2 == 1 => -0.5_f64.powi(n as i32),
        _ => 0.5_f64.powi(n as i32),
    };
    Ok(sum.scale(prefactor))
}

// ============================================================================
// Tests
// ============================================================================
