//! Integration tests for besselk / cbesselk.

mod common;

use common::{assert_close, assert_close_c, assert_residual};
use specfun::{besseli, besselk, cbesseli, cbesselk, try_besselk, Complex128, Error};
use std::f64::consts::PI;

const NU_LIST: [f64; 13] = [
    1.4, -1.6, -1.4, -2.6, 1.5, -1.5, 2.5, -2.5, 1.0, -1.0, 0.0, 2.0, -3.0,
];

// ============================================================================
// Known Values
// ============================================================================

#[test]
fn test_known_values() {
    assert_close(besselk(0.0, 1.0, 0), 0.42102443824070834, 1e-6, "K0(1)");
    assert_close(besselk(0.0, 2.0, 0), 0.11389387274953344, 1e-6, "K0(2)");
    assert_close(besselk(1.0, 1.0, 0), 0.6019072301972346, 1e-6, "K1(1)");
    assert_close(besselk(1.0, 2.0, 0), 0.13986588181652243, 1e-6, "K1(2)");
}

#[test]
fn test_half_integer_closed_forms() {
    for &z in &[0.5, 1.0, 2.0, 6.0] {
        let k_half = (PI / (2.0 * z)).sqrt() * (-z).exp();
        assert_close(besselk(0.5, z, 0), k_half, 1e-12, "K_{1/2}");
        assert_close(besselk(-0.5, z, 0), k_half, 1e-12, "K_{-1/2}");
        assert_close(
            besselk(1.5, z, 0),
            k_half * (1.0 + 1.0 / z),
            1e-11,
            "K_{3/2}",
        );
        assert_close(
            besselk(2.5, z, 0),
            k_half * (1.0 + 3.0 / z + 3.0 / (z * z)),
            1e-11,
            "K_{5/2}",
        );
    }
}

// ============================================================================
// Identities
// ============================================================================

#[test]
fn test_recurrence_identity() {
    // K_{ν+1}(z) - K_{ν-1}(z) = (2ν/z) K_ν(z)
    for &nu in &[0.3, 1.4, 2.5] {
        for &z in &[0.8, 2.0, 9.0, 14.0] {
            let lhs = besselk(nu + 1.0, z, 0) - besselk(nu - 1.0, z, 0);
            let rhs = 2.0 * nu / z * besselk(nu, z, 0);
            assert_close(lhs, rhs, 1e-6, "three-term recurrence");
        }
    }
}

#[test]
fn test_order_symmetry() {
    // K_{-ν} = K_ν for every order
    for &nu in &[0.3, 1.4, 2.0, 2.5, 4.7] {
        for &z in &[0.7, 3.0, 14.0] {
            assert_close(
                besselk(-nu, z, 0),
                besselk(nu, z, 0),
                1e-13,
                "K order symmetry",
            );
        }
    }
}

#[test]
fn test_wronskian_with_i() {
    for &nu in &[0.0, 0.4, 1.4, 3.2] {
        for &z in &[0.6, 2.5, 15.0] {
            let w = besseli(nu, z, 0) * besselk(nu + 1.0, z, 0)
                + besseli(nu + 1.0, z, 0) * besselk(nu, z, 0);
            assert_close(w, 1.0 / z, 1e-6, "I/K Wronskian");
        }
    }
}

// ============================================================================
// Derivatives
// ============================================================================

#[test]
fn test_first_derivative_relation() {
    // K'_ν = -(K_{ν-1} + K_{ν+1})/2, and it must agree with a finite
    // difference.
    let h = 1e-6;
    for &nu in &[0.0, 1.4, 2.5] {
        for &z in &[0.9, 2.0, 5.0] {
            let numeric = (besselk(nu, z + h, 0) - besselk(nu, z - h, 0)) / (2.0 * h);
            assert_close(besselk(nu, z, 1), numeric, 1e-4, "dK/dz vs finite diff");
            assert!(besselk(nu, z, 1) < 0.0, "K is strictly decreasing");
        }
    }
}

#[test]
fn test_modified_equation_sweep() {
    // z² K'' + z K' - (z² + ν²) K = 0
    for &nu in &NU_LIST {
        for &z in &[0.5, 2.0, 3.7, 13.0] {
            let f = besselk(nu, z, 0);
            let f1 = besselk(nu, z, 1);
            let f2 = besselk(nu, z, 2);
            let residual = z * z * f2 + z * f1 - (z * z + nu * nu) * f;
            let scale = (z * z * f2).abs().max((z * f1).abs()).max(((z * z + nu * nu) * f).abs());
            assert_residual(residual, scale, 1e-5, "modified Bessel ODE for K");
        }
    }
}

// ============================================================================
// Complex Arguments
// ============================================================================

#[test]
fn test_complex_matches_real_axis() {
    for &nu in &NU_LIST {
        for &x in &[0.7, 2.0, 9.0] {
            let real = besselk(nu, x, 0);
            let complex = cbesselk(nu, Complex128::new(x, 0.0), 0);
            assert_close(complex.re, real, 1e-6, "complex vs real path");
            assert!(complex.im.abs() < 1e-10, "imag part on real axis");
        }
    }
}

#[test]
fn test_complex_wronskian() {
    for &z in &[
        Complex128::new(1.0, 1.0),
        Complex128::new(2.5, -1.5),
        Complex128::new(-1.5, 0.8),
        Complex128::new(13.0, 2.0),
    ] {
        for &nu in &[0.0, 0.3, 1.4] {
            let w = cbesseli(nu, z, 0) * cbesselk(nu + 1.0, z, 0)
                + cbesseli(nu + 1.0, z, 0) * cbesselk(nu, z, 0);
            assert_close_c(w, z.recip(), 1e-8, "complex I/K Wronskian");
        }
    }
}

#[test]
fn test_complex_schwarz_reflection() {
    let z = Complex128::new(1.8, 0.9);
    for &nu in &[0.3, 1.5, 2.0] {
        let a = cbesselk(nu, z.conj(), 0);
        let b = cbesselk(nu, z, 0).conj();
        assert_close_c(a, b, 1e-10, "Schwarz reflection for K");
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_zero_argument() {
    assert_eq!(besselk(0.0, 0.0, 0), f64::INFINITY, "K0(0)");
    assert_eq!(besselk(2.5, 0.0, 0), f64::INFINITY, "K_{{5/2}}(0)");
    assert_eq!(besselk(-1.4, 0.0, 0), f64::INFINITY, "K_{{-1.4}}(0)");
}

#[test]
fn test_negative_argument_is_domain_error() {
    assert!(besselk(0.0, -1.0, 0).is_nan());
    assert!(besselk(1.4, -2.0, 0).is_nan());
    assert!(matches!(
        try_besselk(0.0, -1.0, 0),
        Err(Error::Domain { .. })
    ));
}

#[test]
fn test_overflow_near_origin() {
    // K_ν(z) ~ Γ(ν)/2 (2/z)^ν blows past f64 range for large ν / tiny z
    assert_eq!(besselk(40.0, 1e-9, 0), f64::INFINITY);
    assert!(matches!(
        try_besselk(40.0, 1e-9, 0),
        Err(Error::Overflow { .. })
    ));
}

#[test]
fn test_decay_and_infinity() {
    assert_close(besselk(0.3, f64::INFINITY, 0), 0.0, 0.0, "K at infinity");
    // underflows quietly to zero for large finite z
    assert_close(besselk(1.0, 800.0, 0), 0.0, 1e-300, "K(800)");
    assert!(besselk(f64::NAN, 1.0, 0).is_nan());
    assert!(besselk(1.0, f64::NAN, 0).is_nan());
}
