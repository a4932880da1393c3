//! Integration tests for besseli / cbesseli.

mod common;

use common::{assert_close, assert_close_c, assert_residual};
use specfun::{besseli, besselk, cbesseli, try_besseli, Complex128, Error};
use std::f64::consts::PI;

const NU_LIST: [f64; 13] = [
    1.4, -1.6, -1.4, -2.6, 1.5, -1.5, 2.5, -2.5, 1.0, -1.0, 0.0, 2.0, -3.0,
];

// ============================================================================
// Known Values
// ============================================================================

#[test]
fn test_known_values() {
    assert_close(besseli(0.0, 1.0, 0), 1.2660658777520084, 1e-9, "I0(1)");
    assert_close(besseli(0.0, 2.0, 0), 2.2795853023360673, 1e-9, "I0(2)");
    assert_close(besseli(1.0, 1.0, 0), 0.5651591039924850, 1e-9, "I1(1)");
    assert_close(besseli(1.0, 2.0, 0), 1.5906368546373291, 1e-9, "I1(2)");
}

#[test]
fn test_half_integer_closed_forms() {
    for &z in &[0.5, 1.0, 2.0, 5.0] {
        let s = (2.0 / (PI * z)).sqrt();
        assert_close(besseli(0.5, z, 0), s * z.sinh(), 1e-12, "I_{1/2}");
        assert_close(besseli(-0.5, z, 0), s * z.cosh(), 1e-12, "I_{-1/2}");
        assert_close(
            besseli(1.5, z, 0),
            s * (z.cosh() - z.sinh() / z),
            1e-11,
            "I_{3/2}",
        );
    }
}

// ============================================================================
// Identities
// ============================================================================

#[test]
fn test_recurrence_identity() {
    // I_{ν-1}(z) - I_{ν+1}(z) = (2ν/z) I_ν(z)
    for &nu in &[0.3, 1.4, 2.5] {
        for &z in &[0.8, 2.0, 9.0, 14.0] {
            let lhs = besseli(nu - 1.0, z, 0) - besseli(nu + 1.0, z, 0);
            let rhs = 2.0 * nu / z * besseli(nu, z, 0);
            assert_close(lhs, rhs, 1e-8, "three-term recurrence");
        }
    }
}

#[test]
fn test_wronskian_with_k() {
    // I_ν K_{ν+1} + I_{ν+1} K_ν = 1/z
    for &nu in &[0.0, 0.3, 1.4, 2.6] {
        for &z in &[0.6, 2.0, 9.5, 16.0] {
            let w = besseli(nu, z, 0) * besselk(nu + 1.0, z, 0)
                + besseli(nu + 1.0, z, 0) * besselk(nu, z, 0);
            assert_close(w, 1.0 / z, 1e-6, "I/K Wronskian");
        }
    }
}

#[test]
fn test_negative_order_reflection() {
    // I_{-ν} - I_ν = (2/π) sin(νπ) K_ν
    for &nu in &[0.3, 1.4, 2.6] {
        for &z in &[0.9, 3.0] {
            let lhs = besseli(-nu, z, 0) - besseli(nu, z, 0);
            let rhs = 2.0 / PI * (nu * PI).sin() * besselk(nu, z, 0);
            assert_close(lhs, rhs, 1e-8, "negative-order reflection");
        }
    }
}

#[test]
fn test_negative_integer_order_symmetry() {
    for &z in &[1.0, 3.0] {
        assert_close(besseli(-1.0, z, 0), besseli(1.0, z, 0), 1e-13, "I_{-1} = I_1");
        assert_close(besseli(-3.0, z, 0), besseli(3.0, z, 0), 1e-13, "I_{-3} = I_3");
    }
}

#[test]
fn test_negative_argument_parity() {
    for n in [0_i64, 1, 2, 3] {
        let z = 2.3;
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        assert_close(
            besseli(n as f64, -z, 0),
            sign * besseli(n as f64, z, 0),
            1e-13,
            "parity in z",
        );
    }
}

// ============================================================================
// Derivatives
// ============================================================================

#[test]
fn test_first_derivative_finite_difference() {
    let h = 1e-6;
    for &nu in &[0.0, 1.4, 2.5] {
        for &z in &[0.9, 2.0, 5.0] {
            let numeric = (besseli(nu, z + h, 0) - besseli(nu, z - h, 0)) / (2.0 * h);
            assert_close(besseli(nu, z, 1), numeric, 1e-4, "dI/dz vs finite diff");
        }
    }
}

#[test]
fn test_modified_equation_sweep() {
    // z² I'' + z I' - (z² + ν²) I = 0
    for &nu in &NU_LIST {
        for &z in &[0.5, 2.0, 3.7, 13.0] {
            let f = besseli(nu, z, 0);
            let f1 = besseli(nu, z, 1);
            let f2 = besseli(nu, z, 2);
            let residual = z * z * f2 + z * f1 - (z * z + nu * nu) * f;
            let scale = (z * z * f2).abs().max((z * f1).abs()).max(((z * z + nu * nu) * f).abs());
            assert_residual(residual, scale, 1e-5, "modified Bessel ODE");
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
            let real = besseli(nu, x, 0);
            let complex = cbesseli(nu, Complex128::new(x, 0.0), 0);
            assert_close(complex.re, real, 1e-6, "complex vs real path");
            assert!(complex.im.abs() < 1e-10, "imag part on real axis");
        }
    }
}

#[test]
fn test_complex_schwarz_reflection() {
    let z = Complex128::new(1.5, 1.0);
    for &nu in &[0.3, 1.4, 2.0] {
        let a = cbesseli(nu, z.conj(), 0);
        let b = cbesseli(nu, z, 0).conj();
        assert_close_c(a, b, 1e-11, "Schwarz reflection for I");
    }
}

#[test]
fn test_complex_modified_equation() {
    let nu = 1.4;
    for &z in &[Complex128::new(1.0, 1.5), Complex128::new(-2.0, 1.0)] {
        let f = cbesseli(nu, z, 0);
        let f1 = cbesseli(nu, z, 1);
        let f2 = cbesseli(nu, z, 2);
        let residual = z * z * f2 + z * f1 - (z * z + Complex128::from(nu * nu)) * f;
        let scale = (z * z * f2).abs().max((z * f1).abs()).max(f.abs());
        assert!(
            residual.abs() <= 1e-6 * scale.max(1.0),
            "complex modified ODE residual {} at {}",
            residual.abs(),
            z
        );
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_zero_argument() {
    assert_close(besseli(0.0, 0.0, 0), 1.0, 0.0, "I0(0)");
    assert_close(besseli(2.5, 0.0, 0), 0.0, 0.0, "I_{5/2}(0)");
    assert_close(besseli(-3.0, 0.0, 0), 0.0, 0.0, "I_{-3}(0)");
    assert_eq!(besseli(-1.4, 0.0, 0), f64::NEG_INFINITY, "I_{{-1.4}}(0)");
    assert_eq!(besseli(-0.4, 0.0, 0), f64::INFINITY, "I_{{-0.4}}(0)");
}

#[test]
fn test_overflow() {
    // e^z range ends near z = 709
    assert_eq!(besseli(0.0, 800.0, 0), f64::INFINITY);
    assert_eq!(besseli(0.5, 800.0, 0), f64::INFINITY);
    assert!(matches!(
        try_besseli(0.3, 800.0, 0),
        Err(Error::Overflow { .. })
    ));
    // still finite just below the edge
    assert!(besseli(0.0, 700.0, 0).is_finite());
}

#[test]
fn test_negative_argument_non_integer_order() {
    assert!(besseli(1.4, -2.0, 0).is_nan());
    assert!(matches!(
        try_besseli(1.4, -2.0, 0),
        Err(Error::Domain { .. })
    ));
}

#[test]
fn test_nan_and_infinity() {
    assert!(besseli(f64::NAN, 2.0, 0).is_nan());
    assert!(besseli(1.0, f64::NAN, 0).is_nan());
    assert_eq!(besseli(0.3, f64::INFINITY, 0), f64::INFINITY);
    assert_eq!(besseli(1.0, f64::NEG_INFINITY, 0), f64::NEG_INFINITY);
}
