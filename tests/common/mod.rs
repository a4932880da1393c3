//! Shared assertions for the integration suites.
#![allow(dead_code)]

use specfun::Complex128;

/// Absolute-or-relative closeness check with a readable failure message.
/// Exact matches (including signed zeros and limits) pass at any
/// tolerance, so edge cases can assert with `tol = 0.0`.
pub fn assert_close(actual: f64, expected: f64, tol: f64, msg: &str) {
    if actual == expected {
        return;
    }
    if actual.is_nan() && expected.is_nan() {
        return;
    }
    if actual.is_infinite() && expected.is_infinite() {
        assert_eq!(
            actual.is_sign_positive(),
            expected.is_sign_positive(),
            "{}: infinity sign mismatch",
            msg
        );
        return;
    }
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

/// Complex closeness check.
pub fn assert_close_c(actual: Complex128, expected: Complex128, tol: f64, msg: &str) {
    if actual.is_nan() && expected.is_nan() {
        return;
    }
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

/// Verify a residual against the scale of the terms that formed it.
pub fn assert_residual(residual: f64, scale: f64, tol: f64, msg: &str) {
    assert!(
        residual.abs() <= tol * scale.max(1.0),
        "{}: residual {} exceeds {} x scale {}",
        msg,
        residual,
        tol,
        scale
    );
}
