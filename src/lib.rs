//! # specfun
//!
//! **Bessel and gamma special functions of real order, for real and
//! complex arguments, in pure Rust.**
//!
//! specfun provides the classical cylinder functions — J, Y, I, K and the
//! Hankel functions H¹/H² — for arbitrary real order ν, real or complex
//! argument z, and any order of derivative with respect to z, plus the
//! gamma and log-gamma functions. No Fortran or C libraries are wrapped;
//! every path is implemented natively.
//!
//! ## Features
//!
//! - **Arbitrary real order**: negative and fractional ν via the
//!   reflection and connection formulas
//! - **Real and complex arguments**: `besselj(nu, z, n)` on the real
//!   line, `cbesselj(nu, z, n)` on the complex plane
//! - **Derivatives built in**: the `n` parameter selects ∂ⁿ/∂zⁿ through
//!   the closed-form order-shift recurrences
//! - **Fast paths**: closed forms at half-integer orders, rational
//!   approximations at integer orders on the real axis
//! - **Two error styles**: NaN/∞ numeric conventions, or typed errors
//!   through the `try_` variants
//!
//! ## Quick Start
//!
//! ```
//! use specfun::{besselj, besselk, lngamma, HankelKind, besselh};
//!
//! let nu = 2.5;
//! let z = 2.0;
//!
//! let d0j = besselj(nu, z, 0);    // J_{5/2}(2)
//! let d1j = besselj(nu, z, 1);    // dJ_{5/2}/dz at 2
//! let h1 = besselh(nu, HankelKind::First, z, 0); // complex-valued
//! let k = besselk(nu, z, 0);
//! let lg = lngamma(z);
//! # assert!(d0j.is_finite() && d1j.is_finite() && k.is_finite() && lg.is_finite());
//! # assert!(h1.is_finite());
//! ```
//!
//! ## Accuracy
//!
//! Series, closed-form, and asymptotic interior paths are good to about
//! 1e-10 relative; the integer-order rational fast paths on the real axis
//! inherit ~1e-7 from their coefficient tables. Accuracy degrades near
//! non-integer orders within ~1e-4 of an integer (connection-formula
//! cancellation) and for Hankel functions when e^{|Im z|} dwarfs the
//! recessive part.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bessel;
pub mod complex;
pub mod error;
pub mod gamma;

pub use bessel::{
    besselh, besseli, besselj, besselk, bessely, cbesselh, cbesseli, cbesselj, cbesselk, cbessely,
    try_besselh, try_besseli, try_besselj, try_besselk, try_bessely, try_cbesselh, try_cbesseli,
    try_cbesselj, try_cbesselk, try_cbessely, HankelKind,
};
pub use complex::Complex128;
pub use error::{Error, Result};
pub use gamma::{gamma, lngamma};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bessel::{
        besselh, besseli, besselj, besselk, bessely, cbesselh, cbesseli, cbesselj, cbesselk,
        cbessely, HankelKind,
    };
    pub use crate::complex::Complex128;
    pub use crate::error::{Error, Result};
    pub use crate::gamma::{gamma, lngamma};
}
