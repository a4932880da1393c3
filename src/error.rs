//! Error types for specfun

use thiserror::Error;

/// Result type alias using specfun's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating a special function.
///
/// These surface through the checked (`try_`) API. The unchecked API maps
/// them to the conventional numeric sentinels: [`Error::Overflow`] becomes
/// `∞`, everything else becomes `NaN`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Argument lies outside the function's domain
    #[error("domain error in {func}: {reason}")]
    Domain {
        /// The function being evaluated
        func: &'static str,
        /// Why the argument is outside the domain
        reason: &'static str,
    },

    /// Result magnitude exceeds the representable range
    #[error("overflow in {func}: result too large to represent")]
    Overflow {
        /// The function being evaluated
        func: &'static str,
    },

    /// Argument so large that all significance is lost
    #[error("complete loss of significance in {func}")]
    PrecisionLoss {
        /// The function being evaluated
        func: &'static str,
    },

    /// An internal series or continued fraction failed to converge
    #[error("{func} did not converge after {terms} terms")]
    NoConvergence {
        /// The function being evaluated
        func: &'static str,
        /// Number of terms evaluated before giving up
        terms: usize,
    },
}

impl Error {
    /// Create a domain error
    pub fn domain(func: &'static str, reason: &'static str) -> Self {
        Self::Domain { func, reason }
    }

    /// Create an overflow error
    pub fn overflow(func: &'static str) -> Self {
        Self::Overflow { func }
    }

    /// Create a precision-loss error
    pub fn precision_loss(func: &'static str) -> Self {
        Self::PrecisionLoss { func }
    }

    /// Create a non-convergence error
    pub fn no_convergence(func: &'static str, terms: usize) -> Self {
        Self::NoConvergence { func, terms }
    }
}
