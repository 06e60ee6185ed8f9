//! Error types for curve parameter validation.
//!
//! This module defines [`CurveError`], returned when diminishing-returns
//! curve parameters violate their preconditions.
//!
//! Hook registration, unregistration, and dispatch have no error surface:
//! registration always succeeds and removing an unknown token is a silent
//! no-op. Curve parameters are different — a non-positive baseline or a zero
//! rate would silently turn into NaN/Infinity inside downstream stat math,
//! so they are rejected up front.
//!
//! The type provides helper methods (`as_label`, `as_message`) for
//! logging/metrics, same shape as the rest of the public API.

use thiserror::Error;

/// # Errors produced by curve parameter validation.
///
/// Raised by [`DrCurve::new`](crate::DrCurve::new) and the free functions
/// [`apply_dr`](crate::apply_dr) / [`reverse_dr`](crate::reverse_dr) when the
/// supplied parameters cannot define a valid curve.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CurveError {
    /// The baseline must be strictly positive (it divides the input value).
    #[error("baseline must be positive, got {baseline}")]
    NonPositiveBaseline {
        /// The rejected baseline value.
        baseline: f64,
    },

    /// The rate must be non-zero (it divides the logarithm).
    #[error("rate must be non-zero")]
    ZeroRate,

    /// A parameter was NaN or infinite.
    #[error("{param} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending parameter (`"baseline"` or `"rate"`).
        param: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl CurveError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use hookvisor::CurveError;
    ///
    /// let err = CurveError::ZeroRate;
    /// assert_eq!(err.as_label(), "curve_zero_rate");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CurveError::NonPositiveBaseline { .. } => "curve_non_positive_baseline",
            CurveError::ZeroRate => "curve_zero_rate",
            CurveError::NonFinite { .. } => "curve_non_finite",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            CurveError::NonPositiveBaseline { baseline } => {
                format!("non-positive baseline: {baseline}")
            }
            CurveError::ZeroRate => "zero rate".to_string(),
            CurveError::NonFinite { param, value } => {
                format!("non-finite {param}: {value}")
            }
        }
    }
}
