//! # Diminishing-returns curve.
//!
//! [`DrCurve`] compresses a value above a baseline using a logarithmic
//! falloff controlled by a rate parameter. It is parameterized by:
//! - [`baseline`](DrCurve::baseline) the value below which inputs pass through untouched;
//! - [`rate`](DrCurve::rate) how hard values above the baseline are compressed.
//!
//! The forward curve for `value >= baseline` is
//! `baseline * (1 + log10(value / baseline) / rate)`; below the baseline the
//! curve is the identity. A higher rate divides the logarithm harder and so
//! compresses more; at `rate = 1` doubling the input past the baseline adds
//! only ~30% of the baseline to the output.
//!
//! The inverse ([`reverse`](DrCurve::reverse)) undoes the forward mapping:
//! `reverse(apply(v)) == v` on the valid domain. This round-trip is the
//! defining correctness property of the pair.
//!
//! # Example
//! ```rust
//! use hookvisor::DrCurve;
//!
//! let curve = DrCurve::new(100.0, 1.0)?;
//!
//! // Below the baseline: identity, no compression.
//! assert_eq!(curve.apply(60.0), 60.0);
//!
//! // At the baseline: exactly the baseline.
//! assert_eq!(curve.apply(100.0), 100.0);
//!
//! // Double the baseline lands at ~130, triple at ~148.
//! assert!((curve.apply(200.0) - 130.103).abs() < 0.01);
//! assert!((curve.apply(300.0) - 147.712).abs() < 0.01);
//!
//! // The inverse recovers the raw value.
//! assert!((curve.reverse(curve.apply(250.0)) - 250.0).abs() < 1e-9);
//! # Ok::<_, hookvisor::CurveError>(())
//! ```

use crate::error::CurveError;

/// Diminishing-returns curve with validated parameters.
///
/// Construction rejects parameters that cannot define a valid curve
/// (non-positive or non-finite baseline, zero or non-finite rate), so
/// [`apply`](DrCurve::apply) and [`reverse`](DrCurve::reverse) are
/// infallible afterwards.
///
/// ### Notes
/// - The rate is typically positive. A negative rate is accepted but flips
///   compression into reduction, mapping above-baseline values below the
///   baseline; the inverse contract does not cover that region.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CurveParams")
)]
pub struct DrCurve {
    baseline: f64,
    rate: f64,
}

impl DrCurve {
    /// Creates a curve, validating its parameters.
    ///
    /// # Errors
    /// - [`CurveError::NonFinite`] if `baseline` or `rate` is NaN or infinite.
    /// - [`CurveError::NonPositiveBaseline`] if `baseline <= 0` (the baseline
    ///   divides the input value).
    /// - [`CurveError::ZeroRate`] if `rate == 0` (the rate divides the
    ///   logarithm).
    pub fn new(baseline: f64, rate: f64) -> Result<Self, CurveError> {
        if !baseline.is_finite() {
            return Err(CurveError::NonFinite {
                param: "baseline",
                value: baseline,
            });
        }
        if !rate.is_finite() {
            return Err(CurveError::NonFinite {
                param: "rate",
                value: rate,
            });
        }
        if baseline <= 0.0 {
            return Err(CurveError::NonPositiveBaseline { baseline });
        }
        if rate == 0.0 {
            return Err(CurveError::ZeroRate);
        }
        Ok(Self { baseline, rate })
    }

    /// The value below which inputs pass through untouched.
    #[inline]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// The compression rate; higher compresses harder.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Applies the forward curve.
    ///
    /// Values below the baseline (negative values included) return unchanged;
    /// values at or above it grow logarithmically, producing ever-smaller
    /// marginal returns as the input increases.
    pub fn apply(&self, value: f64) -> f64 {
        if value < self.baseline {
            return value;
        }
        self.baseline * (1.0 + (value / self.baseline).log10() / self.rate)
    }

    /// Applies the inverse curve, recovering the raw value.
    ///
    /// Values below the baseline return unchanged. For any `value >= 0` run
    /// through [`apply`](DrCurve::apply) with a positive rate,
    /// `reverse(apply(value))` equals `value` within floating-point
    /// tolerance.
    pub fn reverse(&self, value: f64) -> f64 {
        if value < self.baseline {
            return value;
        }
        self.baseline * 10f64.powf(self.rate * (value / self.baseline - 1.0))
    }
}

/// One-shot forward curve: validates the parameters, then applies them.
///
/// Prefer constructing a [`DrCurve`] when the same parameters are applied
/// repeatedly.
///
/// # Errors
/// Same as [`DrCurve::new`].
///
/// # Example
/// ```rust
/// use hookvisor::apply_dr;
///
/// assert_eq!(apply_dr(60.0, 100.0, 1.0)?, 60.0);
/// assert!(apply_dr(200.0, 0.0, 1.0).is_err());
/// # Ok::<_, hookvisor::CurveError>(())
/// ```
pub fn apply_dr(value: f64, baseline: f64, rate: f64) -> Result<f64, CurveError> {
    Ok(DrCurve::new(baseline, rate)?.apply(value))
}

/// One-shot inverse curve: validates the parameters, then inverts them.
///
/// # Errors
/// Same as [`DrCurve::new`].
pub fn reverse_dr(value: f64, baseline: f64, rate: f64) -> Result<f64, CurveError> {
    Ok(DrCurve::new(baseline, rate)?.reverse(value))
}

/// Raw curve parameters as they appear in data files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CurveParams {
    baseline: f64,
    rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CurveParams> for DrCurve {
    type Error = CurveError;

    fn try_from(params: CurveParams) -> Result<Self, Self::Error> {
        DrCurve::new(params.baseline, params.rate)
    }
}
