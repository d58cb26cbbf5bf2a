//! Input validation for calibration data and queries.
//!
//! ## Purpose
//!
//! This module provides validation for calibration sets and query points
//! before any numeric work starts. It checks input lengths, minimum point
//! counts and finiteness.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first error encountered.
//! * **Efficiency**: checks are ordered from cheap to expensive.
//! * **Generics**: validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective structural constraints.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * No sorting, transformation or correction of inputs.
//! * No rank/collinearity analysis — that is the fitter's failure domain.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::spline::MIN_CALIBRATION_POINTS;
use crate::primitives::errors::InsertError;
use crate::primitives::query::QueryPoints;

/// Validation utility for calibration data and query points.
///
/// All methods return `Result<(), InsertError>` and fail fast upon the
/// first violation.
pub struct Validator;

impl Validator {
    /// Validate a calibration triple for fitting.
    pub fn validate_calibration<T: Float>(
        widths: &[T],
        ratios: &[T],
        factors: &[T],
    ) -> Result<(), InsertError> {
        // Check 1: non-empty arrays
        if widths.is_empty() || ratios.is_empty() || factors.is_empty() {
            return Err(InsertError::EmptyInput);
        }

        // Check 2: matching lengths
        if widths.len() != ratios.len() || widths.len() != factors.len() {
            return Err(InsertError::MismatchedInputs {
                width_len: widths.len(),
                ratio_len: ratios.len(),
                factor_len: factors.len(),
            });
        }

        // Check 3: enough points for the spline orders
        if widths.len() < MIN_CALIBRATION_POINTS {
            return Err(InsertError::TooFewPoints {
                got: widths.len(),
                min: MIN_CALIBRATION_POINTS,
            });
        }

        // Check 4: all values finite
        Self::validate_finite(widths, "width")?;
        Self::validate_finite(ratios, "ratio_perim_area")?;
        Self::validate_finite(factors, "factor")?;

        Ok(())
    }

    /// Validate the coordinates of a query.
    pub fn validate_query<T: Float>(query: &QueryPoints<T>) -> Result<(), InsertError> {
        Self::validate_finite(query.widths(), "query width")?;
        Self::validate_finite(query.ratios(), "query ratio_perim_area")?;
        Ok(())
    }

    /// Validate the calibration size for the leave-one-out diagnostic.
    ///
    /// Every fold drops one point, so one more point than the fit minimum
    /// is required.
    pub fn validate_loo_size(n: usize) -> Result<(), InsertError> {
        if n < MIN_CALIBRATION_POINTS + 1 {
            return Err(InsertError::TooFewPoints {
                got: n,
                min: MIN_CALIBRATION_POINTS + 1,
            });
        }
        Ok(())
    }

    /// Check every value of a slice for finiteness.
    fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), InsertError> {
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(InsertError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }
}
