//! Leave-one-out percent prediction differences.
//!
//! ## Purpose
//!
//! A cross-validation diagnostic for a calibration set: each point is
//! held out in turn, the gated predictor is run on the remaining points
//! at the held-out coordinate, and the percent difference between the
//! measured and predicted factor is reported.
//!
//! ## Design notes
//!
//! * Reuses the spline fitter and gated predictor unmodified; this
//!   diagnostic adds no numerics of its own.
//! * Scratch buffers for the reduced calibration set are allocated once
//!   and rebuilt per fold.
//! * A held-out point whose prediction is suppressed by the gate yields
//!   NaN, and a zero-valued calibration factor yields the IEEE result of
//!   the division (infinite or NaN). Both are defined outputs; callers
//!   using this diagnostic should guard against zero factors.
//!
//! ## Invariants
//!
//! * The output has exactly one entry per calibration point, in input
//!   order.
//! * Fold `i` is fitted on the `n - 1` points excluding index `i`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::predictor::predict_with_validity;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::InsertError;
use crate::primitives::query::QueryPoints;

/// Percent difference between each measured factor and its leave-one-out
/// gated prediction: `100 * (factor - prediction) / factor`.
pub fn percent_prediction_differences<T: FloatLinalg>(
    widths: &[T],
    ratios: &[T],
    factors: &[T],
) -> Result<Vec<T>, InsertError> {
    Validator::validate_calibration(widths, ratios, factors)?;
    Validator::validate_loo_size(widths.len())?;

    let n = widths.len();
    let hundred = T::from(100.0).unwrap();

    // Scratch buffers for the reduced calibration set, rebuilt per fold.
    let mut train_widths = Vec::with_capacity(n - 1);
    let mut train_ratios = Vec::with_capacity(n - 1);
    let mut train_factors = Vec::with_capacity(n - 1);

    let mut differences = Vec::with_capacity(n);
    for i in 0..n {
        train_widths.clear();
        train_ratios.clear();
        train_factors.clear();
        for j in 0..n {
            if j != i {
                train_widths.push(widths[j]);
                train_ratios.push(ratios[j]);
                train_factors.push(factors[j]);
            }
        }

        let query = QueryPoints::scalar(widths[i], ratios[i]);
        let gated = predict_with_validity(&query, &train_widths, &train_ratios, &train_factors)?;

        let difference = match gated.values()[0] {
            Some(prediction) => hundred * (factors[i] - prediction) / factors[i],
            None => T::nan(),
        };
        differences.push(difference);
    }

    Ok(differences)
}
