//! Deformability-gated prediction.
//!
//! ## Purpose
//!
//! This module combines the spline prediction with the deformability test:
//! interpolated factors are returned only where the surface is trusted,
//! and suppressed with the invalid sentinel elsewhere.
//!
//! ## Design notes
//!
//! * Deformability is computed per query point; the prediction itself is
//!   one batched fit over the full calibration set, so unmasked entries
//!   are bit-identical to an ungated prediction of the same query.
//! * The gate threshold is a fixed design constant of the reference
//!   model, not a tuning parameter.
//! * A suppressed entry is a successful output value meaning "outside the
//!   model's trusted region", never an error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::deformability::deformability;
use crate::algorithms::spline::fit_and_evaluate;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::InsertError;
use crate::primitives::query::{QueryOutput, QueryPoints};

/// Deformability above which a prediction is suppressed as invalid.
pub const DEFORMABILITY_LIMIT: f64 = 0.5;

/// Predict insert factors at the query points, masking out entries whose
/// deformability exceeds [`DEFORMABILITY_LIMIT`].
///
/// The output echoes the query shape; suppressed entries are `None`.
pub fn predict_with_validity<T: FloatLinalg>(
    query: &QueryPoints<T>,
    data_widths: &[T],
    data_ratios: &[T],
    data_factors: &[T],
) -> Result<QueryOutput<Option<T>>, InsertError> {
    let limit = T::from(DEFORMABILITY_LIMIT).unwrap();

    let scores = deformability(query, data_widths, data_ratios, data_factors)?;
    let predictions = fit_and_evaluate(
        query.widths(),
        query.ratios(),
        data_widths,
        data_ratios,
        data_factors,
    )?;

    let values: Vec<Option<T>> = scores
        .values()
        .iter()
        .zip(predictions)
        .map(|(&score, prediction)| {
            if score > limit {
                None
            } else {
                Some(prediction)
            }
        })
        .collect();

    Ok(QueryOutput::new(values, query.shape()))
}
