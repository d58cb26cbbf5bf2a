//! Deformability: the outlier-sensitivity test for fitted predictions.
//!
//! ## Purpose
//!
//! The deformability test applies a shift to the spline at a query point
//! to determine whether sufficient calibration information exists there
//! for modelling. A score near 0 means the surrounding data strongly
//! constrains the fit; a score near 1 means an added point at the query
//! location would almost fully explain its own fitted value, i.e. the
//! prediction rests on no corroborating neighbours. For further details
//! see the *Methods: Defining valid prediction regions of the spline*
//! section of <http://dx.doi.org/10.1016/j.ejmp.2015.11.002>.
//!
//! ## Design notes
//!
//! * Each query point costs three spline fits: the baseline and two
//!   augmented refits with the test point appended at
//!   `baseline ± DEVIATION`.
//! * The baseline fit includes the test point in its fit domain so all
//!   three fits share the same knot support.
//! * Batched evaluation is a flat element-wise pass over the query
//!   container, so scalar, vector and grid queries share one code path
//!   and every grid cell is visited exactly once.
//!
//! ## Invariants
//!
//! * The batched output has exactly the query's shape.
//! * Scratch arrays are rebuilt per point; calibration inputs are never
//!   mutated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::spline::fit_and_evaluate;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::InsertError;
use crate::primitives::query::{QueryOutput, QueryPoints};

/// Deviation applied to the surface at the test point, in insert factor
/// units.
pub const DEVIATION: f64 = 0.02;

/// Deformability of the fit at a single `(width, ratio)` test point.
///
/// Returns the larger of the two sensitivities obtained by shifting the
/// appended point up and down by [`DEVIATION`].
pub fn deformability_at<T: FloatLinalg>(
    width: T,
    ratio: T,
    data_widths: &[T],
    data_ratios: &[T],
    data_factors: &[T],
) -> Result<T, InsertError> {
    let deviation = T::from(DEVIATION).unwrap();

    let baseline = fit_and_evaluate(&[width], &[ratio], data_widths, data_ratios, data_factors)?[0];

    // Augmented calibration set: the test point appended to the data. The
    // coordinate arrays are shared between both shifted refits; only the
    // appended factor differs.
    let mut augmented_widths = Vec::with_capacity(data_widths.len() + 1);
    augmented_widths.extend_from_slice(data_widths);
    augmented_widths.push(width);

    let mut augmented_ratios = Vec::with_capacity(data_ratios.len() + 1);
    augmented_ratios.extend_from_slice(data_ratios);
    augmented_ratios.push(ratio);

    let mut augmented_factors = Vec::with_capacity(data_factors.len() + 1);
    augmented_factors.extend_from_slice(data_factors);

    augmented_factors.push(baseline + deviation);
    let shifted_up = fit_and_evaluate(
        &[width],
        &[ratio],
        &augmented_widths,
        &augmented_ratios,
        &augmented_factors,
    )?[0];

    let appended = augmented_factors.len() - 1;
    augmented_factors[appended] = baseline - deviation;
    let shifted_down = fit_and_evaluate(
        &[width],
        &[ratio],
        &augmented_widths,
        &augmented_ratios,
        &augmented_factors,
    )?[0];

    let sensitivity_up = (shifted_up - baseline) / deviation;
    let sensitivity_down = (baseline - shifted_down) / deviation;

    Ok(sensitivity_up.max(sensitivity_down))
}

/// Deformability of the fit at every point of a query, echoing the query
/// shape.
pub fn deformability<T: FloatLinalg>(
    query: &QueryPoints<T>,
    data_widths: &[T],
    data_ratios: &[T],
    data_factors: &[T],
) -> Result<QueryOutput<T>, InsertError> {
    let mut scores = Vec::with_capacity(query.len());
    for (&width, &ratio) in query.widths().iter().zip(query.ratios().iter()) {
        scores.push(deformability_at(
            width,
            ratio,
            data_widths,
            data_ratios,
            data_factors,
        )?);
    }
    Ok(QueryOutput::new(scores, query.shape()))
}
