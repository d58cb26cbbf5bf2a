//! Bivariate spline surface fitting and evaluation.
//!
//! ## Purpose
//!
//! This module fits the smoothed bivariate surface that models electron
//! insert factors as a function of field width and perimeter/area ratio,
//! and evaluates it at query coordinates. The spline orders are two along
//! the width axis and one along the ratio axis; for justification of this
//! combination for electron insert factor modelling see the *Methods:
//! Bivariate spline model* section of
//! <http://dx.doi.org/10.1016/j.ejmp.2015.11.002>.
//!
//! ## Design notes
//!
//! * **Widened fit domain**: the knot vectors are anchored to the union of
//!   the calibration range and the query range on each axis, so the
//!   surface is always defined at the query points. Clipping the domain to
//!   the data range would forbid extrapolation.
//! * **Smoothing via basis coarseness**: at the reference smoothing level
//!   the knot set carries no interior knots, so the surface is the
//!   least-squares member of the degree-(2,1) tensor space. This matches
//!   the reference model's behaviour at its default smoothing factor for
//!   calibration sets of this size.
//! * **Fail, don't recover**: a rank-deficient design (collinear
//!   calibration data, zero-extent domain) is reported as
//!   [`InsertError::DegenerateData`]; there is no fallback fit.
//!
//! ## Invariants
//!
//! * The output has exactly one value per query coordinate, in query
//!   order.
//! * Identical inputs produce identical outputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::basis::{basis_count, evaluate_basis, open_knot_vector};
use crate::math::bbox::FitDomain;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::InsertError;

/// Spline order along the width axis.
pub const DEGREE_WIDTH: usize = 2;

/// Spline order along the perimeter/area ratio axis.
pub const DEGREE_RATIO: usize = 1;

/// Minimum number of calibration points required by the spline orders.
///
/// The tensor-product surface carries `(kx + 1) * (ky + 1)` coefficients,
/// so fewer points than that cannot determine a fit.
pub const MIN_CALIBRATION_POINTS: usize = (DEGREE_WIDTH + 1) * (DEGREE_RATIO + 1);

/// Fit the insert factor surface to the calibration data and evaluate it
/// at the query coordinates.
///
/// `query_widths` and `query_ratios` must have equal lengths, as must the
/// three calibration slices. The returned vector holds one interpolated
/// factor per query coordinate.
pub fn fit_and_evaluate<T: FloatLinalg>(
    query_widths: &[T],
    query_ratios: &[T],
    data_widths: &[T],
    data_ratios: &[T],
    data_factors: &[T],
) -> Result<Vec<T>, InsertError> {
    if query_widths.len() != query_ratios.len() {
        return Err(InsertError::ShapeMismatch {
            got: query_ratios.len(),
            expected: query_widths.len(),
        });
    }
    if data_widths.len() != data_ratios.len() || data_widths.len() != data_factors.len() {
        return Err(InsertError::MismatchedInputs {
            width_len: data_widths.len(),
            ratio_len: data_ratios.len(),
            factor_len: data_factors.len(),
        });
    }
    if data_widths.len() < MIN_CALIBRATION_POINTS {
        return Err(InsertError::TooFewPoints {
            got: data_widths.len(),
            min: MIN_CALIBRATION_POINTS,
        });
    }

    let domain = FitDomain::from_union(data_widths, data_ratios, query_widths, query_ratios);
    if !domain.has_extent() {
        return Err(InsertError::DegenerateData);
    }

    let surface = Surface::fit(&domain, data_widths, data_ratios, data_factors)?;

    let mut factors = Vec::with_capacity(query_widths.len());
    for (&width, &ratio) in query_widths.iter().zip(query_ratios.iter()) {
        factors.push(surface.evaluate(width, ratio));
    }
    Ok(factors)
}

// ============================================================================
// Fitted Surface
// ============================================================================

/// A fitted tensor-product surface: knot vectors plus coefficients.
struct Surface<T> {
    width_knots: Vec<T>,
    ratio_knots: Vec<T>,
    ratio_basis_len: usize,
    coefficients: Vec<T>,
}

impl<T: FloatLinalg> Surface<T> {
    /// Solve the least-squares tensor-product fit over the given domain.
    fn fit(
        domain: &FitDomain<T>,
        data_widths: &[T],
        data_ratios: &[T],
        data_factors: &[T],
    ) -> Result<Self, InsertError> {
        let width_knots = open_knot_vector(domain.width_min, domain.width_max, DEGREE_WIDTH, 0);
        let ratio_knots = open_knot_vector(domain.ratio_min, domain.ratio_max, DEGREE_RATIO, 0);
        let width_basis_len = basis_count(width_knots.len(), DEGREE_WIDTH);
        let ratio_basis_len = basis_count(ratio_knots.len(), DEGREE_RATIO);
        let coefficient_count = width_basis_len * ratio_basis_len;

        let rows = data_widths.len();
        let mut design = Vec::with_capacity(rows * coefficient_count);
        for (&width, &ratio) in data_widths.iter().zip(data_ratios.iter()) {
            tensor_row(
                width,
                ratio,
                &width_knots,
                &ratio_knots,
                &mut design,
            );
        }

        let coefficients =
            T::solve_least_squares(&design, data_factors, rows, coefficient_count)
                .ok_or(InsertError::DegenerateData)?;

        Ok(Self {
            width_knots,
            ratio_knots,
            ratio_basis_len,
            coefficients,
        })
    }

    /// Evaluate the fitted surface at one `(width, ratio)` coordinate.
    fn evaluate(&self, width: T, ratio: T) -> T {
        let width_basis = evaluate_basis(width, DEGREE_WIDTH, &self.width_knots);
        let ratio_basis = evaluate_basis(ratio, DEGREE_RATIO, &self.ratio_knots);

        let mut value = T::zero();
        for (i, &bw) in width_basis.iter().enumerate() {
            for (j, &br) in ratio_basis.iter().enumerate() {
                value = value + bw * br * self.coefficients[i * self.ratio_basis_len + j];
            }
        }
        value
    }
}

/// Append the tensor-product design row for one data point.
fn tensor_row<T: FloatLinalg>(
    width: T,
    ratio: T,
    width_knots: &[T],
    ratio_knots: &[T],
    design: &mut Vec<T>,
) {
    let width_basis = evaluate_basis(width, DEGREE_WIDTH, width_knots);
    let ratio_basis = evaluate_basis(ratio, DEGREE_RATIO, ratio_knots);
    for &bw in &width_basis {
        for &br in &ratio_basis {
            design.push(bw * br);
        }
    }
}
