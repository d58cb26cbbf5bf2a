//! Linear algebra backend for the spline fit.
//!
//! ## Purpose
//!
//! This module bridges the crate's generic `Float` types to the nalgebra
//! backend that solves the least-squares system of the surface fit.
//!
//! ## Design notes
//!
//! * Solves the rectangular system directly by SVD rather than forming
//!   normal equations; the design matrices are small (a handful of
//!   columns) so SVD cost is negligible and conditioning is better.
//! * An explicit rank check precedes the solve: rank-deficient designs
//!   (collinear calibration data) must fail rather than be silently
//!   pseudo-solved, because a minimum-norm solution has no physical
//!   meaning for this model.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to
//!   nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic `Float` types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve `min ||A c - b||` for a full-rank row-major `rows x cols`
    /// design matrix `A`.
    ///
    /// Returns `None` if the design is rank deficient or the solution is
    /// not finite.
    fn solve_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f64(design, rhs, rows, cols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f32(design, rhs, rows, cols)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based least-squares operations.
pub mod nalgebra_backend {
    use nalgebra::{DMatrix, DVector};

    /// SVD least-squares solve with rank check, f64 precision.
    pub fn solve_least_squares_f64(
        design: &[f64],
        rhs: &[f64],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        let svd = matrix.svd(true, true);
        let sigma_max = svd.singular_values.iter().cloned().fold(0.0_f64, f64::max);
        let sigma_min = svd
            .singular_values
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min);

        let tolerance = f64::EPSILON * rows.max(cols) as f64 * sigma_max;
        if !(sigma_max > 0.0) || sigma_min <= tolerance {
            return None;
        }

        let solution: DVector<f64> = svd.solve(&b, tolerance).ok()?;
        let coefficients = solution.as_slice().to_vec();
        if coefficients.iter().all(|c| c.is_finite()) {
            Some(coefficients)
        } else {
            None
        }
    }

    /// SVD least-squares solve with rank check, f32 precision.
    pub fn solve_least_squares_f32(
        design: &[f32],
        rhs: &[f32],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        let svd = matrix.svd(true, true);
        let sigma_max = svd.singular_values.iter().cloned().fold(0.0_f32, f32::max);
        let sigma_min = svd
            .singular_values
            .iter()
            .cloned()
            .fold(f32::INFINITY, f32::min);

        let tolerance = f32::EPSILON * rows.max(cols) as f32 * sigma_max;
        if !(sigma_max > 0.0) || sigma_min <= tolerance {
            return None;
        }

        let solution: DVector<f32> = svd.solve(&b, tolerance).ok()?;
        let coefficients = solution.as_slice().to_vec();
        if coefficients.iter().all(|c| c.is_finite()) {
            Some(coefficients)
        } else {
            None
        }
    }
}
