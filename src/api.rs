//! High-level API for insert factor modelling.
//!
//! ## Purpose
//!
//! This module provides the user-facing surface of the crate: a validated
//! [`CalibrationSet`] and an [`InsertFactorModel`] exposing prediction,
//! deformability scoring, gated prediction and the leave-one-out
//! diagnostic.
//!
//! ## Design notes
//!
//! * **Validated**: calibration data is checked once, at construction;
//!   model methods only re-check query coordinates.
//! * **Stateless fits**: every method refits from the calibration data.
//!   Nothing persists between calls, so repeated calls with identical
//!   inputs return identical results.
//! * **Type-safe**: generic over `FloatLinalg` (f32 and f64).
//!
//! ## Key concepts
//!
//! * **Prediction**: the raw spline interpolation at the query points.
//! * **Gated prediction**: the same interpolation with untrusted entries
//!   replaced by `None`.
//! * **Deformability**: the per-point sensitivity score driving the gate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::deformability;
use crate::algorithms::spline;
use crate::engine::predictor;
use crate::engine::validator::Validator;
use crate::evaluation::loo;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::deformability::DEVIATION;
pub use crate::algorithms::spline::{DEGREE_RATIO, DEGREE_WIDTH, MIN_CALIBRATION_POINTS};
pub use crate::engine::predictor::DEFORMABILITY_LIMIT;
pub use crate::primitives::errors::InsertError;
pub use crate::primitives::query::{QueryOutput, QueryPoints, QueryShape};

// ============================================================================
// CalibrationSet
// ============================================================================

/// Measured calibration data for one applicator, energy and
/// source-surface-distance configuration.
///
/// Holds three equal-length sequences: field widths, perimeter/area
/// ratios and measured insert factors. Validated once at construction and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationSet<T> {
    widths: Vec<T>,
    ratios: Vec<T>,
    factors: Vec<T>,
}

impl<T: FloatLinalg> CalibrationSet<T> {
    /// Build a calibration set from measured data.
    ///
    /// Fails if the sequences are empty, disagree in length, contain
    /// non-finite values, or hold fewer than [`MIN_CALIBRATION_POINTS`]
    /// points.
    pub fn new(widths: Vec<T>, ratios: Vec<T>, factors: Vec<T>) -> Result<Self, InsertError> {
        Validator::validate_calibration(&widths, &ratios, &factors)?;
        Ok(Self {
            widths,
            ratios,
            factors,
        })
    }

    /// Number of calibration points.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// A validated set is never empty; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// The measured field widths.
    pub fn widths(&self) -> &[T] {
        &self.widths
    }

    /// The measured perimeter/area ratios.
    pub fn ratios(&self) -> &[T] {
        &self.ratios
    }

    /// The measured insert factors.
    pub fn factors(&self) -> &[T] {
        &self.factors
    }
}

// ============================================================================
// InsertFactorModel
// ============================================================================

/// The insert factor model for one calibration set.
#[derive(Debug, Clone)]
pub struct InsertFactorModel<T> {
    calibration: CalibrationSet<T>,
}

impl<T: FloatLinalg> InsertFactorModel<T> {
    /// Build a model over a validated calibration set.
    pub fn new(calibration: CalibrationSet<T>) -> Self {
        Self { calibration }
    }

    /// The calibration data backing this model.
    pub fn calibration(&self) -> &CalibrationSet<T> {
        &self.calibration
    }

    /// Interpolate insert factors at the query points, without the
    /// deformability gate.
    ///
    /// The fit domain is widened to cover the query, so evaluation
    /// outside the calibration range is defined (extrapolation).
    pub fn predict(&self, query: &QueryPoints<T>) -> Result<QueryOutput<T>, InsertError> {
        Validator::validate_query(query)?;
        let factors = spline::fit_and_evaluate(
            query.widths(),
            query.ratios(),
            &self.calibration.widths,
            &self.calibration.ratios,
            &self.calibration.factors,
        )?;
        Ok(QueryOutput::new(factors, query.shape()))
    }

    /// Deformability score at each query point.
    ///
    /// Scores above [`DEFORMABILITY_LIMIT`] mark predictions the model
    /// cannot support.
    pub fn deformability(&self, query: &QueryPoints<T>) -> Result<QueryOutput<T>, InsertError> {
        Validator::validate_query(query)?;
        deformability::deformability(
            query,
            &self.calibration.widths,
            &self.calibration.ratios,
            &self.calibration.factors,
        )
    }

    /// Interpolate insert factors at the query points, suppressing
    /// entries whose deformability exceeds [`DEFORMABILITY_LIMIT`].
    pub fn predict_with_validity(
        &self,
        query: &QueryPoints<T>,
    ) -> Result<QueryOutput<Option<T>>, InsertError> {
        Validator::validate_query(query)?;
        predictor::predict_with_validity(
            query,
            &self.calibration.widths,
            &self.calibration.ratios,
            &self.calibration.factors,
        )
    }

    /// Leave-one-out percent prediction differences over the calibration
    /// set.
    ///
    /// Entry `i` is `100 * (factor_i - prediction_i) / factor_i`, where
    /// the prediction is the gated prediction from the other `n - 1`
    /// points. Suppressed predictions yield NaN; zero-valued factors
    /// yield non-finite entries.
    pub fn percent_prediction_differences(&self) -> Result<Vec<T>, InsertError> {
        loo::percent_prediction_differences(
            &self.calibration.widths,
            &self.calibration.ratios,
            &self.calibration.factors,
        )
    }
}
