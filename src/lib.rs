//! # inserts-rs — Electron insert factor modelling for Rust
//!
//! A bivariate spline model for predicting electron insert factors from
//! the geometry of a radiotherapy treatment aperture, paired with a
//! deformability diagnostic that flags predictions lying outside the
//! region where the fitted surface is trustworthy.
//!
//! ## What is an insert factor?
//!
//! Electron treatment fields are usually shaped with a custom insert cut
//! for the patient. The insert factor is the dosimetric correction for
//! that aperture, and it varies smoothly with the aperture's geometry.
//! This crate models the factor as a function of two geometric
//! descriptors:
//!
//! - the **field width** of the insert, and
//! - the **perimeter/area ratio**, which captures elongation.
//!
//! The model fits a smoothed bivariate spline (order two along the width
//! axis, order one along the ratio axis) to measured calibration triples
//! and evaluates it at query coordinates. The spline orders and the
//! deformability gate follow the methodology of
//! <http://dx.doi.org/10.1016/j.ejmp.2015.11.002>.
//!
//! **How prediction works:**
//!
//! 1. The fit domain is widened to the union of the calibration range and
//!    the query range, so evaluation outside the measured region is
//!    defined (extrapolation is allowed, but gated).
//! 2. The surface is fitted by least squares over the degree-(2,1)
//!    tensor-product basis and evaluated at the query points.
//! 3. Each query point is scored for **deformability**: the surface is
//!    refitted with an artificial point at the query location shifted up
//!    and down by a fixed deviation, and the score measures how much of
//!    that shift the surface reproduces at the query. A score near 0
//!    means neighbouring data constrains the fit; a score near 1 means
//!    the prediction would rest on nothing but itself.
//! 4. Predictions with deformability above 0.5 are suppressed and
//!    returned as the invalid sentinel (`None`).
//!
//! ## Quick Start
//!
//! ```rust
//! use inserts_rs::prelude::*;
//!
//! // Measured calibration data for one applicator/energy/SSD setup.
//! let widths = vec![3.0, 3.0, 4.0, 4.0, 5.0, 5.0, 6.0, 6.0, 7.0, 7.0, 8.0, 8.0];
//! let ratios = vec![
//!     1.3333, 1.0, 1.0, 0.75, 0.8, 0.6, 0.6667, 0.5, 0.5714, 0.4286, 0.5, 0.375,
//! ];
//! let factors = vec![
//!     0.9083, 0.925, 0.93, 0.9425, 0.945, 0.955, 0.9567, 0.965, 0.9664, 0.9736,
//!     0.975, 0.9813,
//! ];
//!
//! let calibration = CalibrationSet::new(widths, ratios, factors)?;
//! let model = InsertFactorModel::new(calibration);
//!
//! // A query well inside the measured region is trusted...
//! let inside = model.predict_with_validity(&QueryPoints::scalar(5.5, 0.7))?;
//! let factor = inside.as_scalar().copied().flatten();
//! assert!(factor.is_some());
//!
//! // ...while a far-extrapolated query is suppressed as invalid.
//! let outside = model.predict_with_validity(&QueryPoints::scalar(40.0, 0.1))?;
//! assert_eq!(outside.as_scalar().copied().flatten(), None);
//! # Result::<(), InsertError>::Ok(())
//! ```
//!
//! ## Query shapes
//!
//! Queries may be a single point, a 1-D sequence or a 2-D grid; outputs
//! echo the query shape exactly:
//!
//! ```rust
//! use inserts_rs::prelude::*;
//! # let widths = vec![3.0, 3.0, 4.0, 4.0, 5.0, 5.0, 6.0, 6.0, 7.0, 7.0, 8.0, 8.0];
//! # let ratios = vec![
//! #     1.3333, 1.0, 1.0, 0.75, 0.8, 0.6, 0.6667, 0.5, 0.5714, 0.4286, 0.5, 0.375,
//! # ];
//! # let factors = vec![
//! #     0.9083, 0.925, 0.93, 0.9425, 0.945, 0.955, 0.9567, 0.965, 0.9664, 0.9736,
//! #     0.975, 0.9813,
//! # ];
//! let model = InsertFactorModel::new(CalibrationSet::new(widths, ratios, factors)?);
//!
//! let grid = QueryPoints::matrix(
//!     2,
//!     2,
//!     &[4.5, 5.0, 5.5, 6.0],
//!     &[0.8, 0.7, 0.65, 0.6],
//! )?;
//! let scores = model.deformability(&grid)?;
//! assert_eq!(scores.shape(), QueryShape::Matrix { rows: 2, cols: 2 });
//! assert_eq!(scores.values().len(), 4);
//! # Result::<(), InsertError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, InsertError>`; the `?`
//! operator is idiomatic. Structural problems (mismatched lengths, too
//! few points, non-finite values) fail before any fitting starts;
//! calibration data that cannot support the spline orders fails the fit
//! with [`InsertError::DegenerateData`](prelude::InsertError).
//!
//! ```rust
//! use inserts_rs::prelude::*;
//!
//! let result = CalibrationSet::new(vec![1.0, 2.0], vec![1.0], vec![1.0]);
//! assert!(matches!(result, Err(InsertError::MismatchedInputs { .. })));
//! ```
//!
//! A suppressed prediction is **not** an error: it is the defined output
//! value for a query outside the model's trusted region.
//!
//! ## Model constants
//!
//! | Constant                 | Value | Meaning                                   |
//! |--------------------------|-------|-------------------------------------------|
//! | `DEGREE_WIDTH`           | 2     | Spline order along the width axis         |
//! | `DEGREE_RATIO`           | 1     | Spline order along the ratio axis         |
//! | `MIN_CALIBRATION_POINTS` | 6     | Points required by the spline orders      |
//! | `DEVIATION`              | 0.02  | Shift applied by the deformability test   |
//! | `DEFORMABILITY_LIMIT`    | 0.5   | Gate threshold for suppressing predictions |
//!
//! These are fixed design constants of the reference methodology, not
//! tuning parameters.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! inserts-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Modules
// ============================================================================

// Layer 1: error taxonomy and query containers.
mod primitives;

// Layer 2: bounding boxes, B-spline bases, least squares.
mod math;

// Layer 3: the spline fit and the deformability test.
mod algorithms;

// Layer 4: validation and the gated predictor.
mod engine;

// Layer 5: leave-one-out diagnostics.
mod evaluation;

// Layer 6: the public model surface.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use inserts_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CalibrationSet, InsertError, InsertFactorModel, QueryOutput, QueryPoints, QueryShape,
        DEFORMABILITY_LIMIT, DEGREE_RATIO, DEGREE_WIDTH, DEVIATION, MIN_CALIBRATION_POINTS,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal orchestration.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
