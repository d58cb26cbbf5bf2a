//! Error taxonomy for insert factor modelling.
//!
//! ## Purpose
//!
//! This module defines [`InsertError`], the single error type surfaced by
//! every fallible operation in the crate. Each variant carries enough
//! context to diagnose the failure without re-running the computation.
//!
//! ## Design notes
//!
//! * **Local propagation**: every error is local to a single fit/evaluate
//!   call; there is no retry and no global error state.
//! * **`no_std` compatible**: `Display` is implemented over `core::fmt`;
//!   `std::error::Error` is provided behind the `std` feature.
//!
//! ## Key concepts
//!
//! * **Validation errors**: raised before any numeric work starts.
//! * **`DegenerateData`**: the one fit-time failure — calibration data that
//!   cannot support the required spline degrees.
//!
//! ## Non-goals
//!
//! * Suppressed predictions are not errors. A query point outside the
//!   trusted region produces the invalid sentinel in the output, never an
//!   `Err`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

/// Errors surfaced by calibration, fitting and evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// One or more input arrays are empty.
    EmptyInput,

    /// Calibration arrays have inconsistent lengths.
    MismatchedInputs {
        /// Length of the width array.
        width_len: usize,
        /// Length of the perimeter/area ratio array.
        ratio_len: usize,
        /// Length of the factor array.
        factor_len: usize,
    },

    /// Too few calibration points to support the spline degrees.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the input.
    InvalidNumericValue(String),

    /// Query coordinate arrays disagree in shape.
    ShapeMismatch {
        /// Number of coordinates provided.
        got: usize,
        /// Number of coordinates the shape requires.
        expected: usize,
    },

    /// Calibration data is degenerate (collinear or without extent on an
    /// axis) and the spline fit cannot be carried out.
    DegenerateData,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::EmptyInput => write!(f, "Input arrays are empty"),
            InsertError::MismatchedInputs {
                width_len,
                ratio_len,
                factor_len,
            } => write!(
                f,
                "Length mismatch: width has {} points, ratio has {}, factor has {}",
                width_len, ratio_len, factor_len
            ),
            InsertError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            InsertError::InvalidNumericValue(context) => {
                write!(f, "Invalid numeric value: {}", context)
            }
            InsertError::ShapeMismatch { got, expected } => write!(
                f,
                "Shape mismatch: got {} query coordinates, expected {}",
                got, expected
            ),
            InsertError::DegenerateData => {
                write!(f, "Degenerate calibration data: spline fit failed")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InsertError {}
