//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the surface
//! fit:
//! - Fit-domain bounding boxes (union of data and query ranges)
//! - B-spline knot vectors and Cox-de Boor basis evaluation
//! - Least-squares solving via the nalgebra backend
//!
//! These are reusable building blocks with no model-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit-domain bounding box computation.
pub mod bbox;

/// B-spline knot vectors and basis evaluation.
pub mod basis;

/// Least-squares backend abstraction.
pub mod linalg;
