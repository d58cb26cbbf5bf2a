//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Foundational types shared by every other layer:
//! - The crate-wide error taxonomy
//! - Shape-polymorphic query and output containers
//!
//! These types carry no numeric logic of their own.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for calibration, fitting and evaluation.
pub mod errors;

/// Scalar/vector/grid query containers and shape-echoing outputs.
pub mod query;
