//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! Model-quality diagnostics built on the engine:
//! - Leave-one-out percent prediction differences
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Leave-one-out percent prediction differences.
pub mod loo;
