//! B-spline knot vectors and basis evaluation.
//!
//! ## Purpose
//!
//! This module provides the univariate building blocks of the bivariate
//! surface fit: open knot vectors over a fit-domain interval and iterative
//! Cox-de Boor evaluation of all basis functions at a point. The surface
//! fitter combines two of these bases as a tensor product.
//!
//! ## Design notes
//!
//! * **Open knot vectors**: `degree + 1` repeated knots at each boundary,
//!   so the basis spans all polynomials of the given degree over the
//!   interval. Interior knots subdivide the interval uniformly when a
//!   finer basis is wanted.
//! * **Iterative recursion**: the Cox-de Boor triangle is computed
//!   iteratively over the `degree + 1` basis functions that can be
//!   non-zero at a point; zero-width spans (repeated knots) contribute
//!   nothing.
//! * **Clamping**: evaluation clamps the point into the knot support. The
//!   fitter guarantees queries lie inside the fit domain, so clamping only
//!   absorbs floating-point wobble at the boundaries.
//!
//! ## Invariants
//!
//! * The returned basis values are non-negative and sum to one (partition
//!   of unity) everywhere inside the knot support.
//! * `evaluate_basis` returns exactly `basis_count` values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

/// Build an open knot vector over `[lo, hi]`.
///
/// The vector holds `degree + 1` copies of each boundary with
/// `interior_knots` uniformly spaced knots between them.
pub fn open_knot_vector<T: Float>(lo: T, hi: T, degree: usize, interior_knots: usize) -> Vec<T> {
    let mut knots = Vec::with_capacity(2 * (degree + 1) + interior_knots);
    for _ in 0..=degree {
        knots.push(lo);
    }
    let step = (hi - lo) / T::from(interior_knots + 1).unwrap();
    for i in 1..=interior_knots {
        knots.push(lo + step * T::from(i).unwrap());
    }
    for _ in 0..=degree {
        knots.push(hi);
    }
    knots
}

/// Number of basis functions defined by a knot vector of the given length.
pub fn basis_count(knot_len: usize, degree: usize) -> usize {
    knot_len - degree - 1
}

/// Evaluate all B-spline basis functions of `degree` over `knots` at `x`.
///
/// Returns a dense vector of `basis_count(knots.len(), degree)` values, of
/// which at most `degree + 1` are non-zero.
pub fn evaluate_basis<T: Float>(x: T, degree: usize, knots: &[T]) -> Vec<T> {
    let num_basis = basis_count(knots.len(), degree);

    // Clamp into the spline support [t_degree, t_num_basis].
    let lo = knots[degree];
    let hi = knots[num_basis];
    let x = if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    };

    // Locate the knot span: knots[span] <= x < knots[span + 1], with the
    // last span treated as closed so the upper boundary stays covered.
    let span = if x >= hi {
        num_basis - 1
    } else {
        let mut s = degree;
        while s < num_basis && x >= knots[s + 1] {
            s += 1;
        }
        s
    };

    // Cox-de Boor triangle over the degree + 1 locally non-zero functions.
    let mut local = vec![T::zero(); degree + 1];
    local[0] = T::one();

    for d in 1..=degree {
        let prev = local.clone();
        for value in local.iter_mut() {
            *value = T::zero();
        }

        for j in 0..=d {
            let base = span as isize + j as isize - d as isize;

            // Left term: contribution of B_{base, d-1}.
            if j > 0 && base >= 0 {
                let i = base as usize;
                if i + d < knots.len() {
                    let den = knots[i + d] - knots[i];
                    if den > T::zero() {
                        let alpha = (x - knots[i]) / den;
                        local[j] = local[j] + alpha * prev[j - 1];
                    }
                }
            }

            // Right term: contribution of B_{base + 1, d-1}.
            if j < d && base + 1 >= 0 {
                let i = (base + 1) as usize;
                if i + d < knots.len() {
                    let den = knots[i + d] - knots[i];
                    if den > T::zero() {
                        let beta = (knots[i + d] - x) / den;
                        local[j] = local[j] + beta * prev[j];
                    }
                }
            }
        }
    }

    // Scatter the local values into the dense basis vector.
    let mut basis = vec![T::zero(); num_basis];
    let start = span - degree;
    for (offset, value) in local.into_iter().enumerate() {
        let index = start + offset;
        if index < num_basis {
            basis[index] = value;
        }
    }
    basis
}
