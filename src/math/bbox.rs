//! Fit-domain bounding box computation.
//!
//! ## Purpose
//!
//! The spline surface is only defined over its fitted rectangle in
//! `(width, ratio)` space. To allow evaluation beyond the calibration
//! range, the fit domain is widened to the union of the calibration range
//! and the query range on each axis before fitting. This is a deliberate
//! extrapolation-enabling choice: a box clipped to the data range would
//! disallow evaluation at outside query points.
//!
//! ## Invariants
//!
//! * The domain contains every calibration point and every query point.
//! * A domain without positive extent on both axes cannot support a
//!   bivariate fit and is reported as degenerate by the fitter.

use num_traits::Float;

/// The rectangular `(width, ratio)` region a spline fit is defined over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDomain<T> {
    /// Lower width bound.
    pub width_min: T,
    /// Upper width bound.
    pub width_max: T,
    /// Lower perimeter/area ratio bound.
    pub ratio_min: T,
    /// Upper perimeter/area ratio bound.
    pub ratio_max: T,
}

impl<T: Float> FitDomain<T> {
    /// Compute the union of the calibration range and the query range on
    /// each axis.
    ///
    /// Query slices may be empty (the domain then collapses to the
    /// calibration range); calibration slices are assumed non-empty.
    pub fn from_union(
        data_widths: &[T],
        data_ratios: &[T],
        query_widths: &[T],
        query_ratios: &[T],
    ) -> Self {
        let (width_min, width_max) = extend_range(range_of(data_widths), query_widths);
        let (ratio_min, ratio_max) = extend_range(range_of(data_ratios), query_ratios);
        Self {
            width_min,
            width_max,
            ratio_min,
            ratio_max,
        }
    }

    /// Whether the point lies inside the domain (bounds inclusive).
    pub fn contains(&self, width: T, ratio: T) -> bool {
        width >= self.width_min
            && width <= self.width_max
            && ratio >= self.ratio_min
            && ratio <= self.ratio_max
    }

    /// Whether the domain has positive extent on both axes.
    pub fn has_extent(&self) -> bool {
        self.width_max > self.width_min && self.ratio_max > self.ratio_min
    }
}

/// Min/max of a non-empty slice.
fn range_of<T: Float>(values: &[T]) -> (T, T) {
    values.iter().fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}

/// Widen a range to cover additional values.
fn extend_range<T: Float>((lo, hi): (T, T), values: &[T]) -> (T, T) {
    values.iter().fold((lo, hi), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
