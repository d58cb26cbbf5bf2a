#![cfg(feature = "dev")]

use inserts_rs::internals::algorithms::spline::{
    fit_and_evaluate, DEGREE_RATIO, DEGREE_WIDTH, MIN_CALIBRATION_POINTS,
};
use inserts_rs::internals::api::InsertError;

use approx::assert_abs_diff_eq;

fn calibration() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let widths = vec![3.0, 3.0, 4.0, 4.0, 5.0, 5.0, 6.0, 6.0, 7.0, 7.0, 8.0, 8.0];
    let ratios = vec![
        1.3333, 1.0, 1.0, 0.75, 0.8, 0.6, 0.6667, 0.5, 0.5714, 0.4286, 0.5, 0.375,
    ];
    let factors = widths
        .iter()
        .zip(ratios.iter())
        .map(|(&w, &r)| 0.96 + 0.005 * w - 0.05 * r)
        .collect();
    (widths, ratios, factors)
}

#[test]
fn spline_orders_match_the_reference_model() {
    assert_eq!(DEGREE_WIDTH, 2);
    assert_eq!(DEGREE_RATIO, 1);
    assert_eq!(MIN_CALIBRATION_POINTS, 6);
}

#[test]
fn reproduces_a_surface_inside_the_tensor_space() {
    let (widths, ratios, factors) = calibration();

    // The surface w^2 terms are representable too; use a full quadric in
    // the tensor span to make the check stronger than a plane.
    let factors_quadric: Vec<f64> = widths
        .iter()
        .zip(ratios.iter())
        .map(|(&w, &r)| 0.9 + 0.004 * w + 0.0002 * w * w - 0.04 * r + 0.001 * w * r)
        .collect();

    let query_widths = [3.5, 5.5, 7.5];
    let query_ratios = [1.1, 0.7, 0.45];
    let result =
        fit_and_evaluate(&query_widths, &query_ratios, &widths, &ratios, &factors_quadric)
            .unwrap();

    for (i, (&w, &r)) in query_widths.iter().zip(query_ratios.iter()).enumerate() {
        let expected = 0.9 + 0.004 * w + 0.0002 * w * w - 0.04 * r + 0.001 * w * r;
        assert_abs_diff_eq!(result[i], expected, epsilon = 1e-8);
    }

    // And the plain plane fixture as well.
    let result = fit_and_evaluate(&[5.5], &[0.7], &widths, &ratios, &factors).unwrap();
    assert_abs_diff_eq!(result[0], 0.96 + 0.005 * 5.5 - 0.05 * 0.7, epsilon = 1e-8);
}

#[test]
fn output_has_one_value_per_query_point() {
    let (widths, ratios, factors) = calibration();

    let result = fit_and_evaluate(
        &[4.0, 5.0, 6.0, 7.0],
        &[0.9, 0.7, 0.6, 0.5],
        &widths,
        &ratios,
        &factors,
    )
    .unwrap();
    assert_eq!(result.len(), 4);

    let empty = fit_and_evaluate(&[], &[], &widths, &ratios, &factors).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn queries_outside_the_data_range_are_defined() {
    let (widths, ratios, factors) = calibration();

    // The widened fit domain must cover the query, so evaluation beyond
    // the calibration range yields a finite value instead of failing.
    let result = fit_and_evaluate(&[30.0], &[0.2], &widths, &ratios, &factors).unwrap();
    assert!(result[0].is_finite());
}

#[test]
fn too_few_points_is_rejected() {
    let result = fit_and_evaluate(
        &[5.0],
        &[0.7],
        &[3.0, 4.0, 5.0, 6.0, 7.0],
        &[1.0, 0.9, 0.8, 0.7, 0.6],
        &[0.9, 0.91, 0.92, 0.93, 0.94],
    );
    assert!(matches!(
        result,
        Err(InsertError::TooFewPoints { got: 5, min: 6 })
    ));
}

#[test]
fn mismatched_calibration_lengths_are_rejected() {
    let result = fit_and_evaluate(
        &[5.0],
        &[0.7],
        &[3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        &[1.0, 0.9, 0.8, 0.7, 0.6],
        &[0.9, 0.91, 0.92, 0.93, 0.94, 0.95],
    );
    assert!(matches!(result, Err(InsertError::MismatchedInputs { .. })));
}

#[test]
fn mismatched_query_lengths_are_rejected() {
    let (widths, ratios, factors) = calibration();

    let result = fit_and_evaluate(&[5.0, 6.0], &[0.7], &widths, &ratios, &factors);
    assert!(matches!(result, Err(InsertError::ShapeMismatch { .. })));
}

#[test]
fn collinear_calibration_data_fails_the_fit() {
    // Ratios are an exact linear function of the widths, so the points
    // lie on a line in the plane and cannot pin a bivariate surface.
    let widths: Vec<f64> = (1..=8).map(|i| i as f64).collect();
    let ratios: Vec<f64> = widths.iter().map(|&w| 0.1 * w).collect();
    let factors: Vec<f64> = widths.iter().map(|&w| 0.9 + 0.01 * w).collect();

    let result = fit_and_evaluate(&[4.5], &[0.45], &widths, &ratios, &factors);
    assert!(matches!(result, Err(InsertError::DegenerateData)));
}

#[test]
fn zero_extent_domain_fails_the_fit() {
    // All widths identical and the query on the same width: the fit
    // domain has no extent along the width axis.
    let widths = vec![5.0; 6];
    let ratios = vec![0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
    let factors = vec![0.9, 0.91, 0.92, 0.93, 0.94, 0.95];

    let result = fit_and_evaluate(&[5.0], &[0.65], &widths, &ratios, &factors);
    assert!(matches!(result, Err(InsertError::DegenerateData)));
}

#[test]
fn fitting_is_deterministic() {
    let (widths, ratios, factors) = calibration();
    let query_widths = [4.2, 5.7, 12.0];
    let query_ratios = [0.9, 0.66, 0.3];

    let first =
        fit_and_evaluate(&query_widths, &query_ratios, &widths, &ratios, &factors).unwrap();
    let second =
        fit_and_evaluate(&query_widths, &query_ratios, &widths, &ratios, &factors).unwrap();
    assert_eq!(first, second);
}
