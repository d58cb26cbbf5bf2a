use inserts_rs::prelude::*;

use approx::assert_relative_eq;

/// Calibration fixture: factors lie exactly on `0.96 + 0.005 w - 0.05 r`,
/// which the degree-(2,1) surface can represent, so unmasked predictions
/// reproduce the plane.
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

fn model() -> InsertFactorModel<f64> {
    let (widths, ratios, factors) = calibration();
    InsertFactorModel::new(CalibrationSet::new(widths, ratios, factors).unwrap())
}

#[test]
fn predict_reproduces_representable_surface() {
    let model = model();

    let query = QueryPoints::scalar(5.5, 0.7);
    let result = model.predict(&query).unwrap();

    let expected = 0.96 + 0.005 * 5.5 - 0.05 * 0.7;
    assert_relative_eq!(*result.as_scalar().unwrap(), expected, epsilon = 1e-8);
}

#[test]
fn predict_extrapolates_over_widened_domain() {
    let model = model();

    // Far outside the calibration range; the raw (ungated) prediction is
    // still defined because the fit domain covers the query.
    let query = QueryPoints::scalar(20.0, 0.2);
    let result = model.predict(&query).unwrap();

    let expected = 0.96 + 0.005 * 20.0 - 0.05 * 0.2;
    assert_relative_eq!(*result.as_scalar().unwrap(), expected, epsilon = 1e-5);
}

#[test]
fn gated_prediction_trusts_interior_and_rejects_far_extrapolation() {
    let model = model();

    let inside = model
        .predict_with_validity(&QueryPoints::scalar(5.5, 0.7))
        .unwrap();
    assert!(inside.as_scalar().unwrap().is_some());

    let outside = model
        .predict_with_validity(&QueryPoints::scalar(50.0, 0.1))
        .unwrap();
    assert_eq!(*outside.as_scalar().unwrap(), None);
}

#[test]
fn gated_entries_match_raw_predictions_exactly() {
    let model = model();

    let query = QueryPoints::vector(
        &[4.0, 5.0, 6.0, 7.0, 50.0],
        &[0.9, 0.7, 0.6, 0.5, 0.1],
    )
    .unwrap();

    let raw = model.predict(&query).unwrap();
    let gated = model.predict_with_validity(&query).unwrap();

    for (raw_value, gated_value) in raw.values().iter().zip(gated.values()) {
        if let Some(value) = gated_value {
            // Unmasked entries are bit-identical to the ungated prediction.
            assert_eq!(value, raw_value);
        }
    }
}

#[test]
fn deformability_scores_echo_query_shape() {
    let model = model();

    let scalar = model.deformability(&QueryPoints::scalar(5.0, 0.7)).unwrap();
    assert_eq!(scalar.shape(), QueryShape::Scalar);
    assert_eq!(scalar.values().len(), 1);

    let vector = model
        .deformability(&QueryPoints::vector(&[4.0, 5.0, 6.0], &[0.9, 0.7, 0.6]).unwrap())
        .unwrap();
    assert_eq!(vector.shape(), QueryShape::Vector(3));
    assert_eq!(vector.values().len(), 3);

    let matrix = model
        .deformability(
            &QueryPoints::matrix(2, 3, &[4.0, 5.0, 6.0, 4.5, 5.5, 6.5], &[
                0.9, 0.7, 0.6, 0.85, 0.65, 0.55,
            ])
            .unwrap(),
        )
        .unwrap();
    assert_eq!(matrix.shape(), QueryShape::Matrix { rows: 2, cols: 3 });
    assert_eq!(matrix.values().len(), 6);
    assert!(matrix.get(1, 2).is_some());
    assert!(matrix.get(2, 0).is_none());
}

#[test]
fn repeated_calls_are_deterministic() {
    let model = model();
    let query = QueryPoints::vector(&[4.5, 5.5, 30.0], &[0.8, 0.65, 0.2]).unwrap();

    let first = model.predict_with_validity(&query).unwrap();
    let second = model.predict_with_validity(&query).unwrap();
    assert_eq!(first, second);

    let scores_first = model.deformability(&query).unwrap();
    let scores_second = model.deformability(&query).unwrap();
    assert_eq!(scores_first, scores_second);
}

#[test]
fn percent_prediction_differences_has_one_entry_per_point() {
    let model = model();

    let differences = model.percent_prediction_differences().unwrap();
    assert_eq!(differences.len(), model.calibration().len());

    // The fixture surface is exactly representable, so every unmasked
    // fold reproduces the held-out factor.
    for difference in differences.iter().filter(|d| d.is_finite()) {
        assert!(difference.abs() < 1e-5, "unexpected difference {difference}");
    }
}

#[test]
fn calibration_rejects_structural_problems() {
    assert!(matches!(
        CalibrationSet::<f64>::new(vec![], vec![], vec![]),
        Err(InsertError::EmptyInput)
    ));

    assert!(matches!(
        CalibrationSet::new(vec![1.0, 2.0], vec![1.0], vec![1.0, 2.0]),
        Err(InsertError::MismatchedInputs { .. })
    ));

    assert!(matches!(
        CalibrationSet::new(
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0]
        ),
        Err(InsertError::TooFewPoints { got: 3, min }) if min == MIN_CALIBRATION_POINTS
    ));

    let (widths, ratios, mut factors) = calibration();
    factors[4] = f64::NAN;
    assert!(matches!(
        CalibrationSet::new(widths, ratios, factors),
        Err(InsertError::InvalidNumericValue(_))
    ));
}

#[test]
fn query_construction_rejects_shape_mismatch() {
    assert!(matches!(
        QueryPoints::vector(&[1.0, 2.0], &[1.0]),
        Err(InsertError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        QueryPoints::matrix(2, 2, &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
        Err(InsertError::ShapeMismatch { .. })
    ));
}

#[test]
fn non_finite_query_is_rejected() {
    let model = model();
    let query = QueryPoints::vector(&[5.0, f64::INFINITY], &[0.7, 0.6]).unwrap();
    assert!(matches!(
        model.predict(&query),
        Err(InsertError::InvalidNumericValue(_))
    ));
}

#[test]
fn gated_output_display_marks_suppressed_entries() {
    let model = model();
    let query = QueryPoints::vector(&[5.5, 50.0], &[0.7, 0.1]).unwrap();

    let rendered = format!("{}", model.predict_with_validity(&query).unwrap());
    assert!(rendered.contains("not valid"));
    assert!(rendered.contains("0.95"));
}

#[test]
fn f32_models_are_supported() {
    let (widths, ratios, factors) = calibration();
    let to_f32 = |v: Vec<f64>| v.into_iter().map(|x| x as f32).collect::<Vec<f32>>();

    let model = InsertFactorModel::new(
        CalibrationSet::new(to_f32(widths), to_f32(ratios), to_f32(factors)).unwrap(),
    );

    let result = model.predict(&QueryPoints::scalar(5.5_f32, 0.7)).unwrap();
    let expected = 0.96_f32 + 0.005 * 5.5 - 0.05 * 0.7;
    assert_relative_eq!(*result.as_scalar().unwrap(), expected, epsilon = 1e-3);
}
