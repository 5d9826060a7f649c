use plotcalc::{Error, RuntimeError, evaluate_with_x, horner, parse_coefficients, sample,
               sample_polynomial};

#[test]
fn samples_a_parabola_inclusively() {
    let points = sample("x ^ 2", -2.0, 2.0, 1.0).unwrap();
    assert_eq!(points,
               vec![(-2.0, 4.0), (-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
}

#[test]
fn an_expression_without_x_yields_an_empty_series() {
    assert_eq!(sample("3 + 4", -2.0, 2.0, 1.0).unwrap(), Vec::new());
    assert_eq!(sample("sin(pi)", -2.0, 2.0, 1.0).unwrap(), Vec::new());
}

#[test]
fn non_finite_samples_are_skipped() {
    // ln is NaN for negative x and -inf at zero; only the positive half
    // survives.
    let points = sample("ln(x)", -1.0, 1.0, 0.5).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].0, 0.5);
    assert_eq!(points[1], (1.0, 0.0));
}

#[test]
fn the_right_endpoint_tolerates_rounding() {
    // 0.3 does not divide 1.0 evenly; the final step lands just shy of 0.9
    // and the next one falls outside x_max + dx/2.
    let points = sample("x", 0.0, 1.0, 0.3).unwrap();
    assert_eq!(points.len(), 4);
    for (x, y) in points {
        assert_eq!(x, y);
    }
}

#[test]
fn sampling_reuses_the_same_tokens_per_point() {
    let points = sample("x", 0.0, 3.0, 1.0).unwrap();
    assert_eq!(points, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
}

#[test]
fn sampling_propagates_evaluation_errors() {
    assert_eq!(sample("x + y", 0.0, 1.0, 1.0),
               Err(Error::Runtime(RuntimeError::UnknownVariable { name: "y".to_string() })));
}

#[test]
#[should_panic(expected = "dx > 0")]
fn sampling_rejects_a_non_positive_step() {
    let _ = sample("x", 0.0, 1.0, 0.0);
}

#[test]
fn one_shot_evaluation_binds_x_privately() {
    assert_eq!(evaluate_with_x("x", 3.5).unwrap(), 3.5);
    assert_eq!(evaluate_with_x("x ^ 2 + 1", 2.0).unwrap(), 5.0);
    assert_eq!(evaluate_with_x("2 * x", -1.5).unwrap(), -3.0);
}

#[test]
fn horner_evaluates_highest_degree_first() {
    assert_eq!(horner(&[], 2.0), 0.0);
    assert_eq!(horner(&[5.0], 2.0), 5.0);
    // 2x² + 3x + 4 at x = 2
    assert_eq!(horner(&[2.0, 3.0, 4.0], 2.0), 18.0);
}

#[test]
fn polynomial_sampling_matches_the_expression_sampler() {
    let from_coefficients = sample_polynomial(&[1.0, 0.0, 0.0], -2.0, 2.0, 1.0);
    let from_expression = sample("x ^ 2", -2.0, 2.0, 1.0).unwrap();
    assert_eq!(from_coefficients, from_expression);
}

#[test]
fn coefficient_lists_accept_commas_and_semicolons() {
    assert_eq!(parse_coefficients("1, -2.5; 3e2").unwrap(), vec![1.0, -2.5, 300.0]);
    assert_eq!(parse_coefficients("4").unwrap(), vec![4.0]);
}

#[test]
fn malformed_coefficient_lists_are_rejected() {
    assert!(parse_coefficients("1,,2").is_err());
    assert!(parse_coefficients("").is_err());
    assert!(parse_coefficients("1; two").is_err());
}
