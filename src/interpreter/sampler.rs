use crate::{
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, lexer::{Token, tokenize}, value::Number},
};

/// Samples an expression of `x` over an inclusive interval.
///
/// The expression is lexed once; the resulting token sequence is then
/// evaluated once per sample against a private context in which `x` has been
/// rebound, so sampling never touches a host's calculator state. Samples
/// whose value is `NaN` or `±∞` are skipped rather than reported.
///
/// The progression runs from `x_min` upward in steps of `dx` and includes
/// the last point within `x_max + dx / 2`, so an interval that divides
/// evenly keeps its right endpoint despite accumulated rounding.
///
/// If the expression never mentions `x`, the series is empty; callers that
/// want to treat such input differently (for example as polynomial
/// coefficients) can check [`mentions_x`] up front.
///
/// # Panics
/// Requires `dx > 0` and `x_max > x_min`; both are the caller's obligation.
///
/// # Errors
/// Any lexing, parsing or evaluation error raised for the expression.
///
/// # Example
/// ```
/// use plotcalc::sample;
///
/// let points = sample("x ^ 2", -2.0, 2.0, 1.0).unwrap();
/// assert_eq!(points,
///            vec![(-2.0, 4.0), (-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
/// ```
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn sample(expression: &str,
              x_min: f64,
              x_max: f64,
              dx: f64)
              -> Result<Vec<(f64, f64)>, Error> {
    assert!(dx > 0.0 && x_max > x_min,
            "sample requires dx > 0 and x_max > x_min");

    let tokens = tokenize(expression)?;
    if !mentions_x(&tokens) {
        return Ok(Vec::new());
    }

    let mut context = Context::new();
    let mut points = Vec::new();

    let steps = ((x_max - x_min) / dx + 0.5).floor() as usize;
    for i in 0..=steps {
        let x = x_min + i as f64 * dx;
        context.set_variable("x", Number::Real(x));

        let y = context.parse_and_eval(&tokens)?.value.as_real();
        if y.is_finite() {
            points.push((x, y));
        }
    }

    Ok(points)
}

/// Reports whether a token sequence refers to the plot variable `x`.
///
/// A constant expression produces a degenerate series, so hosts use this to
/// fall back to another input format before sampling.
#[must_use]
pub fn mentions_x(tokens: &[Token]) -> bool {
    tokens.iter()
          .any(|token| matches!(token, Token::Identifier(name) if name == "x"))
}

/// Parses a comma- or semicolon-separated list of polynomial coefficients,
/// highest degree first.
///
/// # Errors
/// Returns `ParseError::MalformedNumber` for any piece that is not a real
/// number, including empty pieces.
///
/// # Example
/// ```
/// use plotcalc::parse_coefficients;
///
/// assert_eq!(parse_coefficients("1, -2.5; 3e2").unwrap(), vec![1.0, -2.5, 300.0]);
/// assert!(parse_coefficients("1,,2").is_err());
/// ```
pub fn parse_coefficients(input: &str) -> Result<Vec<f64>, ParseError> {
    let mut coefficients = Vec::new();

    for piece in input.split([',', ';']) {
        let piece = piece.trim();
        let value = piece.parse()
                         .map_err(|_| ParseError::MalformedNumber { literal: piece.to_string(), })?;
        coefficients.push(value);
    }

    Ok(coefficients)
}

/// Evaluates a polynomial by Horner's method, coefficients highest degree
/// first: `((a₀·x + a₁)·x + a₂)·x + …`.
///
/// An empty coefficient list evaluates to `0`.
///
/// # Example
/// ```
/// use plotcalc::horner;
///
/// // 2x² + 3x + 4 at x = 2
/// assert_eq!(horner(&[2.0, 3.0, 4.0], 2.0), 18.0);
/// ```
#[must_use]
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &a| acc * x + a)
}

/// Samples a polynomial over an inclusive interval, with the same
/// progression and finiteness rules as [`sample`].
///
/// # Panics
/// Requires `dx > 0` and `x_max > x_min`; both are the caller's obligation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn sample_polynomial(coefficients: &[f64],
                         x_min: f64,
                         x_max: f64,
                         dx: f64)
                         -> Vec<(f64, f64)> {
    assert!(dx > 0.0 && x_max > x_min,
            "sample_polynomial requires dx > 0 and x_max > x_min");

    let mut points = Vec::new();

    let steps = ((x_max - x_min) / dx + 0.5).floor() as usize;
    for i in 0..=steps {
        let x = x_min + i as f64 * dx;
        let y = horner(coefficients, x);
        if y.is_finite() {
            points.push((x, y));
        }
    }

    points
}
