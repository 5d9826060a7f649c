//! # plotcalc
//!
//! plotcalc is an arithmetic expression evaluator with a function-plotting
//! sampler. It lexes, parses, and evaluates expressions with variables,
//! assignment, built-in functions and constants, and can sample an
//! expression of `x` over a numeric interval for plotting hosts.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while turning an
/// expression string into a value. It standardizes error reporting and
/// carries the offending name or literal where one exists, so a host can
/// render the message verbatim.
///
/// # Responsibilities
/// - Defines error enums for the lexing/parsing and evaluation phases.
/// - Provides the `Error` umbrella used by the fused engine.
/// - Implements `Display` messages suitable for end users.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, the fused parser-evaluator, the
/// value type, the evaluation context, and the plot sampler. It contains
/// everything between an input string and a numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, sampler.
/// - Keeps the whole pipeline free of I/O; hosts pass strings in and get
///   values or errors back.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Converts between integer widths without silent truncation.
pub mod util;

pub use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::{binary::BinaryOperator, core::Context},
        lexer::{Constant, MathFunction, Token, tokenize},
        parser::core::{Evaluation, parse_and_eval},
        sampler::{horner, mentions_x, parse_coefficients, sample, sample_polynomial},
        value::Number,
    },
};

/// Evaluates one expression string against a context.
///
/// This is the main host entry point: it lexes the input and runs the
/// parser-evaluator, returning the resulting value. Assignments made by the
/// expression stay bound in `context`, so consecutive calls share state the
/// way a calculator session does.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails; the `Display`
/// form of the error is the message a host should show.
///
/// # Examples
/// ```
/// use plotcalc::{Context, Number, evaluate};
///
/// let mut context = Context::new();
///
/// assert_eq!(evaluate("a = 2 + 3", &mut context).unwrap(), Number::Integer(5));
/// assert_eq!(evaluate("a * 2", &mut context).unwrap(), Number::Integer(10));
///
/// // Unknown variables are reported with their name.
/// let error = evaluate("b + 1", &mut context).unwrap_err();
/// assert_eq!(error.to_string(), "Unknown variable 'b'.");
/// ```
pub fn evaluate(expression: &str, context: &mut Context) -> Result<Number, Error> {
    let tokens = tokenize(expression)?;
    Ok(parse_and_eval(&tokens, context)?.value)
}

/// Evaluates an expression once with `x` bound to the given value.
///
/// A private context is used, so neither the binding of `x` nor any
/// assignment in the expression can leak into other evaluations.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Example
/// ```
/// use plotcalc::evaluate_with_x;
///
/// assert_eq!(evaluate_with_x("x ^ 2 + 1", 2.0).unwrap(), 5.0);
/// assert_eq!(evaluate_with_x("x", 3.5).unwrap(), 3.5);
/// ```
pub fn evaluate_with_x(expression: &str, x: f64) -> Result<f64, Error> {
    let mut context = Context::new();
    context.set_variable("x", Number::Real(x));

    Ok(evaluate(expression, &mut context)?.as_real())
}
