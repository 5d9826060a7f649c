/// Entry point and assignment handling.
///
/// Contains `parse_and_eval`, the `Evaluation` record returned by every
/// stage, and the optional top-level assignment rule.
pub mod core;

/// Binary operator stages.
///
/// The additive, multiplicative and exponent precedence levels, all
/// left-associative loops over the token stream.
pub mod binary;

/// Unary and primary stages.
///
/// Leading minus, literals, constants, function calls, grouping, and symbol
/// resolution with assignment lookahead.
pub mod unary;
