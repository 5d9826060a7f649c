/// Core evaluation state.
///
/// Contains the `Context` variable store and the result alias shared by the
/// arithmetic routines.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements the arithmetic semantics of `+ - * / % ^`: promotion, checked
/// integer arithmetic, truncated division, and the zero-divisor rules.
pub mod binary;

/// Built-in functions and constants.
///
/// Implements the unary real functions (`sin`, `cos`, `tan`, `log`, `ln`,
/// `sqrt`) and the constants (`pi`).
pub mod function;
