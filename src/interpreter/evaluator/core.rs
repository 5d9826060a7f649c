use std::collections::HashMap;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{lexer::Token, parser::core::Evaluation, value::Number},
};

/// Result type used by the evaluator.
///
/// Evaluation steps return either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation context: the mapping from variable names to their
/// bound values.
///
/// ## Usage
///
/// A `Context` is created once and reused across evaluations, so assignments
/// made by one expression are visible to the next. A host that wants shared
/// calculator state keeps one context; the plot sampler and the test harness
/// build private ones.
///
/// All operations are synchronous and CPU-bound; only one evaluation should
/// be in flight against a given context at a time.
pub struct Context {
    variables: HashMap<String, Number>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no bound variables.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Binds a variable to a value, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use plotcalc::{Context, Number};
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", Number::Integer(4));
    ///
    /// assert_eq!(context.get_variable("x"), Some(Number::Integer(4)));
    /// ```
    pub fn set_variable(&mut self, name: &str, value: Number) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up a variable, or `None` if it was never bound.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Number> {
        self.variables.get(name).copied()
    }

    /// Removes every variable binding.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Parses and evaluates a token sequence against this context.
    ///
    /// This is a convenience wrapper around
    /// [`parse_and_eval`](crate::interpreter::parser::core::parse_and_eval);
    /// see it for the full contract. The token slice is borrowed immutably,
    /// so the same tokens can be evaluated any number of times.
    ///
    /// # Errors
    /// Returns an [`Error`] if the tokens do not form exactly one expression
    /// or if evaluation fails.
    pub fn parse_and_eval(&mut self, tokens: &[Token]) -> Result<Evaluation, Error> {
        crate::interpreter::parser::core::parse_and_eval(tokens, self)
    }
}
