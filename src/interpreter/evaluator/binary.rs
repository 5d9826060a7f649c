use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Number},
    util::num::i64_to_u32_checked,
};

/// The binary operators of the expression grammar, in no particular order.
///
/// Assignment is not an operator: it is handled by the top-level parse stage
/// and never reaches [`BinaryOperator::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

impl BinaryOperator {
    /// Applies the operator to two numbers.
    ///
    /// Operands are promoted to a common type first, so two integers stay in
    /// integer arithmetic and anything else runs in double precision.
    /// Integer arithmetic is checked; overflow is an error, never a wrap.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor, integer `0` or real `0.0`
    ///   alike (a real division by zero is an error here, not `±∞`).
    /// - `ModuloByZero` / `ModuloOnReals` for the remainder rules.
    /// - `Overflow` when integer arithmetic leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use plotcalc::{BinaryOperator, Number};
    ///
    /// let sum = BinaryOperator::Add.apply(Number::Integer(3), Number::Integer(4));
    /// assert_eq!(sum.unwrap(), Number::Integer(7));
    /// ```
    pub fn apply(self, left: Number, right: Number) -> EvalResult<Number> {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => {
                eval_arithmetic(self, left, right)
            },
            Self::Mod => eval_modulo(left, right),
            Self::Pow => eval_pow(left, right),
        }
    }
}

/// Evaluates `+`, `-`, `*` and `/` after promoting both operands.
///
/// Integer division truncates toward zero. The mixed-variant arms are
/// unreachable after promotion; they raise `IncompatibleTypes` rather than
/// relying on that.
fn eval_arithmetic(op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Number::{Integer, Real};

    let (left, right) = left.promote(right);

    match (left, right) {
        (Integer(a), Integer(b)) => {
            let result = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                Div => {
                    if b == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    a.checked_div(b)
                },
                _ => unreachable!(),
            };
            result.map(Integer).ok_or(RuntimeError::Overflow)
        },

        (Real(a), Real(b)) => {
            let result = match op {
                Add => a + b,
                Sub => a - b,
                Mul => a * b,
                Div => {
                    if b == 0.0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    a / b
                },
                _ => unreachable!(),
            };
            Ok(Real(result))
        },

        (a, b) => {
            Err(RuntimeError::IncompatibleTypes { details:
                                                      format!("cannot apply '{op}' to {a} and {b}"), })
        },
    }
}

/// Evaluates `%`. The remainder is defined on integers only and takes the
/// sign of the dividend.
fn eval_modulo(left: Number, right: Number) -> EvalResult<Number> {
    use Number::Integer;

    match (left, right) {
        (Integer(a), Integer(b)) => {
            if b == 0 {
                return Err(RuntimeError::ModuloByZero);
            }
            a.checked_rem(b).map(Integer).ok_or(RuntimeError::Overflow)
        },
        _ => Err(RuntimeError::ModuloOnReals),
    }
}

/// Evaluates `^`.
///
/// An integer base with a non-negative integer exponent stays integer, via
/// checked repeated multiplication. A negative exponent or any real operand
/// computes the power in double precision.
fn eval_pow(base: Number, exponent: Number) -> EvalResult<Number> {
    use Number::{Integer, Real};

    match (base, exponent) {
        (Integer(b), Integer(e)) if e >= 0 => {
            b.checked_pow(i64_to_u32_checked(e, RuntimeError::LiteralTooLarge)?)
             .map(Integer)
             .ok_or(RuntimeError::Overflow)
        },
        _ => Ok(Real(base.as_real().powf(exponent.as_real()))),
    }
}
