use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a numeric value produced by the evaluator.
///
/// Every expression evaluates to one of these two variants. Arithmetic on two
/// integers stays in the integer domain; as soon as a real number is
/// involved, both operands are promoted and the result is real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Reals are returned as-is; integers are converted to the nearest
    /// representable double.
    ///
    /// # Example
    /// ```
    /// use plotcalc::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Promotes a pair of numbers to a common type for mixed math.
    ///
    /// - If one side is an integer and the other is real, the integer is
    ///   converted to a real.
    /// - Two integers or two reals are returned unchanged.
    ///
    /// # Parameters
    /// - `other`: The value to promote with.
    ///
    /// # Returns
    /// The pair with both sides in the same variant.
    #[must_use]
    pub const fn promote(self, other: Self) -> (Self, Self) {
        use Number::{Integer, Real};

        match (self, other) {
            (Integer(_), Real(_)) => (Real(self.as_real()), other),
            (Real(_), Integer(_)) => (self, Real(other.as_real())),
            _ => (self, other),
        }
    }

    /// Negates the number, preserving its variant.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` for the one integer whose negation
    /// does not fit.
    pub fn negated(self) -> EvalResult<Self> {
        match self {
            Self::Integer(n) => n.checked_neg()
                                 .map(Self::Integer)
                                 .ok_or(RuntimeError::Overflow),
            Self::Real(r) => Ok(Self::Real(-r)),
        }
    }

    /// Returns `true` if the number is [`Integer`].
    ///
    /// [`Integer`]: Number::Integer
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the number is [`Real`].
    ///
    /// [`Real`]: Number::Real
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real(..))
    }
}

impl std::fmt::Display for Number {
    /// Renders the number in its decimal form: integers without a fractional
    /// part, reals in the platform's default double-to-string form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
