use crate::interpreter::{
    lexer::{Constant, MathFunction},
    value::Number,
};

impl MathFunction {
    /// Applies the function to one argument.
    ///
    /// The argument is promoted to a real number and the result is always
    /// [`Number::Real`]. Out-of-domain arguments produce the platform's IEEE
    /// result (`NaN` or `±∞`) rather than an error; `sqrt(-1)` is a `NaN`,
    /// not a failure. Trigonometric arguments are radians.
    ///
    /// # Example
    /// ```
    /// use plotcalc::{MathFunction, Number};
    ///
    /// let x = Number::Real(std::f64::consts::PI / 2.0);
    /// assert_eq!(MathFunction::Sin.apply(x), Number::Real(1.0));
    ///
    /// assert_eq!(MathFunction::Sqrt.apply(Number::Integer(9)), Number::Real(3.0));
    /// ```
    #[must_use]
    pub fn apply(self, argument: Number) -> Number {
        let x = argument.as_real();

        Number::Real(match self {
                         Self::Sin => x.sin(),
                         Self::Cos => x.cos(),
                         Self::Tan => x.tan(),
                         Self::Log10 => x.log10(),
                         Self::Ln => x.ln(),
                         Self::Sqrt => x.sqrt(),
                     })
    }
}

impl Constant {
    /// The value of the constant, always a [`Number::Real`].
    ///
    /// # Example
    /// ```
    /// use plotcalc::{Constant, Number};
    ///
    /// assert_eq!(Constant::Pi.value(), Number::Real(std::f64::consts::PI));
    /// ```
    #[must_use]
    pub const fn value(self) -> Number {
        match self {
            Self::Pi => Number::Real(std::f64::consts::PI),
        }
    }
}
