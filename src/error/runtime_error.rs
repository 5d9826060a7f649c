#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised while evaluating an expression.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted modulo by zero.
    ModuloByZero,
    /// Applied `%` with a real operand; the remainder is defined on integers
    /// only.
    ModuloOnReals,
    /// Two operands could not be brought to a common numeric type.
    IncompatibleTypes {
        /// Details about the mismatch.
        details: String,
    },
    /// Arithmetic operation overflowed.
    Overflow,
    /// A value was too large to be represented safely.
    LiteralTooLarge,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::ModuloByZero => write!(f, "Modulo by zero."),

            Self::ModuloOnReals => {
                write!(f, "The '%' operator is only defined on whole numbers.")
            },

            Self::IncompatibleTypes { details } => {
                write!(f, "Incompatible types: {details}.")
            },

            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },

            Self::LiteralTooLarge => write!(f, "Literal is too large."),
        }
    }
}

impl std::error::Error for RuntimeError {}
