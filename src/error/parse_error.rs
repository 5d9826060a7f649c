#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character outside the recognized set was found in the input.
    UnrecognizedCharacter {
        /// The character encountered.
        character: char,
    },
    /// A numeric literal could not be scanned, such as a trailing exponent
    /// marker with no digits (`1e`) or a digit run too large for an integer.
    MalformedNumber {
        /// The offending literal text.
        literal: String,
    },
    /// A `-` was not followed by anything that can be negated.
    MalformedNegation,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// The left-hand side of `=` was not a variable name.
    InvalidAssignmentTarget,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character } => {
                write!(f, "Unrecognized character '{character}'.")
            },

            Self::MalformedNumber { literal } => {
                write!(f, "Malformed number '{literal}'.")
            },

            Self::MalformedNegation => {
                write!(f, "Expected a number or name after '-'.")
            },

            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token}."),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Extra tokens after expression. Check your input: {token}"),

            Self::InvalidAssignmentTarget => {
                write!(f, "The left side of '=' must be a variable name.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
