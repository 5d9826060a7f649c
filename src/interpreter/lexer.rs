use logos::Logos;

use crate::{error::ParseError, interpreter::value::Number};

/// Represents a lexical token in an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This is the cooked stream handed to the parser: unary minus has already
/// been disambiguated, so a `Minus` here is always binary subtraction, and
/// reserved identifiers have been classified as functions or constants.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.5E-4`. Negative
    /// literals are produced by the minus disambiguation pass.
    Number(Number),
    /// Variable names such as `x` or `rate2`. Never a reserved name.
    Identifier(String),
    /// A built-in unary function name such as `sin` or `sqrt`.
    Function(MathFunction),
    /// A built-in constant name such as `pi`.
    Constant(Constant),
    /// `+`
    Plus,
    /// `-` (binary subtraction)
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Equals,
}

/// The closed set of built-in unary functions.
///
/// Every function takes one real argument and produces a real result;
/// integer arguments are promoted first. The trigonometric functions expect
/// their argument in radians. IEEE results of out-of-domain arguments
/// (`NaN`, `±∞`) are returned as-is, never reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    /// `sin`: sine of an angle in radians.
    Sin,
    /// `cos`: cosine of an angle in radians.
    Cos,
    /// `tan`: tangent of an angle in radians.
    Tan,
    /// `log`: base-10 logarithm.
    Log10,
    /// `ln`: natural logarithm.
    Ln,
    /// `sqrt`: square root.
    Sqrt,
}

impl MathFunction {
    /// Looks up a function by its (already lowercased) reserved name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log10),
            "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }
}

/// The closed set of built-in irrational constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// `pi`: the ratio of a circle's circumference to its diameter.
    Pi,
}

impl Constant {
    /// Looks up a constant by its (already lowercased) reserved name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Self::Pi),
            _ => None,
        }
    }
}

/// Raw token stream produced by `logos` before the disambiguation pass.
///
/// At this stage a `Minus` is still ambiguous and reserved identifiers are
/// indistinguishable from variable names. `TrailingExponent` exists purely
/// to catch literals like `1e` or `2.5E+` that a maximal-munch scan would
/// otherwise split into a number and an identifier.
#[derive(Logos, Debug, PartialEq, Clone)]
enum RawToken {
    /// Real literals: `3.14`, `3.`, `1e3`, `2.5E-4`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literals, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// A number whose exponent marker is not followed by digits.
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?", |lex| lex.slice().to_string())]
    TrailingExponent(String),
    /// Identifier tokens; variable names or reserved names such as `sin`.
    #[regex(r"[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice. Digit runs that
/// overflow `i64` yield `None` and surface as a malformed-number error.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts an expression string into its token sequence.
///
/// Whitespace carries no meaning and is stripped from the whole input before
/// scanning, so `1 2 + 3` tokenizes the same as `12+3`. Scanning itself runs
/// in two passes: `logos` produces raw tokens, then a cooking pass resolves
/// every `-` and classifies identifiers.
///
/// # Errors
/// Returns a [`ParseError`] for characters outside the recognized set and
/// for malformed numeric literals.
///
/// # Example
/// ```
/// use plotcalc::{Number, Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(Number::Integer(1)),
///                 Token::Plus,
///                 Token::Number(Number::Integer(2))]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let mut raw = Vec::new();
    let mut lexer = RawToken::lexer(&stripped);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => raw.push(tok),
            Err(()) => {
                let slice = lexer.slice();
                return Err(if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    ParseError::MalformedNumber { literal: slice.to_string() }
                } else {
                    ParseError::UnrecognizedCharacter { character: slice.chars()
                                                                       .next()
                                                                       .unwrap_or('\0'), }
                });
            },
        }
    }

    cook(raw)
}

/// Resolves raw tokens into the public token stream.
///
/// This is where the two context-sensitive lexing rules live:
///
/// 1. **Unary minus.** A `-` is binary subtraction only when the previously
///    emitted token ends a value and the next raw token begins one. A `-`
///    before a name becomes `-1 *`, so `-x` multiplies; a `-` before a
///    numeric literal is folded into a negative [`Number`]. Anything else
///    after a `-` is a lex error.
/// 2. **Reserved identifiers.** Identifiers are compared lowercased against
///    the reserved set and become [`Token::Function`] or [`Token::Constant`];
///    a reserved name is never an [`Token::Identifier`].
fn cook(raw: Vec<RawToken>) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut rest = raw.into_iter().peekable();

    while let Some(tok) = rest.next() {
        match tok {
            RawToken::Minus => cook_minus(&mut tokens, &mut rest)?,
            RawToken::Identifier(name) => tokens.push(classify_identifier(name)),
            RawToken::Integer(n) => tokens.push(Token::Number(Number::Integer(n))),
            RawToken::Real(r) => tokens.push(Token::Number(Number::Real(r))),
            RawToken::TrailingExponent(literal) => {
                return Err(ParseError::MalformedNumber { literal });
            },
            RawToken::Plus => tokens.push(Token::Plus),
            RawToken::Star => tokens.push(Token::Star),
            RawToken::Slash => tokens.push(Token::Slash),
            RawToken::Percent => tokens.push(Token::Percent),
            RawToken::Caret => tokens.push(Token::Caret),
            RawToken::LParen => tokens.push(Token::LParen),
            RawToken::RParen => tokens.push(Token::RParen),
            RawToken::Equals => tokens.push(Token::Equals),
        }
    }

    Ok(tokens)
}

/// Disambiguates one `-` against the previously emitted token and the raw
/// token that follows it.
fn cook_minus<I>(tokens: &mut Vec<Token>, rest: &mut std::iter::Peekable<I>)
                 -> Result<(), ParseError>
    where I: Iterator<Item = RawToken>
{
    let after_value = tokens.last().is_some_and(|prev| !is_operator(prev));
    let next_begins_value = matches!(rest.peek(),
                                     Some(RawToken::Integer(_)
                                          | RawToken::Real(_)
                                          | RawToken::TrailingExponent(_)
                                          | RawToken::Identifier(_)
                                          | RawToken::Minus));

    if after_value && next_begins_value {
        tokens.push(Token::Minus);
        return Ok(());
    }

    if matches!(rest.peek(), Some(RawToken::Identifier(_))) {
        tokens.push(Token::Number(Number::Integer(-1)));
        tokens.push(Token::Star);
        return Ok(());
    }

    match rest.next() {
        Some(RawToken::Integer(n)) => tokens.push(Token::Number(Number::Integer(-n))),
        Some(RawToken::Real(r)) => tokens.push(Token::Number(Number::Real(-r))),
        Some(RawToken::TrailingExponent(literal)) => {
            return Err(ParseError::MalformedNumber { literal });
        },
        _ => return Err(ParseError::MalformedNegation),
    }

    Ok(())
}

/// Classifies an identifier against the reserved set, lowercased.
fn classify_identifier(name: String) -> Token {
    let lowered = name.to_lowercase();
    if let Some(function) = MathFunction::from_name(&lowered) {
        Token::Function(function)
    } else if let Some(constant) = Constant::from_name(&lowered) {
        Token::Constant(constant)
    } else {
        Token::Identifier(name)
    }
}

/// Whether a cooked token belongs to the operator-and-delimiter set that
/// cannot end a value. A `-` after one of these never means subtraction.
const fn is_operator(token: &Token) -> bool {
    matches!(token,
             Token::Plus
             | Token::Minus
             | Token::Star
             | Token::Slash
             | Token::Percent
             | Token::Caret
             | Token::LParen
             | Token::RParen
             | Token::Equals)
}
