use std::iter::Peekable;

use crate::interpreter::{
    evaluator::{binary::BinaryOperator, core::Context},
    lexer::Token,
    parser::{core::{Evaluation, ParseEvalResult}, unary::parse_unary},
};

/// Parses and evaluates addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `context`: Variable bindings for symbol lookup.
///
/// # Returns
/// The accumulated value of the chain.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             context: &Context)
                             -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens, context)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, context)?;
            left = Evaluation { value:         op.apply(left.value, right.value)?,
                                assign_target: right.assign_target, };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses and evaluates multiplication-level operators.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `context`: Variable bindings for symbol lookup.
///
/// # Returns
/// The accumulated value of the chain.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   context: &Context)
                                   -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_exponent(tokens, context)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_exponent(tokens, context)?;
            left = Evaluation { value:         op.apply(left.value, right.value)?,
                                assign_target: right.assign_target, };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses and evaluates exponentiation.
///
/// `^` is **left-associative** here, so `2 ^ 3 ^ 2` evaluates to
/// `(2 ^ 3) ^ 2 = 64` and not the mathematically conventional
/// `2 ^ (3 ^ 2) = 512`. This is deliberate and pinned by tests.
///
/// The rule is: `exponent := unary ("^" unary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `context`: Variable bindings for symbol lookup.
///
/// # Returns
/// The accumulated value of the chain.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>,
                             context: &Context)
                             -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens, context)?;
    while let Some(&token) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Pow)
        {
            tokens.next();
            let right = parse_unary(tokens, context)?;
            left = Evaluation { value:         op.apply(left.value, right.value)?,
                                assign_target: right.assign_target, };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of the six arithmetic
/// operators; in particular `=` is not a binary operator here.
///
/// # Example
/// ```
/// use plotcalc::{BinaryOperator, Token};
/// use plotcalc::interpreter::parser::binary::token_to_binary_operator;
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
