use std::iter::Peekable;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::{binary::parse_additive, core::{Evaluation, ParseEvalResult}},
        value::Number,
    },
};

/// Parses and evaluates a unary expression.
///
/// The lexer resolves most unary minus occurrences into negative literals or
/// a `-1 *` prefix, so a `-` rarely survives to this level. When one does
/// (a subtraction token with no left operand, as can happen right after an
/// opening parenthesis), it negates the following unary expression while
/// preserving its variant.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 context: &Context)
                                 -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::Minus) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens, context)?;
        return Ok(Evaluation { value:         operand.value.negated()?,
                               assign_target: operand.assign_target, });
    }
    parse_primary(tokens, context)
}

/// Parses and evaluates a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - numeric literals
/// - built-in constants
/// - function calls `sin( expression )`
/// - parenthesized expressions
/// - variable names, with one token of lookahead for `=`
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | CONSTANT
///              | FUNCTION "(" additive ")"
///              | "(" additive ")"
///              | IDENTIFIER
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                        context: &Context)
                        -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        Token::Number(_) | Token::Constant(_) => parse_literal(tokens),
        Token::Function(_) => parse_function_call(tokens, context),
        Token::LParen => parse_grouping(tokens, context),
        Token::Identifier(_) => parse_symbol(tokens, context),
        token => Err(ParseError::UnexpectedToken { token: format!("{token:?}") }.into()),
    }
}

/// Consumes a numeric literal or a built-in constant.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Number(number)) => Ok(Evaluation { value:         *number,
                                                       assign_target: None, }),
        Some(Token::Constant(constant)) => Ok(Evaluation { value:         constant.value(),
                                                           assign_target: None, }),
        _ => unreachable!(),
    }
}

/// Parses and evaluates a function call of the form `name( expression )`.
///
/// The argument is a full additive expression; it is evaluated, promoted to
/// a real number and passed through the function. Out-of-domain arguments
/// follow IEEE semantics and are not errors.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              context: &Context)
                              -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    let Some(Token::Function(function)) = tokens.next() else {
        unreachable!()
    };

    match tokens.next() {
        Some(Token::LParen) => {},
        Some(token) => {
            return Err(ParseError::UnexpectedToken { token:
                                                         format!("Expected '(' after function, found {token:?}"), }.into());
        },
        None => return Err(ParseError::UnexpectedEndOfInput.into()),
    }

    let argument = parse_additive(tokens, context)?;

    match tokens.next() {
        Some(Token::RParen) => Ok(Evaluation { value:         function.apply(argument.value),
                                               assign_target: None, }),
        _ => Err(ParseError::ExpectedClosingParen.into()),
    }
}

/// Parses and evaluates a parenthesized expression.
///
/// The inner expression is an `additive`, not an assignment, so an `=`
/// inside parentheses surfaces as a missing closing parenthesis.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         context: &Context)
                         -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let inner = parse_additive(tokens, context)?;

    match tokens.next() {
        Some(Token::RParen) => Ok(inner),
        _ => Err(ParseError::ExpectedClosingParen.into()),
    }
}

/// Resolves a variable name.
///
/// If the very next token is `=`, the name is an assignment target: it is
/// carried upward with an `Integer(0)` placeholder value and the `=` is left
/// for the assignment stage to consume. Otherwise the name is looked up in
/// the context; a miss is an `UnknownVariable` error.
fn parse_symbol<'a, I>(tokens: &mut Peekable<I>,
                       context: &Context)
                       -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    let Some(Token::Identifier(name)) = tokens.next() else {
        unreachable!()
    };

    if let Some(Token::Equals) = tokens.peek() {
        return Ok(Evaluation { value:         Number::Integer(0),
                               assign_target: Some(name.clone()), });
    }

    match context.get_variable(name) {
        Some(value) => Ok(Evaluation { value, assign_target: None }),
        None => Err(RuntimeError::UnknownVariable { name: name.clone() }.into()),
    }
}
