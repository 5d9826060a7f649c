use std::iter::Peekable;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::binary::parse_additive,
        value::Number,
    },
};

/// Result type used by the fused parse-and-evaluate stages.
///
/// Parsing and evaluation happen in one descent, so every stage can fail
/// with either a [`ParseError`] or a runtime error; both travel as [`Error`].
pub type ParseEvalResult<T> = Result<T, Error>;

/// What a (sub)expression evaluated to.
///
/// `assign_target` is `Some` only while a `name =` prefix is being carried
/// up to the assignment stage, and on the final result of an assignment so
/// a host can echo which variable was bound. For every plain expression it
/// is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The numeric result.
    pub value: Number,
    /// The variable name bound by a top-level assignment, if there was one.
    pub assign_target: Option<String>,
}

/// Parses and evaluates a complete token sequence.
///
/// This is the entry point of the engine. The grammar is BIDMAS with
/// left-associative operators throughout (including `^`), one optional
/// top-level assignment, parenthesized grouping, built-in unary functions,
/// and constants. Evaluation is interleaved with the descent; there is no
/// intermediate syntax tree.
///
/// The whole sequence must form exactly one expression: residual tokens are
/// a parse error. The token slice itself is never mutated, so the same
/// sequence can be evaluated repeatedly against changing variable bindings.
///
/// # Errors
/// Any [`ParseError`] or runtime error raised while descending.
///
/// # Example
/// ```
/// use plotcalc::{Context, Number, parse_and_eval, tokenize};
///
/// let mut context = Context::new();
/// let tokens = tokenize("a = 2 + 3").unwrap();
///
/// let evaluation = parse_and_eval(&tokens, &mut context).unwrap();
/// assert_eq!(evaluation.value, Number::Integer(5));
/// assert_eq!(evaluation.assign_target.as_deref(), Some("a"));
/// assert_eq!(context.get_variable("a"), Some(Number::Integer(5)));
/// ```
pub fn parse_and_eval(tokens: &[Token], context: &mut Context) -> ParseEvalResult<Evaluation> {
    let mut tokens = tokens.iter().peekable();

    let evaluation = parse_assignment(&mut tokens, context)?;

    if let Some(token) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"), }.into());
    }

    Ok(evaluation)
}

/// Parses an expression with an optional `name = expression` assignment.
///
/// The grammar is: `assignment := additive ("=" additive)?`
///
/// The left-hand side must have carried up an assign target (a bare variable
/// name directly before the `=`); its placeholder value is discarded. The
/// right-hand side is evaluated, bound in the context, and returned:
/// assignment is an expression whose value is the bound value.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           context: &mut Context)
                           -> ParseEvalResult<Evaluation>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_additive(tokens, context)?;

    if let Some(Token::Equals) = tokens.peek() {
        tokens.next();

        let Some(name) = left.assign_target else {
            return Err(ParseError::InvalidAssignmentTarget.into());
        };

        let right = parse_additive(tokens, context)?;
        context.set_variable(&name, right.value);

        return Ok(Evaluation { value:         right.value,
                               assign_target: Some(name), });
    }

    Ok(left)
}
