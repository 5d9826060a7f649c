/// The evaluator module holds the evaluation state and arithmetic rules.
///
/// It defines the `Context` that maps variable names to values, and the
/// numeric semantics of every operator and built-in function: promotion
/// between integers and reals, checked integer arithmetic, and the
/// division/remainder edge cases.
///
/// # Responsibilities
/// - Owns variable bindings (`set`, `get`, `clear`).
/// - Applies binary operators with promotion and checked arithmetic.
/// - Applies built-in functions and constants.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes an expression string.
///
/// The lexer strips whitespace from the whole input, scans it into raw
/// tokens, then resolves the context-sensitive parts: unary minus and
/// reserved identifiers. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input string into the public token stream.
/// - Scans integer, fractional and scientific-notation literals.
/// - Disambiguates `-` using the previously emitted token.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module evaluates the token stream by recursive descent.
///
/// There is no syntax tree: each grammar stage evaluates its operands as it
/// recognizes them, so parsing a token sequence and computing its value are
/// one pass. Precedence follows BIDMAS with every operator left-associative.
///
/// # Responsibilities
/// - Enforces operator precedence and associativity.
/// - Resolves variable names against a `Context`, including the one-token
///   lookahead that recognizes assignment targets.
/// - Commits top-level assignments and rejects residual tokens.
pub mod parser;
/// The sampler module evaluates an expression of `x` over an interval.
///
/// It lexes the expression once and then re-evaluates the same token
/// sequence with `x` rebound for every sample, which is exactly the
/// re-entrancy contract the parser guarantees. It also carries the
/// polynomial-coefficient fallback used by hosts when an expression never
/// mentions `x`.
///
/// # Responsibilities
/// - Produces `(x, y)` series over inclusive arithmetic progressions.
/// - Skips samples whose value is not finite.
/// - Parses coefficient lists and evaluates polynomials by Horner's method.
pub mod sampler;
/// The value module defines the numeric type shared by every stage.
///
/// # Responsibilities
/// - Defines the `Number` enum (`Integer` or `Real`).
/// - Implements promotion, negation, and decimal rendering.
pub mod value;
