use plotcalc::{Context, Error, Number, ParseError, RuntimeError, evaluate, parse_and_eval,
               tokenize};

fn eval(source: &str) -> Result<Number, Error> {
    evaluate(source, &mut Context::new())
}

fn assert_integer(source: &str, expected: i64) {
    match eval(source) {
        Ok(Number::Integer(n)) => {
            assert_eq!(n, expected, "'{source}' evaluated to {n}");
        },
        other => panic!("'{source}' evaluated to {other:?}, expected Integer({expected})"),
    }
}

fn assert_real(source: &str, expected: f64) {
    match eval(source) {
        Ok(Number::Real(r)) => {
            assert!((r - expected).abs() < 1e-12,
                    "'{source}' evaluated to {r}, expected {expected}");
        },
        other => panic!("'{source}' evaluated to {other:?}, expected Real({expected})"),
    }
}

fn assert_runtime_error(source: &str, expected: &RuntimeError) {
    match eval(source) {
        Err(Error::Runtime(e)) => assert_eq!(&e, expected, "'{source}'"),
        other => panic!("'{source}' produced {other:?}, expected {expected:?}"),
    }
}

fn assert_parse_error(source: &str, expected: &ParseError) {
    match eval(source) {
        Err(Error::Parse(e)) => assert_eq!(&e, expected, "'{source}'"),
        other => panic!("'{source}' produced {other:?}, expected {expected:?}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_integer("1 + 2 * 3", 7);
    assert_integer("(1 + 2) * 3", 9);
    assert_integer("2 + 3 * 4 ^ 2", 50);
    assert_integer("10 - 4 - 3", 3);
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_integer("10 / 3", 3);
    assert_integer("-7 / 2", -3);
    assert_integer("7 / -2", -3);
}

#[test]
fn mixed_division_is_real() {
    assert_real("10.0 / 3", 10.0 / 3.0);
    assert_real("10 / 4.0", 2.5);
}

#[test]
fn modulo_is_integer_only_and_follows_the_dividend() {
    assert_integer("5 % 3", 2);
    assert_integer("-7 % 2", -1);
    assert_integer("7 % -2", 1);
    assert_runtime_error("5.0 % 3", &RuntimeError::ModuloOnReals);
    assert_runtime_error("5 % 3.0", &RuntimeError::ModuloOnReals);
    assert_runtime_error("5 % 0", &RuntimeError::ModuloByZero);
}

#[test]
fn division_by_zero_is_an_error_not_infinity() {
    assert_runtime_error("1 / 0", &RuntimeError::DivisionByZero);
    assert_runtime_error("1.0 / 0.0", &RuntimeError::DivisionByZero);
    assert_runtime_error("1 / 0.0", &RuntimeError::DivisionByZero);
}

#[test]
fn exponentiation_is_left_associative() {
    // (2 ^ 3) ^ 2, not 2 ^ (3 ^ 2).
    assert_integer("2 ^ 3 ^ 2", 64);
}

#[test]
fn exponentiation_types() {
    assert_integer("2 ^ 0", 1);
    assert_integer("2 ^ 10", 1024);
    assert_real("2 ^ -1", 0.5);
    assert_real("2.0 ^ 2", 4.0);
    assert_real("9 ^ 0.5", 3.0);
    assert_runtime_error("10 ^ 19", &RuntimeError::Overflow);
    assert_runtime_error("2 ^ 10000000000", &RuntimeError::LiteralTooLarge);
}

#[test]
fn integer_overflow_is_reported() {
    assert_runtime_error("9223372036854775807 + 1", &RuntimeError::Overflow);
    assert_runtime_error("-9223372036854775807 - 2", &RuntimeError::Overflow);
}

#[test]
fn unary_minus_on_a_variable() {
    let mut context = Context::new();
    context.set_variable("x", Number::Integer(4));

    assert_eq!(evaluate("-x", &mut context).unwrap(), Number::Integer(-4));
}

#[test]
fn unary_minus_before_a_function_multiplies() {
    assert_real("-sin(0)", 0.0);
    assert_real("-sqrt(9)", -3.0);
}

#[test]
fn negative_literals_bind_tighter_than_exponentiation() {
    // A leading '-' folds into the literal, so this is (-2) ^ 2 ...
    assert_integer("-2 ^ 2", 4);
    // ... while a binary '-' keeps the conventional reading.
    assert_integer("0 - 2 ^ 2", -4);
}

#[test]
fn doubled_minus_subtracts_a_negative() {
    assert_integer("5 - -3", 8);
    assert_integer("2 * -3", -6);
    assert_integer("(-5)", -5);
}

#[test]
fn minus_after_a_closing_paren_does_not_subtract() {
    // The lexer treats ')' as unable to end a value, so the '-' folds into
    // the literal and the parse fails on the leftover number.
    match eval("(1 + 2) - 3") {
        Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. })) => {},
        other => panic!("expected trailing-token error, got {other:?}"),
    }
}

#[test]
fn whitespace_is_stripped_before_lexing() {
    assert_integer("1 2 + 3", 15);
    assert_integer("  7*8  ", 56);
}

#[test]
fn scientific_notation() {
    assert_real("1e3", 1000.0);
    assert_real("2.5E-4", 0.00025);
    assert_real("1.5e2 + 1", 151.0);
    assert_real("3.", 3.0);
    assert_parse_error("1e", &ParseError::MalformedNumber { literal: "1e".to_string() });
    assert_parse_error("2.5e+", &ParseError::MalformedNumber { literal: "2.5e+".to_string() });
}

#[test]
fn oversized_integer_literals_fail_to_lex() {
    assert_parse_error("99999999999999999999",
                       &ParseError::MalformedNumber { literal:
                                                          "99999999999999999999".to_string(), });
}

#[test]
fn unrecognized_characters_fail_to_lex() {
    assert_parse_error("1 + #", &ParseError::UnrecognizedCharacter { character: '#' });
    assert_parse_error(".5", &ParseError::UnrecognizedCharacter { character: '.' });
}

#[test]
fn builtin_functions() {
    assert_real("sin(0)", 0.0);
    assert_real("cos(0)", 1.0);
    assert_real("tan(0)", 0.0);
    assert_real("log(100)", 2.0);
    assert_real("ln(1)", 0.0);
    assert_real("sqrt(9)", 3.0);
    // Function results are always real, even for integer arguments.
    assert_real("sqrt(4) + 0", 2.0);
}

#[test]
fn trigonometry_is_in_radians() {
    assert_real("sin(pi / 2)", 1.0);
    assert_real("cos(pi)", -1.0);
}

#[test]
fn out_of_domain_arguments_follow_ieee() {
    match eval("sqrt(0 - 4)") {
        Ok(Number::Real(r)) => assert!(r.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }
    match eval("ln(0)") {
        Ok(Number::Real(r)) => assert!(r.is_infinite() && r < 0.0),
        other => panic!("expected -inf, got {other:?}"),
    }
}

#[test]
fn constants() {
    assert_real("pi", std::f64::consts::PI);
    assert_real("2 * pi", std::f64::consts::TAU);
}

#[test]
fn reserved_names_are_case_insensitive() {
    assert_real("SIN(0)", 0.0);
    assert_real("PI", std::f64::consts::PI);
    assert_real("Sqrt(9)", 3.0);
}

#[test]
fn variable_names_are_case_sensitive() {
    let mut context = Context::new();
    context.set_variable("x", Number::Integer(1));

    assert_eq!(evaluate("X", &mut context),
               Err(Error::Runtime(RuntimeError::UnknownVariable { name: "X".to_string() })));
}

#[test]
fn assignment_binds_and_returns_the_value() {
    let mut context = Context::new();

    assert_eq!(evaluate("a = 2 + 3", &mut context).unwrap(), Number::Integer(5));
    assert_eq!(evaluate("a * 2", &mut context).unwrap(), Number::Integer(10));

    assert_eq!(evaluate("a = 7", &mut context).unwrap(), Number::Integer(7));
    assert_eq!(context.get_variable("a"), Some(Number::Integer(7)));
}

#[test]
fn assignment_reports_its_target() {
    let mut context = Context::new();
    let tokens = tokenize("rate = 2 ^ 3").unwrap();

    let evaluation = parse_and_eval(&tokens, &mut context).unwrap();
    assert_eq!(evaluation.value, Number::Integer(8));
    assert_eq!(evaluation.assign_target.as_deref(), Some("rate"));

    let tokens = tokenize("rate + 1").unwrap();
    let evaluation = parse_and_eval(&tokens, &mut context).unwrap();
    assert_eq!(evaluation.assign_target, None);
}

#[test]
fn invalid_assignment_targets() {
    assert_parse_error("2 = 5", &ParseError::InvalidAssignmentTarget);
    assert_parse_error("pi = 3", &ParseError::InvalidAssignmentTarget);
}

#[test]
fn chained_assignment_is_rejected() {
    match eval("a = b = 2") {
        Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. })) => {},
        other => panic!("expected trailing-token error, got {other:?}"),
    }
}

#[test]
fn clearing_variables_forgets_bindings() {
    let mut context = Context::new();
    evaluate("a = 1", &mut context).unwrap();

    context.clear_variables();
    assert_eq!(evaluate("a", &mut context),
               Err(Error::Runtime(RuntimeError::UnknownVariable { name: "a".to_string() })));
}

#[test]
fn unknown_variables_carry_their_name() {
    assert_runtime_error("b + 1",
                         &RuntimeError::UnknownVariable { name: "b".to_string() });
}

#[test]
fn malformed_expressions() {
    assert_parse_error("(1 + 2", &ParseError::ExpectedClosingParen);
    assert_parse_error("1 +", &ParseError::UnexpectedEndOfInput);
    assert_parse_error("", &ParseError::UnexpectedEndOfInput);
    assert_parse_error("sin(5", &ParseError::ExpectedClosingParen);
    match eval("sin + 5") {
        Err(Error::Parse(ParseError::UnexpectedToken { .. })) => {},
        other => panic!("expected unexpected-token error, got {other:?}"),
    }
    // Whitespace stripping glues 'sin 5' into one unknown identifier.
    assert_runtime_error("sin 5", &RuntimeError::UnknownVariable { name: "sin5".to_string() });
    match eval("1 + 2 3 x") {
        // Whitespace stripping makes this '1 + 23' followed by 'x'.
        Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. })) => {},
        other => panic!("expected trailing-token error, got {other:?}"),
    }
}

#[test]
fn numbers_render_in_decimal() {
    assert_eq!(Number::Integer(3).to_string(), "3");
    assert_eq!(Number::Integer(-14).to_string(), "-14");
    assert_eq!(Number::Real(3.5).to_string(), "3.5");
    assert_eq!(Number::Real(0.00025).to_string(), "0.00025");
}
