//! Property-based checks of the evaluator's numeric invariants.

use plotcalc::{Context, Number, evaluate, evaluate_with_x, sample};
use proptest::prelude::*;

proptest! {
    /// Expressions built from integer literals and `+ - *` stay integers.
    #[test]
    fn integer_arithmetic_stays_integer(
        a in -1000i64..1000,
        b in -1000i64..1000,
        c in -1000i64..1000,
    ) {
        let source = format!("{a} * {b} + {c} - {a}");
        let value = evaluate(&source, &mut Context::new()).unwrap();
        prop_assert!(value.is_integer());
        prop_assert_eq!(value, Number::Integer(a * b + c - a));
    }

    /// One real operand is enough to promote the whole expression.
    #[test]
    fn mixed_operands_promote_to_real(
        a in -1000i64..1000,
        r in -1000.0f64..1000.0,
    ) {
        // The Debug form keeps a `.0` on whole reals, so the literal always
        // lexes as a real.
        let source = format!("{a} + {r:?}");
        let value = evaluate(&source, &mut Context::new()).unwrap();
        prop_assert!(value.is_real());
        prop_assert_eq!(value.as_real(), a as f64 + r);
    }

    /// `^` with a non-negative integer exponent stays an integer.
    #[test]
    fn integer_powers_stay_integer(
        base in -9i64..10,
        exponent in 0u32..6,
        offset in -100i64..100,
    ) {
        let source = format!("{base} ^ {exponent} + {offset}");
        let value = evaluate(&source, &mut Context::new()).unwrap();
        prop_assert_eq!(value, Number::Integer(base.pow(exponent) + offset));
    }

    /// Division truncates toward zero and the remainder follows the
    /// dividend, exactly as the host language defines them.
    #[test]
    fn division_and_remainder_semantics(
        a in -10_000i64..10_000,
        b in prop_oneof![-100i64..-1, 1i64..100],
    ) {
        let quotient = evaluate(&format!("{a} / {b}"), &mut Context::new()).unwrap();
        prop_assert_eq!(quotient, Number::Integer(a / b));

        let remainder = evaluate(&format!("{a} % {b}"), &mut Context::new()).unwrap();
        prop_assert_eq!(remainder, Number::Integer(a % b));
    }

    /// Evaluating the bare expression `x` returns the bound value.
    #[test]
    fn identity_returns_x(x in -1e9f64..1e9) {
        prop_assert_eq!(evaluate_with_x("x", x).unwrap(), x);
    }

    /// A value bound by assignment reads back unchanged.
    #[test]
    fn assignment_round_trips(a in (i64::MIN + 1)..i64::MAX) {
        let mut context = Context::new();
        evaluate(&format!("a = {a}"), &mut context).unwrap();

        let value = evaluate("a + 0", &mut context).unwrap();
        prop_assert_eq!(value, Number::Integer(a));
    }

    /// A rendered number lexes and evaluates back to an equal value.
    #[test]
    fn rendered_numbers_round_trip(r in -1e12f64..1e12) {
        let rendered = Number::Real(r).to_string();
        let value = evaluate(&rendered, &mut Context::new()).unwrap();
        prop_assert_eq!(value.as_real(), r);
    }

    /// Sampling the identity expression over `[0, n]` with a unit step
    /// yields every integer point.
    #[test]
    fn sampling_the_identity_line(n in 1usize..50) {
        let points = sample("x", 0.0, n as f64, 1.0).unwrap();
        prop_assert_eq!(points.len(), n + 1);

        for (i, (x, y)) in points.into_iter().enumerate() {
            prop_assert_eq!(x, i as f64);
            prop_assert_eq!(y, x);
        }
    }
}
