//! Evaluation: environments, placeholders and operator dispatch.

use proto_expr::prelude::*;
use proto_expr::{BinaryOp, EvalError, evaluate, evaluate_as, evaluate_with};

// =============================================================================
// User override
// =============================================================================

/// A number whose `+` subtracts inside trees.
#[derive(Clone, Copy, Debug, PartialEq, Operand)]
struct Number(f64);

impl EvalPlus for Number {
    fn eval_plus(self, rhs: Self) -> Self {
        Number(self.0 - rhs.0)
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> f64 {
        number.0
    }
}

#[test]
fn test_override_replaces_plus() {
    let a = term(Number(1.0));
    let b = term(Number(42.0));

    let sum = &a + &b;
    assert_eq!(evaluate(&sum), Ok(Number(-41.0)));

    // Both `+` nodes go through the override: 1 - (1 - 42).
    let nested = &a + sum;
    assert_eq!(evaluate_as::<f64, _>(&nested), Ok(42.0));
}

#[test]
fn test_missing_operator_is_reported() {
    let expr = term(Number(1.0)) * Number(2.0);
    assert_eq!(
        evaluate(&expr),
        Err(EvalError::Unsupported { op: BinaryOp::Multiplies, operand: core::any::type_name::<Number>() })
    );
}

// =============================================================================
// Native fallback
// =============================================================================

#[test]
fn test_native_operators() {
    let unity = term(1.0_f64);
    let i = 42.0_f64;
    let expr = &unity - i;
    assert_eq!(expr.evaluate(), Ok(-41.0));

    let unevaluated = unity + expr;
    assert_eq!(unevaluated.evaluate(), Ok(-40.0));
    assert_eq!(unevaluated.evaluate_with(&[15.0]), Ok(-40.0));
}

#[test]
fn test_string_concatenation() {
    let greeting = String::from("hello");
    let expr = term_ref(&greeting) + String::from(", ") + placeholder(0);
    assert_eq!(expr.evaluate_with(&[String::from("world")]).as_deref(), Ok("hello, world"));
}

// =============================================================================
// Environments
// =============================================================================

#[test]
fn test_placeholder_substitution() {
    let env = [5, 6, 7];

    let p2 = placeholder::<i32>(2);
    assert_eq!(evaluate_with(&p2, &env), Ok(7));

    let twice = &p2 + &p2;
    assert_eq!(evaluate_with(&twice, &env), Ok(14));

    let mixed = placeholder::<i32>(0) * placeholder(1) - p2;
    assert_eq!(mixed.evaluate_with(&env), Ok(23));
}

#[test]
fn test_environment_ignored_without_placeholders() {
    let expr = term(3_i64) * 4 - (term(10_i64) / 5);
    assert!(!expr.has_placeholders());

    let expected = evaluate(&expr);
    assert_eq!(expected, Ok(10));
    for env in [&[][..], &[1][..], &[9, 8, 7][..]] {
        assert_eq!(evaluate_with(&expr, env), expected);
    }
}

#[test]
fn test_short_environment() {
    let expr = term(1_u32) + placeholder(3);
    assert_eq!(expr.placeholder_count(), 4);
    assert_eq!(
        expr.evaluate_with(&[1, 2]),
        Err(EvalError::MissingArgument { index: 3, len: 2 })
    );
    assert_eq!(expr.evaluate(), Err(EvalError::MissingArgument { index: 3, len: 0 }));
}

#[test]
fn test_evaluate_as_converts() {
    let expr = term(2_u8) * 100;
    assert_eq!(expr.evaluate_as::<u32>(), Ok(200));
    assert_eq!(evaluate_as::<i64, _>(&(term(7_i32) - 9)), Ok(-2));
}
