use crate::expression::{ExpressionError, MAX_NESTING, Operator, evaluate};

fn assert_evaluates_to(expression: &str, expected: f64) {
    let result = evaluate(expression);
    assert!(result.is_ok(), "'{}' failed: {:?}", expression, result);
    if let Ok(value) = result {
        assert!(
            (value - expected).abs() < 1e-9,
            "'{}' evaluated to {}, expected {}",
            expression,
            value,
            expected
        );
    }
}

#[test]
fn test_precedence() {
    assert_evaluates_to("2+3*4", 14.0);
    assert_evaluates_to("(2+3)*4", 20.0);
    assert_evaluates_to("2*3+4*5", 26.0);
}

#[test]
fn test_left_associativity() {
    assert_evaluates_to("10-4-3", 3.0);
    assert_evaluates_to("48/4/2", 6.0);
    assert_evaluates_to("8-2+1", 7.0);
}

#[test]
fn test_nested_parentheses() {
    assert_evaluates_to("((1+2)*(3+4))", 21.0);
    assert_evaluates_to("(8/(3-8/3))", 24.0);
}

#[test]
fn test_decimal_literals() {
    assert_evaluates_to("2.5*4", 10.0);
    assert_evaluates_to("0.5+0.25", 0.75);
}

#[test]
fn test_whitespace_is_ignored() {
    assert_evaluates_to("  ( 4 + 8 ) * ( 6 - 2 ) ", 48.0);
    assert_evaluates_to("1 0 + 2", 12.0);
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    let result = evaluate("2/0");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(value.is_infinite());
    }

    let result = evaluate("0/0");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(value.is_nan());
    }

    let result = evaluate("(3-3)/(4-4)*2");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(!value.is_finite());
    }
}

#[test]
fn test_missing_operand() {
    assert_eq!(evaluate("2+"), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(evaluate(""), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(evaluate("   "), Err(ExpressionError::UnexpectedEnd));
}

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(
        evaluate("(2+3"),
        Err(ExpressionError::MismatchedParentheses { position: 4 })
    );
    assert_eq!(
        evaluate("2+3)"),
        Err(ExpressionError::TrailingInput { position: 3 })
    );
    assert_eq!(
        evaluate(")"),
        Err(ExpressionError::UnexpectedCharacter {
            found: ')',
            position: 0
        })
    );
}

#[test]
fn test_unary_minus_is_rejected() {
    assert_eq!(
        evaluate("-2+26"),
        Err(ExpressionError::UnexpectedCharacter {
            found: '-',
            position: 0
        })
    );
    assert!(evaluate("2*-3").is_err());
    assert!(evaluate("+2").is_err());
}

#[test]
fn test_trailing_garbage() {
    assert_eq!(
        evaluate("2+3x"),
        Err(ExpressionError::TrailingInput { position: 3 })
    );
    assert!(evaluate("2^3").is_err());
    assert!(evaluate("1.2.3").is_err());
}

#[test]
fn test_malformed_decimal() {
    assert_eq!(evaluate("2."), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(
        evaluate("2.+1"),
        Err(ExpressionError::UnexpectedCharacter {
            found: '+',
            position: 2
        })
    );
    assert!(evaluate(".5").is_err());
}

#[test]
fn test_non_breaking_space_is_not_whitespace() {
    assert_eq!(
        evaluate("2\u{a0}+2"),
        Err(ExpressionError::TrailingInput { position: 1 })
    );
    assert_eq!(
        evaluate("\u{3000}4"),
        Err(ExpressionError::UnexpectedCharacter {
            found: '\u{3000}',
            position: 0
        })
    );
}

#[test]
fn test_non_ascii_input_does_not_panic() {
    assert!(evaluate("2×3").is_err());
    assert!(evaluate("４+20").is_err());
}

#[test]
fn test_deep_nesting_is_bounded() {
    let within = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_evaluates_to(&within, 1.0);

    let beyond = "(".repeat(10_000);
    assert_eq!(
        evaluate(&beyond),
        Err(ExpressionError::NestingTooDeep { limit: MAX_NESTING })
    );
}

#[test]
fn test_operator_symbols_round_trip() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        assert_eq!(format!("{}", op), op.symbol().to_string());
    }
    assert_eq!(Operator::from_symbol('^'), None);
}

#[test]
fn test_operator_apply() {
    assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
    assert_eq!(Operator::Sub.apply(2.0, 3.0), -1.0);
    assert_eq!(Operator::Mul.apply(2.0, 3.0), 6.0);
    assert_eq!(Operator::Div.apply(3.0, 2.0), 1.5);
    assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
}
