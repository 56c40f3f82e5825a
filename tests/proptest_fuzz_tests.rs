//! Property-based fuzzing tests for the lexer and evaluator
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The lexer never panics and always emits offset-sorted tokens
//! 2. The evaluator returns a value or an error, never panics
//! 3. Valid expressions evaluate deterministically

use lispet::{Evaluator, Lexer, TokenKind, Value};
use proptest::prelude::*;

/// Generate random strings that might break the lexer
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Generate tokens that look like expression elements
fn expr_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("[".to_string()),
        Just("]".to_string()),
        Just("def".to_string()),
        Just("if".to_string()),
        Just("plus".to_string()),
        Just("minus".to_string()),
        Just("concat".to_string()),
        Just("equals".to_string()),
        Just("length".to_string()),
        Just("true".to_string()),
        Just("false".to_string()),
        (0i64..1000i64).prop_map(|n| n.to_string()),
        (0.0f64..100.0f64).prop_map(|f| format!("{:.2}", f)),
        "\"[a-zA-Z0-9 ]{0,10}\"".prop_map(|s| s),
        "[a-z]{1,8}".prop_map(|s| s),
    ]
}

/// Generate token soups in roughly expression shape
fn token_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(expr_token(), 0..40).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn lexer_never_panics(source in arbitrary_source_string()) {
        let lexer = Lexer::new();
        let _ = lexer.tokenize(&source);
    }

    #[test]
    fn lexer_offsets_strictly_increase(source in arbitrary_source_string()) {
        let lexer = Lexer::new();
        if let Ok(tokens) = lexer.tokenize(&source) {
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].offset < pair[1].offset);
            }
        }
    }

    #[test]
    fn lexer_drops_whitespace_nowhere_else(source in arbitrary_source_string()) {
        let lexer = Lexer::new();
        if let Ok(tokens) = lexer.tokenize(&source) {
            for token in &tokens {
                if token.kind == TokenKind::Whitespace {
                    prop_assert!(token.lexeme.chars().all(char::is_whitespace));
                } else {
                    prop_assert!(!token.lexeme.is_empty());
                }
            }
        }
    }

    #[test]
    fn evaluator_never_panics(source in token_soup()) {
        let lexer = Lexer::new();
        let evaluator = Evaluator::new();
        if let Ok(tokens) = lexer.tokenize(&source) {
            let _ = evaluator.eval(&tokens);
        }
    }

    #[test]
    fn arithmetic_is_deterministic(a in -1000i64..1000, b in -1000i64..1000) {
        // Negative literals don't exist in the syntax, so build the
        // expression from non-negative halves.
        let (a, b) = (a.abs(), b.abs());
        let source = format!("(plus {} {})", a, b);
        let first = lispet::evaluate(&source).unwrap();
        let second = lispet::evaluate(&source).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Value::Int(a + b));
    }

    #[test]
    fn array_literals_round_trip_length(len in 0usize..20) {
        let elements: Vec<String> = (0..len).map(|i| i.to_string()).collect();
        let source = format!("(length [{}])", elements.join(" "));
        let result = lispet::evaluate(&source).unwrap();
        prop_assert_eq!(result, Value::Int(len as i64));
    }
}
