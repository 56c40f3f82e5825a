//! # lispet — a minimal LISP-like expression language
//!
//! A tokenizer and a combined parser/evaluator that read a parenthesized,
//! prefix-notation expression such as `(plus 1 (minus 5 4))` and produce a
//! single runtime [`Value`] (int, float, string, boolean, or array). The
//! language has a small fixed set of builtin operations, one-shot constant
//! definitions via `def`, and literal arrays.
//!
//! ## Quick Start
//!
//! ```rust
//! use lispet::{evaluate, Value};
//!
//! # fn main() -> lispet::Result<()> {
//! assert_eq!(evaluate("(plus 1 (minus 5 4))")?, Value::Int(2));
//! assert_eq!(evaluate("(concat \"hi \" \"there\")")?, Value::String("hi there".to_string()));
//! assert_eq!(evaluate("[1 2 3]")?, Value::array(vec![
//!     Value::Int(1), Value::Int(2), Value::Int(3),
//! ]));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Evaluator (single pass, two stacks) → Value
//! ```
//!
//! There is deliberately no AST. The [`Evaluator`] is a shift/reduce machine
//! with an operator stack of pending function names and an operand stack of
//! pending values; each sub-expression is evaluated the moment its closing
//! parenthesis is seen. This fuses parsing and evaluation into one
//! left-to-right scan and gives the language its one surprising property:
//! `if` evaluates both branches before selecting one.
//!
//! ## Main Components
//!
//! - [`Lexer`] — precedence-ordered pattern table; turns source text into
//!   offset-sorted tokens, silently dropping unmatched characters
//! - [`Evaluator`] — the single-pass stack machine
//! - [`BuiltinRegistry`] — fixed table of builtins with declared argument
//!   kinds, checked against the runtime kind of each actual argument
//! - [`Environment`] — constants bound by `def`, scoped to one pass unless
//!   the host threads an environment through
//!   [`Evaluator::eval_with_env`]
//! - [`Value`] — runtime value representation
//!
//! ## Sequential Use
//!
//! ```rust
//! use lispet::{Environment, Evaluator, Lexer, Value};
//!
//! # fn main() -> lispet::Result<()> {
//! let lexer = Lexer::new();
//! let evaluator = Evaluator::new();
//! let mut env = Environment::new();
//!
//! evaluator.eval_with_env(&lexer.tokenize("(def greeting \"hello\")")?, &mut env)?;
//! let result = evaluator.eval_with_env(&lexer.tokenize("(length greeting)")?, &mut env)?;
//! assert_eq!(result, Value::Int(5));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is immediate and carries a human-readable message; the
//! core never recovers locally:
//!
//! ```rust
//! use lispet::evaluate;
//!
//! let err = evaluate("(int \"a\")").unwrap_err();
//! assert!(err.to_string().contains("cannot be cast to an integer"));
//! ```

/// Version of the lispet interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod builtins;
pub mod error;
pub mod lexer;
pub mod runtime;

// Re-export main types
pub use builtins::{ArgKind, Builtin, BuiltinRegistry};
pub use error::{Error, Result};
pub use lexer::{Lexer, Token, TokenKind};
pub use runtime::{Environment, Evaluator, Value};

/// Evaluates one expression from source text to a single value
///
/// One-shot convenience entry point: builds a fresh [`Lexer`], [`Evaluator`],
/// and [`Environment`] per call. Hosts issuing many calls, or wanting `def`
/// bindings to persist across them, should hold the pieces themselves.
pub fn evaluate(source: &str) -> Result<Value> {
    let lexer = Lexer::new();
    let tokens = lexer.tokenize(source)?;
    let evaluator = Evaluator::new();
    evaluator.eval(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_entry_point() {
        assert_eq!(evaluate("(plus 1 2)").unwrap(), Value::Int(3));
    }

    #[test]
    fn test_evaluate_propagates_errors() {
        assert!(evaluate("(plus 1").is_err());
    }

    #[test]
    fn test_version_set() {
        assert!(!VERSION.is_empty());
    }
}
