//! Error types for the lispet interpreter

use thiserror::Error;

/// Interpreter errors
///
/// Every failure is immediate and synchronous: the evaluator never retries
/// or recovers locally, it propagates the error straight to the caller of
/// [`evaluate`](crate::evaluate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexer errors
    /// Integer literal does not fit in an i64
    ///
    /// **Triggered by:** a digit sequence longer than i64 can hold
    /// **Example:** `99999999999999999999`
    #[error("Lexing error: integer literal out of range: {text}")]
    IntegerOutOfRange {
        /// The offending digit sequence
        text: String,
    },

    // Structural errors
    /// Closing parenthesis with no matching open parenthesis
    ///
    /// **Triggered by:** a `)` while no expression is open
    /// **Example:** `1)`
    #[error("Parsing error: too many close parenthesis")]
    TooManyCloseParens,

    /// Unbalanced parentheses at end of input
    ///
    /// **Example:** `(plus 1` (missing closing parenthesis)
    #[error("Parsing error: parenthesis mismatch, depth: {depth}, expected: 0")]
    ParenMismatch {
        /// Open/close balance left over after the scan
        depth: i64,
    },

    /// Array literal opened inside another array literal
    ///
    /// **Example:** `[[1]]`
    #[error("Parsing error: trying to make an array within an array")]
    NestedArray,

    /// Array literal closed while none was open
    #[error("Parsing error: trying to close a non-existent array")]
    UnopenedArray,

    /// Expression opened inside an array literal
    ///
    /// **Example:** `[(plus 1 2)]`
    #[error("Parsing error: trying to create an expression in an array")]
    ExpressionInArray,

    /// Expression closed inside an array literal
    #[error("Parsing error: trying to evaluate an expression in an array")]
    EvaluationInArray,

    /// Closing parenthesis reached with no pending function name
    ///
    /// **Example:** `()` or `(1 2)`
    #[error("Parsing error: cannot evaluate without a function")]
    MissingFunction,

    /// A `def` form that does not match `(def <identifier> <literal>)`
    #[error("Parsing error: malformed definition, {reason}")]
    MalformedDefinition {
        /// Which part of the fixed shape was violated
        reason: String,
    },

    /// Input produced no value at all (empty or whitespace-only source)
    #[error("Evaluation error: no value produced")]
    EmptyProgram,

    // Resolution errors
    /// Identifier used in value position without a prior `def`
    #[error("Evaluation error: undefined constant {name}")]
    UndefinedConstant {
        /// The unresolved identifier
        name: String,
    },

    /// Identifier used in function position matches no builtin
    #[error("Evaluation error: {name} is not a valid function")]
    NotAFunction {
        /// The unresolved function name
        name: String,
    },

    // Arity and type errors
    /// Fewer values on the stack than the builtin's declared arity
    ///
    /// **Example:** `(plus 1)` (plus takes two arguments)
    #[error("Evaluation error: {name} expects {expected} arguments, but only got {got}")]
    ArityMismatch {
        /// Builtin name
        name: String,
        /// Declared arity
        expected: usize,
        /// Arguments actually available
        got: usize,
    },

    /// Argument runtime kind does not match the declared kind at its position
    ///
    /// **Example:** `(plus 1 "two")` (second argument must be a number)
    #[error("Evaluation error: {name} expects arg {index} to be a {expected} but it is a {got}")]
    ArgumentKind {
        /// Builtin name
        name: String,
        /// Zero-based argument position
        index: usize,
        /// Declared kind at that position
        expected: &'static str,
        /// Runtime kind of the actual value
        got: &'static str,
    },

    // Conversion errors
    /// `int`/`float` builtin given text that does not parse
    ///
    /// **Example:** `(int "a")`
    #[error("Evaluation error: \"{text}\" cannot be cast to {target}")]
    Cast {
        /// The text that failed to parse
        text: String,
        /// Target kind, with article ("an integer", "a float")
        target: &'static str,
    },

    // Domain errors
    /// `length` given a value that has no length
    ///
    /// **Example:** `(length 5)`
    #[error("Evaluation error: cannot get length of a {kind} as it is neither a string nor an array")]
    NoLength {
        /// Runtime kind of the offending value
        kind: &'static str,
    },
}

/// Result type for lispet operations
pub type Result<T> = std::result::Result<T, Error>;
