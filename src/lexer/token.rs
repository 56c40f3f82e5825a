use serde::{Deserialize, Serialize};

use crate::runtime::Value;

/// A single token from the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token, carrying the cast literal value where applicable
    pub kind: TokenKind,
    /// Original text matched from the source
    pub lexeme: String,
    /// Byte offset where the token starts in the source
    pub offset: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, offset: usize) -> Self {
        Token {
            kind,
            lexeme,
            offset,
        }
    }

    /// Returns the literal value carried by this token, if it is a literal
    pub fn literal_value(&self) -> Option<Value> {
        match &self.kind {
            TokenKind::Integer(n) => Some(Value::Int(*n)),
            TokenKind::Float(f) => Some(Value::Float(*f)),
            TokenKind::String(s) => Some(Value::String(s.clone())),
            TokenKind::Bool(b) => Some(Value::Bool(*b)),
            _ => None,
        }
    }

    /// Returns true if this token carries a literal value
    pub fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Integer(_) | TokenKind::Float(_) | TokenKind::String(_) | TokenKind::Bool(_)
        )
    }

    /// Returns the identifier text, if this token is an identifier
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

/// All possible token types
///
/// Variant order mirrors the precedence order of the pattern table in
/// [`Lexer`](super::Lexer): strings bind before whitespace, floats before
/// integers, booleans before identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// String literal (double-quoted in source, no escape processing)
    String(String),
    /// Run of whitespace, dropped before parsing
    Whitespace,
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Floating-point literal (`.5`, `1.` and `0.5` are all valid)
    Float(f64),
    /// Integer literal
    Integer(i64),
    /// Boolean literal (`true` / `false`)
    Bool(bool),
    /// Identifier (letters only)
    Identifier(String),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::Float(fl) => write!(f, "{}", fl),
            TokenKind::Integer(n) => write!(f, "{}", n),
            TokenKind::Bool(b) => write!(f, "{}", b),
            TokenKind::Identifier(id) => write!(f, "{}", id),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_value() {
        let tok = Token::new(TokenKind::Integer(42), "42".to_string(), 0);
        assert_eq!(tok.literal_value(), Some(Value::Int(42)));
        assert!(tok.is_literal());

        let tok = Token::new(TokenKind::Identifier("x".to_string()), "x".to_string(), 0);
        assert_eq!(tok.literal_value(), None);
        assert!(!tok.is_literal());
        assert_eq!(tok.identifier(), Some("x"));

        let tok = Token::new(TokenKind::LeftParen, "(".to_string(), 0);
        assert_eq!(tok.literal_value(), None);
        assert_eq!(tok.identifier(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Integer(7).to_string(), "7");
        assert_eq!(TokenKind::String("hi".to_string()).to_string(), "\"hi\"");
        assert_eq!(TokenKind::Bool(true).to_string(), "true");
    }
}
