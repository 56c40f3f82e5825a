use regex::Regex;

use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// One entry in the ordered token pattern table
///
/// `cast` maps the matched text to a typed [`TokenKind`]; for punctuation and
/// whitespace it ignores the text entirely.
struct TokenRule {
    pattern: Regex,
    cast: fn(&str) -> Result<TokenKind>,
}

impl TokenRule {
    fn new(pattern: &str, cast: fn(&str) -> Result<TokenKind>) -> Self {
        TokenRule {
            // The table is fixed, so the patterns are known-valid.
            pattern: Regex::new(pattern).expect("valid token pattern"),
            cast,
        }
    }
}

/// Pattern-table tokenizer
///
/// Holds the fixed, precedence-ordered set of token patterns. Construct once
/// with [`Lexer::new`] and reuse across calls; [`Lexer::tokenize`] takes the
/// table by reference and keeps no state between calls.
pub struct Lexer {
    rules: Vec<TokenRule>,
}

impl Lexer {
    /// Creates a lexer with the fixed token pattern table
    ///
    /// Order matters: when two patterns match overlapping text, the rule
    /// declared earlier claims the characters and the later match is dropped
    /// whole. Strings therefore bind before anything inside their quotes,
    /// floats before integers, and booleans before identifiers.
    pub fn new() -> Self {
        let rules = vec![
            TokenRule::new(r#""[^"]*""#, cast_string),
            TokenRule::new(r"\s+", |_| Ok(TokenKind::Whitespace)),
            TokenRule::new(r"\(", |_| Ok(TokenKind::LeftParen)),
            TokenRule::new(r"\)", |_| Ok(TokenKind::RightParen)),
            TokenRule::new(r"\[", |_| Ok(TokenKind::LeftBracket)),
            TokenRule::new(r"\]", |_| Ok(TokenKind::RightBracket)),
            TokenRule::new(r"([0-9]+\.[0-9]*)|([0-9]*\.[0-9]+)", cast_float),
            TokenRule::new(r"[0-9]+", cast_integer),
            TokenRule::new(r"(true)|(false)", cast_bool),
            TokenRule::new(r"[a-zA-Z]+", cast_identifier),
        ];

        Lexer { rules }
    }

    /// Converts source text into an ordered sequence of typed tokens
    ///
    /// Characters matched by no pattern are silently dropped. Output tokens
    /// are sorted by strictly increasing start offset, which is what lets the
    /// evaluator treat the sequence as left-to-right input. The only failure
    /// is an integer literal that overflows i64.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        // Collect every match of every rule, in rule declaration order.
        let mut candidates: Vec<(usize, &str, usize)> = Vec::new();
        for (rule_idx, rule) in self.rules.iter().enumerate() {
            for m in rule.pattern.find_iter(source) {
                candidates.push((m.start(), m.as_str(), rule_idx));
            }
        }

        // Resolve cross-rule overlaps: a candidate touching any already
        // claimed byte is dropped entirely, not trimmed.
        let mut claimed = vec![false; source.len()];
        let mut survivors: Vec<(usize, &str, usize)> = Vec::new();
        for (start, text, rule_idx) in candidates {
            let span = start..start + text.len();
            if span.clone().any(|i| claimed[i]) {
                continue;
            }
            for i in span {
                claimed[i] = true;
            }
            survivors.push((start, text, rule_idx));
        }

        // Overlap resolution made the spans disjoint, so offset order is total.
        survivors.sort_by_key(|&(start, _, _)| start);

        let mut tokens = Vec::with_capacity(survivors.len());
        for (start, text, rule_idx) in survivors {
            let kind = (self.rules[rule_idx].cast)(text)?;
            tokens.push(Token::new(kind, text.to_string(), start));
        }

        tracing::debug!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

fn cast_string(text: &str) -> Result<TokenKind> {
    // Strip the surrounding quotes; no escape processing.
    Ok(TokenKind::String(text[1..text.len() - 1].to_string()))
}

fn cast_float(text: &str) -> Result<TokenKind> {
    let value: f64 = text.parse().map_err(|_| Error::Cast {
        text: text.to_string(),
        target: "a float",
    })?;
    Ok(TokenKind::Float(value))
}

fn cast_integer(text: &str) -> Result<TokenKind> {
    let value: i64 = text.parse().map_err(|_| Error::IntegerOutOfRange {
        text: text.to_string(),
    })?;
    Ok(TokenKind::Integer(value))
}

fn cast_bool(text: &str) -> Result<TokenKind> {
    Ok(TokenKind::Bool(text == "true"))
}

fn cast_identifier(text: &str) -> Result<TokenKind> {
    Ok(TokenKind::Identifier(text.to_string()))
}
