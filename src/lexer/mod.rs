//! Tokenizer: the ordered pattern table and token types

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Token, TokenKind};
