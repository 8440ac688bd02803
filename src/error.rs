//! Typed, position-carrying errors raised by the lexer and parser.
//!
//! Failure to *prove* a query is never an error (see `resolver.rs`); these
//! types only cover malformed source text.
// The teacher returns plain `Result<_, String>` everywhere. This crate
// uses `thiserror` instead, matching the derive-based error convention
// used broadly across this pack's sibling Rust crates.

use thiserror::Error;

use crate::token::Token;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message} at line {line}, column {column}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("{message} at line {}, column {}", token.line, token.column)]
    Unexpected { message: String, token: Token },
    #[error("{message}")]
    PrematureEof { message: String },
}

/// Either of the two fatal parse-time failures: an unrecognised character
/// (lexer) or a malformed token sequence (parser).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn token(&self) -> Option<&Token> {
        match self {
            Error::Lexer(_) => None,
            Error::Parse(p) => p.token(),
        }
    }
}

impl ParseError {
    pub fn unexpected(message: impl Into<String>, token: Token) -> ParseError {
        ParseError::Unexpected { message: message.into(), token }
    }

    pub fn eof(message: impl Into<String>) -> ParseError {
        ParseError::PrematureEof { message: message.into() }
    }

    /// The offending token, if this error carries source position.
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::Unexpected { token, .. } => Some(token),
            ParseError::PrematureEof { .. } => None,
        }
    }
}
