//! Source text to token stream.
//!
//! Whitespace and `#`-to-end-of-line comments are skipped; they advance
//! position without emitting a token. A character that starts none of the
//! three token classes is a [`LexerError`].
// Adapted from brolog/lex.py's tokenize() (this crate's char-by-char,
// line/column-tracking lexer follows the original's regex-driven scan
// rather than suiron-rust's coarser tokenizer.rs).

use crate::error::LexerError;
use crate::token::{Token, TokenType};

/// Tokenizes `source`, or fails at the first unrecognised character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut line = 1;
    let mut column = 1;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\n' {
            line += 1;
            column = 1;
            i += 1;
            continue;
        }
        if ch == '\r' {
            // Part of a \r\n pair; the following \n advances the line.
            i += 1;
            column += 1;
            continue;
        }
        if ch.is_whitespace() {
            i += 1;
            column += 1;
            continue;
        }
        if ch == '#' {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
                column += 1;
            }
            continue;
        }

        if ch.is_ascii_uppercase() || ch == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && is_name_char(chars[i]) {
                i += 1;
            }
            let value: String = chars[start..i].iter().collect();
            let len = value.chars().count();
            tokens.push(Token::new(TokenType::Variable, value, line, column));
            column += len;
            continue;
        }

        if ch == '!' {
            tokens.push(Token::new(TokenType::Name, "!", line, column));
            i += 1;
            column += 1;
            continue;
        }

        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            let start = i;
            i += 1;
            while i < chars.len() && is_name_char(chars[i]) {
                i += 1;
            }
            let value: String = chars[start..i].iter().collect();
            let len = value.chars().count();
            tokens.push(Token::new(TokenType::Name, value, line, column));
            column += len;
            continue;
        }

        if let Some((value, width)) = match_special(&chars, i) {
            tokens.push(Token::new(TokenType::Special, value, line, column));
            i += width;
            column += width;
            continue;
        }

        return Err(LexerError {
            message: format!("Unexpected token: <{}>", ch),
            line,
            column,
        });
    }

    Ok(tokens)
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn match_special(chars: &[char], i: usize) -> Option<(String, usize)> {
    if chars[i] == ':' && chars.get(i + 1) == Some(&'-') {
        return Some((":-".to_string(), 2));
    }
    if "[]|().,".contains(chars[i]) {
        return Some((chars[i].to_string(), 1));
    }
    None
}
