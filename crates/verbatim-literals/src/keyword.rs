//! Keyword and constant literals: `true`, `false`, `null`, `NaN`, `Infinity`.

use std::fmt;

use crate::error::{settle, LiteralError, Result};
use crate::lexer::{
    char_offset, is_id_continue, is_strict_boundary, Boundary, Cursor, LiteralKind, Token,
};
use crate::ParseOptions;

/// The value of a keyword literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordValue {
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `NaN`
    NaN,
    /// `Infinity`
    Infinity,
}

impl KeywordValue {
    /// Every keyword, in lookup order.
    pub const ALL: [KeywordValue; 5] = [
        KeywordValue::True,
        KeywordValue::False,
        KeywordValue::Null,
        KeywordValue::NaN,
        KeywordValue::Infinity,
    ];

    /// The keyword spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordValue::True => "true",
            KeywordValue::False => "false",
            KeywordValue::Null => "null",
            KeywordValue::NaN => "NaN",
            KeywordValue::Infinity => "Infinity",
        }
    }

    /// Looks up a keyword by its exact spelling.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == word)
    }

    /// The boolean value of `true` and `false`.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            KeywordValue::True => Some(true),
            KeywordValue::False => Some(false),
            _ => None,
        }
    }

    /// The numeric value of `NaN` and `Infinity`.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            KeywordValue::NaN => Some(f64::NAN),
            KeywordValue::Infinity => Some(f64::INFINITY),
            _ => None,
        }
    }
}

impl fmt::Display for KeywordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scanned keyword literal.
pub type KeywordToken = Token<KeywordValue>;

/// Parses the keyword at the head of `input` and returns its value.
pub fn parse(input: &str) -> Option<KeywordValue> {
    parse_token(input).map(|token| token.value)
}

/// Parses the keyword at the head of `input` into a token.
pub fn parse_token(input: &str) -> Option<KeywordToken> {
    parse_token_with(input, ParseOptions::default()).ok().flatten()
}

/// Parses the keyword at the head of `input` with explicit options.
///
/// The keyword must be followed by end of input, whitespace, or one of
/// `, ; ) ] }`.
pub fn parse_token_with(input: &str, options: ParseOptions) -> Result<Option<KeywordToken>> {
    let scanned = scan(input).and_then(|token| {
        if is_strict_boundary(input, &token, Boundary::Statement) {
            Ok(token)
        } else {
            Err(LiteralError::BoundaryViolation {
                kind: LiteralKind::Keyword,
                offset: token.end(),
            })
        }
    });
    settle(scanned, options.strict)
}

/// Prints the keyword spelling.
pub fn to_literal(keyword: KeywordValue) -> String {
    keyword.as_str().to_string()
}

fn scan(input: &str) -> Result<KeywordToken> {
    let mut cursor = Cursor::new(input);
    let start = cursor.skip_whitespace();

    while cursor.peek().is_some_and(is_id_continue) {
        cursor.advance();
    }

    KeywordValue::from_word(cursor.slice_from(start))
        .map(|value| Token::new(input, start, cursor.pos(), value, ()))
        .ok_or(LiteralError::NoMatch {
            kind: LiteralKind::Keyword,
            offset: char_offset(input, start),
        })
}
