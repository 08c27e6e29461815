//! Literal kind detection.
//!
//! [`parse_any`] tries every kind in a fixed order and returns the first
//! token that scans and passes its boundary check. Comments come first so
//! that `//` and `/*` are never mistaken for patterns, and keywords come
//! before numbers so `NaN` and `Infinity` are reported as keywords.

use crate::comment::{self, CommentToken};
use crate::keyword::{self, KeywordToken};
use crate::lexer::{LiteralKind, Span, Spanned};
use crate::number::{self, NumberToken};
use crate::regexp::{self, RegExpToken};
use crate::string::{self, StringToken};

/// A token of any literal kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyToken {
    /// A comment
    Comment(CommentToken),
    /// A regular expression
    RegExp(RegExpToken),
    /// A string
    String(StringToken),
    /// A keyword or constant
    Keyword(KeywordToken),
    /// A number
    Number(NumberToken),
}

impl AnyToken {
    /// The kind of literal this token holds.
    pub fn kind(&self) -> LiteralKind {
        match self {
            AnyToken::Comment(_) => LiteralKind::Comment,
            AnyToken::RegExp(_) => LiteralKind::RegExp,
            AnyToken::String(_) => LiteralKind::String,
            AnyToken::Keyword(_) => LiteralKind::Keyword,
            AnyToken::Number(_) => LiteralKind::Number,
        }
    }

    /// The literal text.
    pub fn source(&self) -> &str {
        match self {
            AnyToken::Comment(token) => &token.source,
            AnyToken::RegExp(token) => &token.source,
            AnyToken::String(token) => &token.source,
            AnyToken::Keyword(token) => &token.source,
            AnyToken::Number(token) => &token.source,
        }
    }

    /// Character offset of the literal in the scanned input.
    pub fn offset(&self) -> usize {
        match self {
            AnyToken::Comment(token) => token.offset,
            AnyToken::RegExp(token) => token.offset,
            AnyToken::String(token) => token.offset,
            AnyToken::Keyword(token) => token.offset,
            AnyToken::Number(token) => token.offset,
        }
    }

    /// Character length of the literal.
    pub fn length(&self) -> usize {
        self.source().chars().count()
    }

    /// The decoded value, printed.
    pub fn value_text(&self) -> String {
        match self {
            AnyToken::Comment(token) => token.value.clone(),
            AnyToken::RegExp(token) => token.value.to_string(),
            AnyToken::String(token) => token.value.clone(),
            AnyToken::Keyword(token) => token.value.to_string(),
            AnyToken::Number(token) => token.value.to_string(),
        }
    }
}

impl Spanned for AnyToken {
    fn span(&self) -> Span {
        match self {
            AnyToken::Comment(token) => token.span,
            AnyToken::RegExp(token) => token.span,
            AnyToken::String(token) => token.span,
            AnyToken::Keyword(token) => token.span,
            AnyToken::Number(token) => token.span,
        }
    }
}

/// Scans the literal at the head of `input`, whatever its kind.
pub fn parse_any(input: &str) -> Option<AnyToken> {
    let token = comment::parse_token(input)
        .map(AnyToken::Comment)
        .or_else(|| regexp::parse_token(input).map(AnyToken::RegExp))
        .or_else(|| string::parse_token(input).map(AnyToken::String))
        .or_else(|| keyword::parse_token(input).map(AnyToken::Keyword))
        .or_else(|| number::parse_token(input).map(AnyToken::Number));

    match &token {
        Some(token) => tracing::debug!(
            kind = %token.kind(),
            source = token.source(),
            "literal detected"
        ),
        None => tracing::debug!(input, "no literal detected"),
    }
    token
}

/// Runs [`parse_any`] over every input, in parallel when the `parallel`
/// feature is enabled. Results keep the order of `inputs`.
#[cfg(feature = "parallel")]
pub fn parse_all<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<Option<AnyToken>> {
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|input| parse_any(input.as_ref()))
        .collect()
}

/// Runs [`parse_any`] over every input. Results keep the order of `inputs`.
#[cfg(not(feature = "parallel"))]
pub fn parse_all<S: AsRef<str>>(inputs: &[S]) -> Vec<Option<AnyToken>> {
    inputs.iter().map(|input| parse_any(input.as_ref())).collect()
}
