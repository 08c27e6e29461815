// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # verbatim-literals
//!
//! Recognizes and reproduces JavaScript-style literal tokens embedded in
//! free-form text.
//!
//! ## Overview
//!
//! Every literal kind lives in its own module and exposes the same four
//! entry points:
//!
//! - `parse` - scan the head of the input and return the decoded value
//! - `parse_token` - scan the head of the input and return the full token
//! - `parse_token_with` - like `parse_token`, with `strict` choosing between
//!   `Ok(None)` and an explicit [`LiteralError`] on failure
//! - `to_literal` - print a value back into literal syntax
//!
//! Leading whitespace is skipped, and the text following a literal must be a
//! plausible terminator (see [`lexer::boundary`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use verbatim_literals::{number, string, Radix};
//!
//! let token = number::parse_token("  0x1F,").unwrap();
//! assert_eq!(token.offset, 2);
//! assert_eq!(token.source, "0x1F");
//! assert_eq!(token.radix(), Radix::Hexadecimal);
//! assert_eq!(token.value.as_f64(), 31.0);
//!
//! assert_eq!(string::parse(r#""a\"b""#).as_deref(), Some("a\"b"));
//! assert_eq!(string::to_literal("it's", string::Quote::Single), r"'it\'s'");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comment;
pub mod detect;
pub mod error;
pub mod escape;
pub mod keyword;
pub mod lexer;
pub mod number;
pub mod regexp;
pub mod string;

// Re-exports for convenience
pub use comment::{CommentToken, CommentType};
pub use detect::{parse_all, parse_any, AnyToken};
pub use error::{LiteralError, Result};
pub use keyword::{KeywordToken, KeywordValue};
pub use lexer::{Boundary, LiteralKind, Span, Spanned, Token};
pub use number::{NumberOptions, NumberToken, NumberValue, Radix};
pub use regexp::{RegExpFlags, RegExpToken, RegExpValue};
pub use string::{Quote, StringToken};

/// Options shared by the kinds whose only knob is failure reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Report failures as [`LiteralError`] instead of `Ok(None)`.
    pub strict: bool,
}

impl ParseOptions {
    /// Options that report failures as errors.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_lenient() {
        assert!(!ParseOptions::default().strict);
        assert!(ParseOptions::strict().strict);
    }

    #[test]
    fn test_reexports_cover_every_kind() {
        assert!(number::parse_token("1").is_some());
        assert!(string::parse_token("'a'").is_some());
        assert!(keyword::parse_token("null").is_some());
        assert!(regexp::parse_token("/a/").is_some());
        assert!(comment::parse_token("// a").is_some());
    }
}
