// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for literal scanning

use crate::lexer::LiteralKind;
use thiserror::Error;

/// Result type for literal scanning
pub type Result<T> = std::result::Result<T, LiteralError>;

/// Reasons a literal could not be read from the head of an input.
///
/// Offsets count characters, like [`Token::offset`](crate::Token).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The input does not start with a literal of this kind
    #[error("expected {kind} literal at offset {offset}")]
    NoMatch {
        /// Kind that was requested
        kind: LiteralKind,
        /// Position of the first significant character
        offset: usize,
    },

    /// A string, regexp or comment opens but never closes
    #[error("unterminated {kind} literal starting at offset {offset}")]
    Unterminated {
        /// Kind that was requested
        kind: LiteralKind,
        /// Position of the opening delimiter
        offset: usize,
    },

    /// A complete literal is followed by characters that cannot follow it
    #[error("unexpected input after {kind} literal at offset {offset}")]
    BoundaryViolation {
        /// Kind that was requested
        kind: LiteralKind,
        /// Position right after the literal
        offset: usize,
    },

    /// The literal needs a capability this build was compiled without
    #[error("{kind} literal needs unsupported feature: {feature}")]
    Unsupported {
        /// Kind that was requested
        kind: LiteralKind,
        /// Name of the missing capability
        feature: &'static str,
    },

    /// A regular expression body or flag set does not compile
    #[error("invalid regular expression /{pattern}/: {message}")]
    InvalidPattern {
        /// The pattern body
        pattern: String,
        /// Compiler message
        message: String,
    },
}

impl LiteralError {
    /// The literal kind the failed scan was looking for.
    pub fn kind(&self) -> LiteralKind {
        match self {
            LiteralError::NoMatch { kind, .. }
            | LiteralError::Unterminated { kind, .. }
            | LiteralError::BoundaryViolation { kind, .. }
            | LiteralError::Unsupported { kind, .. } => *kind,
            LiteralError::InvalidPattern { .. } => LiteralKind::RegExp,
        }
    }
}

/// Turns a scan result into the facade shape: `Ok(None)` on failure unless
/// `strict` asks for the error itself.
pub(crate) fn settle<T>(scanned: Result<T>, strict: bool) -> Result<Option<T>> {
    match scanned {
        Ok(token) => Ok(Some(token)),
        Err(error) => {
            tracing::trace!(%error, strict, "literal rejected");
            if strict { Err(error) } else { Ok(None) }
        }
    }
}
