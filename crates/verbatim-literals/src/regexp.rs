//! Regular expression literals: `/pattern/flags`.
//!
//! The pattern ends at the first `/` that is neither escaped nor inside a
//! `[...]` class, so `/[/]/` is one literal. The flag run that follows is
//! made of distinct letters from `gimsuy`; the first repeated or unknown
//! letter ends it and is left to the boundary check.
//!
//! Patterns are compiled with the `regex` crate. Constructs it does not
//! support (lookaround, backreferences) are reported as invalid patterns.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{settle, LiteralError, Result};
use crate::lexer::{char_offset, is_strict_boundary, Boundary, Cursor, LiteralKind, Token};
use crate::ParseOptions;

/// Characters that may follow a regular expression literal. `/` is left out
/// so that `/a//g` is not read as `/a/` followed by a division.
const REGEXP_BOUNDARY: &[char] = &[',', ';', ')', ']', '}', ':'];

bitflags::bitflags! {
    /// Flags of a regular expression literal, declared in canonical order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegExpFlags: u8 {
        /// `g`
        const GLOBAL      = 1 << 0;
        /// `i`
        const IGNORE_CASE = 1 << 1;
        /// `m`
        const MULTILINE   = 1 << 2;
        /// `s`
        const DOT_ALL     = 1 << 3;
        /// `u`
        const UNICODE     = 1 << 4;
        /// `y`
        const STICKY      = 1 << 5;
    }
}

const FLAG_LETTERS: [(RegExpFlags, char); 6] = [
    (RegExpFlags::GLOBAL, 'g'),
    (RegExpFlags::IGNORE_CASE, 'i'),
    (RegExpFlags::MULTILINE, 'm'),
    (RegExpFlags::DOT_ALL, 's'),
    (RegExpFlags::UNICODE, 'u'),
    (RegExpFlags::STICKY, 'y'),
];

impl RegExpFlags {
    /// The flag written as `ch`.
    pub fn from_char(ch: char) -> Option<Self> {
        FLAG_LETTERS
            .iter()
            .find(|(_, letter)| *letter == ch)
            .map(|(flag, _)| *flag)
    }

    /// Parses a flag string such as `"gi"`. Unknown or repeated letters
    /// give `None`.
    pub fn from_letters(letters: &str) -> Option<Self> {
        letters.chars().try_fold(Self::empty(), |flags, ch| {
            Self::from_char(ch).filter(|flag| !flags.contains(*flag)).map(|flag| flags | flag)
        })
    }
}

impl fmt::Display for RegExpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FLAG_LETTERS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .try_for_each(|(_, letter)| write!(f, "{letter}"))
    }
}

/// A compiled regular expression together with the text it was built from.
#[derive(Debug, Clone)]
pub struct RegExpValue {
    source: String,
    flags: RegExpFlags,
    regex: Regex,
}

impl RegExpValue {
    /// Builds a value from a pattern and flags.
    ///
    /// Unescaped `/` outside classes and raw line breaks are escaped in the
    /// stored source so it can be printed back between slashes. An empty
    /// pattern is stored as `(?:)`.
    pub fn new(pattern: &str, flags: RegExpFlags) -> Result<Self> {
        let source = normalize_source(pattern);
        let regex = compile(&source, flags)?;
        Ok(Self {
            source,
            flags,
            regex,
        })
    }

    /// The pattern text between the slashes.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags.
    pub fn flags(&self) -> RegExpFlags {
        self.flags
    }

    /// The compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns true if the expression matches somewhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl PartialEq for RegExpValue {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for RegExpValue {}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// A scanned regular expression literal.
pub type RegExpToken = Token<RegExpValue>;

/// Parses the regular expression literal at the head of `input`.
pub fn parse(input: &str) -> Option<RegExpValue> {
    parse_token(input).map(|token| token.value)
}

/// Parses the regular expression literal at the head of `input` into a token.
pub fn parse_token(input: &str) -> Option<RegExpToken> {
    parse_token_with(input, ParseOptions::default()).ok().flatten()
}

/// Parses the regular expression literal at the head of `input` with
/// explicit options.
pub fn parse_token_with(input: &str, options: ParseOptions) -> Result<Option<RegExpToken>> {
    let scanned = scan(input).and_then(|token| {
        if is_strict_boundary(input, &token, Boundary::Custom(REGEXP_BOUNDARY)) {
            Ok(token)
        } else {
            Err(LiteralError::BoundaryViolation {
                kind: LiteralKind::RegExp,
                offset: token.end(),
            })
        }
    });
    settle(scanned, options.strict)
}

/// Prints `value` as `/source/flags`.
pub fn to_literal(value: &RegExpValue) -> String {
    value.to_string()
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn scan(input: &str) -> Result<RegExpToken> {
    let mut cursor = Cursor::new(input);
    let start = cursor.skip_whitespace();
    let offset = char_offset(input, start);

    // `//` opens a comment and `/*` a block comment, never a pattern.
    if !cursor.eat('/') || matches!(cursor.peek(), Some('/' | '*')) {
        return Err(LiteralError::NoMatch {
            kind: LiteralKind::RegExp,
            offset,
        });
    }

    let unterminated = LiteralError::Unterminated {
        kind: LiteralKind::RegExp,
        offset,
    };
    let body_start = cursor.pos();
    let mut in_class = false;

    loop {
        match cursor.peek() {
            None => return Err(unterminated),
            Some(ch) if is_line_terminator(ch) => return Err(unterminated),
            Some('/') if !in_class => break,
            Some('\\') => {
                cursor.advance();
                match cursor.advance() {
                    Some(ch) if !is_line_terminator(ch) => {}
                    _ => return Err(unterminated),
                }
            }
            Some(ch) => {
                match ch {
                    '[' => in_class = true,
                    ']' => in_class = false,
                    _ => {}
                }
                cursor.advance();
            }
        }
    }

    let pattern = cursor.slice_from(body_start);
    cursor.advance();

    let mut flags = RegExpFlags::empty();
    while let Some(flag) = cursor.peek().and_then(RegExpFlags::from_char) {
        if flags.contains(flag) {
            break;
        }
        flags |= flag;
        cursor.advance();
    }

    let value = RegExpValue {
        source: pattern.to_string(),
        flags,
        regex: compile(pattern, flags)?,
    };
    Ok(Token::new(input, start, cursor.pos(), value, ()))
}

fn compile(source: &str, flags: RegExpFlags) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(flags.contains(RegExpFlags::IGNORE_CASE))
        .multi_line(flags.contains(RegExpFlags::MULTILINE))
        .dot_matches_new_line(flags.contains(RegExpFlags::DOT_ALL))
        .build()
        .map_err(|error| {
            tracing::debug!(pattern = source, %error, "regular expression does not compile");
            LiteralError::InvalidPattern {
                pattern: source.to_string(),
                message: error.to_string(),
            }
        })
}

fn normalize_source(pattern: &str) -> String {
    if pattern.is_empty() {
        return "(?:)".to_string();
    }

    let mut source = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                source.push('\\');
                match chars.next() {
                    Some(escaped) if is_line_terminator(escaped) => {
                        push_line_terminator(&mut source, escaped)
                    }
                    Some(escaped) => source.push(escaped),
                    None => source.push('\\'),
                }
            }
            '/' if !in_class => source.push_str("\\/"),
            '[' => {
                in_class = true;
                source.push(ch);
            }
            ']' => {
                in_class = false;
                source.push(ch);
            }
            _ if is_line_terminator(ch) => {
                source.push('\\');
                push_line_terminator(&mut source, ch);
            }
            _ => source.push(ch),
        }
    }

    source
}

/// Writes the escape letter(s) for a line terminator, after a backslash.
fn push_line_terminator(source: &mut String, ch: char) {
    match ch {
        '\n' => source.push('n'),
        '\r' => source.push('r'),
        '\u{2028}' => source.push_str("u2028"),
        _ => source.push_str("u2029"),
    }
}
