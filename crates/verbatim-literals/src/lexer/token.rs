//! Token definitions shared by every literal kind.

use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The literal kinds this crate scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Quoted string literal
    String,
    /// Numeric literal
    Number,
    /// `true`, `false`, `null`, `NaN` or `Infinity`
    Keyword,
    /// Regular expression literal
    RegExp,
    /// Line or block comment
    Comment,
}

impl LiteralKind {
    /// All kinds, in the order the dispatcher tries them.
    pub const ALL: [LiteralKind; 5] = [
        LiteralKind::Comment,
        LiteralKind::RegExp,
        LiteralKind::String,
        LiteralKind::Keyword,
        LiteralKind::Number,
    ];

    /// Lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            LiteralKind::String => "string",
            LiteralKind::Number => "number",
            LiteralKind::Keyword => "keyword",
            LiteralKind::RegExp => "regexp",
            LiteralKind::Comment => "comment",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LiteralKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "string" | "str" => Ok(LiteralKind::String),
            "number" | "num" => Ok(LiteralKind::Number),
            "keyword" | "kw" => Ok(LiteralKind::Keyword),
            "regexp" | "regex" | "re" => Ok(LiteralKind::RegExp),
            "comment" => Ok(LiteralKind::Comment),
            _ => Err(format!("unknown literal kind '{s}'")),
        }
    }
}

/// Anything that occupies a range of the scanned input.
pub trait Spanned {
    /// Byte range of the literal in the original input.
    fn span(&self) -> Span;
}

/// A scanned literal.
///
/// `V` is the decoded value and `D` the kind-specific detail (radix, quote
/// character, comment type). `offset` and `length` count characters, `span`
/// counts bytes; both describe the same range of the original input.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<V, D = ()> {
    /// The literal text, without leading whitespace
    pub source: String,
    /// Character index where `source` starts in the input
    pub offset: usize,
    /// Character length of `source`
    pub length: usize,
    /// Byte range of `source` in the input
    pub span: Span,
    /// The decoded value
    pub value: V,
    /// Kind-specific detail
    pub detail: D,
}

impl<V, D> Token<V, D> {
    /// Creates a token covering `input[start..end]`.
    pub(crate) fn new(input: &str, start: usize, end: usize, value: V, detail: D) -> Self {
        let source = &input[start..end];
        Self {
            source: source.to_string(),
            offset: input[..start].chars().count(),
            length: source.chars().count(),
            span: Span::new(start, end),
            value,
            detail,
        }
    }

    /// Character index one past the end of the literal.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Replaces the value, keeping position and detail.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Token<U, D> {
        Token {
            source: self.source,
            offset: self.offset,
            length: self.length,
            span: self.span,
            value: f(self.value),
            detail: self.detail,
        }
    }
}

impl<V, D> Spanned for Token<V, D> {
    fn span(&self) -> Span {
        self.span
    }
}

/// Character offset of byte position `pos` in `input`.
pub(crate) fn char_offset(input: &str, pos: usize) -> usize {
    input[..pos].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(2, 7);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_token_offsets_count_characters() {
        let input = "ü  'é'";
        let start = input.find('\'').unwrap();
        let token = Token::new(input, start, input.len(), (), ());
        assert_eq!(token.offset, 3);
        assert_eq!(token.length, 3);
        assert_eq!(token.span, Span::new(4, 8));
        assert_eq!(token.end(), 6);
        assert_eq!(&input[token.span.start..token.span.end], token.source);
    }

    #[test]
    fn test_token_map_keeps_position() {
        let token = Token::new("  42", 2, 4, "42", 10u32);
        let mapped = token.map(|v| v.len());
        assert_eq!(mapped.value, 2);
        assert_eq!(mapped.offset, 2);
        assert_eq!(mapped.detail, 10);
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in LiteralKind::ALL {
            assert_eq!(kind.as_str().parse::<LiteralKind>(), Ok(kind));
        }
        assert!("float".parse::<LiteralKind>().is_err());
    }

    #[test]
    fn test_char_offset() {
        assert_eq!(char_offset("ab€c", 5), 3);
        assert_eq!(char_offset("abc", 0), 0);
    }
}
