//! String literals in single, double or back quotes.
//!
//! The opening quote fixes the delimiter; the other two quote characters are
//! ordinary content. Single and double quoted strings may only span lines
//! through an escaped line break, back-quoted strings keep raw line breaks.

use std::fmt;

use crate::error::{settle, LiteralError, Result};
use crate::escape::{escape, unescape};
use crate::lexer::{char_offset, is_strict_boundary, Boundary, Cursor, LiteralKind, Token};
use crate::ParseOptions;

/// The delimiter of a string literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `'...'`
    Single,
    /// `"..."`
    #[default]
    Double,
    /// `` `...` ``
    Backtick,
}

impl Quote {
    /// The quote character.
    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
            Quote::Backtick => '`',
        }
    }

    /// Looks up the quote written as `ch`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            '`' => Some(Quote::Backtick),
            _ => None,
        }
    }

    /// Characters that can appear unescaped between these quotes.
    fn excluded(self) -> &'static [char] {
        match self {
            Quote::Single => &['"', '`'],
            Quote::Double => &['\'', '`'],
            Quote::Backtick => &['\'', '"', '\n'],
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A scanned string literal.
pub type StringToken = Token<String, Quote>;

impl Token<String, Quote> {
    /// The quote the literal is delimited by.
    pub fn quote(&self) -> Quote {
        self.detail
    }
}

/// Parses the string literal at the head of `input` and returns its value.
pub fn parse(input: &str) -> Option<String> {
    parse_token(input).map(|token| token.value)
}

/// Parses the string literal at the head of `input` into a token.
pub fn parse_token(input: &str) -> Option<StringToken> {
    parse_token_with(input, ParseOptions::default()).ok().flatten()
}

/// Parses the string literal at the head of `input` with explicit options.
pub fn parse_token_with(input: &str, options: ParseOptions) -> Result<Option<StringToken>> {
    let scanned = scan(input).and_then(|token| {
        if is_strict_boundary(input, &token, Boundary::Expression) {
            Ok(token)
        } else {
            Err(LiteralError::BoundaryViolation {
                kind: LiteralKind::String,
                offset: token.end(),
            })
        }
    });
    settle(scanned, options.strict)
}

/// Prints `text` as a literal delimited by `quote`.
pub fn to_literal(text: &str, quote: Quote) -> String {
    let delimiter = quote.as_char();
    format!("{delimiter}{}{delimiter}", escape(text, quote.excluded()))
}

/// Escapes that keep their backslash on the way into `unescape`.
fn is_recognized_escape(ch: char) -> bool {
    matches!(ch, '\\' | '\'' | '"' | '`' | 'b' | 'f' | 'n' | 'r' | 't' | 'u' | 'x')
}

fn scan(input: &str) -> Result<StringToken> {
    let mut cursor = Cursor::new(input);
    let start = cursor.skip_whitespace();
    let offset = char_offset(input, start);

    let quote = cursor
        .peek()
        .and_then(Quote::from_char)
        .ok_or(LiteralError::NoMatch {
            kind: LiteralKind::String,
            offset,
        })?;
    cursor.advance();

    let unterminated = LiteralError::Unterminated {
        kind: LiteralKind::String,
        offset,
    };
    let mut body = String::new();

    loop {
        match cursor.advance() {
            None => return Err(unterminated),
            Some('\\') => match cursor.advance() {
                None => return Err(unterminated),
                Some('\n') => {}
                Some('\r') => {
                    cursor.eat('\n');
                }
                Some(ch) if is_recognized_escape(ch) => {
                    body.push('\\');
                    body.push(ch);
                }
                Some(ch) => body.push(ch),
            },
            Some(ch) if ch == quote.as_char() => break,
            Some('\n' | '\r') if quote != Quote::Backtick => return Err(unterminated),
            Some(ch) => body.push(ch),
        }
    }

    Ok(Token::new(input, start, cursor.pos(), unescape(&body), quote))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes() {
        assert_eq!(parse("'a'").as_deref(), Some("a"));
        assert_eq!(parse("\"a\"").as_deref(), Some("a"));
        assert_eq!(parse("`a`").as_deref(), Some("a"));
        assert_eq!(parse("'say \"hi\" `now`'").as_deref(), Some("say \"hi\" `now`"));
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(parse(r#""a\"b""#).as_deref(), Some("a\"b"));
        assert_eq!(parse(r"'it\'s'").as_deref(), Some("it's"));
        assert_eq!(parse(r"'a\\'").as_deref(), Some("a\\"));
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(parse(r#""a\nb\tc""#).as_deref(), Some("a\nb\tc"));
        assert_eq!(parse(r#""\x41B\u{43}""#).as_deref(), Some("ABC"));
        assert_eq!(parse(r#""\d\w""#).as_deref(), Some("dw"));
    }

    #[test]
    fn test_line_continuation() {
        let token = parse_token("'a\\\nb'").unwrap();
        assert_eq!(token.value, "ab");
        assert_eq!(token.source, "'a\\\nb'");
        assert_eq!(token.length, 6);
        assert_eq!(parse("\"a\\\r\nb\"").as_deref(), Some("ab"));
    }

    #[test]
    fn test_raw_newline() {
        assert_eq!(parse("`a\nb`").as_deref(), Some("a\nb"));
        assert!(parse("'a\nb'").is_none());
        assert!(parse("\"a\nb\"").is_none());
    }

    #[test]
    fn test_unterminated() {
        assert!(parse("'unterminated").is_none());
        assert!(parse("'ends with escape\\").is_none());
        assert!(matches!(
            parse_token_with("  'open", ParseOptions::strict()),
            Err(LiteralError::Unterminated { offset: 2, .. })
        ));
    }

    #[test]
    fn test_not_a_string() {
        assert!(parse("abc").is_none());
        assert!(parse("").is_none());
        assert!(matches!(
            parse_token_with("abc", ParseOptions::strict()),
            Err(LiteralError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_boundary() {
        assert_eq!(parse("'a', 1").as_deref(), Some("a"));
        assert_eq!(parse("'a' : 1").as_deref(), Some("a"));
        assert!(parse("'a'b").is_none());
        assert!(matches!(
            parse_token_with("'a'b", ParseOptions::strict()),
            Err(LiteralError::BoundaryViolation { offset: 3, .. })
        ));
    }

    #[test]
    fn test_token_shape() {
        let token = parse_token("   \"héllo\";").unwrap();
        assert_eq!(token.offset, 3);
        assert_eq!(token.length, 7);
        assert_eq!(token.source, "\"héllo\"");
        assert_eq!(token.quote(), Quote::Double);
        assert_eq!(&"   \"héllo\";"[token.span.start..token.span.end], token.source);
    }

    #[test]
    fn test_to_literal() {
        assert_eq!(to_literal("it's", Quote::Single), r"'it\'s'");
        assert_eq!(to_literal("say \"hi\"", Quote::Single), "'say \"hi\"'");
        assert_eq!(to_literal("it's", Quote::default()), "\"it's\"");
        assert_eq!(to_literal("a\nb", Quote::Backtick), "`a\nb`");
        assert_eq!(to_literal("a\nb", Quote::Double), r#""a\nb""#);
    }

    #[test]
    fn test_round_trip() {
        let texts = ["plain", "it's \"quoted\" `ticked`", "tab\tnew\nline", "back\\slash", ""];
        for text in texts {
            for quote in [Quote::Single, Quote::Double, Quote::Backtick] {
                let literal = to_literal(text, quote);
                assert_eq!(parse(&literal).as_deref(), Some(text), "{literal}");
            }
        }
    }
}
