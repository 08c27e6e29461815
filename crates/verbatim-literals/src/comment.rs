//! Comment literals: `// line`, `/* block */` and `/** doc */`.
//!
//! Comments are not checked against a boundary; whatever follows the
//! closing `*/` or the end of a line comment is left to the caller.

use std::fmt;
use std::str::FromStr;

use crate::error::{settle, LiteralError, Result};
use crate::lexer::{char_offset, Cursor, LiteralKind, Token};
use crate::ParseOptions;

/// The form of a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommentType {
    /// `// ...`
    #[default]
    Line,
    /// `/* ... */`
    Block,
    /// `/** ... */`
    Doc,
}

impl CommentType {
    /// The opening marker.
    pub fn as_str(self) -> &'static str {
        match self {
            CommentType::Line => "//",
            CommentType::Block => "/*",
            CommentType::Doc => "/**",
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "//" | "line" => Ok(CommentType::Line),
            "/*" | "block" => Ok(CommentType::Block),
            "/**" | "doc" => Ok(CommentType::Doc),
            other => Err(format!("unknown comment type: {other}")),
        }
    }
}

/// A scanned comment. The value is the verbatim comment text.
pub type CommentToken = Token<String, CommentType>;

impl Token<String, CommentType> {
    /// The form of the comment.
    pub fn comment_type(&self) -> CommentType {
        self.detail
    }
}

/// Parses the comment at the head of `input`.
///
/// With `strip` the markers and margins are removed, see [`strip`].
pub fn parse(input: &str, strip_markers: bool) -> Option<String> {
    let token = parse_token(input)?;
    Some(if strip_markers { strip(&token) } else { token.value })
}

/// Parses the comment at the head of `input` into a token.
pub fn parse_token(input: &str) -> Option<CommentToken> {
    parse_token_with(input, ParseOptions::default()).ok().flatten()
}

/// Parses the comment at the head of `input` with explicit options.
pub fn parse_token_with(input: &str, options: ParseOptions) -> Result<Option<CommentToken>> {
    settle(scan(input), options.strict)
}

/// The text of a comment without its markers.
///
/// Line comments lose `//` and surrounding whitespace. Block comments lose
/// their delimiters and the leading `*` margin of every line; lines of a
/// paragraph are joined with a space and paragraphs (separated by blank
/// lines) with a single `\n`.
///
/// `*\/` is read back as `*/`, undoing the escape [`to_literal`] writes.
/// A comment whose author wrote `*\/` literally loses the backslash.
pub fn strip(token: &CommentToken) -> String {
    let source = token.source.as_str();
    match token.comment_type() {
        CommentType::Line => source.trim_start_matches('/').trim().to_string(),
        CommentType::Block | CommentType::Doc => {
            let opener = token.comment_type().as_str();
            let inner = source
                .strip_prefix(opener)
                .and_then(|rest| rest.strip_suffix("*/"))
                .unwrap_or_default();
            join_paragraphs(inner).replace("*\\/", "*/")
        }
    }
}

/// Drops one leading `*` when it is a margin, i.e. followed by whitespace
/// or nothing.
fn strip_margin(line: &str) -> &str {
    let line = line.trim_start();
    match line.strip_prefix('*') {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        _ => line,
    }
}

fn join_paragraphs(inner: &str) -> String {
    let mut paragraphs: Vec<Vec<&str>> = vec![Vec::new()];

    for line in inner.lines() {
        let line = strip_margin(line).trim();
        if line.is_empty() {
            if paragraphs.last().is_some_and(|paragraph| !paragraph.is_empty()) {
                paragraphs.push(Vec::new());
            }
        } else if let Some(paragraph) = paragraphs.last_mut() {
            paragraph.push(line);
        }
    }

    paragraphs
        .iter()
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| paragraph.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps `text` into a comment of the given type.
///
/// Every line is trimmed and `indent` is written before each line after the
/// first, so the result can be placed at that indentation in a file.
pub fn to_literal(text: &str, comment_type: CommentType, indent: &str) -> String {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    if lines.is_empty() {
        lines.push("");
    }

    match comment_type {
        CommentType::Line => lines
            .iter()
            .map(|line| prefixed("//", line))
            .collect::<Vec<_>>()
            .join(&format!("\n{indent}")),
        CommentType::Block | CommentType::Doc => {
            let opener = comment_type.as_str();
            let lines: Vec<String> = lines.iter().map(|line| line.replace("*/", "*\\/")).collect();

            if let [line] = lines.as_slice() {
                return format!("{} */", prefixed(opener, line));
            }

            let mut out = String::from(opener);
            for line in &lines {
                out.push('\n');
                out.push_str(indent);
                out.push_str(&prefixed(" *", line));
            }
            out.push('\n');
            out.push_str(indent);
            out.push_str(" */");
            out
        }
    }
}

fn prefixed(marker: &str, line: &str) -> String {
    if line.is_empty() {
        marker.to_string()
    } else {
        format!("{marker} {line}")
    }
}

fn scan(input: &str) -> Result<CommentToken> {
    let mut cursor = Cursor::new(input);
    let start = cursor.skip_whitespace();
    let offset = char_offset(input, start);

    let comment_type = if cursor.eat_str("//") {
        while cursor.peek().is_some_and(|ch| ch != '\n' && ch != '\r') {
            cursor.advance();
        }
        while matches!(cursor.peek(), Some('\n' | '\r')) {
            cursor.advance();
        }
        CommentType::Line
    } else if cursor.eat_str("/*") {
        while !cursor.eat_str("*/") {
            if cursor.advance().is_none() {
                return Err(LiteralError::Unterminated {
                    kind: LiteralKind::Comment,
                    offset,
                });
            }
        }
        let source = cursor.slice_from(start);
        if source.starts_with("/**") && source != "/**/" {
            CommentType::Doc
        } else {
            CommentType::Block
        }
    } else {
        return Err(LiteralError::NoMatch {
            kind: LiteralKind::Comment,
            offset,
        });
    };

    let source = cursor.slice_from(start).to_string();
    Ok(Token::new(input, start, cursor.pos(), source, comment_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbatim() {
        assert_eq!(
            parse("// this is a inline comment", false).as_deref(),
            Some("// this is a inline comment")
        );
        assert_eq!(
            parse("/* this is a\n multi-line comment */", false).as_deref(),
            Some("/* this is a\n multi-line comment */")
        );
        assert_eq!(
            parse("   /* this is a\n multi-line comment */abc", false).as_deref(),
            Some("/* this is a\n multi-line comment */")
        );
    }

    #[test]
    fn test_line_comment_absorbs_line_breaks() {
        let token = parse_token("// a\n\n\nlet x;").unwrap();
        assert_eq!(token.source, "// a\n\n\n");
        assert_eq!(token.comment_type(), CommentType::Line);
    }

    #[test]
    fn test_strip() {
        let cases = [
            ("// this is a inline comment", "this is a inline comment"),
            ("/* this is a inline comment */", "this is a inline comment"),
            ("/* this is a\n multi-line comment */", "this is a multi-line comment"),
            ("/* this is a\n * multi-line comment */", "this is a multi-line comment"),
            ("/* this is a\n\n * multi-line comment */", "this is a\nmulti-line comment"),
            ("/* this is a\n\n\n * multi-line comment */", "this is a\nmulti-line comment"),
            ("/**\n * doc\n */", "doc"),
            ("/**/", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input, true).as_deref(), Some(expected), "{input:?}");
        }
    }

    #[test]
    fn test_strip_keeps_content_asterisks() {
        assert_eq!(parse("/* **bold** */", true).as_deref(), Some("**bold**"));
        assert_eq!(parse("/*\n * * item\n */", true).as_deref(), Some("* item"));
        assert_eq!(parse("/*\n *\n * a\n */", true).as_deref(), Some("a"));
        assert_eq!(parse("/*\n *a\n */", true).as_deref(), Some("*a"));
    }

    #[test]
    fn test_strip_reads_escaped_close() {
        // indistinguishable from an escape written by to_literal
        assert_eq!(parse(r"/* /a*\/b/ */", true).as_deref(), Some("/a*/b/"));
        assert_eq!(parse(r"// a *\/ b", true).as_deref(), Some(r"a *\/ b"));
    }

    #[test]
    fn test_types() {
        assert_eq!(parse_token("// a").unwrap().comment_type(), CommentType::Line);
        assert_eq!(parse_token("/* a */").unwrap().comment_type(), CommentType::Block);
        assert_eq!(parse_token("/** a */").unwrap().comment_type(), CommentType::Doc);
        assert_eq!(parse_token("/**/").unwrap().comment_type(), CommentType::Block);
    }

    #[test]
    fn test_token_shape() {
        let input = "   /** this is a inline comment */";
        let token = parse_token(input).unwrap();
        assert_eq!(token.source, &input[3..]);
        assert_eq!(token.value, token.source);
        assert_eq!(token.offset, 3);
        assert_eq!(token.length, input.len() - 3);
    }

    #[test]
    fn test_first_close_wins() {
        let token = parse_token("/* a */ b */").unwrap();
        assert_eq!(token.source, "/* a */");
    }

    #[test]
    fn test_rejections() {
        assert!(parse("/* open", false).is_none());
        assert!(parse("/*/", false).is_none());
        assert!(parse("/ not a comment", false).is_none());
        assert!(matches!(
            parse_token_with(" /* open", ParseOptions::strict()),
            Err(LiteralError::Unterminated { offset: 1, .. })
        ));
        assert!(matches!(
            parse_token_with("x", ParseOptions::strict()),
            Err(LiteralError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_to_literal_single_line() {
        let text = "this is a inline comment";
        assert_eq!(to_literal(text, CommentType::Line, ""), "// this is a inline comment");
        assert_eq!(to_literal(text, CommentType::Block, ""), "/* this is a inline comment */");
        assert_eq!(to_literal("doc", CommentType::Doc, ""), "/** doc */");
    }

    #[test]
    fn test_to_literal_multi_line() {
        let text = "this is a\n multi-line comment";
        assert_eq!(to_literal(text, CommentType::Line, ""), "// this is a\n// multi-line comment");
        assert_eq!(
            to_literal(text, CommentType::Block, ""),
            "/*\n * this is a\n * multi-line comment\n */"
        );
        assert_eq!(
            to_literal(text, CommentType::Doc, ""),
            "/**\n * this is a\n * multi-line comment\n */"
        );
    }

    #[test]
    fn test_to_literal_indented() {
        let text = "this is a\n multi-line comment";
        assert_eq!(
            to_literal(text, CommentType::Line, "    "),
            "// this is a\n    // multi-line comment"
        );
        assert_eq!(
            to_literal(text, CommentType::Block, "    "),
            "/*\n     * this is a\n     * multi-line comment\n     */"
        );
    }

    #[test]
    fn test_to_literal_escapes_close() {
        let literal = to_literal("a */ b", CommentType::Block, "");
        assert_eq!(literal, "/* a *\\/ b */");
        assert_eq!(parse(&literal, true).as_deref(), Some("a */ b"));
    }

    #[test]
    fn test_round_trip() {
        for comment_type in [CommentType::Line, CommentType::Block, CommentType::Doc] {
            let literal = to_literal("hello world", comment_type, "");
            assert_eq!(parse(&literal, true).as_deref(), Some("hello world"));
            let token = parse_token(&literal).unwrap();
            assert_eq!(token.comment_type(), comment_type);
            assert_eq!(to_literal(&strip(&token), comment_type, ""), literal);
        }
    }
}
