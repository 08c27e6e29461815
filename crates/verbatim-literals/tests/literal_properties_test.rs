//! Cross-kind properties of the literal scanners
//!
//! Every kind shares the same token shape and failure policy; these tests
//! check those guarantees from the outside.

use verbatim_literals::{
    comment, keyword, number, parse_any, regexp, string, AnyToken, CommentType, KeywordValue,
    LiteralError, LiteralKind, NumberOptions, NumberValue, ParseOptions, Quote, Radix,
    RegExpFlags, RegExpValue, Spanned,
};

/// One valid literal of each kind.
const SAMPLES: &[&str] = &[
    "01234567",
    "-0x1F",
    "3.5e2",
    "'single'",
    "\"double\"",
    "`back`",
    "true",
    "Infinity",
    "/[a-z]+/gi",
    "// line",
    "/* block */",
    "/** doc */",
];

#[test]
fn test_offset_and_length_are_exact() {
    for sample in SAMPLES {
        for padding in ["", " ", "\t\t", "\n  \r\n", "\u{3000}"] {
            let input = format!("{padding}{sample}");
            let token = parse_any(&input).unwrap_or_else(|| panic!("no token in {input:?}"));

            assert_eq!(token.offset(), padding.chars().count(), "{input:?}");
            assert_eq!(token.length(), sample.chars().count(), "{input:?}");
            assert_eq!(token.source(), *sample);

            let by_chars: String = input
                .chars()
                .skip(token.offset())
                .take(token.length())
                .collect();
            assert_eq!(by_chars, *sample);

            let span = token.span();
            assert_eq!(&input[span.start..span.end], *sample);
        }
    }
}

#[test]
fn test_source_has_no_leading_whitespace() {
    for sample in SAMPLES {
        let input = format!("   {sample}");
        let token = parse_any(&input).unwrap();
        assert!(!token.source().starts_with(char::is_whitespace));
    }
}

#[test]
fn test_number_boundary_enforcement() {
    assert_eq!(number::parse("123abc", true), None);
    assert_eq!(number::parse("123abc", false), Some(NumberValue::Integer(123)));
    assert_eq!(number::parse("123,", true), Some(NumberValue::Integer(123)));
    assert_eq!(number::parse("123,", false), Some(NumberValue::Integer(123)));
}

#[test]
fn test_radix_detection() {
    let cases = [
        ("01234567", 342391.0, Radix::Octal),
        ("0x1F", 31.0, Radix::Hexadecimal),
        ("1e3", 1000.0, Radix::Decimal),
        ("0b101", 5.0, Radix::Binary),
    ];
    for (input, value, radix) in cases {
        let token = number::parse_token(input).unwrap();
        assert_eq!(token.value.as_f64(), value, "{input}");
        assert_eq!(token.radix(), radix, "{input}");
    }
}

#[test]
fn test_string_escapes() {
    assert_eq!(string::parse(r#""a\"b""#).as_deref(), Some("a\"b"));
    assert_eq!(string::parse("`one\ntwo`").as_deref(), Some("one\ntwo"));
    assert_eq!(string::parse("'one\\\ntwo'").as_deref(), Some("onetwo"));
}

#[test]
fn test_comment_stripping() {
    assert_eq!(comment::parse("/* a\n * b */", true).as_deref(), Some("a b"));
    assert_eq!(comment::parse("// a", true).as_deref(), Some("a"));
}

#[test]
fn test_rejections() {
    assert_eq!(regexp::parse("//[a-z]/i"), None);
    assert_eq!(string::parse("'unterminated"), None);
    assert_eq!(number::parse("0x1G", true), None);
    assert_eq!(number::parse("0x1G", false), Some(NumberValue::Integer(1)));
}

#[test]
fn test_strict_flag_selects_error_branch() {
    let lenient = ParseOptions::default();
    let strict = ParseOptions::strict();

    assert_eq!(string::parse_token_with("'open", lenient), Ok(None));
    assert!(matches!(
        string::parse_token_with("'open", strict),
        Err(LiteralError::Unterminated { kind: LiteralKind::String, .. })
    ));

    assert_eq!(keyword::parse_token_with("truex", lenient), Ok(None));
    assert!(matches!(
        keyword::parse_token_with("true x", strict),
        Err(LiteralError::BoundaryViolation { kind: LiteralKind::Keyword, .. })
    ));

    assert_eq!(regexp::parse_token_with("/(/", lenient), Ok(None));
    assert!(matches!(
        regexp::parse_token_with("/(/", strict),
        Err(LiteralError::InvalidPattern { .. })
    ));

    assert_eq!(comment::parse_token_with("/* open", lenient), Ok(None));
    assert!(matches!(
        number::parse_token_with("abc", NumberOptions::strict()),
        Err(LiteralError::NoMatch { kind: LiteralKind::Number, offset: 0 })
    ));
}

#[test]
fn test_number_round_trip() {
    let values = [
        NumberValue::Integer(342391),
        NumberValue::Integer(-31),
        NumberValue::Float(0.125),
        NumberValue::Float(1e-7),
    ];
    for value in &values {
        for radix in [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
            let literal = number::to_literal(value, radix);
            assert_eq!(number::parse(&literal, true).as_ref(), Some(value), "{literal}");
        }
    }
}

#[test]
fn test_string_round_trip() {
    let text = "mixed 'single' \"double\" `back` \\ and\ttabs";
    for quote in [Quote::Single, Quote::Double, Quote::Backtick] {
        let literal = string::to_literal(text, quote);
        assert_eq!(string::parse(&literal).as_deref(), Some(text), "{literal}");
    }
}

#[test]
fn test_keyword_round_trip() {
    for keyword in KeywordValue::ALL {
        assert_eq!(keyword::parse(&keyword::to_literal(keyword)), Some(keyword));
    }
}

#[test]
fn test_regexp_round_trip() {
    let value = RegExpValue::new("a/b[/]c", RegExpFlags::GLOBAL | RegExpFlags::MULTILINE).unwrap();
    let literal = regexp::to_literal(&value);
    assert_eq!(literal, r"/a\/b[/]c/gm");
    assert_eq!(regexp::parse(&literal), Some(value));
}

#[test]
fn test_comment_round_trip() {
    for comment_type in [CommentType::Line, CommentType::Block, CommentType::Doc] {
        let literal = comment::to_literal("single line of text", comment_type, "");
        assert_eq!(
            comment::parse(&literal, true).as_deref(),
            Some("single line of text")
        );
    }
}

#[test]
fn test_to_literal_is_idempotent() {
    let literal = string::to_literal("it's", Quote::Double);
    let token = string::parse_token(&literal).unwrap();
    assert_eq!(string::to_literal(&token.value, token.quote()), literal);

    let literal = number::to_literal(&NumberValue::Integer(255), Radix::Hexadecimal);
    let token = number::parse_token(&literal).unwrap();
    assert_eq!(number::to_literal(&token.value, token.radix()), literal);

    let literal = comment::to_literal("a\nb", CommentType::Block, "");
    let token = comment::parse_token(&literal).unwrap();
    assert_eq!(
        comment::to_literal(&comment::strip(&token), token.comment_type(), ""),
        "/* a b */"
    );
}

#[test]
fn test_detected_kinds() {
    let kinds: Vec<_> = SAMPLES
        .iter()
        .map(|sample| parse_any(sample).map(|token| token.kind()))
        .collect();
    assert!(kinds.iter().all(Option::is_some));
    assert!(matches!(parse_any("Infinity"), Some(AnyToken::Keyword(_))));
    assert!(matches!(parse_any("-0x1F"), Some(AnyToken::Number(_))));
}
