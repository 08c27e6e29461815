//! Rendering of scanned tokens for the terminal and as JSON.

use owo_colors::OwoColorize;
use serde_json::{json, Value};
use verbatim_literals::{comment, AnyToken, KeywordValue, LiteralKind, NumberValue};

/// Colors `text` the way literals of `kind` are shown.
pub fn paint(kind: LiteralKind, text: &str) -> String {
    match kind {
        LiteralKind::String => text.green().to_string(),
        LiteralKind::Number => text.yellow().to_string(),
        LiteralKind::Keyword => text.blue().to_string(),
        LiteralKind::RegExp => text.red().to_string(),
        LiteralKind::Comment => text.dimmed().to_string(),
    }
}

/// The printed value of `token`, with comment markers removed if `strip`.
pub fn value_text(token: &AnyToken, strip: bool) -> String {
    match token {
        AnyToken::Comment(token) if strip => comment::strip(token),
        _ => token.value_text(),
    }
}

/// The kind-specific field of `token`, as a name and a printable value.
fn detail(token: &AnyToken) -> Option<(&'static str, Value)> {
    match token {
        AnyToken::Number(token) => Some(("radix", json!(token.radix().value()))),
        AnyToken::String(token) => Some(("quote", json!(token.quote().to_string()))),
        AnyToken::Comment(token) => Some(("type", json!(token.comment_type().as_str()))),
        AnyToken::RegExp(token) => Some(("flags", json!(token.value.flags().to_string()))),
        AnyToken::Keyword(_) => None,
    }
}

/// Multi-line, colored description of `token`.
pub fn describe(token: &AnyToken, strip: bool) -> String {
    let kind = token.kind();
    let mut out = format!(
        "{} {} {}",
        kind.as_str().bold(),
        paint(kind, token.source()),
        format!("[{}..{}]", token.offset(), token.offset() + token.length()).dimmed()
    );

    out.push_str(&format!("\n  {:8} {}", "value".dimmed(), value_text(token, strip)));
    if let Some((name, value)) = detail(token) {
        let value = match value {
            Value::String(text) => text,
            other => other.to_string(),
        };
        out.push_str(&format!("\n  {:8} {}", name.dimmed(), value));
    }
    out
}

/// JSON object describing `token`.
pub fn to_json(token: &AnyToken, strip: bool) -> Value {
    let mut object = json!({
        "kind": token.kind().as_str(),
        "source": token.source(),
        "offset": token.offset(),
        "length": token.length(),
        "value": value_json(token, strip),
    });
    if let Some((name, value)) = detail(token) {
        object[name] = value;
    }
    object
}

fn value_json(token: &AnyToken, strip: bool) -> Value {
    match token {
        AnyToken::Number(token) => match &token.value {
            NumberValue::Integer(n) => json!(n),
            NumberValue::Float(f) if f.is_finite() => json!(f),
            other => json!(other.to_string()),
        },
        AnyToken::Keyword(token) => match token.value {
            KeywordValue::True => json!(true),
            KeywordValue::False => json!(false),
            KeywordValue::Null => Value::Null,
            other => json!(other.as_str()),
        },
        AnyToken::RegExp(token) => json!(token.value.source()),
        _ => json!(value_text(token, strip)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verbatim_literals::parse_any;

    #[test]
    fn test_number_json() {
        let token = parse_any("  0x1F,").unwrap();
        let json = to_json(&token, false);
        assert_eq!(json["kind"], "number");
        assert_eq!(json["source"], "0x1F");
        assert_eq!(json["offset"], 2);
        assert_eq!(json["length"], 4);
        assert_eq!(json["value"], 31);
        assert_eq!(json["radix"], 16);
    }

    #[test]
    fn test_keyword_json() {
        assert_eq!(to_json(&parse_any("true").unwrap(), false)["value"], true);
        assert_eq!(to_json(&parse_any("null").unwrap(), false)["value"], Value::Null);
        assert_eq!(to_json(&parse_any("NaN").unwrap(), false)["value"], "NaN");
    }

    #[test]
    fn test_comment_json_strip() {
        let token = parse_any("/* a\n * b */").unwrap();
        assert_eq!(to_json(&token, true)["value"], "a b");
        assert_eq!(to_json(&token, false)["value"], "/* a\n * b */");
        assert_eq!(to_json(&token, false)["type"], "/*");
    }

    #[test]
    fn test_regexp_json() {
        let json = to_json(&parse_any("/a+/ig").unwrap(), false);
        assert_eq!(json["value"], "a+");
        assert_eq!(json["flags"], "gi");
    }

    #[test]
    fn test_describe_mentions_value() {
        let text = describe(&parse_any("'hi'").unwrap(), false);
        assert!(text.contains("hi"));
        assert!(text.contains("quote"));
    }
}
