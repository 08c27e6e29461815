//! Subcommand implementations.

use std::fs;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::Value;
use verbatim_literals::{
    comment, keyword, number, parse_all, parse_any, regexp, string, AnyToken, CommentType,
    KeywordValue, LiteralKind, NumberOptions, ParseOptions, Quote, Radix, RegExpFlags,
    RegExpValue,
};

use crate::cli::{BatchArgs, DetectArgs, LiteralArgs, ScanArgs};
use crate::report;

/// Scans `args.input` for a literal of `kind` and prints it.
pub fn scan(kind: LiteralKind, args: &ScanArgs) -> Result<()> {
    let options = NumberOptions {
        strict: args.strict,
        allow_trailing: args.allow_trailing,
    };
    let token = scan_as(kind, &args.input, options)?;
    print_token(kind, token.as_ref(), args.json, args.strip);
    Ok(())
}

/// Scans `input` for a literal of `kind`. `allow_trailing` only affects
/// numbers.
pub fn scan_as(
    kind: LiteralKind,
    input: &str,
    options: NumberOptions,
) -> verbatim_literals::Result<Option<AnyToken>> {
    let strict = ParseOptions {
        strict: options.strict,
    };

    let token = match kind {
        LiteralKind::Number => number::parse_token_with(input, options)?.map(AnyToken::Number),
        LiteralKind::String => string::parse_token_with(input, strict)?.map(AnyToken::String),
        LiteralKind::Keyword => keyword::parse_token_with(input, strict)?.map(AnyToken::Keyword),
        LiteralKind::RegExp => regexp::parse_token_with(input, strict)?.map(AnyToken::RegExp),
        LiteralKind::Comment => comment::parse_token_with(input, strict)?.map(AnyToken::Comment),
    };
    Ok(token)
}

/// Runs the dispatcher on `args.input` and prints what it found.
pub fn detect(args: &DetectArgs) -> Result<()> {
    let token = parse_any(&args.input);
    match (&token, args.json) {
        (Some(token), _) => print_token(token.kind(), Some(token), args.json, false),
        (None, true) => println!("null"),
        (None, false) => println!("{}", "no literal found".dimmed()),
    }
    Ok(())
}

fn print_token(kind: LiteralKind, token: Option<&AnyToken>, json: bool, strip: bool) {
    match (token, json) {
        (Some(token), true) => println!("{}", report::to_json(token, strip)),
        (Some(token), false) => println!("{}", report::describe(token, strip)),
        (None, true) => println!("null"),
        (None, false) => println!("{}", format!("no {kind} literal").dimmed()),
    }
}

/// Prints `args.value` as a literal of `args.kind`.
pub fn literal(args: &LiteralArgs) -> Result<()> {
    println!("{}", render_literal(args)?);
    Ok(())
}

fn render_literal(args: &LiteralArgs) -> Result<String> {
    let value = args.value.as_str();

    let text = match args.kind {
        LiteralKind::Number => {
            let radix = Radix::from_value(args.radix)
                .with_context(|| format!("unsupported radix {}", args.radix))?;
            let number = number::parse(value, true)
                .with_context(|| format!("'{value}' is not a number"))?;
            number::to_literal(&number, radix)
        }
        LiteralKind::String => {
            let quote = Quote::from_char(args.quote)
                .with_context(|| format!("'{}' is not a quote character", args.quote))?;
            string::to_literal(value, quote)
        }
        LiteralKind::Keyword => {
            let keyword = KeywordValue::from_word(value)
                .with_context(|| format!("'{value}' is not a keyword"))?;
            keyword::to_literal(keyword)
        }
        LiteralKind::RegExp => {
            let flags = RegExpFlags::from_letters(&args.flags)
                .with_context(|| format!("invalid regular expression flags '{}'", args.flags))?;
            regexp::to_literal(&RegExpValue::new(value, flags)?)
        }
        LiteralKind::Comment => {
            let comment_type: CommentType =
                args.comment_type.parse().map_err(anyhow::Error::msg)?;
            comment::to_literal(value, comment_type, &args.indent)
        }
    };
    Ok(text)
}

/// Scans every line of `args.file` and prints one result per line.
pub fn batch(args: &BatchArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let lines: Vec<&str> = text.lines().collect();
    let tokens = parse_all(&lines);

    tracing::debug!(
        lines = lines.len(),
        found = tokens.iter().flatten().count(),
        "batch scanned"
    );

    if args.json {
        let results: Vec<Value> = tokens
            .iter()
            .map(|token| token.as_ref().map_or(Value::Null, |token| report::to_json(token, false)))
            .collect();
        println!("{}", Value::Array(results));
        return Ok(());
    }

    for (number, token) in tokens.iter().enumerate() {
        let line = format!("{:>4}", number + 1);
        match token {
            Some(token) => println!(
                "{} {:8} {}",
                line.dimmed(),
                token.kind().as_str(),
                report::paint(token.kind(), token.source())
            ),
            None => println!("{} {}", line.dimmed(), "-".dimmed()),
        }
    }
    Ok(())
}
