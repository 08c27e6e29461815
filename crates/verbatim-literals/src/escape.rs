//! Escaping and unescaping of string literal bodies.
//!
//! ## Escape Sequences
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\n` `\r` `\t` | Newline, carriage return, tab |
//! | `\b` `\f` `\v` | Backspace, form feed, vertical tab |
//! | `\\` `\'` `\"` `` \` `` | The character itself |
//! | `\0` | Null |
//! | `\xNN` | Hex escape |
//! | `\uNNNN` | Unicode escape (surrogate pairs are combined) |
//! | `\u{N...}` | Code point escape |
//!
//! Any other escaped character stands for itself, and an escaped line break
//! is a line continuation that produces nothing.

use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Escapes `text` for use between quotes. Characters in `excluded` are
/// written as-is even if they would normally be escaped.
pub fn escape(text: &str, excluded: &[char]) -> String {
    let mut out = String::with_capacity(text.len() + 2);

    for ch in text.chars() {
        if excluded.contains(&ch) {
            out.push(ch);
            continue;
        }

        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '`' => out.push_str("\\`"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            _ if ch.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", ch as u32);
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Decodes the escape sequences in `text`.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };

        match escaped {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => match read_hex(&mut chars, 2) {
                Some(code) => out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)),
                None => out.push('x'),
            },
            'u' => match read_unicode(&mut chars) {
                Some(decoded) => out.push(decoded),
                None => out.push('u'),
            },
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }

    out
}

/// Reads exactly `count` hex digits, leaving `chars` untouched on failure.
fn read_hex(chars: &mut Peekable<Chars<'_>>, count: usize) -> Option<u32> {
    let mut probe = chars.clone();
    let mut value = 0u32;
    for _ in 0..count {
        value = value * 16 + probe.next()?.to_digit(16)?;
    }
    *chars = probe;
    Some(value)
}

/// Reads the part of a `\u` escape after the `u`.
fn read_unicode(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    if chars.peek() == Some(&'{') {
        let mut probe = chars.clone();
        probe.next();
        let mut value = 0u32;
        let mut digits = 0;
        loop {
            let ch = probe.next()?;
            if ch == '}' {
                break;
            }
            value = value * 16 + ch.to_digit(16)?;
            digits += 1;
            if value > 0x10FFFF {
                return None;
            }
        }
        if digits == 0 {
            return None;
        }
        *chars = probe;
        return Some(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    let high = read_hex(chars, 4)?;
    if !(0xD800..=0xDBFF).contains(&high) {
        return Some(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    // A high surrogate only means something together with a low one.
    let mut probe = chars.clone();
    if probe.next() == Some('\\') && probe.next() == Some('u') {
        if let Some(low) = read_hex(&mut probe, 4).filter(|low| (0xDC00..=0xDFFF).contains(low)) {
            *chars = probe;
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(code);
        }
    }
    Some(char::REPLACEMENT_CHARACTER)
}
