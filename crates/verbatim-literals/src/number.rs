//! Number literals.
//!
//! ## Forms
//!
//! ```text
//! 42          -> Integer, radix 10
//! -3.14       -> Float, radix 10
//! .5  1.      -> Float, radix 10
//! 1e10 1E-3   -> Float, radix 10
//! 0x1F        -> Integer, radix 16
//! 0o17  0b101 -> Integer, radix 8 / 2
//! 01234567    -> Integer, radix 8 (legacy octal)
//! 0123456789  -> Integer, radix 10 (8 and 9 are not octal digits)
//! 42n  0xFFn  -> BigInt (needs the `bigint` feature)
//! NaN Infinity -Infinity
//! ```
//!
//! A legacy octal guess is dropped as soon as the literal shows a decimal
//! point, an exponent, or an 8/9 digit. Digits that do not belong to the
//! current radix end the scan; whether the remaining text is acceptable is
//! decided by the boundary check, not by the scanner.

use std::fmt;

use crate::error::{settle, LiteralError, Result};
use crate::lexer::{
    char_offset, is_id_continue, is_strict_boundary, Boundary, Cursor, LiteralKind, Token,
};

#[cfg(feature = "bigint")]
use num_bigint::{BigInt, Sign};
#[cfg(feature = "bigint")]
use num_traits::ToPrimitive;

/// Binary radix.
pub const BIN: Radix = Radix::Binary;
/// Octal radix.
pub const OCT: Radix = Radix::Octal;
/// Decimal radix.
pub const DEC: Radix = Radix::Decimal;
/// Hexadecimal radix.
pub const HEX: Radix = Radix::Hexadecimal;

/// The base a number literal is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b101`
    Binary = 2,
    /// `0o17` or legacy `017`
    Octal = 8,
    /// `42`, `4.2`, `4e2`
    Decimal = 10,
    /// `0x2A`
    Hexadecimal = 16,
}

impl Radix {
    /// The numeric base.
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Looks up a radix by its numeric base.
    pub fn from_value(base: u32) -> Option<Self> {
        match base {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// The radix selected by the letter after a leading `0`.
    fn from_prefix(ch: char) -> Option<Self> {
        match ch {
            'b' | 'B' => Some(Radix::Binary),
            'o' | 'O' => Some(Radix::Octal),
            'x' | 'X' => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    fn is_digit(self, ch: char) -> bool {
        ch.is_digit(self.value())
    }

    /// Prefix written in front of integer literals of this radix.
    fn literal_prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The value of a number literal.
///
/// The variant is decided while scanning: fractions and exponents give
/// `Float`, an `n` suffix gives `BigInt`, everything else that fits `i64`
/// gives `Integer`.
#[derive(Debug, Clone)]
pub enum NumberValue {
    /// Integer literal that fits `i64`
    Integer(i64),
    /// Fractional, exponent or oversized literal
    Float(f64),
    /// `n`-suffixed literal
    #[cfg(feature = "bigint")]
    BigInt(BigInt),
    /// `NaN`
    NaN,
    /// `Infinity` or `-Infinity`
    Infinity {
        /// Whether the literal was `-Infinity`
        negative: bool,
    },
}

impl NumberValue {
    /// The value as a double, the way the source language would see it.
    pub fn as_f64(&self) -> f64 {
        match self {
            NumberValue::Integer(n) => *n as f64,
            NumberValue::Float(f) => *f,
            #[cfg(feature = "bigint")]
            NumberValue::BigInt(n) => n.to_f64().unwrap_or(f64::NAN),
            NumberValue::NaN => f64::NAN,
            NumberValue::Infinity { negative: false } => f64::INFINITY,
            NumberValue::Infinity { negative: true } => f64::NEG_INFINITY,
        }
    }

    /// Returns true for `NaN`.
    pub fn is_nan(&self) -> bool {
        self.as_f64().is_nan()
    }

    /// Returns true for anything but `NaN` and the infinities.
    pub fn is_finite(&self) -> bool {
        self.as_f64().is_finite()
    }

    fn negate(self) -> Self {
        match self {
            NumberValue::Integer(0) => NumberValue::Float(-0.0),
            NumberValue::Integer(n) => NumberValue::Integer(-n),
            NumberValue::Float(f) => NumberValue::Float(-f),
            #[cfg(feature = "bigint")]
            NumberValue::BigInt(n) => NumberValue::BigInt(-n),
            NumberValue::NaN => NumberValue::NaN,
            NumberValue::Infinity { negative } => NumberValue::Infinity {
                negative: !negative,
            },
        }
    }
}

impl PartialEq for NumberValue {
    /// Numeric equality: `Integer(5) == Float(5.0)` and `NaN == NaN`.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NumberValue::Integer(a), NumberValue::Integer(b)) => a == b,
            #[cfg(feature = "bigint")]
            (NumberValue::BigInt(a), NumberValue::BigInt(b)) => a == b,
            #[cfg(feature = "bigint")]
            (NumberValue::BigInt(_), _) | (_, NumberValue::BigInt(_)) => false,
            (a, b) => {
                let (x, y) = (a.as_f64(), b.as_f64());
                x == y || (x.is_nan() && y.is_nan())
            }
        }
    }
}

impl From<i64> for NumberValue {
    fn from(n: i64) -> Self {
        NumberValue::Integer(n)
    }
}

impl From<f64> for NumberValue {
    fn from(f: f64) -> Self {
        if f.is_nan() {
            NumberValue::NaN
        } else if f.is_infinite() {
            NumberValue::Infinity {
                negative: f < 0.0,
            }
        } else {
            NumberValue::Float(f)
        }
    }
}

#[cfg(feature = "bigint")]
impl From<BigInt> for NumberValue {
    fn from(n: BigInt) -> Self {
        NumberValue::BigInt(n)
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_literal(self, Radix::Decimal))
    }
}

/// A scanned number literal.
pub type NumberToken = Token<NumberValue, Radix>;

impl Token<NumberValue, Radix> {
    /// The radix the literal is written in.
    pub fn radix(&self) -> Radix {
        self.detail
    }
}

/// How strictly a number literal is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberOptions {
    /// Report failures as errors instead of `Ok(None)`
    pub strict: bool,
    /// Accept the longest valid prefix, ignoring what follows it
    pub allow_trailing: bool,
}

impl NumberOptions {
    /// Boundary enforced, failures reported as errors.
    pub fn strict() -> Self {
        Self {
            strict: true,
            allow_trailing: false,
        }
    }

    /// Longest valid prefix, failures reported as `Ok(None)`.
    pub fn allow_trailing() -> Self {
        Self {
            strict: false,
            allow_trailing: true,
        }
    }
}

/// Parses the number literal at the head of `input` into a token.
///
/// The literal must be followed by end of input, whitespace, or one of
/// `, ; ) ] } : /`.
pub fn parse_token(input: &str) -> Option<NumberToken> {
    parse_token_with(input, NumberOptions::default()).ok().flatten()
}

/// Parses the number literal at the head of `input` with explicit options.
pub fn parse_token_with(input: &str, options: NumberOptions) -> Result<Option<NumberToken>> {
    let scanned = scan(input).and_then(|token| {
        if options.allow_trailing || is_strict_boundary(input, &token, Boundary::Expression) {
            Ok(token)
        } else {
            Err(LiteralError::BoundaryViolation {
                kind: LiteralKind::Number,
                offset: token.end(),
            })
        }
    });
    settle(scanned, options.strict)
}

/// Parses the number literal at the head of `input`.
///
/// In non-strict mode anything after the longest valid prefix is ignored
/// (`"123abc"` gives `123`); in strict mode the literal must be followed by
/// a boundary (`"123abc"` gives `None`).
pub fn parse(input: &str, strict: bool) -> Option<NumberValue> {
    let options = NumberOptions {
        strict: false,
        allow_trailing: !strict,
    };
    parse_token_with(input, options)
        .ok()
        .flatten()
        .map(|token| token.value)
}

/// Returns true if `input` is a number literal written in `radix`.
pub fn is_radix(input: &str, radix: Radix) -> bool {
    parse_token(input).is_some_and(|token| token.radix() == radix)
}

/// Returns true if `input` is a binary number literal.
pub fn is_binary(input: &str) -> bool {
    is_radix(input, Radix::Binary)
}

/// Returns true if `input` is an octal number literal.
pub fn is_octal(input: &str) -> bool {
    is_radix(input, Radix::Octal)
}

/// Returns true if `input` is a decimal number literal.
pub fn is_decimal(input: &str) -> bool {
    is_radix(input, Radix::Decimal)
}

/// Returns true if `input` is a hexadecimal number literal.
pub fn is_hexadecimal(input: &str) -> bool {
    is_radix(input, Radix::Hexadecimal)
}

/// Returns true unless `input` strictly parses to a number other than `NaN`.
pub fn is_nan(input: &str) -> bool {
    !parse(input, true).is_some_and(|value| !value.is_nan())
}

/// Returns true if `input` strictly parses to a finite number.
pub fn is_finite(input: &str) -> bool {
    parse(input, true).is_some_and(|value| value.is_finite())
}

/// Prints `value` as a literal in `radix`.
///
/// Octal integers use the legacy `0` prefix; octal big integers use `0o`
/// since the legacy form cannot carry the `n` suffix. Values with a
/// fractional part are always printed in decimal.
pub fn to_literal(value: &NumberValue, radix: Radix) -> String {
    match value {
        NumberValue::NaN => "NaN".to_string(),
        NumberValue::Infinity { negative: false } => "Infinity".to_string(),
        NumberValue::Infinity { negative: true } => "-Infinity".to_string(),
        NumberValue::Integer(n) => format_integer(u128::from(n.unsigned_abs()), *n < 0, radix),
        NumberValue::Float(f) => format_float(*f, radix),
        #[cfg(feature = "bigint")]
        NumberValue::BigInt(n) => {
            let sign = if n.sign() == Sign::Minus { "-" } else { "" };
            let prefix = match radix {
                Radix::Octal => "0o",
                other => other.literal_prefix(),
            };
            format!("{sign}{prefix}{}n", n.magnitude().to_str_radix(radix.value()))
        }
    }
}

fn format_integer(magnitude: u128, negative: bool, radix: Radix) -> String {
    let sign = if negative { "-" } else { "" };
    let prefix = radix.literal_prefix();
    match radix {
        Radix::Binary => format!("{sign}{prefix}{magnitude:b}"),
        Radix::Octal => format!("{sign}{prefix}{magnitude:o}"),
        Radix::Decimal => format!("{sign}{magnitude}"),
        Radix::Hexadecimal => format!("{sign}{prefix}{magnitude:x}"),
    }
}

fn format_float(f: f64, radix: Radix) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    if radix != Radix::Decimal && f.fract() == 0.0 && f.abs() < u128::MAX as f64 {
        return format_integer(f.abs() as u128, f < 0.0, radix);
    }

    let abs = f.abs();
    if abs >= 1e21 || (abs != 0.0 && abs < 1e-6) {
        format!("{f:e}")
    } else {
        format!("{f}")
    }
}

/// How the digits of a scanned literal are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Integer,
    Float,
    BigInt,
}

/// The magnitude part of a literal, without sign or radix prefix.
struct Magnitude {
    radix: Radix,
    digits: String,
    form: Form,
}

/// Scans the literal at the head of `input` without checking what follows.
fn scan(input: &str) -> Result<NumberToken> {
    let mut cursor = Cursor::new(input);
    let start = cursor.skip_whitespace();

    let negative = match cursor.peek() {
        Some('-') => {
            cursor.advance();
            true
        }
        Some('+') => {
            cursor.advance();
            false
        }
        _ => false,
    };

    if let Some(value) = scan_constant(&mut cursor, negative) {
        return Ok(Token::new(input, start, cursor.pos(), value, Radix::Decimal));
    }

    let prefixed = match (cursor.peek(), cursor.peek_next()) {
        (Some('0'), Some(ch)) if Radix::from_prefix(ch).is_some() => scan_prefixed(&mut cursor),
        _ => None,
    };
    let magnitude = match prefixed {
        Some(magnitude) => magnitude,
        None => scan_decimal(&mut cursor).ok_or_else(|| LiteralError::NoMatch {
            kind: LiteralKind::Number,
            offset: char_offset(input, start),
        })?,
    };

    let value = build_value(&magnitude)?;
    let value = if negative { value.negate() } else { value };
    Ok(Token::new(input, start, cursor.pos(), value, magnitude.radix))
}

/// Reads a whole-word `NaN` or `Infinity`.
fn scan_constant(cursor: &mut Cursor<'_>, negative: bool) -> Option<NumberValue> {
    for word in ["Infinity", "NaN"] {
        let rest = cursor.rest();
        if rest.starts_with(word) && !rest[word.len()..].chars().next().is_some_and(is_id_continue)
        {
            cursor.eat_str(word);
            return Some(match word {
                "NaN" => NumberValue::NaN,
                _ => NumberValue::Infinity { negative },
            });
        }
    }
    None
}

/// Reads `0b…`, `0o…` or `0x…`. Backs off entirely when no digit follows the
/// prefix, so `0x` alone is read as `0`.
fn scan_prefixed(cursor: &mut Cursor<'_>) -> Option<Magnitude> {
    let saved = cursor.clone();
    cursor.advance();
    let radix = cursor.advance().and_then(Radix::from_prefix)?;

    let mut digits = String::new();
    while let Some(ch) = cursor.peek().filter(|&ch| radix.is_digit(ch)) {
        digits.push(ch);
        cursor.advance();
    }

    if digits.is_empty() {
        *cursor = saved;
        return None;
    }

    let form = if cursor.eat('n') { Form::BigInt } else { Form::Integer };
    Some(Magnitude {
        radix,
        digits,
        form,
    })
}

/// Reads decimal and legacy octal literals.
fn scan_decimal(cursor: &mut Cursor<'_>) -> Option<Magnitude> {
    let mut text = String::new();
    while let Some(ch) = cursor.peek().filter(char::is_ascii_digit) {
        text.push(ch);
        cursor.advance();
    }

    let integer_digits = text.len();
    let leading_zero = integer_digits > 1 && text.starts_with('0');
    let mut radix = if leading_zero && text.chars().all(|ch| Radix::Octal.is_digit(ch)) {
        Radix::Octal
    } else {
        Radix::Decimal
    };
    let mut form = Form::Integer;

    if cursor.peek() == Some('.')
        && (integer_digits > 0 || cursor.peek_next().is_some_and(|ch| ch.is_ascii_digit()))
    {
        cursor.advance();
        text.push('.');
        while let Some(ch) = cursor.peek().filter(char::is_ascii_digit) {
            text.push(ch);
            cursor.advance();
        }
        radix = Radix::Decimal;
        form = Form::Float;
    }

    if text.is_empty() {
        return None;
    }

    if matches!(cursor.peek(), Some('e' | 'E')) {
        let saved = cursor.clone();
        cursor.advance();
        let mut exponent = String::from("e");
        if let Some(sign @ ('+' | '-')) = cursor.peek() {
            exponent.push(sign);
            cursor.advance();
        }
        let before = exponent.len();
        while let Some(ch) = cursor.peek().filter(char::is_ascii_digit) {
            exponent.push(ch);
            cursor.advance();
        }

        if exponent.len() > before {
            text.push_str(&exponent);
            radix = Radix::Decimal;
            form = Form::Float;
        } else {
            *cursor = saved;
        }
    }

    if form == Form::Integer && !leading_zero && cursor.eat('n') {
        form = Form::BigInt;
    }

    Some(Magnitude {
        radix,
        digits: text,
        form,
    })
}

fn build_value(magnitude: &Magnitude) -> Result<NumberValue> {
    let Magnitude {
        radix,
        digits,
        form,
    } = magnitude;

    match form {
        Form::BigInt => build_bigint(digits, *radix),
        Form::Float => Ok(NumberValue::Float(parse_decimal_float(digits))),
        Form::Integer => Ok(match i64::from_str_radix(digits, radix.value()) {
            Ok(n) => NumberValue::Integer(n),
            Err(_) if *radix == Radix::Decimal => NumberValue::Float(parse_decimal_float(digits)),
            Err(_) => NumberValue::Float(fold_digits(digits, *radix)),
        }),
    }
}

#[cfg(feature = "bigint")]
fn build_bigint(digits: &str, radix: Radix) -> Result<NumberValue> {
    BigInt::parse_bytes(digits.as_bytes(), radix.value())
        .map(NumberValue::BigInt)
        .ok_or(LiteralError::Unsupported {
            kind: LiteralKind::Number,
            feature: "big integer digits",
        })
}

#[cfg(not(feature = "bigint"))]
fn build_bigint(_digits: &str, _radix: Radix) -> Result<NumberValue> {
    Err(LiteralError::Unsupported {
        kind: LiteralKind::Number,
        feature: "bigint",
    })
}

fn parse_decimal_float(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

/// Value of an integer too large for `i64`, rounded the way a double would.
fn fold_digits(digits: &str, radix: Radix) -> f64 {
    digits
        .chars()
        .filter_map(|ch| ch.to_digit(radix.value()))
        .fold(0.0, |acc, digit| acc * f64::from(radix.value()) + f64::from(digit))
}
