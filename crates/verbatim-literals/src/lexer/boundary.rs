//! Trailing-boundary validation.
//!
//! A literal is only accepted when whatever follows it could not have been
//! part of it: end of input, whitespace, or a punctuation character that
//! plausibly continues the surrounding syntax. This is what stops
//! `01234567abc` from being read as a number.
//!
//! | Boundary | Accepted after optional whitespace |
//! |----------|------------------------------------|
//! | `Statement` | `,` `;` `)` `]` `}` |
//! | `Expression` | `Statement` plus `:` `/` |
//! | `Custom` | the given characters |

use super::Spanned;

/// Characters that may follow a keyword literal.
const STATEMENT: &[char] = &[',', ';', ')', ']', '}'];

/// Characters that may follow a number or string literal.
const EXPRESSION: &[char] = &[',', ';', ')', ']', '}', ':', '/'];

/// A set of characters accepted right after a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// `, ; ) ] }`
    Statement,
    /// `, ; ) ] } : /`
    Expression,
    /// A caller-supplied set
    Custom(&'static [char]),
}

impl Boundary {
    /// The characters of this boundary set.
    pub fn chars(self) -> &'static [char] {
        match self {
            Boundary::Statement => STATEMENT,
            Boundary::Expression => EXPRESSION,
            Boundary::Custom(chars) => chars,
        }
    }

    /// Returns true if `leftover` is an acceptable continuation.
    pub fn accepts(self, leftover: &str) -> bool {
        match leftover.trim_start().chars().next() {
            None => true,
            Some(ch) => self.chars().contains(&ch),
        }
    }
}

/// Returns true if the text after `token` in `input` is empty, whitespace
/// only, or whitespace followed by one of the `boundary` characters.
pub fn is_strict_boundary<T: Spanned>(input: &str, token: &T, boundary: Boundary) -> bool {
    boundary.accepts(&input[token.span().end..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Span;

    struct At(usize);

    impl Spanned for At {
        fn span(&self) -> Span {
            Span::new(0, self.0)
        }
    }

    #[test]
    fn test_end_of_input() {
        assert!(is_strict_boundary("123", &At(3), Boundary::Statement));
    }

    #[test]
    fn test_whitespace_only() {
        assert!(is_strict_boundary("123 \n\t", &At(3), Boundary::Statement));
    }

    #[test]
    fn test_statement_punctuation() {
        for input in ["1,", "1;", "1)", "1]", "1}", "1  ,x"] {
            assert!(is_strict_boundary(input, &At(1), Boundary::Statement), "{input}");
        }
    }

    #[test]
    fn test_identifier_rejected() {
        assert!(!is_strict_boundary("123abc", &At(3), Boundary::Expression));
        assert!(!is_strict_boundary("123 abc", &At(3), Boundary::Expression));
    }

    #[test]
    fn test_expression_adds_colon_and_slash() {
        assert!(!is_strict_boundary("1:", &At(1), Boundary::Statement));
        assert!(is_strict_boundary("1:", &At(1), Boundary::Expression));
        assert!(is_strict_boundary("1 / 2", &At(1), Boundary::Expression));
    }

    #[test]
    fn test_custom_set() {
        let boundary = Boundary::Custom(&['+']);
        assert!(is_strict_boundary("1+", &At(1), boundary));
        assert!(!is_strict_boundary("1,", &At(1), boundary));
    }
}
