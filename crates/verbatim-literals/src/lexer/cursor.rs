//! The character cursor the literal scanners are built on.

/// A forward-only cursor over the characters of an input string.
///
/// Cloning a cursor is cheap and is how scanners take a checkpoint before a
/// speculative read (an exponent, a radix prefix) they may need to undo.
#[derive(Clone)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
        }
    }

    /// Byte offset of the next unread character.
    pub(crate) fn pos(&self) -> usize {
        self.current_pos
    }

    /// The unread remainder of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.current_pos..]
    }

    /// Text between `start` and the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.current_pos]
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.current_pos = pos + ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    pub(crate) fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    /// Consumes the next character if it equals `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `word` if the remainder starts with it.
    pub(crate) fn eat_str(&mut self, word: &str) -> bool {
        if !self.rest().starts_with(word) {
            return false;
        }
        for _ in word.chars() {
            self.advance();
        }
        true
    }

    /// Skips leading whitespace and returns the byte offset of the first
    /// significant character.
    pub(crate) fn skip_whitespace(&mut self) -> usize {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
        self.current_pos
    }
}

/// Checks if a character can continue an identifier.
pub(crate) fn is_id_continue(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_continue(ch)
}
