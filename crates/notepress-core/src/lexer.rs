//! Line cursor over the input text.
//!
//! Splits the input into lines for the block parser, borrowing directly
//! from the input with `memchr`-accelerated newline scanning. The cursor
//! only moves forward; a single line of lookahead is available through
//! [`Lexer::peek_line`].
//!
//! Lines remember their byte offsets so multi-line constructs (code
//! fences) can slice their verbatim content straight out of the input.
//! Offsets never leave this module's callers; the emitted block tree is
//! position-free.

use memchr::memchr;

/// A single line with its byte range in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text, without the trailing newline or carriage return.
    pub text: &'a str,
    /// Byte offset of the first character in the input.
    pub start: usize,
    /// Byte offset one past the last character (before the line break).
    pub end: usize,
}

impl<'a> Line<'a> {
    /// Check if this line contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The line text with surrounding whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Forward-only line reader with one line of lookahead.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    peeked: Option<Line<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            peeked: None,
        }
    }

    /// Peek at the next line without consuming it.
    ///
    /// Returns `None` at end of input.
    #[inline]
    pub fn peek_line(&mut self) -> Option<Line<'a>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked
    }

    /// Consume and return the next line.
    ///
    /// Returns `None` at end of input.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        self.peeked.take().or_else(|| self.read_line())
    }

    #[inline(always)]
    fn read_line(&mut self) -> Option<Line<'a>> {
        let bytes = self.input.as_bytes();
        if self.offset >= bytes.len() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        // Tolerate CRLF line endings.
        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < bytes.len() { end + 1 } else { end };

        Some(Line {
            // Newlines and carriage returns are single-byte ASCII, so both
            // boundaries are valid UTF-8 char boundaries.
            text: &self.input[start..text_end],
            start,
            end: text_end,
        })
    }
}
