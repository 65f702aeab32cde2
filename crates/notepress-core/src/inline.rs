//! Inline formatter: one line of text into styled spans.
//!
//! A single left-to-right scan recognizes `**bold**`, `*italic*`,
//! `` `code` `` and `~~strikethrough~~`. Matching is non-greedy (nearest
//! closing delimiter) and atomic: the content of a match is never itself
//! scanned, so styles do not nest. Anything unmatched, including lone or
//! unbalanced delimiters, stays literal plain text.
//!
//! At a position where both could start, bold is tried before italic;
//! when bold finds no closer, italic may still match at the same position
//! with a leading `*` in its content. This reproduces the sequential
//! alternation order `**…**` | `*…*` | `` `…` `` | `~~…~~`.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

use crate::ast::TextSpan;

/// Decompose a line into an ordered sequence of styled spans.
///
/// The concatenated span contents, with each span's delimiters reinserted,
/// reconstruct the input exactly. Empty input yields a single empty plain
/// span, never an empty sequence.
pub fn format(text: &str) -> Vec<TextSpan<'_>> {
    if text.is_empty() {
        return vec![TextSpan::plain("")];
    }

    let mut scanner = Scanner::new(text);
    scanner.run()
}

struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// Start of the pending plain-text run.
    text_start: usize,
    spans: Vec<TextSpan<'a>>,
}

impl<'a> Scanner<'a> {
    #[inline]
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            text_start: 0,
            spans: Vec::with_capacity(4),
        }
    }

    fn run(mut self) -> Vec<TextSpan<'a>> {
        while self.pos < self.bytes.len() {
            let next = match memchr3(b'*', b'`', b'~', &self.bytes[self.pos..]) {
                Some(off) => self.pos + off,
                None => break,
            };

            self.pos = next;
            let matched = match self.bytes[self.pos] {
                b'*' => self.try_asterisk(),
                b'`' => self.try_code(),
                b'~' => self.try_strikethrough(),
                _ => unreachable!(),
            };

            if !matched {
                self.pos += 1;
            }
        }

        // Trailing unmatched text becomes a final plain span.
        if self.text_start < self.bytes.len() {
            self.spans
                .push(TextSpan::plain(&self.text[self.text_start..]));
        }

        self.spans
    }

    /// Emit the pending plain text before a styled span.
    #[inline(always)]
    fn flush_text(&mut self) {
        if self.text_start < self.pos {
            self.spans.push(TextSpan::plain(
                &self.text[self.text_start..self.pos],
            ));
        }
    }

    #[inline(always)]
    fn emit(&mut self, span: TextSpan<'a>, resume: usize) {
        self.flush_text();
        self.spans.push(span);
        self.pos = resume;
        self.text_start = resume;
    }

    /// Find the nearest doubled `needle` starting at or after `from`.
    #[inline]
    fn find_pair(&self, needle: u8, from: usize) -> Option<usize> {
        let mut search = from;
        while search < self.bytes.len() {
            let at = search + memchr(needle, &self.bytes[search..])?;
            if at + 1 < self.bytes.len() && self.bytes[at + 1] == needle {
                return Some(at);
            }
            search = at + 1;
        }
        None
    }

    #[inline]
    fn try_asterisk(&mut self) -> bool {
        if self.pos + 1 < self.bytes.len() && self.bytes[self.pos + 1] == b'*' && self.try_bold()
        {
            return true;
        }
        self.try_italic()
    }

    #[inline]
    fn try_bold(&mut self) -> bool {
        let content_start = self.pos + 2;
        // Nearest closing `**` leaving at least one content byte.
        match self.find_pair(b'*', content_start + 1) {
            Some(close) => {
                let content = &self.text[content_start..close];
                self.emit(TextSpan::bold(Cow::Borrowed(content)), close + 2);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn try_italic(&mut self) -> bool {
        let content_start = self.pos + 1;
        if content_start + 1 > self.bytes.len() {
            return false;
        }
        // Nearest closing `*` leaving at least one content byte.
        match memchr(b'*', &self.bytes[content_start + 1..]) {
            Some(off) => {
                let close = content_start + 1 + off;
                let content = &self.text[content_start..close];
                self.emit(TextSpan::italic(Cow::Borrowed(content)), close + 1);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn try_code(&mut self) -> bool {
        let content_start = self.pos + 1;
        if content_start + 1 > self.bytes.len() {
            return false;
        }
        match memchr(b'`', &self.bytes[content_start + 1..]) {
            Some(off) => {
                let close = content_start + 1 + off;
                let content = &self.text[content_start..close];
                self.emit(TextSpan::code(Cow::Borrowed(content)), close + 1);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn try_strikethrough(&mut self) -> bool {
        if self.pos + 1 >= self.bytes.len() || self.bytes[self.pos + 1] != b'~' {
            return false;
        }
        let content_start = self.pos + 2;
        match self.find_pair(b'~', content_start + 1) {
            Some(close) => {
                let content = &self.text[content_start..close];
                self.emit(TextSpan::strikethrough(Cow::Borrowed(content)), close + 2);
                true
            }
            None => false,
        }
    }
}
