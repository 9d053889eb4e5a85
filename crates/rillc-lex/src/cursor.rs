//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position
//! state while the scanner walks the source text, and builds the span
//! for each recognized token.

use rillc_util::Span;

/// A cursor for traversing source code.
///
/// The cursor tracks the current byte position, the current line, and
/// the offset where that line began; a token's columns are byte offsets
/// relative to `line_start`. Recognizers never cross a line boundary,
/// so only [`Cursor::consume_newline`] (called from the whitespace
/// skipper) updates the line bookkeeping.
///
/// # Example
///
/// ```
/// use rillc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("if x");
/// assert_eq!(cursor.peek(0), 'i');
/// assert_eq!(cursor.peek(1), 'f');
/// let span = cursor.build_span(2);
/// assert_eq!((span.start_col, span.end_col), (0, 2));
/// assert_eq!(cursor.peek(0), ' ');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (0-based).
    line: u32,

    /// Byte offset where the current line began.
    line_start: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at offset 0, line 0.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 0,
            line_start: 0,
        }
    }

    /// Returns the character at the given byte offset from the current
    /// position, without moving.
    ///
    /// Returns `'\0'` past the end of the source; callers that care
    /// about the distinction guard with [`Cursor::has_more`] first.
    #[inline]
    pub fn peek(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Returns true if a character exists at the given byte offset from
    /// the current position.
    #[inline]
    pub fn has_more(&self, offset: usize) -> bool {
        self.position + offset < self.source.len()
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Advances the cursor by the given number of bytes.
    ///
    /// Must not be used to cross a newline; the skipper handles those
    /// through [`Cursor::consume_newline`] so the line bookkeeping
    /// stays consistent.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        let remaining = self.source.len() - self.position;
        self.position += count.min(remaining);
    }

    /// Advances past one character, however many bytes it occupies.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Consumes one newline byte (`\n` or `\r`) and moves the line
    /// bookkeeping to the next line.
    #[inline]
    pub fn consume_newline(&mut self) {
        self.position += 1;
        self.line_start = self.position;
        self.line += 1;
    }

    /// Captures a span covering the next `len` bytes on the current
    /// line, then advances past them.
    ///
    /// The caller must already have crossed any preceding newlines via
    /// [`Cursor::consume_newline`]; `build_span` never updates
    /// `line`/`line_start`.
    pub fn build_span(&mut self, len: usize) -> Span {
        let col = (self.position - self.line_start) as u32;
        let span = Span::new(self.line, col, self.line, col + len as u32);
        self.position += len;
        span
    }

    /// Returns the next `len` bytes of source without moving.
    #[inline]
    pub fn slice_ahead(&self, len: usize) -> &'a str {
        &self.source[self.position..self.position + len]
    }

    /// Returns the source text from the given byte offset to the end.
    #[inline]
    pub fn slice_to_end(&self, start: usize) -> &'a str {
        &self.source[start..]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (0-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column (byte offset from the line start).
    #[inline]
    pub fn column(&self) -> u32 {
        (self.position - self.line_start) as u32
    }
}
