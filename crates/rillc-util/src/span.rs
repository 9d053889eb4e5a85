//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type used to attach source regions
//! to tokens and, later, to parse tree nodes.

use std::fmt;

/// Source location span
///
/// A `Span` is a half-open region `[start, end)` in source code,
/// expressed as zero-based (line, column) pairs. Columns are byte
/// offsets from the start of their line, which coincides with character
/// columns for ASCII source.
///
/// Every token the scanner produces fits on a single line, so
/// `start_line == end_line` for all spans it builds.
///
/// # Examples
///
/// ```
/// use rillc_util::span::Span;
///
/// // "while" starting at column 4 of line 2
/// let span = Span::new(2, 4, 2, 9);
/// assert_eq!(span.width(), 5);
///
/// // A zero-width marker span
/// let point = Span::point(0, 12);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Line the region starts on (0-based)
    pub start_line: u32,
    /// Column the region starts at (0-based byte offset in its line)
    pub start_col: u32,
    /// Line the region ends on (0-based)
    pub end_line: u32,
    /// Column one past the last byte of the region
    pub end_col: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use rillc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY, Span::new(0, 0, 0, 0));
    /// ```
    pub const DUMMY: Span = Span {
        start_line: 0,
        start_col: 0,
        end_line: 0,
        end_col: 0,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use rillc_util::span::Span;
    ///
    /// let span = Span::new(1, 0, 1, 2);
    /// assert_eq!(span.start_line, 1);
    /// assert_eq!(span.end_col, 2);
    /// ```
    #[inline]
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Create a zero-width span at a single location
    ///
    /// # Examples
    ///
    /// ```
    /// use rillc_util::span::Span;
    ///
    /// let point = Span::point(3, 7);
    /// assert_eq!(point.start_col, point.end_col);
    /// ```
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        Self {
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
        }
    }

    /// Returns true if this span covers no characters
    ///
    /// # Examples
    ///
    /// ```
    /// use rillc_util::span::Span;
    ///
    /// assert!(Span::point(0, 5).is_empty());
    /// assert!(!Span::new(0, 5, 0, 6).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_line == self.end_line && self.start_col == self.end_col
    }

    /// Returns the width of the span in bytes
    ///
    /// Only meaningful for single-line spans, which is every span the
    /// scanner produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use rillc_util::span::Span;
    ///
    /// let span = Span::new(0, 2, 0, 7);
    /// assert_eq!(span.width(), 5);
    /// ```
    #[inline]
    pub fn width(&self) -> u32 {
        self.end_col - self.start_col
    }

    /// Merge two spans into a single span covering both
    ///
    /// # Examples
    ///
    /// ```
    /// use rillc_util::span::Span;
    ///
    /// let a = Span::new(0, 0, 0, 2);
    /// let b = Span::new(0, 3, 0, 5);
    /// assert_eq!(a.merge(b), Span::new(0, 0, 0, 5));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let (start_line, start_col) =
            if (self.start_line, self.start_col) <= (other.start_line, other.start_col) {
                (self.start_line, self.start_col)
            } else {
                (other.start_line, other.start_col)
            };
        let (end_line, end_col) = if (self.end_line, self.end_col) >= (other.end_line, other.end_col)
        {
            (self.end_line, self.end_col)
        } else {
            (other.end_line, other.end_col)
        };
        Span {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}
