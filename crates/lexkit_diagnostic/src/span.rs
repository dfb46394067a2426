//! Source coordinates.
//!
//! A [`Span`] names a byte range by the line it started on rather than by
//! absolute offsets alone. It carries the byte offset of that line's start
//! so a renderer can recover the whole line without rescanning the source.

use std::fmt;
use std::ops::Range;

/// A line/column/length coordinate into a source buffer.
///
/// All fields are 0-based and measured in bytes. `column` is relative to
/// `line_start`, the offset where the span's first line begins. A span that
/// crosses a newline keeps its full `length`; renderers clip it to the first
/// line.
///
/// Spans do not own or borrow the source. Resolving one back to bytes needs
/// the buffer it was produced from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Span {
    /// 0-based line number.
    pub line: u32,
    /// Byte offset from `line_start`.
    pub column: u32,
    /// Number of bytes covered.
    pub length: u32,
    /// Byte offset into the source where `line` begins.
    pub line_start: u32,
}

impl Span {
    #[inline]
    pub const fn new(line: u32, column: u32, length: u32, line_start: u32) -> Self {
        Span {
            line,
            column,
            length,
            line_start,
        }
    }

    /// Absolute byte offset of the first covered byte.
    #[inline]
    pub const fn start(&self) -> usize {
        self.line_start as usize + self.column as usize
    }

    /// Absolute byte offset one past the last covered byte.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start() + self.length as usize
    }

    #[inline]
    pub const fn byte_range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// 1-based line number for display.
    #[inline]
    pub fn human_line(&self) -> u64 {
        u64::from(self.line) + 1
    }

    /// 1-based column number for display.
    #[inline]
    pub fn human_column(&self) -> u64 {
        u64::from(self.column) + 1
    }

    /// Resolve this span against `source`.
    ///
    /// Returns `None` if the span does not fit inside `source`, which can
    /// only happen when it was produced from a different buffer.
    pub fn slice<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        source.get(self.byte_range())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.human_line(), self.human_column())
    }
}
