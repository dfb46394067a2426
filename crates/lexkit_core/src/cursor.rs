//! Position-tracking cursor over an immutable source buffer.
//!
//! The cursor owns the only mutable state in a parse: the byte position,
//! the current line number and where that line starts. It moves only
//! through [`skip`](Cursor::skip), [`maybe`](Cursor::maybe) and
//! [`must`](Cursor::must) (all built on [`advance`](Cursor::advance)), and it
//! records at most one [`Failure`] before the parse unwinds.
//!
//! # States
//!
//! A cursor is *live* until a failure is recorded, then *failed* until
//! [`clear_failure`](Cursor::clear_failure) is called. Callers stop driving
//! a failed cursor; nothing here guards against continued use, but
//! continued use cannot corrupt the position bookkeeping.

use lexkit_diagnostic::{Failure, Message, Span};
use memchr::{memchr_iter, memrchr};
use tracing::trace;

use crate::MatchResult;

/// Proof that a failure has been recorded in the cursor.
///
/// Only the cursor can build one, so an `Err(ParseError)` always comes with
/// a [`Failure`] waiting in [`Cursor::failure`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("parse failed")]
pub struct ParseError {
    _private: (),
}

/// A consumed range and the value its matcher produced.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Spanned<T> {
    pub span: Span,
    pub value: T,
}

/// Cursor over a borrowed source buffer.
///
/// One cursor per top-level parse. Nested parsers share it by `&mut`
/// reference; independent sub-parses build their own.
#[derive(Debug)]
pub struct Cursor<'src> {
    source: &'src [u8],
    pos: usize,
    line: u32,
    line_start: usize,
    failure: Option<Failure>,
}

/// Saturating conversion for span fields; sources past 4 GiB clamp.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 0,
            line_start: 0,
            failure: None,
        }
    }

    /// The whole source buffer.
    #[inline]
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// Unconsumed input, from the current position to the end.
    #[inline]
    pub fn rest(&self) -> &'src [u8] {
        &self.source[self.pos..]
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.pos == self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current 0-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte offset of the current position within its line.
    #[inline]
    pub fn column(&self) -> usize {
        self.pos - self.line_start
    }

    /// Byte offset where the current line starts.
    #[inline]
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Span of `length` bytes starting at the current position.
    pub fn here(&self, length: usize) -> Span {
        Span::new(
            self.line,
            to_u32(self.column()),
            to_u32(length),
            to_u32(self.line_start),
        )
    }

    /// Consume `length` bytes and return the span they covered.
    ///
    /// Every newline consumed bumps the line number and moves the line
    /// start to the byte after it. The returned span describes the range
    /// from where the cursor stood before moving, so its column belongs to
    /// the line the match began on. Lengths past the end of input are
    /// clamped.
    pub fn advance(&mut self, length: usize) -> Span {
        let length = length.min(self.source.len() - self.pos);
        let span = self.here(length);
        let consumed = &self.source[self.pos..self.pos + length];

        if let Some(last) = memrchr(b'\n', consumed) {
            let newlines = memchr_iter(b'\n', consumed).count();
            self.line = self.line.saturating_add(to_u32(newlines));
            self.line_start = self.pos + last + 1;
        }
        self.pos += length;

        trace!(
            pos = self.pos,
            line = self.line,
            length,
            "advance"
        );
        span
    }

    /// Advance past optional filler, discarding its span.
    pub fn skip<T>(&mut self, result: MatchResult<T>) -> Result<(), ParseError> {
        match result {
            MatchResult::Success { length, .. } => {
                self.advance(length);
                Ok(())
            }
            MatchResult::Nothing => Ok(()),
            MatchResult::Failure { message, length } => Err(self.fail(message, self.here(length))),
        }
    }

    /// Advance past an optional construct, returning it if present.
    pub fn maybe<T>(&mut self, result: MatchResult<T>) -> Result<Option<Spanned<T>>, ParseError> {
        match result {
            MatchResult::Success { length, value } => Ok(Some(Spanned {
                span: self.advance(length),
                value,
            })),
            MatchResult::Nothing => Ok(None),
            MatchResult::Failure { message, length } => Err(self.fail(message, self.here(length))),
        }
    }

    /// Advance past a mandatory construct.
    ///
    /// `Nothing` records `fallback` against the single byte at the current
    /// position.
    pub fn must<T>(
        &mut self,
        result: MatchResult<T>,
        fallback: &'static Message,
    ) -> Result<Spanned<T>, ParseError> {
        match result {
            MatchResult::Success { length, value } => Ok(Spanned {
                span: self.advance(length),
                value,
            }),
            MatchResult::Nothing => Err(self.fail(fallback, self.here(1))),
            MatchResult::Failure { message, length } => Err(self.fail(message, self.here(length))),
        }
    }

    /// Record `message` at `span` and return the error to propagate.
    ///
    /// Overwrites any earlier failure. Position is left untouched.
    pub fn fail(&mut self, message: &'static Message, span: Span) -> ParseError {
        trace!(
            text = message.text,
            code = message.code,
            line = span.line,
            column = span.column,
            "fail"
        );
        self.failure = Some(Failure::new(message, span));
        ParseError { _private: () }
    }

    /// The recorded failure, if any.
    #[inline]
    pub fn failure(&self) -> Option<Failure> {
        self.failure
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Forget the recorded failure and return the cursor to the live state.
    ///
    /// This is the only way out of the failed state. Most parsers never
    /// need it: a failure ends the parse.
    pub fn clear_failure(&mut self) -> Option<Failure> {
        self.failure.take()
    }

    /// Bytes covered by a span this cursor produced.
    ///
    /// A span from another source may resolve to unrelated bytes or, if
    /// out of bounds, to an empty slice.
    pub fn slice_from_span(&self, span: Span) -> &'src [u8] {
        span.slice(self.source).unwrap_or_default()
    }
}

impl<'src> From<&'src [u8]> for Cursor<'src> {
    fn from(source: &'src [u8]) -> Self {
        Cursor::new(source)
    }
}

impl<'src> From<&'src str> for Cursor<'src> {
    fn from(source: &'src str) -> Self {
        Cursor::new(source.as_bytes())
    }
}
