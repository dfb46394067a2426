//! Matcher library.
//!
//! Every function here is pure: it looks at the unconsumed input it is
//! given, decides how long a prefix it recognises, and returns a
//! [`MatchResult`]. None of them touch a [`Cursor`](crate::Cursor), so they
//! can be tested and composed directly.

use lexkit_diagnostic::messages::INVALID_UTF8;
use memchr::memchr;

use crate::MatchResult;

mod integer;

pub use integer::integer;

/// Longest prefix of bytes accepted by `predicate`.
pub fn when_ascii<F: Fn(u8) -> bool>(text: &[u8], predicate: F) -> MatchResult {
    MatchResult::from_length(text.iter().take_while(|&&b| predicate(b)).count())
}

/// Longest prefix of UTF-8 characters accepted by `predicate`.
///
/// Stops at the first rejected character. Bytes that are not valid UTF-8,
/// met before any character has been rejected (including at the very start
/// of `text`), are a `Failure` that blames the accepted prefix plus the bad
/// sequence.
pub fn when_utf8<F: Fn(char) -> bool>(text: &[u8], predicate: F) -> MatchResult {
    let mut length = 0;
    while let Some(decoded) = decode_char(&text[length..]) {
        match decoded {
            Ok((c, width)) if predicate(c) => length += width,
            Ok(_) => break,
            Err(bad) => return MatchResult::failure(&INVALID_UTF8, length + bad),
        }
    }
    MatchResult::from_length(length)
}

/// Decode the first character of `bytes`.
///
/// `None` at end of input, `Err(n)` if the first `n` bytes are not a valid
/// encoding.
fn decode_char(bytes: &[u8]) -> Option<Result<(char, usize), usize>> {
    let width = match *bytes.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Some(Err(1)),
    };
    let chunk = &bytes[..width.min(bytes.len())];
    Some(match std::str::from_utf8(chunk) {
        Ok(s) => s.chars().next().map(|c| (c, width)).ok_or(chunk.len()),
        Err(err) => Err(err.error_len().unwrap_or(chunk.len())),
    })
}

/// Spaces, tabs, line feeds, form feeds and carriage returns.
pub fn ascii_whitespace(text: &[u8]) -> MatchResult {
    when_ascii(text, |b| b.is_ascii_whitespace())
}

pub fn digits(text: &[u8]) -> MatchResult {
    when_ascii(text, |b| b.is_ascii_digit())
}

pub fn hex_digits(text: &[u8]) -> MatchResult {
    when_ascii(text, |b| b.is_ascii_hexdigit())
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn ascii_identifier(text: &[u8]) -> MatchResult {
    match text.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {
            when_ascii(text, |b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => MatchResult::Nothing,
    }
}

/// Exactly `expected`. An empty `expected` never matches.
pub fn literal(text: &[u8], expected: &[u8]) -> MatchResult {
    if text.starts_with(expected) {
        MatchResult::from_length(expected.len())
    } else {
        MatchResult::Nothing
    }
}

/// One line terminator: `\n` or `\r\n`.
pub fn newline(text: &[u8]) -> MatchResult {
    if text.starts_with(b"\r\n") {
        MatchResult::from_length(2)
    } else {
        literal(text, b"\n")
    }
}

/// The rest of the current line, excluding its terminator.
pub fn line(text: &[u8]) -> MatchResult {
    let Some(end) = memchr(b'\n', text) else {
        return MatchResult::from_length(text.len());
    };
    let end = if end > 0 && text[end - 1] == b'\r' {
        end - 1
    } else {
        end
    };
    MatchResult::from_length(end)
}

/// The one matcher allowed to succeed with length zero.
pub fn end_of_input(text: &[u8]) -> MatchResult {
    if text.is_empty() {
        MatchResult::success(0)
    } else {
        MatchResult::Nothing
    }
}
