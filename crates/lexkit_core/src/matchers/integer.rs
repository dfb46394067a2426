//! Bounded decimal integers.

use lexkit_diagnostic::messages::INTEGER_TOO_LARGE;
use num_traits::{NumCast, PrimInt};

use crate::MatchResult;

/// Parse a decimal integer into `N`.
///
/// A leading `+` or `-` is accepted only when `N` is signed; on an unsigned
/// target it yields `Nothing` so callers can fall through to another
/// alternative. A sign with no digits after it is also `Nothing`.
///
/// Digits are accumulated with checked arithmetic. The first overflow
/// returns a [`INTEGER_TOO_LARGE`] failure whose length covers the prefix
/// read so far plus the offending digit. Negative values accumulate
/// downwards, so `N::min_value()` itself parses.
pub fn integer<N: PrimInt>(text: &[u8]) -> MatchResult<N> {
    let signed = N::min_value() < N::zero();
    let (negative, sign_len) = match text.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    if sign_len > 0 && !signed {
        return MatchResult::Nothing;
    }
    let Some(ten) = <N as NumCast>::from(10u8) else {
        return MatchResult::Nothing;
    };

    let mut value = N::zero();
    let mut length = sign_len;
    for &byte in &text[sign_len..] {
        if !byte.is_ascii_digit() {
            break;
        }
        let next = <N as NumCast>::from(byte - b'0').and_then(|digit| {
            let shifted = value.checked_mul(&ten)?;
            if negative {
                shifted.checked_sub(&digit)
            } else {
                shifted.checked_add(&digit)
            }
        });
        match next {
            Some(next) => value = next,
            None => return MatchResult::failure(&INTEGER_TOO_LARGE, length + 1),
        }
        length += 1;
    }

    if length == sign_len {
        return MatchResult::Nothing;
    }
    MatchResult::Success { length, value }
}
