//! Built-in messages raised by the matcher library and the cursor.
//!
//! Tests assert on these by identity, so always reference the statics
//! directly instead of rebuilding an equal value.

use crate::Message;

/// A numeric literal does not fit its target integer type.
pub static INTEGER_TOO_LARGE: Message = Message::error("integer too large").with_code("L0001");

/// A UTF-8 predicate scan ran into bytes that are not valid UTF-8.
pub static INVALID_UTF8: Message = Message::error("invalid UTF-8 sequence").with_code("L0002");

/// Fallback for a mandatory integer that was not there.
pub static EXPECTED_INTEGER: Message = Message::error("expected an integer").with_code("L0003");

/// Fallback for trailing input after a complete parse.
pub static EXPECTED_END_OF_INPUT: Message =
    Message::error("expected end of input").with_code("L0004");

/// Generic fallback when no alternative matched.
pub static UNEXPECTED_INPUT: Message = Message::error("unexpected input").with_code("L0005");

/// Every built-in message.
pub static ALL: &[&Message] = &[
    &INTEGER_TOO_LARGE,
    &INVALID_UTF8,
    &EXPECTED_INTEGER,
    &EXPECTED_END_OF_INPUT,
    &UNEXPECTED_INPUT,
];
