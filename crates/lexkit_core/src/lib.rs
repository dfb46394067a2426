//! Building blocks for hand-written recursive-descent lexers.
//!
//! A *matcher* is a pure function from the unconsumed input to a
//! [`MatchResult`]. A [`Cursor`] feeds its [`rest()`](Cursor::rest) to a
//! matcher and hands the result to one of three advance operations:
//!
//! - [`skip`](Cursor::skip): optional filler, the span is discarded
//! - [`maybe`](Cursor::maybe): optional construct, the span is returned if present
//! - [`must`](Cursor::must): mandatory construct, absence is a parse error
//!
//! ```
//! use lexkit_core::{matchers, Cursor, ParseError};
//! use lexkit_diagnostic::messages::EXPECTED_INTEGER;
//!
//! fn pair(cursor: &mut Cursor<'_>) -> Result<(i32, i32), ParseError> {
//!     let a = cursor.must(matchers::integer(cursor.rest()), &EXPECTED_INTEGER)?;
//!     cursor.skip(matchers::literal(cursor.rest(), b","))?;
//!     cursor.skip(matchers::ascii_whitespace(cursor.rest()))?;
//!     let b = cursor.must(matchers::integer(cursor.rest()), &EXPECTED_INTEGER)?;
//!     Ok((a.value, b.value))
//! }
//!
//! let mut cursor = Cursor::from("3, -4");
//! assert_eq!(pair(&mut cursor), Ok((3, -4)));
//! assert!(cursor.is_done());
//! ```
//!
//! A failed parse leaves exactly one [`Failure`](lexkit_diagnostic::Failure)
//! in the cursor; render it with a
//! [`Presenter`](lexkit_diagnostic::Presenter).

mod cursor;
pub mod matchers;
mod result;

pub use cursor::{Cursor, ParseError, Spanned};
pub use result::MatchResult;
