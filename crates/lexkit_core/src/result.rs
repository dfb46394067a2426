//! The value every matcher returns.

use lexkit_diagnostic::Message;

/// Outcome of matching a prefix of the input.
///
/// `T` carries whatever a typed matcher decoded along the way (the parsed
/// integer, for example). Purely lexical matchers use `()`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchResult<T = ()> {
    /// `length` bytes matched.
    ///
    /// Only an explicit end-of-input matcher may report `length == 0`;
    /// every other empty match must be [`Nothing`](MatchResult::Nothing),
    /// otherwise a retry loop over the matcher never terminates.
    Success { length: usize, value: T },
    /// The input starts like the construct but is invalid. `length` bounds
    /// the bytes to blame.
    Failure {
        message: &'static Message,
        length: usize,
    },
    /// No claim on the input. The cursor must not move.
    Nothing,
}

impl MatchResult {
    /// `0` becomes `Nothing`; anything else a `Success`.
    #[inline]
    pub const fn from_length(length: usize) -> Self {
        if length == 0 {
            MatchResult::Nothing
        } else {
            MatchResult::Success { length, value: () }
        }
    }

    /// A success of exactly `length` bytes, even zero.
    #[inline]
    pub const fn success(length: usize) -> Self {
        MatchResult::Success { length, value: () }
    }
}

impl<T> MatchResult<T> {
    #[inline]
    pub const fn failure(message: &'static Message, length: usize) -> Self {
        MatchResult::Failure { message, length }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, MatchResult::Success { .. })
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, MatchResult::Failure { .. })
    }

    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, MatchResult::Nothing)
    }

    /// Matched length of a `Success`.
    #[inline]
    pub const fn length(&self) -> Option<usize> {
        match self {
            MatchResult::Success { length, .. } => Some(*length),
            _ => None,
        }
    }

    /// Transform the success value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> MatchResult<U> {
        match self {
            MatchResult::Success { length, value } => MatchResult::Success {
                length,
                value: f(value),
            },
            MatchResult::Failure { message, length } => MatchResult::Failure { message, length },
            MatchResult::Nothing => MatchResult::Nothing,
        }
    }

    /// Try an alternative, but only if this result made no claim.
    ///
    /// A `Failure` is kept: the input was recognised and rejected, so no
    /// other alternative gets a say.
    pub fn or_else<F: FnOnce() -> MatchResult<T>>(self, f: F) -> MatchResult<T> {
        match self {
            MatchResult::Nothing => f(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests;
