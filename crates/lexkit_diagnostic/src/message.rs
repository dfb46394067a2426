//! Static diagnostic messages.
//!
//! A [`Message`] is declared once as a `static` item and referenced by
//! address from then on. Messages never carry interpolated runtime values;
//! the span attached at the failure site supplies the "where".

use std::fmt;

/// Severity level for a message.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Capitalised title used at the head of rendered diagnostics.
    pub const fn title(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Hint => "Hint",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

/// An immutable, statically-defined diagnostic.
///
/// Build with the `const` constructors and store in a `static`:
///
/// ```
/// use lexkit_diagnostic::Message;
///
/// static UNTERMINATED: Message = Message::error("unterminated string")
///     .with_code("S0001")
///     .with_url("https://example.com/S0001");
///
/// assert!(UNTERMINATED.is(&UNTERMINATED));
/// ```
///
/// Use a `static`, not a `const`: every use of a `const` may produce a
/// fresh copy at a different address, which breaks [`Message::is`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Message {
    pub severity: Severity,
    pub text: &'static str,
    pub code: Option<&'static str>,
    pub url: Option<&'static str>,
}

impl Message {
    pub const fn new(severity: Severity, text: &'static str) -> Self {
        Message {
            severity,
            text,
            code: None,
            url: None,
        }
    }

    pub const fn error(text: &'static str) -> Self {
        Message::new(Severity::Error, text)
    }

    pub const fn warning(text: &'static str) -> Self {
        Message::new(Severity::Warning, text)
    }

    pub const fn info(text: &'static str) -> Self {
        Message::new(Severity::Info, text)
    }

    pub const fn hint(text: &'static str) -> Self {
        Message::new(Severity::Hint, text)
    }

    #[must_use]
    pub const fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub const fn with_url(mut self, url: &'static str) -> Self {
        self.url = Some(url);
        self
    }

    /// Identity comparison: `true` only if both references point at the
    /// same `static`.
    ///
    /// Two messages with identical contents declared separately are equal
    /// under `==` but are not the same message.
    #[inline]
    pub fn is(&self, other: &Message) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(test)]
mod tests;
