use crate::{Message, Span};

/// A recorded diagnostic: which message fired and where.
#[derive(Copy, Clone, Debug)]
pub struct Failure {
    pub message: &'static Message,
    pub span: Span,
}

impl Failure {
    #[inline]
    pub const fn new(message: &'static Message, span: Span) -> Self {
        Failure { message, span }
    }

    /// Whether this failure was raised with exactly `message`.
    #[inline]
    pub fn is(&self, message: &Message) -> bool {
        self.message.is(message)
    }
}
