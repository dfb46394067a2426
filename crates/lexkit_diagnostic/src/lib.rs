//! Diagnostic data and presentation for hand-written lexers.
//!
//! - [`Span`]: line/column/length coordinate into a source buffer
//! - [`Message`]: static, identity-comparable description of a problem
//! - [`Failure`]: the `{message, span}` pair a cursor records
//! - [`Theme`] and [`PresenterOptions`]: color and layout policy
//! - [`Presenter`]: renders a failure as a single line or an expanded block
//!
//! Nothing in this crate prints on its own. Presentation is an explicit
//! step the embedding parser chooses to take once parsing has failed.

mod failure;
mod message;
pub mod messages;
pub mod presenter;
mod span;
pub mod theme;

pub use failure::Failure;
pub use message::{Message, Severity};
pub use presenter::Presenter;
pub use span::Span;
pub use theme::{ColorPolicy, PresenterOptions, Theme};
