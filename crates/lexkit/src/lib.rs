//! Lexing toolkit for hand-written recursive-descent parsers.
//!
//! Re-exports the cursor and matcher library from `lexkit_core` and the
//! diagnostic types from `lexkit_diagnostic`, so an embedding parser only
//! needs this crate.
//!
//! ```
//! use lexkit::{matchers, messages, Cursor, Presenter, PresenterOptions};
//!
//! let source = "width = 300";
//! let mut cursor = Cursor::from(source);
//! cursor.advance(8);
//! let result = cursor.must(matchers::integer::<u8>(cursor.rest()), &messages::EXPECTED_INTEGER);
//! assert!(result.is_err());
//!
//! let mut presenter = Presenter::new(Vec::new(), PresenterOptions::plain());
//! if let Some(failure) = cursor.failure() {
//!     presenter.present_failure(&failure, source.as_bytes(), "dims.cfg")?;
//! }
//! let out = String::from_utf8_lossy(&presenter.into_inner()).into_owned();
//! assert_eq!(out, "Error [L0001] in dims.cfg:1:9: integer too large\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::sync::Once;

pub use lexkit_core::{matchers, Cursor, MatchResult, ParseError, Spanned};
pub use lexkit_diagnostic::theme::{Color, Style};
pub use lexkit_diagnostic::{
    messages, presenter, ColorPolicy, Failure, Message, Presenter, PresenterOptions, Severity,
    Span, Theme,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=lexkit_core=trace` to follow every cursor movement. Safe to
/// call more than once; only the first call has an effect. Libraries
/// embedding lexkit should leave subscriber setup to their binary.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_some() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .try_init();
        }
    });
}
