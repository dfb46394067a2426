//! Diagnostic presentation.
//!
//! A [`Presenter`] turns a message, a span and the source it points into
//! into text, then writes that text to its sink in one go. Layout is chosen
//! by [`PresenterOptions::expand`]; formatting by [`PresenterOptions::theme`].
//!
//! Simple mode, one line per diagnostic:
//!
//! ```text
//! Error [L0001] in src/config.lx:3:7: integer too large
//! ```
//!
//! Expanded mode, for interactive terminals:
//!
//! ```text
//! ╭─ Preview of config.lx
//! │ 3 │ port = 99999999999
//! │   │        ^^^^^^^^^^^
//! ├─ Error [L0001] in src/config.lx:3:7
//! │ integer too large
//! │
//! │ File: src/config.lx
//! │ Line: 3
//! │ Code: L0001
//! ╰─
//! ```
//!
//! The exact shape of both layouts is relied on by log scrapers; keep the
//! glyphs and the metadata row order stable.

use std::io::{self, Write};

use tracing::trace;

use crate::{Failure, Message, PresenterOptions, Span};

mod render;

pub use render::{render_expanded, render_simple};

/// Writes rendered diagnostics to an output sink.
pub struct Presenter<W: Write> {
    writer: W,
    options: PresenterOptions,
}

impl<W: Write> Presenter<W> {
    pub fn new(writer: W, options: PresenterOptions) -> Self {
        Presenter { writer, options }
    }

    pub fn options(&self) -> PresenterOptions {
        self.options
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render without writing, using this presenter's options.
    pub fn render(&self, message: &Message, span: Span, source: &[u8], filename: &str) -> String {
        if self.options.expand {
            render_expanded(message, span, source, filename, self.options.theme)
        } else {
            render_simple(message, span, filename, self.options.theme)
        }
    }

    /// Render and write one diagnostic, then flush.
    ///
    /// A write failure is returned as-is; nothing is retried.
    pub fn present(
        &mut self,
        message: &Message,
        span: Span,
        source: &[u8],
        filename: &str,
    ) -> io::Result<()> {
        trace!(
            code = message.code,
            line = span.line,
            column = span.column,
            expand = self.options.expand,
            "present"
        );
        let text = self.render(message, span, source, filename);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    /// Present a failure recorded by a cursor.
    pub fn present_failure(
        &mut self,
        failure: &Failure,
        source: &[u8],
        filename: &str,
    ) -> io::Result<()> {
        self.present(failure.message, failure.span, source, filename)
    }
}

impl Presenter<io::Stderr> {
    /// Presenter for the process's error stream, configured from the
    /// environment and whether stderr is a terminal.
    pub fn stderr() -> Self {
        let stderr = io::stderr();
        let options = PresenterOptions::auto_detect(&stderr);
        Presenter::new(stderr, options)
    }
}
