//! Themes and the terminal capability policy.
//!
//! Formatting is orthogonal to layout: a [`Theme`] only decides which
//! escape sequences wrap each element. Swapping [`Theme::DEFAULT`] for
//! [`Theme::NOOP`] removes every escape sequence and leaves borders,
//! alignment and text byte-for-byte identical.

use std::fmt;
use std::io::IsTerminal;

use tracing::debug;

use crate::Severity;

/// Presence of this variable disables color, whatever else is set.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Presence of this variable enables color on non-terminal streams.
pub const FORCE_COLOR_ENV: &str = "FORCE_COLOR";

const RESET: &str = "\x1b[0m";

/// The 8-color ANSI palette.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// SGR foreground code.
    const fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }
}

/// Color and weight for one themed role.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    /// No formatting at all.
    pub const PLAIN: Style = Style {
        color: None,
        bold: false,
    };

    pub const fn fg(color: Color) -> Self {
        Style {
            color: Some(color),
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn is_plain(&self) -> bool {
        self.color.is_none() && !self.bold
    }

    /// Wrap `text` for display in this style.
    pub fn paint<T: fmt::Display>(self, text: T) -> Painted<T> {
        Painted { style: self, text }
    }
}

/// A value wrapped in a [`Style`]; plain styles write the bare text.
#[derive(Copy, Clone, Debug)]
pub struct Painted<T> {
    style: Style,
    text: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_plain() {
            return self.text.fmt(f);
        }
        f.write_str("\x1b[")?;
        match (self.style.bold, self.style.color) {
            (true, Some(color)) => write!(f, "1;{}", color.code())?,
            (true, None) => f.write_str("1")?,
            (false, Some(color)) => write!(f, "{}", color.code())?,
            (false, None) => {}
        }
        f.write_str("m")?;
        self.text.fmt(f)?;
        f.write_str(RESET)
    }
}

/// Styles for every semantic role in a rendered diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Theme {
    /// Box-drawing glyphs and the line-number gutter.
    pub border: Style,
    pub error: Style,
    pub warning: Style,
    pub info: Style,
    pub hint: Style,
    /// The bracketed message code.
    pub code: Style,
    /// The "Preview of" header text.
    pub preview_title: Style,
    /// The file name in the preview header.
    pub preview_target: Style,
    /// The caret underline beneath the offending bytes.
    pub highlight: Style,
}

impl Theme {
    /// Colored theme for interactive terminals.
    pub const DEFAULT: Theme = Theme {
        border: Style::fg(Color::Blue),
        error: Style::fg(Color::Red).bold(),
        warning: Style::fg(Color::Yellow).bold(),
        info: Style::fg(Color::Cyan).bold(),
        hint: Style::fg(Color::Green).bold(),
        code: Style::PLAIN.bold(),
        preview_title: Style::PLAIN.bold(),
        preview_target: Style::fg(Color::Cyan),
        highlight: Style::fg(Color::Red).bold(),
    };

    /// Every role unformatted.
    pub const NOOP: Theme = Theme {
        border: Style::PLAIN,
        error: Style::PLAIN,
        warning: Style::PLAIN,
        info: Style::PLAIN,
        hint: Style::PLAIN,
        code: Style::PLAIN,
        preview_title: Style::PLAIN,
        preview_target: Style::PLAIN,
        highlight: Style::PLAIN,
    };

    /// Style for a severity title.
    pub const fn severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Hint => self.hint,
        }
    }
}

static DEFAULT_THEME: Theme = Theme::DEFAULT;
static NOOP_THEME: Theme = Theme::NOOP;

/// Color output policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Color iff the stream is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorPolicy {
    /// Apply the environment-signal priority: suppression beats forcing,
    /// and with neither present the stream decides.
    pub fn from_signals(no_color: bool, force_color: bool) -> Self {
        if no_color {
            ColorPolicy::Never
        } else if force_color {
            ColorPolicy::Always
        } else {
            ColorPolicy::Auto
        }
    }

    /// Read `NO_COLOR` and `FORCE_COLOR` as presence flags.
    pub fn from_env() -> Self {
        Self::from_signals(
            std::env::var_os(NO_COLOR_ENV).is_some(),
            std::env::var_os(FORCE_COLOR_ENV).is_some(),
        )
    }

    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorPolicy::Auto => is_tty,
            ColorPolicy::Always => true,
            ColorPolicy::Never => false,
        }
    }
}

/// Layout and formatting choices for a [`Presenter`](crate::Presenter).
///
/// Computed once, then fixed for the presenter's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenterOptions {
    /// Render the bordered multi-line block instead of a single line.
    pub expand: bool,
    pub theme: &'static Theme,
}

impl PresenterOptions {
    pub const fn new(expand: bool, theme: &'static Theme) -> Self {
        PresenterOptions { expand, theme }
    }

    /// Single-line output with no escape sequences, for logs and tests.
    pub fn plain() -> Self {
        PresenterOptions::new(false, &NOOP_THEME)
    }

    /// Combine a color policy with the stream's terminal status.
    ///
    /// Expansion follows `is_tty` alone; color follows the policy.
    pub fn resolve(policy: ColorPolicy, is_tty: bool) -> Self {
        let theme = if policy.should_use_colors(is_tty) {
            &DEFAULT_THEME
        } else {
            &NOOP_THEME
        };
        PresenterOptions::new(is_tty, theme)
    }

    /// Probe the environment and `stream`.
    pub fn auto_detect<S: IsTerminal>(stream: &S) -> Self {
        let policy = ColorPolicy::from_env();
        let is_tty = stream.is_terminal();
        let options = Self::resolve(policy, is_tty);
        debug!(
            ?policy,
            is_tty,
            colored = options.is_colored(),
            "detected presenter options"
        );
        options
    }

    /// Whether the selected theme emits any escape sequences.
    pub fn is_colored(&self) -> bool {
        *self.theme != Theme::NOOP
    }
}
