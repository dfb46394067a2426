//! Pure text layout for both presentation modes.

use std::fmt::Write;
use std::path::Path;

use crate::theme::Theme;
use crate::{Message, Span};

const TOP: &str = "╭─";
const RULE: &str = "│";
const TEE: &str = "├─";
const BOTTOM: &str = "╰─";

/// `<Title> [<code>] in <filename>:<line>:<column>` with 1-based numbers.
fn write_title(out: &mut String, message: &Message, span: Span, filename: &str, theme: &Theme) {
    let title = message.severity.title();
    let _ = write!(out, "{}", theme.severity(message.severity).paint(title));
    if let Some(code) = message.code {
        let _ = write!(out, " {}", theme.code.paint(format!("[{code}]")));
    }
    let _ = write!(
        out,
        " in {filename}:{}:{}",
        span.human_line(),
        span.human_column()
    );
}

/// Single-line rendering, newline-terminated.
pub fn render_simple(message: &Message, span: Span, filename: &str, theme: &Theme) -> String {
    let mut out = String::new();
    write_title(&mut out, message, span, filename, theme);
    let _ = writeln!(out, ": {}", message.text);
    out
}

/// Bordered multi-line rendering with a source preview.
pub fn render_expanded(
    message: &Message,
    span: Span,
    source: &[u8],
    filename: &str,
    theme: &Theme,
) -> String {
    let rule = theme.border.paint(RULE);
    let line = source_line(source, span.line_start as usize);
    let number = span.human_line();
    let width = digit_count(number);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {}",
        theme.border.paint(TOP),
        theme.preview_title.paint("Preview of"),
        theme.preview_target.paint(short_name(filename)),
    );
    let _ = writeln!(
        out,
        "{rule} {} {rule} {}",
        theme.border.paint(format!("{number:>width$}")),
        String::from_utf8_lossy(line),
    );
    let (pad, carets) = underline(line, span);
    let _ = writeln!(
        out,
        "{rule} {:width$} {rule} {pad}{}",
        "",
        theme.highlight.paint("^".repeat(carets)),
    );

    let _ = write!(out, "{} ", theme.border.paint(TEE));
    write_title(&mut out, message, span, filename, theme);
    out.push('\n');
    let _ = writeln!(out, "{rule} {}", message.text);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{rule} File: {filename}");
    let _ = writeln!(out, "{rule} Line: {number}");
    if let Some(code) = message.code {
        let _ = writeln!(out, "{rule} Code: {code}");
    }
    if let Some(url) = message.url {
        let _ = writeln!(out, "{rule} URL: {url}");
    }
    let _ = writeln!(out, "{}", theme.border.paint(BOTTOM));
    out
}

/// The line beginning at `start`, without its terminator.
fn source_line(source: &[u8], start: usize) -> &[u8] {
    let Some(rest) = source.get(start..) else {
        return &[];
    };
    let line = match rest.iter().position(|&b| b == b'\n') {
        Some(end) => &rest[..end],
        None => rest,
    };
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Padding before the carets and the caret count.
///
/// Padding is `column` spaces. The caret count is
/// `min(length, line_len - column)` bytes: a span that runs past the end
/// of `line` only underlines what is on the first line, and a span at or
/// past the end of the line underlines nothing.
fn underline(line: &[u8], span: Span) -> (String, usize) {
    let column = span.column as usize;
    let carets = (span.length as usize).min(line.len().saturating_sub(column));
    (" ".repeat(column), carets)
}

/// Number of decimal digits in `n`, at least one.
fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Final path component, or the whole name if it has none.
fn short_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename)
}
