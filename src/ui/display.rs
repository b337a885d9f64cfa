use std::io::{self, Write};

use crate::style::{self, Category};
use crate::ui::terminal;

/// How a styled line is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Terminal escapes (degrades to the padded message without color support)
    #[default]
    Ansi,
    /// Browser-console form: `%c<message>`, a tab, then the style string
    Css,
    /// The message alone, no styling
    Plain,
}

/// Print `message` to stdout styled for `category`, or the usage hint if the
/// category is not recognized.
pub fn log_styled(message: &str, category: &str) {
    let stdout = io::stdout();
    if let Err(e) = write_styled(&mut stdout.lock(), message, category, OutputFormat::Ansi) {
        tracing::debug!(error = %e, "failed to write styled message");
    }
}

/// Write one line for `(message, category)` to `out`.
pub fn write_styled<W: Write>(
    out: &mut W,
    message: &str,
    category: &str,
    format: OutputFormat,
) -> io::Result<()> {
    writeln!(out, "{}", render(message, category, format))
}

/// Render one line (without the trailing newline).
pub fn render(message: &str, category: &str, format: OutputFormat) -> String {
    let Some(category) = Category::from_tag(category) else {
        tracing::debug!(category, "unrecognized log type, printing usage");
        return style::usage_hint();
    };
    tracing::debug!(%category, ?format, "rendering styled message");

    match format {
        OutputFormat::Ansi => terminal::style_for(category).apply(message),
        OutputFormat::Css => format!("%c{}\t{}", message, style::declaration(category)),
        OutputFormat::Plain => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_carries_message_and_style() {
        let line = render("Text Message", "info", OutputFormat::Css);
        assert_eq!(
            line,
            "%cText Message\tbackground: lightblue;padding:10px;border-radius:5px;color:black;font-weight:bold"
        );
    }

    #[test]
    fn css_backgrounds_per_category() {
        for (tag, color) in [
            ("info", "lightblue"),
            ("success", "lightgreen"),
            ("warning", "yellow"),
            ("error", "#B80F0A"),
        ] {
            let line = render("Text Message", tag, OutputFormat::Css);
            assert!(line.contains("Text Message"));
            assert!(line.contains(&format!("background: {};", color)), "{tag}");
            assert!(line.contains("padding:10px"));
            assert!(line.contains("border-radius:5px"));
            assert!(line.contains("color:black"));
            assert!(line.contains("font-weight:bold"));
        }
    }

    #[test]
    fn unrecognized_prints_usage_in_every_format() {
        for format in [OutputFormat::Ansi, OutputFormat::Css, OutputFormat::Plain] {
            for tag in ["debug", "", "INFO", "unknown"] {
                assert_eq!(
                    render("Text Message", tag, format),
                    "Log Type: info, success, warning, error"
                );
            }
        }
    }

    #[test]
    fn plain_is_message_only() {
        assert_eq!(render("hello", "warning", OutputFormat::Plain), "hello");
    }

    #[test]
    fn ansi_keeps_message() {
        let line = render("Text Message", "success", OutputFormat::Ansi);
        assert!(line.contains(" Text Message "));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_styled(&mut first, "same", "error", OutputFormat::Css).unwrap();
        write_styled(&mut second, "same", "error", OutputFormat::Css).unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with(b"\n"));
    }

    #[test]
    fn one_line_per_call() {
        let mut out = Vec::new();
        write_styled(&mut out, "a", "info", OutputFormat::Plain).unwrap();
        write_styled(&mut out, "b", "nope", OutputFormat::Plain).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "a\nLog Type: info, success, warning, error\n");
    }
}
