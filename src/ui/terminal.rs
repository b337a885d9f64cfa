//! Maps the CSS-like style declarations onto terminal attributes.
//!
//! A terminal has no border radius and pads in whole cells, so the mapping is
//! lossy: colors become the nearest xterm 256-color entries, any non-zero
//! padding becomes one background-colored cell on each side of the message,
//! and `border-radius` is dropped.

use console::{Color, Style};

use crate::style::{Category, STYLE_ATTRIBUTES};

/// Terminal rendering of one category's declarations.
#[derive(Debug, Clone)]
pub struct TerminalStyle {
    style: Style,
    padding: usize,
}

impl TerminalStyle {
    /// Apply the style to a message. Honors `console`'s global color switch:
    /// with colors disabled only the padding survives.
    pub fn apply(&self, message: &str) -> String {
        let pad = " ".repeat(self.padding);
        self.style
            .apply_to(format!("{pad}{message}{pad}"))
            .to_string()
    }
}

pub fn style_for(category: Category) -> TerminalStyle {
    let declarations = std::iter::once(("background", category.background()))
        .chain(STYLE_ATTRIBUTES.iter().copied());

    let mut style = Style::new();
    let mut padding = 0;
    for (property, value) in declarations {
        match property {
            "background" | "background-color" => match css_color(value) {
                Some(color) => style = style.bg(color),
                None => tracing::debug!(value, "no terminal color for background"),
            },
            "color" => match css_color(value) {
                Some(color) => style = style.fg(color),
                None => tracing::debug!(value, "no terminal color for foreground"),
            },
            "font-weight" if value == "bold" => style = style.bold(),
            "padding" => padding = usize::from(css_length(value) > 0),
            _ => {}
        }
    }

    TerminalStyle { style, padding }
}

/// Nearest terminal color for the CSS colors the color table uses.
fn css_color(value: &str) -> Option<Color> {
    let color = match value.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        "yellow" => Color::Color256(226),
        "lightblue" => Color::Color256(153),
        "lightgreen" => Color::Color256(120),
        "#b80f0a" => Color::Color256(124),
        _ => return None,
    };
    Some(color)
}

/// Leading integer of a CSS length such as `10px`; zero if absent.
fn css_length(value: &str) -> u32 {
    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
