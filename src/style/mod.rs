use std::fmt;
use std::str::FromStr;

/// Declarations applied to every styled message, in render order.
pub const STYLE_ATTRIBUTES: [(&str, &str); 4] = [
    ("padding", "10px"),
    ("border-radius", "5px"),
    ("color", "black"),
    ("font-weight", "bold"),
];

/// Log-type tag selecting the background of a styled message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Info,
    Success,
    Warning,
    Error,
}

/// Category, its tag, and its background color. Table order is the order
/// the usage hint lists the tags in.
const COLOR_TABLE: [(Category, &str, &str); 4] = [
    (Category::Info, "info", "lightblue"),
    (Category::Success, "success", "lightgreen"),
    (Category::Warning, "warning", "yellow"),
    (Category::Error, "error", "#B80F0A"),
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized log type '{0}' (expected one of: {valid})", valid = valid_tags())]
    UnknownCategory(String),
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Info,
        Category::Success,
        Category::Warning,
        Category::Error,
    ];

    /// Exact, case-sensitive lookup of a tag in the color table.
    pub fn from_tag(tag: &str) -> Option<Self> {
        COLOR_TABLE
            .iter()
            .find(|(_, t, _)| *t == tag)
            .map(|(category, _, _)| *category)
    }

    pub fn tag(self) -> &'static str {
        self.entry().1
    }

    /// CSS background color, e.g. `lightblue`.
    pub fn background(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (Category, &'static str, &'static str) {
        // COLOR_TABLE is indexed by discriminant
        &COLOR_TABLE[self as usize]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Compose the style string for a category:
/// `background: <color>;` followed by each attribute as `property:value`,
/// joined by `;`.
pub fn declaration(category: Category) -> String {
    let attributes = STYLE_ATTRIBUTES
        .iter()
        .map(|(property, value)| format!("{}:{}", property, value))
        .collect::<Vec<_>>()
        .join(";");
    format!("background: {};{}", category.background(), attributes)
}

/// The plain line printed for an unrecognized category.
pub fn usage_hint() -> String {
    format!("Log Type: {}", valid_tags())
}

fn valid_tags() -> String {
    COLOR_TABLE
        .iter()
        .map(|(_, tag, _)| *tag)
        .collect::<Vec<_>>()
        .join(", ")
}
