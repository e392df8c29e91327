//! Decoration instructions emitted by the engine.

use std::fmt;
use std::ops::Range;

use serde::Serialize;
use smol_str::SmolStr;

use crate::style::Color;

/// One visual attribute, with its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Attribute {
    Bold,
    Italic,
    Strikethrough,
    Underline,
    ForegroundColor(Color),
    BackgroundColor(Color),
    RoundedBackground {
        color: Color,
        radius: f32,
    },
    FontFamily(SmolStr),
    FontSize(f32),
    LineHeight(f32),
    /// Full-width background behind every line of a code block.
    CodeBlockBackground(Color),
    /// Left border for a blockquote, indented per nesting level.
    BlockquoteBorder {
        color: Color,
        width: f32,
        margin_left: f32,
        padding_left: f32,
        depth: usize,
    },
    /// Zero layout width, draws nothing. The underlying text is untouched.
    Hidden,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Bold => f.write_str("bold"),
            Attribute::Italic => f.write_str("italic"),
            Attribute::Strikethrough => f.write_str("strikethrough"),
            Attribute::Underline => f.write_str("underline"),
            Attribute::ForegroundColor(color) => write!(f, "fg {color}"),
            Attribute::BackgroundColor(color) => write!(f, "bg {color}"),
            Attribute::RoundedBackground { color, radius } => {
                write!(f, "rounded-bg {color} r={radius}")
            }
            Attribute::FontFamily(family) => write!(f, "font {family:?}"),
            Attribute::FontSize(size) => write!(f, "size {size}"),
            Attribute::LineHeight(height) => write!(f, "line-height {height}"),
            Attribute::CodeBlockBackground(color) => write!(f, "code-block-bg {color}"),
            Attribute::BlockquoteBorder {
                color,
                width,
                margin_left,
                padding_left,
                depth,
            } => write!(
                f,
                "blockquote {color} w={width} ml={margin_left} pl={padding_left} depth={depth}"
            ),
            Attribute::Hidden => f.write_str("hidden"),
        }
    }
}

/// Apply `attribute` over the char range `range`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decoration {
    pub range: Range<usize>,
    pub attribute: Attribute,
}

impl Decoration {
    pub fn new(range: Range<usize>, attribute: Attribute) -> Self {
        Self { range, attribute }
    }

    pub fn is_hidden(&self) -> bool {
        self.attribute == Attribute::Hidden
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} {}", self.range.start, self.range.end, self.attribute)
    }
}

/// One decoration per line, for logs and snapshots.
pub fn render_decorations(decorations: &[Decoration]) -> String {
    decorations
        .iter()
        .map(|decoration| decoration.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
