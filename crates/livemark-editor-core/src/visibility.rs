//! Decoration resolution: which attributes every range gets, and whether
//! each syntax marker is shown or hidden for the current cursor.
//!
//! # Visibility rules
//!
//! - Inline syntax (markers bordering bold, italic, strikethrough or link
//!   content) is shown while the cursor sits anywhere in the construct's zone,
//!   both ends inclusive, and hidden otherwise or when there is no cursor.
//! - Block and line syntax (`#`, list markers, fences...) is shown while the
//!   cursor is on the marker's line, or when there is no cursor.
//! - Table delimiter rows and pipes are shown while the cursor's line falls
//!   inside the owning table's lines. Without an owning table, or without a
//!   cursor, they are hidden.
//! - Blockquote markers are always hidden.
//!
//! Each range maps to its instructions independently; lookups only ever read
//! the raw range list, never another range's resolved output.

use crate::adjacency::AdjacencyIndex;
use crate::decoration::{Attribute, Decoration};
use crate::lines::LineIndex;
use crate::range::{HeadingLevel, MarkdownRange, RangeKind};
use crate::table::TableSpans;
use crate::types::FormatInput;

/// Line height multiplier for top-level headings.
pub const H1_LINE_HEIGHT_SCALE: f32 = 1.5;

/// Visibility of a marker range for the current cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Rendered in the syntax color.
    Shown,
    /// Zero width.
    Hidden,
}

/// How a syntax range was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxClass {
    /// Borders inline content; hides by zone.
    Inline,
    /// Everything else; hides by line.
    Block,
}

/// Per-pass lookup state over one [`FormatInput`].
pub struct Resolver<'a> {
    input: FormatInput<'a>,
    lines: LineIndex,
    adjacency: AdjacencyIndex,
    tables: TableSpans,
    cursor_line: Option<usize>,
}

impl<'a> Resolver<'a> {
    pub fn new(input: FormatInput<'a>) -> Self {
        let lines = LineIndex::new(input.text);
        let adjacency = AdjacencyIndex::new(input.ranges);
        let tables = TableSpans::new(input.ranges, &lines);
        let cursor_line = input.cursor.offset.map(|offset| lines.line_of(offset));
        Self {
            input,
            lines,
            adjacency,
            tables,
            cursor_line,
        }
    }

    /// Line the cursor is on, `None` without a cursor.
    pub fn cursor_line(&self) -> Option<usize> {
        self.cursor_line
    }

    pub fn classify_syntax(&self, range: &MarkdownRange) -> SyntaxClass {
        if self.adjacency.is_adjacent_to_inline_content(range) {
            SyntaxClass::Inline
        } else {
            SyntaxClass::Block
        }
    }

    /// Visibility of a marker range, `None` for kinds that are never hidden.
    pub fn visibility(&self, range: &MarkdownRange) -> Option<Visibility> {
        match range.kind {
            RangeKind::Syntax => Some(self.syntax_visibility(range)),
            RangeKind::TableDelimiter(_) | RangeKind::TablePipe(_) => {
                Some(self.table_syntax_visibility(range))
            }
            RangeKind::BlockquoteMarker => Some(Visibility::Hidden),
            _ => None,
        }
    }

    fn syntax_visibility(&self, range: &MarkdownRange) -> Visibility {
        match self.classify_syntax(range) {
            SyntaxClass::Inline => {
                let Some(zone) = self.adjacency.zone(range, self.input.ranges) else {
                    // No zone to measure against; hiding could strand the marker.
                    return Visibility::Shown;
                };
                match self.input.cursor.offset {
                    Some(cursor) if zone.contains(cursor) => Visibility::Shown,
                    _ => Visibility::Hidden,
                }
            }
            SyntaxClass::Block => match self.cursor_line {
                Some(cursor_line) if cursor_line != self.lines.line_of(range.start) => {
                    Visibility::Hidden
                }
                _ => Visibility::Shown,
            },
        }
    }

    fn table_syntax_visibility(&self, range: &MarkdownRange) -> Visibility {
        let (Some(cursor_line), Some(span)) = (
            self.cursor_line,
            self.tables.owning_span(self.lines.line_of(range.start)),
        ) else {
            return Visibility::Hidden;
        };
        if span.contains_line(cursor_line) {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    fn marker(&self, visibility: Visibility) -> Attribute {
        match visibility {
            Visibility::Shown => Attribute::ForegroundColor(self.input.style.syntax_color),
            Visibility::Hidden => Attribute::Hidden,
        }
    }

    /// Append the instructions for one range to `out`, in application order.
    pub fn resolve_range(&self, range: &MarkdownRange, out: &mut Vec<Decoration>) {
        let style = self.input.style;
        let mut emit = |attribute: Attribute| {
            out.push(Decoration::new(range.char_range(), attribute));
        };

        match range.kind {
            RangeKind::Bold => {
                emit(Attribute::Bold);
                if let Some(color) = style.bold_color {
                    emit(Attribute::ForegroundColor(color));
                }
            }
            RangeKind::Italic => {
                emit(Attribute::Italic);
                if let Some(color) = style.italic_color {
                    emit(Attribute::ForegroundColor(color));
                }
            }
            RangeKind::Strikethrough => emit(Attribute::Strikethrough),
            RangeKind::Link => {
                emit(Attribute::Underline);
                emit(Attribute::ForegroundColor(style.link_color));
            }
            RangeKind::Emoji => {
                emit(Attribute::FontFamily(style.emoji_font_family.clone()));
                emit(Attribute::FontSize(style.emoji_font_size));
            }
            RangeKind::Mention(kind) => {
                let mention = style.mention(kind);
                emit(Attribute::ForegroundColor(mention.color));
                emit(Attribute::RoundedBackground {
                    color: mention.background,
                    radius: mention.border_radius,
                });
            }
            RangeKind::Code => {
                emit(Attribute::FontFamily(style.code_font_family.clone()));
                emit(Attribute::FontSize(style.code_font_size));
                emit(Attribute::ForegroundColor(style.code_color));
                emit(Attribute::BackgroundColor(style.code_background_color));
            }
            RangeKind::Pre => {
                emit(Attribute::FontFamily(style.pre_font_family.clone()));
                emit(Attribute::FontSize(style.pre_font_size));
                emit(Attribute::ForegroundColor(style.pre_color));
                emit(Attribute::CodeBlockBackground(style.pre_background_color));
            }
            RangeKind::Heading(level) => {
                if level == HeadingLevel::H6 {
                    emit(Attribute::Italic);
                } else {
                    emit(Attribute::Bold);
                }
                if level == HeadingLevel::H1 {
                    if let Some(line_height) = self.input.line_height {
                        emit(Attribute::LineHeight(line_height * H1_LINE_HEIGHT_SCALE));
                    }
                }
                // Size goes after line height, or the line visibly jumps.
                emit(Attribute::FontSize(style.heading_font_size(level)));
                if let Some(color) = style.heading_color(level) {
                    emit(Attribute::ForegroundColor(color));
                }
            }
            RangeKind::Blockquote { depth } => {
                emit(Attribute::BlockquoteBorder {
                    color: style.blockquote_border_color,
                    width: style.blockquote_border_width,
                    margin_left: style.blockquote_margin_left,
                    padding_left: style.blockquote_padding_left,
                    depth,
                });
                if let Some(color) = style.blockquote_text_color {
                    emit(Attribute::ForegroundColor(color));
                }
            }
            RangeKind::TaskUnchecked
            | RangeKind::TaskChecked
            | RangeKind::ListBullet
            | RangeKind::ListNumber => emit(Attribute::ForegroundColor(style.syntax_color)),
            RangeKind::HorizontalRule => {
                emit(Attribute::Strikethrough);
                emit(Attribute::ForegroundColor(style.blockquote_border_color));
            }
            RangeKind::Table(_) | RangeKind::TableCell(_) => {
                emit(Attribute::FontFamily(style.code_font_family.clone()));
                emit(Attribute::FontSize(style.code_font_size));
            }
            RangeKind::TableRow(_) => {}
            RangeKind::Syntax
            | RangeKind::BlockquoteMarker
            | RangeKind::TableDelimiter(_)
            | RangeKind::TablePipe(_) => {
                let visibility = self.visibility(range).unwrap_or(Visibility::Shown);
                emit(self.marker(visibility));
            }
        }
    }

    /// Instructions for every range, in range order.
    pub fn resolve(&self) -> Vec<Decoration> {
        let mut out = Vec::with_capacity(self.input.ranges.len() * 2);
        let trace = tracing::enabled!(target: "livemark::format", tracing::Level::TRACE);
        for range in self.input.ranges {
            let before = out.len();
            self.resolve_range(range, &mut out);
            if trace {
                tracing::trace!(
                    target: "livemark::format",
                    kind = range.kind.tag(),
                    range = ?range.char_range(),
                    emitted = out.len() - before,
                    "resolve_range"
                );
            }
        }
        out
    }
}

/// Resolve the full, ordered decoration list for one pass.
///
/// Pure: the same input always yields the same list.
pub fn resolve_decorations(input: &FormatInput<'_>) -> Vec<Decoration> {
    let resolver = Resolver::new(*input);
    let decorations = resolver.resolve();
    tracing::debug!(
        target: "livemark::format",
        ranges = input.ranges.len(),
        decorations = decorations.len(),
        hidden = decorations.iter().filter(|d| d.is_hidden()).count(),
        cursor = ?input.cursor.offset,
        cursor_line = ?resolver.cursor_line(),
        "resolved decorations"
    );
    decorations
}
