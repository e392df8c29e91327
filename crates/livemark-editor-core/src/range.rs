//! Classified markdown ranges produced by the external parser.
//!
//! A range is the unit of work for the decoration engine: one span of source
//! text tagged with the construct it belongs to. Offsets are in chars
//! (Unicode scalar values), end-exclusive.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Heading level, 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Numeric level (1-based).
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Build from a 1-based level, `None` outside 1..=6.
    pub fn from_level(level: u8) -> Option<Self> {
        Some(match level {
            1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            6 => HeadingLevel::H6,
            _ => return None,
        })
    }
}

/// Which kind of mention a mention range represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionKind {
    /// `@here`
    Here,
    /// `@user`
    User,
    /// `#report`
    Report,
}

/// Column alignment declared by a table delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlignment {
    Left,
    Center,
    Right,
}

impl ColumnAlignment {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "left" => Some(ColumnAlignment::Left),
            "center" => Some(ColumnAlignment::Center),
            "right" => Some(ColumnAlignment::Right),
            _ => None,
        }
    }
}

/// Table metadata carried by table-scoped ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableMeta {
    /// Column index of a cell, `None` when the range is not a single column.
    pub column: Option<usize>,
    pub alignment: Option<ColumnAlignment>,
    /// Number of columns in the owning table (0 when unknown).
    pub column_count: usize,
}

/// The closed set of constructs the parser classifies text into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Bold,
    Italic,
    Strikethrough,
    Link,
    Emoji,
    Mention(MentionKind),
    /// Raw markdown marker characters (`**`, `#`, `` ` ``...).
    Syntax,
    Code,
    Pre,
    Heading(HeadingLevel),
    /// Blockquote body with its nesting depth.
    Blockquote { depth: usize },
    BlockquoteMarker,
    TaskUnchecked,
    TaskChecked,
    ListBullet,
    ListNumber,
    HorizontalRule,
    Table(TableMeta),
    TableRow(TableMeta),
    TableDelimiter(TableMeta),
    TableCell(TableMeta),
    TablePipe(TableMeta),
}

impl RangeKind {
    /// Stable tag used on the parser boundary.
    pub fn tag(&self) -> &'static str {
        match self {
            RangeKind::Bold => "bold",
            RangeKind::Italic => "italic",
            RangeKind::Strikethrough => "strikethrough",
            RangeKind::Link => "link",
            RangeKind::Emoji => "emoji",
            RangeKind::Mention(MentionKind::Here) => "mention-here",
            RangeKind::Mention(MentionKind::User) => "mention-user",
            RangeKind::Mention(MentionKind::Report) => "mention-report",
            RangeKind::Syntax => "syntax",
            RangeKind::Code => "code",
            RangeKind::Pre => "pre",
            RangeKind::Heading(HeadingLevel::H1) => "h1",
            RangeKind::Heading(HeadingLevel::H2) => "h2",
            RangeKind::Heading(HeadingLevel::H3) => "h3",
            RangeKind::Heading(HeadingLevel::H4) => "h4",
            RangeKind::Heading(HeadingLevel::H5) => "h5",
            RangeKind::Heading(HeadingLevel::H6) => "h6",
            RangeKind::Blockquote { .. } => "blockquote",
            RangeKind::BlockquoteMarker => "blockquote-marker",
            RangeKind::TaskUnchecked => "task-unchecked",
            RangeKind::TaskChecked => "task-checked",
            RangeKind::ListBullet => "list-bullet",
            RangeKind::ListNumber => "list-number",
            RangeKind::HorizontalRule => "hr",
            RangeKind::Table(_) => "table",
            RangeKind::TableRow(_) => "table-row",
            RangeKind::TableDelimiter(_) => "table-delimiter",
            RangeKind::TableCell(_) => "table-cell",
            RangeKind::TablePipe(_) => "table-pipe",
        }
    }

    /// Parse a boundary tag. `depth` feeds blockquotes, `table` feeds the
    /// table-scoped kinds; both are ignored by the other kinds.
    pub fn from_tag(tag: &str, depth: usize, table: TableMeta) -> Option<Self> {
        let kind = match tag {
            "bold" => RangeKind::Bold,
            "italic" => RangeKind::Italic,
            "strikethrough" => RangeKind::Strikethrough,
            "link" => RangeKind::Link,
            "emoji" => RangeKind::Emoji,
            "mention-here" => RangeKind::Mention(MentionKind::Here),
            "mention-user" => RangeKind::Mention(MentionKind::User),
            "mention-report" => RangeKind::Mention(MentionKind::Report),
            "syntax" => RangeKind::Syntax,
            "code" => RangeKind::Code,
            "pre" => RangeKind::Pre,
            "blockquote" => RangeKind::Blockquote { depth },
            "blockquote-marker" => RangeKind::BlockquoteMarker,
            "task-unchecked" => RangeKind::TaskUnchecked,
            "task-checked" => RangeKind::TaskChecked,
            "list-bullet" => RangeKind::ListBullet,
            "list-number" => RangeKind::ListNumber,
            "hr" => RangeKind::HorizontalRule,
            "table" => RangeKind::Table(table),
            "table-row" => RangeKind::TableRow(table),
            "table-delimiter" => RangeKind::TableDelimiter(table),
            "table-cell" => RangeKind::TableCell(table),
            "table-pipe" => RangeKind::TablePipe(table),
            heading => {
                let level = heading.strip_prefix('h')?.parse::<u8>().ok()?;
                RangeKind::Heading(HeadingLevel::from_level(level)?)
            }
        };
        Some(kind)
    }

    /// Content kinds whose markers hide by cursor zone rather than by line.
    pub fn is_inline_content(&self) -> bool {
        matches!(
            self,
            RangeKind::Bold | RangeKind::Italic | RangeKind::Strikethrough | RangeKind::Link
        )
    }

    /// Table metadata, if this is a table-scoped kind.
    pub fn table_meta(&self) -> Option<&TableMeta> {
        match self {
            RangeKind::Table(meta)
            | RangeKind::TableRow(meta)
            | RangeKind::TableDelimiter(meta)
            | RangeKind::TableCell(meta)
            | RangeKind::TablePipe(meta) => Some(meta),
            _ => None,
        }
    }
}

/// One classified span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownRange {
    pub kind: RangeKind,
    pub start: usize,
    /// Exclusive. Always `start + length`.
    pub end: usize,
}

impl MarkdownRange {
    pub fn new(kind: RangeKind, start: usize, length: usize) -> Self {
        Self {
            kind,
            start,
            end: start + length,
        }
    }

    /// Build from a char range. Inverted ranges collapse to empty at `start`.
    pub fn from_range(kind: RangeKind, range: Range<usize>) -> Self {
        Self::new(kind, range.start, range.end.saturating_sub(range.start))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn char_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Blockquote nesting depth, 0 for every other kind.
    pub fn depth(&self) -> usize {
        match self.kind {
            RangeKind::Blockquote { depth } => depth,
            _ => 0,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == RangeKind::Syntax
    }
}
