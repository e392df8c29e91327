//! livemark-editor-core: cursor-aware decoration engine for live markdown editing.
//!
//! This crate provides:
//! - `MarkdownRange` / `RangeKind` - the parser's classified spans
//! - `resolve_decorations` - pure (ranges, cursor, style) → decoration list
//! - `DecorationSurface` - clear-then-apply contract for rendering surfaces
//! - `LiveFormatter` - parse, resolve and apply in one call

pub mod adjacency;
pub mod decoration;
pub mod error;
pub mod formatter;
pub mod lines;
pub mod range;
pub mod style;
pub mod surface;
pub mod table;
pub mod types;
pub mod visibility;
pub mod wire;

pub use adjacency::{
    AdjacencyIndex, InlineZone, find_adjacent_content, is_adjacent_to_inline_content, resolve_zone,
};
pub use decoration::{Attribute, Decoration, render_decorations};
pub use error::{ParseError, StyleError};
pub use formatter::{
    FormatOutcome, LiveFormatter, MAX_PARSABLE_LENGTH, MarkdownParser, ParserVariant,
};
pub use lines::{LineIndex, line_of};
pub use range::{
    ColumnAlignment, HeadingLevel, MarkdownRange, MentionKind, RangeKind, TableMeta,
};
pub use smol_str::SmolStr;
pub use style::{Color, MarkdownStyle, MentionStyle};
pub use surface::{DecorationSurface, ForeignAnnotation, RecordingSurface, apply_pass};
pub use table::{TableLineSpan, TableSpans, find_owning_table_span};
pub use types::{CursorState, FormatInput};
pub use visibility::{Resolver, SyntaxClass, Visibility, resolve_decorations};
pub use wire::ranges_from_json;
