//! Core engine inputs: cursor state and the per-pass input bundle.

use crate::range::MarkdownRange;
use crate::style::MarkdownStyle;

/// Cursor position for one pass.
///
/// Only a single caret is modeled. `None` means the input has no cursor,
/// e.g. it is not focused.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    /// Character offset in text (NOT byte offset!)
    pub offset: Option<usize>,
}

impl CursorState {
    /// Create a cursor at the given offset.
    pub fn at(offset: usize) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    /// No cursor.
    pub fn unset() -> Self {
        Self { offset: None }
    }

    /// Convert a host position where any negative value means "no cursor".
    pub fn from_sentinel(position: i64) -> Self {
        Self {
            offset: usize::try_from(position).ok(),
        }
    }

    pub fn is_set(&self) -> bool {
        self.offset.is_some()
    }
}

/// Everything one resolution pass reads. All fields are borrowed snapshots.
#[derive(Clone, Copy, Debug)]
pub struct FormatInput<'a> {
    /// Full source text, for line lookups.
    pub text: &'a str,
    /// Parser output, ordered by `start`.
    pub ranges: &'a [MarkdownRange],
    pub cursor: CursorState,
    pub style: &'a MarkdownStyle,
    /// Line height already applied to the text by the host, if any.
    /// Top-level headings scale it.
    pub line_height: Option<f32>,
}

impl<'a> FormatInput<'a> {
    pub fn new(
        text: &'a str,
        ranges: &'a [MarkdownRange],
        cursor: CursorState,
        style: &'a MarkdownStyle,
    ) -> Self {
        Self {
            text,
            ranges,
            cursor,
            style,
            line_height: None,
        }
    }

    pub fn with_line_height(mut self, line_height: Option<f32>) -> Self {
        self.line_height = line_height;
        self
    }
}
