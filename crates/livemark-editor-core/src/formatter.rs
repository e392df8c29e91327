//! Host-facing driver tying parser, engine and surface together.
//!
//! The host calls [`LiveFormatter::format`] whenever text or cursor changes.
//! Scheduling (debouncing keystrokes, polling selection) stays with the host;
//! the formatter keeps no state that changes what a pass resolves to.

use crate::decoration::Decoration;
use crate::error::ParseError;
use crate::lines::line_of;
use crate::range::MarkdownRange;
use crate::style::MarkdownStyle;
use crate::surface::{DecorationSurface, apply_pass};
use crate::types::{CursorState, FormatInput};
use crate::visibility::resolve_decorations;

/// Texts longer than this (in chars) are left unparsed and undecorated.
pub const MAX_PARSABLE_LENGTH: usize = 500_000;

/// Selects among the parser's grammars/dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParserVariant(pub u32);

/// The external markdown parser.
pub trait MarkdownParser {
    /// Classify `text` into ranges ordered by start offset.
    fn parse(&self, text: &str, variant: ParserVariant) -> Result<Vec<MarkdownRange>, ParseError>;
}

impl<F> MarkdownParser for F
where
    F: Fn(&str, ParserVariant) -> Result<Vec<MarkdownRange>, ParseError>,
{
    fn parse(&self, text: &str, variant: ParserVariant) -> Result<Vec<MarkdownRange>, ParseError> {
        self(text, variant)
    }
}

/// What a [`LiveFormatter::format`] call did to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Cleared and re-applied this many decorations.
    Applied(usize),
    /// Resolved to exactly the set already on the surface; surface untouched.
    Unchanged,
}

/// Runs parse, resolve, clear-then-apply against one surface.
pub struct LiveFormatter<P> {
    parser: P,
    variant: ParserVariant,
    style: MarkdownStyle,
    cursor: CursorState,
    line_height: Option<f32>,
    /// What the last applied pass put on the surface.
    applied: Option<Vec<Decoration>>,
    last_cursor_line: Option<usize>,
}

impl<P: MarkdownParser> LiveFormatter<P> {
    pub fn new(parser: P, style: MarkdownStyle) -> Self {
        Self {
            parser,
            variant: ParserVariant::default(),
            style,
            cursor: CursorState::unset(),
            line_height: None,
            applied: None,
            last_cursor_line: None,
        }
    }

    pub fn style(&self) -> &MarkdownStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MarkdownStyle) {
        self.style = style;
    }

    pub fn set_parser_variant(&mut self, variant: ParserVariant) {
        self.variant = variant;
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorState) {
        self.cursor = cursor;
    }

    /// Line height the host already applies to the text, if any.
    pub fn set_line_height(&mut self, line_height: Option<f32>) {
        self.line_height = line_height;
    }

    /// Forget what is on the surface so the next pass always re-applies.
    ///
    /// Call after anything outside the formatter touched the surface's
    /// decorations, e.g. the host replaced its text storage.
    pub fn invalidate(&mut self) {
        self.applied = None;
    }

    /// Record a cursor move and report whether it changed lines.
    ///
    /// Hosts polling the selection can use this to skip passes while the
    /// cursor moves within a line. Inline zones can still change within a
    /// line, so calling [`format`](Self::format) regardless is always correct.
    pub fn cursor_line_changed(&mut self, text: &str, cursor: CursorState) -> bool {
        self.cursor = cursor;
        let line = cursor.offset.map(|offset| line_of(text, offset));
        let changed = line != self.last_cursor_line;
        self.last_cursor_line = line;
        changed
    }

    /// Resolve decorations for `text` without touching any surface.
    pub fn resolve(&self, text: &str) -> Result<Vec<Decoration>, ParseError> {
        let len = text.chars().count();
        let ranges = if len > MAX_PARSABLE_LENGTH {
            tracing::debug!(
                target: "livemark::format",
                len,
                "text exceeds parsable length, skipping parse"
            );
            Vec::new()
        } else {
            self.parser.parse(text, self.variant)?
        };
        let input = FormatInput::new(text, &ranges, self.cursor, &self.style)
            .with_line_height(self.line_height);
        Ok(resolve_decorations(&input))
    }

    /// Parse, resolve and apply to `surface`.
    ///
    /// A parse failure is returned with the surface left as it was.
    ///
    /// A pass that resolves to the same list as the last applied one is
    /// skipped without looking at `surface`, so a formatter assumes it is
    /// always handed the same surface. Call [`invalidate`](Self::invalidate)
    /// before pointing it at a different one.
    pub fn format<S: DecorationSurface + ?Sized>(
        &mut self,
        text: &str,
        surface: &mut S,
    ) -> Result<FormatOutcome, ParseError> {
        let decorations = self.resolve(text)?;
        if self.applied.as_deref() == Some(decorations.as_slice()) {
            return Ok(FormatOutcome::Unchanged);
        }
        apply_pass(surface, &decorations);
        let count = decorations.len();
        self.applied = Some(decorations);
        Ok(FormatOutcome::Applied(count))
    }
}
