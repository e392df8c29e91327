//! Table ownership and line spans for delimiter and pipe visibility.

use crate::lines::LineIndex;
use crate::range::{MarkdownRange, RangeKind};

/// Inclusive line interval occupied by a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLineSpan {
    pub start_line: usize,
    pub end_line: usize,
}

impl TableLineSpan {
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

/// Line span of the first table range whose lines contain `member`'s line.
///
/// A table's span runs from the line of its first char to the line of its
/// last char. `None` means no table owns the member.
pub fn find_owning_table_span(
    member: &MarkdownRange,
    ranges: &[MarkdownRange],
    lines: &LineIndex,
) -> Option<TableLineSpan> {
    let member_line = lines.line_of(member.start);
    table_spans(ranges, lines).find(|span| span.contains_line(member_line))
}

fn table_spans<'a>(
    ranges: &'a [MarkdownRange],
    lines: &'a LineIndex,
) -> impl Iterator<Item = TableLineSpan> + 'a {
    ranges
        .iter()
        .filter(|range| matches!(range.kind, RangeKind::Table(_)))
        .map(|table| {
            let (start_line, end_line) = lines.line_span(table.start, table.end);
            TableLineSpan {
                start_line,
                end_line,
            }
        })
}

/// Table spans of one range list, computed once per pass, in range order.
#[derive(Debug, Default)]
pub struct TableSpans {
    spans: Vec<TableLineSpan>,
}

impl TableSpans {
    pub fn new(ranges: &[MarkdownRange], lines: &LineIndex) -> Self {
        Self {
            spans: table_spans(ranges, lines).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Same answer as [`find_owning_table_span`] for a member on `member_line`.
    pub fn owning_span(&self, member_line: usize) -> Option<TableLineSpan> {
        self.spans
            .iter()
            .copied()
            .find(|span| span.contains_line(member_line))
    }
}
