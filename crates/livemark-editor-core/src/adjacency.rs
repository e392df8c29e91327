//! Adjacency between syntax markers and inline formatted content.
//!
//! A syntax range `S` is adjacent to a content range `C` when `S.end == C.start`
//! (opening marker) or `C.end == S.start` (closing marker). Only bold, italic,
//! strikethrough and link ranges count as content here.
//!
//! Every lookup resolves ties by range order: the first matching range in the
//! list wins. That holds for the content lookup and for both marker lookups
//! when reconstructing a zone.

use std::collections::HashMap;

use crate::range::MarkdownRange;

/// The full span of an inline construct: opening marker, content, closing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineZone {
    pub start: usize,
    pub end: usize,
}

impl InlineZone {
    /// Whether a cursor at `offset` is editing this construct.
    ///
    /// Both ends are inclusive: a cursor sitting right after the closing
    /// marker still counts as inside.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

fn is_adjacent(syntax: &MarkdownRange, content: &MarkdownRange) -> bool {
    syntax.end == content.start || content.end == syntax.start
}

/// First inline content range adjacent to `syntax`, in range order.
pub fn find_adjacent_content<'r>(
    syntax: &MarkdownRange,
    ranges: &'r [MarkdownRange],
) -> Option<&'r MarkdownRange> {
    ranges
        .iter()
        .find(|range| range.kind.is_inline_content() && is_adjacent(syntax, range))
}

/// Whether `syntax` borders any inline content range.
pub fn is_adjacent_to_inline_content(syntax: &MarkdownRange, ranges: &[MarkdownRange]) -> bool {
    find_adjacent_content(syntax, ranges).is_some()
}

/// Zone of the inline construct `syntax` belongs to, or `None` when it borders
/// no inline content.
pub fn resolve_zone(syntax: &MarkdownRange, ranges: &[MarkdownRange]) -> Option<InlineZone> {
    let content = find_adjacent_content(syntax, ranges)?;
    let opening = ranges
        .iter()
        .find(|range| range.is_syntax() && range.end == content.start);
    let closing = ranges
        .iter()
        .find(|range| range.is_syntax() && range.start == content.end);
    Some(InlineZone {
        start: opening.map_or(content.start, |open| open.start),
        end: closing.map_or(content.end, |close| close.end),
    })
}

/// Boundary lookups over one range list, built once per pass.
///
/// Answers the same questions as [`find_adjacent_content`] and
/// [`resolve_zone`] without rescanning the list for every syntax range.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    /// First inline content index starting at an offset.
    content_by_start: HashMap<usize, usize>,
    /// First inline content index ending at an offset.
    content_by_end: HashMap<usize, usize>,
    /// First syntax index ending at an offset.
    syntax_by_end: HashMap<usize, usize>,
    /// First syntax index starting at an offset.
    syntax_by_start: HashMap<usize, usize>,
}

impl AdjacencyIndex {
    pub fn new(ranges: &[MarkdownRange]) -> Self {
        let mut index = Self::default();
        for (i, range) in ranges.iter().enumerate() {
            if range.kind.is_inline_content() {
                index.content_by_start.entry(range.start).or_insert(i);
                index.content_by_end.entry(range.end).or_insert(i);
            } else if range.is_syntax() {
                index.syntax_by_end.entry(range.end).or_insert(i);
                index.syntax_by_start.entry(range.start).or_insert(i);
            }
        }
        index
    }

    /// Index into the range list of the first content range adjacent to `syntax`.
    fn adjacent_content(&self, syntax: &MarkdownRange) -> Option<usize> {
        let opening_of = self.content_by_start.get(&syntax.end).copied();
        let closing_of = self.content_by_end.get(&syntax.start).copied();
        match (opening_of, closing_of) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn is_adjacent_to_inline_content(&self, syntax: &MarkdownRange) -> bool {
        self.adjacent_content(syntax).is_some()
    }

    /// `ranges` must be the list this index was built from.
    pub fn zone(&self, syntax: &MarkdownRange, ranges: &[MarkdownRange]) -> Option<InlineZone> {
        let content = ranges.get(self.adjacent_content(syntax)?)?;
        let start = self
            .syntax_by_end
            .get(&content.start)
            .and_then(|&i| ranges.get(i))
            .map_or(content.start, |open| open.start);
        let end = self
            .syntax_by_start
            .get(&content.end)
            .and_then(|&i| ranges.get(i))
            .map_or(content.end, |close| close.end);
        Some(InlineZone { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeKind;

    fn syntax(start: usize, end: usize) -> MarkdownRange {
        MarkdownRange::from_range(RangeKind::Syntax, start..end)
    }

    /// `**bold** text`
    fn bold_ranges() -> Vec<MarkdownRange> {
        vec![
            syntax(0, 2),
            MarkdownRange::from_range(RangeKind::Bold, 2..6),
            syntax(6, 8),
        ]
    }

    #[test]
    fn test_opening_and_closing_markers_are_adjacent() {
        let ranges = bold_ranges();
        assert!(is_adjacent_to_inline_content(&ranges[0], &ranges));
        assert!(is_adjacent_to_inline_content(&ranges[2], &ranges));
    }

    #[test]
    fn test_heading_marker_is_not_inline() {
        // `# Heading`
        let ranges = vec![
            syntax(0, 2),
            MarkdownRange::from_range(RangeKind::Heading(crate::range::HeadingLevel::H1), 2..9),
        ];
        assert!(!is_adjacent_to_inline_content(&ranges[0], &ranges));
        assert_eq!(resolve_zone(&ranges[0], &ranges), None);
    }

    #[test]
    fn test_zone_spans_both_markers() {
        let ranges = bold_ranges();
        let zone = InlineZone { start: 0, end: 8 };
        assert_eq!(resolve_zone(&ranges[0], &ranges), Some(zone));
        assert_eq!(resolve_zone(&ranges[2], &ranges), Some(zone));
        assert!(zone.contains(0));
        assert!(zone.contains(8));
        assert!(!zone.contains(9));
    }

    #[test]
    fn test_zone_without_closing_marker() {
        // `[link` with only an opening bracket recognised
        let ranges = vec![
            syntax(0, 1),
            MarkdownRange::from_range(RangeKind::Link, 1..5),
        ];
        assert_eq!(
            resolve_zone(&ranges[0], &ranges),
            Some(InlineZone { start: 0, end: 5 })
        );
    }

    #[test]
    fn test_first_candidate_marker_wins() {
        // Two syntax ranges both end where the content starts.
        let ranges = vec![
            syntax(1, 3),
            syntax(0, 3),
            MarkdownRange::from_range(RangeKind::Italic, 3..7),
            syntax(7, 8),
            syntax(7, 10),
        ];
        let expected = Some(InlineZone { start: 1, end: 8 });
        assert_eq!(resolve_zone(&ranges[3], &ranges), expected);

        let index = AdjacencyIndex::new(&ranges);
        assert_eq!(index.zone(&ranges[3], &ranges), expected);
    }

    #[test]
    fn test_first_adjacent_content_wins() {
        // `*a**b*`-like layout: the marker closes one range and opens another.
        let ranges = vec![
            MarkdownRange::from_range(RangeKind::Italic, 0..2),
            syntax(2, 4),
            MarkdownRange::from_range(RangeKind::Bold, 4..9),
            syntax(9, 11),
        ];
        assert_eq!(find_adjacent_content(&ranges[1], &ranges), Some(&ranges[0]));
        let index = AdjacencyIndex::new(&ranges);
        assert_eq!(
            index.zone(&ranges[1], &ranges),
            resolve_zone(&ranges[1], &ranges)
        );
        assert_eq!(
            index.zone(&ranges[1], &ranges),
            Some(InlineZone { start: 0, end: 4 })
        );
    }

    #[test]
    fn test_index_matches_linear_lookups() {
        let ranges = vec![
            syntax(0, 2),
            MarkdownRange::from_range(RangeKind::Bold, 2..6),
            syntax(6, 8),
            syntax(9, 10),
            MarkdownRange::from_range(RangeKind::Code, 10..14),
            syntax(14, 15),
            syntax(16, 17),
            MarkdownRange::from_range(RangeKind::Link, 17..21),
            syntax(21, 23),
        ];
        let index = AdjacencyIndex::new(&ranges);
        for range in ranges.iter().filter(|r| r.is_syntax()) {
            assert_eq!(
                index.is_adjacent_to_inline_content(range),
                is_adjacent_to_inline_content(range, &ranges)
            );
            assert_eq!(index.zone(range, &ranges), resolve_zone(range, &ranges));
        }
    }
}
