//! End-to-end behaviour of the decoration engine across cursor positions.

use livemark_editor_core::{
    Attribute, CursorState, Decoration, FormatInput, FormatOutcome, HeadingLevel, LiveFormatter,
    MarkdownRange, MarkdownStyle, ParseError, ParserVariant, RangeKind, RecordingSurface,
    Resolver, SyntaxClass, TableMeta, Visibility, apply_pass, line_of, ranges_from_json,
    render_decorations, resolve_decorations, resolve_zone,
};

fn range(kind: RangeKind, start: usize, end: usize) -> MarkdownRange {
    MarkdownRange::from_range(kind, start..end)
}

fn resolve(text: &str, ranges: &[MarkdownRange], cursor: CursorState) -> Vec<Decoration> {
    let style = MarkdownStyle::default();
    resolve_decorations(&FormatInput::new(text, ranges, cursor, &style))
}

/// `**bold** and *it* plus [link](u)\n# Heading\n- item`
fn mixed_document() -> (&'static str, Vec<MarkdownRange>) {
    let text = "**bold** and *it* plus [link](u)\n# Heading\n- item";
    let ranges = vec![
        range(RangeKind::Syntax, 0, 2),
        range(RangeKind::Bold, 2, 6),
        range(RangeKind::Syntax, 6, 8),
        range(RangeKind::Syntax, 13, 14),
        range(RangeKind::Italic, 14, 16),
        range(RangeKind::Syntax, 16, 17),
        range(RangeKind::Syntax, 23, 24),
        range(RangeKind::Link, 24, 28),
        range(RangeKind::Syntax, 28, 32),
        range(RangeKind::Syntax, 33, 35),
        range(RangeKind::Heading(HeadingLevel::H1), 35, 42),
        range(RangeKind::ListBullet, 43, 44),
    ];
    (text, ranges)
}

#[test]
fn repeated_passes_are_identical() {
    let (text, ranges) = mixed_document();
    for cursor in [None, Some(0), Some(15), Some(37), Some(999)] {
        let cursor = CursorState { offset: cursor };
        assert_eq!(resolve(text, &ranges, cursor), resolve(text, &ranges, cursor));
    }
}

#[test]
fn surface_holds_exactly_the_latest_pass() {
    let (text, ranges) = mixed_document();
    let mut surface = RecordingSurface::new();
    surface.annotate(14..16, "spellcheck");

    for offset in 0..=text.chars().count() {
        let decorations = resolve(text, &ranges, CursorState::at(offset));
        apply_pass(&mut surface, &decorations);
        assert_eq!(surface.decorations(), decorations.as_slice());
    }
    assert_eq!(surface.foreign_annotations().len(), 1);
}

#[test]
fn inline_markers_visible_exactly_inside_their_zone() {
    let (text, ranges) = mixed_document();
    let style = MarkdownStyle::default();
    let len = text.chars().count();

    for syntax in ranges.iter().filter(|r| r.is_syntax()) {
        let Some(zone) = resolve_zone(syntax, &ranges) else {
            continue;
        };
        for offset in 0..=len + 1 {
            let input = FormatInput::new(text, &ranges, CursorState::at(offset), &style);
            let resolver = Resolver::new(input);
            assert_eq!(resolver.classify_syntax(syntax), SyntaxClass::Inline);
            let expected = if zone.contains(offset) {
                Visibility::Shown
            } else {
                Visibility::Hidden
            };
            assert_eq!(
                resolver.visibility(syntax),
                Some(expected),
                "marker {:?} with cursor {offset}",
                syntax.char_range()
            );
        }
    }
}

#[test]
fn block_markers_follow_the_cursor_line() {
    let (text, ranges) = mixed_document();
    let style = MarkdownStyle::default();
    let heading_marker = ranges[9];
    let marker_line = line_of(text, heading_marker.start);
    assert_eq!(marker_line, 1);

    let mut flips = 0;
    let mut previous = None;
    for offset in 0..=text.chars().count() {
        let input = FormatInput::new(text, &ranges, CursorState::at(offset), &style);
        let resolver = Resolver::new(input);
        assert_eq!(resolver.classify_syntax(&heading_marker), SyntaxClass::Block);
        let visibility = resolver.visibility(&heading_marker);
        let expected = if line_of(text, offset) == marker_line {
            Visibility::Shown
        } else {
            Visibility::Hidden
        };
        assert_eq!(visibility, Some(expected), "cursor {offset}");
        if previous.is_some() && previous != visibility {
            flips += 1;
        }
        previous = visibility;
    }
    // Hidden on line 0, shown on line 1, hidden again on line 2.
    assert_eq!(flips, 2);
}

#[test]
fn content_styling_never_depends_on_cursor() {
    let (text, ranges) = mixed_document();
    let styling = |cursor| -> Vec<Decoration> {
        resolve(text, &ranges, cursor)
            .into_iter()
            .filter(|d| {
                !ranges
                    .iter()
                    .any(|r| r.is_syntax() && r.char_range() == d.range)
            })
            .collect()
    };
    assert_eq!(styling(CursorState::at(3)), styling(CursorState::at(40)));
    assert_eq!(styling(CursorState::unset()), styling(CursorState::at(40)));
}

#[test]
fn table_syntax_shown_only_while_editing_the_table() {
    let text = "before\n| a | b |\n| :-- | --: |\n| 1 | 2 |\nafter";
    let meta = TableMeta {
        column: None,
        alignment: None,
        column_count: 2,
    };
    let ranges = vec![
        range(RangeKind::Table(meta), 7, 41),
        range(RangeKind::TableRow(meta), 7, 16),
        range(RangeKind::TablePipe(meta), 7, 8),
        range(
            RangeKind::TableCell(TableMeta {
                column: Some(0),
                ..meta
            }),
            9,
            10,
        ),
        range(RangeKind::TablePipe(meta), 11, 12),
        range(RangeKind::TablePipe(meta), 15, 16),
        range(RangeKind::TableDelimiter(meta), 17, 30),
        // A pipe-looking range on a line no table owns.
        range(RangeKind::TablePipe(meta), 42, 43),
    ];

    for offset in 0..=text.chars().count() {
        let line = line_of(text, offset);
        let in_table = (1..=3).contains(&line);
        let decorations = resolve(text, &ranges, CursorState::at(offset));
        for d in &decorations {
            let source = ranges
                .iter()
                .find(|r| r.char_range() == d.range)
                .map(|r| r.kind);
            match source {
                Some(RangeKind::TablePipe(_)) if d.range.start == 42 => {
                    assert!(d.is_hidden(), "orphan pipe must stay hidden");
                }
                Some(RangeKind::TablePipe(_)) | Some(RangeKind::TableDelimiter(_)) => {
                    assert_eq!(!d.is_hidden(), in_table, "cursor {offset} range {:?}", d.range);
                }
                _ => assert!(!d.is_hidden()),
            }
        }
    }
}

#[test]
fn h1_line_height_always_precedes_font_size() {
    let text = "# Big\n# Bigger";
    let ranges = vec![
        range(RangeKind::Syntax, 0, 2),
        range(RangeKind::Heading(HeadingLevel::H1), 2, 5),
        range(RangeKind::Syntax, 6, 8),
        range(RangeKind::Heading(HeadingLevel::H1), 8, 14),
    ];
    let style = MarkdownStyle::default();
    for height in [12.0_f32, 17.5, 40.0] {
        let input = FormatInput::new(text, &ranges, CursorState::at(0), &style)
            .with_line_height(Some(height));
        let decorations = resolve_decorations(&input);
        for heading in ranges.iter().filter(|r| !r.is_syntax()) {
            let attrs: Vec<_> = decorations
                .iter()
                .filter(|d| d.range == heading.char_range())
                .map(|d| &d.attribute)
                .collect();
            let line_height = attrs
                .iter()
                .position(|a| **a == Attribute::LineHeight(height * 1.5));
            let size = attrs
                .iter()
                .position(|a| matches!(a, Attribute::FontSize(_)));
            assert!(line_height.is_some());
            assert!(line_height < size);
        }
    }
}

#[test]
fn formatter_over_wire_ranges() {
    fn wire_parser(text: &str, _variant: ParserVariant) -> Result<Vec<MarkdownRange>, ParseError> {
        // Stands in for the external parser: fixed output for a fixed text.
        assert_eq!(text, "# Heading\nbody");
        ranges_from_json(
            r#"[{ "type": "syntax", "start": 0, "length": 2 },
                { "type": "h1", "start": 2, "length": 7 }]"#,
        )
    }

    let mut formatter = LiveFormatter::new(wire_parser, MarkdownStyle::default());
    let mut surface = RecordingSurface::new();
    let text = "# Heading\nbody";

    formatter.set_cursor(CursorState::at(1));
    assert_eq!(
        formatter.format(text, &mut surface).unwrap(),
        FormatOutcome::Applied(3)
    );
    insta::assert_snapshot!(render_decorations(surface.decorations()), @r"
    0..2 fg #808080
    2..9 bold
    2..9 size 25
    ");

    assert!(formatter.cursor_line_changed(text, CursorState::at(12)));
    formatter.format(text, &mut surface).unwrap();
    insta::assert_snapshot!(render_decorations(surface.decorations()), @r"
    0..2 hidden
    2..9 bold
    2..9 size 25
    ");
}
