//! Range lists as they cross the parser boundary.
//!
//! The parser runs outside this crate and hands its output over as a JSON
//! array of objects:
//!
//! ```json
//! [{ "type": "syntax", "start": 0, "length": 2 },
//!  { "type": "table-cell", "start": 2, "length": 1, "depth": 0,
//!    "tableColumn": 0, "tableAlignment": "center", "tableColumnCount": 2 }]
//! ```
//!
//! `tableColumn` of `-1` (or absent) means "not a single column".

use serde::Deserialize;

use crate::error::ParseError;
use crate::range::{ColumnAlignment, MarkdownRange, RangeKind, TableMeta};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRange {
    #[serde(rename = "type")]
    kind: String,
    start: usize,
    length: usize,
    #[serde(default)]
    depth: usize,
    #[serde(default)]
    table_column: Option<i64>,
    #[serde(default)]
    table_alignment: Option<String>,
    #[serde(default)]
    table_column_count: usize,
}

impl WireRange {
    fn into_range(self) -> Option<MarkdownRange> {
        let table = TableMeta {
            column: self
                .table_column
                .and_then(|column| usize::try_from(column).ok()),
            alignment: self
                .table_alignment
                .as_deref()
                .and_then(ColumnAlignment::from_tag),
            column_count: self.table_column_count,
        };
        let kind = RangeKind::from_tag(&self.kind, self.depth, table)?;
        Some(MarkdownRange::new(kind, self.start, self.length))
    }
}

/// Decode a parser range list. Ranges with unknown types are dropped.
pub fn ranges_from_json(json: &str) -> Result<Vec<MarkdownRange>, ParseError> {
    let wire: Vec<WireRange> = serde_json::from_str(json)?;
    let total = wire.len();
    let ranges: Vec<MarkdownRange> = wire
        .into_iter()
        .filter_map(|range| {
            let tag = range.kind.clone();
            let decoded = range.into_range();
            if decoded.is_none() {
                tracing::debug!(target: "livemark::wire", tag = %tag, "skipping range with unknown type");
            }
            decoded
        })
        .collect();
    tracing::trace!(
        target: "livemark::wire",
        total,
        kept = ranges.len(),
        "decoded range list"
    );
    Ok(ranges)
}
