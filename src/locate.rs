// src/locate.rs
//! Locators: given a table already chosen by the detectors, find where the
//! data sits inside it.
//!
//! Row 0 is always taken to be the header. Both column heuristics below are
//! tuned to the pages seen so far; unseen layouts may defeat them.

use scraper::ElementRef;
use tracing::debug;

use crate::core::query::{find_all_within, text_of, Query};

/// Element kind used for the name column of data rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// `<td>`
    Data,
    /// `<th>`; some tables style every row as a header.
    Header,
}

impl CellKind {
    fn tag(self) -> &'static str {
        match self {
            CellKind::Data => "td",
            CellKind::Header => "th",
        }
    }

    /// Cells of this kind in `row`.
    pub fn cells<'a>(self, row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        find_all_within(row, &Query::tag(self.tag()))
    }
}

pub fn rows_of<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    find_all_within(table, &Query::tag("tr"))
}

/// `<td>` and `<th>` cells of a row, in document order.
pub fn cells_of<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    find_all_within(row, &Query::any())
        .into_iter()
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect()
}

/// `Data` when the first row holds at least one `<td>`, else `Header`.
pub fn header_cell_kind(table: ElementRef<'_>) -> CellKind {
    let has_td = rows_of(table)
        .first()
        .is_some_and(|row| !CellKind::Data.cells(*row).is_empty());
    if has_td { CellKind::Data } else { CellKind::Header }
}

fn is_name_header(text: &str) -> bool {
    let patterns = [
        regex!("(?i)^name"),
        regex!("(?i)^national parks?"),
        regex!("(?i)^short name"),
    ];
    let text = text.trim();
    patterns.iter().any(|re| re.is_match(text))
}

/// Index of the first header cell that names the area column, if any.
pub fn find_name_column(table: ElementRef<'_>) -> Option<usize> {
    let header = rows_of(table).into_iter().next()?;
    cells_of(header)
        .into_iter()
        .position(|cell| is_name_header(&text_of(cell)))
}

pub fn has_name_column(table: ElementRef<'_>) -> bool {
    find_name_column(table).is_some()
}

/// Column holding the area name. Falls back to 0 when no header matches, so
/// callers may occasionally read the wrong column on unusual tables.
pub fn name_column(table: ElementRef<'_>) -> usize {
    let col = find_name_column(table);
    debug!(?col, "name column");
    col.unwrap_or(0)
}

/// First row whose cell count reaches the header's. Shorter rows in between
/// are sub-headers or spacers (the header is often short because later rows
/// use colspan). `None` means the table has no data.
pub fn first_data_row(table: ElementRef<'_>) -> Option<usize> {
    let rows = rows_of(table);
    let header_len = cells_of(*rows.first()?).len();
    rows.iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| cells_of(**row).len() >= header_len)
        .map(|(i, _)| i)
}
