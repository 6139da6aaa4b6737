// src/extract/table.rs
//! Table extractors: one table, or every qualifying table on a page.

use scraper::ElementRef;
use tracing::{debug, info};

use crate::catalog::{AreaListing, AreaRecord};
use crate::core::query::{find_all_within, text_of};
use crate::detect::table_query;
use crate::locate::{cells_of, first_data_row, has_name_column, header_cell_kind, name_column, rows_of, CellKind};

use super::cells::{cell_link, row_coordinates};

/// How the name column index is applied to data rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnShift {
    /// Same index on every row.
    None,
    /// One less on rows whose cell count differs from the header's. Covers
    /// tables whose first column is a merged (rowspan) cell that only the
    /// first row of each group carries.
    MergedFirstColumn,
}

/// Name cell of a data row. Cells of the located kind are tried first; rows
/// that have too few of them fall back to counting every cell.
fn name_cell<'a>(kind: CellKind, row: ElementRef<'a>, all: &[ElementRef<'a>], idx: usize) -> Option<ElementRef<'a>> {
    kind.cells(row).get(idx).or_else(|| all.get(idx)).copied()
}

pub fn read_table(table: ElementRef<'_>, shift: ColumnShift) -> AreaListing {
    let mut areas = AreaListing::new();

    let kind = header_cell_kind(table);
    let col = name_column(table);
    let Some(first) = first_data_row(table) else {
        debug!("no data rows; table skipped");
        return areas;
    };

    let rows = rows_of(table);
    let header_len = cells_of(rows[0]).len();
    info!(column = col, first_row = first, ?kind, ?shift, "reading table");

    for row in rows.into_iter().skip(first) {
        let all = cells_of(row);
        if all.is_empty() {
            continue;
        }

        let cell = match shift {
            ColumnShift::None => name_cell(kind, row, &all, col),
            ColumnShift::MergedFirstColumn => {
                let idx = if all.len() == header_len { col } else { col.saturating_sub(1) };
                all.get(idx).copied()
            }
        };
        let Some(cell) = cell else {
            debug!(cells = all.len(), column = col, "row too short for name column");
            continue;
        };

        let name = text_of(cell);
        let record = AreaRecord {
            link: cell_link(cell),
            coordinates: row_coordinates(row),
        };
        areas.insert(name, record);
    }

    areas
}

pub fn single_table(table: ElementRef<'_>) -> AreaListing {
    read_table(table, ColumnShift::None)
}

/// Every data table under `scope` that has a name-like header column.
/// Tables without one are taken to be unrelated (climate, statistics, ...).
/// Later tables overwrite same-named entries from earlier ones.
pub fn multi_table(scope: ElementRef<'_>) -> AreaListing {
    let mut areas = AreaListing::new();
    for (i, table) in find_all_within(scope, &table_query()).into_iter().enumerate() {
        if !has_name_column(table) {
            debug!(table = i, "no name column; table skipped");
            continue;
        }
        areas.extend(single_table(table));
    }
    areas
}
