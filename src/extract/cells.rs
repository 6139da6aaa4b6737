// src/extract/cells.rs
//! Shared sub-protocols: the link held by a cell, and the coordinate pair held
//! by a row (or, during backfill, by a whole area page).

use scraper::ElementRef;
use tracing::debug;

use crate::catalog::Coordinates;
use crate::config::consts::{LATITUDE_CLASS, LONGITUDE_CLASS, SKIPPED_LINK_MARKERS};
use crate::core::angle::{dms_on_axis, Axis};
use crate::core::query::{attr, find_all_within, find_within, text_of, Query};
use crate::detect::has_coordinates;
use crate::error::ExtractError;

/// First anchor target in the cell that is not an image or a citation.
pub fn resolve_link(cell: ElementRef<'_>) -> Result<String, ExtractError> {
    find_all_within(cell, &Query::tag("a"))
        .into_iter()
        .filter_map(|a| attr(a, "href"))
        .find(|href| !SKIPPED_LINK_MARKERS.iter().any(|m| href.contains(m)))
        .map(String::from)
        .ok_or(ExtractError::LinkUnavailable)
}

/// [`resolve_link`], with "no link" folded into `None`.
pub fn cell_link(cell: ElementRef<'_>) -> Option<String> {
    match resolve_link(cell) {
        Ok(link) => Some(link),
        Err(e) => {
            debug!(error = %e, "link unknown");
            None
        }
    }
}

/// The latitude/longitude spans anywhere under `scope`, converted.
/// Either half failing fails the pair.
pub fn read_labeled_pair(scope: ElementRef<'_>) -> Result<Coordinates, ExtractError> {
    let lat = find_within(scope, &Query::any().class(LATITUDE_CLASS))
        .ok_or(ExtractError::StructureNotFound("latitude label"))?;
    let long = find_within(scope, &Query::any().class(LONGITUDE_CLASS))
        .ok_or(ExtractError::StructureNotFound("longitude label"))?;

    let lat_dms = s!(text_of(lat).trim());
    let long_dms = s!(text_of(long).trim());
    let lat = dms_on_axis(&lat_dms, Axis::Latitude)?;
    let long = dms_on_axis(&long_dms, Axis::Longitude)?;

    Ok(Coordinates { lat_dms, long_dms, lat, long })
}

/// Coordinates of one table row. Rows without a geocoordinate marker have none.
pub fn resolve_row_coordinates(row: ElementRef<'_>) -> Result<Coordinates, ExtractError> {
    if !has_coordinates(row) {
        return Err(ExtractError::StructureNotFound("geocoordinate marker"));
    }
    read_labeled_pair(row)
}

/// [`resolve_row_coordinates`], with every expected failure folded into `None`.
pub fn row_coordinates(row: ElementRef<'_>) -> Option<Coordinates> {
    match resolve_row_coordinates(row) {
        Ok(c) => Some(c),
        Err(ExtractError::StructureNotFound(_)) => None,
        Err(e @ ExtractError::Parse(_)) => {
            debug!(error = %e, "row coordinates unreadable");
            None
        }
        Err(e @ ExtractError::LinkUnavailable) => {
            debug!(error = %e, "unexpected error while reading row coordinates");
            None
        }
    }
}
