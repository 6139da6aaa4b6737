// src/dispatch.rs
//! Strategy selection for one country document.
//!
//! Routes are tried in [`ROUTES`] order; the first whose predicate holds is
//! the only one run. Inside a route the override registry may swap the
//! generic extractor for a named variant, but only at the branch where that
//! variant makes sense. A route that finds nothing to read returns
//! [`ExtractError::StructureNotFound`], which [`Dispatcher::dispatch`] turns
//! into an empty mapping.

use std::fmt;

use scraper::ElementRef;
use tracing::{debug, info, warn};

use crate::catalog::AreaListing;
use crate::detect::*;
use crate::error::ExtractError;
use crate::extract::variants::apply;
use crate::extract::{list, multi_table, single_table};
use crate::overrides::{OverrideRegistry, Variant};

/// One country document and what the index said about it.
#[derive(Clone, Copy)]
pub struct Subject<'a> {
    pub name: &'a str,
    pub declared: Option<u32>,
    pub root: ElementRef<'a>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Index declares exactly one area.
    LoneArea,
    /// Several countries share the page; each has a heading with its name as id.
    SharedPage,
    /// The page has a "National park(s)" heading.
    AreaHeading,
    /// Anything else: whatever table or list the page has.
    Document,
}

pub const ROUTES: [Route; 4] = [Route::LoneArea, Route::SharedPage, Route::AreaHeading, Route::Document];

/// Extractor that produced a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    SingleTable,
    MultiTable,
    List,
    Override(Variant),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::SingleTable => f.write_str("single-table"),
            Strategy::MultiTable => f.write_str("multi-table"),
            Strategy::List => f.write_str("list"),
            Strategy::Override(v) => write!(f, "override:{v}"),
        }
    }
}

type Outcome = Result<(Strategy, AreaListing), ExtractError>;

impl Route {
    pub fn applies(self, subject: &Subject<'_>) -> bool {
        match self {
            Route::LoneArea => has_single_area(subject.declared),
            Route::SharedPage => has_entity_anchor(subject.root, subject.name),
            Route::AreaHeading => has_area_heading(subject.root),
            Route::Document => true,
        }
    }

    pub fn run(self, subject: &Subject<'_>, variant: Option<Variant>) -> Outcome {
        let root = subject.root;
        match self {
            Route::LoneArea | Route::AreaHeading => match find_area_heading(root) {
                Some(heading) => from_heading(root, heading, variant),
                None => from_document(root, variant),
            },
            Route::SharedPage => {
                let anchor = find_entity_anchor(root, subject.name)
                    .ok_or(ExtractError::StructureNotFound("country heading"))?;
                from_anchor(root, anchor, variant)
            }
            Route::Document => from_document(root, variant),
        }
    }
}

fn overridden(variant: Variant, root: ElementRef<'_>, anchor: Option<ElementRef<'_>>) -> Outcome {
    info!(%variant, "override applied");
    apply(variant, root, anchor).map(|areas| (Strategy::Override(variant), areas))
}

/// Table or list following the "National park(s)" heading.
fn from_heading(root: ElementRef<'_>, heading: ElementRef<'_>, variant: Option<Variant>) -> Outcome {
    if let Some(v @ (Variant::TableBeforeHeading | Variant::MergedFirstColumn)) = variant {
        return overridden(v, root, None);
    }

    if let Some(table) = find_table_after(heading) {
        if variant == Some(Variant::MultiTable) {
            return overridden(Variant::MultiTable, root, None);
        }
        return Ok((Strategy::SingleTable, single_table(table)));
    }

    if let Some(ul) = find_list_after(heading) {
        if let Some(v @ (Variant::AllLists | Variant::AllListsFiltered)) = variant {
            return overridden(v, root, None);
        }
        return Ok((Strategy::List, list(ul)));
    }

    Err(ExtractError::StructureNotFound("table or list after area heading"))
}

/// The country's own section of a shared page.
fn from_anchor(root: ElementRef<'_>, anchor: ElementRef<'_>, variant: Option<Variant>) -> Outcome {
    if variant == Some(Variant::ScopedTable) {
        return overridden(Variant::ScopedTable, root, Some(anchor));
    }
    match find_list_after(anchor) {
        Some(ul) => Ok((Strategy::List, list(ul))),
        None => Err(ExtractError::StructureNotFound("list after country heading")),
    }
}

/// No heading to go by: any table, else the first content list.
fn from_document(root: ElementRef<'_>, variant: Option<Variant>) -> Outcome {
    if has_table(root) {
        if has_multiple_tables(root) {
            return Ok((Strategy::MultiTable, multi_table(root)));
        }
        let table = find_table(root).ok_or(ExtractError::StructureNotFound("table"))?;
        return Ok((Strategy::SingleTable, single_table(table)));
    }

    if let Some(ul) = find_list(root) {
        if variant == Some(Variant::FilteredList) {
            return overridden(Variant::FilteredList, root, None);
        }
        return Ok((Strategy::List, list(ul)));
    }

    Err(ExtractError::StructureNotFound("no table or list in document"))
}

/// What one dispatch produced. `strategy` is `None` when nothing was read.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    pub route: Route,
    pub strategy: Option<Strategy>,
    pub areas: AreaListing,
}

pub struct Dispatcher<'r> {
    registry: &'r OverrideRegistry,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r OverrideRegistry) -> Self {
        Self { registry }
    }

    /// First applicable route, run once. Never fails: a document none of the
    /// extractors can read yields an empty mapping.
    pub fn dispatch(&self, subject: &Subject<'_>) -> Dispatch {
        let route = ROUTES
            .into_iter()
            .find(|r| r.applies(subject))
            .unwrap_or(Route::Document);
        let variant = self.registry.lookup(subject.name);
        debug!(country = subject.name, ?route, ?variant, "route selected");

        match route.run(subject, variant) {
            Ok((strategy, areas)) => {
                info!(country = subject.name, ?route, %strategy, areas = areas.len(), "extracted");
                Dispatch { route, strategy: Some(strategy), areas }
            }
            Err(ExtractError::StructureNotFound(what)) => {
                info!(country = subject.name, ?route, what, "no recognisable structure");
                Dispatch { route, strategy: None, areas: AreaListing::new() }
            }
            Err(e) => {
                warn!(country = subject.name, ?route, error = %e, "extraction failed");
                Dispatch { route, strategy: None, areas: AreaListing::new() }
            }
        }
    }
}
