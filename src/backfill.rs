// src/backfill.rs
//! Coordinate backfill: areas whose listing carried no coordinates get them
//! from their own page. One failing area never stops the pass.

use tracing::{debug, info, warn};

use crate::catalog::{is_usable_link, AreaRecord, Catalog};
use crate::core::net::Fetch;
use crate::error::ExtractError;
use crate::progress::Progress;
use crate::specs::area::labeled_coordinates;

/// What the pass did. Every area still lacking coordinates is counted in
/// exactly one of the non-`resolved` buckets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// Area pages fetched.
    pub attempted: usize,
    pub resolved: usize,
    pub fetch_failed: usize,
    /// Labels found but the angle text did not parse.
    pub unparsable: usize,
    /// Page had no latitude/longitude labels.
    pub missing: usize,
    /// Area link absent or off-site.
    pub skipped_link: usize,
    /// Owning country's link absent or off-site.
    pub skipped_country: usize,
}

impl BackfillReport {
    pub fn unresolved(&self) -> usize {
        self.fetch_failed + self.unparsable + self.missing + self.skipped_link + self.skipped_country
    }
}

pub fn backfill(catalog: &mut Catalog, fetcher: &dyn Fetch, mut progress: Option<&mut dyn Progress>) -> BackfillReport {
    let mut report = BackfillReport::default();

    let pending: usize = catalog
        .countries
        .values()
        .map(|c| c.areas.values().filter(|a| a.coordinates.is_none()).count())
        .sum();
    info!(pending, "backfill started");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pending);
    }

    for country in catalog.countries.values_mut() {
        let country_ok = country.has_usable_link();

        for (name, area) in country.areas.iter_mut() {
            if area.coordinates.is_some() {
                continue;
            }
            resolve_area(country_ok, &country.name, name, area, fetcher, &mut report);
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(name);
            }
        }
    }

    info!(
        attempted = report.attempted,
        resolved = report.resolved,
        unresolved = report.unresolved(),
        "backfill finished"
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

/// One pending area. Whatever happens lands in exactly one bucket of `report`.
fn resolve_area(
    country_ok: bool,
    country: &str,
    name: &str,
    area: &mut AreaRecord,
    fetcher: &dyn Fetch,
    report: &mut BackfillReport,
) {
    if !country_ok {
        report.skipped_country += 1;
        return;
    }
    let Some(link) = area.link.as_deref().filter(|l| is_usable_link(Some(*l))) else {
        debug!(%country, area = %name, "no usable area link");
        report.skipped_link += 1;
        return;
    };

    report.attempted += 1;
    let doc = match fetcher.fetch(link) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(area = %name, error = %e, "area page unavailable");
            report.fetch_failed += 1;
            return;
        }
    };

    match labeled_coordinates(doc.root()) {
        Ok(c) => {
            debug!(area = %name, lat = c.lat, long = c.long, "coordinates resolved");
            area.coordinates = Some(c);
            report.resolved += 1;
        }
        Err(ExtractError::Parse(e)) => {
            debug!(area = %name, error = %e, "coordinates unparsable");
            report.unparsable += 1;
        }
        Err(e) => {
            debug!(area = %name, error = %e, "no coordinates on page");
            report.missing += 1;
        }
    }
}
