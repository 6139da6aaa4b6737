// src/runner.rs
//! Top-level run: index → countries → backfill → report.
//!
//! Strictly sequential. Each country's page is fetched and dispatched before
//! the next one starts; backfill runs once every country is done.

use tracing::{info, warn};

use crate::backfill::{backfill, BackfillReport};
use crate::catalog::Catalog;
use crate::config::options::RunOptions;
use crate::core::net::Fetch;
use crate::dispatch::{Dispatcher, Route, Strategy, Subject};
use crate::error::FetchError;
use crate::overrides::OverrideRegistry;
use crate::progress::Progress;
use crate::report::Report;
use crate::specs::index::read_catalog;

/// How one country's page was handled.
#[derive(Clone, Debug, PartialEq)]
pub enum CountryOutcome {
    /// Country link absent or off-site; page not fetched.
    NoLink,
    FetchFailed(String),
    Dispatched { route: Route, strategy: Option<Strategy>, areas: usize },
}

/// What a run produced.
pub struct RunSummary {
    pub catalog: Catalog,
    pub outcomes: Vec<(String, CountryOutcome)>,
    /// `None` when backfill was switched off.
    pub backfill: Option<BackfillReport>,
    pub report: Report,
}

impl RunSummary {
    pub fn fetch_failures(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, CountryOutcome::FetchFailed(_)))
            .map(|(name, _)| name.as_str())
    }
}

/// Run the whole pipeline. Only a failure to read the index is returned as
/// an error; every per-country and per-area failure is absorbed and shows up
/// in the summary instead.
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    registry: &OverrideRegistry,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, FetchError> {
    let mut catalog = {
        let index = fetcher.fetch(&opts.index_path)?;
        read_catalog(index.root())
    };

    if !opts.countries.is_empty() {
        catalog.countries.retain(|name, _| opts.wants(name));
        info!(countries = catalog.len(), "restricted to requested countries");
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(catalog.len());
    }

    let dispatcher = Dispatcher::new(registry);
    let mut outcomes = Vec::with_capacity(catalog.len());

    for country in catalog.countries.values_mut() {
        let page = match country.link.as_deref() {
            Some(link) if country.has_usable_link() => Some(fetcher.fetch(link)),
            _ => None,
        };

        let outcome = match page {
            Some(Ok(doc)) => {
                let subject = Subject { name: &country.name, declared: country.declared_areas, root: doc.root() };
                let d = dispatcher.dispatch(&subject);
                let outcome = CountryOutcome::Dispatched { route: d.route, strategy: d.strategy, areas: d.areas.len() };
                country.absorb(d.areas);
                outcome
            }
            Some(Err(e)) => {
                warn!(country = %country.name, error = %e, "country page unavailable");
                CountryOutcome::FetchFailed(e.to_string())
            }
            None => {
                info!(country = %country.name, link = ?country.link, "no usable link; skipped");
                CountryOutcome::NoLink
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&country.name);
        }
        outcomes.push((country.name.clone(), outcome));
    }

    info!(countries = catalog.len(), areas = catalog.area_count(), "country pass finished");

    let backfill = if opts.backfill {
        Some(backfill(&mut catalog, fetcher, progress.as_deref_mut().map(|p| p as &mut dyn Progress)))
    } else {
        None
    };

    let report = Report::build(&catalog, &opts.report);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { catalog, outcomes, backfill, report })
}
