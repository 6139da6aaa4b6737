// src/catalog.rs
//! Catalog data model: countries, their protected areas, and coordinates.
//!
//! Records are only ever added to or filled in. Nothing is removed; a country
//! whose page could not be read simply keeps an empty area mapping.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::consts::SITE_PATH_MARKER;
use crate::core::sanitize::{clean_area_name, normalize_ws};

/// A resolved coordinate pair. Raw and decimal halves travel together, so a
/// record can never hold one without the other.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub lat_dms: String,
    pub long_dms: String,
    pub lat: f64,
    pub long: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaRecord {
    /// Site-relative link to the area's own page.
    pub link: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// Area name → record. Names are raw cell text until merged into a country.
pub type AreaListing = BTreeMap<String, AreaRecord>;

#[derive(Clone, Debug, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    pub link: Option<String>,
    /// Count printed on the index page, when it printed one.
    pub declared_areas: Option<u32>,
    pub areas: AreaListing,
}

impl CountryRecord {
    pub fn new(name: &str, link: Option<String>, declared_areas: Option<u32>) -> Self {
        Self { name: s!(name), link, declared_areas, areas: AreaListing::new() }
    }

    /// Merge an extractor's listing. Names are cleaned here; when two raw
    /// names clean to the same key, the later one wins. A name that cleans
    /// away entirely is kept as its whitespace-normalized raw text. Only
    /// blank names are dropped.
    pub fn absorb(&mut self, listing: AreaListing) {
        for (raw, record) in listing {
            let mut name = clean_area_name(&raw);
            if name.is_empty() {
                name = normalize_ws(&raw);
                if name.is_empty() {
                    debug!(country = %self.name, "blank area name dropped");
                    continue;
                }
                debug!(country = %self.name, area = %name, "cleanup emptied name; kept raw text");
            }
            self.areas.insert(name, record);
        }
    }

    pub fn has_usable_link(&self) -> bool {
        is_usable_link(self.link.as_deref())
    }

    pub fn located(&self) -> usize {
        self.areas.values().filter(|a| a.coordinates.is_some()).count()
    }
}

/// Present and pointing inside the site (not a red link or an external one).
pub fn is_usable_link(link: Option<&str>) -> bool {
    link.is_some_and(|l| l.contains(SITE_PATH_MARKER))
}

/// Cleaned country name → record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub countries: BTreeMap<String, CountryRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// First insert wins; index pages repeat countries across regional tables.
    pub fn insert(&mut self, record: CountryRecord) -> bool {
        if self.countries.contains_key(&record.name) {
            return false;
        }
        self.countries.insert(record.name.clone(), record);
        true
    }

    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.countries.get(name)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn area_count(&self) -> usize {
        self.countries.values().map(|c| c.areas.len()).sum()
    }
}
