// src/specs/index.rs
//! Spec for the top-level index page (list of national parks by country).
//!
//! Every `table.wikitable` row with data cells is one country:
//! - cell 0: country name; the first anchor in it is the country's page.
//! - cell 2: declared number of parks. Blank means none.
//!
//! Regional tables repeat some countries; the first row seen wins.

use scraper::ElementRef;
use tracing::{debug, info};

use crate::catalog::{Catalog, CountryRecord};
use crate::core::query::{attr, find_all_within, find_within, text_of, Query};
use crate::core::sanitize::{clean_country_name, normalize_ws};
use crate::detect::table_query;

const NAME_CELL: usize = 0;
const COUNT_CELL: usize = 2;

/// Declared count as printed. Footnote markers are dropped, blank is 0, and
/// anything else non-numeric is unknown.
pub fn parse_count(text: &str) -> Option<u32> {
    let cleaned = clean_country_name(text);
    let cleaned = cleaned.replace(',', "");
    if cleaned.is_empty() {
        return Some(0);
    }
    cleaned.parse().ok()
}

pub fn read_catalog(root: ElementRef<'_>) -> Catalog {
    let mut catalog = Catalog::new();
    let td = Query::tag("td");

    for table in find_all_within(root, &table_query()) {
        for row in find_all_within(table, &Query::tag("tr")) {
            let cells = find_all_within(row, &td);
            let Some(cell) = cells.get(NAME_CELL) else {
                continue;
            };

            let name = clean_country_name(&normalize_ws(&text_of(*cell)));
            if name.is_empty() {
                continue;
            }
            let link = find_within(*cell, &Query::tag("a"))
                .and_then(|a| attr(a, "href"))
                .map(String::from);
            let declared = cells.get(COUNT_CELL).and_then(|c| parse_count(&text_of(*c)));

            if !catalog.insert(CountryRecord::new(&name, link, declared)) {
                debug!(country = %name, "repeated in index; first row kept");
            }
        }
    }

    info!(countries = catalog.len(), "index read");
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Document;

    const INDEX: &str = r#"
        <html><body><div class="mw-parser-output">
          <table class="wikitable">
            <tr><th>Country</th><th>Region</th><th>Parks</th></tr>
            <tr><td><a href="/wiki/National_parks_of_Kenya">Kenya</a></td><td>Africa</td><td>23</td></tr>
            <tr><td><span class="flag"></span><a href="/wiki/Chad_parks">Chad</a>[a]</td><td>Africa</td><td>3[1]</td></tr>
            <tr><td><a href="/w/index.php?title=Parks_of_Nowhere&amp;redlink=1">Nowhere</a></td><td>-</td><td></td></tr>
            <tr><td>Atlantis</td><td>-</td><td>several</td></tr>
            <tr><td>Short row</td></tr>
          </table>
          <table class="wikitable">
            <tr><td><a href="/wiki/Other_Kenya">Kenya</a></td><td>Africa</td><td>99</td></tr>
          </table>
        </div></body></html>"#;

    #[test]
    fn counts() {
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count(" 7\n"), Some(7));
        assert_eq!(parse_count("3[1]"), Some(3));
        assert_eq!(parse_count("1,204"), Some(1204));
        assert_eq!(parse_count(""), Some(0));
        assert_eq!(parse_count("n/a"), None);
    }

    #[test]
    fn reads_countries_links_and_counts() {
        let doc = Document::parse(INDEX);
        let cat = read_catalog(doc.root());
        assert_eq!(cat.len(), 5);

        let kenya = cat.get("Kenya").unwrap();
        assert_eq!(kenya.link.as_deref(), Some("/wiki/National_parks_of_Kenya"));
        assert_eq!(kenya.declared_areas, Some(23));

        let chad = cat.get("Chad").unwrap();
        assert_eq!(chad.link.as_deref(), Some("/wiki/Chad_parks"));
        assert_eq!(chad.declared_areas, Some(3));

        let nowhere = cat.get("Nowhere").unwrap();
        assert_eq!(nowhere.declared_areas, Some(0));
        assert!(!nowhere.has_usable_link());

        let atlantis = cat.get("Atlantis").unwrap();
        assert_eq!(atlantis.link, None);
        assert_eq!(atlantis.declared_areas, None);

        assert_eq!(cat.get("Short row").unwrap().declared_areas, None);
    }
}
