// src/detect.rs
//! Structural detectors.
//!
//! Each `has_*` answers one yes/no question about the structure reachable from
//! a starting node; each `find_*` returns the node the question was about.
//! They never mutate and never depend on one another. The dispatcher decides
//! which answer is authoritative when several are true at once.
//!
//! `has_coordinates` is row-scoped: call it per row/item during extraction.

use scraper::ElementRef;
use tracing::debug;

use crate::config::consts::*;
use crate::core::query::{exists_after, exists_within, find_after, find_all_within, find_within, Query};

pub fn table_query() -> Query {
    Query::tag("table").class(TABLE_CLASS)
}

pub fn list_query() -> Query {
    Query::tag("ul")
}

fn area_heading_query() -> Query {
    Query::tag("span").id_pattern(regex!("[Nn]ational_[Pp]arks?").clone())
}

fn entity_anchor_query(country: &str) -> Query {
    Query::tag("span").id(country)
}

/// The index page printed exactly one area for this country.
pub fn has_single_area(declared: Option<u32>) -> bool {
    declared == Some(1)
}

/// A data table somewhere after `node` in document order.
pub fn has_table_after(node: ElementRef<'_>) -> bool {
    let found = exists_after(node, &table_query());
    debug!(found, "table after node");
    found
}

pub fn find_table_after<'a>(node: ElementRef<'a>) -> Option<ElementRef<'a>> {
    find_after(node, &table_query())
}

/// A bullet list somewhere after `node` in document order.
pub fn has_list_after(node: ElementRef<'_>) -> bool {
    let found = exists_after(node, &list_query());
    debug!(found, "list after node");
    found
}

pub fn find_list_after<'a>(node: ElementRef<'a>) -> Option<ElementRef<'a>> {
    find_after(node, &list_query())
}

/// A heading anchor whose id is exactly the country's name. Pages that cover
/// several countries carry one per country.
pub fn has_entity_anchor(root: ElementRef<'_>, country: &str) -> bool {
    let found = exists_within(root, &entity_anchor_query(country));
    debug!(country, found, "entity anchor");
    found
}

/// The element carrying the country's id, whatever its tag.
pub fn find_entity_anchor<'a>(root: ElementRef<'a>, country: &str) -> Option<ElementRef<'a>> {
    find_within(root, &Query::any().id(country))
}

/// A heading anchor labelled "National park(s)".
pub fn has_area_heading(root: ElementRef<'_>) -> bool {
    let found = exists_within(root, &area_heading_query());
    debug!(found, "area heading");
    found
}

pub fn find_area_heading<'a>(root: ElementRef<'a>) -> Option<ElementRef<'a>> {
    find_within(root, &area_heading_query())
}

/// Any data table in the document.
pub fn has_table(root: ElementRef<'_>) -> bool {
    exists_within(root, &table_query())
}

pub fn find_table<'a>(root: ElementRef<'a>) -> Option<ElementRef<'a>> {
    find_within(root, &table_query())
}

/// The page's main content region (article body, without navigation chrome).
pub fn find_main_content<'a>(root: ElementRef<'a>) -> Option<ElementRef<'a>> {
    find_within(root, &Query::any().class(MAIN_CONTENT_CLASS))
}

/// Any bullet list inside the main content region.
pub fn has_list(root: ElementRef<'_>) -> bool {
    find_list(root).is_some()
}

pub fn find_list<'a>(root: ElementRef<'a>) -> Option<ElementRef<'a>> {
    find_main_content(root).and_then(|main| find_within(main, &list_query()))
}

pub fn has_multiple_tables(root: ElementRef<'_>) -> bool {
    find_all_within(root, &table_query()).len() > 1
}

/// The row/item carries a geocoordinate span.
pub fn has_coordinates(row: ElementRef<'_>) -> bool {
    exists_within(row, &Query::tag("span").class(GEO_MARKER_CLASS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Document;

    const SHARED: &str = r#"
        <html><body><div class="mw-parser-output">
          <h2><span id="Estonia">Estonia</span></h2>
          <ul><li><a href="/wiki/Lahemaa">Lahemaa National Park</a></li></ul>
          <h2><span id="Latvia">Latvia</span></h2>
          <table class="wikitable"><tr><th>Name</th></tr></table>
          <table class="wikitable"><tr><th>Other</th></tr></table>
        </div></body></html>
    "#;

    #[test]
    fn single_area_only_for_one() {
        assert!(has_single_area(Some(1)));
        assert!(!has_single_area(Some(0)));
        assert!(!has_single_area(Some(4)));
        assert!(!has_single_area(None));
    }

    #[test]
    fn entity_anchor_and_scoped_search() {
        let doc = Document::parse(SHARED);
        let root = doc.root();
        assert!(has_entity_anchor(root, "Estonia"));
        assert!(!has_entity_anchor(root, "Lithuania"));

        let latvia = find_entity_anchor(root, "Latvia").unwrap();
        assert!(has_table_after(latvia));
        assert!(!has_list_after(latvia));

        let estonia = find_entity_anchor(root, "Estonia").unwrap();
        assert!(has_list_after(estonia));
    }

    #[test]
    fn tables_and_lists() {
        let doc = Document::parse(SHARED);
        let root = doc.root();
        assert!(has_table(root));
        assert!(has_multiple_tables(root));
        assert!(has_list(root));
        assert!(!has_area_heading(root));
    }

    #[test]
    fn list_outside_main_content_is_ignored() {
        let doc = Document::parse(r#"<html><body><ul><li>nav</li></ul><div class="mw-parser-output"><p>x</p></div></body></html>"#);
        assert!(!has_list(doc.root()));
        let doc = Document::parse(r#"<html><body><ul><li>nav</li></ul></body></html>"#);
        assert!(!has_list(doc.root()));
    }

    #[test]
    fn area_heading_variants() {
        for id in ["National_parks", "national_park", "Other_national_parks_and_reserves"] {
            let html = format!(r#"<html><body><h2><span id="{id}">x</span></h2></body></html>"#);
            let doc = Document::parse(&html);
            assert!(has_area_heading(doc.root()), "{id}");
        }
    }

    #[test]
    fn coordinates_are_row_scoped() {
        let doc = Document::parse(r#"
            <table class="wikitable">
              <tr><td>A</td><td><span class="geo-inline"><span class="latitude">1°N</span></span></td></tr>
              <tr><td>B</td><td>none</td></tr>
            </table>"#);
        let rows = find_all_within(doc.root(), &Query::tag("tr"));
        assert!(has_coordinates(rows[0]));
        assert!(!has_coordinates(rows[1]));
    }
}
