// src/extract/variants.rs
//! Extractors for the override variants. Selected only through the registry.

use scraper::ElementRef;

use crate::catalog::AreaListing;
use crate::config::consts::AREA_MARKER;
use crate::core::query::find_all_within;
use crate::detect::{find_list, find_main_content, find_table, find_table_after, list_query};
use crate::error::ExtractError;
use crate::overrides::Variant;

use super::list::read_list;
use super::table::{multi_table, read_table, single_table, ColumnShift};

fn main_content<'a>(root: ElementRef<'a>) -> Result<ElementRef<'a>, ExtractError> {
    find_main_content(root).ok_or(ExtractError::StructureNotFound("main content region"))
}

/// First content list, keeping only items that name a national park.
pub fn filtered_first_list(root: ElementRef<'_>) -> Result<AreaListing, ExtractError> {
    let list = find_list(root).ok_or(ExtractError::StructureNotFound("list in main content"))?;
    Ok(read_list(list, Some(AREA_MARKER)))
}

/// Every list in the main content region, flattened.
pub fn all_lists(root: ElementRef<'_>, marker: Option<&str>) -> Result<AreaListing, ExtractError> {
    let main = main_content(root)?;
    let mut areas = AreaListing::new();
    for list in find_all_within(main, &list_query()) {
        areas.extend(read_list(list, marker));
    }
    Ok(areas)
}

/// First table of the article body, wherever the area heading is.
pub fn table_before_heading(root: ElementRef<'_>) -> Result<AreaListing, ExtractError> {
    let main = main_content(root)?;
    let table = find_table_after(main).ok_or(ExtractError::StructureNotFound("table in main content"))?;
    Ok(single_table(table))
}

/// Table following a country's own heading on a shared page.
pub fn scoped_table(anchor: ElementRef<'_>) -> Result<AreaListing, ExtractError> {
    let table = find_table_after(anchor).ok_or(ExtractError::StructureNotFound("table after country heading"))?;
    Ok(single_table(table))
}

pub fn merged_first_column(root: ElementRef<'_>) -> Result<AreaListing, ExtractError> {
    let table = find_table(root).ok_or(ExtractError::StructureNotFound("table in document"))?;
    Ok(read_table(table, ColumnShift::MergedFirstColumn))
}

/// Run `variant` against a page. `anchor` is the country's own heading when
/// the page is shared; only [`Variant::ScopedTable`] needs it.
pub fn apply(variant: Variant, root: ElementRef<'_>, anchor: Option<ElementRef<'_>>) -> Result<AreaListing, ExtractError> {
    match variant {
        Variant::MultiTable => Ok(multi_table(root)),
        Variant::FilteredList => filtered_first_list(root),
        Variant::AllLists => all_lists(root, None),
        Variant::AllListsFiltered => all_lists(root, Some(AREA_MARKER)),
        Variant::TableBeforeHeading => table_before_heading(root),
        Variant::ScopedTable => {
            let anchor = anchor.ok_or(ExtractError::StructureNotFound("country heading"))?;
            scoped_table(anchor)
        }
        Variant::MergedFirstColumn => merged_first_column(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Document;
    use crate::detect::find_entity_anchor;

    const LISTS: &str = r#"
        <html><body><div class="mw-parser-output">
          <ul>
            <li><a href="/wiki/A">A National Park</a></li>
            <li><a href="/wiki/R">R Wildlife Reserve</a></li>
          </ul>
          <p>More</p>
          <ul>
            <li><a href="/wiki/B">B National Park</a></li>
            <li>C Marine Park</li>
          </ul>
        </div></body></html>"#;

    #[test]
    fn filtered_first_list_reads_only_first() {
        let doc = Document::parse(LISTS);
        let areas = filtered_first_list(doc.root()).unwrap();
        assert_eq!(areas.keys().collect::<Vec<_>>(), vec!["A National Park"]);
    }

    #[test]
    fn all_lists_flattens() {
        let doc = Document::parse(LISTS);
        assert_eq!(all_lists(doc.root(), None).unwrap().len(), 4);
        let filtered = all_lists(doc.root(), Some(AREA_MARKER)).unwrap();
        assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["A National Park", "B National Park"]);
    }

    #[test]
    fn table_before_heading_takes_first_content_table() {
        let doc = Document::parse(r#"
            <html><body>
              <table class="wikitable"><tr><th>Name</th></tr><tr><td>Sidebar</td></tr></table>
              <div class="mw-parser-output">
                <table class="wikitable"><tr><th>Name</th></tr><tr><td><a href="/wiki/K">Kruger</a></td></tr></table>
                <h2><span id="National_parks">National parks</span></h2>
                <table class="wikitable"><tr><th>Name</th></tr><tr><td>Later</td></tr></table>
              </div>
            </body></html>"#);
        let areas = table_before_heading(doc.root()).unwrap();
        assert_eq!(areas.keys().collect::<Vec<_>>(), vec!["Kruger"]);
    }

    #[test]
    fn scoped_table_needs_the_anchor() {
        let doc = Document::parse(r#"
            <html><body><div class="mw-parser-output">
              <h2><span id="Estonia">Estonia</span></h2>
              <table class="wikitable"><tr><th>Name</th></tr><tr><td><a href="/wiki/L">Lahemaa</a></td></tr></table>
              <h2><span id="Latvia">Latvia</span></h2>
              <table class="wikitable"><tr><th>Name</th></tr><tr><td><a href="/wiki/G">Gauja</a></td></tr></table>
            </div></body></html>"#);
        let root = doc.root();
        let latvia = find_entity_anchor(root, "Latvia");
        let areas = apply(Variant::ScopedTable, root, latvia).unwrap();
        assert_eq!(areas.keys().collect::<Vec<_>>(), vec!["Gauja"]);

        assert_eq!(
            apply(Variant::ScopedTable, root, None),
            Err(ExtractError::StructureNotFound("country heading"))
        );
    }

    #[test]
    fn missing_main_content_is_structure_not_found() {
        let doc = Document::parse("<html><body><ul><li>x National Park</li></ul></body></html>");
        assert!(matches!(all_lists(doc.root(), None), Err(ExtractError::StructureNotFound(_))));
        assert!(matches!(filtered_first_list(doc.root()), Err(ExtractError::StructureNotFound(_))));
    }
}
