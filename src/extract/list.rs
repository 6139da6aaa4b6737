// src/extract/list.rs
//! Bullet-list extractor. Items carry a name and maybe a link; coordinates
//! are left for the backfill pass.

use scraper::ElementRef;

use crate::catalog::{AreaListing, AreaRecord};
use crate::core::query::{attr, find_all_within, find_within, text_of, Query};

/// Items of `list`, optionally only those whose text contains `marker`.
pub fn read_list(list: ElementRef<'_>, marker: Option<&str>) -> AreaListing {
    let mut areas = AreaListing::new();
    for item in find_all_within(list, &Query::tag("li")) {
        let name = text_of(item);
        if marker.is_some_and(|m| !name.contains(m)) {
            continue;
        }
        let link = find_within(item, &Query::tag("a"))
            .and_then(|a| attr(a, "href"))
            .map(String::from);
        areas.insert(name, AreaRecord { link, coordinates: None });
    }
    areas
}

pub fn list(list: ElementRef<'_>) -> AreaListing {
    read_list(list, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Document;

    const UL: &str = r#"
        <ul>
          <li><a href="/wiki/Lahemaa">Lahemaa National Park</a> (1971)</li>
          <li>Kõrvemaa Nature Reserve</li>
          <li><a href="/wiki/Soomaa">Soomaa National Park</a></li>
        </ul>"#;

    #[test]
    fn every_item_in_order() {
        let doc = Document::parse(UL);
        let ul = find_within(doc.root(), &Query::tag("ul")).unwrap();
        let areas = list(ul);
        assert_eq!(areas.len(), 3);
        assert_eq!(areas["Lahemaa National Park (1971)"].link.as_deref(), Some("/wiki/Lahemaa"));
        assert_eq!(areas["Kõrvemaa Nature Reserve"].link, None);
        assert!(areas.values().all(|a| a.coordinates.is_none()));
    }

    #[test]
    fn marker_filters_items() {
        let doc = Document::parse(UL);
        let ul = find_within(doc.root(), &Query::tag("ul")).unwrap();
        let areas = read_list(ul, Some("National Park"));
        assert_eq!(areas.len(), 2);
        assert!(!areas.contains_key("Kõrvemaa Nature Reserve"));
    }
}
