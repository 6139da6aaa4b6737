// src/specs/area.rs
//! An area's own page. Not row-scoped: the page is about one area, so the
//! first labelled pair anywhere is taken to be its location.

use scraper::ElementRef;

use crate::catalog::Coordinates;
use crate::error::ExtractError;
use crate::extract::read_labeled_pair;

pub fn labeled_coordinates(root: ElementRef<'_>) -> Result<Coordinates, ExtractError> {
    read_labeled_pair(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Document;

    #[test]
    fn first_pair_in_page() {
        let doc = Document::parse(
            r#"<html><body>
                 <span id="coordinates"><span class="latitude">0°9′S</span><span class="longitude">37°18′E</span></span>
                 <table class="infobox"><tr><td><span class="latitude">1°N</span><span class="longitude">1°E</span></td></tr></table>
               </body></html>"#,
        );
        let c = labeled_coordinates(doc.root()).unwrap();
        assert_eq!(c.lat_dms, "0°9′S");
        assert_eq!(c.lat, -0.15);
        assert_eq!(c.long, 37.3);
    }

    #[test]
    fn missing_or_bad_labels() {
        let doc = Document::parse("<html><body><p>No location.</p></body></html>");
        assert!(matches!(labeled_coordinates(doc.root()), Err(ExtractError::StructureNotFound(_))));

        let doc = Document::parse(
            r#"<html><body><span class="latitude">north-ish</span><span class="longitude">3°W</span></body></html>"#,
        );
        assert!(matches!(labeled_coordinates(doc.root()), Err(ExtractError::Parse(_))));
    }
}
