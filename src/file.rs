// src/file.rs
//! CSV export of a finished catalog.
//!
//! Three files land in the output directory:
//! - `final.csv`: areas with coordinates.
//! - `missing_coordinates.csv`: areas without. Same columns.
//! - `summary.csv`: declared vs located per country.
//!
//! Unknown values are empty cells. Area links are written absolute.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::info;

use crate::catalog::{AreaRecord, Catalog};
use crate::config::consts::{FOUND_FILE, MISSING_FILE, SUMMARY_FILE};
use crate::core::net::absolute_url;
use crate::error::ExportError;

pub const AREA_HEADERS: [&str; 7] = ["country", "national_park_name", "park_url", "lat_dms", "long_dms", "lat_dec", "long_dec"];
pub const SUMMARY_HEADERS: [&str; 3] = ["country", "number_of_parks_listed", "number_of_parks_scraped"];

#[derive(Debug, Serialize)]
pub struct AreaRow<'a> {
    pub country: &'a str,
    pub national_park_name: &'a str,
    pub park_url: Option<String>,
    pub lat_dms: Option<&'a str>,
    pub long_dms: Option<&'a str>,
    pub lat_dec: Option<f64>,
    pub long_dec: Option<f64>,
}

impl<'a> AreaRow<'a> {
    fn new(country: &'a str, name: &'a str, area: &'a AreaRecord) -> Self {
        let c = area.coordinates.as_ref();
        Self {
            country,
            national_park_name: name,
            park_url: area.link.as_deref().map(absolute_url),
            lat_dms: c.map(|c| c.lat_dms.as_str()),
            long_dms: c.map(|c| c.long_dms.as_str()),
            lat_dec: c.map(|c| c.lat),
            long_dec: c.map(|c| c.long),
        }
    }

    pub fn is_located(&self) -> bool {
        self.lat_dec.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryRow<'a> {
    pub country: &'a str,
    pub number_of_parks_listed: Option<u32>,
    pub number_of_parks_scraped: usize,
}

/// Every area in catalog order, split into (located, not located).
pub fn area_rows(catalog: &Catalog) -> (Vec<AreaRow<'_>>, Vec<AreaRow<'_>>) {
    catalog
        .countries
        .values()
        .flat_map(|c| c.areas.iter().map(move |(name, area)| AreaRow::new(&c.name, name, area)))
        .partition(|row| row.is_located())
}

pub fn summary_rows(catalog: &Catalog) -> Vec<SummaryRow<'_>> {
    catalog
        .countries
        .values()
        .map(|c| SummaryRow {
            country: &c.name,
            number_of_parks_listed: c.declared_areas,
            number_of_parks_scraped: c.located(),
        })
        .collect()
}

/// Header line, then one record per row. The header is written even when
/// there are no rows.
pub fn write_rows<W: Write, R: Serialize>(out: W, headers: &[&str], rows: &[R]) -> Result<(), csv::Error> {
    let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    w.write_record(headers)?;
    for row in rows {
        w.serialize(row)?;
    }
    w.flush()?;
    Ok(())
}

fn write_file<R: Serialize>(path: &Path, headers: &[&str], rows: &[R]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    write_rows(file, headers, rows).map_err(|source| ExportError::Csv { path: path.to_path_buf(), source })
}

/// Write all three files into `out_dir` (created if missing).
/// Returns the paths written, in the order listed above.
pub fn export(catalog: &Catalog, out_dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    ensure_directory(out_dir)?;

    let (found, missing) = area_rows(catalog);
    let summary = summary_rows(catalog);

    let found_path = out_dir.join(FOUND_FILE);
    let missing_path = out_dir.join(MISSING_FILE);
    let summary_path = out_dir.join(SUMMARY_FILE);

    write_file(&found_path, &AREA_HEADERS, &found)?;
    write_file(&missing_path, &AREA_HEADERS, &missing)?;
    write_file(&summary_path, &SUMMARY_HEADERS, &summary)?;

    info!(dir = %out_dir.display(), located = found.len(), unlocated = missing.len(), "exported");
    Ok(vec![found_path, missing_path, summary_path])
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Coordinates, CountryRecord};

    fn catalog() -> Catalog {
        let mut kenya = CountryRecord::new("Kenya", Some(s!("/wiki/Kenya")), Some(3));
        kenya.areas.insert(
            s!("Tsavo East"),
            AreaRecord {
                link: Some(s!("/wiki/Tsavo_East")),
                coordinates: Some(Coordinates { lat_dms: s!("2°46′S"), long_dms: s!("38°46′E"), lat: -2.766667, long: 38.766667 }),
            },
        );
        kenya.areas.insert(s!("Unlinked, Park"), AreaRecord::default());
        let mut cat = Catalog::new();
        cat.insert(kenya);
        cat.insert(CountryRecord::new("Chad", None, None));
        cat
    }

    #[test]
    fn rows_split_on_coordinates() {
        let cat = catalog();
        let (found, missing) = area_rows(&cat);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].park_url.as_deref(), Some("https://en.wikipedia.org/wiki/Tsavo_East"));
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].park_url, None);
    }

    #[test]
    fn csv_layout() {
        let cat = catalog();
        let (found, missing) = area_rows(&cat);

        let mut buf = Vec::new();
        write_rows(&mut buf, &AREA_HEADERS, &found).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "country,national_park_name,park_url,lat_dms,long_dms,lat_dec,long_dec\n\
             Kenya,Tsavo East,https://en.wikipedia.org/wiki/Tsavo_East,2°46′S,38°46′E,-2.766667,38.766667\n"
        );

        let mut buf = Vec::new();
        write_rows(&mut buf, &AREA_HEADERS, &missing).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("Kenya,\"Unlinked, Park\",,,,,\n"));

        let mut buf = Vec::new();
        write_rows(&mut buf, &SUMMARY_HEADERS, &summary_rows(&cat)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "country,number_of_parks_listed,number_of_parks_scraped\nChad,,0\nKenya,3,1\n");
    }

    #[test]
    fn empty_rows_still_get_headers() {
        let mut buf = Vec::new();
        write_rows::<_, SummaryRow>(&mut buf, &SUMMARY_HEADERS, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "country,number_of_parks_listed,number_of_parks_scraped\n");
    }

    #[test]
    fn export_writes_three_files() {
        let dir = std::env::temp_dir().join(format!("np_scrape_export_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let written = export(&catalog(), &dir).unwrap();
        assert_eq!(written.len(), 3);
        for p in &written {
            assert!(p.is_file(), "{}", p.display());
        }
        assert!(written[0].ends_with(FOUND_FILE));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_refuses_file_as_dir() {
        let path = std::env::temp_dir().join(format!("np_scrape_not_a_dir_{}", std::process::id()));
        fs::write(&path, "x").unwrap();
        assert!(matches!(export(&catalog(), &path), Err(ExportError::NotADirectory(_))));
        let _ = fs::remove_file(&path);
    }
}
