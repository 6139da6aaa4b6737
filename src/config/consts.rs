// src/config/consts.rs

// Site
pub const ORIGIN: &str = "https://en.wikipedia.org";
pub const INDEX_PATH: &str = "/wiki/List_of_national_parks";
/// Links that do not contain this are red links or off-site.
pub const SITE_PATH_MARKER: &str = "/wiki/";

// Page structure
pub const MAIN_CONTENT_CLASS: &str = "mw-parser-output";
pub const TABLE_CLASS: &str = "wikitable";
pub const GEO_MARKER_CLASS: &str = "geo-inline";
pub const LATITUDE_CLASS: &str = "latitude";
pub const LONGITUDE_CLASS: &str = "longitude";
/// Literal an item must contain to survive protected-area filtering.
pub const AREA_MARKER: &str = "National Park";
/// Anchor targets containing any of these are never an area's link.
pub const SKIPPED_LINK_MARKERS: [&str; 2] = [".jpg", "cite_note"];

// Net
pub const TIMEOUT_SECS: u64 = 20;
pub const RETRIES: u32 = 2;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Report
pub const HIGH_PCT: f64 = 105.0;
pub const LOW_PCT: f64 = 50.0;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FOUND_FILE: &str = "final.csv";
pub const MISSING_FILE: &str = "missing_coordinates.csv";
pub const SUMMARY_FILE: &str = "summary.csv";
