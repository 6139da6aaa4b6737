// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    /// Site-relative link of the country index page.
    pub index_path: String,
    /// Restrict the run to these cleaned country names. Empty = all.
    pub countries: Vec<String>,
    pub backfill: bool,
    pub timeout_secs: u64,
    pub retries: u32,
    pub pause_ms: u64,
    pub report: ReportOptions,
    pub out_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            index_path: s!(INDEX_PATH),
            countries: Vec::new(),
            backfill: true,
            timeout_secs: TIMEOUT_SECS,
            retries: RETRIES,
            pause_ms: REQUEST_PAUSE_MS,
            report: ReportOptions::default(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl RunOptions {
    pub fn wants(&self, country: &str) -> bool {
        self.countries.is_empty() || self.countries.iter().any(|c| c == country)
    }
}

/// Percent-scraped thresholds for the completion report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReportOptions {
    pub high_pct: f64,
    pub low_pct: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { high_pct: HIGH_PCT, low_pct: LOW_PCT }
    }
}
