// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::config::consts::*;
use crate::config::options::{ReportOptions, RunOptions};
use crate::core::net::HttpFetcher;
use crate::overrides::OverrideRegistry;
use crate::progress::Progress;
use crate::runner::{self, CountryOutcome};

#[derive(Debug, Parser)]
#[command(name = "np_scrape", version, about = "Scrape national parks and their coordinates into CSV")]
pub struct Cli {
    /// Site-relative path of the country index page
    #[arg(long, default_value = INDEX_PATH)]
    pub index: String,

    /// Output directory for the CSV files
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Only process this country (repeatable; cleaned index name)
    #[arg(long = "country", value_name = "NAME")]
    pub countries: Vec<String>,

    /// Do not visit area pages for missing coordinates
    #[arg(long)]
    pub skip_backfill: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Extra attempts per failed request
    #[arg(long, default_value_t = RETRIES)]
    pub retries: u32,

    /// Pause before each request, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Percent located above which a country is flagged too_many
    #[arg(long, default_value_t = HIGH_PCT)]
    pub high: f64,

    /// Percent located below which a country is flagged not_enough
    #[arg(long, default_value_t = LOW_PCT)]
    pub low: f64,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn options(&self) -> RunOptions {
        RunOptions {
            index_path: self.index.clone(),
            countries: self.countries.clone(),
            backfill: !self.skip_backfill,
            timeout_secs: self.timeout,
            retries: self.retries,
            pause_ms: self.pause_ms,
            report: ReportOptions { high_pct: self.high, low_pct: self.low },
            out_dir: self.out.clone(),
        }
    }
}

/// Prints one line per finished item to stderr.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name}", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose, cli.log_file.as_deref())?;

    let opts = cli.options();
    info!(index = %opts.index_path, out = %opts.out_dir.display(), "starting np_scrape v{}", env!("CARGO_PKG_VERSION"));

    let fetcher = HttpFetcher::new(&opts).wrap_err("building HTTP client")?;
    let registry = OverrideRegistry::builtin();
    let mut progress = CliProgress::default();

    let summary = runner::run(&opts, &fetcher, &registry, Some(&mut progress))
        .wrap_err_with(|| format!("reading index {}", opts.index_path))?;

    let written = crate::file::export(&summary.catalog, &opts.out_dir).wrap_err("exporting CSV")?;

    let failed: Vec<&str> = summary.fetch_failures().collect();
    if !failed.is_empty() {
        progress.log(&format!("country pages unavailable: {}", failed.join(", ")));
    }
    let skipped = summary.outcomes.iter().filter(|(_, o)| *o == CountryOutcome::NoLink).count();

    print!("{}", summary.report);
    println!("{skipped} countries skipped for lack of a link");
    if let Some(b) = &summary.backfill {
        println!("backfill: {} of {} area pages resolved", b.resolved, b.attempted);
    }
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_run_options() {
        let cli = Cli::parse_from(["np_scrape"]);
        assert_eq!(cli.options(), RunOptions::default());
    }

    #[test]
    fn flags_map_onto_options() {
        let cli = Cli::parse_from([
            "np_scrape", "--country", "Kenya", "--country", "Chad", "--skip-backfill", "-o", "data", "--high", "110",
            "-vv",
        ]);
        let opts = cli.options();
        assert_eq!(opts.countries, vec![s!("Kenya"), s!("Chad")]);
        assert!(!opts.backfill);
        assert_eq!(opts.out_dir, PathBuf::from("data"));
        assert_eq!(opts.report.high_pct, 110.0);
        assert_eq!(cli.verbose, 2);
    }
}
