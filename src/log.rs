// src/log.rs
//! Subscriber setup for the binary. The library only emits `tracing` events;
//! nothing under `src/` except this file decides where they go.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::{fmt::time::uptime, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "np_scrape=info",
        1 => "np_scrape=debug",
        _ => "np_scrape=trace",
    }
}

/// Install the global subscriber. Events go to stderr, or are appended to
/// `log_file` (created with its parent directory) when one is given.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_timer(uptime());

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).wrap_err_with(|| format!("creating {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| eyre!("could not install logger: {e}"))
}
