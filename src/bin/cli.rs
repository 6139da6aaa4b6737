// src/bin/cli.rs
use np_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
