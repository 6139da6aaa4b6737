// src/core/net.rs
// Document fetching. The engine only ever sees parsed documents; this is the
// one place that talks to the network.

use std::{collections::HashMap, thread, time::Duration};

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::consts::ORIGIN;
use crate::config::options::RunOptions;
use crate::core::query::Document;
use crate::error::FetchError;

/// Fetch-by-link collaborator. `link` is site-relative (`/wiki/Kenya`);
/// implementations resolve it against the site origin.
pub trait Fetch {
    fn fetch(&self, link: &str) -> Result<Document, FetchError>;
}

/// Prefix a site-relative link with the canonical origin.
/// Links that are already absolute are returned unchanged.
pub fn absolute_url(link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        s!(link)
    } else if let Some(rest) = link.strip_prefix("//") {
        join!("https://", rest)
    } else {
        join!(ORIGIN, link)
    }
}

/// Client errors will not change on retry. Rate limiting (429) will.
pub fn is_final_status(status: u16) -> bool {
    (400..500).contains(&status) && status != 429
}

/// Blocking HTTP fetcher with a per-request timeout and a small retry budget.
pub struct HttpFetcher {
    client: Client,
    retries: u32,
    pause: Duration,
}

impl HttpFetcher {
    pub fn new(opts: &RunOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .user_agent(concat!("np_scrape/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| FetchError::Http { url: s!(ORIGIN), source })?;
        Ok(Self {
            client,
            retries: opts.retries,
            pause: Duration::from_millis(opts.pause_ms),
        })
    }

    fn get_once(&self, url: &str) -> Result<String, FetchError> {
        let http = |source| FetchError::Http { url: s!(url), source };
        let resp = self.client.get(url).send().map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }
        resp.text().map_err(http)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, link: &str) -> Result<Document, FetchError> {
        let url = absolute_url(link);
        let mut attempt = 0;
        loop {
            // be polite
            if !self.pause.is_zero() {
                thread::sleep(self.pause);
            }
            match self.get_once(&url) {
                Ok(body) => {
                    debug!(%url, bytes = body.len(), "fetched");
                    return Ok(Document::parse(&body));
                }
                Err(FetchError::Status { status, .. }) if is_final_status(status) => {
                    return Err(FetchError::Status { status, url });
                }
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    warn!(%url, attempt, error = %e, "fetch failed, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// In-memory fetcher keyed by link. Used for offline fixtures and tests.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, link: &str, html: &str) -> Self {
        self.pages.insert(s!(link), s!(html));
        self
    }
}

impl Fetch for StaticFetcher {
    fn fetch(&self, link: &str) -> Result<Document, FetchError> {
        self.pages
            .get(link)
            .map(|html| Document::parse(html))
            .ok_or_else(|| FetchError::Missing(s!(link)))
    }
}
