// src/core/net.rs
//
// Single blocking HTTP GET. No retry, no timeout.

use reqwest::blocking::Client;

use crate::config::options::ScrapeOptions;
use crate::error::{PipelineError, Result};

/// Markup as served, consumed once by the table locator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Where the page comes from. `HttpSource` in production;
/// anything that can hand back markup in tests and benches.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<RawPage>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(None)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<RawPage> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        check_status(status)?;
        let body = resp.text()?;
        logf!(status, bytes = body.len(), "fetched {url}");
        Ok(RawPage { url: s!(url), status, body })
    }
}

/// Anything outside 2xx is fatal.
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        loge!(status, "page fetch failed");
        Err(PipelineError::Fetch { status })
    }
}
