// fetcher.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Anything that can turn a page URL into its HTML. The crawl loop only talks
/// to this, so it can run against canned pages.
pub trait PageFetcher {
    fn fetch_page(&self, url: &Url) -> Result<String, ScraperError>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    fn fetch_page(&self, url: &Url) -> Result<String, ScraperError> {
        (**self).fetch_page(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    /// Single attempt. Non-2xx is an error.
    fn fetch_page(&self, url: &Url) -> Result<String, ScraperError> {
        let resp = self.client.get(url.as_str()).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}
