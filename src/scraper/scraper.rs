// scraper.rs
use crate::config::CrawlConfig;
use crate::scraper::{
    find_next_page, CrawlOutcome, HttpFetcher, ItemError, ListingExtractor, PageFetcher,
    ScraperError, StopReason,
};
use rand::Rng;
use scraper::Html;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

pub struct HomedyScraper<F> {
    fetcher: F,
    extractor: ListingExtractor,
    config: CrawlConfig,
}

impl HomedyScraper<HttpFetcher> {
    pub fn new(config: CrawlConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(&config.user_agent, config.request_timeout)?;
        Self::with_fetcher(fetcher, config)
    }
}

impl<F: PageFetcher> HomedyScraper<F> {
    pub fn with_fetcher(fetcher: F, config: CrawlConfig) -> Result<Self, ScraperError> {
        Ok(Self {
            fetcher,
            extractor: ListingExtractor::new()?,
            config,
        })
    }

    /// Walks result pages one at a time starting at `base_url`.
    ///
    /// A failed request ends the walk but is not an error: the listings
    /// gathered so far come back with `StopReason::FetchFailed`. Only an
    /// unparseable `base_url` fails the call.
    pub fn crawl(&self) -> Result<CrawlOutcome, ScraperError> {
        let mut url = Url::parse(&self.config.base_url)?;
        let mut outcome = CrawlOutcome::default();
        let mut seen_pages = HashSet::new();

        while outcome.pages_fetched < self.config.max_pages {
            let page = outcome.pages_fetched + 1;
            info!(page, url = %url, "📄 Fetching page");

            let html = match self.fetcher.fetch_page(&url) {
                Ok(html) => html,
                Err(e) => {
                    error!(page, url = %url, error = %e, "❌ Request failed, stopping crawl");
                    outcome.stop_reason = StopReason::FetchFailed {
                        url: url.to_string(),
                        error: e.to_string(),
                    };
                    break;
                }
            };

            outcome.pages_fetched = page;
            seen_pages.insert(url.clone());

            let next = self.scrape_page(&html, &url, page, &mut outcome);

            match next {
                None => {
                    info!(page, "🏁 No next page found, stopping");
                    outcome.stop_reason = StopReason::NoNextPage;
                    break;
                }
                Some(next) if seen_pages.contains(&next) => {
                    warn!(page, next = %next, "🔁 Next page already seen, stopping");
                    outcome.stop_reason = StopReason::RepeatedPage(next.to_string());
                    break;
                }
                Some(next) => url = next,
            }

            if outcome.pages_fetched < self.config.max_pages {
                self.polite_delay();
            }
        }

        info!(
            pages = outcome.pages_fetched,
            listings = outcome.listings.len(),
            item_errors = outcome.item_errors.len(),
            reason = %outcome.stop_reason,
            "✅ Crawl finished"
        );

        Ok(outcome)
    }

    /// Extracts every listing on one page into `outcome` and returns the next
    /// page's URL. Bad items are logged and skipped.
    fn scrape_page(
        &self,
        html: &str,
        page_url: &Url,
        page: usize,
        outcome: &mut CrawlOutcome,
    ) -> Option<Url> {
        let document = Html::parse_document(html);
        let items = self.extractor.listing_items(&document);
        info!(page, count = items.len(), "Found items on page");

        for (index, item) in items.into_iter().enumerate() {
            match self.extractor.extract(item, page_url) {
                Ok(listing) => outcome.listings.push(listing),
                Err(e) => {
                    warn!(page, index, error = %e, "⚠️ Error extracting item");
                    outcome.item_errors.push(ItemError {
                        page,
                        index,
                        message: e.to_string(),
                    });
                }
            }
        }

        find_next_page(&document, page_url)
    }

    fn polite_delay(&self) {
        let min = self.config.min_delay.as_secs_f64();
        let max = self.config.max_delay.as_secs_f64();

        let secs = if max > min {
            rand::thread_rng().gen_range(min..=max)
        } else {
            min
        };

        if secs > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(secs));
        }
    }
}

/// Crawls with the real HTTP client.
pub fn crawl(config: &CrawlConfig) -> Result<CrawlOutcome, ScraperError> {
    HomedyScraper::new(config.clone())?.crawl()
}
