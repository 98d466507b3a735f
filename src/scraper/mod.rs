mod extract;
mod fetcher;
mod models;
mod pagination;
mod scraper;
mod scraper_error;

pub use extract::ListingExtractor;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use models::{CrawlOutcome, ItemError, StopReason};
pub use pagination::find_next_page;
pub use self::scraper::{crawl, HomedyScraper};
pub use scraper_error::ScraperError;
