use crate::config::CrawlConfig;
use crate::scraper::{PageFetcher, ScraperError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use url::Url;

/// Unique file path under the system temp dir.
pub fn temp_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}_{}.csv",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// Serves canned HTML by URL; anything else is a 404.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }
}

impl PageFetcher for StaticFetcher {
    fn fetch_page(&self, url: &Url) -> Result<String, ScraperError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| ScraperError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Crawl settings for tests: no politeness delay.
pub fn test_crawl_config(base_url: &str, max_pages: usize) -> CrawlConfig {
    CrawlConfig {
        base_url: base_url.to_string(),
        max_pages,
        min_delay: Duration::ZERO,
        max_delay: Duration::ZERO,
        ..CrawlConfig::default()
    }
}

/// A result page with one `product-item` card per `(title, href, price)` and
/// an optional `rel=next` link.
pub fn listing_page(items: &[(&str, &str, &str)], next: Option<&str>) -> String {
    let cards: String = items
        .iter()
        .map(|(title, href, price)| {
            format!(
                r#"<div class="product-item">
                     <h3 class="product-title"><a href="{href}">{title}</a></h3>
                     <div class="product-price">{price}</div>
                     <div class="product-address">Quận Cầu Giấy, Hà Nội</div>
                   </div>"#
            )
        })
        .collect();

    let pagination = next
        .map(|href| format!(r#"<ul class="pagination"><li><a rel="next" href="{href}">2</a></li></ul>"#))
        .unwrap_or_default();

    format!("<html><body>{cards}{pagination}</body></html>")
}
