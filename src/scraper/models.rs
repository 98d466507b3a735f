use crate::domain::RawListing;
use std::fmt;

/// Why the crawl loop ended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StopReason {
    /// Reached `max_pages`.
    #[default]
    PageLimit,
    /// The last page had no "next" link.
    NoNextPage,
    /// The "next" link pointed at a page already fetched.
    RepeatedPage(String),
    /// A page request failed; everything gathered before it is kept.
    FetchFailed { url: String, error: String },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::PageLimit => write!(f, "page limit reached"),
            StopReason::NoNextPage => write!(f, "no next page"),
            StopReason::RepeatedPage(url) => write!(f, "next page already seen: {url}"),
            StopReason::FetchFailed { url, error } => write!(f, "request to {url} failed: {error}"),
        }
    }
}

/// A listing fragment that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemError {
    pub page: usize,
    /// Position of the item on its page, starting at 0.
    pub index: usize,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct CrawlOutcome {
    pub listings: Vec<RawListing>,
    pub pages_fetched: usize,
    pub item_errors: Vec<ItemError>,
    pub stop_reason: StopReason,
}
