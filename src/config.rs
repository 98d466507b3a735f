// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

pub const BASE_URL: &str = "https://homedy.com/ban-nha-dat-ha-noi";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

pub const RAW_LISTINGS_CSV: &str = "homedy_listings_hanoi.csv";
pub const CLEAN_LISTINGS_CSV: &str = "homedy_listings_hanoi_clean.csv";
pub const IMPUTED_LISTINGS_CSV: &str = "homedy_listings_hanoi_clean_imputed.csv";

/// Everything the crawl stage needs. The binary runs with `Default`.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub base_url: String,
    pub max_pages: usize,
    /// Politeness delay between pages, drawn uniformly from this range.
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub output_path: PathBuf,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            max_pages: 30,
            min_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(2500),
            request_timeout: Duration::from_secs(15),
            user_agent: USER_AGENT.to_string(),
            output_path: PathBuf::from(RAW_LISTINGS_CSV),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input_path: PathBuf,
    pub clean_output_path: PathBuf,
    pub imputed_output_path: PathBuf,
    /// Areas above this many m² are treated as data-entry errors.
    pub max_area_m2: f64,
    /// Rows shown under "Sample rows" in the report.
    pub sample_rows: usize,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(RAW_LISTINGS_CSV),
            clean_output_path: PathBuf::from(CLEAN_LISTINGS_CSV),
            imputed_output_path: PathBuf::from(IMPUTED_LISTINGS_CSV),
            max_area_m2: 2000.0,
            sample_rows: 10,
        }
    }
}
