// src/domain/listing.rs

use serde::{Deserialize, Serialize};

/// One listing as scraped from a result page. This is also the row shape of
/// the crawl CSV, so field order is column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawListing {
    pub title: Option<String>,
    pub url: Option<String>,
    pub price_raw: Option<String>,
    /// Every digit in `price_raw` concatenated, e.g. "12,5 Tỷ" -> 125.
    pub price_vnd: Option<u64>,
    pub location: Option<String>,
    pub area_m2: Option<u64>,
    pub snippet: Option<String>,
}

/// A crawl CSV row read back for cleaning. Everything stays text here;
/// numeric interpretation happens in the cleaner. Columns missing from the
/// file come through as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawListingRow {
    pub title: Option<String>,
    pub url: Option<String>,
    pub price_raw: Option<String>,
    pub price_vnd: Option<String>,
    pub location: Option<String>,
    pub area_m2: Option<String>,
    pub snippet: Option<String>,
}

/// A cleaned, analysis-ready listing. Field order is the output column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanListing {
    pub title: String,
    pub url: Option<String>,
    pub price_raw_orig: Option<String>,
    /// Parsed price in million VND, falling back to `price_vnd_original`.
    pub price_million_final: Option<f64>,
    /// Parsed price in billion VND (parser result only, no fallback).
    pub price_billion: Option<f64>,
    pub price_vnd_original: Option<f64>,
    pub location: Option<String>,
    pub district: Option<String>,
    pub area_m2: Option<f64>,
    pub snippet: String,
}

impl From<RawListing> for RawListingRow {
    fn from(raw: RawListing) -> Self {
        Self {
            title: raw.title,
            url: raw.url,
            price_raw: raw.price_raw,
            price_vnd: raw.price_vnd.map(|v| v.to_string()),
            location: raw.location,
            area_m2: raw.area_m2.map(|v| v.to_string()),
            snippet: raw.snippet,
        }
    }
}
