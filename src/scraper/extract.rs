// extract.rs
use crate::domain::RawListing;
use crate::parsing::{clean_number, extract_area};
use crate::scraper::ScraperError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

// Per-field fallbacks, tried in order; the first non-empty match wins.
const TITLE_SELECTORS: &[&str] = &["h3.product-title", "h3 a", "a.product-title", ".product-title"];
const PRICE_SELECTORS: &[&str] = &[".product-price", ".price", ".product-item__price", ".price-value"];
const LOCATION_SELECTORS: &[&str] = &[
    ".product-address",
    ".product-location",
    ".address",
    ".location",
];
const AREA_SELECTORS: &[&str] = &[".area", ".product-area"];
const SNIPPET_SELECTORS: &[&str] = &[".product-desc", ".desc", ".product-description", "p"];

const ITEM_SELECTOR: &str = r#"div[class*="product-item"]"#;
const FALLBACK_ITEM_SELECTOR: &str = ".product, .listing-item, .item";

/// Pulls `RawListing`s out of a result page. Selectors are compiled once.
pub struct ListingExtractor {
    items: Selector,
    fallback_items: Selector,
    link: Selector,
    title: Vec<Selector>,
    price: Vec<Selector>,
    location: Vec<Selector>,
    area: Vec<Selector>,
    snippet: Vec<Selector>,
}

impl ListingExtractor {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            items: parse_selector(ITEM_SELECTOR)?,
            fallback_items: parse_selector(FALLBACK_ITEM_SELECTOR)?,
            link: parse_selector("a")?,
            title: parse_selectors(TITLE_SELECTORS)?,
            price: parse_selectors(PRICE_SELECTORS)?,
            location: parse_selectors(LOCATION_SELECTORS)?,
            area: parse_selectors(AREA_SELECTORS)?,
            snippet: parse_selectors(SNIPPET_SELECTORS)?,
        })
    }

    /// Listing cards on a page. Falls back to generic card classes when the
    /// site-specific `product-item` divs are absent.
    pub fn listing_items<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        let items: Vec<_> = document.select(&self.items).collect();
        if !items.is_empty() {
            return items;
        }
        document.select(&self.fallback_items).collect()
    }

    /// Builds one record from a listing card. Missing fields are `None`; only
    /// a link that cannot be resolved against `page_url` is an error.
    pub fn extract(&self, item: ElementRef<'_>, page_url: &Url) -> Result<RawListing, ScraperError> {
        let title = first_text(item, &self.title);

        let url = match item.select(&self.link).next().and_then(|a| a.value().attr("href")) {
            Some(href) if !href.is_empty() => Some(page_url.join(href)?.to_string()),
            _ => None,
        };

        let price_raw = first_text(item, &self.price);
        let location = first_text(item, &self.location);

        // Area usually only shows up in the title ("... 45m2 ...").
        let area_text = first_text(item, &self.area).or_else(|| title.clone());
        let area_m2 = area_text.as_deref().and_then(extract_area);

        let snippet = first_text(item, &self.snippet);

        Ok(RawListing {
            price_vnd: price_raw.as_deref().and_then(clean_number),
            title,
            url,
            price_raw,
            location,
            area_m2,
            snippet,
        })
    }
}

/// Text of the first element matched by the first selector that yields any.
fn first_text(item: ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
    selectors.iter().find_map(|sel| {
        let text = element_text(item.select(sel).next()?);
        (!text.is_empty()).then_some(text)
    })
}

/// All text nodes trimmed and concatenated.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|s| !s.is_empty()).collect()
}

fn parse_selector(selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|e| ScraperError::HtmlParse(format!("{selector}: {e}")))
}

fn parse_selectors(selectors: &[&str]) -> Result<Vec<Selector>, ScraperError> {
    selectors.iter().map(|s| parse_selector(s)).collect()
}
