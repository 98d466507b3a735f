// pagination.rs
use crate::scraper::extract::element_text;
use scraper::{Html, Selector};
use url::Url;

const NEXT_SELECTORS: &[&str] = &[
    "a[rel=next]",
    ".pagination a.next",
    "li.next a",
    r#"a[aria-label="Next"]"#,
    ".page-item.next a",
];

const NEXT_LINK_TEXTS: &[&str] = &["›", "»", "Next", "next", "Trang sau"];

/// A way of spotting the "next page" href on a parsed page.
type NextPageStrategy = fn(&Html) -> Option<String>;

const STRATEGIES: &[NextPageStrategy] = &[next_by_selector, next_by_link_text];

/// Absolute URL of the page after `current`, or `None` on the last page.
pub fn find_next_page(document: &Html, current: &Url) -> Option<Url> {
    let href = STRATEGIES.iter().find_map(|strategy| strategy(document))?;
    current.join(&href).ok()
}

/// Well-known pagination markup. Only the first match of each selector counts.
fn next_by_selector(document: &Html) -> Option<String> {
    NEXT_SELECTORS.iter().find_map(|sel| {
        let selector = Selector::parse(sel).ok()?;
        let a = document.select(&selector).next()?;
        non_empty_href(a.value().attr("href"))
    })
}

/// Any link labelled like a "next" arrow, or carrying a `next` class.
fn next_by_link_text(document: &Html) -> Option<String> {
    let anchors = Selector::parse("a").ok()?;
    document.select(&anchors).find_map(|a| {
        let href = non_empty_href(a.value().attr("href"))?;
        let text = element_text(a);
        let is_next = NEXT_LINK_TEXTS.contains(&text.as_str())
            || a.value().classes().any(|class| class == "next");
        is_next.then_some(href)
    })
}

fn non_empty_href(href: Option<&str>) -> Option<String> {
    href.filter(|h| !h.is_empty()).map(str::to_string)
}
