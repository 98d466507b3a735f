// src/parsing/location.rs

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

// Quận (urban district), Huyện (rural district), Thị xã (town). Both the
// precomposed and the combining-mark spellings occur in scraped text.
static DISTRICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(Quận|Qua\x{0323}\x{0302}n|Qu?n|Huyện|Huye\x{0323}\x{0302}n|Huyen|Thị xã|Thi\x{0323} xa\x{0303}|Thi xa)\s+([^,\n]+)",
    )
    .expect("district pattern")
});

/// Collapses newlines and whitespace runs to single spaces and strips
/// surrounding commas/spaces. `None` when nothing is left.
pub fn clean_location(text: &str) -> Option<String> {
    let s = text.replace('\n', " ");
    let s = WHITESPACE_RE.replace_all(s.trim(), " ");
    let s = s.trim_matches(|c| c == ' ' || c == ',');

    (!s.is_empty()).then(|| s.to_string())
}

/// "Quận Ba Đình, Hà Nội" -> "Quận Ba Đình". Without an administrative
/// keyword, falls back to the text before the first comma, then to the
/// whole text.
pub fn extract_district(text: &str) -> Option<String> {
    let district = match DISTRICT_RE.find(text) {
        Some(m) => m.as_str().trim(),
        None => match text.split_once(',') {
            Some((head, _)) => head.trim(),
            None => text.trim(),
        },
    };

    (!district.is_empty()).then(|| district.to_string())
}
