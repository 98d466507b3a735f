use regex::Regex;
use std::sync::LazyLock;

static AREA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+[.,]?\d*)\s*(m2|m²|m)").expect("area pattern"));

/// Drops separators and whitespace and glues every digit together:
/// "1.250 m" -> 1250, "12,5 Tỷ" -> 125. `None` without digits or when the
/// result does not fit in a `u64`.
pub fn clean_number(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// First "<number> m2" style figure in `text`, run through [`clean_number`].
pub fn extract_area(text: &str) -> Option<u64> {
    let low = text.to_lowercase();
    let caps = AREA_RE.captures(&low)?;
    clean_number(caps.get(1)?.as_str())
}

/// Lenient float parse for CSV cells; empty, garbage, NaN and infinities are `None`.
pub fn parse_optional_f64(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Removes characters outside the Basic Multilingual Plane (emoji and friends).
pub fn remove_emojis(text: &str) -> String {
    text.chars().filter(|c| (*c as u32) < 0x10000).collect()
}
