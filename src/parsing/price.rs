// src/parsing/price.rs

use regex::Regex;
use std::sync::LazyLock;

/// Unit words: "tỷ" (billion) and "triệu" (million), with and without diacritics.
static BILLION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ty|t\x{1ef5}|tỷ").expect("billion pattern"));
static MILLION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tri[eê]u|trieu").expect("million pattern"));

/// Anything not a digit, separator, dash, whitespace or a letter of a unit word.
static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9,.\-\styỷriệueMHzKmBbk]").expect("allow-list pattern")
});

static RANGE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*|\sto\s|\s–\s").expect("range pattern"));

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[.,]?[0-9]*").expect("number pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUnit {
    Billion,
    Million,
}

impl PriceUnit {
    fn to_million(self, value: f64) -> f64 {
        match self {
            PriceUnit::Billion => value * 1000.0,
            PriceUnit::Million => value,
        }
    }
}

/// Parses a free-form Vietnamese price ("12,5 Tỷ", "58 Triệu", "5 - 5,2 Tỷ")
/// into million VND. Ranges collapse to their mean.
///
/// Returns `None` for empty text, negotiable prices ("Thỏa thuận") and text
/// with no digits. Never panics.
///
/// Number format: a lone comma is a decimal point ("12,5" = 12.5). The number
/// pattern admits a single separator, so "12.500" reads as 12.5, not 12500.
/// Vietnamese thousands dots are therefore ambiguous; this is kept as is.
///
/// Ranges split on dashes only in practice: the letter `o` is not in the
/// allow-list, so "5 to 6 tỷ" keeps just its first figure (5000).
pub fn parse_price_to_million(text: &str) -> Option<f64> {
    let raw = text.trim();
    if raw.is_empty() {
        return None;
    }

    let low = raw.to_lowercase();
    if is_negotiable_price(&low) {
        return None;
    }

    let normalized = raw
        .replace(['\u{2013}', '\u{2014}'], "-")
        .replace('\u{a0}', " ");
    let normalized = DISALLOWED_RE.replace_all(&normalized, " ");
    let normalized = normalized.trim();

    let nums = extract_numbers(normalized);
    if nums.is_empty() {
        return None;
    }

    let unit = explicit_unit(&low).unwrap_or_else(|| infer_unit(&low, &nums));

    let mean = nums.iter().sum::<f64>() / nums.len() as f64;
    let value = unit.to_million(mean);

    (value.is_finite() && value >= 0.0).then_some(value)
}

/// "Thỏa thuận" (price on request) in any casing, with or without diacritics.
/// Both tone placements are accepted ("thỏa" and the older "thoả").
pub fn is_negotiable_price(text: &str) -> bool {
    let low = text.to_lowercase();
    ["thỏa", "thoả", "thoa"].iter().any(|w| low.contains(w))
}

fn explicit_unit(low: &str) -> Option<PriceUnit> {
    if BILLION_RE.is_match(low) {
        Some(PriceUnit::Billion)
    } else if low.contains("triệu") || low.contains("trieu") {
        Some(PriceUnit::Million)
    } else {
        None
    }
}

/// Fallback when no unit word was found on the first pass.
fn infer_unit(low: &str, nums: &[f64]) -> PriceUnit {
    if MILLION_RE.is_match(low) {
        return PriceUnit::Million;
    }
    if BILLION_RE.is_match(low) {
        return PriceUnit::Billion;
    }

    // Large figures are almost always already in millions.
    if nums.iter().any(|&n| n > 1000.0) {
        return PriceUnit::Million;
    }

    let padded = format!(" {low} ");
    if nums.iter().any(|&n| n < 100.0) && (low.contains("ty") || padded.contains(" t ")) {
        return PriceUnit::Billion;
    }

    if nums.iter().any(|&n| n <= 1000.0) {
        PriceUnit::Billion
    } else {
        PriceUnit::Million
    }
}

/// One number per range segment; segments without digits are skipped.
fn extract_numbers(normalized: &str) -> Vec<f64> {
    RANGE_SPLIT_RE
        .split(normalized)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| NUMBER_RE.find(part))
        .filter_map(|m| parse_number(m.as_str()))
        .collect()
}

fn parse_number(num: &str) -> Option<f64> {
    let commas = num.matches(',').count();
    let dots = num.matches('.').count();

    let num = if commas == 1 && dots == 0 {
        num.replace(',', ".")
    } else {
        num.replace(',', "")
    };

    num.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_comma_is_decimal_point() {
        assert_eq!(parse_number("12,5"), Some(12.5));
    }

    #[test]
    fn trailing_separator_still_parses() {
        assert_eq!(parse_number("12."), Some(12.0));
        assert_eq!(parse_number("7,"), Some(7.0));
    }

    #[test]
    fn bare_small_number_defaults_to_billion() {
        assert_eq!(infer_unit("3,5", &[3.5]), PriceUnit::Billion);
    }

    #[test]
    fn bare_large_number_is_million() {
        assert_eq!(infer_unit("2500", &[2500.0]), PriceUnit::Million);
    }
}
