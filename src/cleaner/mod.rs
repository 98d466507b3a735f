// src/cleaner/mod.rs

mod summary;

pub use summary::{CategoricalSummary, CleanReport, NumericSummary};

use crate::config::CleanConfig;
use crate::domain::{CleanListing, RawListingRow};
use crate::errors::PipelineResult;
use crate::parsing::{
    clean_location, extract_district, is_negotiable_price, parse_optional_f64,
    parse_price_to_million, remove_emojis,
};
use crate::spreadsheets::{read_raw_rows, write_clean_listings};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// Something the cleaner had to paper over in one input row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowIssue {
    MissingUrl,
    UnparsedPrice(String),
    UnparsedArea(String),
    AreaOutOfRange(f64),
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIssue::MissingUrl => write!(f, "missing url"),
            RowIssue::UnparsedPrice(raw) => write!(f, "unparsed price {raw:?}"),
            RowIssue::UnparsedArea(raw) => write!(f, "unparsed area {raw:?}"),
            RowIssue::AreaOutOfRange(area) => write!(f, "area {area} out of range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowNote {
    /// 1-based data row in the input file (header excluded).
    pub row: usize,
    pub issue: RowIssue,
}

#[derive(Debug, Default)]
pub struct CleanOutcome {
    pub input_rows: usize,
    pub duplicates_dropped: usize,
    pub rows: Vec<CleanListing>,
    pub notes: Vec<RowNote>,
}

/// Dedupes by url (first row wins) and normalizes every remaining row.
/// Never fails: anything unparseable becomes `None` plus a `RowNote`.
pub fn clean_listings(rows: Vec<RawListingRow>, config: &CleanConfig) -> CleanOutcome {
    let mut outcome = CleanOutcome {
        input_rows: rows.len(),
        ..Default::default()
    };
    let mut seen_urls = HashSet::new();

    for (idx, row) in rows.into_iter().enumerate() {
        // Rows without a url share the single "no url" key.
        if !seen_urls.insert(row.url.clone()) {
            outcome.duplicates_dropped += 1;
            continue;
        }

        let cleaned = clean_row(row, idx + 1, config, &mut outcome.notes);
        outcome.rows.push(cleaned);
    }

    outcome
}

fn clean_row(
    row: RawListingRow,
    row_no: usize,
    config: &CleanConfig,
    notes: &mut Vec<RowNote>,
) -> CleanListing {
    let mut note = |issue: RowIssue| {
        debug!(row = row_no, %issue, "Row issue");
        notes.push(RowNote { row: row_no, issue });
    };

    if row.url.is_none() {
        note(RowIssue::MissingUrl);
    }

    let title = row
        .title
        .as_deref()
        .map(|t| remove_emojis(t).trim().to_string())
        .unwrap_or_default();

    let price_million = row.price_raw.as_deref().and_then(parse_price_to_million);
    if let (None, Some(raw)) = (price_million, row.price_raw.as_deref()) {
        if !raw.trim().is_empty() && !is_negotiable_price(raw) {
            note(RowIssue::UnparsedPrice(raw.to_string()));
        }
    }

    let price_vnd_original = row.price_vnd.as_deref().and_then(parse_optional_f64);

    let area_m2 = match row.area_m2.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match parse_optional_f64(raw) {
            Some(area) if area > 0.0 && area <= config.max_area_m2 => Some(area),
            Some(area) => {
                note(RowIssue::AreaOutOfRange(area));
                None
            }
            None => {
                note(RowIssue::UnparsedArea(raw.to_string()));
                None
            }
        },
    };

    let location = row.location.as_deref().and_then(clean_location);
    let district = location.as_deref().and_then(extract_district);

    CleanListing {
        title,
        url: row.url,
        price_million_final: price_million.or(price_vnd_original),
        price_billion: price_million.map(|p| p / 1000.0),
        price_raw_orig: row.price_raw,
        price_vnd_original,
        location,
        district,
        area_m2,
        snippet: row.snippet.map(|s| s.trim().to_string()).unwrap_or_default(),
    }
}

/// Median of the values; mean of the middle pair for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Copy of `rows` with missing areas replaced by the median of the present
/// ones. With no area anywhere there is no median and nothing changes.
pub fn impute_area(rows: &[CleanListing]) -> (Vec<CleanListing>, Option<f64>) {
    let areas: Vec<f64> = rows.iter().filter_map(|r| r.area_m2).collect();
    let area_median = median(&areas);

    let imputed = rows
        .iter()
        .cloned()
        .map(|mut row| {
            row.area_m2 = row.area_m2.or(area_median);
            row
        })
        .collect();

    (imputed, area_median)
}

/// Full cleaning pass: read the crawl CSV, clean, write both outputs.
pub fn run(config: &CleanConfig) -> PipelineResult<CleanReport> {
    let raw_rows = read_raw_rows(&config.input_path)?;
    info!(path = %config.input_path.display(), rows = raw_rows.len(), "Loaded raw listings");

    let outcome = clean_listings(raw_rows, config);
    info!(dropped = outcome.duplicates_dropped, "Dropped duplicate rows by url");

    write_clean_listings(&config.clean_output_path, &outcome.rows)?;
    info!(
        path = %config.clean_output_path.display(),
        rows = outcome.rows.len(),
        "Wrote cleaned file"
    );

    let (imputed, area_median) = impute_area(&outcome.rows);
    write_clean_listings(&config.imputed_output_path, &imputed)?;
    info!(
        path = %config.imputed_output_path.display(),
        area_median = ?area_median,
        "Wrote imputed file"
    );

    Ok(CleanReport::new(&outcome, area_median, config.sample_rows))
}
