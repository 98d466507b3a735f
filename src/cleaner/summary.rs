use crate::cleaner::{CleanOutcome, RowIssue};
use crate::domain::CleanListing;
use std::collections::HashMap;
use std::fmt;

/// count / mean / std / min / quartiles / max of a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` below two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl NumericSummary {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std = (sorted.len() > 1).then(|| {
            let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            var.sqrt()
        });

        Some(Self {
            count: sorted.len(),
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.50),
            q75: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Linear interpolation between closest ranks. `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// count / unique / top / freq of a text column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalSummary {
    pub count: usize,
    pub unique: usize,
    pub top: String,
    pub freq: usize,
}

impl CategoricalSummary {
    /// Ties for `top` go to the value seen first.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut count = 0;
        for (order, value) in values.into_iter().enumerate() {
            count += 1;
            counts.entry(value).or_insert((0, order)).0 += 1;
        }

        let (top, (freq, _)) = counts
            .iter()
            .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))?;

        Some(Self {
            count,
            unique: counts.len(),
            top: top.to_string(),
            freq: *freq,
        })
    }
}

/// What the clean binary prints once both files are written.
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub input_rows: usize,
    pub duplicates_dropped: usize,
    pub output_rows: usize,
    pub area_median: Option<f64>,
    pub price: Option<NumericSummary>,
    pub area: Option<NumericSummary>,
    pub district: Option<CategoricalSummary>,
    pub unparsed_prices: usize,
    pub invalid_areas: usize,
    pub missing_urls: usize,
    pub sample: Vec<CleanListing>,
}

impl CleanReport {
    pub fn new(outcome: &CleanOutcome, area_median: Option<f64>, sample_rows: usize) -> Self {
        let rows = &outcome.rows;
        let prices: Vec<f64> = rows.iter().filter_map(|r| r.price_million_final).collect();
        let areas: Vec<f64> = rows.iter().filter_map(|r| r.area_m2).collect();

        let count_issues = |pred: fn(&RowIssue) -> bool| {
            outcome.notes.iter().filter(|n| pred(&n.issue)).count()
        };

        Self {
            input_rows: outcome.input_rows,
            duplicates_dropped: outcome.duplicates_dropped,
            output_rows: rows.len(),
            area_median,
            price: NumericSummary::from_values(&prices),
            area: NumericSummary::from_values(&areas),
            district: CategoricalSummary::from_values(rows.iter().filter_map(|r| r.district.as_deref())),
            unparsed_prices: count_issues(|i| matches!(i, RowIssue::UnparsedPrice(_))),
            invalid_areas: count_issues(|i| {
                matches!(i, RowIssue::UnparsedArea(_) | RowIssue::AreaOutOfRange(_))
            }),
            missing_urls: count_issues(|i| matches!(i, RowIssue::MissingUrl)),
            sample: rows.iter().take(sample_rows).cloned().collect(),
        }
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

fn write_numeric(f: &mut fmt::Formatter<'_>, name: &str, s: &Option<NumericSummary>) -> fmt::Result {
    match s {
        Some(s) => writeln!(
            f,
            "  {name:<20} count={} mean={:.2} std={} min={:.2} 25%={:.2} 50%={:.2} 75%={:.2} max={:.2}",
            s.count,
            s.mean,
            fmt_opt(s.std),
            s.min,
            s.q25,
            s.q50,
            s.q75,
            s.max
        ),
        None => writeln!(f, "  {name:<20} count=0"),
    }
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows read:          {}", self.input_rows)?;
        writeln!(f, "Duplicates dropped: {}", self.duplicates_dropped)?;
        writeln!(f, "Rows written:       {}", self.output_rows)?;
        writeln!(f, "Area median:        {}", fmt_opt(self.area_median))?;
        writeln!(
            f,
            "Row notes:          {} unparsed prices, {} invalid areas, {} missing urls",
            self.unparsed_prices, self.invalid_areas, self.missing_urls
        )?;

        writeln!(f, "\nSummary:")?;
        write_numeric(f, "price_million_final", &self.price)?;
        write_numeric(f, "area_m2", &self.area)?;
        match &self.district {
            Some(d) => writeln!(
                f,
                "  {:<20} count={} unique={} top={} freq={}",
                "district", d.count, d.unique, d.top, d.freq
            )?,
            None => writeln!(f, "  {:<20} count=0", "district")?,
        }

        writeln!(f, "\nSample rows:")?;
        for row in &self.sample {
            writeln!(
                f,
                "  {} | {} | {} | {} | {}",
                row.title,
                row.url.as_deref().unwrap_or(""),
                fmt_opt(row.price_million_final),
                fmt_opt(row.area_m2),
                row.district.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }
}
