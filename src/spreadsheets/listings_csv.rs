// spreadsheets/listings_csv.rs
use crate::domain::RawListing;
use crate::errors::{PipelineError, PipelineResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Excel only detects UTF-8 (and so Vietnamese text) with a BOM.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const RAW_COLUMNS: [&str; 7] = ["title", "url", "price_raw", "price_vnd", "location", "area_m2", "snippet"];

/// Writes the crawl CSV: BOM, header, one row per listing.
pub fn write_raw_listings(path: &Path, listings: &[RawListing]) -> PipelineResult<()> {
    let file = File::create(path).map_err(|source| PipelineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_raw_listings_to(BufWriter::new(file), listings)
}

pub fn write_raw_listings_to<W: Write>(mut writer: W, listings: &[RawListing]) -> PipelineResult<()> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(RAW_COLUMNS)?;

    for listing in listings {
        csv_writer.serialize(listing)?;
    }

    csv_writer.flush()?;
    Ok(())
}
