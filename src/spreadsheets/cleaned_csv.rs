// spreadsheets/cleaned_csv.rs
use crate::domain::{CleanListing, RawListingRow};
use crate::errors::{PipelineError, PipelineResult};
use csv::{ByteRecord, StringRecord};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tracing::warn;

pub const CLEAN_COLUMNS: [&str; 10] = [
    "title",
    "url",
    "price_raw_orig",
    "price_million_final",
    "price_billion",
    "price_vnd_original",
    "location",
    "district",
    "area_m2",
    "snippet",
];

/// Reads the crawl CSV back as text rows. Header names are trimmed and a
/// leading BOM is ignored. Every physical row yields a `RawListingRow`; bytes
/// that are not valid UTF-8 are replaced rather than dropping the row.
pub fn read_raw_rows(path: &Path) -> PipelineResult<Vec<RawListingRow>> {
    let file = File::open(path).map_err(|source| PipelineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_raw_rows_from(file)
}

pub fn read_raw_rows_from<R: Read>(reader: R) -> PipelineResult<Vec<RawListingRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    // The csv crate strips a BOM on its own; this covers one left inside quotes.
    let headers: StringRecord = csv_reader
        .byte_headers()?
        .iter()
        .map(|h| {
            String::from_utf8_lossy(h)
                .trim_start_matches('\u{feff}')
                .trim()
                .to_string()
        })
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.byte_records().enumerate() {
        let row = idx + 1;
        let record = decode_lossy(result?, row);
        let listing = record
            .deserialize::<RawListingRow>(Some(&headers))
            .unwrap_or_else(|e| {
                warn!(row, error = %e, "Unreadable row, keeping it with empty fields");
                RawListingRow::default()
            });
        rows.push(listing);
    }
    Ok(rows)
}

fn decode_lossy(record: ByteRecord, row: usize) -> StringRecord {
    match StringRecord::from_byte_record(record) {
        Ok(record) => record,
        Err(e) => {
            warn!(row, "Invalid UTF-8 in row, replacing bad bytes");
            e.into_byte_record()
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect()
        }
    }
}

/// Writes cleaned listings in `CLEAN_COLUMNS` order. The header is written
/// even when there are no rows.
pub fn write_clean_listings(path: &Path, listings: &[CleanListing]) -> PipelineResult<()> {
    let file = File::create(path).map_err(|source| PipelineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_clean_listings_to(BufWriter::new(file), listings)
}

pub fn write_clean_listings_to<W: Write>(writer: W, listings: &[CleanListing]) -> PipelineResult<()> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(CLEAN_COLUMNS)?;

    for listing in listings {
        csv_writer.serialize(listing)?;
    }
    csv_writer.flush()?;
    Ok(())
}
