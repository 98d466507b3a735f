pub mod cleaned_csv;
pub mod listings_csv;

pub use cleaned_csv::{read_raw_rows, read_raw_rows_from, write_clean_listings, write_clean_listings_to};
pub use listings_csv::{write_raw_listings, write_raw_listings_to};
