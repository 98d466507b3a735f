pub mod listing;

pub use listing::{CleanListing, RawListing, RawListingRow};
