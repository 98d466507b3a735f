pub mod location;
pub mod numbers;
pub mod price;

pub use location::{clean_location, extract_district};
pub use numbers::{clean_number, extract_area, parse_optional_f64, remove_emojis};
pub use price::{is_negotiable_price, parse_price_to_million, PriceUnit};
