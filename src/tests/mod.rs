mod extract_tests;
mod price_tests;
mod utils;
