use homedy_pipeline::config::CrawlConfig;
use homedy_pipeline::logging::init_tracing;
use homedy_pipeline::scraper::crawl;
use homedy_pipeline::spreadsheets::write_raw_listings;

fn main() {
    init_tracing();

    let config = CrawlConfig::default();

    let outcome = match crawl(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("❌ Crawl could not start: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = write_raw_listings(&config.output_path, &outcome.listings) {
        eprintln!("❌ Failed to write {}: {e}", config.output_path.display());
        std::process::exit(1);
    }

    println!(
        "Saved {} rows to {} ({} pages, stopped: {})",
        outcome.listings.len(),
        config.output_path.display(),
        outcome.pages_fetched,
        outcome.stop_reason
    );
}
