use homedy_pipeline::cleaner;
use homedy_pipeline::config::CleanConfig;
use homedy_pipeline::logging::init_tracing;

fn main() {
    init_tracing();

    let config = CleanConfig::default();

    match cleaner::run(&config) {
        Ok(report) => println!("\n{report}"),
        Err(e) => {
            eprintln!("❌ Cleaning failed: {e}");
            std::process::exit(1);
        }
    }
}
