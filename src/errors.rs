// errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the file side of the pipeline (reading the crawl CSV,
/// writing the cleaned outputs). Row-level problems never end up here;
/// they degrade to absent values and a `RowNote`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
