use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self {
        match (e.status(), e.url()) {
            (Some(status), Some(url)) => ScraperError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            },
            _ => ScraperError::Network(e.to_string()),
        }
    }
}
