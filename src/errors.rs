use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access Discord API: {0}")]
    ApiError(String),

    #[error("Failed to write record store: {0}")]
    StoreError(String),

    #[error("Failed to render chart: {0}")]
    ChartError(String),

    #[error("I/O failure: {0}")]
    IoError(String),
}

impl From<serenity::Error> for ScrapeError {
    fn from(error: serenity::Error) -> Self {
        ScrapeError::ApiError(error.to_string())
    }
}

impl From<csv::Error> for ScrapeError {
    fn from(error: csv::Error) -> Self {
        ScrapeError::StoreError(error.to_string())
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(error: std::io::Error) -> Self {
        ScrapeError::IoError(error.to_string())
    }
}
