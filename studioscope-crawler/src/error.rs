use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("HTTP client setup failed: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("invalid politeness window: min {min:?} exceeds max {max:?}")]
    InvalidDelayWindow { min: Duration, max: Duration },
}

pub type Result<T> = std::result::Result<T, CrawlError>;
