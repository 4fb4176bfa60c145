use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, ExtractError>;

/// Why an extraction produced no records.
///
/// Never crosses the public `fetch_latest_jobs` boundary; it exists for logging and tests.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Reqwest Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with {status}")]
    Status { status: StatusCode, url: String },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Parse task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
