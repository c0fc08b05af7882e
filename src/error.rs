use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between issuing a request and handing a
/// parsed value back. None of these escape the public client methods; they
/// exist so failures can be logged with the right shape before being
/// converted to fallback values.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never completed (connection refused, DNS failure, etc.)
    /// or the response body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(StatusCode),

    /// The body was not valid JSON, or the expected shape was missing.
    #[error("malformed response: {0}")]
    Decode(String),
}
