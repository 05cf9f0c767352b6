//! Error types for the bestiary client.

/// Errors that can occur when fetching a bestiary page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or the body could not be read
    /// (connection failure, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not a JSON page envelope.
    #[error("failed to decode page envelope: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured base URL could not be joined with the endpoint path.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
