//! Failures of the two remote calls the site makes: manifest fetches and
//! photo uploads. Neither is ever shown to the visitor as-is, callers log
//! them and fall back to an empty result.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Request never completed (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// Server answered with a non-2xx status
    #[error("unexpected status {0}")]
    Status(u16),

    /// A browser API refused the request before it was sent
    #[error("browser error: {0}")]
    Browser(String),

    /// Body arrived but could not be decoded
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}
