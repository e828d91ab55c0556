use thiserror::Error;

/// Errors surfaced by the feed client and the decode layer.
#[derive(Debug, Error)]
pub enum NbaApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("parse error for {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A feed record was shorter than expected or a field had the wrong
    /// type. Not recoverable: the record cannot be partially decoded.
    #[error("malformed feed data: {0}")]
    Shape(String),
}
