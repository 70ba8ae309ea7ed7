use serde_json::Value;
use thiserror::Error;

/// Every way a call against the megaverse API can fail.
#[derive(Debug, Error)]
pub enum RemoteApiError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with something that is not JSON.
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Non-success status, or a body carrying a truthy `error` field.
    #[error("request to {url} rejected with status {status}: {body}")]
    Rejected { status: u16, url: String, body: Value },

    /// The goal endpoint answered without a usable `goal` grid.
    #[error("malformed goal map: {0}")]
    MalformedGoal(String),
}

pub type ApiResult<T> = Result<T, RemoteApiError>;
