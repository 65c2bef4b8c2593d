use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for calls against the activities API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect failure, aborted body read).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-OK response with a JSON body; `detail` is the server's text
    /// when it sent one.
    #[error("server rejected the request ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}
