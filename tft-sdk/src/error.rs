use std::time::Duration;

pub type Result<T> = core::result::Result<T, Error>;

/// Failures raised by a [`Transport`](crate::transport::Transport).
///
/// The retrieval layer never inspects these, it hands them back to the caller as-is.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid request url {url}")]
    InvalidUrl { url: String },
    #[error("Bad request to Riot API (likely an error on their end)")]
    BadRequest,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("API key is invalid")]
    Forbidden,
    #[error("Resource not found")]
    NotFound,
    #[error("Too many requests")]
    TooManyRequests,
    #[error("Riot API error (status {0})")]
    Server(u16),
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
    #[error("{0}")]
    Other(String),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body did not match the shape expected for `endpoint`.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },

    /// An endpoint that answers with a list answered with an empty one.
    #[error("empty result from {endpoint}")]
    EmptyResult { endpoint: String },

    #[error("summoner has no platform to route the request to")]
    MissingPlatform,

    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("unknown platform or region {0:?}")]
    UnknownRoute(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
