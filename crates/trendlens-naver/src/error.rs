use thiserror::Error;

/// Errors returned by the Naver API clients.
#[derive(Debug, Error)]
pub enum NaverError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("request signing failed: {0}")]
    Signature(String),

    /// Every configured authentication strategy was rejected.
    #[error("all authentication strategies failed: {}", attempts.join("; "))]
    AllStrategiesFailed { attempts: Vec<String> },
}
