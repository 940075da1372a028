use thiserror::Error;

/// Errors returned by the EDGAR client.
#[derive(Debug, Error)]
pub enum EdgarError {
    /// Network or TLS failure from the underlying HTTP client, including
    /// non-2xx statuses surfaced via `error_for_status`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Client construction failed (bad base URL).
    #[error("EDGAR client configuration error: {0}")]
    Config(String),
}
