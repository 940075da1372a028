use thiserror::Error;

/// Errors returned by the social feed client.
#[derive(Debug, Error)]
pub enum SocialError {
    /// Client credentials were absent from configuration. Raised before any
    /// network call is made.
    #[error("missing REDDIT_CLIENT_ID/REDDIT_CLIENT_SECRET in configuration")]
    MissingCredentials,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed API rejected a request or returned an unusable payload.
    #[error("social feed API error: {0}")]
    Api(String),
}
