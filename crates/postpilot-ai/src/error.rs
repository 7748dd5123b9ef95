use thiserror::Error;

/// Errors returned by the Anthropic API client.
#[derive(Debug, Error)]
pub enum AiError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No API credential was configured; the call was never attempted.
    #[error("Claude API key not configured")]
    MissingApiKey,

    /// The provider returned a non-success status; carries the provider's
    /// own message when the error payload was parseable.
    #[error("Claude API error: {0}")]
    ApiError(String),

    /// A 2xx response body did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
