use orgdesk_core::error::CoreError;

/// Errors from the data-access layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Status text plus response body, for debugging.
        message: String,
    },

    /// A response body failed to decode into the expected type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Durable session storage could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// An endpoint that must return a body produced none.
    #[error("Endpoint returned no response body")]
    MissingBody,

    /// A domain-level error (validation, not-found, ...).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience alias for data-access results.
pub type ClientResult<T> = Result<T, ClientError>;
