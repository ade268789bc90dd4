/// Errors from the Vultr REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Vultr returned a non-2xx status code.
    #[error("Vultr API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The API's `error` field when present, otherwise the raw body.
        message: String,
    },

    /// Client configuration is missing or malformed.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}
