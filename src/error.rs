use reqwest::StatusCode;
use thiserror::Error;

/// The error type for TheHive API operations.
///
/// Failures are surfaced as they happened: a non-2xx response becomes
/// [`Error::Api`] carrying the status and the untouched response body. The
/// client performs no retries and no recovery.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connect, TLS, timeout, malformed response).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error: HTTP {status}: {message}")]
    Api {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Raw response body, unparsed.
        message: String,
    },

    /// Response body could not be decoded into the expected type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded or resolved.
    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for TheHive API operations.
pub type Result<T> = std::result::Result<T, Error>;
