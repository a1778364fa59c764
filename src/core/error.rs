use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum CheckinError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response text did not match any known outcome marker.
    ///
    /// Carries the extracted marker (or the raw body when no marker could be
    /// extracted) for diagnostics.
    #[error("Unrecognized check-in response: {0}")]
    UnrecognizedResponse(String),

    /// The general (form-based) submission was rejected by the server.
    ///
    /// Carries the raw response marker so callers can see what the server
    /// actually said.
    #[error("general registration failed: {0}")]
    GeneralRejected(String),
}
