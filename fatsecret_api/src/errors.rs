//! Error types for the API client.

/// Errors returned by the endpoint bindings.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport failed before a response body was available.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response body was not a well-formed envelope of the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The API answered with an `error` envelope. Displays the message verbatim.
    #[error("{message}")]
    Api { code: Option<i64>, message: String },
}

/// Errors raised while executing an authenticated HTTP call.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// Network failure, timeout, or unreadable body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server replied with a non-success status.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// No usable access token could be obtained.
    #[error("Authentication failed: {0}")]
    Auth(String),
    /// A configured endpoint is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
