//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server refused the credential claims
    #[error("Server rejected the credentials for '{0}'")]
    Unauthorized(String),

    /// The server refused the request for another reason (e.g. a blank room id)
    #[error("Server rejected the connection with status {0}")]
    Rejected(u16),

    /// The server URL or query could not be built
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}
