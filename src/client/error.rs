//! Error types for the chamber client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The authenticated user is not a member of the chamber
    #[error("Not a member of chamber '{0}'")]
    NotInChamber(String),

    /// The bearer token cannot be carried on the handshake
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}
