// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Failures reported by the external collaborators behind the ports
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),
    /// Permission subsystem failed to answer
    #[error("Permission request failed: {0}")]
    PermissionFailed(String),
    /// Media picker could not complete the request
    #[error("Media picker failed: {0}")]
    PickerFailed(String),
    /// Media type the picker cannot serve
    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),
    /// Editor subsystem rejected a call
    #[error("Editor failed: {0}")]
    EditorFailed(String),
    /// File system operation failed
    #[error("File system error: {0}")]
    FsFail(String),
    /// Configuration could not be read or is malformed
    #[error("Configuration error: {0}")]
    Config(String),
}
