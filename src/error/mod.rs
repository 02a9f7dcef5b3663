//! Error handling module for TrimScreen

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors raised while wiring or mounting the screen
#[derive(Error, Debug)]
pub enum ScreenError {
    /// The screen already holds a live event subscription
    #[error("Screen is already mounted")]
    AlreadyMounted,

    /// Configuration file could not be parsed or is invalid
    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig { path: String, message: String },

    /// Collaborator failure during wiring
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for screen wiring
pub type ScreenResult<T> = std::result::Result<T, ScreenError>;
