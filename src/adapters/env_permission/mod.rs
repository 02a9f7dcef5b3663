//! Environment permission adapter
//!
//! Headless stand-in for the OS consent dialog: the answer comes from an
//! environment variable instead of a user tap.

use async_trait::async_trait;
use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::ports::PermissionPort;

pub const ENV_STORAGE_PERMISSION: &str = "TRIM_SCREEN_STORAGE_PERMISSION";

/// Answers consent requests from `TRIM_SCREEN_STORAGE_PERMISSION`
pub struct EnvPermissionAdapter {
    variable: String,
}

impl EnvPermissionAdapter {
    pub fn new() -> Self {
        Self::with_variable(ENV_STORAGE_PERMISSION)
    }

    pub fn with_variable(variable: &str) -> Self {
        Self {
            variable: variable.to_string(),
        }
    }

    /// Get environment variable
    fn get_env(&self) -> Result<Option<String>, DomainError> {
        match std::env::var(&self.variable) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(DomainError::PermissionFailed(format!(
                "Failed to read environment variable {}: {}",
                self.variable, e
            ))),
        }
    }
}

impl Default for EnvPermissionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionPort for EnvPermissionAdapter {
    async fn request(&self, request: &PermissionRequest) -> Result<PermissionStatus, DomainError> {
        info!(title = %request.title, message = %request.message, "Permission prompt");
        match self.get_env()? {
            Some(value) => PermissionStatus::parse(&value)
                .map_err(|e| DomainError::PermissionFailed(e.to_string())),
            None => Ok(PermissionStatus::Granted),
        }
    }
}
