// Permission gate - One-shot storage consent request at mount

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::model::*;
use crate::ports::PermissionPort;

/// Fire-and-forget storage consent request
pub struct PermissionGate {
    permissions: Arc<dyn PermissionPort>,
    request: PermissionRequest,
}

impl PermissionGate {
    pub fn new(permissions: Arc<dyn PermissionPort>, request: PermissionRequest) -> Self {
        Self {
            permissions,
            request,
        }
    }

    /// Spawn the request when the platform needs it. Nothing waits on the handle.
    pub fn spawn(self, platform: Platform) -> Option<JoinHandle<()>> {
        if !platform.requires_storage_consent() {
            debug!(?platform, "Storage consent not required on this platform");
            return None;
        }
        Some(tokio::spawn(async move { self.run().await }))
    }

    /// Ask once; every outcome ends in a log line
    pub async fn run(&self) {
        match self.permissions.request(&self.request).await {
            Ok(status) if status.is_granted() => {
                debug!(permission = %self.request.permission, "Storage permission granted");
            }
            Ok(status) => {
                info!(permission = %self.request.permission, ?status, "Storage Permission Denied.");
            }
            Err(e) => {
                warn!(permission = %self.request.permission, error = %e, "Storage permission request failed");
            }
        }
    }
}
