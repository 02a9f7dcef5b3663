// Ports - Interface definitions (contracts) for the external collaborators

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::errors::*;
use crate::domain::events::RawEditorEvent;
use crate::domain::model::*;

/// Port for the OS permission subsystem
#[async_trait]
pub trait PermissionPort: Send + Sync {
    /// Ask for a permission; may show a native dialog
    async fn request(&self, request: &PermissionRequest) -> Result<PermissionStatus, DomainError>;
}

/// Port for the media picker
#[async_trait]
pub trait MediaPickerPort: Send + Sync {
    /// Let the user pick from the device library
    async fn launch(&self, options: &PickerOptions) -> Result<PickerResult, DomainError>;
}

/// Port for the trim editor subsystem
#[async_trait]
pub trait EditorPort: Send + Sync {
    /// Check whether the editor can open the file
    async fn is_valid_file(&self, uri: &VideoUri) -> Result<bool, DomainError>;

    /// Open the editor. Returns once the editor has been handed the file;
    /// the outcome arrives only on the event channel.
    async fn show_editor(&self, uri: &VideoUri, config: &EditorConfig) -> Result<(), DomainError>;

    /// Register a listener on the editor event channel
    fn subscribe_events(&self) -> broadcast::Receiver<RawEditorEvent>;

    /// Number of listeners currently registered
    fn listener_count(&self) -> usize;
}

/// Port for user-facing alerts
pub trait AlertPort: Send + Sync {
    fn alert(&self, alert: &Alert);
}
