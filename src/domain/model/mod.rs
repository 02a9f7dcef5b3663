// Domain models - Core types and data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Opaque handle to a media file on the device (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoUri(String);

impl VideoUri {
    /// Wrap a reference, rejecting empty or whitespace-only strings
    pub fn new(uri: impl Into<String>) -> Option<Self> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            None
        } else {
            Some(Self(uri))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local path behind a `file://` reference, if it is one
    pub fn to_local_path(&self) -> Option<std::path::PathBuf> {
        self.0
            .strip_prefix("file://")
            .filter(|path| !path.is_empty())
            .map(std::path::PathBuf::from)
    }

    /// Build a `file://` reference from a local path
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        Self::new(format!("file://{}", path.to_string_lossy()))
    }
}

impl fmt::Display for VideoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Platform family the screen runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Other,
}

impl Platform {
    /// Platform of the running binary
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Other
        }
    }

    /// Only Android asks for explicit storage-write consent
    pub fn requires_storage_consent(&self) -> bool {
        matches!(self, Platform::Android)
    }

    pub fn parse(platform: &str) -> Result<Self, DomainError> {
        match platform.trim().to_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "other" | "desktop" => Ok(Platform::Other),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid platform: {}. Valid platforms: android, ios, other",
                platform
            ))),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::current()
    }
}

/// Answer from the OS permission subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
    NeverAskAgain,
}

impl PermissionStatus {
    pub fn parse(status: &str) -> Result<Self, DomainError> {
        match status.trim().to_lowercase().as_str() {
            "granted" => Ok(PermissionStatus::Granted),
            "denied" => Ok(PermissionStatus::Denied),
            "never_ask_again" => Ok(PermissionStatus::NeverAskAgain),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid permission status: {}. Valid values: granted, denied, never_ask_again",
                status
            ))),
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Storage-write permission identifier
pub const WRITE_EXTERNAL_STORAGE: &str = "android.permission.WRITE_EXTERNAL_STORAGE";

/// Consent request shown by the OS dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionRequest {
    pub permission: String,
    pub title: String,
    pub message: String,
}

impl Default for PermissionRequest {
    fn default() -> Self {
        Self {
            permission: WRITE_EXTERNAL_STORAGE.to_string(),
            title: "Storage Permission Required".to_string(),
            message: "App needs access to your storage to save Videos".to_string(),
        }
    }
}

/// Kind of media the picker should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    Mixed,
}

/// How the picker hands back the asset representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetRepresentationMode {
    Auto,
    Current,
    Compatible,
}

/// Options passed to the media picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    pub media_type: MediaType,
    pub asset_representation_mode: AssetRepresentationMode,
}

impl PickerOptions {
    /// Single video, current representation
    pub fn video() -> Self {
        Self {
            media_type: MediaType::Video,
            asset_representation_mode: AssetRepresentationMode::Current,
        }
    }
}

/// One asset returned by the picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedAsset {
    pub uri: Option<String>,
}

/// Picker response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerResult {
    pub did_cancel: bool,
    pub assets: Vec<PickedAsset>,
}

impl PickerResult {
    pub fn cancelled() -> Self {
        Self {
            did_cancel: true,
            assets: Vec::new(),
        }
    }

    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            did_cancel: false,
            assets: vec![PickedAsset {
                uri: Some(uri.into()),
            }],
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Reference of the first asset; only the first asset is ever considered
    pub fn first_uri(&self) -> Option<VideoUri> {
        self.assets
            .first()
            .and_then(|asset| asset.uri.clone())
            .and_then(VideoUri::new)
    }
}

/// Configuration handed to the trim editor with every invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Maximum trimmed length, in seconds
    pub max_duration: u32,
    pub save_to_photo: bool,
    pub cancel_dialog_confirm_text: String,
    pub cancel_dialog_cancel_text: String,
    pub save_dialog_cancel_text: String,
    pub save_dialog_confirm_text: String,
    pub enable_haptic_feedback: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_duration: 60,
            save_to_photo: true,
            cancel_dialog_confirm_text: "Yes".to_string(),
            cancel_dialog_cancel_text: "No".to_string(),
            save_dialog_cancel_text: "No".to_string(),
            save_dialog_confirm_text: "Yes".to_string(),
            enable_haptic_feedback: false,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_duration == 0 {
            return Err(DomainError::Config(
                "maxDuration must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// User-facing alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Everything the screen displays
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreenState {
    pub loading: bool,
    pub selected_video: Option<VideoUri>,
    pub trimmed_video: Option<VideoUri>,
}

impl ScreenState {
    /// What gets rendered: a spinner or the interactive content, never both
    pub fn view(&self) -> ScreenView {
        if self.loading {
            ScreenView::Spinner
        } else {
            ScreenView::Content {
                selected: self.selected_video.clone(),
                trimmed: self.trimmed_video.clone(),
            }
        }
    }
}

/// Rendered screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Spinner,
    Content {
        selected: Option<VideoUri>,
        trimmed: Option<VideoUri>,
    },
}

/// How one selection attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// User dismissed the picker
    Cancelled,
    /// Picker returned no usable reference
    NoVideoFound,
    /// Editor validity check rejected the file
    InvalidVideo(VideoUri),
    /// Editor was shown; the result arrives later as an event
    EditorOpened(VideoUri),
    /// A collaborator failed
    Failed(String),
    /// A selection was already in flight
    Busy,
}

impl SelectionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SelectionOutcome::Cancelled => "cancelled",
            SelectionOutcome::NoVideoFound => "no_video_found",
            SelectionOutcome::InvalidVideo(_) => "invalid_video",
            SelectionOutcome::EditorOpened(_) => "editor_opened",
            SelectionOutcome::Failed(_) => "failed",
            SelectionOutcome::Busy => "busy",
        }
    }
}
