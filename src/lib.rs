//! TrimScreen Library
//!
//! Coordinates a single "pick a video and trim it" screen: a one-shot storage
//! permission request, a user-triggered pick → validate → open-editor flow, and
//! a long-lived listener on the editor's event channel. The permission system,
//! media picker, editor and alerts sit behind ports so hosts and tests can swap
//! them.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod ports;

use tracing_subscriber::EnvFilter;

// Re-export commonly used types
pub use app::{MountedScreen, ScreenSettings, TrimScreen};
pub use domain::errors::DomainError;
pub use domain::events::{EditorEvent, RawEditorEvent};
pub use domain::model::{
    Alert, EditorConfig, PermissionRequest, PermissionStatus, PickedAsset, PickerOptions,
    PickerResult, Platform, ScreenState, ScreenView, SelectionOutcome, VideoUri,
};
pub use domain::rules::EventEffect;
pub use error::{ScreenError, ScreenResult};

/// Initialize logging. An explicit level wins over `RUST_LOG`.
pub fn init_logging(log_level: Option<&str>, json: bool) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    // A subscriber may already be installed (tests, embedding hosts)
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
