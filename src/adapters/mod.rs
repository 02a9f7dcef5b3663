// Adapters - External system implementations

pub mod console_alert;
pub mod env_permission;
pub mod exec_ffmpeg;
pub mod fs_picker;
pub mod toml_config;

// Re-export adapters
pub use console_alert::ConsoleAlertAdapter;
pub use env_permission::EnvPermissionAdapter;
pub use exec_ffmpeg::FfmpegEditorAdapter;
pub use fs_picker::{FsPickerAdapter, PickSource};
pub use toml_config::{ScreenConfig, TomlConfigAdapter};
