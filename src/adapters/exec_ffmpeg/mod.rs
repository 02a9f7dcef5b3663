//! FFmpeg editor adapter
//!
//! Headless trim editor: validates with `ffprobe`, trims to the configured
//! maximum duration with `ffmpeg` stream copy, and reports the outcome on
//! the `VideoTrim` event channel like the native editor does.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use tokio::process::Command;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::adapters::toml_config::ScreenConfig;
use crate::domain::errors::*;
use crate::domain::events::RawEditorEvent;
use crate::domain::model::*;
use crate::ports::EditorPort;

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Paths and binaries the editor works with
#[derive(Debug, Clone)]
struct EditorPaths {
    ffmpeg: String,
    ffprobe: String,
    output_dir: PathBuf,
    photo_library_dir: Option<PathBuf>,
}

/// FFmpeg-based editor adapter
pub struct FfmpegEditorAdapter {
    paths: EditorPaths,
    events: broadcast::Sender<RawEditorEvent>,
}

impl FfmpegEditorAdapter {
    pub fn new(config: &ScreenConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            paths: EditorPaths {
                ffmpeg: config.ffmpeg_path.clone(),
                ffprobe: config.ffprobe_path.clone(),
                output_dir: config.output_dir.clone(),
                photo_library_dir: config.photo_library_dir.clone(),
            },
            events,
        }
    }

    /// Name of the trimmed file for an input, stamped with local time
    pub fn output_file_name(input: &Path) -> String {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "video".to_string());
        let extension = input
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_else(|| "mp4".to_string());
        format!(
            "{}_trimmed_{}.{}",
            stem,
            Local::now().format("%Y%m%d_%H%M%S"),
            extension
        )
    }

    fn local_path(uri: &VideoUri) -> Result<PathBuf, DomainError> {
        uri.to_local_path().ok_or_else(|| {
            DomainError::EditorFailed(format!("Not a local file reference: {}", uri))
        })
    }

    fn emit(events: &broadcast::Sender<RawEditorEvent>, event: RawEditorEvent) {
        let name = event.name.clone();
        if events.send(event).is_err() {
            debug!(event = %name, "No listeners for editor event");
        }
    }

    /// Run the trim and deliver the outcome as an event
    async fn trim_session(
        paths: EditorPaths,
        input: PathBuf,
        config: EditorConfig,
        events: broadcast::Sender<RawEditorEvent>,
    ) {
        let output = paths.output_dir.join(Self::output_file_name(&input));
        let event = match Self::trim(&paths, &input, &output, config.max_duration).await {
            Ok(()) => {
                if config.save_to_photo {
                    Self::save_to_library(&paths, &output).await;
                }
                match VideoUri::from_path(&output) {
                    Some(uri) => RawEditorEvent::on_save(uri.to_string()),
                    None => RawEditorEvent::on_error(Some("Trimmed output has no path")),
                }
            }
            Err(e) => {
                warn!(input = %input.display(), error = %e, "Trim failed");
                RawEditorEvent::on_error(Some(&e.to_string()))
            }
        };
        Self::emit(&events, event);
    }

    async fn trim(
        paths: &EditorPaths,
        input: &Path,
        output: &Path,
        max_duration: u32,
    ) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&paths.output_dir)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to create output directory: {}", e)))?;

        info!(input = %input.display(), output = %output.display(), max_duration, "Trimming video");
        let result = Command::new(&paths.ffmpeg)
            .args(["-y", "-hide_banner", "-loglevel", "error", "-i"])
            .arg(input)
            .args(["-t", &max_duration.to_string(), "-c", "copy"])
            .arg(output)
            .output()
            .await
            .map_err(|e| DomainError::EditorFailed(format!("Failed to run ffmpeg: {}", e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let detail = stderr.lines().last().unwrap_or("ffmpeg exited with an error");
            return Err(DomainError::EditorFailed(detail.trim().to_string()));
        }
        Ok(())
    }

    async fn save_to_library(paths: &EditorPaths, output: &Path) {
        let Some(library) = &paths.photo_library_dir else {
            debug!("No photo library configured, keeping output in place");
            return;
        };
        let Some(file_name) = output.file_name() else {
            return;
        };
        let target = library.join(file_name);
        let copied = async {
            tokio::fs::create_dir_all(library).await?;
            tokio::fs::copy(output, &target).await
        }
        .await;
        match copied {
            Ok(_) => info!(path = %target.display(), "Saved trimmed video to photo library"),
            Err(e) => warn!(error = %e, "Failed to save trimmed video to photo library"),
        }
    }
}

#[async_trait]
impl EditorPort for FfmpegEditorAdapter {
    async fn is_valid_file(&self, uri: &VideoUri) -> Result<bool, DomainError> {
        let path = match uri.to_local_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(false),
        };

        let result = Command::new(&self.paths.ffprobe)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=codec_type",
                "-of",
                "csv=p=0",
            ])
            .arg(&path)
            .output()
            .await
            .map_err(|e| DomainError::EditorFailed(format!("Failed to run ffprobe: {}", e)))?;

        let has_video = result.status.success()
            && String::from_utf8_lossy(&result.stdout)
                .lines()
                .any(|line| line.trim() == "video");
        debug!(path = %path.display(), has_video, "Probed video file");
        Ok(has_video)
    }

    async fn show_editor(&self, uri: &VideoUri, config: &EditorConfig) -> Result<(), DomainError> {
        config.validate()?;
        let input = Self::local_path(uri)?;
        debug!(
            cancel_confirm = %config.cancel_dialog_confirm_text,
            cancel_cancel = %config.cancel_dialog_cancel_text,
            save_confirm = %config.save_dialog_confirm_text,
            save_cancel = %config.save_dialog_cancel_text,
            haptics = config.enable_haptic_feedback,
            "Editor dialogs"
        );

        Self::emit(&self.events, RawEditorEvent::on_show());
        tokio::spawn(Self::trim_session(
            self.paths.clone(),
            input,
            config.clone(),
            self.events.clone(),
        ));
        Ok(())
    }

    fn subscribe_events(&self) -> broadcast::Receiver<RawEditorEvent> {
        self.events.subscribe()
    }

    fn listener_count(&self) -> usize {
        self.events.receiver_count()
    }
}
