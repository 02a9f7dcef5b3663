// Filesystem picker adapter - Picks a video from a path or a library directory

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::MediaPickerPort;

/// Extensions treated as video files
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "mkv", "webm", "avi"];

/// Where the "user" picks from
#[derive(Debug, Clone, PartialEq)]
pub enum PickSource {
    /// Nothing to pick; behaves like a dismissed picker
    None,
    /// A specific file
    File(PathBuf),
    /// First video under this directory, in path order
    Library(PathBuf),
}

/// Filesystem-backed media picker
pub struct FsPickerAdapter {
    source: PickSource,
}

impl FsPickerAdapter {
    pub fn new(source: PickSource) -> Self {
        Self { source }
    }

    /// Check the extension against the known video list
    pub fn is_video_path(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
    }

    fn first_video_in(dir: &Path) -> Result<Option<PathBuf>, DomainError> {
        if !dir.is_dir() {
            return Err(DomainError::FsFail(format!(
                "Library directory does not exist: {}",
                dir.display()
            )));
        }

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                DomainError::PickerFailed(format!("Failed to scan library: {}", e))
            })?;
            if entry.file_type().is_file() && Self::is_video_path(entry.path()) {
                return Ok(Some(entry.into_path()));
            }
        }
        Ok(None)
    }

    fn to_asset(path: &Path) -> PickedAsset {
        let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        PickedAsset {
            uri: VideoUri::from_path(&absolute).map(|uri| uri.to_string()),
        }
    }
}

#[async_trait]
impl MediaPickerPort for FsPickerAdapter {
    async fn launch(&self, options: &PickerOptions) -> Result<PickerResult, DomainError> {
        if options.media_type != MediaType::Video {
            return Err(DomainError::UnsupportedMedia(format!(
                "{:?}",
                options.media_type
            )));
        }
        debug!(?options, source = ?self.source, "Launching picker");

        let picked = match &self.source {
            PickSource::None => return Ok(PickerResult::cancelled()),
            PickSource::File(path) => path.is_file().then(|| path.clone()),
            PickSource::Library(dir) => Self::first_video_in(dir)?,
        };

        match picked {
            Some(path) => {
                info!(path = %path.display(), "Picked video");
                Ok(PickerResult {
                    did_cancel: false,
                    assets: vec![Self::to_asset(&path)],
                })
            }
            None => Ok(PickerResult::empty()),
        }
    }
}
