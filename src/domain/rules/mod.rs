// Domain rules - Event dispatch policy and user-facing alert texts

use crate::domain::events::EditorEvent;
use crate::domain::model::*;

pub const ERROR_TITLE: &str = "Error";
pub const EDITOR_ERROR_FALLBACK: &str = "Failed to retrieve video info. Please try again.";
pub const NO_VIDEO_TITLE: &str = "No Video Found";
pub const NO_VIDEO_MESSAGE: &str = "No video URI was found.";
pub const INVALID_VIDEO_TITLE: &str = "Invalid Video";
pub const INVALID_VIDEO_MESSAGE: &str = "The selected video file is not valid.";
pub const SELECTION_ERROR_MESSAGE: &str = "An error occurred while selecting the video.";

/// Effect of one editor event on the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventEffect {
    /// Logged only
    Informational,
    /// Loading cleared and an alert must be shown
    Alert(Alert),
    /// Trimmed output stored and loading cleared
    Saved(Option<VideoUri>),
}

/// Dispatch policy for the editor event channel
pub struct EventDispatcher;

impl EventDispatcher {
    /// Apply one event to the state. Every tag is handled here and nowhere else.
    pub fn apply(state: &mut ScreenState, event: &EditorEvent) -> EventEffect {
        match event {
            EditorEvent::Show | EditorEvent::Unknown { .. } => EventEffect::Informational,
            EditorEvent::Error { message } => {
                state.loading = false;
                EventEffect::Alert(Self::editor_error_alert(message.as_deref()))
            }
            EditorEvent::Save { uri } => {
                state.trimmed_video = uri.clone();
                state.loading = false;
                EventEffect::Saved(uri.clone())
            }
        }
    }

    /// Alert for an `onError` event, falling back to a fixed text
    pub fn editor_error_alert(message: Option<&str>) -> Alert {
        let detail = message
            .filter(|m| !m.is_empty())
            .unwrap_or(EDITOR_ERROR_FALLBACK);
        Alert::new(ERROR_TITLE, format!("Error: {}", detail))
    }
}

/// Maps a finished selection to the alert the user sees, if any
pub struct SelectionAlerts;

impl SelectionAlerts {
    pub fn for_outcome(outcome: &SelectionOutcome) -> Option<Alert> {
        match outcome {
            SelectionOutcome::Cancelled
            | SelectionOutcome::EditorOpened(_)
            | SelectionOutcome::Busy => None,
            SelectionOutcome::NoVideoFound => Some(Alert::new(NO_VIDEO_TITLE, NO_VIDEO_MESSAGE)),
            SelectionOutcome::InvalidVideo(_) => {
                Some(Alert::new(INVALID_VIDEO_TITLE, INVALID_VIDEO_MESSAGE))
            }
            SelectionOutcome::Failed(_) => Some(Alert::new(ERROR_TITLE, SELECTION_ERROR_MESSAGE)),
        }
    }
}
