// Editor events - Wire shape and typed variants of the editor event channel

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::model::VideoUri;

/// Name of the channel the editor subsystem emits on
pub const EDITOR_EVENT_CHANNEL: &str = "VideoTrim";

pub const ON_SHOW: &str = "onShow";
pub const ON_ERROR: &str = "onError";
pub const ON_SAVE: &str = "onSave";

/// Event exactly as pushed by the editor: `{ name, message?, uri?, ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEditorEvent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Any other payload fields, kept for logging
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawEditorEvent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: None,
            uri: None,
            extra: Map::new(),
        }
    }

    pub fn on_show() -> Self {
        Self::named(ON_SHOW)
    }

    pub fn on_error(message: Option<&str>) -> Self {
        Self {
            message: message.map(str::to_string),
            ..Self::named(ON_ERROR)
        }
    }

    pub fn on_save(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::named(ON_SAVE)
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Editor event after demultiplexing by tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Editor UI became visible
    Show,
    /// Editor failed; message is the payload text, if any
    Error { message: Option<String> },
    /// Trimmed output was written
    Save { uri: Option<VideoUri> },
    /// Any tag this screen does not act on
    Unknown { name: String },
}

impl EditorEvent {
    pub fn name(&self) -> &str {
        match self {
            EditorEvent::Show => ON_SHOW,
            EditorEvent::Error { .. } => ON_ERROR,
            EditorEvent::Save { .. } => ON_SAVE,
            EditorEvent::Unknown { name } => name,
        }
    }
}

impl From<RawEditorEvent> for EditorEvent {
    fn from(raw: RawEditorEvent) -> Self {
        match raw.name.as_str() {
            ON_SHOW => EditorEvent::Show,
            ON_ERROR => EditorEvent::Error {
                message: raw.message.filter(|m| !m.is_empty()),
            },
            ON_SAVE => EditorEvent::Save {
                uri: raw.uri.and_then(VideoUri::new),
            },
            _ => EditorEvent::Unknown { name: raw.name },
        }
    }
}
