//! Test doubles for the screen's ports

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{broadcast, Notify};

use trim_screen::ports::{AlertPort, EditorPort, MediaPickerPort, PermissionPort};
use trim_screen::*;

/// Picker returning scripted answers in order; the last one repeats
pub struct ScriptedPicker {
    results: Mutex<VecDeque<Result<PickerResult, DomainError>>>,
    calls: Mutex<Vec<PickerOptions>>,
    entered: Arc<Notify>,
    release: Option<Arc<Notify>>,
}

impl ScriptedPicker {
    fn build(
        results: Vec<Result<PickerResult, DomainError>>,
        release: Option<Arc<Notify>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            calls: Mutex::new(Vec::new()),
            entered: Arc::new(Notify::new()),
            release,
        })
    }

    pub fn returning(result: PickerResult) -> Arc<Self> {
        Self::build(vec![Ok(result)], None)
    }

    pub fn sequence(results: Vec<PickerResult>) -> Arc<Self> {
        Self::build(results.into_iter().map(Ok).collect(), None)
    }

    pub fn failing(error: DomainError) -> Arc<Self> {
        Self::build(vec![Err(error)], None)
    }

    /// Blocks inside `launch` until `release` is notified
    pub fn held(result: PickerResult, release: Arc<Notify>) -> Arc<Self> {
        Self::build(vec![Ok(result)], Some(release))
    }

    pub fn entered(&self) -> Arc<Notify> {
        Arc::clone(&self.entered)
    }

    pub fn calls(&self) -> Vec<PickerOptions> {
        self.calls.lock().unwrap().clone()
    }

    fn next_result(&self) -> Result<PickerResult, DomainError> {
        let mut results = self.results.lock().unwrap();
        if results.len() > 1 {
            results.pop_front().unwrap()
        } else {
            results.front().cloned().unwrap_or_else(|| Ok(PickerResult::cancelled()))
        }
    }
}

#[async_trait]
impl MediaPickerPort for ScriptedPicker {
    async fn launch(&self, options: &PickerOptions) -> Result<PickerResult, DomainError> {
        self.calls.lock().unwrap().push(options.clone());
        self.entered.notify_one();
        if let Some(release) = &self.release {
            release.notified().await;
        }
        self.next_result()
    }
}

/// Editor double backed by a real broadcast channel
pub struct FakeEditor {
    valid: Result<bool, DomainError>,
    show_result: Result<(), DomainError>,
    events: broadcast::Sender<RawEditorEvent>,
    validated: Mutex<Vec<VideoUri>>,
    shown: Mutex<Vec<(VideoUri, EditorConfig)>>,
}

impl FakeEditor {
    pub fn new(valid: Result<bool, DomainError>) -> Arc<Self> {
        Self::with_show_result(valid, Ok(()))
    }

    pub fn with_show_result(
        valid: Result<bool, DomainError>,
        show_result: Result<(), DomainError>,
    ) -> Arc<Self> {
        Arc::new(Self {
            valid,
            show_result,
            events: broadcast::channel(16).0,
            validated: Mutex::new(Vec::new()),
            shown: Mutex::new(Vec::new()),
        })
    }

    /// Push an event as the native editor would
    pub fn emit(&self, event: RawEditorEvent) {
        self.events.send(event).expect("no listener subscribed");
    }

    pub fn validated(&self) -> Vec<VideoUri> {
        self.validated.lock().unwrap().clone()
    }

    pub fn shown(&self) -> Vec<(VideoUri, EditorConfig)> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl EditorPort for FakeEditor {
    async fn is_valid_file(&self, uri: &VideoUri) -> Result<bool, DomainError> {
        self.validated.lock().unwrap().push(uri.clone());
        self.valid.clone()
    }

    async fn show_editor(&self, uri: &VideoUri, config: &EditorConfig) -> Result<(), DomainError> {
        self.shown.lock().unwrap().push((uri.clone(), config.clone()));
        self.show_result.clone()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<RawEditorEvent> {
        self.events.subscribe()
    }

    fn listener_count(&self) -> usize {
        self.events.receiver_count()
    }
}

/// Remembers every alert
#[derive(Default)]
pub struct RecordingAlerts {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingAlerts {
    pub fn all(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }
}

impl AlertPort for RecordingAlerts {
    fn alert(&self, alert: &Alert) {
        self.alerts.lock().unwrap().push(alert.clone());
    }
}

/// Permission double that signals when asked
pub struct FakePermissions {
    answer: Result<PermissionStatus, DomainError>,
    requests: Mutex<Vec<PermissionRequest>>,
    asked: Arc<Notify>,
}

impl FakePermissions {
    pub fn answering(answer: Result<PermissionStatus, DomainError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            requests: Mutex::new(Vec::new()),
            asked: Arc::new(Notify::new()),
        })
    }

    pub fn asked(&self) -> Arc<Notify> {
        Arc::clone(&self.asked)
    }

    pub fn requests(&self) -> Vec<PermissionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PermissionPort for FakePermissions {
    async fn request(&self, request: &PermissionRequest) -> Result<PermissionStatus, DomainError> {
        self.requests.lock().unwrap().push(request.clone());
        self.asked.notify_one();
        self.answer.clone()
    }
}

/// A screen wired to doubles
pub struct Harness {
    pub screen: Arc<TrimScreen>,
    pub picker: Arc<ScriptedPicker>,
    pub editor: Arc<FakeEditor>,
    pub alerts: Arc<RecordingAlerts>,
    pub permissions: Arc<FakePermissions>,
}

impl Harness {
    pub fn new(picker: Arc<ScriptedPicker>, editor: Arc<FakeEditor>) -> Self {
        Self::on_platform(picker, editor, Platform::Ios, Ok(PermissionStatus::Granted))
    }

    pub fn on_platform(
        picker: Arc<ScriptedPicker>,
        editor: Arc<FakeEditor>,
        platform: Platform,
        permission: Result<PermissionStatus, DomainError>,
    ) -> Self {
        let alerts = Arc::new(RecordingAlerts::default());
        let permissions = FakePermissions::answering(permission);
        let screen = TrimScreen::new(
            Arc::clone(&permissions) as Arc<dyn PermissionPort>,
            Arc::clone(&picker) as Arc<dyn MediaPickerPort>,
            Arc::clone(&editor) as Arc<dyn EditorPort>,
            Arc::clone(&alerts) as Arc<dyn AlertPort>,
            ScreenSettings {
                platform,
                ..ScreenSettings::default()
            },
        );
        Self {
            screen,
            picker,
            editor,
            alerts,
            permissions,
        }
    }
}

pub const PICKED: &str = "file:///DCIM/holiday.mp4";
