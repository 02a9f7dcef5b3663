// Trim screen - Coordinates permission, selection, validation and the editor

mod listener;

use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, instrument, warn};

use crate::domain::errors::DomainError;
use crate::domain::events::EDITOR_EVENT_CHANNEL;
use crate::domain::model::*;
use crate::domain::rules::{EventEffect, SelectionAlerts};
use crate::error::{ScreenError, ScreenResult};
use crate::ports::*;

use crate::app::permission_gate::PermissionGate;
pub use listener::{EventListener, EventSubscription};

/// Fixed inputs of the screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenSettings {
    pub platform: Platform,
    pub editor: EditorConfig,
    pub permission: PermissionRequest,
}

/// Single-screen coordinator with injected collaborators
pub struct TrimScreen {
    permissions: Arc<dyn PermissionPort>,
    picker: Arc<dyn MediaPickerPort>,
    editor: Arc<dyn EditorPort>,
    alerts: Arc<dyn AlertPort>,
    settings: ScreenSettings,
    state: Arc<Mutex<ScreenState>>,
    effects: broadcast::Sender<EventEffect>,
    mounted: Arc<AtomicBool>,
}

const EFFECT_CHANNEL_CAPACITY: usize = 64;

impl TrimScreen {
    /// Create new screen with injected ports
    pub fn new(
        permissions: Arc<dyn PermissionPort>,
        picker: Arc<dyn MediaPickerPort>,
        editor: Arc<dyn EditorPort>,
        alerts: Arc<dyn AlertPort>,
        settings: ScreenSettings,
    ) -> Arc<Self> {
        let (effects, _) = broadcast::channel(EFFECT_CHANNEL_CAPACITY);
        Arc::new(Self {
            permissions,
            picker,
            editor,
            alerts,
            settings,
            state: Arc::new(Mutex::new(ScreenState::default())),
            effects,
            mounted: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Subscribe to editor events and kick off the permission request.
    /// Fails if a subscription is already live.
    pub fn mount(self: &Arc<Self>) -> ScreenResult<MountedScreen> {
        if self
            .mounted
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ScreenError::AlreadyMounted);
        }

        let listener = EventListener::new(
            Arc::clone(&self.state),
            Arc::clone(&self.alerts),
            self.effects.clone(),
        );
        let subscription = EventSubscription::spawn(
            listener,
            self.editor.subscribe_events(),
            Arc::clone(&self.mounted),
        );

        PermissionGate::new(
            Arc::clone(&self.permissions),
            self.settings.permission.clone(),
        )
        .spawn(self.settings.platform);

        info!(
            platform = ?self.settings.platform,
            channel = EDITOR_EVENT_CHANNEL,
            "Trim screen mounted"
        );
        Ok(MountedScreen {
            screen: Arc::clone(self),
            subscription,
        })
    }

    /// Effects of editor events, published after they were applied to the state
    pub fn subscribe_effects(&self) -> broadcast::Receiver<EventEffect> {
        self.effects.subscribe()
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> ScreenState {
        self.state.lock().await.clone()
    }

    pub async fn view(&self) -> ScreenView {
        self.state.lock().await.view()
    }

    /// Pick a video, validate it and hand it to the editor.
    /// Never fails: every failure becomes an alert and an outcome.
    #[instrument(skip(self))]
    pub async fn select_video(&self) -> SelectionOutcome {
        {
            let mut state = self.state.lock().await;
            if state.loading {
                debug!("Selection already in flight, ignoring trigger");
                return SelectionOutcome::Busy;
            }
            state.loading = true;
        }
        let loading = LoadingGuard::armed(Arc::clone(&self.state));

        let outcome = match self.pick_and_delegate().await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Error selecting video");
                SelectionOutcome::Failed(e.to_string())
            }
        };

        if let Some(alert) = SelectionAlerts::for_outcome(&outcome) {
            self.alerts.alert(&alert);
        }

        loading.clear().await;
        outcome
    }

    async fn pick_and_delegate(&self) -> Result<SelectionOutcome, DomainError> {
        let result = self.picker.launch(&PickerOptions::video()).await?;

        if result.did_cancel {
            info!("User cancelled video selection");
            return Ok(SelectionOutcome::Cancelled);
        }

        let uri = match result.first_uri() {
            Some(uri) => uri,
            None => {
                info!(assets = result.assets.len(), "Picker returned no video reference");
                return Ok(SelectionOutcome::NoVideoFound);
            }
        };

        self.state.lock().await.selected_video = Some(uri.clone());
        info!(uri = %uri, "Video selected");

        if !self.editor.is_valid_file(&uri).await? {
            info!(uri = %uri, "Selected video rejected by editor");
            return Ok(SelectionOutcome::InvalidVideo(uri));
        }

        self.editor.show_editor(&uri, &self.settings.editor).await?;
        info!(uri = %uri, max_duration = self.settings.editor.max_duration, "Editor opened");
        Ok(SelectionOutcome::EditorOpened(uri))
    }
}

/// Clears the loading flag when a selection ends, including when the
/// caller stops polling `select_video` halfway through.
struct LoadingGuard {
    state: Arc<Mutex<ScreenState>>,
    armed: bool,
}

impl LoadingGuard {
    fn armed(state: Arc<Mutex<ScreenState>>) -> Self {
        Self { state, armed: true }
    }

    async fn clear(mut self) {
        self.state.lock().await.loading = false;
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Selection abandoned before it finished");
        match self.state.try_lock() {
            Ok(mut state) => state.loading = false,
            Err(_) => {
                // Lock is busy; finish the reset on the runtime
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    let state = Arc::clone(&self.state);
                    handle.spawn(async move {
                        state.lock().await.loading = false;
                    });
                }
            }
        }
    }
}

/// A screen with a live event subscription
pub struct MountedScreen {
    screen: Arc<TrimScreen>,
    subscription: EventSubscription,
}

impl MountedScreen {
    pub fn screen(&self) -> &Arc<TrimScreen> {
        &self.screen
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_active()
    }

    /// Release the event subscription; returns once the listener is gone
    pub async fn unmount(self) {
        self.subscription.release().await;
        info!("Trim screen unmounted");
    }
}

impl Deref for MountedScreen {
    type Target = TrimScreen;

    fn deref(&self) -> &Self::Target {
        &self.screen
    }
}
