// Event listener - Long-lived subscription to the editor event channel

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::events::{EditorEvent, RawEditorEvent};
use crate::domain::model::ScreenState;
use crate::domain::rules::{EventDispatcher, EventEffect};
use crate::ports::AlertPort;

/// Applies editor events to the shared screen state
#[derive(Clone)]
pub struct EventListener {
    state: Arc<Mutex<ScreenState>>,
    alerts: Arc<dyn AlertPort>,
    effects: broadcast::Sender<EventEffect>,
}

impl EventListener {
    pub fn new(
        state: Arc<Mutex<ScreenState>>,
        alerts: Arc<dyn AlertPort>,
        effects: broadcast::Sender<EventEffect>,
    ) -> Self {
        Self {
            state,
            alerts,
            effects,
        }
    }

    /// Process one event fully; the state lock is held only for the mutation
    pub async fn handle(&self, raw: RawEditorEvent) -> EventEffect {
        debug!(name = %raw.name, payload = ?raw.extra, "Editor event received");
        let event = EditorEvent::from(raw);

        let effect = {
            let mut state = self.state.lock().await;
            EventDispatcher::apply(&mut state, &event)
        };

        match &effect {
            EventEffect::Informational => {
                info!(event = event.name(), "Editor event");
            }
            EventEffect::Alert(alert) => {
                warn!(event = event.name(), message = %alert.message, "Editor reported an error");
                self.alerts.alert(alert);
            }
            EventEffect::Saved(Some(uri)) => {
                info!(uri = %uri, "Trimmed video saved");
            }
            EventEffect::Saved(None) => {
                warn!("Editor saved without an output reference");
            }
        }

        // Observers are optional
        let _ = self.effects.send(effect.clone());
        effect
    }

    /// Drain the receiver until the channel closes or the task is aborted
    async fn run(self, mut registration: Registration) {
        loop {
            match registration.recv().await {
                Ok(raw) => {
                    self.handle(raw).await;
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Editor event listener lagged behind");
                }
                Err(RecvError::Closed) => {
                    debug!("Editor event channel closed");
                    break;
                }
            }
        }
    }
}

/// Receiver owned by the listener task. The screen counts as mounted until
/// this is dropped, and the receiver goes first.
struct Registration {
    events: Option<broadcast::Receiver<RawEditorEvent>>,
    mounted: Arc<AtomicBool>,
}

impl Registration {
    async fn recv(&mut self) -> Result<RawEditorEvent, RecvError> {
        match self.events.as_mut() {
            Some(events) => events.recv().await,
            None => Err(RecvError::Closed),
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        drop(self.events.take());
        self.mounted.store(false, Ordering::SeqCst);
    }
}

/// Handle to the active listener task. Aborted exactly once, either
/// through `release` or on drop.
pub struct EventSubscription {
    task: Option<JoinHandle<()>>,
}

impl EventSubscription {
    pub(crate) fn spawn(
        listener: EventListener,
        events: broadcast::Receiver<RawEditorEvent>,
        mounted: Arc<AtomicBool>,
    ) -> Self {
        let registration = Registration {
            events: Some(events),
            mounted,
        };
        let task = tokio::spawn(listener.run(registration));
        Self { task: Some(task) }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop listening and wait until the receiver has been dropped
    pub async fn release(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            debug!("Editor event subscription released");
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Editor event subscription dropped");
        }
    }
}
