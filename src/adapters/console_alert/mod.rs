// Console alert adapter - Shows alerts on stderr

use std::sync::Mutex;

use tracing::info;

use crate::domain::model::Alert;
use crate::ports::AlertPort;

/// Prints alerts as `<title>: <message>` and keeps them for the final report
#[derive(Default)]
pub struct ConsoleAlertAdapter {
    shown: Mutex<Vec<Alert>>,
}

impl ConsoleAlertAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts shown so far
    pub fn shown(&self) -> Vec<Alert> {
        self.shown
            .lock()
            .map(|shown| shown.clone())
            .unwrap_or_default()
    }
}

impl AlertPort for ConsoleAlertAdapter {
    fn alert(&self, alert: &Alert) {
        info!(title = %alert.title, message = %alert.message, "Alert shown");
        eprintln!("{}", alert);
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(alert.clone());
        }
    }
}
