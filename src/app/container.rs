use std::sync::Arc;

use crate::adapters::{
    ConsoleAlertAdapter, EnvPermissionAdapter, FfmpegEditorAdapter, FsPickerAdapter, PickSource,
    ScreenConfig,
};
use crate::app::screen::TrimScreen;
use crate::ports::{AlertPort, EditorPort, MediaPickerPort, PermissionPort};

pub trait AppContainer: Send + Sync {
    fn screen(&self) -> Arc<TrimScreen>;
}

/// Wires the host adapters into one screen
pub struct DefaultAppContainer {
    screen: Arc<TrimScreen>,
    alerts: Arc<ConsoleAlertAdapter>,
}

impl DefaultAppContainer {
    pub fn new(config: &ScreenConfig, source: PickSource) -> Self {
        let permissions = Arc::new(EnvPermissionAdapter::new());
        let picker = Arc::new(FsPickerAdapter::new(source));
        let editor = Arc::new(FfmpegEditorAdapter::new(config));
        let alerts = Arc::new(ConsoleAlertAdapter::new());

        let screen = TrimScreen::new(
            permissions as Arc<dyn PermissionPort>,
            picker as Arc<dyn MediaPickerPort>,
            editor as Arc<dyn EditorPort>,
            Arc::clone(&alerts) as Arc<dyn AlertPort>,
            config.settings(),
        );

        Self { screen, alerts }
    }

    pub fn alerts(&self) -> Arc<ConsoleAlertAdapter> {
        Arc::clone(&self.alerts)
    }
}

impl AppContainer for DefaultAppContainer {
    fn screen(&self) -> Arc<TrimScreen> {
        Arc::clone(&self.screen)
    }
}
