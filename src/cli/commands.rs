//! Command implementations

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::adapters::{
    FfmpegEditorAdapter, PickSource, ScreenConfig, TomlConfigAdapter,
};
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::args::{RunArgs, ValidateArgs};
use crate::cli::Cli;
use crate::domain::model::*;
use crate::domain::rules::EventEffect;
use crate::ports::EditorPort;

/// What a `run` session ended with
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub outcome: String,
    pub state: ScreenState,
    pub alerts: Vec<Alert>,
}

/// Defaults < file < environment
pub fn load_config(cli: &Cli) -> Result<TomlConfigAdapter> {
    let mut adapter = match &cli.config {
        Some(path) => TomlConfigAdapter::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TomlConfigAdapter::new(),
    };
    adapter
        .apply_env()
        .context("Invalid environment configuration")?;
    Ok(adapter)
}

/// Execute the run command
pub async fn run(mut config: TomlConfigAdapter, args: RunArgs) -> Result<RunReport> {
    if let Some(platform) = args.platform {
        config.set_platform(platform.into());
    }
    let config = config.into_config();

    let source = match (args.video, args.library) {
        (Some(video), _) => PickSource::File(video),
        (None, Some(library)) => PickSource::Library(library),
        (None, None) => PickSource::None,
    };

    let container = DefaultAppContainer::new(&config, source);
    let screen = container.screen();
    let mounted = screen.mount()?;
    let mut effects = screen.subscribe_effects();

    let outcome = mounted.select_video().await;
    info!(outcome = outcome.label(), "Selection finished");

    if let SelectionOutcome::EditorOpened(_) = &outcome {
        let wait = Duration::from_secs(args.wait_secs);
        let finished = tokio::time::timeout(wait, async {
            loop {
                match effects.recv().await {
                    Ok(EventEffect::Informational) => continue,
                    Ok(effect) => return Some(effect),
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => return None,
                }
            }
        })
        .await;
        match finished {
            Ok(Some(effect)) => info!(?effect, "Editor finished"),
            Ok(None) => warn!("Effect channel closed before the editor finished"),
            Err(_) => warn!(wait_secs = args.wait_secs, "Gave up waiting for the editor"),
        }
    }

    let state = mounted.state().await;
    mounted.unmount().await;

    Ok(RunReport {
        outcome: outcome.label().to_string(),
        state,
        alerts: container.alerts().shown(),
    })
}

/// Print a run report
pub fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let show = |uri: &Option<VideoUri>| {
        uri.as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    println!("outcome: {}", report.outcome);
    println!("selected: {}", show(&report.state.selected_video));
    println!("trimmed: {}", show(&report.state.trimmed_video));
    Ok(())
}

/// Execute the validate command
pub async fn validate(config: &ScreenConfig, args: ValidateArgs) -> Result<bool> {
    let path = std::fs::canonicalize(&args.video)
        .with_context(|| format!("Cannot access {}", args.video.display()))?;
    let uri = VideoUri::from_path(&path).context("Empty video path")?;

    let editor = FfmpegEditorAdapter::new(config);
    let valid = editor.is_valid_file(&uri).await?;
    println!("{}: {}", uri, if valid { "valid" } else { "invalid" });
    Ok(valid)
}

/// Execute the config command
pub fn show_config(config: &TomlConfigAdapter) -> Result<()> {
    if let Some(path) = config.config_file_path() {
        info!(path = %path.display(), "Effective configuration");
    }
    print!("{}", config.to_toml_string()?);
    Ok(())
}
