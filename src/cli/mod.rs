//! CLI module for TrimScreen
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// TrimScreen
///
/// Pick a video, hand it to the trim editor and report what the editor did.
#[derive(Parser, Debug)]
#[command(name = "trim-screen")]
#[command(about = "Pick a video, trim it, and report the editor outcome")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, `[screen]` table)
    #[arg(long, global = true, env = "TRIM_SCREEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level or filter directive (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mount the screen, select a video and wait for the editor outcome
    Run(args::RunArgs),
    /// Run only the editor validity check on a file
    Validate(args::ValidateArgs),
    /// Print the effective configuration
    Config,
}
