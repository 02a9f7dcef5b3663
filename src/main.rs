//! TrimScreen
//!
//! Headless host for the trim screen: the picker reads from the file system,
//! the editor is `ffmpeg`, alerts go to stderr.
//!
//! # Usage
//!
//! ```bash
//! trim-screen run --video holiday.mov
//! trim-screen run --library ~/Videos --platform android --json
//! trim-screen validate --video holiday.mov
//! trim-screen config
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use trim_screen::cli::{commands, Cli, Commands};

/// Main entry point for the TrimScreen CLI
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    trim_screen::init_logging(cli.log_level.as_deref(), cli.json_logs);
    info!("Starting TrimScreen");

    let config = commands::load_config(&cli)?;

    match cli.command {
        Commands::Run(args) => {
            let json = args.json;
            let report = commands::run(config, args).await?;
            commands::print_report(&report, json)?;
        }
        Commands::Validate(args) => {
            if !commands::validate(config.config(), args).await? {
                anyhow::bail!("Not a valid video");
            }
        }
        Commands::Config => {
            commands::show_config(&config)?;
        }
    }

    Ok(())
}
