//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::domain::model::Platform;

/// Platform override on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Android,
    Ios,
    Other,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Android => Platform::Android,
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Other => Platform::Other,
        }
    }
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Video the picker hands back
    #[arg(short, long, conflicts_with = "library")]
    pub video: Option<PathBuf>,

    /// Library directory; the picker returns its first video
    #[arg(short, long)]
    pub library: Option<PathBuf>,

    /// Platform the screen pretends to run on
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,

    /// How long to wait for the editor outcome, in seconds
    #[arg(long, default_value = "120")]
    pub wait_secs: u64,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Video file to check
    #[arg(short, long)]
    pub video: PathBuf,
}
