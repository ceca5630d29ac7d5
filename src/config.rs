//! Command line configuration

use crate::error::{SilentTracksError, Result};
use crate::generator::DEFAULT_DURATION_SECS;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub root: PathBuf,
    pub duration_seconds: f64,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            duration_seconds: DEFAULT_DURATION_SECS,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "silent-tracks", about = "Placeholder silent music generator", version)]
pub struct Args {
    #[arg(short = 'C', long = "root", default_value = ".", help = "Directory the assets/music tree is created in")]
    pub root: PathBuf,

    #[arg(short = 'd', long = "duration", default_value_t = DEFAULT_DURATION_SECS, help = "Seconds of silence per file")]
    pub duration: f64,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let config = Self {
            root: args.root,
            duration_seconds: args.duration,
            verbose: args.verbose,
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(SilentTracksError::config(format!(
                "Duration must be a positive number of seconds, got {}", self.duration_seconds
            )));
        }

        if self.root.as_os_str().is_empty() {
            return Err(SilentTracksError::config("Root directory cannot be empty"));
        }

        Ok(())
    }
}
