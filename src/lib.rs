//! Silent Tracks - placeholder background music generator
//!
//! Writes one-second silent WAV files standing in for real music tracks.

pub mod audio;
pub mod batch;
pub mod config;
pub mod error;
pub mod generator;

pub use config::{Config, Args};
pub use error::{SilentTracksError, Result};
pub use generator::{generate, GeneratedFile};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()
        .ok();
}

/// One-line banner, e.g. `silent-tracks v0.1.0 - Placeholder ...`.
pub fn banner() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
