//! Error Types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum SilentTracksError {
    #[error("Audio error: {message}")]
    Audio { message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SilentTracksError {
    pub fn audio<S: Into<String>>(msg: S) -> Self { Self::Audio { message: msg.into() } }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }

    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Io { path: path.as_ref().to_path_buf(), source }
    }

    /// Wraps a `hound` failure, keeping OS errors as `Io` for the given path.
    pub fn wav<P: AsRef<Path>>(path: P, err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(source) => Self::io(path, source),
            other => Self::audio(format!("{}: {}", path.as_ref().display(), other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, SilentTracksError>;
