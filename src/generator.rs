//! Silent WAV generator
//!
//! Writes one placeholder file of digital silence. Whatever extension the
//! caller asks for, the file is written as WAV and named `.wav`; converting
//! to a compressed format is left to the user.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use crate::audio::SilenceSpec;
use crate::error::{SilentTracksError, Result};

pub const DEFAULT_DURATION_SECS: f64 = 1.0;

/// Description of a file written by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub frames: u64,
    pub data_bytes: u64,
}

/// Writes `duration_seconds` of silence next to `target_path`, as `.wav`.
///
/// Missing parent directories are created. OS failures are returned as
/// [`SilentTracksError::Io`] and nothing is cleaned up, so a failed write
/// may leave a truncated file behind.
pub fn generate<P: AsRef<Path>>(target_path: P, duration_seconds: f64) -> Result<GeneratedFile> {
    let spec = SilenceSpec::new(target_path, duration_seconds);
    let generated = write_silence(&spec)?;

    println!("✅ Created: {}", generated.path.display());
    println!("⚠️  Note: this is a silent WAV file. Convert it to MP3 or replace it with real music.");

    Ok(generated)
}

/// Same as [`generate`] without console output.
pub fn write_silence(spec: &SilenceSpec) -> Result<GeneratedFile> {
    spec.validate()?;

    if let Some(parent) = spec.target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SilentTracksError::io(parent, e))?;
        }
    }

    let path = spec.output_path();
    let file = File::create(&path).map_err(|e| SilentTracksError::io(&path, e))?;
    spec.write_to(BufWriter::new(file))
        .map_err(|e| SilentTracksError::wav(&path, e))?;

    log::debug!(
        "Wrote {}: {} frames, {} data bytes",
        path.display(), spec.frame_count(), spec.data_len_bytes()
    );

    Ok(GeneratedFile {
        path,
        frames: spec.frame_count(),
        data_bytes: spec.data_len_bytes(),
    })
}
