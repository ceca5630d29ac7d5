//! Placeholder track batch
//!
//! The five background-music placeholders, the fail-fast generation loop
//! over them, and a read-only check of what is currently on disk.

use std::fmt;
use std::path::{Path, PathBuf};
use crate::audio::{WavSummary, WAV_EXTENSION};
use crate::error::{SilentTracksError, Result};
use crate::generator::{self, GeneratedFile};

/// Directory the placeholders live in, relative to the batch root.
pub const MUSIC_DIR: &str = "assets/music";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderTrack {
    pub stem: &'static str,
    pub title: &'static str,
}

impl PlaceholderTrack {
    pub const fn new(stem: &'static str, title: &'static str) -> Self {
        Self { stem, title }
    }

    pub fn relative_path(&self) -> PathBuf {
        Path::new(MUSIC_DIR).join(format!("{}.{}", self.stem, WAV_EXTENSION))
    }
}

pub const DEFAULT_TRACKS: [PlaceholderTrack; 5] = [
    PlaceholderTrack::new("lofi_beats", "Lo-fi Beats"),
    PlaceholderTrack::new("nature_sounds", "Nature Sounds"),
    PlaceholderTrack::new("classical", "Classical"),
    PlaceholderTrack::new("white_noise", "White Noise"),
    PlaceholderTrack::new("cafe_ambience", "Café Ambience"),
];

pub const GUIDANCE: &str = "\
📋 Next steps:
1. Replace the .wav files with real .mp3 files
2. Or convert the WAV files to MP3 with an audio converter
3. Upload them to cloud storage with the Node.js upload script

💡 Free music sources:
   - https://freemusicarchive.org/
   - https://incompetech.com/
   - https://pixabay.com/music/";

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub files: Vec<GeneratedFile>,
}

impl BatchReport {
    pub fn total_data_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.data_bytes).sum()
    }
}

/// Generates every default track under `root`, stopping at the first error.
pub fn run_batch(root: &Path, duration_seconds: f64) -> Result<BatchReport> {
    println!("🎵 Creating placeholder music files...\n");

    let mut files = Vec::with_capacity(DEFAULT_TRACKS.len());
    for track in &DEFAULT_TRACKS {
        let target = root.join(track.relative_path());
        log::debug!("Generating '{}' at {}", track.title, target.display());
        files.push(generator::generate(&target, duration_seconds)?);
    }

    let report = BatchReport { files };
    log::info!(
        "Generated {} placeholder files ({} data bytes)",
        report.files.len(), report.total_data_bytes()
    );
    Ok(report)
}

pub fn print_guidance() {
    println!();
    println!("{}", GUIDANCE);
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackStatus {
    Valid(WavSummary),
    Missing,
    Invalid(String),
}

impl TrackStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, TrackStatus::Valid(_))
    }
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackStatus::Valid(summary) => write!(
                f, "OK ({:.2}s, {}Hz, {}ch, {} bit, silent)",
                summary.duration(), summary.sample_rate, summary.channels, summary.bits_per_sample
            ),
            TrackStatus::Missing => write!(f, "missing"),
            TrackStatus::Invalid(reason) => write!(f, "invalid: {}", reason),
        }
    }
}

pub fn check_track(path: &Path) -> TrackStatus {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => return TrackStatus::Missing,
        Err(e) => return TrackStatus::Invalid(e.to_string()),
    }

    match WavSummary::from_file(path) {
        Ok(summary) if !summary.matches_fixed_format() => TrackStatus::Invalid(format!(
            "expected {}Hz mono 16 bit PCM, found {}Hz {}ch {} bit {:?}",
            crate::audio::SAMPLE_RATE, summary.sample_rate, summary.channels,
            summary.bits_per_sample, summary.sample_format
        )),
        Ok(summary) if !summary.is_silent => TrackStatus::Invalid("contains non-zero samples".to_string()),
        Ok(summary) => TrackStatus::Valid(summary),
        Err(SilentTracksError::Io { source, .. }) => TrackStatus::Invalid(source.to_string()),
        Err(e) => TrackStatus::Invalid(e.to_string()),
    }
}

/// Reports the state of every default track under `root`; never stops early.
pub fn verify_tracks(root: &Path) -> Vec<(PlaceholderTrack, TrackStatus)> {
    DEFAULT_TRACKS
        .iter()
        .map(|track| {
            let status = check_track(&root.join(track.relative_path()));
            if !status.is_valid() {
                log::warn!("Track '{}' is {}", track.title, status);
            }
            (*track, status)
        })
        .collect()
}
