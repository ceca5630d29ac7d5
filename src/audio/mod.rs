//! Audio Module
//!
//! Fixed-format WAV writing and read-back inspection.

pub mod wav;

pub use wav::{SilenceSpec, WavSummary, SAMPLE_RATE, CHANNELS, BITS_PER_SAMPLE, WAV_EXTENSION};
