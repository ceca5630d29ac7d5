//! WAV container writing and inspection

use std::fs::File;
use std::io::{BufReader, Seek, Write};
use std::path::{Path, PathBuf};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use crate::error::{SilentTracksError, Result};

pub const SAMPLE_RATE: u32 = 44100;
pub const CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;

/// Extension of the only container this crate writes.
pub const WAV_EXTENSION: &str = "wav";

/// RIFF size fields are 32-bit and the RIFF size counts 36 header bytes.
const MAX_DATA_BYTES: u64 = u32::MAX as u64 - 36;

pub const fn bytes_per_frame() -> u16 {
    CHANNELS * (BITS_PER_SAMPLE / 8)
}

pub fn wav_spec() -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// One silent file to produce: where, and how many seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SilenceSpec {
    pub target_path: PathBuf,
    pub duration_seconds: f64,
}

impl SilenceSpec {
    pub fn new<P: AsRef<Path>>(target_path: P, duration_seconds: f64) -> Self {
        Self {
            target_path: target_path.as_ref().to_path_buf(),
            duration_seconds,
        }
    }

    /// Frames of silence, truncating any fractional frame.
    pub fn frame_count(&self) -> u64 {
        (SAMPLE_RATE as f64 * self.duration_seconds) as u64
    }

    /// Saturates at `u64::MAX` so oversized durations still fail `validate`.
    pub fn data_len_bytes(&self) -> u64 {
        self.frame_count().saturating_mul(bytes_per_frame() as u64)
    }

    /// The requested path with its extension forced to `.wav`.
    pub fn output_path(&self) -> PathBuf {
        self.target_path.with_extension(WAV_EXTENSION)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration_seconds.is_finite() {
            return Err(SilentTracksError::audio(format!(
                "Duration must be a finite number of seconds, got {}", self.duration_seconds
            )));
        }

        if self.duration_seconds <= 0.0 {
            return Err(SilentTracksError::audio(format!(
                "Duration must be greater than 0, got {}", self.duration_seconds
            )));
        }

        if self.data_len_bytes() > MAX_DATA_BYTES {
            return Err(SilentTracksError::audio(format!(
                "Duration {}s exceeds the WAV size limit", self.duration_seconds
            )));
        }

        Ok(())
    }

    /// Writes the header and `frame_count()` zero samples into `out`.
    pub fn write_to<W: Write + Seek>(&self, out: W) -> std::result::Result<(), hound::Error> {
        let mut writer = WavWriter::new(out, wav_spec())?;
        for _ in 0..self.frame_count() * CHANNELS as u64 {
            writer.write_sample(0i16)?;
        }
        writer.finalize()
    }

    /// Encodes the whole container in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.validate()?;
        let mut cursor = std::io::Cursor::new(Vec::with_capacity(44 + self.data_len_bytes() as usize));
        self.write_to(&mut cursor)
            .map_err(|e| SilentTracksError::wav(self.output_path(), e))?;
        Ok(cursor.into_inner())
    }
}

/// What a WAV file on disk actually contains.
#[derive(Debug, Clone, PartialEq)]
pub struct WavSummary {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
    pub frames: u32,
    pub is_silent: bool,
}

impl WavSummary {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SilentTracksError::io(path, e))?;
        let mut reader = WavReader::new(BufReader::new(file))
            .map_err(|e| SilentTracksError::wav(path, e))?;

        let spec = reader.spec();
        let frames = reader.duration();

        let is_silent = match spec.sample_format {
            SampleFormat::Int => {
                let mut silent = true;
                for sample in reader.samples::<i32>() {
                    if sample.map_err(|e| SilentTracksError::wav(path, e))? != 0 {
                        silent = false;
                        break;
                    }
                }
                silent
            }
            SampleFormat::Float => {
                let mut silent = true;
                for sample in reader.samples::<f32>() {
                    if sample.map_err(|e| SilentTracksError::wav(path, e))? != 0.0 {
                        silent = false;
                        break;
                    }
                }
                silent
            }
        };

        Ok(Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
            frames,
            is_silent,
        })
    }

    pub fn matches_fixed_format(&self) -> bool {
        self.channels == CHANNELS
            && self.sample_rate == SAMPLE_RATE
            && self.bits_per_sample == BITS_PER_SAMPLE
            && self.sample_format == SampleFormat::Int
    }

    pub fn duration(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }

    pub fn data_len_bytes(&self) -> u64 {
        self.frames as u64 * self.channels as u64 * (self.bits_per_sample as u64 / 8)
    }
}
