//! Output encodings and the WAV container for raw PCM.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Generic extension for encodings without a well-known container.
pub const FALLBACK_EXTENSION: &str = "audio";

/// Audio encodings the synthesis service can return.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Mp3_44100_128,
    Mp3_44100_192,
    Mp3_22050_32,
    Pcm16000,
    Pcm22050,
    Pcm44100,
    Ulaw8000,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unknown output format '{0}'. Available: {available}",
    available = OutputFormat::available()
)]
pub struct UnknownFormat(pub String);

#[derive(thiserror::Error, Debug)]
pub enum WavError {
    #[error("PCM payload has an odd length ({0} bytes)")]
    OddLength(usize),
    #[error("WAV encoding failed: {0}")]
    Hound(#[from] hound::Error),
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Mp3_44100_128,
        OutputFormat::Mp3_44100_192,
        OutputFormat::Mp3_22050_32,
        OutputFormat::Pcm16000,
        OutputFormat::Pcm22050,
        OutputFormat::Pcm44100,
        OutputFormat::Ulaw8000,
    ];

    /// Identifier understood by the synthesis API.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Mp3_44100_128 => "mp3_44100_128",
            OutputFormat::Mp3_44100_192 => "mp3_44100_192",
            OutputFormat::Mp3_22050_32 => "mp3_22050_32",
            OutputFormat::Pcm16000 => "pcm_16000",
            OutputFormat::Pcm22050 => "pcm_22050",
            OutputFormat::Pcm44100 => "pcm_44100",
            OutputFormat::Ulaw8000 => "ulaw_8000",
        }
    }

    /// File extension for clips in this encoding.
    pub fn extension(self) -> &'static str {
        let id = self.as_str();
        if id.starts_with("mp3") {
            "mp3"
        } else if self.pcm_sample_rate().is_some() {
            "wav"
        } else {
            FALLBACK_EXTENSION
        }
    }

    /// Sample rate of raw 16-bit PCM encodings, `None` for anything else.
    pub fn pcm_sample_rate(self) -> Option<u32> {
        match self {
            OutputFormat::Pcm16000 => Some(16_000),
            OutputFormat::Pcm22050 => Some(22_050),
            OutputFormat::Pcm44100 => Some(44_100),
            _ => None,
        }
    }

    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write signed 16-bit little-endian mono PCM to a WAV file.
pub fn write_pcm_wav(
    path: &Path,
    pcm: &[u8],
    sample_rate: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    if pcm.len() % 2 != 0 {
        return Err(WavError::OddLength(pcm.len()).into());
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(WavError::from)?;
    for pair in pcm.chunks_exact(2) {
        writer
            .write_sample(i16::from_le_bytes([pair[0], pair[1]]))
            .map_err(WavError::from)?;
    }
    writer.finalize().map_err(WavError::from)?;
    Ok(())
}
