//! # bingo-tts
//!
//! Batch generation of spoken bingo numbers through a text-to-speech service.
//!
//! ## Features
//!
//! - **90-ball and 75-ball calls**: every number spoken as a full word, two-digit
//!   numbers followed by their digits, 75-ball numbers with their B/I/N/G/O letter
//! - **Multiple languages**: Spanish, English (US/UK), French, Portuguese, Italian
//! - **Idempotent runs**: a clip already on disk is never requested again
//! - **Voice packs**: a voice's clips and a `voice.yml` manifest bundled into a ZIP
//! - **ElevenLabs engine**: enabled by the default `elevenlabs` feature
//!
//! ## Quick Start
//!
//! ```ignore
//! use bingo_tts::config::{GeneratorConfig, VoiceCatalog};
//! use bingo_tts::engines::elevenlabs::{ElevenLabsEngine, ElevenLabsParams};
//! use bingo_tts::materializer::BatchMaterializer;
//! use bingo_tts::locale::Locale;
//!
//! let engine = ElevenLabsEngine::new("xi-api-key", ElevenLabsParams::default())?;
//! let voices = VoiceCatalog::builtin().select(Locale::EsEs, Some("lucia"))?;
//! let mut batch = BatchMaterializer::new(engine, GeneratorConfig::default());
//! let report = batch.run(Locale::EsEs, &voices)?;
//! println!("{} written, {} skipped", report.written, report.skipped);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audio;
pub mod bingo;
pub mod config;
pub mod engines;
pub mod export;
pub mod lexicon;
pub mod locale;
pub mod materializer;
pub mod phrase;

use std::path::Path;

use audio::OutputFormat;

/// One utterance to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisRequest<'a> {
    /// Vendor voice identifier
    pub voice_id: &'a str,
    /// Text passed verbatim to the engine
    pub text: &'a str,
    /// Language subcode (`"es"`, `"en"`, ...)
    pub language_code: &'a str,
}

/// The result of a synthesis (text-to-speech) operation.
///
/// Contains the encoded audio exactly as the engine returned it.
#[derive(Debug)]
pub struct SynthesisResult {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Encoding of `audio`
    pub format: OutputFormat,
}

impl SynthesisResult {
    /// Write the audio to `path`.
    ///
    /// Raw PCM is wrapped into a WAV container; other encodings are written
    /// as received. The bytes go to a sibling `.part` file first and are
    /// renamed into place, so `path` only ever holds a complete clip.
    pub fn write_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let mut staging = path.as_os_str().to_owned();
        staging.push(".part");
        let staging = Path::new(&staging);

        let written: Result<(), Box<dyn std::error::Error>> = match self.format.pcm_sample_rate() {
            Some(sample_rate) => {
                audio::write_pcm_wav(staging, &self.audio, sample_rate).map_err(Into::into)
            }
            None => std::fs::write(staging, &self.audio).map_err(Into::into),
        };
        if let Err(e) = written {
            let _ = std::fs::remove_file(staging);
            return Err(e);
        }

        std::fs::rename(staging, path)?;
        Ok(())
    }
}

/// Common interface for text-to-speech synthesis engines.
///
/// An engine is configured once (model, encoding, delivery settings) and then
/// asked for one utterance at a time.
pub trait SynthesisEngine {
    /// Encoding of the audio this engine produces.
    fn output_format(&self) -> OutputFormat;

    /// Synthesize speech for a single request.
    fn synthesize(
        &mut self,
        request: &SynthesisRequest<'_>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>>;

    /// Synthesize speech and write it to a file.
    ///
    /// Default implementation calls `synthesize()` then `SynthesisResult::write_to()`.
    fn synthesize_to_file(
        &mut self,
        request: &SynthesisRequest<'_>,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.synthesize(request)?.write_to(path)
    }
}

#[cfg(test)]
mod tests {
    use super::SynthesisResult;
    use crate::audio::OutputFormat;

    #[test]
    fn writes_encoded_audio_as_received() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp3");
        let result = SynthesisResult {
            audio: vec![0xff, 0xfb, 0x90, 0x00],
            format: OutputFormat::Mp3_44100_128,
        };
        result.write_to(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xff, 0xfb, 0x90, 0x00]);
        assert!(!dir.path().join("clip.mp3.part").exists());
    }

    #[test]
    fn wraps_pcm_in_wav_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        let result = SynthesisResult {
            audio: vec![0x01, 0x00, 0xff, 0xff],
            format: OutputFormat::Pcm22050,
        };
        result.write_to(&path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 22050);
        let samples: Vec<i16> = reader.into_samples::<i16>().map(Result::unwrap).collect();
        assert_eq!(samples, vec![1, -1]);
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        let result = SynthesisResult {
            audio: vec![0x01, 0x00, 0xff],
            format: OutputFormat::Pcm16000,
        };
        assert!(result.write_to(&path).is_err());
        assert!(!path.exists());
        assert!(!dir.path().join("clip.wav.part").exists());
    }
}
