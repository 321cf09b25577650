use crate::audio::OutputFormat;
use crate::{SynthesisEngine, SynthesisRequest, SynthesisResult};

use super::client::{ElevenLabsClient, ElevenLabsError, TextToSpeechBody};
use super::settings::{ElevenLabsModel, VoiceSettings};

/// Parameters applied to every ElevenLabs synthesis request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElevenLabsParams {
    /// Model selection. Default `eleven_v3`.
    pub model: ElevenLabsModel,
    /// Encoding of the returned audio. Default `mp3_44100_128`.
    pub output_format: OutputFormat,
    /// Voice delivery parameters.
    pub voice_settings: VoiceSettings,
}

/// ElevenLabs text-to-speech engine.
///
/// # Quick Start
///
/// ```rust,no_run
/// use bingo_tts::{SynthesisEngine, SynthesisRequest};
/// use bingo_tts::engines::elevenlabs::{ElevenLabsEngine, ElevenLabsParams};
/// use std::path::Path;
///
/// let mut engine = ElevenLabsEngine::new("xi-api-key", ElevenLabsParams::default())?;
/// let request = SynthesisRequest {
///     voice_id: "9BWtsMINqrJLrRacOk9x",
///     text: "[excited] seven!",
///     language_code: "en",
/// };
/// engine.synthesize_to_file(&request, Path::new("seven.mp3"))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ElevenLabsEngine {
    client: ElevenLabsClient,
    params: ElevenLabsParams,
}

impl ElevenLabsEngine {
    pub fn new(
        api_key: impl Into<String>,
        params: ElevenLabsParams,
    ) -> Result<Self, ElevenLabsError> {
        Ok(Self::with_client(ElevenLabsClient::new(api_key)?, params))
    }

    pub fn with_client(client: ElevenLabsClient, params: ElevenLabsParams) -> Self {
        Self { client, params }
    }
}

impl SynthesisEngine for ElevenLabsEngine {
    fn output_format(&self) -> OutputFormat {
        self.params.output_format
    }

    fn synthesize(
        &mut self,
        request: &SynthesisRequest<'_>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>> {
        let body = TextToSpeechBody {
            text: request.text,
            model_id: self.params.model,
            voice_settings: self.params.voice_settings,
            language_code: request.language_code,
        };
        let audio = self
            .client
            .text_to_speech(request.voice_id, &body, self.params.output_format)?;

        Ok(SynthesisResult {
            audio,
            format: self.params.output_format,
        })
    }
}
