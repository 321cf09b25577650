use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::settings::{ElevenLabsModel, VoiceSettings};
use crate::audio::OutputFormat;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Request timeout for one synthesis call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Longest error body kept in an [`ElevenLabsError::Api`] message.
pub const MAX_ERROR_CHARS: usize = 500;

#[derive(thiserror::Error, Debug)]
pub enum ElevenLabsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("TTS failed ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Voice limit reached. Unable to add more custom voices.")]
    VoiceLimitReached,
    #[error("No API key configured. Set ELEVENLABS_API_KEY or pass --api-key.")]
    NoApiKey,
}

/// JSON body of a text-to-speech request.
#[derive(Debug, Serialize)]
pub struct TextToSpeechBody<'a> {
    pub text: &'a str,
    pub model_id: ElevenLabsModel,
    pub voice_settings: VoiceSettings,
    pub language_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    status: Option<String>,
}

/// Blocking client for the text-to-speech endpoint.
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ElevenLabsError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client against a different host, e.g. a local proxy.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ElevenLabsError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ElevenLabsError::NoApiKey);
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn speech_url(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{voice_id}", self.base_url)
    }

    /// Synthesize `body` with `voice_id`, returning the raw audio bytes.
    pub fn text_to_speech(
        &self,
        voice_id: &str,
        body: &TextToSpeechBody<'_>,
        format: OutputFormat,
    ) -> Result<Vec<u8>, ElevenLabsError> {
        let url = self.speech_url(voice_id);
        log::debug!("POST {url} (model={}, format={format})", body.model_id);

        let resp = self
            .http
            .post(&url)
            .query(&[("output_format", format.as_str())])
            .header("xi-api-key", &self.api_key)
            .json(body)
            .send()?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let text = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(api_error(status.as_u16(), &text));
        }

        Ok(resp.bytes()?.to_vec())
    }
}

/// Map a non-success response body to an error.
pub fn api_error(status: u16, body: &str) -> ElevenLabsError {
    let limit_reached = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.detail)
        .and_then(|d| d.status)
        .is_some_and(|s| s == "voice_limit_reached");
    if limit_reached {
        return ElevenLabsError::VoiceLimitReached;
    }

    ElevenLabsError::Api {
        status,
        message: body.chars().take(MAX_ERROR_CHARS).collect(),
    }
}
