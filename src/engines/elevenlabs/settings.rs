use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stability values accepted by `eleven_v3`.
pub const V3_STABILITY_PRESETS: [f64; 3] = [0.0, 0.5, 1.0];

/// Synthesis model offered by ElevenLabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ElevenLabsModel {
    /// Highest quality, best for pre-generated clips.
    #[default]
    #[serde(rename = "eleven_v3")]
    ElevenV3,
    /// Faster generation, good quality.
    #[serde(rename = "eleven_turbo_v2")]
    ElevenTurboV2,
    /// Best for non-English languages.
    #[serde(rename = "eleven_multilingual_v2")]
    ElevenMultilingualV2,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown model '{0}'. Available: eleven_v3, eleven_turbo_v2, eleven_multilingual_v2")]
pub struct UnknownModel(pub String);

impl ElevenLabsModel {
    pub fn as_str(self) -> &'static str {
        match self {
            ElevenLabsModel::ElevenV3 => "eleven_v3",
            ElevenLabsModel::ElevenTurboV2 => "eleven_turbo_v2",
            ElevenLabsModel::ElevenMultilingualV2 => "eleven_multilingual_v2",
        }
    }
}

impl FromStr for ElevenLabsModel {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eleven_v3" => Ok(ElevenLabsModel::ElevenV3),
            "eleven_turbo_v2" => Ok(ElevenLabsModel::ElevenTurboV2),
            "eleven_multilingual_v2" => Ok(ElevenLabsModel::ElevenMultilingualV2),
            other => Err(UnknownModel(other.to_string())),
        }
    }
}

impl fmt::Display for ElevenLabsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery style of the voice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// 0.0 = creative, 0.5 = natural, 1.0 = robust.
    pub stability: f64,
    pub similarity_boost: f64,
    pub style: f64,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.0,
            similarity_boost: 0.85,
            style: 0.75,
            use_speaker_boost: true,
        }
    }
}

impl VoiceSettings {
    /// Whether the settings are accepted by `model`.
    pub fn is_valid_for(&self, model: ElevenLabsModel) -> bool {
        match model {
            ElevenLabsModel::ElevenV3 => V3_STABILITY_PRESETS.contains(&self.stability),
            _ => (0.0..=1.0).contains(&self.stability),
        }
    }
}
