//! Voices, run settings and their validation.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_builder::{Builder, UninitializedFieldError};
use serde::{Deserialize, Serialize};

use crate::bingo::GameVariant;
use crate::locale::{Locale, UnknownLocale};

/// Default root for generated clips.
pub const DEFAULT_OUTPUT_DIR: &str = "out_audio";

/// Pause after every synthesis call.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(350);

/// Environment variable holding the ElevenLabs API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownLocale(#[from] UnknownLocale),
    #[error("Voice '{voice}' not found for language '{locale}'. Available: {available}")]
    UnknownVoice {
        voice: String,
        locale: Locale,
        available: String,
    },
    #[error("No voices configured for language '{0}'")]
    NoVoices(Locale),
    #[error("No API key configured. Set ELEVENLABS_API_KEY or pass --api-key.")]
    MissingApiKey,
    #[error("Stability {stability} is not accepted by {model} (expected {expected})")]
    InvalidStability {
        model: String,
        stability: f64,
        expected: String,
    },
    #[error("Failed to read voices file {path}: {source}")]
    VoicesFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid voices file: {0}")]
    VoicesJson(#[from] serde_json::Error),
    #[error("Setting not provided: {0}")]
    Uninitialized(String),
}

impl From<UninitializedFieldError> for ConfigError {
    fn from(e: UninitializedFieldError) -> Self {
        ConfigError::Uninitialized(e.field_name().to_string())
    }
}

/// A named synthesis identity bound to a vendor voice id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    #[serde(alias = "voice_id")]
    pub id: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Name as used in directory and file names.
    pub fn file_system_name(&self) -> String {
        sanitize_for_file_system(&self.name)
    }
}

/// Trim, lower-case, turn spaces into `_` and keep only alphanumerics,
/// `_` and `-`. Falls back to `"voice"` when nothing is left.
pub fn sanitize_for_file_system(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if sanitized.is_empty() {
        "voice".to_string()
    } else {
        sanitized
    }
}

/// Voices available per locale, in listed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCatalog {
    voices: BTreeMap<Locale, Vec<Voice>>,
}

impl VoiceCatalog {
    /// Voices shipped with the tool.
    pub fn builtin() -> Self {
        let mut voices = BTreeMap::new();
        voices.insert(
            Locale::EsEs,
            vec![
                Voice::new("lucia", "gEPYSePlyPI0GZQOPyat"),
                Voice::new("manuel", "BXtvkfRgOYGPQKVRgufE"),
            ],
        );
        voices.insert(Locale::EnUs, vec![Voice::new("aria", "9BWtsMINqrJLrRacOk9x")]);
        voices.insert(Locale::FrFr, vec![Voice::new("marie", "Xgb3SR8idOHy8scGICeJ")]);
        Self { voices }
    }

    /// Replace the voices of every locale named in a JSON voices file.
    ///
    /// ```json
    /// { "pt-BR": [{ "name": "ana", "id": "..." }] }
    /// ```
    pub fn with_overrides_file(self, path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::VoicesFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.with_overrides_json(&content)
    }

    pub fn with_overrides_json(mut self, json: &str) -> Result<Self, ConfigError> {
        let parsed: HashMap<String, Vec<Voice>> = serde_json::from_str(json)?;
        for (id, voices) in parsed {
            let locale: Locale = id.parse()?;
            log::warn!(
                "Voices for {locale} replaced from voices file ({} voices)",
                voices.len()
            );
            self.voices.insert(locale, voices);
        }
        Ok(self)
    }

    pub fn voices(&self, locale: Locale) -> &[Voice] {
        self.voices.get(&locale).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn voice(&self, locale: Locale, name: &str) -> Option<&Voice> {
        self.voices(locale).iter().find(|v| v.name == name)
    }

    /// Voices to generate: the named one, or every voice of the locale.
    pub fn select(&self, locale: Locale, name: Option<&str>) -> Result<Vec<Voice>, ConfigError> {
        let voices = self.voices(locale);
        if voices.is_empty() {
            return Err(ConfigError::NoVoices(locale));
        }
        match name {
            None => Ok(voices.to_vec()),
            Some(name) => self
                .voice(locale, name)
                .cloned()
                .map(|v| vec![v])
                .ok_or_else(|| ConfigError::UnknownVoice {
                    voice: name.to_string(),
                    locale,
                    available: voices
                        .iter()
                        .map(|v| v.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                }),
        }
    }

    /// Validate an operator request: parse the locale identifier and pick
    /// its voices. Nothing is touched on failure.
    pub fn resolve(
        &self,
        lang: &str,
        voice: Option<&str>,
    ) -> Result<(Locale, Vec<Voice>), ConfigError> {
        let locale: Locale = lang.parse()?;
        let voices = self.select(locale, voice)?;
        Ok((locale, voices))
    }

    /// `"es-ES: lucia, manuel | en-US: aria | ..."`
    pub fn summary(&self) -> String {
        self.voices
            .iter()
            .filter(|(_, voices)| !voices.is_empty())
            .map(|(locale, voices)| {
                let names: Vec<&str> = voices.iter().map(|v| v.name.as_str()).collect();
                format!("{locale}: {}", names.join(", "))
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Settings of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(build_fn(error = "ConfigError"))]
pub struct GeneratorConfig {
    /// Root of the `{locale}/{voice}/` tree.
    #[builder(setter(into), default = "PathBuf::from(DEFAULT_OUTPUT_DIR)")]
    pub output_dir: PathBuf,
    /// Pause after each synthesis call, successful or not.
    #[builder(default = "DEFAULT_DELAY")]
    pub delay: Duration,
    /// Variants to generate, in order.
    #[builder(default = "GameVariant::ALL.to_vec()")]
    pub variants: Vec<GameVariant>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            delay: DEFAULT_DELAY,
            variants: GameVariant::ALL.to_vec(),
        }
    }
}

/// Fail with the first voice setting the model rejects.
#[cfg(feature = "elevenlabs")]
pub fn check_voice_settings(
    model: crate::engines::elevenlabs::ElevenLabsModel,
    settings: &crate::engines::elevenlabs::VoiceSettings,
) -> Result<(), ConfigError> {
    use crate::engines::elevenlabs::{settings::V3_STABILITY_PRESETS, ElevenLabsModel};

    if settings.is_valid_for(model) {
        return Ok(());
    }
    let expected = match model {
        ElevenLabsModel::ElevenV3 => V3_STABILITY_PRESETS
            .iter()
            .map(|s| format!("{s:.1}"))
            .collect::<Vec<_>>()
            .join(", "),
        _ => "0.0 to 1.0".to_string(),
    };
    Err(ConfigError::InvalidStability {
        model: model.to_string(),
        stability: settings.stability,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        sanitize_for_file_system, ConfigError, GeneratorConfig, GeneratorConfigBuilder, Voice,
        VoiceCatalog, DEFAULT_DELAY,
    };
    use crate::bingo::GameVariant;
    use crate::locale::Locale;
    use std::time::Duration;

    #[test]
    fn builtin_catalog() {
        let catalog = VoiceCatalog::builtin();
        let names: Vec<_> = catalog
            .voices(Locale::EsEs)
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["lucia", "manuel"]);
        assert!(catalog.voices(Locale::ItIt).is_empty());
        assert_eq!(
            catalog.summary(),
            "es-ES: lucia, manuel | en-US: aria | fr-FR: marie"
        );
    }

    #[test]
    fn select_all_voices_keeps_order() {
        let voices = VoiceCatalog::builtin().select(Locale::EsEs, None).unwrap();
        assert_eq!(voices[0].name, "lucia");
        assert_eq!(voices[1].name, "manuel");
    }

    #[test]
    fn select_unknown_voice_lists_choices() {
        let err = VoiceCatalog::builtin()
            .select(Locale::EsEs, Some("aria"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Voice 'aria' not found for language 'es-ES'. Available: lucia, manuel"
        );
    }

    #[test]
    fn select_in_locale_without_voices() {
        assert!(matches!(
            VoiceCatalog::builtin().select(Locale::PtBr, None),
            Err(ConfigError::NoVoices(Locale::PtBr))
        ));
    }

    #[test]
    fn resolve_validates_locale_then_voice() {
        let catalog = VoiceCatalog::builtin();
        let (locale, voices) = catalog.resolve("fr-FR", None).unwrap();
        assert_eq!(locale, Locale::FrFr);
        assert_eq!(voices, vec![Voice::new("marie", "Xgb3SR8idOHy8scGICeJ")]);

        assert!(matches!(
            catalog.resolve("xx-XX", Some("marie")),
            Err(ConfigError::UnknownLocale(_))
        ));
        assert!(matches!(
            catalog.resolve("fr-FR", Some("lucia")),
            Err(ConfigError::UnknownVoice { .. })
        ));
    }

    #[test]
    fn overrides_replace_named_locales_only() {
        let catalog = VoiceCatalog::builtin()
            .with_overrides_json(
                r#"{ "es-ES": [{ "name": "Carmen Ruiz", "voice_id": "abc" }],
                     "pt-BR": [{ "name": "ana", "id": "def" }] }"#,
            )
            .unwrap();
        assert_eq!(
            catalog.voices(Locale::EsEs),
            &[Voice::new("Carmen Ruiz", "abc")]
        );
        assert_eq!(catalog.voices(Locale::PtBr), &[Voice::new("ana", "def")]);
        assert_eq!(catalog.voices(Locale::EnUs).len(), 1);
    }

    #[test]
    fn overrides_reject_unknown_locale() {
        let err = VoiceCatalog::builtin()
            .with_overrides_json(r#"{ "de-DE": [] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLocale(_)));
    }

    #[test]
    fn overrides_reject_bad_json() {
        let err = VoiceCatalog::builtin()
            .with_overrides_json("{ not json")
            .unwrap_err();
        assert!(matches!(err, ConfigError::VoicesJson(_)));
    }

    #[test]
    fn missing_voices_file() {
        let err = VoiceCatalog::builtin()
            .with_overrides_file(std::path::Path::new("/nonexistent/voices.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::VoicesFile { .. }));
    }

    #[test]
    fn sanitizes_names_for_paths() {
        assert_eq!(sanitize_for_file_system("  Carmen Ruiz "), "carmen_ruiz");
        assert_eq!(sanitize_for_file_system("a/b\\c:d"), "abcd");
        assert_eq!(sanitize_for_file_system("lucia"), "lucia");
        assert_eq!(sanitize_for_file_system("!!!"), "voice");
    }

    #[test]
    fn builder_defaults_match_default() {
        let built = GeneratorConfigBuilder::default().build().unwrap();
        assert_eq!(built, GeneratorConfig::default());
        assert_eq!(built.delay, DEFAULT_DELAY);
        assert_eq!(built.variants, vec![GameVariant::Ninety, GameVariant::SeventyFive]);
    }

    #[test]
    fn builder_overrides() {
        let config = GeneratorConfigBuilder::default()
            .output_dir("/tmp/bingo")
            .delay(Duration::ZERO)
            .variants(vec![GameVariant::SeventyFive])
            .build()
            .unwrap();
        assert_eq!(config.output_dir, std::path::PathBuf::from("/tmp/bingo"));
        assert_eq!(config.delay, Duration::ZERO);
    }

    #[cfg(feature = "elevenlabs")]
    #[test]
    fn voice_settings_checked_against_model() {
        use super::check_voice_settings;
        use crate::engines::elevenlabs::{ElevenLabsModel, VoiceSettings};

        let settings = VoiceSettings {
            stability: 0.3,
            ..Default::default()
        };
        let err = check_voice_settings(ElevenLabsModel::ElevenV3, &settings).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Stability 0.3 is not accepted by eleven_v3 (expected 0.0, 0.5, 1.0)"
        );
        assert!(check_voice_settings(ElevenLabsModel::ElevenTurboV2, &settings).is_ok());
    }
}
