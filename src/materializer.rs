//! Turns (locale, voice, variant, number) targets into audio files.
//!
//! Targets are processed one at a time: voices in listed order, variants in
//! configured order, numbers ascending. A file already present at a target's
//! path marks it as done and it is skipped without contacting the engine.
//! Only existence is checked, so a truncated clip from an earlier run is
//! never re-synthesized.

use std::path::{Path, PathBuf};

use crate::bingo::{BingoError, GameVariant, Letter};
use crate::config::{GeneratorConfig, Voice};
use crate::locale::Locale;
use crate::phrase::{PhraseError, TextFormatter};
use crate::{SynthesisEngine, SynthesisRequest};

#[derive(thiserror::Error, Debug)]
pub enum MaterializeError {
    #[error("Text table defect: {0}")]
    Phrase(#[from] PhraseError),
    #[error(transparent)]
    Bingo(#[from] BingoError),
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files synthesized and written
    pub written: usize,
    /// Targets already on disk
    pub skipped: usize,
    /// Targets whose synthesis or write failed
    pub failed: usize,
}

impl BatchReport {
    /// Number of engine calls made.
    pub fn calls(&self) -> usize {
        self.written + self.failed
    }

    fn absorb(&mut self, other: BatchReport) {
        self.written += other.written;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Directory holding every clip of one voice.
pub fn voice_dir(root: &Path, locale: Locale, voice: &Voice) -> PathBuf {
    root.join(locale.as_str()).join(voice.file_system_name())
}

/// File name of one clip: `es-ES_lucia_54.mp3`, `es-ES_lucia_g54.mp3`.
pub fn file_name(
    locale: Locale,
    voice: &Voice,
    variant: GameVariant,
    n: u8,
    extension: &str,
) -> Result<String, BingoError> {
    let voice = voice.file_system_name();
    Ok(match variant {
        GameVariant::Ninety => format!("{locale}_{voice}_{n}.{extension}"),
        GameVariant::SeventyFive => {
            let letter = Letter::for_number(n)?.file_prefix();
            format!("{locale}_{voice}_{letter}{n}.{extension}")
        }
    })
}

/// Full output path of one target.
pub fn target_path(
    root: &Path,
    locale: Locale,
    voice: &Voice,
    variant: GameVariant,
    n: u8,
    extension: &str,
) -> Result<PathBuf, BingoError> {
    Ok(voice_dir(root, locale, voice).join(file_name(locale, voice, variant, n, extension)?))
}

/// Drives an engine over every target of a locale.
pub struct BatchMaterializer<E> {
    engine: E,
    config: GeneratorConfig,
}

impl<E: SynthesisEngine> BatchMaterializer<E> {
    pub fn new(engine: E, config: GeneratorConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Materialize every configured variant for each voice.
    pub fn run(
        &mut self,
        locale: Locale,
        voices: &[Voice],
    ) -> Result<BatchReport, MaterializeError> {
        let formatter = TextFormatter::new(locale)?;
        let mut report = BatchReport::default();

        for voice in voices {
            report.absorb(self.run_voice(&formatter, locale, voice)?);
        }

        Ok(report)
    }

    fn run_voice(
        &mut self,
        formatter: &TextFormatter,
        locale: Locale,
        voice: &Voice,
    ) -> Result<BatchReport, MaterializeError> {
        let dir = voice_dir(&self.config.output_dir, locale, voice);
        std::fs::create_dir_all(&dir).map_err(|source| MaterializeError::OutputDir {
            path: dir.clone(),
            source,
        })?;

        let mut report = BatchReport::default();
        let variants = self.config.variants.clone();
        for variant in variants {
            log::info!(
                "Generating {variant} for {locale} with voice '{}'...",
                voice.name
            );
            for n in variant.numbers() {
                self.materialize_one(formatter, locale, voice, variant, n, &mut report)?;
            }
        }

        Ok(report)
    }

    fn materialize_one(
        &mut self,
        formatter: &TextFormatter,
        locale: Locale,
        voice: &Voice,
        variant: GameVariant,
        n: u8,
        report: &mut BatchReport,
    ) -> Result<(), MaterializeError> {
        let extension = self.engine.output_format().extension();
        let path = target_path(&self.config.output_dir, locale, voice, variant, n, extension)?;
        let label = item_label(variant, n)?;
        let scope = format!("{locale}/{} | {}", voice.name, variant.tag());

        if path.exists() {
            log::info!("[{scope}] {label:>3}: SKIP (exists)");
            report.skipped += 1;
            return Ok(());
        }

        let text = formatter.text(variant, n)?;
        let request = SynthesisRequest {
            voice_id: &voice.id,
            text: &text,
            language_code: locale.api_code(),
        };

        match self.engine.synthesize_to_file(&request, &path) {
            Ok(()) => {
                log::info!("[{scope}] {label:>3}: {text}");
                report.written += 1;
            }
            Err(e) => {
                log::error!("ERROR [{scope}] {label}: {e}");
                report.failed += 1;
            }
        }

        if !self.config.delay.is_zero() {
            std::thread::sleep(self.config.delay);
        }
        Ok(())
    }
}

/// `54` for 90-ball, `G54` for 75-ball.
fn item_label(variant: GameVariant, n: u8) -> Result<String, BingoError> {
    Ok(match variant {
        GameVariant::Ninety => n.to_string(),
        GameVariant::SeventyFive => format!("{}{n}", Letter::for_number(n)?),
    })
}
