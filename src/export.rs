//! Voice packs.
//!
//! A pack is a ZIP archive holding every materialized clip of one voice
//! together with a `voice.yml` manifest, all under a single `{voice}/`
//! folder:
//!
//! ```text
//! lucia.zip
//! └── lucia/
//!     ├── voice.yml
//!     ├── es-ES_lucia_1.mp3
//!     ├── ...
//!     └── es-ES_lucia_o75.mp3
//! ```

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::audio::FALLBACK_EXTENSION;
use crate::bingo::{BingoError, GameVariant};
use crate::config::Voice;
use crate::locale::Locale;
use crate::materializer::target_path;

/// Name of the manifest inside a pack.
pub const MANIFEST_NAME: &str = "voice.yml";

/// Extensions a materialized clip may carry.
const CLIP_EXTENSIONS: [&str; 3] = ["mp3", "wav", FALLBACK_EXTENSION];

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("No audio files to export for {locale}/{voice}")]
    NoAudioFiles { locale: Locale, voice: String },
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create ZIP file: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error(transparent)]
    Bingo(#[from] BingoError),
}

/// A written pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePack {
    pub path: PathBuf,
    /// Number of clips archived, manifest excluded
    pub clips: usize,
}

/// `voice.yml` contents for a voice.
pub fn manifest(locale: Locale, voice: &Voice) -> String {
    format!(
        "elevenLabsName: {name}\ncustomName: {name}\nelevenLabsId: {id}\nlanguage: {locale}\n",
        name = voice.name,
        id = voice.id,
    )
}

/// Where the pack of a voice is written: `{root}/{locale}/{voice}.zip`.
pub fn pack_path(root: &Path, locale: Locale, voice: &Voice) -> PathBuf {
    root.join(locale.as_str()).join(format!("{}.zip", voice.file_system_name()))
}

/// Clips of a voice present on disk, 90-ball then 75-ball, numbers ascending.
pub fn collect_clips(
    root: &Path,
    locale: Locale,
    voice: &Voice,
) -> Result<Vec<PathBuf>, BingoError> {
    let mut clips = Vec::new();
    for variant in GameVariant::ALL {
        for n in variant.numbers() {
            for extension in CLIP_EXTENSIONS {
                let path = target_path(root, locale, voice, variant, n, extension)?;
                if path.is_file() {
                    clips.push(path);
                }
            }
        }
    }
    Ok(clips)
}

/// Bundle the materialized clips of `voice` into a ZIP next to its folder.
///
/// An existing pack is replaced. Nothing is written when the voice has no
/// clips yet.
pub fn export_voice(
    root: &Path,
    locale: Locale,
    voice: &Voice,
) -> Result<VoicePack, ExportError> {
    let clips = collect_clips(root, locale, voice)?;
    if clips.is_empty() {
        return Err(ExportError::NoAudioFiles {
            locale,
            voice: voice.name.clone(),
        });
    }

    let path = pack_path(root, locale, voice);
    let mut staging = path.as_os_str().to_owned();
    staging.push(".part");
    let staging = PathBuf::from(staging);

    if let Err(e) = write_archive(&staging, locale, voice, &clips) {
        let _ = std::fs::remove_file(&staging);
        return Err(e);
    }
    std::fs::rename(&staging, &path).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!(
        "Exported {} clips of {locale}/{} to {}",
        clips.len(),
        voice.name,
        path.display()
    );
    Ok(VoicePack {
        path,
        clips: clips.len(),
    })
}

fn write_archive(
    path: &Path,
    locale: Locale,
    voice: &Voice,
    clips: &[PathBuf],
) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let folder = voice.file_system_name();

    let mut zip = ZipWriter::new(File::create(path).map_err(io_err)?);

    zip.start_file(format!("{folder}/{MANIFEST_NAME}"), entry_options())?;
    zip.write_all(manifest(locale, voice).as_bytes()).map_err(io_err)?;

    for clip in clips {
        let audio = std::fs::read(clip).map_err(|source| ExportError::Io {
            path: clip.clone(),
            source,
        })?;
        let name = clip
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("Packing {}", clip.display());
        zip.start_file(format!("{folder}/{name}"), entry_options())?;
        zip.write_all(&audio).map_err(io_err)?;
    }

    zip.finish()?;
    Ok(())
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}
