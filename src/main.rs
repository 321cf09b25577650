use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use bingo_tts::audio::OutputFormat;
use bingo_tts::bingo::GameVariant;
use bingo_tts::config::{
    self, ConfigError, GeneratorConfigBuilder, VoiceCatalog, API_KEY_ENV, DEFAULT_OUTPUT_DIR,
};
use bingo_tts::engines::elevenlabs::{ElevenLabsEngine, ElevenLabsModel, ElevenLabsParams};
use bingo_tts::export;
use bingo_tts::locale::Locale;
use bingo_tts::materializer::BatchMaterializer;

/// Generate bingo audio files using the ElevenLabs TTS API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = after_help())]
struct Cli {
    /// Language code, e.g. es-ES
    #[arg(long, required_unless_present = "list")]
    lang: Option<String>,

    /// Voice name (uses all voices for the language if not specified)
    #[arg(long)]
    voice: Option<String>,

    /// Remove all existing audio files before generating new ones
    #[arg(long)]
    clean: bool,

    /// Which game to generate
    #[arg(long, value_enum, default_value_t = Game::All)]
    game: Game,

    /// Root output folder
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Synthesis model
    #[arg(long, default_value_t = ElevenLabsModel::default())]
    model: ElevenLabsModel,

    /// Output encoding (mp3_44100_128, pcm_44100, ...)
    #[arg(long, default_value_t = OutputFormat::default())]
    format: OutputFormat,

    /// Pause after each request, in milliseconds
    #[arg(long, default_value_t = 350)]
    delay_ms: u64,

    /// JSON file replacing the built-in voices of the languages it names
    #[arg(long)]
    voices_file: Option<PathBuf>,

    /// ElevenLabs API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Print the configured languages and voices, then exit
    #[arg(long)]
    list: bool,

    /// Bundle the generated clips of a voice into `{out-dir}/{lang}/{voice}.zip`, then exit
    #[arg(long, value_name = "VOICE", conflicts_with_all = ["clean", "voice"])]
    export: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Game {
    #[value(name = "90")]
    Ninety,
    #[value(name = "75")]
    SeventyFive,
    All,
}

impl Game {
    fn variants(self) -> Vec<GameVariant> {
        match self {
            Game::Ninety => vec![GameVariant::Ninety],
            Game::SeventyFive => vec![GameVariant::SeventyFive],
            Game::All => GameVariant::ALL.to_vec(),
        }
    }
}

fn after_help() -> String {
    format!(
        "Languages: {}\nVoices: {}",
        Locale::available(),
        VoiceCatalog::builtin().summary()
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = VoiceCatalog::builtin();
    if let Some(path) = &cli.voices_file {
        catalog = catalog.with_overrides_file(path)?;
    }

    if cli.list {
        for locale in Locale::ALL {
            let voices = catalog.voices(locale);
            let names: Vec<&str> = voices.iter().map(|v| v.name.as_str()).collect();
            println!("{locale}: {}", names.join(", "));
        }
        return Ok(());
    }

    let lang = cli.lang.as_deref().unwrap_or_default();

    if let Some(name) = cli.export.as_deref() {
        let (locale, voices) = catalog.resolve(lang, Some(name))?;
        for voice in &voices {
            export::export_voice(&cli.out_dir, locale, voice)?;
        }
        return Ok(());
    }

    // Everything is validated before the output tree is touched.
    let (locale, voices) = catalog.resolve(lang, cli.voice.as_deref())?;

    let params = ElevenLabsParams {
        model: cli.model,
        output_format: cli.format,
        ..Default::default()
    };
    config::check_voice_settings(params.model, &params.voice_settings)?;

    let api_key = cli
        .api_key
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)?;
    let engine = ElevenLabsEngine::new(api_key, params)?;

    let generator = GeneratorConfigBuilder::default()
        .output_dir(cli.out_dir)
        .delay(Duration::from_millis(cli.delay_ms))
        .variants(cli.game.variants())
        .build()?;

    if cli.clean {
        clean_output(&generator.output_dir)?;
    }

    let mut batch = BatchMaterializer::new(engine, generator);
    let report = batch.run(locale, &voices)?;

    log::info!(
        "Done. {} written, {} skipped, {} failed.",
        report.written,
        report.skipped,
        report.failed
    );
    Ok(())
}

fn clean_output(dir: &std::path::Path) -> std::io::Result<()> {
    if dir.exists() {
        log::info!("Removing all existing audio files from {}...", dir.display());
        std::fs::remove_dir_all(dir)?;
        log::info!("Cleaned {}", dir.display());
    } else {
        log::info!("No existing audio directory found at {}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Cli, Game};
    use bingo_tts::audio::OutputFormat;
    use bingo_tts::bingo::GameVariant;
    use bingo_tts::config::{ConfigError, Voice};
    use bingo_tts::export;
    use bingo_tts::locale::Locale;
    use bingo_tts::materializer::target_path;
    use clap::Parser;
    use std::path::Path;

    fn parse(out: &Path, extra: &[&str]) -> Cli {
        let out = out.to_str().unwrap();
        let mut args = vec!["bingo-tts", "--out-dir", out, "--delay-ms", "0"];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    fn rejected(out: &Path, extra: &[&str]) -> ConfigError {
        let err = run(parse(out, extra)).unwrap_err();
        *err.downcast::<ConfigError>().unwrap()
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["bingo-tts", "--lang", "es-ES"]).unwrap();
        assert_eq!(cli.lang.as_deref(), Some("es-ES"));
        assert_eq!(cli.game, Game::All);
        assert_eq!(cli.format, OutputFormat::Mp3_44100_128);
        assert_eq!(cli.delay_ms, 350);
        assert!(!cli.clean);
    }

    #[test]
    fn lang_is_required_unless_listing() {
        assert!(Cli::try_parse_from(["bingo-tts"]).is_err());
        assert!(Cli::try_parse_from(["bingo-tts", "--list"]).is_ok());
    }

    #[test]
    fn parses_game_and_format() {
        let cli = Cli::try_parse_from([
            "bingo-tts", "--lang", "fr-FR", "--game", "75", "--format", "pcm_44100",
        ])
        .unwrap();
        assert_eq!(cli.game, Game::SeventyFive);
        assert_eq!(cli.format, OutputFormat::Pcm44100);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(
            Cli::try_parse_from(["bingo-tts", "--lang", "fr-FR", "--format", "flac"]).is_err()
        );
    }

    #[test]
    fn invalid_requests_do_not_clean_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let keep = out.join("keep");
        std::fs::write(&keep, b"clip").unwrap();

        let err = rejected(&out, &["--clean", "--lang", "de-DE"]);
        assert!(matches!(err, ConfigError::UnknownLocale(_)));

        let err = rejected(&out, &["--clean", "--lang", "en-US", "--voice", "lucia"]);
        assert!(matches!(err, ConfigError::UnknownVoice { .. }));

        let err = rejected(&out, &["--clean", "--lang", "en-US", "--api-key", "  "]);
        assert!(matches!(err, ConfigError::MissingApiKey));

        let err = rejected(&out, &["--clean", "--lang", "pt-BR", "--api-key", "key"]);
        assert!(matches!(err, ConfigError::NoVoices(Locale::PtBr)));

        assert_eq!(std::fs::read(&keep).unwrap(), b"clip");
    }

    #[test]
    fn export_does_not_combine_with_clean() {
        assert!(Cli::try_parse_from([
            "bingo-tts", "--lang", "en-US", "--export", "aria", "--clean",
        ])
        .is_err());
    }

    #[test]
    fn export_writes_pack_without_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let aria = Voice::new("aria", "9BWtsMINqrJLrRacOk9x");
        let clip = target_path(dir.path(), Locale::EnUs, &aria, GameVariant::Ninety, 7, "mp3")
            .unwrap();
        std::fs::create_dir_all(clip.parent().unwrap()).unwrap();
        std::fs::write(&clip, b"seven").unwrap();

        run(parse(dir.path(), &["--lang", "en-US", "--export", "aria"])).unwrap();

        assert!(export::pack_path(dir.path(), Locale::EnUs, &aria).is_file());
        assert!(clip.exists());
    }

    #[test]
    fn export_of_unknown_voice_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = rejected(dir.path(), &["--lang", "en-US", "--export", "lucia"]);
        assert!(matches!(err, ConfigError::UnknownVoice { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
