// Application configuration
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/lexidrill/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sound cue settings
#[derive(Debug, Clone)]
pub struct SoundConfig {
    /// Master switch; --no-sound also turns this off
    pub enabled: bool,
    /// External player command the cue is handed to
    pub command: String,
    /// Asset played on a correct answer
    pub correct_asset: PathBuf,
    /// Asset played on an incorrect answer
    pub incorrect_asset: PathBuf,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_player_command().to_string(),
            correct_asset: asset_path("correct.wav"),
            incorrect_asset: asset_path("incorrect.wav"),
        }
    }
}

/// Platform default for a CLI sound player
fn default_player_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "afplay"
    } else {
        "paplay"
    }
}

/// Resolve a bundled sound asset under the data directory
fn asset_path(name: &str) -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lexidrill")
        .join("sounds")
        .join(name)
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "classic", "contrast"
    pub theme: String,

    /// Sound cue settings
    pub sound: SoundConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            sound: SoundConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Sound settings as loaded from the config file
#[derive(Debug, Deserialize, Default)]
struct FileSound {
    enabled: Option<bool>,
    command: Option<String>,
    correct_asset: Option<PathBuf>,
    incorrect_asset: Option<PathBuf>,
}

/// Logging settings as loaded from the config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
}

/// Config file structure (everything optional; missing keys keep defaults)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    #[serde(default)]
    sound: FileSound,
    #[serde(default)]
    logging: FileLogging,
}

impl Config {
    /// Load configuration with env > file > defaults precedence
    pub fn from_env() -> Self {
        let mut config = Self::from_file().unwrap_or_default();

        if let Ok(theme) = std::env::var("LEXIDRILL_THEME") {
            config.theme = theme;
        }
        if let Ok(sound) = std::env::var("LEXIDRILL_SOUND") {
            config.sound.enabled = matches!(sound.as_str(), "1" | "true" | "on");
        }
        if let Ok(level) = std::env::var("LEXIDRILL_LOG") {
            config.logging.level = level;
        }

        config
    }

    /// Path of the config file, if a config directory can be resolved
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("lexidrill").join("config.toml"))
    }

    fn from_file() -> Option<Self> {
        let path = Self::config_path()?;
        let raw = std::fs::read_to_string(&path).ok()?;
        match toml::from_str::<FileConfig>(&raw) {
            Ok(file) => Some(Self::merge_file(file)),
            Err(e) => {
                // A broken file falls back to defaults rather than refusing to start
                eprintln!("Warning: ignoring invalid config {:?}: {}", path, e);
                None
            }
        }
    }

    fn merge_file(file: FileConfig) -> Self {
        let defaults = Config::default();
        Config {
            theme: file.theme.unwrap_or(defaults.theme),
            sound: SoundConfig {
                enabled: file.sound.enabled.unwrap_or(defaults.sound.enabled),
                command: file.sound.command.unwrap_or(defaults.sound.command),
                correct_asset: file
                    .sound
                    .correct_asset
                    .unwrap_or(defaults.sound.correct_asset),
                incorrect_asset: file
                    .sound
                    .incorrect_asset
                    .unwrap_or(defaults.sound.incorrect_asset),
            },
            logging: LoggingConfig {
                level: file.logging.level.unwrap_or(defaults.logging.level),
            },
        }
    }
}
