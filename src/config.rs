//! # Configuration Module
//!
//! Resolves where the music lives, which player to run and how many albums
//! to suggest per round. Values come from, highest priority first:
//!
//! 1. command-line flags or their environment variables
//!    (`ALBUMROLL_MUSIC_DIR`, `ALBUMROLL_PLAYER`, `ALBUMROLL_PER_ROUND`),
//! 2. a JSON config file: `--config <FILE>`, otherwise the platform config
//!    directory if the file exists:
//!    - Linux: `~/.config/albumroll/config.json`
//!    - macOS: `~/Library/Application Support/albumroll/config.json`
//!    - Windows: `%APPDATA%\albumroll\config.json`
//! 3. built-in defaults.
//!
//! ```json
//! {
//!   "music_directory": "/srv/music",
//!   "player_executable_path": "/usr/bin/foobar2000",
//!   "num_per_round": 8
//! }
//! ```

use crate::selector::DEFAULT_PER_ROUND;
use anyhow::{bail, Context, Result};
use log::{debug, warn};
use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Settings for one run, after merging every source and validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Root of the tree to scan for album folders
    pub music_directory: PathBuf,
    /// External player invoked to start an album
    pub player_executable_path: PathBuf,
    /// Albums suggested per round
    pub num_per_round: usize,
}

/// Partial settings as read from a config file or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub music_directory: Option<PathBuf>,
    pub player_executable_path: Option<PathBuf>,
    pub num_per_round: Option<usize>,
}

impl ConfigOverrides {
    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            music_directory: self.music_directory.or(fallback.music_directory),
            player_executable_path: self
                .player_executable_path
                .or(fallback.player_executable_path),
            num_per_round: self.num_per_round.or(fallback.num_per_round),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            music_directory: default_music_directory(),
            player_executable_path: default_player_path(),
            num_per_round: DEFAULT_PER_ROUND,
        }
    }
}

impl RuntimeConfig {
    /// Merge command-line overrides, the config file and defaults, then
    /// validate.
    ///
    /// `config_file` is an explicitly requested file and must exist; without
    /// one, the platform default location is used only if present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an explicit config file is missing or unreadable
    /// - a config file is not valid JSON or has unknown keys
    /// - `num_per_round` is 0
    pub fn load(cli: ConfigOverrides, config_file: Option<&Path>) -> Result<Self> {
        let from_file = match config_file {
            Some(path) => read_config_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => read_config_file(&path)?,
                _ => ConfigOverrides::default(),
            },
        };

        Self::from_overrides(cli.or(from_file))
    }

    /// Apply overrides on top of the defaults and validate the result.
    pub fn from_overrides(overrides: ConfigOverrides) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            music_directory: overrides
                .music_directory
                .unwrap_or(defaults.music_directory),
            player_executable_path: overrides
                .player_executable_path
                .unwrap_or(defaults.player_executable_path),
            num_per_round: overrides.num_per_round.unwrap_or(defaults.num_per_round),
        };
        config.validate()
    }

    /// Check values and normalise the music directory to an absolute path.
    fn validate(mut self) -> Result<Self> {
        if self.num_per_round == 0 {
            bail!("num_per_round must be at least 1");
        }

        self.music_directory = self
            .music_directory
            .absolutize()
            .with_context(|| {
                format!(
                    "Failed to resolve music directory `{}`",
                    self.music_directory.display()
                )
            })?
            .into_owned();

        if !self.music_directory.is_dir() {
            warn!(
                "Music directory `{}` does not exist",
                self.music_directory.display()
            );
        }
        if !self.player_executable_path.exists() {
            warn!(
                "Player `{}` does not exist; launching an album will fail",
                self.player_executable_path.display()
            );
        }

        debug!("Using configuration: {self:?}");
        Ok(self)
    }

    /// Short player name for prompts, e.g. `foobar2000`.
    pub fn player_name(&self) -> String {
        self.player_executable_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.player_executable_path.display().to_string())
    }
}

/// Parse a JSON config file.
pub fn read_config_file(path: &Path) -> Result<ConfigOverrides> {
    debug!("Reading config file {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

/// Platform config file location, whether or not it exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("albumroll").join(CONFIG_FILE_NAME))
}

fn default_music_directory() -> PathBuf {
    dirs::audio_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Music")))
        .unwrap_or_else(|| PathBuf::from("Music"))
}

fn default_player_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Program Files\foobar2000\foobar2000.exe")
    } else {
        PathBuf::from("/usr/bin/foobar2000")
    }
}
