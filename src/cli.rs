//! # Command-Line Interface Module
//!
//! Argument definitions for `albumroll` using Clap derive macros. Without a
//! subcommand the interactive session starts.
//!
//! ## Examples
//!
//! ```bash
//! albumroll --music-dir ~/Music --player /usr/bin/foobar2000
//! ALBUMROLL_PER_ROUND=8 albumroll
//! albumroll list
//! albumroll completion fish > ~/.config/fish/completions/albumroll.fish
//! ```

use crate::config::ConfigOverrides;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments.
///
/// Every setting can also come from the environment or the config file; the
/// flags win when both are present.
#[derive(Parser, Debug)]
#[command(name = "albumroll")]
#[command(about = "Albumroll: random album suggestions from your music folder")]
#[command(version)]
pub struct Args {
    /// Root of your music collection
    ///
    /// Every folder below it that directly holds files counts as an album;
    /// its parent folder's name is taken as the artist.
    #[arg(long, env = "ALBUMROLL_MUSIC_DIR", value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub music_dir: Option<PathBuf>,

    /// Player executable used to play the chosen album
    #[arg(long, env = "ALBUMROLL_PLAYER", value_name = "PATH", value_hint = clap::ValueHint::ExecutablePath)]
    pub player: Option<PathBuf>,

    /// Albums suggested per round
    #[arg(short = 'n', long, env = "ALBUMROLL_PER_ROUND", value_name = "N")]
    pub per_round: Option<usize>,

    /// Read settings from this JSON file instead of the default location
    #[arg(long, env = "ALBUMROLL_CONFIG", value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Seed the random source to get the same suggestions again
    #[arg(long, env = "ALBUMROLL_SEED", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Optional subcommand; starts the interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Settings given on the command line or through the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            music_directory: self.music_dir.clone(),
            player_executable_path: self.player.clone(),
            num_per_round: self.per_round,
        }
    }

    /// Colour unless disabled by flag or by a non-empty `NO_COLOR`.
    pub fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every album found in the music directory, grouped by artist
    List,

    /// Generate shell completions
    ///
    /// Usage: albumroll completion bash > ~/.local/share/bash-completion/completions/albumroll
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
