//! # Albumroll
//!
//! Suggests random albums from your music folder, re-rolls on request and
//! plays the one you pick in an external player.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive suggestions
//! albumroll --music-dir ~/Music --player /usr/bin/foobar2000
//!
//! # Show what the scanner finds
//! albumroll list
//!
//! # Shell completions
//! albumroll completion bash
//! ```

use albumroll::cli::{self, Args};
use albumroll::completion;
use albumroll::config::RuntimeConfig;
use albumroll::console::Console;
use albumroll::error::RollError;
use albumroll::library::{self, AlbumEntry};
use albumroll::player::PlayerLauncher;
use albumroll::session::Session;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Main entry point.
///
/// Initializes logging, parses arguments and routes to the interactive
/// session or a subcommand. Session outcomes (including a failed launch or
/// invalid input) are reported on the console and end the process normally;
/// only configuration and terminal I/O problems surface as errors.
///
/// # Logging
///
/// Controlled via `RUST_LOG`:
/// - `RUST_LOG=debug albumroll` - Enable debug logging
/// - `RUST_LOG=albumroll::selector=debug albumroll` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut console = Console::stdout(args.use_color());

    match &args.command {
        Some(cli::Command::Completion { shell }) => {
            let mut cmd = Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(*shell),
                &mut cmd,
                &mut std::io::stdout(),
            );
        }
        Some(cli::Command::List) => {
            let config = RuntimeConfig::load(args.overrides(), args.config.as_deref())?;
            let albums = library::scan_library(&config.music_directory);
            if albums.is_empty() {
                console.error(&RollError::EmptyLibrary {
                    root: config.music_directory,
                })?;
                return Ok(());
            }
            list_albums(&albums, &mut console)?;
        }
        None => {
            let config = RuntimeConfig::load(args.overrides(), args.config.as_deref())?;
            run_session(&config, args.seed, &mut console)?;
        }
    }

    Ok(())
}

fn run_session<W: Write>(
    config: &RuntimeConfig,
    seed: Option<u64>,
    console: &mut Console<W>,
) -> Result<()> {
    info!("Scanning {}", config.music_directory.display());
    let albums = library::scan_library(&config.music_directory);

    let rng = match seed {
        Some(seed) => {
            debug!("Seeding random source with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let launcher = PlayerLauncher::new(&config.player_executable_path);

    let mut session = match Session::new(
        &albums,
        &config.music_directory,
        config.num_per_round,
        rng,
        launcher,
    ) {
        Ok(session) => session.with_player_name(config.player_name()),
        Err(err) => {
            console.error(&err)?;
            return Ok(());
        }
    };

    let end = session
        .run(std::io::stdin().lock(), console)
        .context("Console I/O failed during the session")?;
    debug!("Session ended: {end:?}");
    Ok(())
}

fn list_albums<W: Write>(albums: &[AlbumEntry], console: &mut Console<W>) -> Result<()> {
    let grouped = library::group_by_artist(albums);
    for (artist, entries) in &grouped {
        console.heading(artist)?;
        for entry in entries {
            console.line(&format!("==> {}  ({})", entry.album, entry.path.display()))?;
        }
    }
    console.line(&format!(
        "{} albums by {} artists",
        albums.len(),
        grouped.len()
    ))?;
    Ok(())
}
