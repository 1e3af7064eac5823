//! Random album suggestions from a local music folder.
//!
//! Core modules:
//! - [`library`] - Scans the music folder into artist/album entries
//! - [`selector`] - Picks a fair random round of albums
//! - [`session`] - Interactive menu loop (re-roll or play)
//! - [`player`] - Hands the chosen album to an external player
//!
//! ### Supporting Modules
//!
//! - [`config`] - Settings from flags, environment and config file
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`console`] - Styled terminal output
//! - [`error`] - Error types with user-facing messages
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use albumroll::{console::Console, library, player::PlayerLauncher, session::Session};
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::path::Path;
//!
//! let root = Path::new("/home/user/Music");
//! let albums = library::scan_library(root);
//!
//! let launcher = PlayerLauncher::new("/usr/bin/foobar2000");
//! let mut session = Session::new(&albums, root, 5, StdRng::from_entropy(), launcher)?;
//!
//! let mut console = Console::stdout(true);
//! let end = session.run(std::io::stdin().lock(), &mut console)?;
//! println!("{end:?}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Selection Rules
//!
//! - A round never shows two albums by the same artist.
//! - Artists already shown are skipped in later rounds until too few unseen
//!   artists remain; then everyone is eligible again (a new cycle).
//! - Menu numbers keep counting up across rounds and are never reused.
//!
//! ## Logging
//!
//! The binary initialises `env_logger`; set `RUST_LOG=albumroll=debug` to see
//! scan and selection details on stderr.

pub mod cli;
pub mod completion;
pub mod config;
pub mod console;
pub mod error;
pub mod library;
pub mod player;
pub mod selector;
pub mod session;
