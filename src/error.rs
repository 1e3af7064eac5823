//! Error taxonomy for albumroll.
//!
//! Every variant's `Display` text is the message shown to the user, so the
//! console can print an error as-is without leaking a raw diagnostic.
//!
//! Running out of unused artists is not an error: the selector recovers by
//! starting a new cycle and the session prints a notice instead.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level error type for library operations
#[derive(Debug, Error)]
pub enum RollError {
    #[error("No albums found in `{}`. Check the music directory setting.", .root.display())]
    EmptyLibrary { root: PathBuf },

    #[error("Player not found at `{}`. Make sure it's installed and the path is correct.", .path.display())]
    PlayerNotFound { path: PathBuf },

    #[error("Permission denied while launching `{}`. Try running with more privileges.", .path.display())]
    PlayerLaunchPermissionDenied { path: PathBuf },

    #[error("Error launching `{}`. Check that the player is installed.", .path.display())]
    PlayerLaunchNotFound { path: PathBuf },

    #[error("Player step `{step}` failed ({status}){}", format_stderr(.stderr))]
    PlayerCommandFailed {
        step: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Invalid input `{input}`. Exiting.")]
    InvalidSelection { input: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

impl RollError {
    /// Launch errors end the session but are still a normal exit.
    pub fn is_launch_error(&self) -> bool {
        matches!(
            self,
            RollError::PlayerNotFound { .. }
                | RollError::PlayerLaunchPermissionDenied { .. }
                | RollError::PlayerLaunchNotFound { .. }
                | RollError::PlayerCommandFailed { .. }
        )
    }
}
