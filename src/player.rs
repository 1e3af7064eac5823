//! # Player Launcher
//!
//! Hands an album folder to an external media player by running the player
//! executable four times:
//!
//! ```text
//! player /stop                 stop whatever is playing
//! player /command:Default      back to the default playback mode
//! player /add <album folder>   queue the album
//! player /play                 start playback
//! ```
//!
//! Each step blocks until the player process returns. The first failing step
//! ends the sequence; nothing is retried.
//!
//! The session talks to the player through the [`Launcher`] trait so tests can
//! record launches instead of spawning processes.

use crate::error::RollError;
use log::{debug, info};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that can start playback of an album folder.
pub trait Launcher {
    fn launch(&self, album: &Path) -> Result<(), RollError>;
}

/// Runs the configured player executable.
#[derive(Debug, Clone)]
pub struct PlayerLauncher {
    executable: PathBuf,
}

impl PlayerLauncher {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run one player step and check its exit status.
    fn run_step(&self, args: &[OsString]) -> Result<(), RollError> {
        let step = describe(args);
        debug!("Running {} {step}", self.executable.display());

        let output = Command::new(&self.executable)
            .args(args)
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(RollError::PlayerCommandFailed {
                step,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }

    fn spawn_error(&self, e: io::Error) -> RollError {
        let path = self.executable.clone();
        match e.kind() {
            io::ErrorKind::PermissionDenied => RollError::PlayerLaunchPermissionDenied { path },
            io::ErrorKind::NotFound => RollError::PlayerLaunchNotFound { path },
            _ => RollError::Io(e),
        }
    }
}

impl Launcher for PlayerLauncher {
    fn launch(&self, album: &Path) -> Result<(), RollError> {
        if !self.executable.exists() {
            return Err(RollError::PlayerNotFound {
                path: self.executable.clone(),
            });
        }

        for args in launch_steps(album) {
            self.run_step(&args)?;
        }

        info!("Playing {}", album.display());
        Ok(())
    }
}

/// Argument vectors for the four player invocations, in order.
pub fn launch_steps(album: &Path) -> [Vec<OsString>; 4] {
    [
        vec![OsString::from("/stop")],
        vec![OsString::from("/command:Default")],
        vec![OsString::from("/add"), album.as_os_str().to_owned()],
        vec![OsString::from("/play")],
    ]
}

fn describe(args: &[OsString]) -> String {
    args.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
