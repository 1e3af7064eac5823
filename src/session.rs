//! # Interactive Session
//!
//! The menu loop behind `albumroll`:
//!
//! ```text
//! present (roll a round, print every selection so far)
//!    │
//!    ▼
//! read one line ── "0" ───────────────► present again, numbering continues
//!    ├── known number ──► launch album ─► end
//!    ├── unknown number ───────────────► end
//!    └── anything else ────────────────► end (invalid input)
//! ```
//!
//! The session owns the used-artist set and the accumulated selections; both
//! live exactly as long as the session does.

use crate::console::Console;
use crate::error::RollError;
use crate::library::AlbumEntry;
use crate::player::Launcher;
use crate::selector::{pick_round, Selection, UsedArtists};
use log::{debug, error, info, warn};
use rand::Rng;
use std::io::{BufRead, Write};

/// How a session ended.
#[derive(Debug)]
pub enum SessionEnd {
    /// The album was handed to the player.
    Launched(Selection),
    /// The player could not be started; the error has been reported.
    LaunchFailed { selection: Selection, error: RollError },
    /// A number was entered that no menu line carries.
    Unrecognized(String),
    /// The input was not a number.
    InvalidInput(String),
    /// Standard input was closed before a choice was made.
    InputClosed,
}

/// What a line of menu input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Reroll,
    Pick(u32),
    /// Digits only, but too large to be any menu number.
    OutOfRange,
    Invalid,
}

impl MenuChoice {
    /// Interpret one input line with its line terminator already removed.
    ///
    /// Only ASCII digit strings are numbers; surrounding spaces or a sign make
    /// the input invalid.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return MenuChoice::Invalid;
        }

        let digits = input.trim_start_matches('0');
        if digits.is_empty() {
            return MenuChoice::Reroll;
        }

        match digits.parse::<u32>() {
            Ok(number) => MenuChoice::Pick(number),
            Err(_) => MenuChoice::OutOfRange,
        }
    }
}

pub struct Session<'a, R, L> {
    library: &'a [AlbumEntry],
    per_round: usize,
    used: UsedArtists,
    selections: Vec<Selection>,
    rng: R,
    launcher: L,
    player_name: String,
}

impl<'a, R: Rng, L: Launcher> Session<'a, R, L> {
    /// Create a session over a scanned library.
    ///
    /// # Errors
    ///
    /// `RollError::EmptyLibrary` if `library` has no albums (`root` is only
    /// used for the message), `RollError::Config` if `per_round` is 0.
    pub fn new(
        library: &'a [AlbumEntry],
        root: &std::path::Path,
        per_round: usize,
        rng: R,
        launcher: L,
    ) -> Result<Self, RollError> {
        if library.is_empty() {
            return Err(RollError::EmptyLibrary {
                root: root.to_path_buf(),
            });
        }
        if per_round == 0 {
            return Err(RollError::Config(
                "albums per round must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            library,
            per_round,
            used: UsedArtists::new(),
            selections: Vec::new(),
            rng,
            launcher,
            player_name: "the player".to_string(),
        })
    }

    /// Name used for the player in the prompt.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn used_artists(&self) -> &UsedArtists {
        &self.used
    }

    /// Roll a new round, continuing the numbering.
    pub fn roll<W: Write>(&mut self, console: &mut Console<W>) -> Result<(), RollError> {
        let start_num = self.selections.last().map_or(1, |s| s.number + 1);
        let round = pick_round(
            self.library,
            &mut self.used,
            self.per_round,
            start_num,
            &mut self.rng,
        );

        if round.cycle_reset {
            console.cycle_reset()?;
        }
        debug!(
            "Round from #{start_num}: {} albums, {} artists used this cycle",
            round.selections.len(),
            self.used.len()
        );
        self.selections.extend(round.selections);
        Ok(())
    }

    fn present<W: Write>(&mut self, console: &mut Console<W>) -> Result<(), RollError> {
        self.roll(console)?;
        console.banner()?;
        for selection in &self.selections {
            console.selection(selection)?;
        }
        Ok(())
    }

    /// Run the menu loop until the user picks, gives up, or input ends.
    ///
    /// # Errors
    ///
    /// Only console I/O failures are returned as errors; every user-facing
    /// outcome, including a failed launch, is a [`SessionEnd`].
    pub fn run<I: BufRead, W: Write>(
        &mut self,
        mut input: I,
        console: &mut Console<W>,
    ) -> Result<SessionEnd, RollError> {
        loop {
            self.present(console)?;
            console.prompt(&self.player_name)?;

            // Bytes, so undecodable input is rejected as a choice, not as I/O.
            let mut raw = Vec::new();
            if input.read_until(b'\n', &mut raw)? == 0 {
                console.line("")?;
                info!("Input closed, ending session");
                return Ok(SessionEnd::InputClosed);
            }
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\n', '\r']);

            match MenuChoice::parse(line) {
                MenuChoice::Reroll => continue,
                MenuChoice::Pick(number) => {
                    let Some(selection) = self.find(number).cloned() else {
                        console.unrecognized(line)?;
                        return Ok(SessionEnd::Unrecognized(line.to_string()));
                    };
                    return self.launch(selection, console);
                }
                MenuChoice::OutOfRange => {
                    console.unrecognized(line)?;
                    return Ok(SessionEnd::Unrecognized(line.to_string()));
                }
                MenuChoice::Invalid => {
                    console.error(&RollError::InvalidSelection {
                        input: line.to_string(),
                    })?;
                    return Ok(SessionEnd::InvalidInput(line.to_string()));
                }
            }
        }
    }

    fn find(&self, number: u32) -> Option<&Selection> {
        self.selections.iter().find(|s| s.number == number)
    }

    fn launch<W: Write>(
        &mut self,
        selection: Selection,
        console: &mut Console<W>,
    ) -> Result<SessionEnd, RollError> {
        console.launching(&selection)?;
        match self.launcher.launch(&selection.path) {
            Ok(()) => Ok(SessionEnd::Launched(selection)),
            Err(error) => {
                if error.is_launch_error() {
                    warn!("Could not start {}: {error}", selection.path.display());
                } else {
                    error!("Player launch failed unexpectedly: {error:?}");
                }
                console.error(&error)?;
                Ok(SessionEnd::LaunchFailed { selection, error })
            }
        }
    }
}
