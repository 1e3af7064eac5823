//! Styled terminal output.
//!
//! Status lines use the `:: ` / `==> ` prefixes; menu entries are indented
//! under the banner. Colour can be switched off for pipes, tests and
//! `NO_COLOR` users.

use crate::error::RollError;
use crate::selector::Selection;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        let text = self.paint_red("Here are your random albums");
        writeln!(self.out, ":: {text}")
    }

    pub fn selection(&mut self, selection: &Selection) -> io::Result<()> {
        let line = format!("{:>3}. {}", selection.number, selection.label);
        let line = if self.color {
            line.bright_yellow().to_string()
        } else {
            line
        };
        writeln!(self.out, "{line}")
    }

    pub fn cycle_reset(&mut self) -> io::Result<()> {
        let text = self.paint_red("Not enough unused artists left, starting over with everyone");
        writeln!(self.out, "==> {text}")
    }

    /// Print the menu prompt and flush, leaving the cursor on the line.
    pub fn prompt(&mut self, player: &str) -> io::Result<()> {
        let text = self.paint_red(&format!(
            "Enter the number of the album to play in {player} (or 0 for new suggestions): "
        ));
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn launching(&mut self, selection: &Selection) -> io::Result<()> {
        let label = if self.color {
            selection.label.green().bold().to_string()
        } else {
            selection.label.clone()
        };
        writeln!(self.out, ":: Playing {label}…")
    }

    pub fn unrecognized(&mut self, input: &str) -> io::Result<()> {
        let text = self.paint_red(&format!("No album numbered {input}. Exiting."));
        writeln!(self.out, "==> {text}")
    }

    pub fn error(&mut self, err: &RollError) -> io::Result<()> {
        let text = self.paint_red(&err.to_string());
        writeln!(self.out, "==> {text}")
    }

    /// Plain informational line, used by `list`.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        let text = if self.color {
            text.blue().bold().to_string()
        } else {
            text.to_owned()
        };
        writeln!(self.out, ":: {text}")
    }

    fn paint_red(&self, text: &str) -> String {
        if self.color {
            text.bright_red().to_string()
        } else {
            text.to_owned()
        }
    }
}
