#![forbid(unsafe_code)]

//! Progress reporting for the bump command
//!
//! Progress lines go to stdout, one per rewritten file. The leading verb is
//! colored when the target stream supports it.

use crate::cli::ColorChoice;
use std::io;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => {
                if io::IsTerminal::is_terminal(&io::stdout()) {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Writes progress and summary lines
pub struct Reporter<W: WriteColor> {
    out: W,
    dry_run: bool,
}

impl Reporter<StandardStream> {
    /// Reporter on stdout
    pub fn stdout(color: ColorChoice, dry_run: bool) -> Self {
        Reporter::new(StandardStream::stdout(color.into()), dry_run)
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W, dry_run: bool) -> Self {
        Reporter { out, dry_run }
    }

    fn verb(&mut self, verb: &str, color: Color) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", verb)?;
        self.out.reset()
    }

    /// `Updating version of <subject> to <target>`
    pub fn updating(&mut self, subject: &str, target: &str) -> io::Result<()> {
        let verb = if self.dry_run {
            "Would update"
        } else {
            "Updating"
        };
        self.verb(verb, Color::Cyan)?;
        writeln!(self.out, " version of {} to {}", subject, target)
    }

    /// Final line after every file has been handled
    pub fn summary(&mut self, message: &str) -> io::Result<()> {
        let verb = if self.dry_run { "Dry run:" } else { "Done:" };
        self.verb(verb, Color::Green)?;
        writeln!(self.out, " {}", message)?;
        self.out.flush()
    }

    /// Consumes the reporter, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
