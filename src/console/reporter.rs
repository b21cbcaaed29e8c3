//! Terminal reporter.
//!
//! Writes tone-tagged text to any [`Write`] sink, colored with a [`Theme`]
//! or as plain text.

use std::cmp::Ordering;
use std::io::{self, IsTerminal, Write};

use yansi::Paint;

use super::{PromptError, Reporter, Theme};

/// Presentation tag for a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Section headers and file paths under comparison.
    Header,
    /// Neutral information.
    Info,
    /// Examples and other secondary text.
    Hint,
    /// Questions waiting for input.
    Prompt,
    /// An action went through.
    Success,
    /// Input was rejected or the user declined.
    Failure,
    /// This side's metric is strictly greater than the counterpart's.
    Greater,
    /// Both sides are equal.
    Equal,
    /// This side's metric is strictly less than the counterpart's.
    Less,
}

impl From<Ordering> for Tone {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Tone::Greater,
            Ordering::Equal => Tone::Equal,
            Ordering::Less => Tone::Less,
        }
    }
}

/// [`Reporter`] for a real terminal.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    theme: Theme,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter on stdout with the auto-detected theme.
    ///
    /// Colors are only emitted when requested and stdout is a terminal.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        let out = io::stdout();
        let color = color_enabled(color, out.is_terminal());
        Self::new(out, Theme::auto(), color)
    }
}

fn color_enabled(requested: bool, is_terminal: bool) -> bool {
    requested && is_terminal
}

impl<W: Write> ConsoleReporter<W> {
    #[must_use]
    pub fn new(out: W, theme: Theme, color: bool) -> Self {
        Self { out, theme, color }
    }

    /// Consume the reporter, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn write(&mut self, tone: Tone, text: &str, newline: bool) -> Result<(), PromptError> {
        if self.color && !text.is_empty() {
            write!(self.out, "{}", text.fg(self.theme.color(tone)))?;
        } else {
            write!(self.out, "{text}")?;
        }

        if newline {
            writeln!(self.out)?;
        } else {
            // Prompts must be visible before input is read.
            self.out.flush()?;
        }
        Ok(())
    }
}
