//! Console interaction: reporting, line prompts and single-key prompts.
//!
//! # Overview
//!
//! The workflow never talks to the terminal directly. It goes through three
//! small capabilities so a test harness (or any other front end) can stand in
//! for a real console:
//!
//! - [`Reporter`]: writes a line (or part of a line) tagged with a [`Tone`]
//! - [`LineSource`] / [`KeySource`]: read a typed line or a single keypress
//! - [`Confirm`]: ask a yes/no question and get a `bool` back
//!
//! [`Console`] glues an input source and a reporter together and implements
//! all of them. [`StdTerminal`] + [`ConsoleReporter`] drive a real terminal;
//! [`ScriptedInput`] + [`Transcript`] replay canned input and record output.
//!
//! # Example
//!
//! ```
//! use fixdupes::console::{Confirm, Console, ScriptedInput, Transcript};
//!
//! let input = ScriptedInput::new().key('x').key('y');
//! let mut console = Console::new(input, Transcript::new());
//!
//! assert!(console.confirm("Is this correct? Y/N").unwrap());
//! assert!(console.reporter().contains("Expected Y/N"));
//! ```

pub mod keys;
pub mod reporter;
pub mod scripted;
pub mod terminal;
pub mod theme;

use std::io;

use crossterm::event::KeyEvent;
use thiserror::Error;

pub use keys::{answer_for, echo_text, is_exit_key, KeyAnswer};
pub use reporter::{ConsoleReporter, Tone};
pub use scripted::{ScriptedInput, Transcript};
pub use terminal::StdTerminal;
pub use theme::Theme;

/// Error shown when a yes/no prompt gets an unrecognized key.
pub const EXPECTED_YES_NO: &str = "Expected Y/N";

/// Errors from the console itself. These are never swallowed by the
/// reconcile loop: without a working console there is nobody to ask.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Terminal or stdio failure.
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached end of file.
    #[error("console input closed")]
    InputClosed,

    /// The user pressed Ctrl+C at a key prompt.
    #[error("interrupted by user")]
    Interrupted,
}

/// Sink for everything the user sees.
pub trait Reporter {
    /// Write `text` in the given tone, optionally ending the line.
    fn write(&mut self, tone: Tone, text: &str, newline: bool) -> Result<(), PromptError>;

    /// Write a full line.
    fn line(&mut self, tone: Tone, text: &str) -> Result<(), PromptError> {
        self.write(tone, text, true)
    }

    /// Write text without ending the line (prompts, metric values).
    fn inline(&mut self, tone: Tone, text: &str) -> Result<(), PromptError> {
        self.write(tone, text, false)
    }

    /// Write several full lines in one tone.
    fn lines(&mut self, tone: Tone, lines: &[&str]) -> Result<(), PromptError> {
        for text in lines {
            self.line(tone, text)?;
        }
        Ok(())
    }

    /// End the current line, or print an empty one.
    fn blank_line(&mut self) -> Result<(), PromptError> {
        self.write(Tone::Info, "", true)
    }
}

/// Source of typed lines (without the trailing newline).
pub trait LineSource {
    fn read_line(&mut self) -> Result<String, PromptError>;
}

/// Source of single keypresses.
pub trait KeySource {
    fn read_key(&mut self) -> Result<KeyEvent, PromptError>;
}

/// Yes/no capability used by the prompts and the reconciler.
pub trait Confirm {
    /// Ask `question` until a recognized answer is given.
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError>;
}

/// Ask a single-keypress yes/no question.
///
/// Affirmative keys are `Y`, `T` and `1`; negative keys are `N`, `F` and `0`.
/// Any other key prints `error` (when given) and asks again, so the call only
/// returns once a recognized key arrives. Ctrl+C aborts with
/// [`PromptError::Interrupted`].
pub fn ask_yes_no<K, R>(
    keys: &mut K,
    reporter: &mut R,
    question: &str,
    error: Option<&str>,
) -> Result<bool, PromptError>
where
    K: KeySource + ?Sized,
    R: Reporter + ?Sized,
{
    loop {
        reporter.inline(Tone::Prompt, &format!("{question}: "))?;
        let key = keys.read_key()?;
        reporter.line(Tone::Prompt, &echo_text(&key))?;

        match answer_for(&key) {
            KeyAnswer::Yes => return Ok(true),
            KeyAnswer::No => return Ok(false),
            KeyAnswer::Interrupt => return Err(PromptError::Interrupted),
            KeyAnswer::Other => {
                log::trace!("Unrecognized answer key: {:?}", key.code);
                if let Some(message) = error.filter(|m| !m.is_empty()) {
                    reporter.line(Tone::Failure, message)?;
                }
            }
        }
    }
}

/// Block until the exit key (Escape) is pressed.
///
/// Ctrl+C also leaves the gate: the work is already done, so it is not an
/// interruption.
pub fn wait_for_exit_key<K>(keys: &mut K) -> Result<(), PromptError>
where
    K: KeySource + ?Sized,
{
    loop {
        let key = keys.read_key()?;
        if is_exit_key(&key) || answer_for(&key) == KeyAnswer::Interrupt {
            return Ok(());
        }
    }
}

/// An input source and a reporter acting as one console.
#[derive(Debug)]
pub struct Console<I, R> {
    input: I,
    reporter: R,
}

impl<I, R> Console<I, R>
where
    I: LineSource + KeySource,
    R: Reporter,
{
    /// Create a console from its two halves.
    #[must_use]
    pub fn new(input: I, reporter: R) -> Self {
        Self { input, reporter }
    }

    /// The reporter half (e.g. to inspect a [`Transcript`]).
    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// The input half (e.g. to check a [`ScriptedInput`] was fully consumed).
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Block until Escape is pressed.
    pub fn wait_for_exit(&mut self) -> Result<(), PromptError> {
        wait_for_exit_key(&mut self.input)
    }
}

impl<I, R: Reporter> Reporter for Console<I, R> {
    fn write(&mut self, tone: Tone, text: &str, newline: bool) -> Result<(), PromptError> {
        self.reporter.write(tone, text, newline)
    }
}

impl<I: LineSource, R> LineSource for Console<I, R> {
    fn read_line(&mut self) -> Result<String, PromptError> {
        self.input.read_line()
    }
}

impl<I: KeySource, R> KeySource for Console<I, R> {
    fn read_key(&mut self) -> Result<KeyEvent, PromptError> {
        self.input.read_key()
    }
}

impl<I: KeySource, R: Reporter> Confirm for Console<I, R> {
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        ask_yes_no(
            &mut self.input,
            &mut self.reporter,
            question,
            Some(EXPECTED_YES_NO),
        )
    }
}
