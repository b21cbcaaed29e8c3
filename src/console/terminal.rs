//! Real terminal input via stdin and crossterm.
//!
//! Lines are read from stdin in cooked mode. Single keypresses switch the
//! terminal into raw mode for exactly one key and restore it afterwards,
//! including when reading fails. Without a terminal (e.g. piped stdin) raw
//! mode cannot be enabled and the error propagates.

use std::io::{self, BufRead};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;

use super::{KeySource, LineSource, PromptError};

/// Input from the process's own terminal.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl StdTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for StdTerminal {
    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl KeySource for StdTerminal {
    fn read_key(&mut self) -> Result<KeyEvent, PromptError> {
        let _raw = RawModeGuard::enable()?;
        loop {
            // Windows reports releases too; holding a key repeats presses.
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }
}

/// Keeps raw mode on for its lifetime.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to restore terminal mode: {}", e);
        }
    }
}
