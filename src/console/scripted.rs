//! Scripted console halves for non-interactive front ends and tests.
//!
//! [`ScriptedInput`] replays canned lines and keypresses; running out of
//! either yields [`PromptError::InputClosed`], the same as a closed stdin.
//! [`Transcript`] records every write with its tone.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{KeySource, LineSource, PromptError, Reporter, Tone};

/// Canned console input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    keys: VecDeque<KeyEvent>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a typed line.
    #[must_use]
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push_back(text.into());
        self
    }

    /// Queue a plain character keypress.
    #[must_use]
    pub fn key(self, c: char) -> Self {
        self.key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    /// Queue a yes (`y`) or no (`n`) keypress.
    #[must_use]
    pub fn answer(self, yes: bool) -> Self {
        self.key(if yes { 'y' } else { 'n' })
    }

    /// Queue an Escape keypress.
    #[must_use]
    pub fn escape(self) -> Self {
        self.key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
    }

    /// Queue an arbitrary key event.
    #[must_use]
    pub fn key_event(mut self, key: KeyEvent) -> Self {
        self.keys.push_back(key);
        self
    }

    #[must_use]
    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }

    /// Whether every queued line and key was consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.lines.is_empty() && self.keys.is_empty()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String, PromptError> {
        self.lines.pop_front().ok_or(PromptError::InputClosed)
    }
}

impl KeySource for ScriptedInput {
    fn read_key(&mut self) -> Result<KeyEvent, PromptError> {
        self.keys.pop_front().ok_or(PromptError::InputClosed)
    }
}

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub tone: Tone,
    pub text: String,
    pub newline: bool,
}

/// [`Reporter`] that records output instead of printing it.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries written in the given tone.
    pub fn entries_with_tone(&self, tone: Tone) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |e| e.tone == tone)
    }

    /// Whether any write contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }

    /// Number of writes containing `needle`.
    #[must_use]
    pub fn count_containing(&self, needle: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.text.contains(needle))
            .count()
    }

    /// Output as it would appear on screen, without colors.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.text);
            if entry.newline {
                out.push('\n');
            }
        }
        out
    }
}

impl Reporter for Transcript {
    fn write(&mut self, tone: Tone, text: &str, newline: bool) -> Result<(), PromptError> {
        self.entries.push(Entry {
            tone,
            text: text.to_string(),
            newline,
        });
        Ok(())
    }
}
