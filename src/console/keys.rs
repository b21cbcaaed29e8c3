//! Key mapping for single-keypress prompts.
//!
//! A yes/no prompt accepts a small fixed set of keys so that one key can be
//! held down to rapid-fire through many confirmations:
//!
//! | Answer | Keys                              |
//! |--------|-----------------------------------|
//! | yes    | `Y`, `T`, `1` (digit row, keypad) |
//! | no     | `N`, `F`, `0` (digit row, keypad) |
//!
//! Letters match in either case. Ctrl+C is reported separately because raw
//! mode swallows the signal it would normally raise.
//!
//! # Example
//!
//! ```
//! use fixdupes::console::keys::{answer_for, KeyAnswer};
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//!
//! let key = KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT);
//! assert_eq!(answer_for(&key), KeyAnswer::Yes);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a keypress means at a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAnswer {
    Yes,
    No,
    /// Ctrl+C.
    Interrupt,
    /// Anything else; the prompt asks again.
    Other,
}

/// Classify a keypress.
#[must_use]
pub fn answer_for(key: &KeyEvent) -> KeyAnswer {
    if is_interrupt(key) {
        return KeyAnswer::Interrupt;
    }

    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'y' | 't' | '1' => KeyAnswer::Yes,
            'n' | 'f' | '0' => KeyAnswer::No,
            _ => KeyAnswer::Other,
        },
        _ => KeyAnswer::Other,
    }
}

/// Whether the key ends the completion gate.
#[must_use]
pub fn is_exit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Text echoed after a keypress, mirroring what the key would have typed.
#[must_use]
pub fn echo_text(key: &KeyEvent) -> String {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => c.to_string(),
        _ => String::new(),
    }
}
