//! Effective run settings.
//!
//! The tool persists nothing: settings come from the command line only and
//! live for a single run.

use std::path::PathBuf;

use crate::cli::Cli;

/// Settings for one interactive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Emit ANSI colors on the transcript.
    pub color: bool,
    /// Root directory offered to the directory prompt instead of reading a line.
    pub root: Option<PathBuf>,
    /// Marker offered to the marker prompt instead of reading a line.
    pub marker: Option<String>,
    /// Block on Escape after the last file.
    pub wait_for_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: true,
            root: None,
            marker: None,
            wait_for_exit: true,
        }
    }
}

impl AppConfig {
    /// Build the settings from parsed CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            color: !cli.no_color,
            root: cli.root.clone(),
            marker: cli.marker.clone(),
            wait_for_exit: !cli.no_wait,
        }
    }
}
