//! Command-line interface definitions for fixdupes.
//!
//! Everything the tool needs is asked for interactively; the flags only tune
//! logging and presentation, or pre-fill the two prompts. Pre-filled values
//! still go through validation and the yes/no confirmation.
//!
//! # Example
//!
//! ```bash
//! # Fully interactive
//! fixdupes
//!
//! # Pre-fill the prompts, show per-item diagnostics on stderr
//! fixdupes -vv --root ~/OneDrive --marker DESKTOP-AB12
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Fold sync-conflict duplicates ("report-PC.docx") back onto their originals.
///
/// Scans a directory tree for files named `<name>-<MARKER>.<ext>`, shows how
/// each one compares to `<name>.<ext>`, and on confirmation replaces the
/// original with the duplicate. Replaced originals are removed permanently.
#[derive(Debug, Parser)]
#[command(name = "fixdupes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Root directory to search (still confirmed interactively)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Name fragment found in duplicate files (still confirmed interactively)
    #[arg(long, value_name = "NAME")]
    pub marker: Option<String>,

    /// Exit right after the last file instead of waiting for Escape
    #[arg(long)]
    pub no_wait: bool,

    /// Output fatal errors as JSON to stderr
    #[arg(long)]
    pub json_errors: bool,
}
