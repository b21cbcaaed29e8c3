//! fixdupes - fold OneDrive sync-conflict duplicates back onto their originals
//!
//! A bad sync leaves copies such as `report-DESKTOP-AB12.docx` next to
//! `report.docx`. This crate finds them under a directory, shows how each
//! duplicate compares to its original, and on a keypress replaces the
//! original with the duplicate.
//!
//! # Modules
//!
//! - [`input`]: root directory and marker prompts
//! - [`scanner`]: marker matching and the recursive directory walk
//! - [`duplicates`]: original path derivation and metadata comparison
//! - [`reconcile`]: the per-file compare/confirm/replace loop
//! - [`actions`]: the delete + rename that performs a replacement
//! - [`console`]: reporting and keyboard capabilities, real and scripted
//! - [`app`]: the whole session from banner to completion gate

pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod duplicates;
pub mod error;
pub mod input;
pub mod logging;
pub mod reconcile;
pub mod scanner;

use std::io;

use anyhow::{Context, Result};
use crossterm::{execute, terminal::SetTitle};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::console::{Console, ConsoleReporter, StdTerminal};
use crate::error::ExitCode;

/// Run the application against the real terminal.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined or the
/// console fails mid-session (including Ctrl+C at a key prompt).
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = AppConfig::from_cli(&cli);
    log::debug!("Configuration: {:?}", config);

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, SetTitle(app::TITLE)) {
        log::debug!("Could not set console title: {}", e);
    }

    let mut console = Console::new(StdTerminal::new(), ConsoleReporter::stdout(config.color));
    app::run_session(&mut console, &config, &cwd)?;

    Ok(ExitCode::Success)
}
