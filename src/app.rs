//! The interactive session: banner, prompts, scan, reconcile, completion gate.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::console::{Console, KeySource, LineSource, Reporter, Tone};
use crate::input::{collect_marker, collect_root};
use crate::reconcile::{ReconcileReport, Reconciler};
use crate::scanner::{MarkerPattern, Walker};

/// Console window title.
pub const TITLE: &str = "OneDrive - Fix Duplicates";

/// Shown once the last match has been handled.
pub const FINISHED_MESSAGE: &str = "All finished! It's safe to close this window.";

const BANNER: &[&str] = &[
    "----------------------------------------------------------------",
    "------ Delete duplicate OneDrive files from bad sync.     ------",
    "----------------------------------------------------------------",
    "- After confirming replacement of each file, the file is permanently removed.",
    "- If you replaced a file by mistake you can attempt to restore the file manually from the OneDrive recycle bin.",
    "- Y/N can be held down for repetitive actions.",
];

/// Run one full session against `console`.
///
/// Relative root input resolves against `cwd`. Returns the per-file report
/// once the completion gate has been passed.
///
/// # Errors
///
/// Only console failures end the session early; see
/// [`PromptError`](crate::console::PromptError).
pub fn run_session<I, R>(
    console: &mut Console<I, R>,
    config: &AppConfig,
    cwd: &Path,
) -> Result<ReconcileReport>
where
    I: LineSource + KeySource,
    R: Reporter,
{
    console.lines(Tone::Header, BANNER)?;

    let root = collect_root(console, cwd, config.root.clone())
        .context("Failed to read the root directory")?;
    let marker =
        collect_marker(console, config.marker.clone()).context("Failed to read the marker")?;

    let pattern = MarkerPattern::for_host(marker);
    log::info!(
        "Scanning {} for {} ({:?})",
        root.display(),
        pattern.glob(),
        pattern.case()
    );

    // Snapshot the tree so replacements cannot feed back into the walk.
    let scanned: Vec<_> = Walker::new(&root, pattern.clone()).walk().collect();
    log::info!("Found {} candidate duplicates", scanned.len());

    let report = Reconciler::new(console, &pattern)
        .run(scanned)
        .context("Reconciliation stopped")?;

    log::info!(
        "Done: {} replaced, {} skipped, {} without original, {} failed",
        report.replaced(),
        report.skipped(),
        report.missing_originals(),
        report.failed()
    );

    console.blank_line()?;
    console.line(Tone::Success, FINISHED_MESSAGE)?;

    if config.wait_for_exit {
        console
            .wait_for_exit()
            .context("Failed while waiting for the exit key")?;
    }

    Ok(report)
}
