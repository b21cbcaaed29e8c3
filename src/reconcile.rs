//! Interactive reconciliation of duplicates with their originals.
//!
//! For every scanned duplicate whose original exists, the reconciler shows
//! both files' metadata side by side and asks whether to replace the original
//! with the duplicate. Work is strictly sequential, one match at a time.
//!
//! # Error policy
//!
//! Per-item failures (scan errors, unreadable metadata, failed delete or
//! rename) never stop the run and print nothing to the console. Each one is
//! recorded as an [`Outcome::Failed`] in the returned [`ReconcileReport`] and
//! logged at debug level. Console failures ([`PromptError`]) are different:
//! they abort the run, since there is no one left to ask.

use std::path::PathBuf;

use thiserror::Error;

use crate::actions::{replace_original, ReplaceError};
use crate::console::{Confirm, PromptError, Reporter, Tone};
use crate::duplicates::{resolve, ComparisonPair, FileStamp, Metric, PairError, Resolution};
use crate::scanner::{DuplicateFile, MarkerPattern, ScanError};

/// Question asked for every pair.
pub const REPLACE_QUESTION: &str = "Replace OneDrive copy with duplicated file? Y/N";

/// Why one item could not be processed.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Pair(#[from] PairError),

    #[error("cannot read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Replace(#[from] ReplaceError),
}

/// What happened to one scanned duplicate.
#[derive(Debug)]
pub enum Outcome {
    /// The original was deleted and the duplicate took its place.
    Replaced { original: PathBuf, duplicate: PathBuf },
    /// The user declined; both files are untouched.
    Skipped { original: PathBuf, duplicate: PathBuf },
    /// No original next to the duplicate; nothing was shown or changed.
    MissingOriginal { duplicate: PathBuf, original: PathBuf },
    /// Processing failed; see `reason`.
    Failed { path: PathBuf, reason: ReconcileError },
}

/// Per-item outcomes of one run, in processing order.
#[derive(Debug, Default)]
pub struct ReconcileReport {
    pub outcomes: Vec<Outcome>,
}

impl ReconcileReport {
    #[must_use]
    pub fn replaced(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Replaced { .. }))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    #[must_use]
    pub fn missing_originals(&self) -> usize {
        self.count(|o| matches!(o, Outcome::MissingOriginal { .. }))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Drives the compare/confirm/replace loop over scanned duplicates.
pub struct Reconciler<'a, C> {
    console: &'a mut C,
    pattern: &'a MarkerPattern,
}

impl<'a, C> Reconciler<'a, C>
where
    C: Confirm + Reporter,
{
    #[must_use]
    pub fn new(console: &'a mut C, pattern: &'a MarkerPattern) -> Self {
        Self { console, pattern }
    }

    /// Process every scanned item in order.
    ///
    /// # Errors
    ///
    /// Only console failures are returned; everything else becomes an
    /// [`Outcome`].
    pub fn run<I>(&mut self, scanned: I) -> Result<ReconcileReport, PromptError>
    where
        I: IntoIterator<Item = Result<DuplicateFile, ScanError>>,
    {
        let mut report = ReconcileReport::default();
        for item in scanned {
            let outcome = self.process(item)?;
            log_outcome(&outcome);
            report.outcomes.push(outcome);
        }
        Ok(report)
    }

    /// Process one scanned item.
    pub fn process(
        &mut self,
        item: Result<DuplicateFile, ScanError>,
    ) -> Result<Outcome, PromptError> {
        let duplicate = match item {
            Ok(duplicate) => duplicate,
            Err(e) => {
                return Ok(Outcome::Failed {
                    path: e.path().to_path_buf(),
                    reason: e.into(),
                })
            }
        };

        let pair = match resolve(&duplicate, self.pattern) {
            Ok(Resolution::Pair(pair)) => pair,
            Ok(Resolution::MissingOriginal {
                duplicate,
                original,
            }) => {
                return Ok(Outcome::MissingOriginal {
                    duplicate,
                    original,
                })
            }
            Err(e) => {
                return Ok(Outcome::Failed {
                    path: duplicate.path,
                    reason: e.into(),
                })
            }
        };

        let (original, copy) = match capture_pair(&pair) {
            Ok(stamps) => stamps,
            Err(reason) => {
                return Ok(Outcome::Failed {
                    path: pair.duplicate,
                    reason,
                })
            }
        };

        self.console.blank_line()?;
        render_comparison(&mut *self.console, &original, &copy)?;

        if !self.console.confirm(REPLACE_QUESTION)? {
            self.console.line(Tone::Failure, "Skipped!")?;
            return Ok(Outcome::Skipped {
                original: pair.original,
                duplicate: pair.duplicate,
            });
        }

        match replace_original(&pair) {
            Ok(result) => {
                self.console.line(Tone::Success, "Okay!")?;
                Ok(Outcome::Replaced {
                    original: result.original,
                    duplicate: result.duplicate,
                })
            }
            Err(e) => Ok(Outcome::Failed {
                path: pair.duplicate,
                reason: e.into(),
            }),
        }
    }
}

fn capture_pair(pair: &ComparisonPair) -> Result<(FileStamp, FileStamp), ReconcileError> {
    let capture = |path: &PathBuf| {
        FileStamp::capture(path).map_err(|source| ReconcileError::Metadata {
            path: path.clone(),
            source,
        })
    };
    Ok((capture(&pair.original)?, capture(&pair.duplicate)?))
}

/// Show both files' metadata, each metric tagged relative to the other side.
pub fn render_comparison<R>(
    reporter: &mut R,
    original: &FileStamp,
    duplicate: &FileStamp,
) -> Result<(), PromptError>
where
    R: Reporter + ?Sized,
{
    render_side(reporter, "OneDrive copy", original, duplicate)?;
    render_side(reporter, "Duplicate copy", duplicate, original)
}

fn render_side<R>(
    reporter: &mut R,
    title: &str,
    side: &FileStamp,
    other: &FileStamp,
) -> Result<(), PromptError>
where
    R: Reporter + ?Sized,
{
    reporter.line(Tone::Header, &format!("{title}: {}", side.path.display()))?;
    for metric in Metric::ALL {
        reporter.inline(
            Tone::Info,
            &format!("- {}: {}", metric.label(), side.display(metric)),
        )?;
        reporter.line(Tone::from(side.compare(other, metric)), " *")?;
    }
    Ok(())
}

fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Replaced { original, .. } => {
            log::debug!("Replaced {}", original.display());
        }
        Outcome::Skipped { original, .. } => {
            log::debug!("Kept {}", original.display());
        }
        Outcome::MissingOriginal {
            duplicate,
            original,
        } => {
            log::debug!(
                "No original for {} (looked for {})",
                duplicate.display(),
                original.display()
            );
        }
        Outcome::Failed { path, reason } => {
            log::debug!("Skipping {}: {}", path.display(), reason);
        }
    }
}
