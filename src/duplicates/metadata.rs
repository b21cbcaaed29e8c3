//! File metadata compared between an original and its duplicate.
//!
//! Only metadata is consulted: creation, last-access and last-write times
//! plus the size. File contents are never read.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// One compared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Created,
    Accessed,
    Written,
    Size,
}

impl Metric {
    /// All metrics, in display order.
    pub const ALL: [Metric; 4] = [Metric::Created, Metric::Accessed, Metric::Written, Metric::Size];

    /// Label shown in the comparison.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Created => "Created",
            Metric::Accessed => "Access",
            Metric::Written => "Write",
            Metric::Size => "Bytes",
        }
    }
}

/// Metadata snapshot of one file.
///
/// Timestamps the platform cannot report (creation time on some Linux
/// filesystems) are `None` and sort before any real value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStamp {
    pub path: PathBuf,
    pub created: Option<SystemTime>,
    pub accessed: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub size: u64,
}

impl FileStamp {
    /// Read the metadata of `path`, following symlinks.
    pub fn capture(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            created: metadata.created().ok(),
            accessed: metadata.accessed().ok(),
            modified: metadata.modified().ok(),
            size: metadata.len(),
        })
    }

    /// How this file's `metric` compares to `other`'s.
    #[must_use]
    pub fn compare(&self, other: &FileStamp, metric: Metric) -> Ordering {
        match metric {
            Metric::Created => self.created.cmp(&other.created),
            Metric::Accessed => self.accessed.cmp(&other.accessed),
            Metric::Written => self.modified.cmp(&other.modified),
            Metric::Size => self.size.cmp(&other.size),
        }
    }

    /// Display value of `metric`.
    #[must_use]
    pub fn display(&self, metric: Metric) -> String {
        match metric {
            Metric::Created => format_time(self.created),
            Metric::Accessed => format_time(self.accessed),
            Metric::Written => format_time(self.modified),
            Metric::Size => self.size.to_string(),
        }
    }
}

/// Render a timestamp in local time, or `unknown`.
#[must_use]
pub fn format_time(time: Option<SystemTime>) -> String {
    match time {
        Some(t) => DateTime::<Local>::from(t)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "unknown".to_string(),
    }
}
