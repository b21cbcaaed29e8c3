//! Replacing an original with its duplicate.
//!
//! # Overview
//!
//! A confirmed replacement is two filesystem operations:
//! 1. Permanently delete the original (no trash; the sync service's own
//!    recycle bin is the only way back)
//! 2. Rename the duplicate onto the original's former path
//!
//! Before step 1 the duplicate is checked to still be a regular file, so a
//! duplicate that vanished since the scan never costs the original. There is
//! no rollback: if step 2 fails after step 1 succeeded, the original is gone
//! and the duplicate stays under its marked name.
//!
//! # Example
//!
//! ```no_run
//! use fixdupes::actions::replace::replace_original;
//! use fixdupes::duplicates::ComparisonPair;
//! use std::path::PathBuf;
//!
//! let pair = ComparisonPair {
//!     original: PathBuf::from("/data/report.docx"),
//!     duplicate: PathBuf::from("/data/report-DESKTOP-AB12.docx"),
//! };
//! match replace_original(&pair) {
//!     Ok(result) => println!("Replaced {}", result.original.display()),
//!     Err(e) => eprintln!("Failed: {}", e),
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::ComparisonPair;

/// Error type for replace operations.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when touching the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The path exists but is not a regular file.
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    /// Permanent delete operation failed.
    #[error("permanent delete failed for {path}: {message}")]
    DeleteFailed { path: PathBuf, message: String },

    /// Renaming the duplicate into place failed (the original is already gone).
    #[error("rename {from} -> {to} failed: {message}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReplaceError {
    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::NotAFile(p)
            | Self::DeleteFailed { path: p, .. }
            | Self::Io { path: p, .. } => p,
            Self::RenameFailed { from, .. } => from,
        }
    }

    /// Whether the original was deleted before the failure.
    #[must_use]
    pub fn original_lost(&self) -> bool {
        matches!(self, Self::RenameFailed { .. })
    }

    fn from_io(path: &Path, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }
}

/// Result of a successful replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceResult {
    /// Path now holding the former duplicate.
    pub original: PathBuf,
    /// Former duplicate path, now empty.
    pub duplicate: PathBuf,
    /// Size of the deleted original in bytes.
    pub removed_bytes: u64,
}

/// Ensure `path` is still a regular file.
fn require_file(path: &Path) -> Result<(), ReplaceError> {
    let metadata = fs::metadata(path).map_err(|e| ReplaceError::from_io(path, e))?;
    if metadata.is_file() {
        Ok(())
    } else {
        Err(ReplaceError::NotAFile(path.to_path_buf()))
    }
}

/// Permanently delete a single file.
///
/// **WARNING**: This operation cannot be undone.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if its metadata cannot be read
/// - `DeleteFailed` if the delete operation fails
pub fn permanent_delete(path: &Path) -> Result<u64, ReplaceError> {
    let metadata = fs::metadata(path).map_err(|e| ReplaceError::from_io(path, e))?;
    let size = metadata.len();

    fs::remove_file(path).map_err(|e| {
        log::debug!("Permanent delete failed for {}: {}", path.display(), e);
        ReplaceError::DeleteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    log::info!("Permanently deleted: {} ({} bytes)", path.display(), size);
    Ok(size)
}

/// Move `duplicate` onto `original`'s path.
///
/// # Errors
///
/// `RenameFailed` if the rename fails.
pub fn promote(duplicate: &Path, original: &Path) -> Result<(), ReplaceError> {
    fs::rename(duplicate, original).map_err(|e| {
        log::debug!(
            "Rename failed {} -> {}: {}",
            duplicate.display(),
            original.display(),
            e
        );
        ReplaceError::RenameFailed {
            from: duplicate.to_path_buf(),
            to: original.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    log::info!("Renamed {} -> {}", duplicate.display(), original.display());
    Ok(())
}

/// Delete the original of `pair`, then rename the duplicate into its place.
///
/// # Errors
///
/// - `NotFound`/`NotAFile` if the duplicate is gone; nothing is deleted
/// - Errors from [`permanent_delete`]; nothing was changed
/// - `RenameFailed` from [`promote`]; the original is already deleted
pub fn replace_original(pair: &ComparisonPair) -> Result<ReplaceResult, ReplaceError> {
    require_file(&pair.duplicate)?;

    let removed_bytes = permanent_delete(&pair.original)?;
    promote(&pair.duplicate, &pair.original)?;

    Ok(ReplaceResult {
        original: pair.original.clone(),
        duplicate: pair.duplicate.clone(),
        removed_bytes,
    })
}
