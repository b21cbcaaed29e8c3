//! Directory walker for duplicate discovery.
//!
//! # Overview
//!
//! [`Walker`] enumerates every file under a root, at any depth, whose name
//! matches a [`MarkerPattern`]. It is lazy and single-threaded: entries are
//! produced one at a time in filesystem enumeration order. Callers that
//! rename files under the root should collect the walk first.
//!
//! Per-entry failures (permission denied, entries deleted mid-walk, symlink
//! loops) are yielded as [`ScanError`] values; the walk itself carries on.
//!
//! # Example
//!
//! ```no_run
//! use fixdupes::scanner::{Marker, MarkerPattern, Walker};
//! use std::path::Path;
//!
//! let pattern = MarkerPattern::for_host(Marker::new("LAPTOP").unwrap());
//! let walker = Walker::new(Path::new("."), pattern);
//! let found: Vec<_> = walker.walk().filter_map(Result::ok).collect();
//! println!("Found {} duplicates", found.len());
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{DuplicateFile, MarkerPattern, ScanError};

/// Lazy walker over the duplicates below one root.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Names to match
    pattern: MarkerPattern,
}

impl Walker {
    /// Create a new walker for the given root and pattern.
    #[must_use]
    pub fn new(root: &Path, pattern: MarkerPattern) -> Self {
        Self {
            root: root.to_path_buf(),
            pattern,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn pattern(&self) -> &MarkerPattern {
        &self.pattern
    }

    /// Walk the directory tree, yielding matching files.
    ///
    /// Errors are yielded as [`ScanError`] values rather than stopping
    /// iteration. Symbolic links are not followed, and a link is never
    /// itself reported as a duplicate.
    pub fn walk(&self) -> impl Iterator<Item = Result<DuplicateFile, ScanError>> + '_ {
        log::debug!(
            "Walking {} for {}",
            self.root.display(),
            self.pattern.glob()
        );

        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }

                    // Non-UTF-8 names cannot carry a typed marker.
                    let name = entry.file_name().to_str()?;
                    if !self.pattern.matches_file_name(name) {
                        return None;
                    }

                    log::trace!("Matched: {}", entry.path().display());
                    Some(Ok(DuplicateFile::new(entry.into_path())))
                }
                Err(e) => Some(Err(self.handle_walkdir_error(e))),
            })
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn handle_walkdir_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        if error.loop_ancestor().is_some() {
            log::debug!("Filesystem loop at {}", path.display());
            return ScanError::Loop(path);
        }

        match error.into_io_error() {
            Some(io) if io.kind() == ErrorKind::PermissionDenied => {
                log::debug!("Permission denied: {}", path.display());
                ScanError::PermissionDenied(path)
            }
            Some(io) if io.kind() == ErrorKind::NotFound => {
                log::debug!("Not found (may have been deleted): {}", path.display());
                ScanError::NotFound(path)
            }
            Some(io) => {
                log::debug!("I/O error for {}: {}", path.display(), io);
                ScanError::Io { path, source: io }
            }
            None => ScanError::Io {
                path,
                source: std::io::Error::other("directory walk failed"),
            },
        }
    }
}
