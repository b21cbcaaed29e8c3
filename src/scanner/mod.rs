//! Scanner module: finds sync-conflict duplicates under a root directory.
//!
//! This module provides functionality for:
//! - Validating the user's marker name fragment ([`Marker`])
//! - Matching file names against `*-<marker>.*` ([`MarkerPattern`])
//! - Lazy, single-threaded directory walking ([`Walker`])
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`pattern`]: The naming convention and original-path derivation
//! - [`path_utils`]: Unicode/case-aware substring search
//! - [`walker`]: Directory traversal
//!
//! # Example
//!
//! ```no_run
//! use fixdupes::scanner::{Marker, MarkerPattern, Walker};
//! use std::path::Path;
//!
//! let pattern = MarkerPattern::for_host(Marker::new("DESKTOP-AB12").unwrap());
//! let walker = Walker::new(Path::new("/data/OneDrive"), pattern);
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}", file.path.display()),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod path_utils;
pub mod pattern;
pub mod walker;

use std::fmt;
use std::path::PathBuf;

pub use path_utils::CaseSensitivity;
pub use pattern::MarkerPattern;
pub use walker::Walker;

/// The name fragment a sync client appends to conflicting copies.
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker(String);

impl Marker {
    /// Validate user input: surrounding whitespace is dropped, and nothing
    /// must remain empty.
    pub fn new(raw: &str) -> Result<Self, MarkerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MarkerError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `-<marker>`, the segment appended to the base name.
    #[must_use]
    pub fn segment(&self) -> String {
        format!("-{}", self.0)
    }

    /// `-<marker>.`, the segment together with the extension dot.
    #[must_use]
    pub fn needle(&self) -> String {
        format!("-{}.", self.0)
    }

    /// A made-up duplicate name showing the user what will be matched.
    #[must_use]
    pub fn example_file_name(&self) -> String {
        format!("New Text Document-{}.txt", self.0)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected marker input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker name cannot be empty")]
    Empty,
}

/// A file whose name carries the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFile {
    /// Path as produced by the walk (absolute when the root is absolute).
    pub path: PathBuf,
}

impl DuplicateFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The entry disappeared while the walk was running.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// A symlink cycle was detected.
    #[error("Filesystem loop at {0}")]
    Loop(PathBuf),

    /// Any other I/O error while reading a directory entry.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Path the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PermissionDenied(p) | Self::NotFound(p) | Self::Loop(p) => p,
            Self::Io { path, .. } => path,
        }
    }
}
