//! Pairing duplicates with their originals.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scanner::{DuplicateFile, MarkerPattern};

/// An original and the duplicate that may replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPair {
    pub original: PathBuf,
    pub duplicate: PathBuf,
}

/// What pairing found for one duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The original exists; the pair goes to the user.
    Pair(ComparisonPair),
    /// Nothing at the derived original path; the duplicate is left alone.
    MissingOriginal { duplicate: PathBuf, original: PathBuf },
}

/// A duplicate whose original path cannot be derived.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8(PathBuf),

    #[error("marker not found in path: {0}")]
    MarkerNotInPath(PathBuf),
}

/// Derive the original of `duplicate` and check that it exists.
///
/// Existence is checked once, here; the file may still vanish before the
/// user answers.
pub fn resolve(duplicate: &DuplicateFile, pattern: &MarkerPattern) -> Result<Resolution, PairError> {
    let original = derive_original(&duplicate.path, pattern)?;

    if original.is_file() {
        Ok(Resolution::Pair(ComparisonPair {
            original,
            duplicate: duplicate.path.clone(),
        }))
    } else {
        Ok(Resolution::MissingOriginal {
            duplicate: duplicate.path.clone(),
            original,
        })
    }
}

/// Original path for a duplicate path, see [`MarkerPattern::derive_original`].
pub fn derive_original(duplicate: &Path, pattern: &MarkerPattern) -> Result<PathBuf, PairError> {
    if duplicate.to_str().is_none() {
        return Err(PairError::NonUtf8(duplicate.to_path_buf()));
    }
    pattern
        .derive_original(duplicate)
        .ok_or_else(|| PairError::MarkerNotInPath(duplicate.to_path_buf()))
}
