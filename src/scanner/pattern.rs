//! The `*-<marker>.*` naming convention of sync-conflict duplicates.
//!
//! A conflicting copy of `report.docx` created by a machine named
//! `DESKTOP-AB12` is stored as `report-DESKTOP-AB12.docx`. [`MarkerPattern`]
//! recognizes such names and derives the original path back from them.

use std::ops::Range;
use std::path::{Path, PathBuf};

use super::path_utils::{find_first, normalization_variants, CaseSensitivity};
use super::{Marker, MarkerError};

/// Matcher for duplicate names carrying one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPattern {
    marker: Marker,
    needles: Vec<String>,
    case: CaseSensitivity,
}

impl MarkerPattern {
    /// Pattern for `marker` with the given case rules.
    #[must_use]
    pub fn new(marker: Marker, case: CaseSensitivity) -> Self {
        let needles = normalization_variants(&marker.needle());
        Self {
            marker,
            needles,
            case,
        }
    }

    /// Pattern for `marker` with the host platform's case rules.
    #[must_use]
    pub fn for_host(marker: Marker) -> Self {
        Self::new(marker, CaseSensitivity::host())
    }

    /// Parse and build in one step.
    pub fn parse(raw: &str, case: CaseSensitivity) -> Result<Self, MarkerError> {
        Ok(Self::new(Marker::new(raw)?, case))
    }

    #[must_use]
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    #[must_use]
    pub fn case(&self) -> CaseSensitivity {
        self.case
    }

    /// Glob-style display form, e.g. `*-DESKTOP-AB12.*`.
    #[must_use]
    pub fn glob(&self) -> String {
        format!("*{}*", self.marker.needle())
    }

    /// Whether a file name matches `*-<marker>.*`.
    #[must_use]
    pub fn matches_file_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Byte range of the first `-<marker>.` in `text`.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        find_first(text, &self.needles, self.case)
    }

    /// Path of the original a duplicate was copied from.
    ///
    /// Replaces the first occurrence of `-<marker>.` in the full path with
    /// `.`. Returns `None` when the path is not valid UTF-8 or holds no
    /// occurrence.
    #[must_use]
    pub fn derive_original(&self, duplicate: &Path) -> Option<PathBuf> {
        let text = duplicate.to_str()?;
        let range = self.find(text)?;

        let mut original = String::with_capacity(text.len());
        original.push_str(&text[..range.start]);
        original.push('.');
        original.push_str(&text[range.end..]);
        Some(PathBuf::from(original))
    }
}
