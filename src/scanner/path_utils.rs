//! Unicode- and case-aware substring matching for file names and paths.
//!
//! # Background
//!
//! macOS stores file names in NFD (decomposed) form while users type NFC
//! (composed) text. The same visible marker can therefore have two byte
//! representations:
//!
//! - NFC: `café` - 'é' is U+00E9 (single code point)
//! - NFD: `café` - 'e' U+0065 + combining acute accent U+0301
//!
//! Matching searches for every normalization form of the needle, so a marker
//! typed as NFC still finds files stored as NFD.
//!
//! Case sensitivity follows the host filesystem: Windows and macOS compare
//! ASCII letters case-insensitively, everything else compares bytes exactly.
//!
//! # Example
//!
//! ```
//! use fixdupes::scanner::path_utils::{find_first, normalization_variants, CaseSensitivity};
//!
//! let needles = normalization_variants("-café.");
//! let found = find_first("notes-cafe\u{0301}.txt", &needles, CaseSensitivity::Sensitive);
//! assert_eq!(found, Some(5..13));
//! ```

use std::ops::Range;

use unicode_normalization::UnicodeNormalization;

/// How letters are compared when matching names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    /// ASCII letters compare equal regardless of case.
    Insensitive,
}

impl CaseSensitivity {
    /// The usual behavior of the host platform's filesystems.
    #[must_use]
    pub fn host() -> Self {
        if cfg!(any(windows, target_os = "macos")) {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }
}

/// The distinct NFC and NFD forms of `s`, NFC first.
///
/// Pure ASCII input yields a single entry.
#[must_use]
pub fn normalization_variants(s: &str) -> Vec<String> {
    let nfc: String = s.nfc().collect();
    let nfd: String = s.nfd().collect();
    if nfc == nfd {
        vec![nfc]
    } else {
        vec![nfc, nfd]
    }
}

/// Byte range of the earliest occurrence of any needle in `haystack`.
///
/// When two needles match at the same position the longer match wins.
#[must_use]
pub fn find_first(
    haystack: &str,
    needles: &[String],
    case: CaseSensitivity,
) -> Option<Range<usize>> {
    needles
        .iter()
        .filter(|needle| !needle.is_empty())
        .filter_map(|needle| {
            find_one(haystack, needle, case).map(|start| start..start + needle.len())
        })
        .min_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)))
}

fn find_one(haystack: &str, needle: &str, case: CaseSensitivity) -> Option<usize> {
    match case {
        CaseSensitivity::Sensitive => haystack.find(needle),
        CaseSensitivity::Insensitive => haystack.char_indices().map(|(i, _)| i).find(|&i| {
            haystack
                .get(i..i + needle.len())
                .is_some_and(|window| window.eq_ignore_ascii_case(needle))
        }),
    }
}
