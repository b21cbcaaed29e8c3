//! File actions module.
//!
//! The only action the tool takes is replacing an original with its
//! duplicate: a permanent delete followed by a rename.
//!
//! ```no_run
//! use fixdupes::actions::{replace_original, ReplaceError};
//! use fixdupes::duplicates::ComparisonPair;
//! use std::path::PathBuf;
//!
//! let pair = ComparisonPair {
//!     original: PathBuf::from("report.docx"),
//!     duplicate: PathBuf::from("report-PC.docx"),
//! };
//! if let Err(ReplaceError::RenameFailed { from, .. }) = replace_original(&pair) {
//!     eprintln!("original deleted, {} left in place", from.display());
//! }
//! ```

pub mod replace;

pub use replace::{permanent_delete, promote, replace_original, ReplaceError, ReplaceResult};
