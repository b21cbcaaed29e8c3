//! Pairing duplicates with originals and comparing their metadata.

pub mod metadata;
pub mod pair;

pub use metadata::{format_time, FileStamp, Metric};
pub use pair::{derive_original, resolve, ComparisonPair, PairError, Resolution};
