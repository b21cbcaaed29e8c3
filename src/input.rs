//! Interactive collection of the root directory and marker.
//!
//! Both prompts loop until they get valid input *and* an explicit "yes" to
//! the confirmation question. Rejected input shows an error and asks again;
//! a "no" restarts the prompt from the top. Nothing here touches the
//! filesystem except to check that the directory exists.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::console::{Confirm, LineSource, PromptError, Reporter, Tone};
use crate::scanner::{Marker, MarkerError};

/// Confirmation asked after each accepted value.
pub const CONFIRM_QUESTION: &str = "Is this correct? Y/N";

/// Shown for empty directory input.
pub const EMPTY_ROOT_MESSAGE: &str =
    "Cannot enter empty directory name, use \".\" for current directory.";

/// Shown for empty marker input.
pub const EMPTY_MARKER_MESSAGE: &str = "Cannot enter empty name!";

#[cfg(windows)]
const ROOT_EXAMPLES: &[&str] = &[
    "Example Path: C:\\Users\\User\\OneDrive",
    "Example Path: ..\\..\\..\\OneDrive\\Pictures",
];

#[cfg(not(windows))]
const ROOT_EXAMPLES: &[&str] = &[
    "Example Path: /home/user/OneDrive",
    "Example Path: ../../../OneDrive/Pictures",
];

/// Rejected root directory input.
#[derive(Debug, Error)]
pub enum RootError {
    #[error("directory name cannot be empty")]
    Empty,

    #[error("Directory \"{}\" does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("Directory \"{}\" does not exist.", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Turn one line of input into an existing directory.
///
/// Whitespace-only input is rejected; otherwise the line is used as typed,
/// so names with leading or trailing spaces stay reachable. Relative input
/// is resolved against `cwd`; `.` and `..` components are folded so the user
/// sees a clean path.
///
/// # Errors
///
/// - `Empty` for empty or whitespace-only input
/// - `NotFound` if nothing, or something other than a directory, is there
/// - `Invalid` if the path cannot be examined at all (e.g. embedded NUL)
pub fn resolve_root(line: &str, cwd: &Path) -> Result<PathBuf, RootError> {
    if line.trim().is_empty() {
        return Err(RootError::Empty);
    }

    let candidate = Path::new(line);
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        cwd.join(candidate)
    };
    let path = fold_dots(&joined);

    match fs::metadata(&path) {
        Ok(metadata) if metadata.is_dir() => Ok(path),
        Ok(_) => Err(RootError::NotFound(path)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(RootError::NotFound(path)),
        Err(source) => Err(RootError::Invalid { path, source }),
    }
}

/// Lexically drop `.` components and resolve `..` against earlier ones.
fn fold_dots(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    let folded: PathBuf = parts.iter().collect();
    if folded.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        folded
    }
}

/// Ask for the directory to search.
///
/// `preset` is used in place of the first typed line; if it is rejected or
/// declined, the prompt falls back to reading lines.
pub fn collect_root<C>(
    console: &mut C,
    cwd: &Path,
    mut preset: Option<PathBuf>,
) -> Result<PathBuf, PromptError>
where
    C: LineSource + Confirm + Reporter,
{
    loop {
        console.blank_line()?;
        console.line(Tone::Header, "Set root directory to run duplicate search.")?;
        console.lines(Tone::Hint, ROOT_EXAMPLES)?;
        console.inline(Tone::Prompt, "Path: ")?;

        let line = match preset.take() {
            Some(path) => {
                let text = os_to_line(path.into_os_string());
                console.line(Tone::Info, &text)?;
                text
            }
            None => console.read_line()?,
        };

        let root = match resolve_root(&line, cwd) {
            Ok(root) => root,
            Err(RootError::Empty) => {
                console.line(Tone::Failure, EMPTY_ROOT_MESSAGE)?;
                continue;
            }
            Err(e) => {
                log::debug!("Rejected root {:?}: {:?}", line, e);
                console.line(Tone::Failure, &e.to_string())?;
                continue;
            }
        };

        console.blank_line()?;
        console.line(
            Tone::Info,
            &format!(
                "Search \"{}\" for all content, including sub directories.",
                root.display()
            ),
        )?;
        if console.confirm(CONFIRM_QUESTION)? {
            log::info!("Root directory: {}", root.display());
            return Ok(root);
        }
    }
}

/// Ask for the marker found in duplicate file names.
///
/// `preset` is used in place of the first typed line, as for [`collect_root`].
pub fn collect_marker<C>(console: &mut C, mut preset: Option<String>) -> Result<Marker, PromptError>
where
    C: LineSource + Confirm + Reporter,
{
    loop {
        console.blank_line()?;
        console.line(Tone::Header, "Set name that is found in duplicate files.")?;
        console.line(Tone::Hint, "Example File: \"New Text Document-<NAME>.txt\"")?;
        console.inline(Tone::Prompt, "Name: ")?;

        let line = match preset.take() {
            Some(text) => {
                console.line(Tone::Info, &text)?;
                text
            }
            None => console.read_line()?,
        };

        let marker = match Marker::new(&line) {
            Ok(marker) => marker,
            Err(MarkerError::Empty) => {
                console.line(Tone::Failure, EMPTY_MARKER_MESSAGE)?;
                continue;
            }
        };

        console.blank_line()?;
        console.line(
            Tone::Info,
            &format!("Search for files that contain \"{}\".", marker.segment()),
        )?;
        console.line(
            Tone::Hint,
            &format!("Example File: \"{}\"", marker.example_file_name()),
        )?;
        if console.confirm(CONFIRM_QUESTION)? {
            log::info!("Marker: {}", marker);
            return Ok(marker);
        }
    }
}

fn os_to_line(text: OsString) -> String {
    text.into_string()
        .unwrap_or_else(|raw| raw.to_string_lossy().into_owned())
}
