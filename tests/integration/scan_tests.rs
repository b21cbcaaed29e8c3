use fixdupes::scanner::{CaseSensitivity, MarkerPattern, ScanError, Walker};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn pattern(marker: &str) -> MarkerPattern {
    MarkerPattern::parse(marker, CaseSensitivity::Sensitive).unwrap()
}

fn names(walker: &Walker) -> Vec<String> {
    let mut names: Vec<String> = walker
        .walk()
        .filter_map(Result::ok)
        .map(|d| d.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let walker = Walker::new(dir.path(), pattern("PC"));

    assert_eq!(walker.walk().count(), 0);
}

#[test]
fn test_scan_visits_every_depth_once() {
    let dir = tempdir().unwrap();
    let deep = dir.path().join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();

    fs::write(dir.path().join("top-PC.txt"), "1").unwrap();
    fs::write(dir.path().join("a").join("mid-PC.jpg"), "2").unwrap();
    fs::write(deep.join("deep-PC.tar.gz"), "3").unwrap();
    fs::write(deep.join("deep.tar.gz"), "original").unwrap();

    let walker = Walker::new(dir.path(), pattern("PC"));
    let found: Vec<PathBuf> = walker
        .walk()
        .map(|r| r.unwrap().path)
        .collect();
    let unique: HashSet<&PathBuf> = found.iter().collect();

    assert_eq!(found.len(), 3);
    assert_eq!(unique.len(), 3);
    assert!(found.contains(&deep.join("deep-PC.tar.gz")));
}

#[test]
fn test_scan_requires_marker_before_extension() {
    let dir = tempdir().unwrap();
    for name in [
        "report-PC.docx",
        "report-PC",
        "report-PCX.docx",
        "reportPC.docx",
        "report-pc.docx",
        "report.docx",
    ] {
        fs::write(dir.path().join(name), name).unwrap();
    }

    let walker = Walker::new(dir.path(), pattern("PC"));

    assert_eq!(names(&walker), vec!["report-PC.docx"]);
}

#[test]
fn test_scan_case_insensitive_rules() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Report-Desktop-AB12.docx"), "x").unwrap();

    let pattern = MarkerPattern::parse("DESKTOP-ab12", CaseSensitivity::Insensitive).unwrap();
    let walker = Walker::new(dir.path(), pattern);

    assert_eq!(names(&walker), vec!["Report-Desktop-AB12.docx"]);
}

#[test]
fn test_scan_ignores_matching_directories() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("album-PC.d");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("photo.jpg"), "x").unwrap();

    let walker = Walker::new(dir.path(), pattern("PC"));

    assert!(names(&walker).is_empty());
}

#[test]
fn test_scan_marker_with_spaces_and_dashes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("New Text Document-My Laptop-2.txt"), "x").unwrap();
    fs::write(dir.path().join("New Text Document-My Laptop.txt"), "y").unwrap();

    let walker = Walker::new(dir.path(), pattern("My Laptop-2"));

    assert_eq!(names(&walker), vec!["New Text Document-My Laptop-2.txt"]);
}

#[test]
fn test_scan_missing_root_yields_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone");

    let walker = Walker::new(&missing, pattern("PC"));
    let results: Vec<_> = walker.walk().collect();

    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(ScanError::NotFound(_))));
}

#[cfg(unix)]
#[test]
fn test_scan_unreadable_directory_continues() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("hidden-PC.txt"), "x").unwrap();
    fs::write(dir.path().join("visible-PC.txt"), "y").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let walker = Walker::new(dir.path(), pattern("PC"));
    let results: Vec<_> = walker.walk().collect();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let found: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert!(found
        .iter()
        .any(|d| d.path.ends_with("visible-PC.txt")));
    // Root ignores permissions, so the locked file may still be listed.
    if results.iter().any(Result::is_err) {
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, ScanError::PermissionDenied(_))));
    }
}
