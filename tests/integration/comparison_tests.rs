use filetime::{set_file_times, FileTime};
use fixdupes::console::{Tone, Transcript};
use fixdupes::duplicates::{format_time, FileStamp, Metric};
use fixdupes::reconcile::render_comparison;
use std::cmp::Ordering;
use std::fs;
use tempfile::tempdir;

/// Tone of each metric's trailing marker, in display order.
fn tags(transcript: &Transcript) -> Vec<(String, Tone)> {
    let entries = transcript.entries();
    entries
        .windows(2)
        .filter(|w| w[0].text.starts_with("- ") && w[1].text == " *")
        .map(|w| (w[0].text.clone(), w[1].tone))
        .collect()
}

#[test]
fn test_newer_and_larger_duplicate() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("report.docx");
    let duplicate = dir.path().join("report-PC.docx");
    fs::write(&original, b"old").unwrap();
    fs::write(&duplicate, b"newer text").unwrap();

    let older = FileTime::from_unix_time(1_600_000_000, 0);
    let newer = FileTime::from_unix_time(1_700_000_000, 0);
    set_file_times(&original, older, older).unwrap();
    set_file_times(&duplicate, newer, newer).unwrap();

    let original = FileStamp::capture(&original).unwrap();
    let duplicate = FileStamp::capture(&duplicate).unwrap();
    assert_eq!(original.compare(&duplicate, Metric::Written), Ordering::Less);
    assert_eq!(original.compare(&duplicate, Metric::Accessed), Ordering::Less);

    let mut transcript = Transcript::new();
    render_comparison(&mut transcript, &original, &duplicate).unwrap();
    let tags = tags(&transcript);

    assert_eq!(tags.len(), 8);
    let (left, right) = tags.split_at(4);
    assert!(left[2].0.starts_with("- Write: "));
    assert_eq!(left[2].1, Tone::Less);
    assert_eq!(right[2].1, Tone::Greater);
    assert_eq!(left[3].0, "- Bytes: 3");
    assert_eq!(left[3].1, Tone::Less);
    assert_eq!(right[3].0, "- Bytes: 10");
    assert_eq!(right[3].1, Tone::Greater);
}

#[test]
fn test_identical_metadata_is_equal_everywhere() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("a.txt");
    let duplicate = dir.path().join("a-PC.txt");
    fs::write(&original, b"same").unwrap();
    fs::write(&duplicate, b"same").unwrap();
    let when = FileTime::from_unix_time(1_650_000_000, 0);
    set_file_times(&original, when, when).unwrap();
    set_file_times(&duplicate, when, when).unwrap();

    let original = FileStamp::capture(&original).unwrap();
    let duplicate = FileStamp::capture(&duplicate).unwrap();

    for metric in [Metric::Accessed, Metric::Written, Metric::Size] {
        assert_eq!(original.compare(&duplicate, metric), Ordering::Equal);
    }
    assert_eq!(
        original.display(Metric::Written),
        duplicate.display(Metric::Written)
    );
}

#[test]
fn test_headers_name_both_files() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("b.txt");
    let duplicate = dir.path().join("b-PC.txt");
    fs::write(&original, b"1").unwrap();
    fs::write(&duplicate, b"2").unwrap();

    let original_stamp = FileStamp::capture(&original).unwrap();
    let duplicate_stamp = FileStamp::capture(&duplicate).unwrap();
    let mut transcript = Transcript::new();
    render_comparison(&mut transcript, &original_stamp, &duplicate_stamp).unwrap();

    let headers: Vec<_> = transcript
        .entries_with_tone(Tone::Header)
        .map(|e| e.text.clone())
        .collect();
    assert_eq!(
        headers,
        vec![
            format!("OneDrive copy: {}", original.display()),
            format!("Duplicate copy: {}", duplicate.display()),
        ]
    );
}

#[test]
fn test_metric_labels_in_order() {
    let labels: Vec<_> = Metric::ALL.iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["Created", "Access", "Write", "Bytes"]);
}

#[test]
fn test_unknown_time() {
    assert_eq!(format_time(None), "unknown");
}
