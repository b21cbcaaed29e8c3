use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use filetime::{set_file_times, FileTime};
use fixdupes::app::{run_session, FINISHED_MESSAGE};
use fixdupes::config::AppConfig;
use fixdupes::console::{Console, ScriptedInput, Transcript};
use fixdupes::error::ExitCode;
use fixdupes::reconcile::{Outcome, REPLACE_QUESTION};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn config() -> AppConfig {
    AppConfig {
        color: false,
        wait_for_exit: false,
        ..AppConfig::default()
    }
}

/// Scripted input answering the root and marker prompts with "yes".
fn prompts(root: &str, marker: &str) -> ScriptedInput {
    ScriptedInput::new()
        .line(root)
        .answer(true)
        .line(marker)
        .answer(true)
}

/// `<tmp>/data/OneDrive`, the working directory being `<tmp>`.
fn onedrive() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let root = dir.path().join("data").join("OneDrive");
    fs::create_dir_all(&root).unwrap();
    (dir, root)
}

fn modified(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&fs::metadata(path).unwrap())
}

fn run(input: ScriptedInput, cwd: &Path) -> (Console<ScriptedInput, Transcript>, usize) {
    let mut console = Console::new(input, Transcript::new());
    let report = run_session(&mut console, &config(), cwd).unwrap();
    (console, report.outcomes.len())
}

#[test]
fn test_confirmed_pair_replaces_original() {
    let (dir, root) = onedrive();
    fs::write(root.join("report.docx"), "stale").unwrap();
    fs::write(root.join("report-DESKTOP-AB12.docx"), "fresh").unwrap();
    let pinned = FileTime::from_unix_time(1_500_000_000, 0);
    set_file_times(root.join("report-DESKTOP-AB12.docx"), pinned, pinned).unwrap();

    let input = prompts("data/OneDrive", "DESKTOP-AB12").answer(true);
    let (console, processed) = run(input, dir.path());

    assert_eq!(processed, 1);
    assert!(console.input().is_exhausted());
    let transcript = console.reporter();
    assert!(transcript.contains("OneDrive copy: "));
    assert!(transcript.contains("Duplicate copy: "));
    assert!(transcript.contains("Okay!"));
    assert!(transcript.contains(FINISHED_MESSAGE));

    let remaining: Vec<_> = fs::read_dir(&root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(remaining, vec!["report.docx".to_string()]);
    assert_eq!(fs::read_to_string(root.join("report.docx")).unwrap(), "fresh");
    assert_eq!(modified(&root.join("report.docx")), pinned);
}

#[test]
fn test_missing_original_asks_nothing_and_changes_nothing() {
    let (dir, root) = onedrive();
    let duplicate = root.join("report-DESKTOP-AB12.docx");
    fs::write(&duplicate, "fresh").unwrap();

    for _ in 0..2 {
        let (console, processed) = run(prompts("data/OneDrive", "DESKTOP-AB12"), dir.path());

        assert_eq!(processed, 1);
        assert!(!console.reporter().contains(REPLACE_QUESTION));
        assert!(!root.join("report.docx").exists());
        assert_eq!(fs::read_to_string(&duplicate).unwrap(), "fresh");
    }
}

#[test]
fn test_declined_pair_keeps_both_files() {
    let (dir, root) = onedrive();
    let original = root.join("notes.txt");
    let duplicate = root.join("notes-LAPTOP.txt");
    fs::write(&original, "original").unwrap();
    fs::write(&duplicate, "duplicate").unwrap();
    let older = FileTime::from_unix_time(1_400_000_000, 0);
    let newer = FileTime::from_unix_time(1_600_000_000, 0);
    set_file_times(&original, older, older).unwrap();
    set_file_times(&duplicate, newer, newer).unwrap();

    let input = prompts("data/OneDrive", "LAPTOP").answer(false);
    let (console, _) = run(input, dir.path());

    assert!(console.reporter().contains("Skipped!"));
    assert_eq!(fs::read_to_string(&original).unwrap(), "original");
    assert_eq!(fs::read_to_string(&duplicate).unwrap(), "duplicate");
    assert_eq!(modified(&original), older);
    assert_eq!(modified(&duplicate), newer);
}

#[test]
fn test_nested_pairs_each_get_a_question() {
    let (dir, root) = onedrive();
    let photos = root.join("Pictures").join("2024");
    fs::create_dir_all(&photos).unwrap();
    for base in [root.clone(), root.join("Pictures"), photos.clone()] {
        fs::write(base.join("img.jpg"), "old").unwrap();
        fs::write(base.join("img-PC.jpg"), "new").unwrap();
    }

    let input = prompts(".", "PC").answer(true).answer(true).answer(true);
    let mut console = Console::new(input, Transcript::new());
    let report = run_session(&mut console, &config(), &root).unwrap();

    assert_eq!(report.replaced(), 3);
    assert_eq!(console.reporter().count_containing(REPLACE_QUESTION), 3);
    for base in [root.clone(), root.join("Pictures"), photos] {
        assert_eq!(fs::read_to_string(base.join("img.jpg")).unwrap(), "new");
        assert!(!base.join("img-PC.jpg").exists());
    }
    drop(dir);
}

#[test]
fn test_presets_still_need_confirmation() {
    let (dir, root) = onedrive();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("a-PC.txt"), "b").unwrap();

    let config = AppConfig {
        root: Some(root.clone()),
        marker: Some("PC".to_string()),
        ..config()
    };
    let input = ScriptedInput::new().answer(true).answer(true).answer(false);
    let mut console = Console::new(input, Transcript::new());

    let report = run_session(&mut console, &config, dir.path()).unwrap();

    assert_eq!(report.skipped(), 1);
    assert!(console.input().is_exhausted());
    assert_eq!(console.reporter().count_containing("Is this correct? Y/N"), 2);
}

#[test]
fn test_unrecognized_keys_reask_replace_question() {
    let (dir, root) = onedrive();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("a-PC.txt"), "b").unwrap();

    let input = prompts("data/OneDrive", "PC").key('q').key(' ').key('1');
    let (console, _) = run(input, dir.path());

    assert_eq!(console.reporter().count_containing(REPLACE_QUESTION), 3);
    assert_eq!(console.reporter().count_containing("Expected Y/N"), 2);
    assert_eq!(fs::read_to_string(root.join("a.txt")).unwrap(), "b");
}

#[test]
fn test_ctrl_c_at_question_interrupts_run() {
    let (dir, root) = onedrive();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("a-PC.txt"), "b").unwrap();

    let input = prompts("data/OneDrive", "PC")
        .key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    let mut console = Console::new(input, Transcript::new());

    let err = run_session(&mut console, &config(), dir.path()).unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::Interrupted);
    assert_eq!(fs::read_to_string(root.join("a.txt")).unwrap(), "a");
    assert!(!console.reporter().contains(FINISHED_MESSAGE));
}

#[test]
fn test_report_lists_outcomes_in_kind() {
    let (dir, root) = onedrive();
    fs::write(root.join("kept.txt"), "k").unwrap();
    fs::write(root.join("kept-PC.txt"), "k2").unwrap();
    fs::write(root.join("lonely-PC.txt"), "l").unwrap();

    let input = prompts("data/OneDrive", "PC").answer(false);
    let mut console = Console::new(input, Transcript::new());
    let report = run_session(&mut console, &config(), dir.path()).unwrap();

    assert_eq!(report.skipped(), 1);
    assert_eq!(report.missing_originals(), 1);
    assert!(report
        .outcomes
        .iter()
        .all(|o| !matches!(o, Outcome::Failed { .. })));
}
