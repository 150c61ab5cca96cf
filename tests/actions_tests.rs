use std::fs;
use tempfile::tempdir;

use dir_maintainer::actions::{ensure_dir, move_into, remove};
use dir_maintainer::model::EntryKind;

#[test]
fn test_move_creates_destination() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("a.csv");
    fs::write(&source, "data").unwrap();

    let dest_dir = tmp.path().join("csv");
    let target = move_into(&dest_dir, &source).unwrap();

    assert_eq!(target, dest_dir.join("a.csv"));
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&target).unwrap(), "data");
}

#[test]
fn test_move_replaces_existing_file() {
    let tmp = tempdir().unwrap();
    let dest_dir = tmp.path().join("csv");
    fs::create_dir(&dest_dir).unwrap();
    fs::write(dest_dir.join("a.csv"), "old").unwrap();

    let source = tmp.path().join("a.csv");
    fs::write(&source, "new").unwrap();
    move_into(&dest_dir, &source).unwrap();

    let entries: Vec<_> = fs::read_dir(&dest_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(dest_dir.join("a.csv")).unwrap(), "new");
}

#[test]
fn test_move_replaces_existing_directory() {
    let tmp = tempdir().unwrap();
    let dest_dir = tmp.path().join("log");
    let blocking = dest_dir.join("20230101.log");
    fs::create_dir_all(blocking.join("deep")).unwrap();
    fs::write(blocking.join("deep").join("x"), "x").unwrap();

    let source = tmp.path().join("20230101.log");
    fs::write(&source, "log line").unwrap();
    move_into(&dest_dir, &source).unwrap();

    assert!(blocking.is_file());
    assert_eq!(fs::read_to_string(&blocking).unwrap(), "log line");
}

#[test]
fn test_remove_file_and_directory() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("old.txt");
    fs::write(&file, "x").unwrap();
    let dir = tmp.path().join("stale");
    fs::create_dir_all(dir.join("inner")).unwrap();
    fs::write(dir.join("inner").join("y"), "y").unwrap();

    assert_eq!(remove(&file).unwrap(), Some(EntryKind::File));
    assert_eq!(remove(&dir).unwrap(), Some(EntryKind::Directory));
    assert!(!file.exists());
    assert!(!dir.exists());
}

#[test]
fn test_remove_missing_path_is_noop() {
    let tmp = tempdir().unwrap();
    assert_eq!(remove(&tmp.path().join("never_there")).unwrap(), None);
}

#[test]
fn test_ensure_dir_nested_and_idempotent() {
    let tmp = tempdir().unwrap();
    let nested = tmp.path().join("txt").join("large_txt_files");
    ensure_dir(&nested).unwrap();
    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[cfg(unix)]
#[test]
fn test_move_failure_propagates() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempdir().unwrap();
    let dest_dir = tmp.path().join("csv");
    fs::create_dir(&dest_dir).unwrap();
    fs::set_permissions(&dest_dir, fs::Permissions::from_mode(0o555)).unwrap();

    let source = tmp.path().join("a.csv");
    fs::write(&source, "x").unwrap();

    let result = move_into(&dest_dir, &source);
    fs::set_permissions(&dest_dir, fs::Permissions::from_mode(0o755)).unwrap();

    // root ignores directory permissions, so only check when the move was refused
    if let Err(err) = result {
        assert!(!err.is_invalid_target());
        assert!(source.exists());
    }
}
