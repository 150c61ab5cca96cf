use std::fs;
use std::path::Path;
use tempfile::tempdir;

use dir_maintainer::model::{GroupKind, Groups};
use dir_maintainer::scanner::scan_directory;
use dir_maintainer::Error;

/// Layout:
///   root/
///     20230101_run.log
///     data.csv
///     notes.txt
///     notes.md
///     README
///     old.log/          (directory)
///     csv/              (category folder from a previous run)
///       nested.csv
fn create_test_tree(root: &Path) {
    for name in [
        "20230101_run.log",
        "data.csv",
        "notes.txt",
        "notes.md",
        "README",
    ] {
        fs::write(root.join(name), name).unwrap();
    }
    fs::create_dir(root.join("old.log")).unwrap();
    fs::create_dir(root.join("csv")).unwrap();
    fs::write(root.join("csv").join("nested.csv"), "n").unwrap();
}

fn names(groups: &Groups, kind: GroupKind) -> Vec<String> {
    let mut names: Vec<String> = groups.get(kind).iter().map(|e| e.name.clone()).collect();
    names.sort();
    names
}

#[test]
fn test_scan_buckets_immediate_children() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());

    let groups = scan_directory(tmp.path()).unwrap();

    assert_eq!(names(&groups, GroupKind::Log), vec!["20230101_run.log"]);
    assert_eq!(names(&groups, GroupKind::Csv), vec!["data.csv"]);
    assert_eq!(names(&groups, GroupKind::Txt), vec!["notes.txt"]);
    assert_eq!(
        names(&groups, GroupKind::Unrecognized),
        vec!["README", "notes.md", "old.log"]
    );
    assert_eq!(names(&groups, GroupKind::Reserved), vec!["csv"]);
}

#[test]
fn test_every_entry_lands_in_exactly_one_group() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());

    let groups = scan_directory(tmp.path()).unwrap();

    let mut seen: Vec<String> = GroupKind::ALL
        .iter()
        .flat_map(|kind| groups.get(*kind).iter().map(|e| e.name.clone()))
        .collect();
    seen.sort();

    let mut on_disk: Vec<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    on_disk.sort();

    assert_eq!(seen, on_disk);
    // csv/nested.csv is one level down and never scanned
    assert_eq!(groups.len(), 7);
}

#[test]
fn test_entry_attributes() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("sized.txt"), vec![0u8; 2048]).unwrap();

    let groups = scan_directory(tmp.path()).unwrap();
    let entry = &groups.get(GroupKind::Txt)[0];

    assert_eq!(entry.size, 2048);
    assert_eq!(entry.extension.as_deref(), Some(".txt"));
    assert!(!entry.is_dir);
    assert_eq!(entry.path, tmp.path().join("sized.txt"));
}

#[test]
fn test_empty_directory() {
    let tmp = tempdir().unwrap();
    let groups = scan_directory(tmp.path()).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn test_unreadable_root_is_an_error() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("gone");
    let err = scan_directory(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_skipped() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("real.csv"), "x").unwrap();
    std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("broken.csv"))
        .unwrap();

    let groups = scan_directory(tmp.path()).unwrap();
    assert_eq!(names(&groups, GroupKind::Csv), vec!["real.csv"]);
    assert_eq!(groups.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_symlink_back_to_target_is_listed() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("data");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.csv"), "x").unwrap();
    std::os::unix::fs::symlink("..", root.join("up")).unwrap();
    std::os::unix::fs::symlink(".", root.join("self")).unwrap();

    let groups = scan_directory(&root).unwrap();

    let on_disk = fs::read_dir(&root).unwrap().count();
    assert_eq!(groups.len(), on_disk);
    assert_eq!(names(&groups, GroupKind::Csv), vec!["a.csv"]);
    assert_eq!(names(&groups, GroupKind::Unrecognized), vec!["self", "up"]);
    assert!(groups.get(GroupKind::Unrecognized).iter().all(|e| e.is_dir));
}
