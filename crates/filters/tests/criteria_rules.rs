//! Behavioural tests for the combined criteria rules: type exactness, the
//! pseudo-entry policy, and rule ordering.

use std::fs;

use filters::{FileType, NamePattern, SearchCriteria};

fn dir_type(temp: &tempfile::TempDir) -> fs::FileType {
    fs::metadata(temp.path()).expect("dir metadata").file_type()
}

fn file_type_of(temp: &tempfile::TempDir) -> fs::FileType {
    let file = temp.path().join("plain.txt");
    fs::write(&file, b"data").expect("write file");
    fs::symlink_metadata(&file)
        .expect("file metadata")
        .file_type()
}

#[test]
fn empty_criteria_match_ordinary_entries() {
    let temp = tempfile::tempdir().expect("tempdir");
    let criteria = SearchCriteria::default();
    assert!(criteria.matches("/tmp", "anything", dir_type(&temp)));
}

#[test]
fn type_filter_requires_an_exact_type() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dirs = SearchCriteria::new(None, Some(FileType::Directory));
    let files = SearchCriteria::new(None, Some(FileType::Regular));

    assert!(dirs.matches("/tmp", "sub", dir_type(&temp)));
    assert!(!dirs.matches("/tmp", "plain.txt", file_type_of(&temp)));
    assert!(files.matches("/tmp", "plain.txt", file_type_of(&temp)));
    assert!(!files.matches("/tmp", "sub", dir_type(&temp)));
}

#[cfg(unix)]
#[test]
fn symlinks_match_only_the_symlink_type() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let target = temp.path().join("target.txt");
    let link = temp.path().join("link");
    fs::write(&target, b"data").expect("write target");
    symlink(&target, &link).expect("create symlink");

    let link_type = fs::symlink_metadata(&link)
        .expect("link metadata")
        .file_type();

    let links = SearchCriteria::new(None, Some(FileType::Symlink));
    let files = SearchCriteria::new(None, Some(FileType::Regular));

    assert!(links.matches("/tmp", "link", link_type));
    // A link to a regular file is not a regular file.
    assert!(!files.matches("/tmp", "link", link_type));
}

#[test]
fn device_codes_never_match_ordinary_entries() {
    let temp = tempfile::tempdir().expect("tempdir");
    for code in ['b', 'c', 'p', 's'] {
        let wanted = FileType::from_code(code).expect("supported code");
        let criteria = SearchCriteria::new(None, Some(wanted));
        assert!(!criteria.matches("/tmp", "plain.txt", file_type_of(&temp)));
        assert!(!criteria.matches("/tmp", "sub", dir_type(&temp)));
    }
}

#[test]
fn pseudo_entries_are_rejected_inside_subdirectories() {
    let temp = tempfile::tempdir().expect("tempdir");
    let criteria = SearchCriteria::default();

    assert!(!criteria.matches("/tmp", ".", dir_type(&temp)));
    assert!(!criteria.matches("/tmp", "..", dir_type(&temp)));
    assert!(!criteria.matches("./sub", ".", dir_type(&temp)));
}

#[test]
fn pseudo_entries_match_when_they_are_the_start_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let criteria = SearchCriteria::default();

    assert!(criteria.matches(".", ".", dir_type(&temp)));
    assert!(criteria.matches("..", "..", dir_type(&temp)));
    // The comparison is literal: "." never stands in for "..".
    assert!(!criteria.matches(".", "..", dir_type(&temp)));
    assert!(!criteria.matches("..", ".", dir_type(&temp)));
}

#[test]
fn rules_combine_and_short_circuit() {
    let temp = tempfile::tempdir().expect("tempdir");
    let criteria = SearchCriteria::new(
        Some(NamePattern::new("*.txt")),
        Some(FileType::Regular),
    );

    assert!(criteria.matches("/tmp", "notes.txt", file_type_of(&temp)));
    // Right name, wrong type.
    assert!(!criteria.matches("/tmp", "notes.txt", dir_type(&temp)));
    // Right type, wrong name.
    assert!(!criteria.matches("/tmp", "notes.md", file_type_of(&temp)));
}
