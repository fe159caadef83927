//! Tests for recursive file listing.

use std::fs;
use std::path::PathBuf;

use altimetry_common::{list_files, DEFAULT_SUFFIX};
use tempfile::TempDir;

fn touch(dir: &TempDir, rel: &str) -> PathBuf {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"").unwrap();
    path
}

#[test]
fn test_lists_matching_files_recursively() {
    let dir = TempDir::new().unwrap();
    let a = touch(&dir, "ATL06_20190101_rgt0001.h5");
    let b = touch(&dir, "cycle01/ATL06_20190102_rgt0017.h5");
    let c = touch(&dir, "cycle01/deep/nested/ATL06_20190103_rgt0033.h5");
    touch(&dir, "cycle01/readme.txt");
    touch(&dir, "ATL06_20190101_rgt0001.h5.xml");

    let mut found = list_files(dir.path(), DEFAULT_SUFFIX);
    found.sort();

    let mut expected = vec![a, b, c];
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_custom_suffix() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "grid.h5");
    let nc = touch(&dir, "sub/velocity.nc");

    assert_eq!(list_files(dir.path(), ".nc"), vec![nc]);
}

#[test]
fn test_directories_are_not_matched() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("looks_like.h5")).unwrap();
    let inner = touch(&dir, "looks_like.h5/real.h5");

    assert_eq!(list_files(dir.path(), ".h5"), vec![inner]);
}

#[test]
fn test_missing_root_yields_empty_list() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    assert!(list_files(&missing, ".h5").is_empty());
}

#[test]
fn test_empty_suffix_matches_everything() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a.h5");
    touch(&dir, "b/c.tif");

    assert_eq!(list_files(dir.path(), "").len(), 2);
}
