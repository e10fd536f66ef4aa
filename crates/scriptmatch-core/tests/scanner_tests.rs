use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use scriptmatch_core::scanner::collect_files;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|e| e.to_string()).collect()
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "x").unwrap();
    path
}

#[test]
fn test_partitions_are_disjoint() {
    let src = tempdir().unwrap();
    touch(src.path(), "scene.mp4");
    touch(src.path(), "scene.funscript");
    touch(src.path(), "notes.txt");

    let set = collect_files(
        &[src.path().to_path_buf()],
        &exts(&["mp4", "mkv", "wmv"]),
        &exts(&["funscript"]),
    );

    assert_eq!(set.media.len(), 1);
    assert_eq!(set.scripts.len(), 1);
    for media in &set.media {
        assert!(!set.scripts.contains(media));
    }
}

#[test]
fn test_directories_are_expanded_recursively() {
    let src = tempdir().unwrap();
    let nested = src.path().join("a").join("b").join("c");
    fs::create_dir_all(&nested).unwrap();
    touch(src.path(), "top.mp4");
    touch(&nested, "deep.mkv");
    touch(&nested, "deep.funscript");

    let set = collect_files(
        &[src.path().to_path_buf()],
        &exts(&["mp4", "mkv"]),
        &exts(&["funscript"]),
    );

    assert_eq!(set.media.len(), 2);
    assert_eq!(set.scripts.len(), 1);
}

#[test]
fn test_single_file_input_is_classified_by_extension() {
    let src = tempdir().unwrap();
    let media = touch(src.path(), "scene.mp4");
    let other = touch(src.path(), "scene.txt");

    let set = collect_files(&[media, other], &exts(&["mp4"]), &exts(&["funscript"]));

    assert_eq!(set.media.len(), 1);
    assert!(set.scripts.is_empty());
}

#[test]
fn test_extension_matching_is_case_insensitive() {
    let src = tempdir().unwrap();
    touch(src.path(), "loud.MP4");
    touch(src.path(), "loud.FunScript");

    let set = collect_files(
        &[src.path().to_path_buf()],
        &exts(&["mp4"]),
        &exts(&["funscript"]),
    );

    assert_eq!(set.media.len(), 1);
    assert_eq!(set.scripts.len(), 1);
}

#[test]
fn test_overlapping_inputs_dedupe_by_resolved_path() {
    let src = tempdir().unwrap();
    let file = touch(src.path(), "scene.mp4");

    // The same file reached as a direct input and through its directory.
    let set = collect_files(
        &[src.path().to_path_buf(), file],
        &exts(&["mp4"]),
        &exts(&["funscript"]),
    );

    assert_eq!(set.media.len(), 1);
}

#[test]
fn test_nonexistent_inputs_are_skipped_silently() {
    let src = tempdir().unwrap();
    touch(src.path(), "scene.mp4");

    let set = collect_files(
        &[
            PathBuf::from("/no/such/file.mp4"),
            src.path().to_path_buf(),
        ],
        &exts(&["mp4"]),
        &exts(&["funscript"]),
    );

    assert_eq!(set.media.len(), 1);
    assert!(set.scripts.is_empty());
}

#[test]
fn test_empty_inputs_yield_empty_sets() {
    let set = collect_files(&[], &exts(&["mp4"]), &exts(&["funscript"]));
    assert!(set.media.is_empty());
    assert!(set.scripts.is_empty());
}
