//! Batch runs: per-file isolation, list resolution and on-disk output.

mod common;

use std::path::PathBuf;

use common::{photo, write_photo, MemoryStore};
use igframe::batch::{convert_file, convert_files, convert_list, BatchSummary};
use igframe::config::{BlurConfig, BorderConfig, Job};
use igframe::{FsStore, ImageStore};

fn small_alt() -> Job {
    Job::Bordered(BorderConfig {
        width: 216,
        height: 270,
        padding: 6,
        border: 2,
        quality: 70,
        ..BorderConfig::default()
    })
}

#[test]
fn bad_file_does_not_abort_the_batch() {
    let store = MemoryStore::default()
        .with_photo("/in/a.jpg", photo(300, 200))
        .with_photo("/in/c.JPEG", photo(200, 300));
    let files = vec![
        PathBuf::from("/in/a.jpg"),
        PathBuf::from("/in/missing.jpg"),
        PathBuf::from("/in/c.JPEG"),
    ];
    let mut out = Vec::new();

    let summary = convert_files(&files, &small_alt(), &store, &mut out).unwrap();

    assert_eq!(summary, BatchSummary { converted: 2, failed: 1 });
    assert_eq!(
        store.saved_paths(),
        vec![PathBuf::from("/in/a_IG.jpg"), PathBuf::from("/in/c_IG.JPEG")]
    );
    for (_, image, quality) in store.saved.borrow().iter() {
        assert_eq!(image.dimensions(), (216, 270));
        assert_eq!(*quality, 70);
    }

    let report = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Converting a.jpg");
    assert_eq!(lines[1], "Converting missing.jpg");
    assert!(lines[2].starts_with("Error occurred while attempting to convert missing.jpg: "));
    assert!(lines[2].contains("no such file"));
    assert_eq!(lines[3], "Converting c.JPEG");
    assert_eq!(lines.len(), 4);
}

#[test]
fn list_entries_resolve_against_the_list_directory() {
    let store = MemoryStore::default()
        .with_text("/lists/today.txt", "a.png\n\nsub/b.jpg\n")
        .with_photo("/lists/a.png", photo(40, 60))
        .with_photo("/lists/sub/b.jpg", photo(60, 40));
    let mut out = Vec::new();

    let job = Job::Blurred(BlurConfig::default());
    let summary = convert_list("/lists/today.txt".as_ref(), &job, &store, &mut out).unwrap();

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(
        store.saved_paths(),
        vec![
            PathBuf::from("/lists/a_4_3.jpg"),
            PathBuf::from("/lists/sub/b_4_3.jpg"),
        ]
    );
    let saved = store.saved.borrow();
    assert_eq!(saved[0].1.dimensions(), (50, 60));
    assert_eq!(saved[1].1.dimensions(), (60, 75));
}

#[test]
fn missing_list_is_an_error() {
    let store = MemoryStore::default();
    let mut out = Vec::new();
    let err = convert_list("/nope.txt".as_ref(), &small_alt(), &store, &mut out).unwrap_err();
    assert_eq!(err.category(), "io");
    assert!(err.to_string().ends_with("(while loading the batch list)"));
    assert!(out.is_empty());
}

#[test]
fn list_entries_are_not_trimmed() {
    let store = MemoryStore::default()
        .with_text("/lists/today.txt", "a.png\n  \n")
        .with_photo("/lists/a.png", photo(40, 60));
    let mut out = Vec::new();

    let job = Job::Blurred(BlurConfig::default());
    let summary = convert_list("/lists/today.txt".as_ref(), &job, &store, &mut out).unwrap();

    assert_eq!(summary, BatchSummary { converted: 1, failed: 1 });
    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("Error occurred while attempting to convert   : "));
}

#[test]
fn encode_failure_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_photo(dir.path(), "wide.png", 40, 2);
    let job = Job::Bordered(BorderConfig {
        width: 70_000,
        height: 2,
        padding: 0,
        border: 0,
        ..BorderConfig::default()
    });

    let err = convert_file(&input, &job, &FsStore).unwrap_err();

    assert_eq!(err.category(), "encode");
    assert!(!dir.path().join("wide_IG.jpg").exists());
}

#[test]
fn converts_on_disk_and_output_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_photo(dir.path(), "IMG_0001.png", 300, 200);

    let written = convert_file(&input, &small_alt(), &FsStore).unwrap();

    assert_eq!(written, dir.path().join("IMG_0001_IG.jpg"));
    let back = FsStore.load(&written).unwrap();
    assert_eq!(back.dimensions(), (216, 270));
}

#[test]
fn undecodable_file_on_disk_is_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_photo(dir.path(), "good.png", 60, 40);
    std::fs::write(dir.path().join("broken.jpg"), b"not a jpeg").unwrap();
    let list = dir.path().join("list.txt");
    std::fs::write(&list, "broken.jpg\ngood.png\n").unwrap();
    let mut out = Vec::new();

    let summary = convert_list(&list, &small_alt(), &FsStore, &mut out).unwrap();

    assert_eq!(summary, BatchSummary { converted: 1, failed: 1 });
    assert!(!dir.path().join("broken_IG.jpg").exists());
    assert!(dir.path().join("good_IG.jpg").exists());
    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("Error occurred while attempting to convert broken.jpg"));
}
