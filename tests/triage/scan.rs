//! File and directory checks end to end.

use entroscan::triage::config::DetectorConfig;
use entroscan::triage::scan::{check_path, scan_directory, Scanner};
use entroscan::Verdict;
use std::fs;

use crate::common::test_data::*;
use crate::common::write_file;

#[test]
fn test_text_file_is_safe() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "notes.txt", &plain_text(50));
    let report = check_path(&path);
    assert_eq!(report.verdict, Verdict::Safe);
    assert_eq!(report.detail, None);
    assert_eq!(report.path, path);
}

#[test]
fn test_denylisted_extension_is_suspicious() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["setup.exe", "run.bat", "x.cmd", "pkg.msi", "a.js", "b.vbs", "c.scr", "app.apk"] {
        let path = write_file(dir.path(), name, &plain_text(5));
        let report = check_path(&path);
        assert_eq!(report.verdict, Verdict::Suspicious, "{name}");
        assert_eq!(report.detail.as_deref(), Some("suspicious extension"), "{name}");
    }
}

#[test]
fn test_high_entropy_content_is_suspicious() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "archive.dat", &uniform_blocks(40));
    let report = check_path(&path);
    assert_eq!(report.verdict, Verdict::Suspicious);
}

#[test]
fn test_empty_file_is_evaluated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "empty.log", b"");
    assert_eq!(check_path(&path).verdict, Verdict::Safe);
}

#[test]
fn test_missing_extension_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "Makefile", b"all:\n\ttrue\n");
    let report = check_path(&path);
    assert_eq!(report.verdict, Verdict::InvalidInput);
    assert!(report.detail.is_some());
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let report = check_path(dir.path().join("ghost.txt"));
    assert_eq!(report.verdict, Verdict::Unreadable);
}

#[test]
fn test_oversized_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "big.txt", &plain_text(100));

    let mut cfg = DetectorConfig::default();
    cfg.io.max_file_size = 64;
    let scanner = Scanner::new(&cfg).unwrap();
    let report = scanner.check_path(&path);
    assert_eq!(report.verdict, Verdict::Unreadable);
    assert!(!report.verdict.is_evaluated());
}

#[test]
fn test_directory_scan_counts_and_order() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "b_notes.txt", &plain_text(10));
    write_file(dir.path(), "a_tool.exe", &plain_text(10));
    write_file(dir.path(), "c_blob.bin", &uniform_blocks(8));
    write_file(dir.path(), "d_doc.pdf", &pdf_with("<< /JS (x) >> << /S /Launch >>"));
    write_file(dir.path(), "LICENSE", b"MIT");
    fs::create_dir(dir.path().join("nested.d")).unwrap();
    write_file(dir.path().join("nested.d"), "deep.exe", b"not visited");

    let summary = scan_directory(dir.path()).unwrap();
    assert_eq!(summary.len(), 5);
    assert_eq!(summary.count(Verdict::Suspicious), 3);
    assert_eq!(summary.count(Verdict::Safe), 1);
    assert_eq!(summary.count(Verdict::InvalidInput), 1);
    assert_eq!(summary.count(Verdict::Unreadable), 0);

    let names: Vec<String> = summary
        .reports
        .iter()
        .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["LICENSE", "a_tool.exe", "b_notes.txt", "c_blob.bin", "d_doc.pdf"]);
}

#[test]
fn test_directory_scan_of_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scan_directory(dir.path().join("nope")).is_err());
}

#[test]
fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let summary = scan_directory(dir.path()).unwrap();
    assert!(summary.is_empty());
    assert_eq!(summary.suspicious().count(), 0);
}

#[test]
fn test_summary_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "x.exe", b"MZ");
    let summary = scan_directory(dir.path()).unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"Suspicious\""));
    assert!(json.contains("x.exe"));
}
