//! PDF sniffing through files on disk and in memory.

use entroscan::triage::check_path;
use entroscan::triage::config::DetectorConfig;
use entroscan::triage::pdf::{assess_pdf, classify_pdf, PdfSniffer};
use entroscan::Verdict;
use std::io::Cursor;

use crate::common::test_data::*;
use crate::common::write_file;

#[test]
fn test_open_action_with_launch() {
    let doc = pdf_with(
        "1 0 obj << /Type /Catalog /OpenAction 2 0 R >> endobj\n\
         2 0 obj << /S /JavaScript /JS (app.launchURL('x')) >> endobj\n\
         3 0 obj << /S /Launch /F (cmd.exe) >> endobj",
    );
    assert_eq!(classify_pdf(&doc), Verdict::Suspicious);
}

#[test]
fn test_benign_documents_are_safe() {
    let doc = pdf_with("1 0 obj << /Type /Page /Contents 4 0 R >> endobj");
    assert_eq!(classify_pdf(&doc), Verdict::Safe);

    // Attachment without any script.
    let doc = pdf_with("<< /Type /Filespec /EF << /F 5 0 R >> >> << /Type /EmbeddedFile >>");
    let a = assess_pdf(&doc);
    assert!(a.found_embed && !a.found_js);
    assert_eq!(a.verdict(), Verdict::Safe);
}

#[test]
fn test_markers_are_case_sensitive() {
    let doc = pdf_with("/javascript /launch");
    assert_eq!(classify_pdf(&doc), Verdict::Safe);
}

#[test]
fn test_markers_inside_header_are_ignored() {
    // "/JS" inside the first 8 bytes cannot be seen: only bytes after the
    // header are scanned.
    let doc = b"%PDF-1./JS /Launch".to_vec();
    let a = assess_pdf(&doc);
    assert!(a.valid_header);
    assert!(!a.found_js);
    assert!(a.found_launch);
}

#[test]
fn test_large_file_streams_across_chunks() {
    let mut body = String::new();
    for i in 0..5000 {
        body.push_str(&format!("{} 0 obj << /Length 10 >> stream\nxxxxxxxxxx\nendstream endobj\n", i));
    }
    body.push_str("<< /S /JavaScript >> << /Type /EmbeddedFile >>");
    let doc = pdf_with(&body);
    assert!(doc.len() > 8192 * 4);

    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "report.pdf", &doc);
    let report = check_path(&path);
    assert_eq!(report.verdict, Verdict::Suspicious);
    assert_eq!(report.detail.as_deref(), Some("active content: script, embedded file"));
}

#[test]
fn test_reader_and_slice_agree_for_any_chunk_size() {
    let doc = pdf_with("aa/JavaScriptbb/EmbeddedFilecc/Launch");
    for chunk in [1usize, 2, 5, 11, 64, 8192] {
        let mut cfg = DetectorConfig::default();
        cfg.io.pdf_chunk_size = chunk;
        let sniffer = PdfSniffer::new(&cfg).unwrap();
        let streamed = sniffer.assess_reader(Cursor::new(&doc)).unwrap();
        assert_eq!(streamed, sniffer.assess(&doc), "chunk size {chunk}");
    }
}

#[test]
fn test_non_pdf_with_pdf_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "invoice.pdf", b"MZ\x90\x00 this is not a pdf");
    let report = check_path(&path);
    assert_eq!(report.verdict, Verdict::Suspicious);
    assert_eq!(report.detail.as_deref(), Some("not a valid PDF"));
}
