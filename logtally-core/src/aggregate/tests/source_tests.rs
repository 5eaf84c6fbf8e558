use crate::aggregate::{LineSource, ReaderSource, open_log_file};
use crate::error::AnalyzeError;
use std::io::Cursor;

fn collect(mut source: impl LineSource) -> Vec<String> {
    let mut out = Vec::new();
    while let Some(line) = source.next_line().unwrap() {
        out.push(line.to_string());
    }
    out
}

#[test]
fn strips_lf_and_crlf_terminators() {
    let source = ReaderSource::new(Cursor::new("one\ntwo\r\nthree"));

    assert_eq!(collect(source), vec!["one", "two", "three"]);
}

#[test]
fn keeps_blank_lines() {
    let source = ReaderSource::new(Cursor::new("a\n\nb\n"));

    assert_eq!(collect(source), vec!["a", "", "b"]);
}

#[test]
fn invalid_utf8_is_replaced_not_fatal() {
    let source = ReaderSource::new(Cursor::new(b"ok\n\xff\xfe bad\nafter\n".to_vec()));

    let lines = collect(source);

    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(" bad"));
    assert_eq!(lines[2], "after");
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.log");

    let err = open_log_file(&path).err().unwrap();

    match err {
        AnalyzeError::SourceUnavailable { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}
