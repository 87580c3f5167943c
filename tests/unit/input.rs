//! Tests for the FASTA input boundary.

use psat::input::{read_records, read_sequence_pair, InputError};
use std::io::Write;
use tempfile::NamedTempFile;

fn fasta_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

#[test]
fn test_read_sequence_pair() {
    let file = fasta_file(">seq1\nGATTACA\n>seq2\nGCATGCU\n");
    let (first, second) = read_sequence_pair(file.path()).expect("two records");

    assert_eq!(first.id(), "seq1");
    assert_eq!(first.seq(), b"GATTACA");
    assert_eq!(second.id(), "seq2");
    assert_eq!(second.seq(), b"GCATGCU");
}

#[test]
fn test_multiline_records() {
    let file = fasta_file(">seq1\nGATT\nACA\n>seq2\nGCAT\nGCU\n");
    let (first, second) = read_sequence_pair(file.path()).expect("two records");

    assert_eq!(first.seq(), b"GATTACA");
    assert_eq!(second.seq(), b"GCATGCU");
}

#[test]
fn test_extra_records_are_ignored_by_pair_reader() {
    let file = fasta_file(">a\nAC\n>b\nGT\n>c\nTT\n");
    let (first, second) = read_sequence_pair(file.path()).expect("two records");

    assert_eq!(first.id(), "a");
    assert_eq!(second.id(), "b");
}

#[test]
fn test_single_sequence_is_rejected() {
    let file = fasta_file(">only\nGATTACA\n");
    let err = read_sequence_pair(file.path()).expect_err("one record is not enough");

    assert_eq!(
        err.downcast_ref::<InputError>(),
        Some(&InputError::TooFewSequences { found: 1 })
    );
}

#[test]
fn test_read_records_collects_all() {
    let file = fasta_file(">a\nAC\n>b\nGT\n>c\nTT\n");
    let records = read_records(file.path()).expect("three records");
    assert_eq!(records.len(), 3);
}

#[test]
fn test_missing_file_reports_path() {
    let err = read_records(std::path::Path::new("/nonexistent/input.fasta"))
        .expect_err("missing file");
    assert!(err.to_string().contains("input.fasta"));
}
