//! Unit tests for the TSV writer, writing to files on disk

use populate::{ColumnKind, Escape, Locale, Populator, Row, Seed, TsvWriter};
use tempfile::TempDir;

#[test]
fn test_tsv_writer_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("first_name.tsv");

    let mut writer = TsvWriter::create(&file_path, Escape::Quote).unwrap();
    writer
        .write_row(&Row {
            id: 0,
            value: "John".to_string(),
        })
        .unwrap();
    writer
        .write_row(&Row {
            id: 1,
            value: "Mary".to_string(),
        })
        .unwrap();
    writer.flush().unwrap();

    assert_eq!(writer.rows_written(), 2);
    let content = std::fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "0\tJohn\n1\tMary\n");
}

#[test]
fn test_tsv_writer_many_rows() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("siret.tsv");

    // More rows than the flush interval
    let mut populator = Populator::new(Locale::EnUs, Some(&Seed::from(42)));
    let mut writer = TsvWriter::create(&file_path, Escape::Quote).unwrap();
    for row in populator.generate(ColumnKind::Siret, 2500) {
        writer.write_row(&row.unwrap()).unwrap();
    }
    writer.flush().unwrap();

    let content = std::fs::read_to_string(&file_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2500);
    assert!(lines[0].starts_with("0\t"));
    assert!(lines[2499].starts_with("2499\t"));
    assert!(content.ends_with('\n'));
}

#[test]
fn test_tsv_writer_quotes_only_when_needed() {
    let mut writer = TsvWriter::new(Vec::new(), Escape::Quote);
    writer
        .write_row(&Row {
            id: 0,
            value: "Acme, Inc.".to_string(),
        })
        .unwrap();
    writer
        .write_row(&Row {
            id: 1,
            value: "two\tcolumns".to_string(),
        })
        .unwrap();

    let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert_eq!(out, "0\tAcme, Inc.\n1\t\"two\tcolumns\"\n");
}
