use crate::query::Action;
use crate::record::{CsvRecordSource, DEFAULT_TIMESTAMP_FORMAT, RecordFormatError};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::ErrorKind;
use tempfile::tempdir;

const HEADER: &str = "timestamp,username,operation,size\n";

fn source(body: &str) -> CsvRecordSource<&[u8]> {
    CsvRecordSource::from_reader(body.as_bytes(), DEFAULT_TIMESTAMP_FORMAT)
}

#[test]
fn header_is_skipped_without_validation() {
    // Arrange
    let body = "this,header,has,nothing,to,do,with,the,schema\n\
                Sun Apr 12 22:10:38 UTC 2020,sarah94,upload,10\n";

    // Act
    let records: Vec<_> = source(body).collect::<Result<_, _>>().unwrap();

    // Assert
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user, "sarah94");
}

#[test]
fn rows_are_yielded_in_order() {
    let body = format!(
        "{HEADER}\
         Sun Apr 12 22:10:38 UTC 2020,sarah94,upload,10\n\
         Mon Apr 13 01:00:00 UTC 2020,jeff22,download,20\n\
         Tue Apr 14 12:30:00 UTC 2020,ryan75,upload,30\n"
    );

    let records: Vec<_> = source(&body).collect::<Result<_, _>>().unwrap();

    let summary: Vec<_> = records
        .iter()
        .map(|r| (r.user.as_str(), r.action, r.size_kb))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("sarah94", Some(Action::Upload), 10),
            ("jeff22", Some(Action::Download), 20),
            ("ryan75", Some(Action::Upload), 30),
        ]
    );
}

#[test]
fn header_only_input_is_empty() {
    assert_eq!(source(HEADER).count(), 0);
    assert_eq!(source("").count(), 0);
}

#[test]
fn bad_row_reports_data_row_ordinal_and_halts() {
    // Arrange
    let body = format!(
        "{HEADER}\
         Sun Apr 12 22:10:38 UTC 2020,sarah94,upload,10\n\
         Mon Apr 13 01:00:00 UTC 2020,jeff22,download,twenty\n\
         Tue Apr 14 12:30:00 UTC 2020,ryan75,upload,30\n"
    );
    let mut src = source(&body);

    // Act
    let first = src.next().unwrap();
    let second = src.next().unwrap();
    let third = src.next();

    // Assert
    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(RecordFormatError::InvalidSize { line: 2, .. })
    ));
    assert!(third.is_none());
}

#[test]
fn short_row_is_reported_not_rejected_by_csv_layer() {
    let body = format!(
        "{HEADER}\
         Sun Apr 12 22:10:38 UTC 2020,sarah94,upload,10\n\
         Sun Apr 12 22:10:38 UTC 2020,sarah94\n"
    );

    let err = source(&body).collect::<Result<Vec<_>, _>>().unwrap_err();

    assert!(matches!(err, RecordFormatError::ShortRow { line: 2, found: 2 }));
}

#[test]
fn quoted_fields_are_unquoted() {
    let body = format!("{HEADER}\"Sun Apr 12 22:10:38 UTC 2020\",\"sarah, 94\",upload,10\n");

    let records: Vec<_> = source(&body).collect::<Result<_, _>>().unwrap();

    assert_eq!(records[0].user, "sarah, 94");
}

#[test]
fn open_reads_from_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("server_log.csv");
    fs::write(
        &path,
        format!("{HEADER}Sun Apr 12 22:10:38 UTC 2020,sarah94,upload,10\n"),
    )
    .unwrap();

    // Act
    let src = CsvRecordSource::open(&path, DEFAULT_TIMESTAMP_FORMAT).unwrap();

    // Assert
    assert_eq!(src.count(), 1);
}

#[test]
fn open_missing_file_fails() {
    let dir = tempdir().unwrap();

    let err = CsvRecordSource::open(dir.path().join("nope.csv"), DEFAULT_TIMESTAMP_FORMAT)
        .err()
        .unwrap();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}
