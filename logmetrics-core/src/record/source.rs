use crate::record::error::RecordFormatError;
use crate::record::types::LogRecord;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Layout of the log's timestamp column, e.g. `Sun Apr 12 22:10:38 UTC 2020`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// Streams [`LogRecord`]s out of CSV input, one row at a time.
///
/// The first error ends the stream; later calls to `next` return `None`.
/// The underlying reader is owned and closed when the source is dropped.
pub struct CsvRecordSource<R> {
    reader: csv::Reader<R>,
    row: StringRecord,
    line: u64,
    timestamp_format: String,
    halted: bool,
}

impl CsvRecordSource<File> {
    pub fn open(path: impl AsRef<Path>, timestamp_format: &str) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file, timestamp_format))
    }
}

impl<R: Read> CsvRecordSource<R> {
    pub fn from_reader(reader: R, timestamp_format: &str) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            // Field counts are checked per row so a short row is reported with
            // its position instead of as a generic CSV error.
            .flexible(true)
            .from_reader(reader);

        Self {
            reader,
            row: StringRecord::new(),
            line: 0,
            timestamp_format: timestamp_format.to_string(),
            halted: false,
        }
    }
}

impl<R: Read> Iterator for CsvRecordSource<R> {
    type Item = Result<LogRecord, RecordFormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        let result = match self.reader.read_record(&mut self.row) {
            Ok(false) => return None,
            Ok(true) => {
                self.line += 1;
                LogRecord::from_fields(self.line, self.row.iter(), &self.timestamp_format)
            }
            Err(source) => {
                self.line += 1;
                Err(RecordFormatError::Unreadable {
                    line: self.line,
                    source,
                })
            }
        };

        self.halted = result.is_err();
        Some(result)
    }
}
