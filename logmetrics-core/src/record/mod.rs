//! Record source: turns the rows of a server-activity CSV into [`LogRecord`]s.
//!
//! The header row is skipped without looking at it. Every data row must have
//! the fields `timestamp,user,action,size` in that order. A row that cannot be
//! coerced stops the stream with a [`RecordFormatError`] naming its 1-based
//! position among the data rows.

mod error;
mod source;
mod tests;
mod types;

pub use error::RecordFormatError;
pub use source::{CsvRecordSource, DEFAULT_TIMESTAMP_FORMAT};
pub use types::LogRecord;
