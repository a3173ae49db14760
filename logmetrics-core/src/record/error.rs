use thiserror::Error;

/// A data row that failed schema coercion. `line` is the 1-based data row
/// ordinal, header excluded.
#[derive(Debug, Error)]
pub enum RecordFormatError {
    #[error("record #{line}: expected 4 fields, found {found}")]
    ShortRow { line: u64, found: usize },

    #[error("record #{line}: timestamp '{value}' does not match '{format}'")]
    InvalidTimestamp {
        line: u64,
        value: String,
        format: String,
    },

    #[error("record #{line}: size '{value}' is not a non-negative integer")]
    InvalidSize { line: u64, value: String },

    #[error("record #{line}: could not be read: {source}")]
    Unreadable {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

impl RecordFormatError {
    pub fn line(&self) -> u64 {
        match self {
            Self::ShortRow { line, .. }
            | Self::InvalidTimestamp { line, .. }
            | Self::InvalidSize { line, .. }
            | Self::Unreadable { line, .. } => *line,
        }
    }
}
