use crate::query::Action;
use crate::record::error::RecordFormatError;
use chrono::{NaiveDate, NaiveDateTime};

const FIELD_COUNT: usize = 4;

/// One data row of the server log. Built per row and dropped right after the
/// aggregator has seen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub user: String,
    /// `None` for anything that is not exactly `upload` or `download`.
    pub action: Option<Action>,
    pub size_kb: u64,
}

impl LogRecord {
    /// Coerce the raw fields of data row `line`. Extra trailing fields are
    /// ignored.
    pub fn from_fields<'a, I>(
        line: u64,
        fields: I,
        timestamp_format: &str,
    ) -> Result<Self, RecordFormatError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().map(str::trim).take(FIELD_COUNT).collect();
        let &[timestamp, user, action, size] = fields.as_slice() else {
            return Err(RecordFormatError::ShortRow {
                line,
                found: fields.len(),
            });
        };

        let timestamp = NaiveDateTime::parse_from_str(timestamp, timestamp_format).map_err(
            |_| RecordFormatError::InvalidTimestamp {
                line,
                value: timestamp.to_string(),
                format: timestamp_format.to_string(),
            },
        )?;

        let size_kb = size
            .parse::<u64>()
            .map_err(|_| RecordFormatError::InvalidSize {
                line,
                value: size.to_string(),
            })?;

        Ok(Self {
            timestamp,
            user: user.to_string(),
            action: Action::from_field(action),
            size_kb,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
