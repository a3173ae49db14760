use thiserror::Error;

/// Raised before any file access when the metrics query cannot be understood.
///
/// Every variant carries the query string exactly as the user typed it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryFormatError {
    #[error("metrics query '{query}' is not an accepted query format")]
    UnsupportedQuery { query: String },

    #[error("metrics query '{query}' needs an integer threshold in brackets, e.g. uploadsGreaterThan[500]")]
    InvalidThreshold { query: String },

    #[error("metrics query '{query}' has date '{date}', expected DD MM YYYY")]
    InvalidDate { query: String, date: String },

    #[error("metrics query '{query}' is missing a user, e.g. uploadsByUser[alice]OnDate[01 02 2006]")]
    MissingUser { query: String },

    #[error("metrics query '{query}' is missing a date, e.g. uploadsByUser[alice]OnDate[01 02 2006]")]
    MissingDate { query: String },
}

impl QueryFormatError {
    pub fn unsupported(query: impl Into<String>) -> Self {
        Self::UnsupportedQuery {
            query: query.into(),
        }
    }
}
