use crate::query::QueryFormatError;
use crate::record::RecordFormatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(transparent)]
    Query(#[from] QueryFormatError),

    #[error("log file {path} could not be opened")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log file could not be processed")]
    Record(#[from] RecordFormatError),
}
