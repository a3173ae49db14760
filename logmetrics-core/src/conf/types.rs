use crate::logging::LogFormat;
use crate::record::DEFAULT_TIMESTAMP_FORMAT;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for one run. Every key is optional in the file; the CLI layers
/// its flags on top.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsConfig {
    pub log_file_path: PathBuf,

    pub metrics_query: String,

    /// chrono format string for the log's timestamp column.
    pub timestamp_format: String,

    pub output: OutputFormat,

    pub logging: LoggingConfig,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            log_file_path: PathBuf::from("./server_log.csv"),
            metrics_query: "usersAccessed".to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            output: OutputFormat::Text,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: LogFormat,

    /// Used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: "info".to_string(),
        }
    }
}
