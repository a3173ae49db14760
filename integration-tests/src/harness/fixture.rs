use chrono::{NaiveDate, NaiveDateTime};
use logmetrics_core::conf::MetricsConfig;
use logmetrics_core::record::DEFAULT_TIMESTAMP_FORMAT;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "timestamp,username,operation,size";

/// One data row, written verbatim so tests can also produce broken rows.
#[derive(Debug, Clone)]
pub struct Row(pub String);

impl Row {
    pub fn new(timestamp: NaiveDateTime, user: &str, action: &str, size: &str) -> Self {
        Row(format!(
            "{},{user},{action},{size}",
            timestamp.format(DEFAULT_TIMESTAMP_FORMAT)
        ))
    }

    /// A row at noon on 12 April 2020.
    pub fn simple(user: &str, action: &str, size_kb: u64) -> Self {
        Row::new(at(2020, 4, 12, 12), user, action, &size_kb.to_string())
    }

    pub fn raw(line: &str) -> Self {
        Row(line.to_string())
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid fixture timestamp")
}

/// A server log written into its own temp dir, removed on drop.
pub struct LogFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl LogFixture {
    pub fn new(rows: &[Row]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("server_log.csv");

        let mut body = String::from(HEADER);
        body.push('\n');
        for row in rows {
            body.push_str(&row.0);
            body.push('\n');
        }
        fs::write(&path, body).expect("failed to write fixture log");

        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self, query: &str) -> MetricsConfig {
        MetricsConfig {
            log_file_path: self.path.clone(),
            metrics_query: query.to_string(),
            ..MetricsConfig::default()
        }
    }
}
