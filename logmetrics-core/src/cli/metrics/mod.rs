//! Metrics Run
//!
//! Answers one metrics query against one server-activity log.
//!
//! The query is parsed first, so a bad query never touches the filesystem.
//! Only then is the log opened and streamed through the aggregator:
//!
//! metrics_query
//! parse_query
//! Query
//! CsvRecordSource
//! aggregate
//! AggregationState
//! MetricReport
//!
//! Any error along the way ends the run; nothing is reported from a pass that
//! did not reach the end of the file.

mod error;
mod run;

pub use error::MetricsError;
pub use run::run_metrics;
