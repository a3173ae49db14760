use crate::aggregate::aggregate;
use crate::cli::metrics::error::MetricsError;
use crate::conf::MetricsConfig;
use crate::query::parse_query;
use crate::record::CsvRecordSource;
use crate::report::MetricReport;
use std::time::Instant;

pub fn run_metrics(cfg: &MetricsConfig) -> Result<MetricReport, MetricsError> {
    let query = parse_query(&cfg.metrics_query)?;

    let path = &cfg.log_file_path;
    let source = CsvRecordSource::open(path, &cfg.timestamp_format).map_err(|source| {
        MetricsError::SourceUnavailable {
            path: path.clone(),
            source,
        }
    })?;

    tracing::info!(path = %path.display(), query = %query, "processing started");
    let started = Instant::now();

    // `source` is moved in and dropped (file closed) on every return path.
    let state = aggregate(&query, source).inspect_err(|e| {
        tracing::debug!(line = e.line(), error = %e, "record rejected");
    })?;

    tracing::info!(
        records = state.records_seen,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "processing finished"
    );

    Ok(MetricReport::new(query, &state))
}
