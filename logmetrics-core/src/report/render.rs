use crate::report::types::{MetricReport, OutputFormat};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    query: String,
    kind: &'a str,
    value: u64,
    records: u64,
}

/// One line, without the trailing newline.
pub fn render_report(report: &MetricReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string(&JsonReport {
            query: report.query.to_string(),
            kind: report.query.kind(),
            value: report.value,
            records: report.records,
        }),
    }
}
