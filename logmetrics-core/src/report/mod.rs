mod render;
mod types;

pub use render::render_report;
pub use types::{MetricReport, OutputFormat};
