mod error;
mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, validate_config};
pub use types::{LoggingConfig, MetricsConfig};
