use crate::conf::error::ConfigError;
use crate::conf::types::MetricsConfig;
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<MetricsConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: MetricsConfig = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn validate_config(cfg: &MetricsConfig) -> Result<(), ConfigError> {
    if cfg.timestamp_format.trim().is_empty() {
        return Err(ConfigError::InvalidTimestampFormat);
    }
    Ok(())
}
