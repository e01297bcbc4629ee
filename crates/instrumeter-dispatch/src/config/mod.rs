//! Telemetry config loader (strict parsing).

pub mod schema;

use std::fs;

use instrumeter_core::{MeterError, Result};

pub use schema::{InstrumentConfig, MeterConfig, ProbeSection, TelemetrySection};

pub fn load_from_file(path: &str) -> Result<MeterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MeterError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MeterConfig> {
    let cfg: MeterConfig =
        serde_yaml::from_str(s).map_err(|e| MeterError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
