use std::collections::HashSet;

use serde::Deserialize;

use instrumeter_core::names;
use instrumeter_core::{MeterError, Result};

use crate::obs::histogram::validate_buckets;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeterConfig {
    pub version: u32,

    #[serde(default)]
    pub telemetry: TelemetrySection,

    #[serde(default)]
    pub probe: ProbeSection,
}

impl MeterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MeterError::UnsupportedVersion(self.version));
        }
        self.telemetry.validate()?;
        self.probe.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetrySection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// `None` registers every known instrument.
    #[serde(default)]
    pub instruments: Option<Vec<InstrumentConfig>>,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            instruments: None,
        }
    }
}

impl TelemetrySection {
    pub fn validate(&self) -> Result<()> {
        let Some(list) = &self.instruments else {
            return Ok(());
        };
        let mut seen = HashSet::new();
        for inst in list {
            if names::known(&inst.name).is_none() {
                return Err(MeterError::UnknownInstrument(inst.name.clone()));
            }
            if !seen.insert(inst.name.as_str()) {
                return Err(MeterError::DuplicateInstrument(inst.name.clone()));
            }
            if let Some(b) = &inst.buckets {
                validate_buckets(&inst.name, b)?;
            }
        }
        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstrumentConfig {
    pub name: String,
    /// Overrides the unit's default bucket bounds.
    #[serde(default)]
    pub buckets: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            iterations: default_iterations(),
        }
    }
}

impl ProbeSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=60000).contains(&self.interval_ms) {
            return Err(MeterError::BadConfig(
                "probe.interval_ms must be between 100 and 60000".into(),
            ));
        }
        if !(1..=10000).contains(&self.iterations) {
            return Err(MeterError::BadConfig(
                "probe.iterations must be between 1 and 10000".into(),
            ));
        }
        Ok(())
    }
}

fn default_interval_ms() -> u64 {
    1000
}
fn default_iterations() -> u32 {
    5
}
