//! Instrument registry.
//!
//! Populated once through [`RegistryBuilder`] during setup, then frozen into an
//! [`InstrumentRegistry`] that has no mutating methods. Lookups are plain
//! `HashMap` reads, so the registry can be shared across threads behind an
//! `Arc` without locking.

use std::collections::HashMap;
use std::sync::Arc;

use instrumeter_core::{Attributes, MeterError, Result};

/// A named recorder of numeric measurements, owned by the metrics backend.
pub trait Instrument: Send + Sync {
    fn name(&self) -> &str;

    /// Record one sample. Must not block; backend failures stay in the backend.
    fn record(&self, amount: f64, attributes: &Attributes);
}

/// Setup-time registration surface.
#[derive(Default)]
pub struct RegistryBuilder {
    instruments: HashMap<String, Arc<dyn Instrument>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instrument under its own name. A second registration of
    /// the same name is rejected.
    pub fn register(&mut self, instrument: Arc<dyn Instrument>) -> Result<()> {
        let name = instrument.name().to_string();
        if self.instruments.contains_key(&name) {
            return Err(MeterError::DuplicateInstrument(name));
        }
        tracing::debug!(instrument = %name, "instrument registered");
        self.instruments.insert(name, instrument);
        Ok(())
    }

    pub fn build(self) -> InstrumentRegistry {
        tracing::info!(instruments = self.instruments.len(), "instrument registry ready");
        InstrumentRegistry {
            instruments: self.instruments,
        }
    }
}

/// Read-only name -> instrument mapping.
#[derive(Default)]
pub struct InstrumentRegistry {
    instruments: HashMap<String, Arc<dyn Instrument>>,
}

impl InstrumentRegistry {
    /// Registry for a process with telemetry disabled.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up an instrument. `None` means the signal is not configured.
    pub fn get(&self, name: &str) -> Option<&dyn Instrument> {
        self.instruments.get(name).map(|i| i.as_ref())
    }

    /// Owned handle, for callers that outlive the borrow.
    pub fn get_arc(&self, name: &str) -> Option<Arc<dyn Instrument>> {
        self.instruments.get(name).cloned()
    }

    /// True iff at least one instrument was registered during setup.
    pub fn has_any(&self) -> bool {
        !self.instruments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.instruments.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}
