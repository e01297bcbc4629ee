//! Test doubles shared by the dispatch integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use instrumeter_core::{Attributes, Category, Instrumented};
use instrumeter_dispatch::{Instrument, InstrumentRegistry, RegistryBuilder, ResourceSampler};

/// Instrument that keeps every sample it receives.
pub struct RecordingInstrument {
    name: String,
    samples: Mutex<Vec<(f64, Attributes)>>,
}

impl RecordingInstrument {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            samples: Mutex::new(Vec::new()),
        })
    }

    pub fn samples(&self) -> Vec<(f64, Attributes)> {
        self.samples.lock().unwrap().clone()
    }
}

impl Instrument for RecordingInstrument {
    fn name(&self) -> &str {
        &self.name
    }

    fn record(&self, amount: f64, attributes: &Attributes) {
        self.samples.lock().unwrap().push((amount, attributes.clone()));
    }
}

/// Registry holding a recording instrument for each name, plus handles to them.
pub fn registry_with(names: &[&str]) -> (InstrumentRegistry, HashMap<String, Arc<RecordingInstrument>>) {
    let mut builder = RegistryBuilder::new();
    let mut handles = HashMap::new();
    for name in names {
        let inst = RecordingInstrument::new(name);
        builder.register(inst.clone()).unwrap();
        handles.insert(name.to_string(), inst);
    }
    (builder.build(), handles)
}

/// Sampler returning fixed readings and counting how often it is asked.
pub struct CountingSampler {
    pub cpu: f64,
    pub memory: f64,
    cpu_calls: AtomicUsize,
    memory_calls: AtomicUsize,
}

impl CountingSampler {
    pub fn new(cpu: f64, memory: f64) -> Arc<Self> {
        Arc::new(Self {
            cpu,
            memory,
            cpu_calls: AtomicUsize::new(0),
            memory_calls: AtomicUsize::new(0),
        })
    }

    pub fn cpu_calls(&self) -> usize {
        self.cpu_calls.load(Ordering::SeqCst)
    }

    pub fn memory_calls(&self) -> usize {
        self.memory_calls.load(Ordering::SeqCst)
    }
}

impl ResourceSampler for CountingSampler {
    fn cpu_percent(&self) -> f64 {
        self.cpu_calls.fetch_add(1, Ordering::SeqCst);
        self.cpu
    }

    fn memory_percent(&self) -> f64 {
        self.memory_calls.fetch_add(1, Ordering::SeqCst);
        self.memory
    }
}

/// Component declaring a single category (or none).
pub struct Component(pub Option<Category>);

impl Instrumented for Component {
    fn category(&self) -> Option<Category> {
        self.0
    }
}
