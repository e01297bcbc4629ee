//! In-process histogram instrument.
//!
//! Labels are flattened into sorted key vectors to keep deterministic
//! ordering. Bucket bounds are fixed at construction. The running sum is an
//! `f64` stored as bits in an `AtomicU64` and updated with a CAS loop.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use instrumeter_core::names::{InstrumentSpec, Unit};
use instrumeter_core::{Attributes, MeterError, Result};

use crate::registry::Instrument;

/// Percent gauges sampled as histograms: 0..=100.
pub const PERCENT_BUCKETS: &[f64] = &[5.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0, 100.0];

/// LLM and HTTP call latency: 10ms to 2min.
pub const MILLIS_BUCKETS: &[f64] = &[
    10.0, 50.0, 100.0, 250.0, 500.0, 1_000.0, 2_500.0, 5_000.0, 10_000.0, 30_000.0, 120_000.0,
];

/// Request bodies: 256B to 16MiB.
pub const BYTES_BUCKETS: &[f64] = &[
    256.0, 1_024.0, 4_096.0, 16_384.0, 65_536.0, 262_144.0, 1_048_576.0, 16_777_216.0,
];

/// Prompt lengths in tokens.
pub const TOKEN_BUCKETS: &[f64] = &[
    64.0, 256.0, 512.0, 1_024.0, 2_048.0, 4_096.0, 8_192.0, 16_384.0, 32_768.0,
];

/// Default bucket layout for a unit.
pub fn default_buckets(unit: Unit) -> &'static [f64] {
    match unit {
        Unit::Percent => PERCENT_BUCKETS,
        Unit::Milliseconds => MILLIS_BUCKETS,
        Unit::Bytes => BYTES_BUCKETS,
        Unit::Tokens => TOKEN_BUCKETS,
    }
}

/// Reject empty, non-finite, or non-increasing bucket bounds.
pub fn validate_buckets(name: &str, bounds: &[f64]) -> Result<()> {
    if bounds.is_empty() {
        return Err(MeterError::BadConfig(format!("{name}: buckets must not be empty")));
    }
    if bounds.iter().any(|b| !b.is_finite()) {
        return Err(MeterError::BadConfig(format!("{name}: buckets must be finite")));
    }
    if bounds.windows(2).any(|w| w[0] >= w[1]) {
        return Err(MeterError::BadConfig(format!(
            "{name}: buckets must be strictly increasing"
        )));
    }
    Ok(())
}

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn add_f64(cell: &AtomicU64, v: f64) {
    let mut cur = cell.load(Ordering::Relaxed);
    loop {
        let next = (f64::from_bits(cur) + v).to_bits();
        match cell.compare_exchange_weak(cur, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return,
            Err(actual) => cur = actual,
        }
    }
}

struct AtomicHistogram {
    count: AtomicU64,
    sum_bits: AtomicU64,
    buckets: Vec<AtomicU64>,
}

impl AtomicHistogram {
    fn new(n: usize) -> Self {
        Self {
            count: AtomicU64::new(0),
            sum_bits: AtomicU64::new(0f64.to_bits()),
            buckets: (0..n).map(|_| AtomicU64::new(0)).collect(),
        }
    }
}

/// Point-in-time view of one label set.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    pub count: u64,
    pub sum: f64,
    /// Cumulative counts, one per bound.
    pub buckets: Vec<(f64, u64)>,
}

pub struct Histogram {
    name: String,
    unit: Unit,
    description: String,
    bounds: Vec<f64>,
    map: DashMap<Vec<(String, String)>, AtomicHistogram>,
}

impl Histogram {
    /// Build with explicit bounds. Bounds must pass [`validate_buckets`].
    pub fn new(
        name: impl Into<String>,
        unit: Unit,
        description: impl Into<String>,
        bounds: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        validate_buckets(&name, &bounds)?;
        Ok(Self {
            name,
            unit,
            description: description.into(),
            bounds,
            map: DashMap::new(),
        })
    }

    /// Build from a known instrument with its unit's default buckets.
    pub fn from_spec(spec: &InstrumentSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            unit: spec.unit,
            description: spec.description.to_string(),
            bounds: default_buckets(spec.unit).to_vec(),
            map: DashMap::new(),
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Observe a value and increment cumulative buckets.
    pub fn observe(&self, labels: Vec<(String, String)>, v: f64) {
        let hist = self
            .map
            .entry(labels)
            .or_insert_with(|| AtomicHistogram::new(self.bounds.len()));

        hist.count.fetch_add(1, Ordering::Relaxed);
        add_f64(&hist.sum_bits, v);

        for (i, &b) in self.bounds.iter().enumerate() {
            if v <= b {
                hist.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Snapshot the series for an attribute set, if it was ever recorded.
    pub fn snapshot(&self, attributes: &Attributes) -> Option<HistogramSnapshot> {
        let hist = self.map.get(&attributes.labels())?;
        Some(HistogramSnapshot {
            count: hist.count.load(Ordering::Relaxed),
            sum: f64::from_bits(hist.sum_bits.load(Ordering::Relaxed)),
            buckets: self
                .bounds
                .iter()
                .zip(hist.buckets.iter())
                .map(|(&b, c)| (b, c.load(Ordering::Relaxed)))
                .collect(),
        })
    }

    /// Total samples across every label set.
    pub fn total_count(&self) -> u64 {
        self.map
            .iter()
            .map(|r| r.value().count.load(Ordering::Relaxed))
            .sum()
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self, out: &mut String) {
        let name = &self.name;
        let _ = writeln!(out, "# HELP {} {} ({})", name, self.description, self.unit.as_str());
        let _ = writeln!(out, "# TYPE {} histogram", name);

        let mut series: Vec<_> = self.map.iter().map(|r| r.key().clone()).collect();
        series.sort();

        for key in series {
            let Some(hist) = self.map.get(&key) else { continue };
            let label_str = key
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let prefix = if label_str.is_empty() {
                String::new()
            } else {
                format!("{},", label_str)
            };

            for (i, le) in self.bounds.iter().enumerate() {
                let count = hist.buckets[i].load(Ordering::Relaxed);
                let _ = writeln!(out, "{}_bucket{{{}le=\"{}\"}} {}", name, prefix, le, count);
            }
            let count = hist.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_bucket{{{}le=\"+Inf\"}} {}", name, prefix, count);

            let sum = f64::from_bits(hist.sum_bits.load(Ordering::Relaxed));
            let _ = writeln!(out, "{}_sum{{{}}} {}", name, label_str, sum);
            let _ = writeln!(out, "{}_count{{{}}} {}", name, label_str, count);
        }
    }
}

impl Instrument for Histogram {
    fn name(&self) -> &str {
        &self.name
    }

    fn record(&self, amount: f64, attributes: &Attributes) {
        self.observe(attributes.labels(), amount);
    }
}
