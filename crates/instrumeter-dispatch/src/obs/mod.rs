//! Built-in in-process instrument backend.
//!
//! Used when no external metrics SDK is wired in: histograms are kept in
//! atomics and rendered on demand in Prometheus text format. Transport of
//! the rendered text is left to the caller.

pub mod histogram;

use std::sync::Arc;

pub use histogram::{Histogram, HistogramSnapshot};

/// The histograms created at setup, kept for rendering and inspection.
#[derive(Default, Clone)]
pub struct HistogramSet {
    histograms: Vec<Arc<Histogram>>,
}

impl HistogramSet {
    pub fn push(&mut self, h: Arc<Histogram>) {
        self.histograms.push(h);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Histogram>> {
        use crate::registry::Instrument;
        self.histograms.iter().find(|h| h.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Histogram>> {
        self.histograms.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.histograms.is_empty()
    }

    /// Render every histogram in registration order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for h in &self.histograms {
            h.render(&mut out);
        }
        out
    }
}
