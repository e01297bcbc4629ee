//! Process-scoped telemetry handle.
//!
//! Built once at startup, then cloned (cheap, `Arc` inside) into every
//! component that records measurements. Tests build isolated handles.

use std::future::Future;
use std::sync::Arc;

use instrumeter_core::names;
use instrumeter_core::{Attributes, Instrumented, MeterError, Result};

use crate::clock;
use crate::config::TelemetrySection;
use crate::dispatch;
use crate::obs::{Histogram, HistogramSet};
use crate::registry::{InstrumentRegistry, RegistryBuilder};
use crate::sampler::{NullSampler, ResourceSampler, SysinfoSampler};

#[derive(Clone)]
pub struct Telemetry {
    inner: Arc<TelemetryInner>,
}

struct TelemetryInner {
    registry: InstrumentRegistry,
    sampler: Arc<dyn ResourceSampler>,
    histograms: HistogramSet,
}

impl Telemetry {
    /// Wrap a registry populated elsewhere (e.g. by an external SDK adapter).
    pub fn new(registry: InstrumentRegistry, sampler: Arc<dyn ResourceSampler>) -> Self {
        Self {
            inner: Arc::new(TelemetryInner {
                registry,
                sampler,
                histograms: HistogramSet::default(),
            }),
        }
    }

    /// Handle with nothing registered; every recorder is a no-op.
    pub fn disabled() -> Self {
        Self::new(InstrumentRegistry::empty(), Arc::new(NullSampler))
    }

    /// Register in-process histograms as configured, sampling the host via `sysinfo`.
    pub fn from_config(cfg: &TelemetrySection) -> Result<Self> {
        if !cfg.enabled {
            tracing::warn!("telemetry disabled by config, measurements will be dropped");
            return Ok(Self::disabled());
        }
        Self::from_config_with_sampler(cfg, Arc::new(SysinfoSampler::new()))
    }

    /// Same as [`Telemetry::from_config`] with an explicit sampler.
    pub fn from_config_with_sampler(
        cfg: &TelemetrySection,
        sampler: Arc<dyn ResourceSampler>,
    ) -> Result<Self> {
        let mut builder = RegistryBuilder::new();
        let mut histograms = HistogramSet::default();

        if cfg.enabled {
            let selected: Vec<(&str, Option<&Vec<f64>>)> = match &cfg.instruments {
                Some(list) => list
                    .iter()
                    .map(|i| (i.name.as_str(), i.buckets.as_ref()))
                    .collect(),
                None => names::KNOWN_INSTRUMENTS
                    .iter()
                    .map(|s| (s.name, None))
                    .collect(),
            };

            for (name, buckets) in selected {
                let Some(spec) = names::known(name) else {
                    return Err(MeterError::UnknownInstrument(name.to_string()));
                };
                let h = match buckets {
                    Some(b) => Histogram::new(spec.name, spec.unit, spec.description, b.clone())?,
                    None => Histogram::from_spec(spec),
                };
                let h = Arc::new(h);
                builder.register(h.clone())?;
                histograms.push(h);
            }
        }

        Ok(Self {
            inner: Arc::new(TelemetryInner {
                registry: builder.build(),
                sampler,
                histograms,
            }),
        })
    }

    pub fn registry(&self) -> &InstrumentRegistry {
        &self.inner.registry
    }

    /// In-process histograms created by `from_config*`; empty otherwise.
    pub fn histograms(&self) -> &HistogramSet {
        &self.inner.histograms
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.registry.has_any()
    }

    pub fn record_cpu_usage(&self) {
        dispatch::record_cpu_usage(&self.inner.registry, self.inner.sampler.as_ref());
    }

    pub fn record_memory_usage(&self) {
        dispatch::record_memory_usage(&self.inner.registry, self.inner.sampler.as_ref());
    }

    pub fn record_prompt_token_length(&self, attributes: &Attributes) {
        dispatch::record_prompt_token_length(&self.inner.registry, attributes);
    }

    pub fn record_command_generator_metrics(&self, attributes: &Attributes) {
        dispatch::record_command_generator_metrics(
            &self.inner.registry,
            self.inner.sampler.as_ref(),
            attributes,
        );
    }

    pub fn record_callable_duration(
        &self,
        instance: &(impl Instrumented + ?Sized),
        start_ns: u64,
        end_ns: u64,
        kwargs: &Attributes,
    ) {
        dispatch::record_callable_duration(&self.inner.registry, instance, start_ns, end_ns, kwargs);
    }

    pub fn record_request_size(&self, attributes: Attributes) {
        dispatch::record_request_size(&self.inner.registry, attributes);
    }

    /// Run `f` and record how long it took against `instance`'s category.
    pub fn time<T>(
        &self,
        instance: &(impl Instrumented + ?Sized),
        kwargs: &Attributes,
        f: impl FnOnce() -> T,
    ) -> T {
        let start = clock::now_ns();
        let out = f();
        self.record_callable_duration(instance, start, clock::now_ns(), kwargs);
        out
    }

    /// Await `fut` and record how long it took against `instance`'s category.
    pub async fn time_future<F: Future>(
        &self,
        instance: &(impl Instrumented + ?Sized),
        kwargs: &Attributes,
        fut: F,
    ) -> F::Output {
        let start = clock::now_ns();
        let out = fut.await;
        self.record_callable_duration(instance, start, clock::now_ns(), kwargs);
        out
    }
}
