//! instrumeter dispatch library entry.
//!
//! Wires the instrument registry, the measurement recorders, the host
//! sampler and the in-process histogram backend into a [`Telemetry`] handle.
//! Consumed by the probe binary (`main.rs`) and by integration tests.

pub mod clock;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod registry;
pub mod sampler;
pub mod telemetry;

pub use registry::{Instrument, InstrumentRegistry, RegistryBuilder};
pub use sampler::{ResourceSampler, SysinfoSampler};
pub use telemetry::Telemetry;
