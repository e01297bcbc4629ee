//! Host resource sampling.
//!
//! Values are point-in-time readings taken at the call site. CPU usage is the
//! global percentage since the previous refresh (the first reading covers
//! the interval since the sampler was constructed).

use std::sync::Mutex;

use sysinfo::System;

/// OS utilisation source consumed by the resource recorders.
pub trait ResourceSampler: Send + Sync {
    /// Global CPU usage percentage over the last sampling interval.
    fn cpu_percent(&self) -> f64;
    /// Percentage of total physical memory in use.
    fn memory_percent(&self) -> f64;
}

/// `sysinfo` backed sampler.
pub struct SysinfoSampler {
    system: Mutex<System>,
}

impl SysinfoSampler {
    pub fn new() -> Self {
        let mut system = System::new();
        // Seed the CPU baseline so the first reading has an interval to compare against.
        system.refresh_cpu_usage();
        system.refresh_memory();
        Self {
            system: Mutex::new(system),
        }
    }
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceSampler for SysinfoSampler {
    fn cpu_percent(&self) -> f64 {
        let mut system = self.system.lock().unwrap_or_else(|e| e.into_inner());
        system.refresh_cpu_usage();
        f64::from(system.global_cpu_usage())
    }

    fn memory_percent(&self) -> f64 {
        let mut system = self.system.lock().unwrap_or_else(|e| e.into_inner());
        system.refresh_memory();
        let total = system.total_memory();
        if total == 0 {
            return 0.0;
        }
        system.used_memory() as f64 * 100.0 / total as f64
    }
}

/// Sampler for processes that never record resource usage.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSampler;

impl ResourceSampler for NullSampler {
    fn cpu_percent(&self) -> f64 {
        0.0
    }
    fn memory_percent(&self) -> f64 {
        0.0
    }
}
