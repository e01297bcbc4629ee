use instrumeter_core::names;
use instrumeter_core::Attributes;

use crate::registry::InstrumentRegistry;
use crate::sampler::ResourceSampler;

/// Record global CPU usage. The sampler is not consulted unless the
/// instrument is registered.
pub fn record_cpu_usage(registry: &InstrumentRegistry, sampler: &dyn ResourceSampler) {
    let Some(instrument) = registry.get(names::LLM_COMMAND_GENERATOR_CPU_USAGE) else {
        return;
    };
    instrument.record(sampler.cpu_percent(), &Attributes::new());
}

/// Record the share of physical memory in use.
pub fn record_memory_usage(registry: &InstrumentRegistry, sampler: &dyn ResourceSampler) {
    let Some(instrument) = registry.get(names::LLM_COMMAND_GENERATOR_MEMORY_USAGE) else {
        return;
    };
    instrument.record(sampler.memory_percent(), &Attributes::new());
}

/// Record the prompt token count carried in `attributes`, if any.
///
/// The registry is not consulted when the bag has no token count.
pub fn record_prompt_token_length(registry: &InstrumentRegistry, attributes: &Attributes) {
    let Some(value) = attributes.get(names::PROMPT_TOKEN_LENGTH_ATTR) else {
        return;
    };
    let Some(instrument) = registry.get(names::LLM_COMMAND_GENERATOR_PROMPT_TOKEN_USAGE) else {
        return;
    };
    match value.as_i64() {
        Some(tokens) => instrument.record(tokens as f64, &Attributes::new()),
        None => {
            tracing::debug!(value = %value, "prompt token length is not an integer, skipped");
        }
    }
}

/// CPU, memory and prompt-token measurements for one command generation.
///
/// Gated once on the registry being populated; each step may still no-op on
/// its own.
pub fn record_command_generator_metrics(
    registry: &InstrumentRegistry,
    sampler: &dyn ResourceSampler,
    attributes: &Attributes,
) {
    if !registry.has_any() {
        return;
    }
    record_cpu_usage(registry, sampler);
    record_memory_usage(registry, sampler);
    record_prompt_token_length(registry, attributes);
}

/// Record an outbound request body size.
///
/// The size key is taken out of the bag and whatever remains becomes the
/// sample's attribute set. A missing size records `0`.
pub fn record_request_size(registry: &InstrumentRegistry, mut attributes: Attributes) {
    if !registry.has_any() {
        return;
    }
    let size = match attributes.remove(names::REQUEST_BODY_SIZE_IN_BYTES_ATTR) {
        Some(v) => v.as_f64().unwrap_or_else(|| {
            tracing::debug!(value = %v, "request body size is not numeric, recording 0");
            0.0
        }),
        None => 0.0,
    };
    let Some(instrument) = registry.get(names::CLIENT_REQUEST_BODY_SIZE) else {
        return;
    };
    instrument.record(size, &attributes);
}
