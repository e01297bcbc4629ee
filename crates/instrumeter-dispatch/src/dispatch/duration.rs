use instrumeter_core::category::resolve;
use instrumeter_core::{Attributes, Instrumented};

use crate::clock;
use crate::registry::InstrumentRegistry;

/// Record the duration of a call made on `instance`.
///
/// `start_ns` and `end_ns` come from the same monotonic clock
/// ([`clock::now_ns`]). The instrument is chosen from the first category, in
/// priority order, that the instance declares; endpoint calls also carry the
/// `url` found in `kwargs`.
pub fn record_callable_duration(
    registry: &InstrumentRegistry,
    instance: &(impl Instrumented + ?Sized),
    start_ns: u64,
    end_ns: u64,
    kwargs: &Attributes,
) {
    if !registry.has_any() {
        return;
    }

    let Some(category) = resolve(instance) else {
        tracing::debug!("instrumented call has no duration category, skipped");
        return;
    };

    let Some(instrument) = registry.get(category.duration_instrument()) else {
        return;
    };

    let Some(ms) = clock::duration_ms(start_ns, end_ns) else {
        tracing::warn!(
            category = category.as_str(),
            start_ns,
            end_ns,
            "call ended before it started, duration skipped"
        );
        return;
    };

    instrument.record(ms, &category.duration_attributes(kwargs));
}
