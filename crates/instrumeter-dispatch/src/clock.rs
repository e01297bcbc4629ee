//! Process-monotonic nanosecond clock.

use std::sync::OnceLock;
use std::time::Instant;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Nanoseconds elapsed since the first call in this process.
///
/// Monotonic; readings from any thread share the same epoch, so a start and
/// end taken on different threads can still be subtracted.
pub fn now_ns() -> u64 {
    let epoch = EPOCH.get_or_init(Instant::now);
    u64::try_from(epoch.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Convert a nanosecond interval to fractional milliseconds.
///
/// `None` when `end_ns < start_ns`.
pub fn duration_ms(start_ns: u64, end_ns: u64) -> Option<f64> {
    end_ns
        .checked_sub(start_ns)
        .map(|delta| delta as f64 / 1_000_000.0)
}
