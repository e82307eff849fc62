// std imports
use std::sync::atomic::{AtomicU64, Ordering::Relaxed};
use std::time::{Duration, Instant};

// third-party imports
use strum::{AsRefStr, EnumCount, EnumIter, IntoEnumIterator};

// ---

/// Matching entry point a measurement is accounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Variant {
    Ascii,
    Utf8,
    Utf8Bounded,
}

// ---

/// Accumulates wall-clock time spent in matching calls, per [`Variant`].
///
/// Counters are atomic, so a single instance can be shared between threads.
/// Matching itself never touches these counters; callers opt in by wrapping
/// calls with [`Timings::measure`].
///
/// # Examples
///
/// ```
/// use fastwild::{Timings, Variant, wildcard::matches_ascii};
///
/// let timings = Timings::new();
/// let matched = timings.measure(Variant::Ascii, || matches_ascii(b"a*", b"abc"));
/// assert!(matched);
/// assert_eq!(timings.calls(Variant::Ascii), 1);
/// assert_eq!(timings.calls(Variant::Utf8), 0);
/// ```
#[derive(Debug, Default)]
pub struct Timings {
    slots: [Slot; Variant::COUNT],
}

impl Timings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `f`, adding its duration to the counters of `variant`.
    #[inline]
    pub fn measure<T>(&self, variant: Variant, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(variant, start.elapsed());
        result
    }

    pub fn record(&self, variant: Variant, elapsed: Duration) {
        let slot = &self.slots[variant as usize];
        slot.nanos
            .fetch_add(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX), Relaxed);
        slot.calls.fetch_add(1, Relaxed);
    }

    pub fn total(&self, variant: Variant) -> Duration {
        Duration::from_nanos(self.slots[variant as usize].nanos.load(Relaxed))
    }

    pub fn calls(&self, variant: Variant) -> u64 {
        self.slots[variant as usize].calls.load(Relaxed)
    }

    pub fn reset(&self) {
        for slot in &self.slots {
            slot.nanos.store(0, Relaxed);
            slot.calls.store(0, Relaxed);
        }
    }

    /// Logs accumulated totals of every variant that was called at least once.
    pub fn report(&self) {
        for variant in Variant::iter() {
            let calls = self.calls(variant);
            if calls == 0 {
                continue;
            }
            log::info!(
                "{}: {} calls in {:.3} seconds",
                variant.as_ref(),
                calls,
                self.total(variant).as_secs_f64()
            );
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    nanos: AtomicU64,
    calls: AtomicU64,
}

#[cfg(test)]
mod tests;
