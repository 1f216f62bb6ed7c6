//! Per-search timing and step totals.
//!
//! With the `profiling` feature every [`Timer`] adds its lifetime, and the
//! search steps handed to it, to a per-label [`Sample`]; [`report`] prints
//! the table with a steps-per-millisecond rate for each search. Without the
//! feature the timer is a no-op and [`snapshot`] is always empty.

/// Accumulated totals for one label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    /// Timers dropped under this label.
    pub calls: u64,
    /// Sum of their lifetimes.
    pub total_nanos: u128,
    /// Sum of the search steps attributed to them.
    pub steps: u64,
}

impl Sample {
    /// Search steps per millisecond of wall-clock time, `0.0` with no time.
    #[must_use]
    pub fn steps_per_ms(&self) -> f64 {
        if self.total_nanos == 0 {
            return 0.0;
        }
        self.steps as f64 * 1_000_000.0 / self.total_nanos as f64
    }
}

#[cfg(feature = "profiling")]
mod enabled {
    use std::sync::OnceLock;
    use std::time::Instant;

    use dashmap::DashMap;

    use super::Sample;

    static SAMPLES: OnceLock<DashMap<&'static str, Sample>> = OnceLock::new();

    fn samples() -> &'static DashMap<&'static str, Sample> {
        SAMPLES.get_or_init(DashMap::new)
    }

    /// Records its lifetime and the steps it was given under `label`.
    pub struct Timer {
        label: &'static str,
        start: Instant,
        steps: u64,
    }

    impl Timer {
        /// Start timing `label`.
        #[inline]
        pub fn new(label: &'static str) -> Self {
            Self {
                label,
                start: Instant::now(),
                steps: 0,
            }
        }

        /// Attribute `steps` search steps to this call.
        #[inline]
        pub const fn add_steps(&mut self, steps: u64) {
            self.steps += steps;
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let nanos = self.start.elapsed().as_nanos();
            let mut sample = samples().entry(self.label).or_default();
            sample.calls += 1;
            sample.total_nanos += nanos;
            sample.steps += self.steps;
        }
    }

    /// Every label with its totals, slowest first.
    pub fn snapshot() -> Vec<(&'static str, Sample)> {
        let mut rows: Vec<_> = samples()
            .iter()
            .map(|kv| (*kv.key(), *kv.value()))
            .collect();
        rows.sort_by(|a, b| b.1.total_nanos.cmp(&a.1.total_nanos));
        rows
    }

    /// Print [`snapshot`] as a table.
    pub fn report() {
        println!("==== npc_solver profile ====");
        for (label, sample) in snapshot() {
            let total_ms = sample.total_nanos as f64 / 1_000_000.0;
            println!(
                "{label:<32} calls={:<8} total={total_ms:>9.3} ms steps={:<12} rate={:>10.1} steps/ms",
                sample.calls,
                sample.steps,
                sample.steps_per_ms()
            );
        }
        println!("============================");
    }
}

#[cfg(not(feature = "profiling"))]
mod disabled {
    use super::Sample;

    /// No-op timer.
    #[derive(Clone, Copy)]
    pub struct Timer;

    impl Timer {
        /// No-op.
        #[inline]
        pub const fn new(_: &'static str) -> Self {
            Self
        }

        /// No-op.
        #[inline]
        pub const fn add_steps(&mut self, _: u64) {}
    }

    /// Always empty.
    pub const fn snapshot() -> Vec<(&'static str, Sample)> {
        Vec::new()
    }

    /// No-op.
    pub const fn report() {}
}

#[cfg(feature = "profiling")]
pub use enabled::*;

#[cfg(not(feature = "profiling"))]
pub use disabled::*;
